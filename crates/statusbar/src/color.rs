//! Entry colors.
//!
//! A status bar color is either a raw color string handed straight to the
//! renderer, or a symbolic reference into the active theme. Resolution of theme
//! tokens happens outside this crate, so both forms are kept intact.

use serde::{Deserialize, Serialize};

/// Symbolic reference to a theme color (e.g. `statusBarItem.errorForeground`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeColor {
	/// Theme color identifier.
	pub id: String,
}

impl ThemeColor {
	pub fn new(id: impl Into<String>) -> Self {
		Self { id: id.into() }
	}
}

/// Foreground or background color of a status bar entry.
///
/// On the wire a literal is a bare string and a theme reference is an
/// `{"id": ..}` object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryColor {
	/// Raw color string such as `#ff0000` or `red`.
	Literal(String),
	/// Color looked up in the active theme.
	Theme(ThemeColor),
}

impl EntryColor {
	/// Creates a raw color.
	pub fn literal(color: impl Into<String>) -> Self {
		Self::Literal(color.into())
	}

	/// Creates a theme color reference.
	pub fn theme(id: impl Into<String>) -> Self {
		Self::Theme(ThemeColor::new(id))
	}

	/// Returns the theme token, if this is a theme reference.
	pub fn as_theme(&self) -> Option<&ThemeColor> {
		match self {
			Self::Theme(color) => Some(color),
			Self::Literal(_) => None,
		}
	}

	/// Returns the raw color string, if this is a literal.
	pub fn as_literal(&self) -> Option<&str> {
		match self {
			Self::Literal(color) => Some(color),
			Self::Theme(_) => None,
		}
	}
}

impl From<ThemeColor> for EntryColor {
	fn from(color: ThemeColor) -> Self {
		Self::Theme(color)
	}
}
