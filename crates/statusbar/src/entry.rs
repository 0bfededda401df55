//! Declarative status bar entry content and placement.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::EntryColor;

/// Side of the status bar an entry anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
	/// Left-anchored entries.
	Left,
	/// Right-anchored entries.
	Right,
}

impl Alignment {
	/// Both sides, left first.
	pub const ALL: [Alignment; 2] = [Alignment::Left, Alignment::Right];
}

/// Ordering weight of an entry within its alignment group.
///
/// Higher priorities are placed first, left to right. Fractional values are
/// allowed so callers can slot an entry between two existing ones.
#[derive(Debug, Clone, Copy)]
pub struct Priority(f64);

impl Priority {
	/// Priority used when none is given. Sorts after every finite priority.
	pub const LOWEST: Priority = Priority(f64::NEG_INFINITY);

	/// Wraps a raw priority. NaN collapses to [`Priority::LOWEST`] and `-0.0`
	/// to `0.0`.
	pub fn new(value: f64) -> Self {
		if value.is_nan() {
			Self::LOWEST
		} else if value == 0.0 {
			Self(0.0)
		} else {
			Self(value)
		}
	}

	pub fn value(self) -> f64 {
		self.0
	}
}

impl Default for Priority {
	fn default() -> Self {
		Self::LOWEST
	}
}

impl From<Option<f64>> for Priority {
	fn from(value: Option<f64>) -> Self {
		value.map_or(Self::LOWEST, Self::new)
	}
}

impl From<f64> for Priority {
	fn from(value: f64) -> Self {
		Self::new(value)
	}
}

impl PartialEq for Priority {
	fn eq(&self, other: &Self) -> bool {
		self.cmp(other) == Ordering::Equal
	}
}

impl Eq for Priority {}

impl PartialOrd for Priority {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Priority {
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.total_cmp(&other.0)
	}
}

/// Content of a status bar entry.
///
/// `text` may embed icon placeholders such as `${sync}`; they are stored as
/// written and substituted by the renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEntry {
	/// Text to show.
	pub text: String,
	/// Hover text.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tooltip: Option<String>,
	/// Foreground color.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub color: Option<EntryColor>,
	/// Background color.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub background_color: Option<EntryColor>,
	/// Command executed on click, resolved by the host's command registry.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub command: Option<String>,
	/// Arguments passed to `command`.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub arguments: Vec<Value>,
	/// Whether to draw a beak above the entry.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub show_beak: Option<bool>,
}

impl StatusEntry {
	/// Creates an entry showing `text` with no decorations.
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			..Self::default()
		}
	}

	pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
		self.tooltip = Some(tooltip.into());
		self
	}

	pub fn with_color(mut self, color: EntryColor) -> Self {
		self.color = Some(color);
		self
	}

	pub fn with_background_color(mut self, color: EntryColor) -> Self {
		self.background_color = Some(color);
		self
	}

	/// Sets the click command and its arguments.
	pub fn with_command(mut self, command: impl Into<String>, arguments: Vec<Value>) -> Self {
		self.command = Some(command.into());
		self.arguments = arguments;
		self
	}

	pub fn with_beak(mut self, show_beak: bool) -> Self {
		self.show_beak = Some(show_beak);
		self
	}
}
