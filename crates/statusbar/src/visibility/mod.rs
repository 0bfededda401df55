//! Per-id visibility preferences.
//!
//! Preferences are keyed by entry id and outlive any registration: hiding an
//! id that has no live entry yet hides every entry later registered under it.

use rustc_hash::FxHashMap;


/// Visibility state keyed by entry id. Ids without a stored value are visible.
#[derive(Debug, Clone, Default)]
pub struct VisibilityPrefs {
	prefs: FxHashMap<String, bool>,
}

impl VisibilityPrefs {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates preferences with every id in `hidden` hidden.
	pub fn with_hidden<I, S>(hidden: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			prefs: hidden.into_iter().map(|id| (id.into(), false)).collect(),
		}
	}

	/// Effective visibility of `id`.
	pub fn is_visible(&self, id: &str) -> bool {
		self.prefs.get(id).copied().unwrap_or(true)
	}

	/// Stores `visible` for `id`.
	///
	/// Returns `true` if the effective visibility changed.
	pub fn set(&mut self, id: &str, visible: bool) -> bool {
		let before = self.is_visible(id);
		if visible {
			// Visible is the default; dropping the key keeps the map to hidden ids.
			self.prefs.remove(id);
		} else {
			self.prefs.insert(id.to_string(), false);
		}
		before != visible
	}

	/// Hidden ids in lexical order.
	pub fn hidden_ids(&self) -> Vec<String> {
		let mut ids: Vec<String> = self
			.prefs
			.iter()
			.filter(|&(_, &visible)| !visible)
			.map(|(id, _)| id.clone())
			.collect();
		ids.sort_unstable();
		ids
	}
}
