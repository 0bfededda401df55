use std::sync::Weak;

use tracing::{debug, trace};

use super::{EntryEvent, EntrySnapshot, Shared};
use crate::entry::{Alignment, Priority, StatusEntry};
use crate::key::EntryKey;

/// Caller-owned handle to one registered entry.
///
/// The accessor is the only way to change the entry's content or to remove
/// it. Identity (`id`, `name`, `alignment`, `priority`) is fixed at
/// registration. Dropping the accessor disposes the entry.
pub struct EntryAccessor {
	shared: Weak<Shared>,
	key: EntryKey,
	id: String,
	name: String,
	alignment: Alignment,
	priority: Priority,
	disposed: bool,
}

impl EntryAccessor {
	pub(super) fn new(
		shared: Weak<Shared>,
		key: EntryKey,
		id: String,
		name: String,
		alignment: Alignment,
		priority: Priority,
	) -> Self {
		Self {
			shared,
			key,
			id,
			name,
			alignment,
			priority,
			disposed: false,
		}
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn alignment(&self) -> Alignment {
		self.alignment
	}

	pub fn priority(&self) -> Priority {
		self.priority
	}

	pub fn is_disposed(&self) -> bool {
		self.disposed
	}

	/// Replaces the entry's content.
	///
	/// Has no effect once the accessor is disposed or the service is gone.
	pub fn update(&self, entry: StatusEntry) {
		if self.disposed {
			trace!(key = %self.key, id = %self.id, "Ignoring update of disposed status bar entry");
			return;
		}
		let Some(shared) = self.shared.upgrade() else {
			return;
		};

		let updated = {
			let mut state = shared.state.lock();
			match state.entries.get_mut(self.key) {
				Some(registered) => {
					registered.content = entry;
					true
				}
				None => false,
			}
		};

		if updated {
			trace!(key = %self.key, id = %self.id, "Updated status bar entry");
			shared.entry_events.fire(&EntryEvent::Updated {
				id: self.id.clone(),
				alignment: self.alignment,
			});
		}
	}

	/// Current state of the entry, or `None` once disposed.
	pub fn snapshot(&self) -> Option<EntrySnapshot> {
		if self.disposed {
			return None;
		}
		let shared = self.shared.upgrade()?;
		let state = shared.state.lock();
		state
			.entries
			.get(self.key)
			.map(|registered| registered.snapshot(&state.visibility))
	}

	/// Removes the entry. Calling it again is a no-op.
	pub fn dispose(&mut self) {
		if std::mem::replace(&mut self.disposed, true) {
			return;
		}
		let Some(shared) = self.shared.upgrade() else {
			return;
		};

		let removed = shared.state.lock().entries.remove(self.key);
		if removed.is_some() {
			debug!(key = %self.key, id = %self.id, "Removed status bar entry");
			shared.entry_events.fire(&EntryEvent::Removed {
				id: self.id.clone(),
				alignment: self.alignment,
			});
		}
	}
}

impl Drop for EntryAccessor {
	fn drop(&mut self) {
		self.dispose();
	}
}

impl std::fmt::Debug for EntryAccessor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EntryAccessor")
			.field("key", &self.key)
			.field("id", &self.id)
			.field("alignment", &self.alignment)
			.field("priority", &self.priority)
			.field("disposed", &self.disposed)
			.finish()
	}
}
