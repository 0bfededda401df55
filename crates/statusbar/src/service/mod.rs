//! Status bar entry registry.
//!
//! [`StatusbarService`] owns every registered entry together with the per-id
//! visibility preferences. Registration hands back an [`EntryAccessor`], the
//! only way to change or remove that entry afterwards. Renderers read the
//! ordered view through [`StatusbarService::entries`] and listen for
//! [`EntryEvent`]s to know when to relayout.
//!
//! # Ordering
//!
//! Within one [`Alignment`], entries are placed from highest to lowest
//! [`Priority`]. Equal priorities keep registration order.

use std::cmp::Ordering;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::config::{DuplicatePolicy, StatusbarConfig};
use crate::emitter::{Emitter, Subscription};
use crate::entry::{Alignment, Priority, StatusEntry};
use crate::error::StatusbarError;
use crate::key::{EntryKey, KeyedSlab};
use crate::visibility::VisibilityPrefs;

mod accessor;


pub use accessor::EntryAccessor;

/// Payload of [`StatusbarService::on_did_change_entry_visibility`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityChange {
	pub id: String,
	pub visible: bool,
}

/// Structural change to the set of registered entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryEvent {
	/// An entry was registered.
	Added { id: String, alignment: Alignment },
	/// An entry's content was replaced through its accessor.
	Updated { id: String, alignment: Alignment },
	/// An entry was disposed.
	Removed { id: String, alignment: Alignment },
}

impl EntryEvent {
	pub fn id(&self) -> &str {
		match self {
			Self::Added { id, .. } | Self::Updated { id, .. } | Self::Removed { id, .. } => id,
		}
	}

	/// Side of the bar that needs relayout.
	pub fn alignment(&self) -> Alignment {
		match self {
			Self::Added { alignment, .. }
			| Self::Updated { alignment, .. }
			| Self::Removed { alignment, .. } => *alignment,
		}
	}
}

/// Read-only copy of a registered entry.
#[derive(Debug, Clone, PartialEq)]
pub struct EntrySnapshot {
	pub id: String,
	/// Human readable purpose, e.g. for a "hide entry" menu.
	pub name: String,
	pub alignment: Alignment,
	pub priority: Priority,
	/// Current content.
	pub entry: StatusEntry,
	/// Effective visibility of `id`.
	pub visible: bool,
}

struct RegisteredEntry {
	id: String,
	name: String,
	alignment: Alignment,
	priority: Priority,
	content: StatusEntry,
}

impl RegisteredEntry {
	fn snapshot(&self, visibility: &VisibilityPrefs) -> EntrySnapshot {
		EntrySnapshot {
			id: self.id.clone(),
			name: self.name.clone(),
			alignment: self.alignment,
			priority: self.priority,
			entry: self.content.clone(),
			visible: visibility.is_visible(&self.id),
		}
	}
}

struct State {
	entries: KeyedSlab<RegisteredEntry>,
	visibility: VisibilityPrefs,
	duplicate_ids: DuplicatePolicy,
}

impl State {
	/// Entries of one side in placement order.
	fn placed(&self, alignment: Alignment) -> Vec<(EntryKey, &RegisteredEntry)> {
		let mut placed: Vec<_> = self
			.entries
			.iter()
			.filter(|(_, entry)| entry.alignment == alignment)
			.collect();
		placed.sort_by(placement_order);
		placed
	}
}

/// Higher priority first, then earlier registration.
fn placement_order(a: &(EntryKey, &RegisteredEntry), b: &(EntryKey, &RegisteredEntry)) -> Ordering {
	b.1.priority
		.cmp(&a.1.priority)
		.then_with(|| a.0.generation().cmp(&b.0.generation()))
}

struct Shared {
	state: Mutex<State>,
	visibility_events: Emitter<VisibilityChange>,
	entry_events: Emitter<EntryEvent>,
}

/// Registry of status bar entries.
///
/// Cloning yields another handle to the same registry. Listeners are invoked
/// synchronously after the registry state has changed and after its lock has
/// been released, so they may call back into the service.
#[derive(Clone)]
pub struct StatusbarService {
	shared: Arc<Shared>,
}

impl Default for StatusbarService {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for StatusbarService {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let state = self.shared.state.lock();
		f.debug_struct("StatusbarService")
			.field("entries", &state.entries.len())
			.field("hidden", &state.visibility.hidden_ids())
			.field("duplicate_ids", &state.duplicate_ids)
			.finish()
	}
}

impl StatusbarService {
	/// Creates an empty registry with default configuration.
	pub fn new() -> Self {
		Self::with_config(StatusbarConfig::default())
	}

	/// Creates an empty registry seeded from `config`.
	pub fn with_config(config: StatusbarConfig) -> Self {
		let StatusbarConfig {
			hidden,
			duplicate_ids,
		} = config;
		Self {
			shared: Arc::new(Shared {
				state: Mutex::new(State {
					entries: KeyedSlab::default(),
					visibility: VisibilityPrefs::with_hidden(hidden),
					duplicate_ids,
				}),
				visibility_events: Emitter::new(),
				entry_events: Emitter::new(),
			}),
		}
	}

	/// Adds an entry with the given alignment and priority.
	///
	/// `id` lets users hide the entry; `name` describes what the entry is
	/// about. A missing `priority` places the entry last on its side. The entry
	/// is visible unless `id` has been hidden, before or after registration.
	///
	/// Keep the returned accessor alive for as long as the entry should stay
	/// registered: dropping it removes the entry.
	pub fn add_entry(
		&self,
		entry: StatusEntry,
		id: impl Into<String>,
		name: impl Into<String>,
		alignment: Alignment,
		priority: Option<f64>,
	) -> Result<EntryAccessor, StatusbarError> {
		let id = id.into();
		let name = name.into();
		if id.is_empty() {
			return Err(StatusbarError::EmptyId);
		}
		let priority = Priority::from(priority);

		let (key, visible) = {
			let mut state = self.shared.state.lock();
			if state.entries.iter().any(|(_, existing)| existing.id == id) {
				match state.duplicate_ids {
					DuplicatePolicy::Reject => return Err(StatusbarError::DuplicateId { id }),
					DuplicatePolicy::Share => {
						warn!(id = %id, "Status bar entry id already registered; sharing visibility");
					}
				}
			}
			let visible = state.visibility.is_visible(&id);
			let key = state.entries.insert(RegisteredEntry {
				id: id.clone(),
				name: name.clone(),
				alignment,
				priority,
				content: entry,
			});
			(key, visible)
		};

		debug!(
			%key,
			id = %id,
			?alignment,
			priority = priority.value(),
			visible,
			"Added status bar entry"
		);
		self.shared.entry_events.fire(&EntryEvent::Added {
			id: id.clone(),
			alignment,
		});

		Ok(EntryAccessor::new(
			Arc::downgrade(&self.shared),
			key,
			id,
			name,
			alignment,
			priority,
		))
	}

	/// Shows or hides every entry registered under `id`, now and in future.
	///
	/// Fires [`on_did_change_entry_visibility`](Self::on_did_change_entry_visibility)
	/// when the effective visibility of `id` changes.
	pub fn update_entry_visibility(&self, id: &str, visible: bool) {
		let changed = self.shared.state.lock().visibility.set(id, visible);
		if !changed {
			trace!(id, visible, "Status bar entry visibility unchanged");
			return;
		}

		debug!(id, visible, "Status bar entry visibility changed");
		self.shared.visibility_events.fire(&VisibilityChange {
			id: id.to_string(),
			visible,
		});
	}

	/// Effective visibility of `id`. Ids never hidden are visible.
	pub fn is_entry_visible(&self, id: &str) -> bool {
		self.shared.state.lock().visibility.is_visible(id)
	}

	/// Currently hidden ids, sorted.
	pub fn hidden_ids(&self) -> Vec<String> {
		self.shared.state.lock().visibility.hidden_ids()
	}

	/// Visible entries of one side in placement order.
	pub fn entries(&self, alignment: Alignment) -> Vec<EntrySnapshot> {
		let state = self.shared.state.lock();
		state
			.placed(alignment)
			.into_iter()
			.filter(|(_, entry)| state.visibility.is_visible(&entry.id))
			.map(|(_, entry)| entry.snapshot(&state.visibility))
			.collect()
	}

	/// Every live entry, hidden ones included. Left side first, each side in
	/// placement order.
	pub fn all_entries(&self) -> Vec<EntrySnapshot> {
		let state = self.shared.state.lock();
		Alignment::ALL
			.into_iter()
			.flat_map(|alignment| state.placed(alignment))
			.map(|(_, entry)| entry.snapshot(&state.visibility))
			.collect()
	}

	/// Number of live registrations.
	pub fn len(&self) -> usize {
		self.shared.state.lock().entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Subscribes to visibility changes.
	pub fn on_did_change_entry_visibility<F>(&self, listener: F) -> Subscription
	where
		F: Fn(&VisibilityChange) + Send + Sync + 'static,
	{
		self.shared.visibility_events.subscribe(listener)
	}

	/// Subscribes to entries being added, updated or removed.
	pub fn on_did_change_entries<F>(&self, listener: F) -> Subscription
	where
		F: Fn(&EntryEvent) + Send + Sync + 'static,
	{
		self.shared.entry_events.subscribe(listener)
	}
}
