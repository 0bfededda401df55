//! Generation-checked keys into the entry arena.
//!
//! Slots are recycled by [`Slab`] once an entry is disposed. Each insertion is
//! stamped with a fresh generation, so a key held by a disposed accessor never
//! resolves to whatever entry later occupies the same slot.

use slab::Slab;

/// Opaque handle to one registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryKey {
	index: usize,
	generation: u64,
}

impl EntryKey {
	/// Registration sequence number. Strictly increasing across the arena.
	pub fn generation(self) -> u64 {
		self.generation
	}
}

impl std::fmt::Display for EntryKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "entry#{}@{}", self.index, self.generation)
	}
}

struct Slot<T> {
	generation: u64,
	value: T,
}

/// Slab of values addressed by [`EntryKey`].
pub(crate) struct KeyedSlab<T> {
	slots: Slab<Slot<T>>,
	next_generation: u64,
}

impl<T> Default for KeyedSlab<T> {
	fn default() -> Self {
		Self {
			slots: Slab::new(),
			next_generation: 0,
		}
	}
}

impl<T> KeyedSlab<T> {
	pub(crate) fn insert(&mut self, value: T) -> EntryKey {
		let generation = self.next_generation;
		self.next_generation += 1;
		let index = self.slots.insert(Slot { generation, value });
		EntryKey { index, generation }
	}

	pub(crate) fn get(&self, key: EntryKey) -> Option<&T> {
		self.slots
			.get(key.index)
			.filter(|slot| slot.generation == key.generation)
			.map(|slot| &slot.value)
	}

	pub(crate) fn get_mut(&mut self, key: EntryKey) -> Option<&mut T> {
		self.slots
			.get_mut(key.index)
			.filter(|slot| slot.generation == key.generation)
			.map(|slot| &mut slot.value)
	}

	pub(crate) fn remove(&mut self, key: EntryKey) -> Option<T> {
		self.get(key)?;
		Some(self.slots.remove(key.index).value)
	}

	pub(crate) fn len(&self) -> usize {
		self.slots.len()
	}

	/// Iterates live values with their keys, in slot order.
	pub(crate) fn iter(&self) -> impl Iterator<Item = (EntryKey, &T)> {
		self.slots.iter().map(|(index, slot)| {
			(
				EntryKey {
					index,
					generation: slot.generation,
				},
				&slot.value,
			)
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stale_key_does_not_reach_reused_slot() {
		let mut slab = KeyedSlab::default();
		let first = slab.insert("first");
		assert_eq!(slab.remove(first), Some("first"));

		let second = slab.insert("second");
		assert_eq!(first.index, second.index);
		assert_ne!(first, second);

		assert_eq!(slab.get(first), None);
		assert_eq!(slab.remove(first), None);
		assert_eq!(slab.get(second), Some(&"second"));
	}

	#[test]
	fn generations_increase_with_insertion_order() {
		let mut slab = KeyedSlab::default();
		let a = slab.insert(1);
		let b = slab.insert(2);
		slab.remove(a);
		let c = slab.insert(3);
		assert!(a.generation() < b.generation());
		assert!(b.generation() < c.generation());
		assert_eq!(slab.len(), 2);
	}

	#[test]
	fn display_names_slot_and_generation() {
		let mut slab = KeyedSlab::default();
		slab.insert(());
		let key = slab.insert(());
		assert_eq!(key.to_string(), "entry#1@1");
	}
}
