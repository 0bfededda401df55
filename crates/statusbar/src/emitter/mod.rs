//! Synchronous event emitter.
//!
//! Listeners run on the firing thread, in subscription order, after the
//! emitter's own lock has been released. A listener may therefore subscribe,
//! unsubscribe, or call back into whatever fired the event.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

#[cfg(test)]
mod tests;

type Listener<E> = Arc<dyn Fn(&E) + Send + Sync>;

struct Listeners<E> {
	next_id: u64,
	entries: Vec<(u64, Listener<E>)>,
}

/// Multi-listener event source.
pub struct Emitter<E> {
	listeners: Arc<Mutex<Listeners<E>>>,
}

impl<E> Clone for Emitter<E> {
	fn clone(&self) -> Self {
		Self {
			listeners: Arc::clone(&self.listeners),
		}
	}
}

impl<E: 'static> Default for Emitter<E> {
	fn default() -> Self {
		Self::new()
	}
}

impl<E: 'static> Emitter<E> {
	pub fn new() -> Self {
		Self {
			listeners: Arc::new(Mutex::new(Listeners {
				next_id: 0,
				entries: Vec::new(),
			})),
		}
	}

	/// Registers `listener`. It stays attached until the returned
	/// [`Subscription`] is dropped or unsubscribed.
	pub fn subscribe<F>(&self, listener: F) -> Subscription
	where
		F: Fn(&E) + Send + Sync + 'static,
	{
		let id = {
			let mut listeners = self.listeners.lock();
			let id = listeners.next_id;
			listeners.next_id += 1;
			listeners.entries.push((id, Arc::new(listener)));
			id
		};

		let weak: Weak<Mutex<Listeners<E>>> = Arc::downgrade(&self.listeners);
		Subscription::new(move || {
			let Some(listeners) = weak.upgrade() else {
				return;
			};
			// The listener may own handles onto this emitter; drop it unlocked.
			let removed = {
				let mut listeners = listeners.lock();
				listeners
					.entries
					.iter()
					.position(|(lid, _)| *lid == id)
					.map(|index| listeners.entries.remove(index))
			};
			drop(removed);
		})
	}

	/// Delivers `event` to every listener attached at the time of the call.
	pub fn fire(&self, event: &E) {
		let snapshot: Vec<Listener<E>> = self
			.listeners
			.lock()
			.entries
			.iter()
			.map(|(_, listener)| Arc::clone(listener))
			.collect();

		for listener in snapshot {
			listener(event);
		}
	}

	pub fn listener_count(&self) -> usize {
		self.listeners.lock().entries.len()
	}
}

/// Keeps a listener attached. Dropping it detaches the listener.
#[must_use = "dropping a Subscription detaches its listener immediately"]
pub struct Subscription {
	detach: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
	fn new(detach: impl FnOnce() + Send + Sync + 'static) -> Self {
		Self {
			detach: Some(Box::new(detach)),
		}
	}

	/// Detaches the listener now. Equivalent to dropping the subscription.
	pub fn unsubscribe(mut self) {
		self.detach_now();
	}

	fn detach_now(&mut self) {
		if let Some(detach) = self.detach.take() {
			detach();
		}
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		self.detach_now();
	}
}

impl std::fmt::Debug for Subscription {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Subscription")
			.field("attached", &self.detach.is_some())
			.finish()
	}
}
