use std::sync::Arc;

use parking_lot::Mutex;
use pretty_assertions::assert_eq;

use super::*;

fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(&str) -> Box<dyn Fn(&u32) + Send + Sync>) {
	let log = Arc::new(Mutex::new(Vec::new()));
	let sink = Arc::clone(&log);
	let make = move |tag: &str| -> Box<dyn Fn(&u32) + Send + Sync> {
		let sink = Arc::clone(&sink);
		let tag = tag.to_string();
		Box::new(move |n: &u32| sink.lock().push(format!("{tag}:{n}")))
	};
	(log, make)
}

#[test]
fn test_fire_reaches_listeners_in_subscription_order() {
	let emitter = Emitter::<u32>::new();
	let (log, make) = recorder();

	let _a = emitter.subscribe(make("a"));
	let _b = emitter.subscribe(make("b"));
	emitter.fire(&1);

	assert_eq!(*log.lock(), vec!["a:1", "b:1"]);
}

#[test]
fn test_dropping_subscription_detaches() {
	let emitter = Emitter::<u32>::new();
	let (log, make) = recorder();

	let a = emitter.subscribe(make("a"));
	let _b = emitter.subscribe(make("b"));
	assert_eq!(emitter.listener_count(), 2);

	drop(a);
	assert_eq!(emitter.listener_count(), 1);
	emitter.fire(&7);

	assert_eq!(*log.lock(), vec!["b:7"]);
}

#[test]
fn test_unsubscribe_is_explicit_drop() {
	let emitter = Emitter::<u32>::new();
	let (log, make) = recorder();

	let sub = emitter.subscribe(make("a"));
	sub.unsubscribe();
	emitter.fire(&3);

	assert!(log.lock().is_empty());
	assert_eq!(emitter.listener_count(), 0);
}

#[test]
fn test_subscription_outlives_emitter() {
	let emitter = Emitter::<u32>::new();
	let sub = emitter.subscribe(|_| {});
	drop(emitter);
	drop(sub);
}

#[test]
fn test_listener_may_reenter_emitter() {
	let emitter = Emitter::<u32>::new();
	let inner = emitter.clone();
	let seen = Arc::new(Mutex::new(Vec::new()));
	let sink = Arc::clone(&seen);

	let _sub = emitter.subscribe(move |n| {
		sink.lock().push(*n);
		if *n == 0 {
			inner.fire(&1);
		}
	});
	emitter.fire(&0);

	assert_eq!(*seen.lock(), vec![0, 1]);
}

#[test]
fn test_listener_added_during_fire_misses_current_event() {
	let emitter = Emitter::<u32>::new();
	let late = Arc::new(Mutex::new(Vec::new()));
	let held = Arc::new(Mutex::new(Vec::new()));

	let inner = emitter.clone();
	let late_sink = Arc::clone(&late);
	let held_subs = Arc::clone(&held);
	let _sub = emitter.subscribe(move |_| {
		let sink = Arc::clone(&late_sink);
		held_subs.lock().push(inner.subscribe(move |n| sink.lock().push(*n)));
	});

	emitter.fire(&1);
	assert!(late.lock().is_empty());

	emitter.fire(&2);
	assert_eq!(*late.lock(), vec![2]);
}

#[test]
fn test_detaching_listener_that_owns_subscription_on_same_emitter() {
	let emitter = Emitter::<u32>::new();
	let inner = emitter.subscribe(|_| {});
	let outer = emitter.subscribe(move |_| {
		let _ = &inner;
	});
	assert_eq!(emitter.listener_count(), 2);

	drop(outer);
	assert_eq!(emitter.listener_count(), 0);
}
