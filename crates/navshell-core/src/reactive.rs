//! Signal - observable single-threaded value
//!
//! `Signal<T>` holds a value shared between clones and notifies subscribers
//! whenever it is set or updated. The router publishes the current location
//! through a signal; the page shell re-renders from it.
//!
//! ## Example
//!
//! ```
//! use navshell_core::Signal;
//!
//! let count = Signal::new(0);
//! assert_eq!(count.get(), 0);
//!
//! count.set(42);
//! assert_eq!(count.get(), 42);
//!
//! count.update(|n| *n += 1);
//! assert_eq!(count.get(), 43);
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// Handle returned by [`Signal::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Inner<T> {
	value: RefCell<T>,
	subscribers: RefCell<Vec<(SubscriptionId, Subscriber<T>)>>,
	next_id: Cell<u64>,
}

/// A reactive signal holding a value.
///
/// All clones of the same signal share the same value and subscriber list.
pub struct Signal<T: 'static> {
	inner: Rc<Inner<T>>,
}

impl<T: 'static> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<T: 'static> Signal<T> {
	/// Create a new Signal with the given initial value
	pub fn new(value: T) -> Self {
		Self {
			inner: Rc::new(Inner {
				value: RefCell::new(value),
				subscribers: RefCell::new(Vec::new()),
				next_id: Cell::new(0),
			}),
		}
	}

	/// Get the current value of the signal
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.inner.value.borrow().clone()
	}

	/// Borrow the current value for the duration of `f`.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.inner.value.borrow())
	}

	/// Set the signal to a new value and notify subscribers.
	pub fn set(&self, value: T) {
		*self.inner.value.borrow_mut() = value;
		self.notify();
	}

	/// Update the signal's value in place and notify subscribers once.
	pub fn update<F>(&self, f: F)
	where
		F: FnOnce(&mut T),
	{
		f(&mut *self.inner.value.borrow_mut());
		self.notify();
	}

	/// Registers a callback run after every change.
	pub fn subscribe<F>(&self, f: F) -> SubscriptionId
	where
		F: Fn(&T) + 'static,
	{
		let id = SubscriptionId(self.inner.next_id.get());
		self.inner.next_id.set(id.0 + 1);
		self.inner
			.subscribers
			.borrow_mut()
			.push((id, Rc::new(f)));
		id
	}

	/// Removes a subscription. Returns false if it was already gone.
	pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
		let mut subscribers = self.inner.subscribers.borrow_mut();
		let before = subscribers.len();
		subscribers.retain(|(sid, _)| *sid != id);
		subscribers.len() != before
	}

	/// Returns the number of live subscriptions.
	pub fn subscriber_count(&self) -> usize {
		self.inner.subscribers.borrow().len()
	}

	fn notify(&self) {
		// Snapshot so callbacks may subscribe or unsubscribe while running.
		let subscribers: Vec<Subscriber<T>> = self
			.inner
			.subscribers
			.borrow()
			.iter()
			.map(|(_, s)| Rc::clone(s))
			.collect();
		tracing::trace!(subscribers = subscribers.len(), "signal changed");
		let value = self.inner.value.borrow();
		for subscriber in subscribers {
			subscriber(&value);
		}
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("value", &*self.inner.value.borrow())
			.field("subscribers", &self.subscriber_count())
			.finish()
	}
}
