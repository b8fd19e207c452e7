//! Observable value store
//!
//! A store holds one value and notifies subscribers synchronously whenever a
//! new value is written. It is single-threaded: clones of a `Store` share the
//! same value and subscriber list.
//!
//! Subscribers are snapshotted before each notification, and the value is
//! not borrowed while they run. A listener may therefore subscribe,
//! unsubscribe or write the store again from inside its callback.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Listener<S> = Rc<dyn Fn(&S)>;

struct Inner<S> {
    state: RefCell<Rc<S>>,
    listeners: RefCell<Vec<(u64, Listener<S>)>>,
    next_id: Cell<u64>,
}

/// A value holder with change notification
pub struct Store<S> {
    inner: Rc<Inner<S>>,
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Store {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: 'static> Store<S> {
    pub fn new(initial: S) -> Self {
        Store {
            inner: Rc::new(Inner {
                state: RefCell::new(Rc::new(initial)),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
            }),
        }
    }

    /// Copy of the current value
    pub fn get_state(&self) -> S
    where
        S: Clone,
    {
        S::clone(&self.state())
    }

    /// Shared handle to the current value
    pub fn state(&self) -> Rc<S> {
        Rc::clone(&self.inner.state.borrow())
    }

    /// Run `f` against the current value without cloning it
    pub fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let state = self.state();
        f(&state)
    }

    /// Replace the value and notify subscribers
    pub fn set_state(&self, state: S) {
        self.write_state(Rc::new(state));
    }

    /// Derive the next value from the current one and notify subscribers
    pub fn update(&self, f: impl FnOnce(&S) -> S) {
        let next = self.with_state(f);
        self.write_state(Rc::new(next));
    }

    /// Register a listener, called with every new value.
    ///
    /// The listener stays registered until the returned handle is dropped or
    /// [`Subscription::unsubscribe`] is called.
    pub fn subscribe(&self, listener: impl Fn(&S) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        let weak: Weak<Inner<S>> = Rc::downgrade(&self.inner);
        Subscription {
            remove: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.listeners.borrow_mut().retain(|(other, _)| *other != id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn write_state(&self, state: Rc<S>) {
        *self.inner.state.borrow_mut() = Rc::clone(&state);

        let listeners: Vec<Listener<S>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        log::debug!("write state, notifying {} subscribers", listeners.len());
        for listener in listeners {
            listener(&state);
        }
    }
}

impl<S: Default + 'static> Default for Store<S> {
    fn default() -> Self {
        Store::new(S::default())
    }
}

impl<S: fmt::Debug> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.inner.state.borrow())
            .field("subscribers", &self.inner.listeners.borrow().len())
            .finish()
    }
}

/// Handle for a registered listener. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes the listener immediately"]
pub struct Subscription {
    remove: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Remove the listener now
    pub fn unsubscribe(mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }

    /// Keep the listener registered for as long as the store lives
    pub fn detach(mut self) {
        self.remove = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.remove.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set_state() {
        let store = Store::new(1);
        assert_eq!(store.get_state(), 1);
        store.set_state(2);
        assert_eq!(store.get_state(), 2);
        store.update(|n| n * 10);
        assert_eq!(store.get_state(), 20);
    }

    #[test]
    fn test_clones_share_state() {
        let store = Store::new(String::from("a"));
        let other = store.clone();
        other.set_state(String::from("b"));
        assert_eq!(store.get_state(), "b");
        assert_eq!(store.with_state(|s| s.len()), 1);
    }

    #[test]
    fn test_subscribers_are_notified() {
        let store = Store::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let seen_in_listener = Rc::clone(&seen);
        let subscription = store.subscribe(move |n| seen_in_listener.borrow_mut().push(*n));

        store.set_state(1);
        store.update(|n| n + 1);
        assert_eq!(*seen.borrow(), vec![1, 2]);

        subscription.unsubscribe();
        store.set_state(5);
        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let store = Store::new(0);
        {
            let _subscription = store.subscribe(|_| {});
            assert_eq!(store.subscriber_count(), 1);
        }
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_detach_keeps_listener() {
        let store = Store::new(0);
        let count = Rc::new(Cell::new(0));
        let count_in_listener = Rc::clone(&count);
        store
            .subscribe(move |_| count_in_listener.set(count_in_listener.get() + 1))
            .detach();

        store.set_state(1);
        store.set_state(2);
        assert_eq!(count.get(), 2);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn test_unsubscribe_during_notification() {
        let store = Store::new(0);
        let calls = Rc::new(Cell::new(0));

        // The first listener removes the second one while the store is notifying
        let second: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let second_in_first = Rc::clone(&second);
        let _first = store.subscribe(move |_| {
            if let Some(subscription) = second_in_first.borrow_mut().take() {
                subscription.unsubscribe();
            }
        });

        let calls_in_second = Rc::clone(&calls);
        *second.borrow_mut() =
            Some(store.subscribe(move |_| calls_in_second.set(calls_in_second.get() + 1)));

        // Snapshot taken before notifying: second still runs this time
        store.set_state(1);
        assert_eq!(calls.get(), 1);

        store.set_state(2);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_set_state_from_listener() {
        let store = Store::new(0);
        let inner_store = store.clone();
        store
            .subscribe(move |n| {
                if *n < 3 {
                    inner_store.set_state(n + 1);
                }
            })
            .detach();

        store.set_state(1);
        assert_eq!(store.get_state(), 3);
    }

    #[test]
    fn test_subscription_outlives_store() {
        let store = Store::new(0);
        let subscription = store.subscribe(|_| {});
        drop(store);
        subscription.unsubscribe();
    }
}
