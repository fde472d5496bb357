//! Single-threaded observable cell with ordered, synchronous notification.
//!
//! DESIGN
//! ======
//! Subscribers are invoked outside any interior borrow, so a callback may
//! read the cell, subscribe, drop its own handle, or write a new value. A
//! write issued during notification lands in the cell at once; its
//! notification is queued and delivered once the current round finishes, so
//! every subscriber sees writes in issue order.
//!
//! The cell is `Rc`-based and `!Send`: it lives on the UI thread only.

#[cfg(test)]
#[path = "observable_test.rs"]
mod observable_test;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Slot<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
    notifying: bool,
    pending: VecDeque<T>,
}

/// Shared handle to one observable value. Clones refer to the same cell.
pub struct Observable<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self { slot: Rc::clone(&self.slot) }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.try_borrow() {
            Ok(slot) => f
                .debug_struct("Observable")
                .field("value", &slot.value)
                .field("subscribers", &slot.subscribers.len())
                .finish(),
            Err(_) => f.write_str("Observable { <borrowed> }"),
        }
    }
}

impl<T: Clone + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot {
                value,
                next_id: 0,
                subscribers: Vec::new(),
                notifying: false,
                pending: VecDeque::new(),
            })),
        }
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.slot.borrow().value.clone()
    }

    /// Store `value` and notify every subscriber, in registration order,
    /// before returning. Always notifies, even when the value is unchanged.
    ///
    /// Called from inside a subscriber, the cell is updated at once and the
    /// notification for `value` is queued behind the running round.
    pub fn set(&self, value: T) {
        {
            let mut slot = self.slot.borrow_mut();
            slot.value = value.clone();
            if slot.notifying {
                slot.pending.push_back(value);
                return;
            }
            slot.notifying = true;
        }
        self.drain(value);
    }

    /// Register `callback`. It runs once immediately with the current value,
    /// then after every write until the returned handle is dropped.
    pub fn subscribe<F>(&self, callback: F) -> Subscription<T>
    where
        F: Fn(&T) + 'static,
    {
        let callback: Callback<T> = Rc::new(callback);
        let (id, current) = {
            let mut slot = self.slot.borrow_mut();
            let id = slot.next_id;
            slot.next_id += 1;
            slot.subscribers.push((id, Rc::clone(&callback)));
            (id, slot.value.clone())
        };
        callback(&current);
        Subscription { slot: Rc::downgrade(&self.slot), id }
    }

    /// Whether a notification round is in progress on this cell.
    #[must_use]
    pub fn is_notifying(&self) -> bool {
        self.slot.borrow().notifying
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.slot.borrow().subscribers.len()
    }

    /// Notify for `first`, then for each queued write with the value it
    /// carried, so every round delivers its own write.
    fn drain(&self, first: T) {
        let _round = NotifyRound(&self.slot);
        let mut value = first;
        loop {
            let subscribers: Vec<Callback<T>> =
                self.slot.borrow().subscribers.iter().map(|(_, cb)| Rc::clone(cb)).collect();
            for callback in &subscribers {
                callback(&value);
            }
            let next = self.slot.borrow_mut().pending.pop_front();
            match next {
                Some(next) => value = next,
                None => return,
            }
        }
    }
}

/// Clears the notifying flag when a round ends, including by unwinding out
/// of a panicking subscriber.
struct NotifyRound<'a, T>(&'a RefCell<Slot<T>>);

impl<T> Drop for NotifyRound<'_, T> {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.0.try_borrow_mut() {
            slot.notifying = false;
            slot.pending.clear();
        }
    }
}

/// Deregistration handle returned by [`Observable::subscribe`].
///
/// Dropping the handle removes the callback.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription<T> {
    slot: Weak<RefCell<Slot<T>>>,
    id: u64,
}

impl<T> Subscription<T> {
    /// Remove the callback now.
    pub fn unsubscribe(self) {}

    /// Keep the callback registered for the lifetime of the cell.
    pub fn detach(mut self) {
        self.slot = Weak::new();
    }

    /// Whether the callback is still registered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.slot
            .upgrade()
            .is_some_and(|slot| slot.borrow().subscribers.iter().any(|(id, _)| *id == self.id))
    }
}

impl<T> fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish_non_exhaustive()
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        let Some(slot) = self.slot.upgrade() else {
            return;
        };
        // Released after the borrow ends: the callback may own handles into
        // this same cell.
        let removed = {
            let mut slot = slot.borrow_mut();
            let index = slot.subscribers.iter().position(|(id, _)| *id == self.id);
            index.map(|i| slot.subscribers.remove(i))
        };
        drop(removed);
    }
}
