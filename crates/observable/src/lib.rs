#![forbid(unsafe_code)]
// Allow these clippy lints for readability of the notification plumbing
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::return_self_not_must_use)]

//! # Observable
//!
//! Push-based observable scalar properties for single-threaded simulation
//! models.
//!
//! A [`Property`] wraps an `f64` value. Writing it with [`Property::set`]
//! synchronously notifies every registered observer, in registration order,
//! before `set` returns. Writes that land within the property's tolerance of
//! the current value are suppressed entirely: no store, no notification.
//! That epsilon gate is what keeps bidirectionally linked properties from
//! oscillating on floating-point rounding noise.
//!
//! Observers are registered explicitly and torn down explicitly: every
//! [`Property::subscribe`] call returns a [`Subscription`] handle that
//! removes the observer when dropped (or via [`Subscription::unsubscribe`]).
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use observable::Property;
//!
//! let mut force = Property::new(0.0);
//!
//! let seen = Rc::new(Cell::new(0.0));
//! let sink = Rc::clone(&seen);
//! let _sub = force.subscribe(move |_old, new| sink.set(new));
//!
//! force.set(10.0);
//! assert_eq!(seen.get(), 10.0);
//!
//! // A write within tolerance of the current value is a no-op.
//! assert!(!force.set(10.0 + 1e-12));
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Default write tolerance.
///
/// Two values closer than this are treated as the same value: the write is
/// dropped and observers are not notified.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// An observer callback, invoked with `(old, new)`.
type Callback = Rc<RefCell<dyn FnMut(f64, f64)>>;

struct Entry {
    id: u64,
    callback: Callback,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    entries: Vec<Entry>,
}

impl Registry {
    fn remove(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }
}

/// An observable `f64` with an epsilon-gated write path.
///
/// Not `Send`: properties belong to a single-threaded model driven by an
/// external event loop.
pub struct Property {
    value: f64,
    tolerance: f64,
    registry: Rc<RefCell<Registry>>,
}

impl Property {
    /// Creates a property with the [`DEFAULT_TOLERANCE`] write gate.
    pub fn new(value: f64) -> Self {
        Self::with_tolerance(value, DEFAULT_TOLERANCE)
    }

    /// Creates a property with an explicit write tolerance.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `value` is finite and `tolerance` is finite and
    /// non-negative; a violation is a system-assembly bug.
    pub fn with_tolerance(value: f64, tolerance: f64) -> Self {
        debug_assert!(value.is_finite(), "property initialized to {value}");
        debug_assert!(
            tolerance.is_finite() && tolerance >= 0.0,
            "invalid tolerance {tolerance}"
        );
        Self {
            value,
            tolerance,
            registry: Rc::new(RefCell::new(Registry::default())),
        }
    }

    /// Current value.
    #[inline]
    pub fn get(&self) -> f64 {
        self.value
    }

    /// Write tolerance of the epsilon gate.
    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Number of live observers.
    pub fn observer_count(&self) -> usize {
        self.registry.borrow().entries.len()
    }

    /// Writes a new value, notifying observers in registration order.
    ///
    /// Returns `false` (and does nothing at all) when `value` is within the
    /// tolerance of the current value. Otherwise the value is stored and
    /// every observer sees `(old, new)` before `set` returns.
    ///
    /// Observers may unsubscribe observers of this same property (including
    /// themselves) from inside a notification; the in-flight pass iterates a
    /// snapshot, and removed observers that have not yet had their turn are
    /// skipped.
    pub fn set(&mut self, value: f64) -> bool {
        debug_assert!(value.is_finite(), "property written with {value}");
        if (value - self.value).abs() <= self.tolerance {
            return false;
        }
        let old = self.value;
        self.value = value;

        // Snapshot ids and callbacks so observer callbacks are free to
        // mutate the registry mid-pass.
        let snapshot: Vec<(u64, Callback)> = self
            .registry
            .borrow()
            .entries
            .iter()
            .map(|entry| (entry.id, Rc::clone(&entry.callback)))
            .collect();

        for (id, callback) in snapshot {
            let live = self
                .registry
                .borrow()
                .entries
                .iter()
                .any(|entry| entry.id == id);
            if !live {
                continue;
            }
            // An observer that is already running further up the stack
            // (a write cascade that looped back) is not re-entered.
            if let Ok(mut callback) = callback.try_borrow_mut() {
                callback(old, value);
            }
        }
        true
    }

    /// Registers an observer, returning its teardown handle.
    ///
    /// Observers are notified in registration order. The observer stays
    /// registered until the returned [`Subscription`] is dropped or
    /// explicitly unsubscribed.
    pub fn subscribe(&self, callback: impl FnMut(f64, f64) + 'static) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.entries.push(Entry {
            id,
            callback: Rc::new(RefCell::new(callback)),
        });
        Subscription {
            registry: Rc::downgrade(&self.registry),
            id,
        }
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &self.value)
            .field("tolerance", &self.tolerance)
            .field("observers", &self.observer_count())
            .finish()
    }
}

/// Teardown handle for a registered observer.
///
/// Dropping the handle removes the observer; dropping it after the property
/// itself is gone is a no-op.
#[must_use = "dropping a Subscription immediately unsubscribes the observer"]
pub struct Subscription {
    registry: Weak<RefCell<Registry>>,
    id: u64,
}

impl Subscription {
    /// Removes the observer now, consuming the handle.
    pub fn unsubscribe(self) {
        // Drop does the work.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().remove(self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_stores_and_reports_change() {
        let mut p = Property::new(1.0);
        assert!(p.set(2.0));
        assert_eq!(p.get(), 2.0);
    }

    #[test]
    fn epsilon_gate_suppresses_near_duplicate_writes() {
        let mut p = Property::new(5.0);
        let count = Rc::new(Cell::new(0u32));
        let sink = Rc::clone(&count);
        let _sub = p.subscribe(move |_, _| sink.set(sink.get() + 1));

        assert!(!p.set(5.0));
        assert!(!p.set(5.0 + 1e-11));
        assert!(!p.set(5.0 - 1e-11));
        assert_eq!(count.get(), 0);
        assert_eq!(p.get(), 5.0);

        assert!(p.set(5.0 + 1e-9));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn notification_order_is_registration_order() {
        let mut p = Property::new(0.0);
        let log = Rc::new(RefCell::new(Vec::new()));

        let l1 = Rc::clone(&log);
        let _s1 = p.subscribe(move |_, _| l1.borrow_mut().push(1));
        let l2 = Rc::clone(&log);
        let _s2 = p.subscribe(move |_, _| l2.borrow_mut().push(2));
        let l3 = Rc::clone(&log);
        let _s3 = p.subscribe(move |_, _| l3.borrow_mut().push(3));

        p.set(1.0);
        assert_eq!(*log.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn order_preserved_after_interleaved_unsubscribe() {
        let mut p = Property::new(0.0);
        let log = Rc::new(RefCell::new(Vec::new()));

        let l1 = Rc::clone(&log);
        let _s1 = p.subscribe(move |_, _| l1.borrow_mut().push(1));
        let l2 = Rc::clone(&log);
        let s2 = p.subscribe(move |_, _| l2.borrow_mut().push(2));
        let l3 = Rc::clone(&log);
        let _s3 = p.subscribe(move |_, _| l3.borrow_mut().push(3));

        s2.unsubscribe();
        p.set(1.0);
        assert_eq!(*log.borrow(), vec![1, 3]);
    }

    #[test]
    fn drop_unsubscribes() {
        let mut p = Property::new(0.0);
        let count = Rc::new(Cell::new(0u32));
        {
            let sink = Rc::clone(&count);
            let _sub = p.subscribe(move |_, _| sink.set(sink.get() + 1));
            p.set(1.0);
        }
        p.set(2.0);
        assert_eq!(count.get(), 1);
        assert_eq!(p.observer_count(), 0);
    }

    #[test]
    fn observer_sees_old_and_new() {
        let mut p = Property::new(1.5);
        let seen = Rc::new(Cell::new((0.0, 0.0)));
        let sink = Rc::clone(&seen);
        let _sub = p.subscribe(move |old, new| sink.set((old, new)));

        p.set(-2.5);
        assert_eq!(seen.get(), (1.5, -2.5));
    }

    #[test]
    fn unsubscribe_during_notification_skips_pending_observer() {
        let mut p = Property::new(0.0);
        let log = Rc::new(RefCell::new(Vec::new()));

        // First observer tears down the third mid-pass.
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let killer = Rc::clone(&slot);
        let l1 = Rc::clone(&log);
        let _s1 = p.subscribe(move |_, _| {
            l1.borrow_mut().push(1);
            killer.borrow_mut().take();
        });
        let l2 = Rc::clone(&log);
        let _s2 = p.subscribe(move |_, _| l2.borrow_mut().push(2));
        let l3 = Rc::clone(&log);
        *slot.borrow_mut() = Some(p.subscribe(move |_, _| l3.borrow_mut().push(3)));

        p.set(1.0);
        assert_eq!(*log.borrow(), vec![1, 2]);
    }

    #[test]
    fn observer_may_unsubscribe_itself_mid_pass() {
        let mut p = Property::new(0.0);
        let log = Rc::new(RefCell::new(Vec::new()));

        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let own_handle = Rc::clone(&slot);
        let l1 = Rc::clone(&log);
        *slot.borrow_mut() = Some(p.subscribe(move |_, _| {
            l1.borrow_mut().push(1);
            own_handle.borrow_mut().take();
        }));
        let l2 = Rc::clone(&log);
        let _s2 = p.subscribe(move |_, _| l2.borrow_mut().push(2));

        p.set(1.0);
        p.set(2.0);
        // First observer ran exactly once, second ran both times.
        assert_eq!(*log.borrow(), vec![1, 2, 2]);
    }

    #[test]
    fn subscription_outliving_property_is_harmless() {
        let p = Property::new(0.0);
        let sub = p.subscribe(|_, _| {});
        drop(p);
        drop(sub);
    }

    #[test]
    fn custom_tolerance() {
        let mut p = Property::with_tolerance(0.0, 0.5);
        assert!(!p.set(0.4));
        assert_eq!(p.get(), 0.0);
        assert!(p.set(0.6));
        assert_eq!(p.get(), 0.6);
    }
}
