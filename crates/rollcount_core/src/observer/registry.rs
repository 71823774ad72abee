//! In-process observer registry.

use crate::model::attendance::{AttendanceStatus, DayKey, Mark};
use std::collections::BTreeMap;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

/// One applied mark, as delivered to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceChange {
    pub day: DayKey,
    /// Status before the write; `Unmarked` for a first mark.
    pub previous: AttendanceStatus,
    pub current: Mark,
}

impl AttendanceChange {
    /// Returns whether the write left the day's status unchanged.
    pub fn is_noop(&self) -> bool {
        self.previous == AttendanceStatus::from(self.current)
    }
}

/// Consumer of attendance changes.
///
/// Closures taking `&AttendanceChange` implement this trait directly.
pub trait AttendanceObserver: Send + Sync {
    fn on_attendance_changed(&self, change: &AttendanceChange);
}

impl<F> AttendanceObserver for F
where
    F: Fn(&AttendanceChange) + Send + Sync,
{
    fn on_attendance_changed(&self, change: &AttendanceChange) {
        self(change)
    }
}

/// Opaque handle returned by `subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl Display for SubscriptionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// Ordered set of subscribed observers.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: BTreeMap<SubscriptionId, Arc<dyn AttendanceObserver>>,
    next_id: u64,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one observer and returns its handle.
    ///
    /// Handles are never reused within one registry.
    pub fn subscribe(&mut self, observer: Arc<dyn AttendanceObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.insert(id, observer);
        id
    }

    /// Removes one observer. Returns `false` when the handle is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Delivers `change` to every observer in subscription order.
    pub fn notify(&self, change: &AttendanceChange) {
        for observer in self.observers.values() {
            observer.on_attendance_changed(change);
        }
    }
}

impl Debug for ObserverRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("subscriptions", &self.observers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{AttendanceChange, ObserverRegistry};
    use crate::model::attendance::{AttendanceStatus, DayKey, Mark};
    use std::sync::{Arc, Mutex};

    fn change(day: i64) -> AttendanceChange {
        AttendanceChange {
            day: DayKey::from_epoch_ms(day),
            previous: AttendanceStatus::Unmarked,
            current: Mark::Present,
        }
    }

    #[test]
    fn notifies_in_subscription_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ObserverRegistry::new();

        for label in ["first", "second"] {
            let seen = Arc::clone(&seen);
            registry.subscribe(Arc::new(move |_: &AttendanceChange| {
                seen.lock().unwrap().push(label);
            }));
        }

        registry.notify(&change(1));
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn unsubscribe_stops_delivery_and_rejects_unknown_handle() {
        let seen = Arc::new(Mutex::new(0usize));
        let mut registry = ObserverRegistry::new();
        let counter = Arc::clone(&seen);
        let id = registry.subscribe(Arc::new(move |_: &AttendanceChange| {
            *counter.lock().unwrap() += 1;
        }));

        registry.notify(&change(1));
        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        registry.notify(&change(2));

        assert_eq!(*seen.lock().unwrap(), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn handles_are_not_reused() {
        let mut registry = ObserverRegistry::new();
        let first = registry.subscribe(Arc::new(|_: &AttendanceChange| {}));
        registry.unsubscribe(first);
        let second = registry.subscribe(Arc::new(|_: &AttendanceChange| {}));
        assert_ne!(first, second);
    }

    #[test]
    fn repeated_mark_is_noop_change() {
        let repeated = AttendanceChange {
            day: DayKey::from_epoch_ms(5),
            previous: AttendanceStatus::Present,
            current: Mark::Present,
        };
        assert!(repeated.is_noop());
        assert!(!change(5).is_noop());
    }
}
