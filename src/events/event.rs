//! # Runtime events emitted by the notification lifecycle core.
//!
//! The [`EventKind`] enum classifies events across three categories:
//! - **Owner lifecycle**: startup and teardown of owners and their sets
//! - **Notification lifecycle**: create, explicit clear, system completion
//! - **Degradation reports**: alert subsystem failures, panicking callbacks,
//!   subscriber overflow
//!
//! The [`Event`] struct carries additional metadata such as timestamps, the
//! owner name, the notification id, and a reason string.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore the exact order when events are
//! delivered out of order.
//!
//! ## Example
//! ```rust
//! use notivisor::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::AlertShowFailed)
//!     .with_owner("unit@example")
//!     .with_reason("alert_unavailable");
//!
//! assert_eq!(ev.kind, EventKind::AlertShowFailed);
//! assert_eq!(ev.owner.as_deref(), Some("unit@example"));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

use crate::types::NotificationId;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of runtime events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Owner lifecycle ===
    /// An owner started and received an empty notification set.
    ///
    /// Sets: `owner`, `at`, `seq`.
    OwnerStarted,

    /// A startup signal arrived for an owner that already has a set.
    ///
    /// Startup fires at most once per owner lifetime; the duplicate is
    /// ignored and reported here.
    ///
    /// Sets: `owner`, `at`, `seq`.
    OwnerStartupIgnored,

    /// An owner shut down; every member of its set was force-closed and the
    /// set was discarded.
    ///
    /// Sets: `owner`, `count` (notifications force-closed), `at`, `seq`.
    OwnerStopped,

    /// A notification or dispatch referenced an owner with no set (the owner
    /// never started or already shut down). The operation was a no-op.
    ///
    /// Sets: `owner`, `id`, `at`, `seq`.
    OwnerMissing,

    // === Notification lifecycle ===
    /// A notification was created and added to its owner's set.
    ///
    /// Sets: `owner`, `id`, `at`, `seq`.
    NotificationCreated,

    /// A notification was closed at the owner's request (API clear or forced
    /// shutdown close). The owner's closed-listener is **not** invoked for
    /// these.
    ///
    /// Sets: `owner`, `id`, `at`, `seq`.
    NotificationCleared,

    /// The display system reported the popup finished on its own (user
    /// dismissal, timeout). The owner's closed-listener, if any, was invoked.
    ///
    /// Sets: `owner`, `id`, `at`, `seq`.
    NotificationCompleted,

    // === Degradation reports ===
    /// The alert subsystem failed to display a popup. The notification stays
    /// tracked; only the visual is missing.
    ///
    /// Sets: `owner`, `id`, `reason` (error label), `at`, `seq`.
    AlertShowFailed,

    /// The alert subsystem failed to dismiss a popup. Registry bookkeeping
    /// proceeded regardless.
    ///
    /// Sets: `owner`, `id`, `reason` (error label), `at`, `seq`.
    AlertCloseFailed,

    /// An owner-registered closed-listener panicked; the panic was contained.
    ///
    /// Sets: `owner`, `reason` (panic info), `at`, `seq`.
    CallbackPanicked,

    /// A bus subscriber panicked during event processing.
    ///
    /// Sets: `reason` (subscriber name + panic info), `at`, `seq`.
    SubscriberPanicked,

    /// A bus subscriber dropped an event (queue full or worker closed).
    ///
    /// Sets: `reason` (subscriber name + cause), `at`, `seq`.
    SubscriberOverflow,
}

/// Runtime event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Owner name, if applicable.
    pub owner: Option<Arc<str>>,
    /// Notification id (rendered), if applicable.
    pub id: Option<Arc<str>>,
    /// Human-readable reason (error labels, panic info, overflow details).
    pub reason: Option<Arc<str>>,
    /// Count attached to the event (e.g. notifications force-closed).
    pub count: Option<u32>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next
    /// sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            owner: None,
            id: None,
            reason: None,
            count: None,
        }
    }

    /// Attaches an owner name.
    #[inline]
    pub fn with_owner(mut self, owner: impl Into<Arc<str>>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Attaches a notification id.
    #[inline]
    pub fn with_id(mut self, id: &NotificationId) -> Self {
        self.id = Some(Arc::from(id.to_string().as_str()));
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attaches a count.
    #[inline]
    pub fn with_count(mut self, n: u32) -> Self {
        self.count = Some(n);
        self
    }

    /// Creates a contained-panic report for an owner's closed-listener.
    #[inline]
    pub(crate) fn callback_panicked(owner: impl Into<Arc<str>>, info: String) -> Self {
        Event::new(EventKind::CallbackPanicked)
            .with_owner(owner)
            .with_reason(info)
    }

    /// Creates a subscriber overflow event.
    #[inline]
    pub(crate) fn subscriber_overflow(subscriber: &'static str, cause: &'static str) -> Self {
        Event::new(EventKind::SubscriberOverflow)
            .with_reason(format!("subscriber={subscriber} cause={cause}"))
    }

    /// Creates a subscriber panic event.
    #[inline]
    pub(crate) fn subscriber_panicked(subscriber: &'static str, info: String) -> Self {
        Event::new(EventKind::SubscriberPanicked)
            .with_reason(format!("subscriber={subscriber} panic={info}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_numbers_increase() {
        let a = Event::new(EventKind::OwnerStarted);
        let b = Event::new(EventKind::OwnerStopped);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn builders_attach_metadata() {
        let ev = Event::new(EventKind::NotificationCompleted)
            .with_owner("unit@example")
            .with_id(&NotificationId::from("n1"))
            .with_count(2);
        assert_eq!(ev.owner.as_deref(), Some("unit@example"));
        assert_eq!(ev.id.as_deref(), Some("n1"));
        assert_eq!(ev.count, Some(2));
        assert!(ev.reason.is_none());
    }
}
