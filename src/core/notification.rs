//! # Notification state machine.
//!
//! One notification moves through exactly two states:
//!
//! ```text
//! create ──► Active ──► Closed (terminal)
//!
//! Active → Closed via:
//!   - explicit close (API clear, or forced close during owner teardown)
//!   - system-driven completion (the display system reports the popup
//!     finished on its own)
//! ```
//!
//! The transition is one-way and idempotent: once Closed, repeated closes
//! and duplicate completion signals neither touch the alert subsystem nor
//! re-dispatch to the owner.
//!
//! Only the system-driven path echoes back to the owner's closed-listener;
//! explicit closes are owner-initiated and stay silent.

use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::{Arc, Weak};

use async_trait::async_trait;

use crate::alerts::{ALERT_FINISHED_TOPIC, SystemObserver};
use crate::core::center::Shared;
use crate::events::{Event, EventKind};
use crate::types::{NotificationId, NotificationOptions};

/// One alert's tracked state, scoped to the owner that created it.
pub(crate) struct Notification {
    owner: Arc<str>,
    id: NotificationId,
    options: NotificationOptions,
    /// `false` while Active; flipped exactly once.
    closed: AtomicBool,
    /// Back-reference for registry and slot access; never keeps the center
    /// alive.
    shared: Weak<Shared>,
}

impl Notification {
    pub(crate) fn new(
        owner: Arc<str>,
        id: NotificationId,
        options: NotificationOptions,
        shared: Weak<Shared>,
    ) -> Self {
        Self {
            owner,
            id,
            options,
            closed: AtomicBool::new(false),
            shared,
        }
    }

    pub(crate) fn owner(&self) -> &str {
        &self.owner
    }

    pub(crate) fn id(&self) -> &NotificationId {
        &self.id
    }

    pub(crate) fn options(&self) -> &NotificationOptions {
        &self.options
    }

    pub(crate) fn is_active(&self) -> bool {
        !self.closed.load(AtomicOrdering::SeqCst)
    }

    /// Owner-initiated close: ask the display system to dismiss the popup,
    /// leave the owner's set. The closed-listener is **not** invoked.
    pub(crate) async fn close_silent(&self) {
        if self.closed.swap(true, AtomicOrdering::SeqCst) {
            return;
        }
        let Some(shared) = self.shared.upgrade() else {
            return;
        };

        // Not every platform can close an alert; bookkeeping proceeds.
        if let Err(err) = shared.alerts.close_alert(&self.id).await {
            shared.bus.publish(
                Event::new(EventKind::AlertCloseFailed)
                    .with_owner(Arc::clone(&self.owner))
                    .with_id(&self.id)
                    .with_reason(err.as_label()),
            );
        }

        shared.registry.remove(self).await;
        shared.bus.publish(
            Event::new(EventKind::NotificationCleared)
                .with_owner(Arc::clone(&self.owner))
                .with_id(&self.id),
        );
    }
}

#[async_trait]
impl SystemObserver for Notification {
    /// System-driven completion: leave the owner's set and dispatch
    /// `(id, by_user = true)` to the owner's listener, if registered.
    ///
    /// `by_user` is always `true`; the display system does not report the
    /// dismissal cause.
    async fn on_system_event(&self, topic: &str, _data: &str) {
        if topic != ALERT_FINISHED_TOPIC {
            return;
        }
        if self.closed.swap(true, AtomicOrdering::SeqCst) {
            return;
        }
        let Some(shared) = self.shared.upgrade() else {
            return;
        };

        shared.registry.remove(self).await;
        shared
            .slots
            .dispatch(&shared.bus, &self.owner, &self.id, true)
            .await;
        shared.bus.publish(
            Event::new(EventKind::NotificationCompleted)
                .with_owner(Arc::clone(&self.owner))
                .with_id(&self.id),
        );
    }
}
