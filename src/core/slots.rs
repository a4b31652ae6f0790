//! # Per-owner closed-listener slots.
//!
//! Each owner holds at most one listener for "notification closed by the
//! display system" events. Registration is last-wins: installing a new
//! listener replaces the prior one, with no combination and no queueing.
//! Unregistration is token-guarded so that a superseded registration cannot
//! evict its replacement.
//!
//! Registration and dispatch share this one map: a listener installed for an
//! owner is exactly the listener a completion for that owner can reach.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Arc, Weak};

use tokio::sync::RwLock;

use crate::core::center::Shared;
use crate::core::guard;
use crate::events::Bus;
use crate::types::NotificationId;

/// Owner-supplied listener for system-driven completions.
///
/// Invoked with the notification id and `by_user`; `by_user` is always
/// reported `true` — the display system does not distinguish dismissal
/// causes.
pub type ClosedListener = Arc<dyn Fn(&NotificationId, bool) + Send + Sync + 'static>;

/// Registration tokens; 0 is reserved for inert guards.
static SLOT_SEQ: AtomicU64 = AtomicU64::new(1);

struct SlotEntry {
    token: u64,
    listener: ClosedListener,
}

/// At-most-one closed-listener per owner.
pub(crate) struct CallbackSlots {
    slots: RwLock<HashMap<Arc<str>, SlotEntry>>,
}

impl CallbackSlots {
    pub(crate) fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Installs a listener, replacing any prior one. Returns the token that
    /// authorizes unregistration.
    pub(crate) async fn register(&self, owner: Arc<str>, listener: ClosedListener) -> u64 {
        let token = SLOT_SEQ.fetch_add(1, AtomicOrdering::Relaxed);
        let mut slots = self.slots.write().await;
        slots.insert(owner, SlotEntry { token, listener });
        token
    }

    /// Clears the slot, but only if `token` still owns it.
    pub(crate) async fn unregister(&self, owner: &str, token: u64) {
        let mut slots = self.slots.write().await;
        if slots.get(owner).is_some_and(|entry| entry.token == token) {
            slots.remove(owner);
        }
    }

    /// Clears the slot unconditionally (owner teardown).
    pub(crate) async fn drop_owner(&self, owner: &str) {
        self.slots.write().await.remove(owner);
    }

    /// Dispatches a completion to the owner's listener, if one is
    /// registered; no registration is a silent no-op.
    pub(crate) async fn dispatch(&self, bus: &Bus, owner: &str, id: &NotificationId, by_user: bool) {
        // Clone the listener out of the lock: it may re-enter the API.
        let listener = {
            let slots = self.slots.read().await;
            slots.get(owner).map(|entry| Arc::clone(&entry.listener))
        };
        if let Some(listener) = listener {
            guard::invoke(bus, owner, &listener, id, by_user);
        }
    }

    #[cfg(test)]
    pub(crate) async fn is_registered(&self, owner: &str) -> bool {
        self.slots.read().await.contains_key(owner)
    }
}

/// Unregistration handle returned by
/// [`NotificationsApi::on_closed`](crate::NotificationsApi::on_closed).
///
/// Calling [`unregister`](ClosedGuard::unregister) clears the owner's slot —
/// unless a later registration has replaced this one, in which case it is a
/// no-op. Dropping the guard leaves the registration in place.
pub struct ClosedGuard {
    owner: Arc<str>,
    token: u64,
    shared: Weak<Shared>,
}

impl ClosedGuard {
    pub(crate) fn new(owner: Arc<str>, token: u64, shared: Weak<Shared>) -> Self {
        Self {
            owner,
            token,
            shared,
        }
    }

    /// Guard for events that never fire.
    pub(crate) fn inert() -> Self {
        Self {
            owner: Arc::from(""),
            token: 0,
            shared: Weak::new(),
        }
    }

    /// Removes the registration this guard was returned for.
    pub async fn unregister(self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.slots.unregister(&self.owner, self.token).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::events::EventKind;

    fn recording_listener(log: &Arc<Mutex<Vec<(NotificationId, bool)>>>) -> ClosedListener {
        let log = Arc::clone(log);
        Arc::new(move |id: &NotificationId, by_user: bool| {
            log.lock().unwrap().push((id.clone(), by_user));
        })
    }

    #[tokio::test]
    async fn dispatch_reaches_registered_listener() {
        let slots = CallbackSlots::new();
        let bus = Bus::new(8);
        let log = Arc::new(Mutex::new(Vec::new()));
        slots
            .register(Arc::from("unit@a"), recording_listener(&log))
            .await;

        let id = NotificationId::from("n1");
        slots.dispatch(&bus, "unit@a", &id, true).await;

        assert_eq!(log.lock().unwrap().as_slice(), &[(id, true)]);
    }

    #[tokio::test]
    async fn dispatch_without_registration_is_silent() {
        let slots = CallbackSlots::new();
        let bus = Bus::new(8);
        let mut rx = bus.subscribe();

        slots
            .dispatch(&bus, "unit@a", &NotificationId::from("n1"), true)
            .await;

        assert!(matches!(
            rx.try_recv(),
            Err(tokio::sync::broadcast::error::TryRecvError::Empty)
        ));
    }

    #[tokio::test]
    async fn later_registration_replaces_earlier() {
        let slots = CallbackSlots::new();
        let bus = Bus::new(8);
        let first = Arc::new(Mutex::new(Vec::new()));
        let second = Arc::new(Mutex::new(Vec::new()));

        slots
            .register(Arc::from("unit@a"), recording_listener(&first))
            .await;
        slots
            .register(Arc::from("unit@a"), recording_listener(&second))
            .await;

        slots
            .dispatch(&bus, "unit@a", &NotificationId::from("n1"), true)
            .await;

        assert!(first.lock().unwrap().is_empty());
        assert_eq!(second.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn stale_token_cannot_evict_replacement() {
        let slots = CallbackSlots::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let stale = slots
            .register(Arc::from("unit@a"), recording_listener(&log))
            .await;
        slots
            .register(Arc::from("unit@a"), recording_listener(&log))
            .await;

        slots.unregister("unit@a", stale).await;
        assert!(slots.is_registered("unit@a").await);
    }

    #[tokio::test]
    async fn matching_token_clears_the_slot() {
        let slots = CallbackSlots::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let token = slots
            .register(Arc::from("unit@a"), recording_listener(&log))
            .await;
        slots.unregister("unit@a", token).await;
        assert!(!slots.is_registered("unit@a").await);
    }

    #[tokio::test]
    async fn listener_panic_is_reported_not_propagated() {
        let slots = CallbackSlots::new();
        let bus = Bus::new(8);
        let mut rx = bus.subscribe();

        slots
            .register(
                Arc::from("unit@a"),
                Arc::new(|_: &NotificationId, _: bool| panic!("boom")),
            )
            .await;
        slots
            .dispatch(&bus, "unit@a", &NotificationId::from("n1"), true)
            .await;

        let ev = rx.recv().await.expect("panic report");
        assert_eq!(ev.kind, EventKind::CallbackPanicked);
    }
}
