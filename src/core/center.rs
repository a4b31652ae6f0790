//! # NotificationCenter: owner lifecycle, per-owner surfaces, fan-out delivery.
//!
//! The [`NotificationCenter`] owns the event bus, the per-owner registry,
//! the closed-listener slots, and the handle to the host alert subsystem.
//! It subscribes once to the owner lifecycle source and hands out the
//! per-owner API surface on request.
//!
//! ## High-level architecture
//! ```text
//! Owner lifecycle source ──► signal_channel ──► lifecycle listener
//!                                                 ├─► Startup  → registry.insert_owner
//!                                                 └─► Shutdown → snapshot → close each → discard set + slot
//!
//! api_for(owner) ──► NotificationsApi
//!     ├─► create  → Notification (Active) → registry.add → AlertService::show_alert
//!     ├─► clear   → registry.find → Notification::close_silent
//!     ├─► get_all → registry.ids
//!     └─► on_closed → CallbackSlots (last-wins)
//!
//! AlertService (async, out-of-band)
//!     └─► Notification::on_system_event("alertfinished")
//!             → registry.remove → CallbackSlots::dispatch(id, by_user=true)
//!
//! Every step ──► Bus ──► fan-out listener ──► SubscriberSet ──► Subscribe impls
//! ```

use std::sync::Arc;

use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use crate::alerts::AlertService;
use crate::api::NotificationsApi;
use crate::config::Config;
use crate::core::lifecycle::{OwnerSignalKind, SignalReceiver};
use crate::core::registry::Registry;
use crate::core::slots::CallbackSlots;
use crate::events::{Bus, Event, EventKind};
use crate::subscribers::{Subscribe, SubscriberSet};
use crate::types::Owner;

/// State shared between the center, per-owner surfaces, and notifications.
pub(crate) struct Shared {
    pub(crate) registry: Registry,
    pub(crate) slots: CallbackSlots,
    pub(crate) alerts: Arc<dyn AlertService>,
    pub(crate) bus: Bus,
}

impl Shared {
    pub(crate) async fn owner_started(&self, owner: &Owner) -> bool {
        let inserted = self.registry.insert_owner(owner.name_arc()).await;
        let kind = if inserted {
            EventKind::OwnerStarted
        } else {
            EventKind::OwnerStartupIgnored
        };
        self.bus.publish(Event::new(kind).with_owner(owner.name_arc()));
        inserted
    }

    pub(crate) async fn owner_shutdown(&self, name: &str) {
        // Snapshot first: each close removes itself from the live set.
        let snapshot = self.registry.snapshot(name).await;
        let count = snapshot.len() as u32;
        for notification in &snapshot {
            notification.close_silent().await;
        }
        let existed = self.registry.drop_owner(name).await;
        self.slots.drop_owner(name).await;

        if existed {
            self.bus.publish(
                Event::new(EventKind::OwnerStopped)
                    .with_owner(name.to_string())
                    .with_count(count),
            );
        }
    }
}

/// Coordinates per-owner notification sets, event delivery, and teardown.
pub struct NotificationCenter {
    /// Global runtime configuration.
    pub cfg: Config,
    /// Fan-out set for subscribers.
    pub subs: Arc<SubscriberSet>,
    shared: Arc<Shared>,
    cancel: CancellationToken,
}

impl NotificationCenter {
    /// Creates a center and starts the bus→subscriber fan-out.
    ///
    /// Must be called from within a tokio runtime (subscriber workers and
    /// the fan-out listener are spawned here).
    pub fn new(
        cfg: Config,
        alerts: Arc<dyn AlertService>,
        subscribers: Vec<Arc<dyn Subscribe>>,
    ) -> Self {
        let bus = Bus::new(cfg.bus_capacity);
        let subs = Arc::new(SubscriberSet::new(subscribers, bus.clone()));
        let shared = Arc::new(Shared {
            registry: Registry::new(bus.clone()),
            slots: CallbackSlots::new(),
            alerts,
            bus,
        });
        let center = Self {
            cfg,
            subs,
            shared,
            cancel: CancellationToken::new(),
        };
        center.spawn_fanout_listener();
        center
    }

    /// Subscribes to the bus and forwards events to the subscriber set.
    fn spawn_fanout_listener(&self) {
        let mut rx = self.shared.bus.subscribe();
        let set = Arc::clone(&self.subs);
        let bus = self.shared.bus.clone();
        let cancel = self.cancel.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    msg = rx.recv() => match msg {
                        Ok(ev) => set.emit(&ev),
                        Err(broadcast::error::RecvError::Closed) => break,
                        Err(broadcast::error::RecvError::Lagged(_)) => {
                            bus.publish(Event::subscriber_overflow("fanout", "lagged"));
                            continue;
                        }
                    }
                }
            }
        });
    }

    /// Creates a new receiver observing subsequent bus events.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.shared.bus.subscribe()
    }

    /// Allocates an empty notification set for a starting owner.
    ///
    /// Returns `false` when the owner already started; the duplicate signal
    /// is ignored and reported on the bus.
    pub async fn owner_started(&self, owner: &Owner) -> bool {
        self.shared.owner_started(owner).await
    }

    /// Tears an owner down: force-closes every notification it still holds
    /// (close requested from the alert subsystem for each), discards its set
    /// and its closed-listener slot, and leaves no trace of the owner.
    ///
    /// Forced closes are silent: the owner's listener is never invoked.
    pub async fn owner_shutdown(&self, name: &str) {
        self.shared.owner_shutdown(name).await;
    }

    /// Subscribes once to the owner lifecycle source.
    ///
    /// Runs until the channel closes or the center shuts down.
    pub fn spawn_lifecycle_listener(&self, mut rx: SignalReceiver) {
        let shared = Arc::clone(&self.shared);
        let cancel = self.cancel.clone();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    signal = rx.recv() => match signal {
                        Some(signal) => match signal.kind {
                            OwnerSignalKind::Startup => {
                                shared.owner_started(&signal.owner).await;
                            }
                            OwnerSignalKind::Shutdown => {
                                shared.owner_shutdown(signal.owner.name()).await;
                            }
                        },
                        None => break,
                    }
                }
            }
        });
    }

    /// Returns the notification surface for one owner's isolated context.
    pub fn api_for(&self, owner: &Owner) -> NotificationsApi {
        NotificationsApi::new(owner.clone(), Arc::clone(&self.shared))
    }

    /// Stops the lifecycle and fan-out listeners. Subscriber workers drain
    /// and exit once the center is dropped.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}
