//! # notivisor
//!
//! **Notivisor** is a per-owner desktop-notification lifecycle manager for
//! hosts that embed isolated extension-like units.
//!
//! Each owner may create, enumerate, and dismiss transient alert popups, and
//! receive a callback when the display system dismisses a popup on its own.
//! The crate tracks which notifications belong to which owner, drives each
//! notification's state machine, and routes system-driven completions back to
//! the single listener each owner may register.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │    Owner     │   │    Owner     │   │    Owner     │
//!     │ (unit  #1)   │   │ (unit  #2)   │   │ (unit  #3)   │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼ api_for          ▼ api_for          ▼ api_for
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  NotificationCenter                                               │
//! │  - Bus (broadcast events)                                         │
//! │  - Registry (per-owner sets of Active notifications)              │
//! │  - CallbackSlots (at most one closed-listener per owner)          │
//! │  - SubscriberSet (fans out to user subscribers)                   │
//! └──────┬──────────────────┬──────────────────┬───────────────┬──────┘
//!        ▼                  ▼                  ▼               │
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   │
//!     │ Notification │   │ Notification │   │ Notification │   │
//!     │(state machine│   │(state machine│   │(state machine│   │
//!     │ + observer)  │   │ + observer)  │   │ + observer)  │   │
//!     └┬─────────────┘   └┬─────────────┘   └┬─────────────┘   │
//!      │                  │                  │                 │
//!      │ show_alert /     │ Publishes        │ Publishes       │
//!      │ close_alert      │ Events:          │ Events:         │
//!      ▼                  │ - Created        │ - Completed     │
//!  AlertService           │ - Cleared        │ - ShowFailed    │
//!  (host display,         │                  │                 │
//!   may be absent)        ▼                  ▼                 ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                        Bus (broadcast channel)                    │
//! │                   (capacity: Config::bus_capacity)                │
//! └─────────────────────────────────┬─────────────────────────────────┘
//!                                   ▼
//!                       ┌────────────────────────┐
//!                       │    fan-out listener    │
//!                       │ (in NotificationCenter)│
//!                       └───────────┬────────────┘
//!                                   ▼
//!                             SubscriberSet
//!                            (per-sub queues)
//!                        ┌─────────┼─────────┐
//!                        ▼         ▼         ▼
//!                        worker1  worker2  workerN
//!                        ▼         ▼         ▼
//!                   sub1.on   sub2.on   subN.on
//!                    _event()  _event()  _event()
//! ```
//!
//! ### Lifecycle
//! ```text
//! OwnerSignal::Startup ──► Registry allocates an empty set (once per owner)
//!
//! api.create(request)
//!   ├─► id = explicit, or next value of the process-wide counter
//!   ├─► resolve icon URL against the owner's base
//!   ├─► Registry.add (notification is Active)
//!   └─► AlertService::show_alert(request, observer)
//!          └─ failure → AlertShowFailed event, bookkeeping unaffected
//!
//! Active ──► Closed (terminal, idempotent) via:
//!   ├─ api.clear(id)            → close_alert, leave set, NO listener echo
//!   ├─ owner shutdown            → snapshot, force-close each, discard set
//!   └─ "alertfinished" from the display system
//!          → leave set, dispatch (id, by_user = true) to the owner's
//!            closed-listener, if one is registered
//!
//! OwnerSignal::Shutdown ──► no trace of the owner remains
//! ```
//!
//! ## Features
//! | Area              | Description                                                             | Key types / traits                        |
//! |-------------------|-------------------------------------------------------------------------|-------------------------------------------|
//! | **Owner surface** | Create, clear, enumerate popups; subscribe to system-driven completions.| [`NotificationsApi`], [`CreateRequest`]   |
//! | **Lifecycle**     | Owner startup/shutdown signals drive set allocation and teardown.       | [`NotificationCenter`], [`OwnerSignal`]   |
//! | **Display seam**  | Pluggable host alert subsystem; failures degrade to bus events.         | [`AlertService`], [`SystemObserver`]      |
//! | **Subscriber API**| Hook into runtime events (logging, metrics, custom subscribers).        | [`Subscribe`]                             |
//! | **Errors**        | Typed errors for the display boundary; never cross the owner surface.   | [`AlertError`]                            |
//! | **Configuration** | Centralize channel capacities.                                          | [`Config`]                                |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//!
//! use async_trait::async_trait;
//! use notivisor::{
//!     AlertError, AlertRequest, AlertService, Config, CreateRequest, NotificationCenter,
//!     NotificationId, NotificationOptions, Owner, SystemObserver,
//! };
//!
//! /// Headless host: nothing is ever rendered, bookkeeping still works.
//! struct NoopAlerts;
//!
//! #[async_trait]
//! impl AlertService for NoopAlerts {
//!     async fn show_alert(
//!         &self,
//!         _request: AlertRequest,
//!         _observer: Arc<dyn SystemObserver>,
//!     ) -> Result<(), AlertError> {
//!         Err(AlertError::Unavailable)
//!     }
//!
//!     async fn close_alert(&self, _name: &NotificationId) -> Result<(), AlertError> {
//!         Err(AlertError::Unavailable)
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     // Build subscribers (optional)
//!     #[cfg(feature = "logging")]
//!     let subs: Vec<Arc<dyn notivisor::Subscribe>> = {
//!         use notivisor::LogWriter;
//!         vec![Arc::new(LogWriter::default())]
//!     };
//!     #[cfg(not(feature = "logging"))]
//!     let subs: Vec<Arc<dyn notivisor::Subscribe>> = Vec::new();
//!
//!     let center = NotificationCenter::new(Config::default(), Arc::new(NoopAlerts), subs);
//!
//!     let owner = Owner::new("unit@example");
//!     center.owner_started(&owner).await;
//!
//!     let api = center.api_for(&owner);
//!     let id = api
//!         .create(CreateRequest::new(NotificationOptions::new("Reminder", "Stand up!")))
//!         .await;
//!
//!     assert_eq!(api.get_all().await, vec![id.clone()]);
//!     assert!(api.clear(&id).await);
//!     assert!(api.get_all().await.is_empty());
//!
//!     center.shutdown();
//! }
//! ```
mod alerts;
mod api;
mod config;
mod core;
mod error;
mod events;
mod subscribers;
mod types;

#[cfg(test)]
mod testkit;

// ---- Public re-exports ----

pub use alerts::{ALERT_FINISHED_TOPIC, AlertRequest, AlertService, SystemObserver};
pub use api::{ButtonClickedListener, ClickedListener, CreateRequest, NotificationsApi};
pub use config::Config;
pub use crate::core::{
    ClosedGuard, ClosedListener, NotificationCenter, OwnerSignal, OwnerSignalKind,
    SignalReceiver, SignalSender, signal_channel,
};
pub use error::AlertError;
pub use events::{Bus, Event, EventKind};
pub use subscribers::{Subscribe, SubscriberSet};
pub use types::{NotificationId, NotificationOptions, Owner};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
