//! # Owner lifecycle signals.
//!
//! The embedding host delivers `startup(owner)` and `shutdown(owner)`
//! exactly once each per owner's life. Signals travel over a bounded mpsc
//! channel; the center subscribes once via
//! [`NotificationCenter::spawn_lifecycle_listener`](crate::NotificationCenter::spawn_lifecycle_listener).

use tokio::sync::mpsc;

use crate::types::Owner;

/// Kind of an owner lifecycle signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerSignalKind {
    /// The owner is starting; allocate its notification set.
    Startup,
    /// The owner is going away; force-close and discard everything it holds.
    Shutdown,
}

/// One owner lifecycle signal.
#[derive(Debug, Clone)]
pub struct OwnerSignal {
    /// Signal classification.
    pub kind: OwnerSignalKind,
    /// The owner the signal is about.
    pub owner: Owner,
}

impl OwnerSignal {
    /// Creates a startup signal.
    pub fn startup(owner: Owner) -> Self {
        Self {
            kind: OwnerSignalKind::Startup,
            owner,
        }
    }

    /// Creates a shutdown signal.
    pub fn shutdown(owner: Owner) -> Self {
        Self {
            kind: OwnerSignalKind::Shutdown,
            owner,
        }
    }
}

/// Sending half of an owner lifecycle channel.
pub type SignalSender = mpsc::Sender<OwnerSignal>;

/// Receiving half of an owner lifecycle channel.
pub type SignalReceiver = mpsc::Receiver<OwnerSignal>;

/// Creates a lifecycle channel pair (capacity clamped to ≥ 1).
pub fn signal_channel(capacity: usize) -> (SignalSender, SignalReceiver) {
    mpsc::channel(capacity.max(1))
}
