//! # Completion observer capability.
//!
//! The display system reports out-of-band outcomes (the popup finished, was
//! dismissed, timed out) by invoking an opaque [`SystemObserver`] handle it
//! received with the show request. The notification state machine implements
//! this trait; the alert service never learns anything else about it.

use async_trait::async_trait;

/// Capability handed to the alert subsystem at show time.
///
/// Topics other than [`ALERT_FINISHED_TOPIC`](crate::ALERT_FINISHED_TOPIC)
/// are ignored by the receiver; `data` is platform-defined and unused today.
#[async_trait]
pub trait SystemObserver: Send + Sync + 'static {
    /// Delivers one out-of-band signal from the display system.
    async fn on_system_event(&self, topic: &str, data: &str);
}
