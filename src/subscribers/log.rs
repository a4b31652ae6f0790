//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints events to stdout in a human-readable format.
//!
//! ## Output format
//! ```text
//! [owner-started] owner=unit@example
//! [created] owner=unit@example id=n1
//! [completed] owner=unit@example id=n1
//! [show-failed] owner=unit@example id=n1 reason=alert_unavailable
//! [owner-stopped] owner=unit@example closed=2
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Simple stdout logging subscriber.
///
/// Enabled via the `logging` feature. Not intended for production use —
/// implement a custom [`Subscribe`] for structured logging or metrics.
#[derive(Default)]
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::OwnerStarted => {
                println!("[owner-started] owner={:?}", e.owner);
            }
            EventKind::OwnerStartupIgnored => {
                println!("[owner-startup-ignored] owner={:?}", e.owner);
            }
            EventKind::OwnerStopped => {
                println!("[owner-stopped] owner={:?} closed={:?}", e.owner, e.count);
            }
            EventKind::OwnerMissing => {
                println!("[owner-missing] owner={:?} id={:?}", e.owner, e.id);
            }
            EventKind::NotificationCreated => {
                println!("[created] owner={:?} id={:?}", e.owner, e.id);
            }
            EventKind::NotificationCleared => {
                println!("[cleared] owner={:?} id={:?}", e.owner, e.id);
            }
            EventKind::NotificationCompleted => {
                println!("[completed] owner={:?} id={:?}", e.owner, e.id);
            }
            EventKind::AlertShowFailed => {
                println!(
                    "[show-failed] owner={:?} id={:?} reason={:?}",
                    e.owner, e.id, e.reason
                );
            }
            EventKind::AlertCloseFailed => {
                println!(
                    "[close-failed] owner={:?} id={:?} reason={:?}",
                    e.owner, e.id, e.reason
                );
            }
            EventKind::CallbackPanicked => {
                println!("[callback-panicked] owner={:?} reason={:?}", e.owner, e.reason);
            }
            EventKind::SubscriberPanicked => {
                println!("[subscriber-panicked] reason={:?}", e.reason);
            }
            EventKind::SubscriberOverflow => {
                println!("[subscriber-overflow] reason={:?}", e.reason);
            }
        }
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
