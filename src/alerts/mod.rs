//! Host alert subsystem boundary: service trait, request, observer.

mod observer;
mod service;

pub use observer::SystemObserver;
pub use service::{ALERT_FINISHED_TOPIC, AlertRequest, AlertService};
