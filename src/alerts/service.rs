//! # Host alert subsystem boundary.
//!
//! [`AlertService`] abstracts the platform service that actually renders a
//! desktop popup and later reports completion. It may be absent entirely
//! (headless hosts) or support only part of the surface (some platforms
//! cannot close an alert programmatically) — every failure is an
//! [`AlertError`] the lifecycle core catches and downgrades to a bus event.
//!
//! Completion is delivered out-of-band: the service receives a
//! [`SystemObserver`](crate::alerts::SystemObserver) handle alongside each
//! show request and invokes it with [`ALERT_FINISHED_TOPIC`] when the popup
//! finishes on its own.

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::alerts::SystemObserver;
use crate::error::AlertError;
use crate::types::NotificationId;

/// Topic reported by the display system when a popup finishes on its own.
pub const ALERT_FINISHED_TOPIC: &str = "alertfinished";

/// One display request handed to the alert subsystem.
#[derive(Debug, Clone)]
pub struct AlertRequest {
    /// Resolved absolute icon URL, if any.
    pub image: Option<Url>,
    /// Title line of the popup.
    pub title: String,
    /// Body text of the popup.
    pub message: String,
    /// Whether the body text is clickable. Always `false`: interactive
    /// notifications are not supported.
    pub text_clickable: bool,
    /// Opaque cookie echoed back by some platforms; the notification id
    /// serves as both the cookie and the alert name.
    pub cookie: NotificationId,
    /// Platform-visible alert name, used to address a later close.
    pub name: NotificationId,
}

/// # Platform service that renders desktop popups.
///
/// Implementations bridge to the host windowing system. Both operations may
/// fail; the lifecycle core never propagates these failures to owners.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use async_trait::async_trait;
/// use notivisor::{AlertError, AlertRequest, AlertService, NotificationId, SystemObserver};
///
/// /// Headless host: nothing is ever rendered.
/// struct NoopAlerts;
///
/// #[async_trait]
/// impl AlertService for NoopAlerts {
///     async fn show_alert(
///         &self,
///         _request: AlertRequest,
///         _observer: Arc<dyn SystemObserver>,
///     ) -> Result<(), AlertError> {
///         Err(AlertError::Unavailable)
///     }
///
///     async fn close_alert(&self, _name: &NotificationId) -> Result<(), AlertError> {
///         Err(AlertError::Unavailable)
///     }
/// }
/// ```
#[async_trait]
pub trait AlertService: Send + Sync + 'static {
    /// Displays a popup.
    ///
    /// The service keeps the `observer` handle and invokes it with
    /// [`ALERT_FINISHED_TOPIC`] when the popup finishes on its own; the call
    /// itself returns as soon as the request is issued.
    async fn show_alert(
        &self,
        request: AlertRequest,
        observer: Arc<dyn SystemObserver>,
    ) -> Result<(), AlertError>;

    /// Dismisses a previously shown popup by name.
    async fn close_alert(&self, name: &NotificationId) -> Result<(), AlertError>;
}
