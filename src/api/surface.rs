//! # Per-owner notification surface.
//!
//! [`NotificationsApi`] is the object handed to each owner's isolated
//! context: create, clear, enumerate, and subscribe to system-driven
//! completions. All failure is communicated as a boolean result or by
//! silent omission — best-effort presentation, reliable bookkeeping.

use std::sync::Arc;

use crate::alerts::{AlertRequest, SystemObserver};
use crate::core::{ClosedGuard, ClosedListener, Notification, Shared};
use crate::events::{Event, EventKind};
use crate::types::{NotificationId, NotificationOptions, Owner};

/// Owner-supplied listener for clicks on the notification body.
///
/// Accepted for contract completeness; never invoked.
pub type ClickedListener = Arc<dyn Fn(&NotificationId) + Send + Sync + 'static>;

/// Owner-supplied listener for clicks on a notification button.
///
/// Accepted for contract completeness; never invoked.
pub type ButtonClickedListener = Arc<dyn Fn(&NotificationId, usize) + Send + Sync + 'static>;

/// One create call: display options plus an optional explicit id.
///
/// Without an explicit id, the next value of the process-wide counter is
/// assigned — shared across all owners, monotonic, never reused.
#[derive(Debug, Clone)]
pub struct CreateRequest {
    id: Option<NotificationId>,
    options: NotificationOptions,
}

impl CreateRequest {
    /// Creates a request that will auto-assign its id.
    pub fn new(options: NotificationOptions) -> Self {
        Self { id: None, options }
    }

    /// Supplies an explicit id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<NotificationId>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// The notification operations exposed to one owner's isolated context.
///
/// Obtained from
/// [`NotificationCenter::api_for`](crate::NotificationCenter::api_for).
/// Cheap to clone; all clones address the same owner.
#[derive(Clone)]
pub struct NotificationsApi {
    owner: Owner,
    shared: Arc<Shared>,
}

impl NotificationsApi {
    pub(crate) fn new(owner: Owner, shared: Arc<Shared>) -> Self {
        Self { owner, shared }
    }

    /// Name of the owner this surface belongs to.
    pub fn owner(&self) -> &str {
        self.owner.name()
    }

    /// Creates a notification and requests its display.
    ///
    /// Returns the id in use — whether or not the host actually rendered a
    /// popup. A failed display request is reported on the bus and otherwise
    /// ignored; the notification stays tracked so the owner's bookkeeping
    /// (`get_all`, `clear`) remains consistent.
    pub async fn create(&self, request: CreateRequest) -> NotificationId {
        let CreateRequest { id, options } = request;
        let id = id.unwrap_or_else(NotificationId::next_serial);
        let image = self.owner.resolve_icon(options.icon_url.as_deref());

        let display = AlertRequest {
            image,
            title: options.title.clone(),
            message: options.message.clone(),
            text_clickable: false,
            cookie: id.clone(),
            name: id.clone(),
        };
        let notification = Arc::new(Notification::new(
            self.owner.name_arc(),
            id.clone(),
            options,
            Arc::downgrade(&self.shared),
        ));

        // Register before issuing the display request: a completion delivered
        // immediately must find the notification in its owner's set.
        self.shared.registry.add(Arc::clone(&notification)).await;

        let observer: Arc<dyn SystemObserver> = notification;
        if let Err(err) = self.shared.alerts.show_alert(display, observer).await {
            self.shared.bus.publish(
                Event::new(EventKind::AlertShowFailed)
                    .with_owner(self.owner.name_arc())
                    .with_id(&id)
                    .with_reason(err.as_label()),
            );
        }

        self.shared.bus.publish(
            Event::new(EventKind::NotificationCreated)
                .with_owner(self.owner.name_arc())
                .with_id(&id),
        );
        id
    }

    /// Closes the caller's Active notification with this id.
    ///
    /// Returns `true` when a match was found and closed, `false` otherwise.
    /// Exactly one match is closed; the owner's closed-listener is not
    /// invoked for explicit closes.
    pub async fn clear(&self, id: &NotificationId) -> bool {
        match self.shared.registry.find(self.owner.name(), id).await {
            Some(notification) => {
                notification.close_silent().await;
                true
            }
            None => false,
        }
    }

    /// Ids of the caller's Active notifications, in creation order.
    pub async fn get_all(&self) -> Vec<NotificationId> {
        self.shared.registry.ids(self.owner.name()).await
    }

    /// Installs a listener for system-driven completions, replacing any
    /// previous registration for this owner.
    ///
    /// The returned guard's [`unregister`](ClosedGuard::unregister) clears
    /// the registration (unless it has already been replaced).
    pub async fn on_closed(&self, listener: ClosedListener) -> ClosedGuard {
        let token = self
            .shared
            .slots
            .register(self.owner.name_arc(), listener)
            .await;
        ClosedGuard::new(
            self.owner.name_arc(),
            token,
            Arc::downgrade(&self.shared),
        )
    }

    /// Body-click event. Present in the contract, intentionally inert:
    /// interactive notifications are not supported, so the listener is
    /// accepted and dropped and no event is ever delivered.
    pub fn on_clicked(&self, _listener: ClickedListener) -> ClosedGuard {
        ClosedGuard::inert()
    }

    /// Button-click event. Present in the contract, intentionally inert:
    /// interactive notifications are not supported, so the listener is
    /// accepted and dropped and no event is ever delivered.
    pub fn on_button_clicked(&self, _listener: ButtonClickedListener) -> ClosedGuard {
        ClosedGuard::inert()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::config::Config;
    use crate::core::NotificationCenter;
    use crate::testkit::RecordingAlerts;
    use url::Url;

    async fn surface_for(
        alerts: Arc<RecordingAlerts>,
        owner: Owner,
    ) -> (NotificationCenter, NotificationsApi) {
        let center = NotificationCenter::new(Config::default(), alerts, Vec::new());
        assert!(center.owner_started(&owner).await);
        let api = center.api_for(&owner);
        (center, api)
    }

    #[tokio::test]
    async fn create_then_clear_then_clear_again() {
        let alerts = RecordingAlerts::new();
        let (_center, api) = surface_for(Arc::clone(&alerts), Owner::new("unit@a")).await;

        let id = api
            .create(CreateRequest::new(NotificationOptions::new("t", "m")))
            .await;

        assert!(api.clear(&id).await);
        assert!(!api.clear(&id).await);
    }

    #[tokio::test]
    async fn auto_ids_are_distinct_across_owners() {
        let alerts = RecordingAlerts::new();
        let center = NotificationCenter::new(Config::default(), alerts, Vec::new());

        let mut serials = Vec::new();
        for name in ["unit@a", "unit@b"] {
            let owner = Owner::new(name);
            center.owner_started(&owner).await;
            let api = center.api_for(&owner);
            for _ in 0..5 {
                let id = api
                    .create(CreateRequest::new(NotificationOptions::new("t", "m")))
                    .await;
                serials.push(id.as_serial().expect("auto id is a serial"));
            }
        }

        let mut sorted = serials.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), serials.len(), "ids collided: {serials:?}");
        assert!(
            serials.windows(2).all(|w| w[0] < w[1]),
            "ids not monotonic: {serials:?}"
        );
    }

    #[tokio::test]
    async fn get_all_lists_in_creation_order() {
        let alerts = RecordingAlerts::new();
        let (_center, api) = surface_for(alerts, Owner::new("unit@a")).await;

        for id in ["z", "a", "m"] {
            api.create(CreateRequest::new(NotificationOptions::new("t", "m")).with_id(id))
                .await;
        }

        let rendered: Vec<String> = api.get_all().await.iter().map(|i| i.to_string()).collect();
        assert_eq!(rendered, ["z", "a", "m"]);
    }

    #[tokio::test]
    async fn failed_display_still_tracks_the_notification() {
        let alerts = RecordingAlerts::unavailable();
        let (center, api) = surface_for(Arc::clone(&alerts), Owner::new("unit@a")).await;
        let mut rx = center.subscribe();

        let id = api
            .create(CreateRequest::new(NotificationOptions::new("t", "m")).with_id("n1"))
            .await;

        assert_eq!(api.get_all().await, vec![id.clone()]);
        assert!(api.clear(&id).await, "clear succeeds despite a failed close");

        let mut saw_show_failure = false;
        while let Ok(ev) = rx.try_recv() {
            saw_show_failure |= ev.kind == EventKind::AlertShowFailed;
        }
        assert!(saw_show_failure);
    }

    #[tokio::test]
    async fn icon_urls_resolve_against_the_owner_base() {
        let alerts = RecordingAlerts::new();
        let owner =
            Owner::new("unit@a").with_base(Url::parse("resource://unit-a/").unwrap());
        let (_center, api) = surface_for(Arc::clone(&alerts), owner).await;

        api.create(
            CreateRequest::new(
                NotificationOptions::new("t", "m").with_icon("icons/48.png"),
            )
            .with_id("n1"),
        )
        .await;

        let shown = alerts.requests();
        assert_eq!(
            shown[0].image.as_ref().unwrap().as_str(),
            "resource://unit-a/icons/48.png"
        );
        assert!(!shown[0].text_clickable);
    }

    #[tokio::test]
    async fn options_are_carried_by_the_tracked_notification() {
        let alerts = RecordingAlerts::new();
        let (_center, api) = surface_for(alerts, Owner::new("unit@a")).await;

        let id = api
            .create(
                CreateRequest::new(NotificationOptions::new("title", "body")).with_id("n1"),
            )
            .await;

        let tracked = api
            .shared
            .registry
            .find("unit@a", &id)
            .await
            .expect("tracked");
        assert_eq!(tracked.options().title, "title");
        assert_eq!(tracked.options().message, "body");
        assert!(tracked.is_active());
    }

    #[tokio::test]
    async fn superseded_guard_cannot_evict_the_current_listener() {
        let alerts = RecordingAlerts::new();
        let (_center, api) = surface_for(Arc::clone(&alerts), Owner::new("unit@a")).await;

        let first: Arc<Mutex<Vec<(NotificationId, bool)>>> = Arc::new(Mutex::new(Vec::new()));
        let second = Arc::clone(&first);

        let stale = api
            .on_closed(Arc::new(|_: &NotificationId, _: bool| {}))
            .await;
        let _current = api
            .on_closed(Arc::new(move |id: &NotificationId, by_user: bool| {
                second.lock().unwrap().push((id.clone(), by_user));
            }))
            .await;

        stale.unregister().await;
        assert!(api.shared.slots.is_registered("unit@a").await);

        let id = api
            .create(CreateRequest::new(NotificationOptions::new("t", "m")).with_id("n1"))
            .await;
        alerts.finish(&id).await;
        assert_eq!(first.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unregistered_listener_stops_receiving() {
        let alerts = RecordingAlerts::new();
        let (_center, api) = surface_for(Arc::clone(&alerts), Owner::new("unit@a")).await;

        let fired: Arc<Mutex<Vec<(NotificationId, bool)>>> = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&fired);
        let guard = api
            .on_closed(Arc::new(move |id: &NotificationId, by_user: bool| {
                log.lock().unwrap().push((id.clone(), by_user));
            }))
            .await;
        guard.unregister().await;

        let id = api
            .create(CreateRequest::new(NotificationOptions::new("t", "m")).with_id("n1"))
            .await;
        alerts.finish(&id).await;
        assert!(fired.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn click_events_are_inert() {
        let alerts = RecordingAlerts::new();
        let (_center, api) = surface_for(Arc::clone(&alerts), Owner::new("unit@a")).await;

        let clicked = Arc::new(Mutex::new(0u32));
        let seen = Arc::clone(&clicked);
        let guard = api.on_clicked(Arc::new(move |_: &NotificationId| {
            *seen.lock().unwrap() += 1;
        }));
        let _buttons =
            api.on_button_clicked(Arc::new(|_: &NotificationId, _: usize| unreachable!()));

        let id = api
            .create(CreateRequest::new(NotificationOptions::new("t", "m")).with_id("n1"))
            .await;
        alerts.finish(&id).await;

        assert_eq!(*clicked.lock().unwrap(), 0);
        guard.unregister().await;
    }
}
