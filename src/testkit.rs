//! Recording alert-subsystem fixture shared by the crate's tests.
//!
//! [`RecordingAlerts`] stands in for the platform display service: it
//! records every show/close attempt, retains the completion observers it was
//! handed, and lets a test deliver system signals on demand.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::alerts::{ALERT_FINISHED_TOPIC, AlertRequest, AlertService, SystemObserver};
use crate::error::AlertError;
use crate::types::NotificationId;

pub(crate) struct RecordingAlerts {
    fail_show: bool,
    fail_close: bool,
    requests: Mutex<Vec<AlertRequest>>,
    closes: Mutex<Vec<NotificationId>>,
    observers: Mutex<Vec<(NotificationId, Arc<dyn SystemObserver>)>>,
}

impl RecordingAlerts {
    /// A fully working display service.
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            fail_show: false,
            fail_close: false,
            requests: Mutex::new(Vec::new()),
            closes: Mutex::new(Vec::new()),
            observers: Mutex::new(Vec::new()),
        })
    }

    /// A platform with no alert support at all: every call fails.
    pub(crate) fn unavailable() -> Arc<Self> {
        Arc::new(Self {
            fail_show: true,
            fail_close: true,
            requests: Mutex::new(Vec::new()),
            closes: Mutex::new(Vec::new()),
            observers: Mutex::new(Vec::new()),
        })
    }

    /// Every show attempt, in order, including failed ones.
    pub(crate) fn requests(&self) -> Vec<AlertRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Every close attempt, in order, including failed ones.
    pub(crate) fn closed_ids(&self) -> Vec<NotificationId> {
        self.closes.lock().unwrap().clone()
    }

    /// Delivers an arbitrary system topic to the observers shown for `id`.
    pub(crate) async fn signal(&self, id: &NotificationId, topic: &str) -> bool {
        let targets: Vec<Arc<dyn SystemObserver>> = {
            let observers = self.observers.lock().unwrap();
            observers
                .iter()
                .filter(|(name, _)| name == id)
                .map(|(_, obs)| Arc::clone(obs))
                .collect()
        };
        for observer in &targets {
            observer.on_system_event(topic, "").await;
        }
        !targets.is_empty()
    }

    /// Reports the popup finished on its own. Observers are retained so a
    /// test can deliver duplicate completions.
    pub(crate) async fn finish(&self, id: &NotificationId) -> bool {
        self.signal(id, ALERT_FINISHED_TOPIC).await
    }
}

#[async_trait]
impl AlertService for RecordingAlerts {
    async fn show_alert(
        &self,
        request: AlertRequest,
        observer: Arc<dyn SystemObserver>,
    ) -> Result<(), AlertError> {
        let name = request.name.clone();
        self.requests.lock().unwrap().push(request);
        if self.fail_show {
            return Err(AlertError::Unavailable);
        }
        self.observers.lock().unwrap().push((name, observer));
        Ok(())
    }

    async fn close_alert(&self, name: &NotificationId) -> Result<(), AlertError> {
        self.closes.lock().unwrap().push(name.clone());
        if self.fail_close {
            return Err(AlertError::Unsupported {
                what: "close".to_string(),
            });
        }
        Ok(())
    }
}
