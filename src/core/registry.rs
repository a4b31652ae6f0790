//! # Notification registry - per-owner set management.
//!
//! The registry maps each started owner to the insertion-ordered set of its
//! Active notifications:
//! - owner startup allocates an empty set (at most once per owner lifetime)
//! - closing a notification removes it from its owner's set
//! - owner teardown snapshots the set, force-closes each member, then
//!   discards the entry entirely
//!
//! ## Rules
//! - A notification is a member of its owner's set iff it is Active.
//! - `remove` of an absent entry, and any operation on an unknown owner, is
//!   a no-op, never an error.
//! - Lookup is a linear scan: per-owner counts are tens, not millions, and
//!   a `Vec` keeps enumeration in insertion order.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::core::notification::Notification;
use crate::events::{Bus, Event, EventKind};
use crate::types::NotificationId;

/// Per-owner sets of Active notifications.
pub(crate) struct Registry {
    owners: RwLock<HashMap<Arc<str>, Vec<Arc<Notification>>>>,
    bus: Bus,
}

impl Registry {
    pub(crate) fn new(bus: Bus) -> Self {
        Self {
            owners: RwLock::new(HashMap::new()),
            bus,
        }
    }

    /// Allocates an empty set for a starting owner.
    ///
    /// Returns `false` (and changes nothing) when the owner already has one:
    /// startup is expected to fire at most once per owner lifetime.
    pub(crate) async fn insert_owner(&self, name: Arc<str>) -> bool {
        let mut owners = self.owners.write().await;
        if owners.contains_key(name.as_ref()) {
            return false;
        }
        owners.insert(name, Vec::new());
        true
    }

    /// Discards an owner's entry entirely. Returns whether it existed.
    pub(crate) async fn drop_owner(&self, name: &str) -> bool {
        self.owners.write().await.remove(name).is_some()
    }

    /// Copies the owner's current members.
    ///
    /// Teardown iterates this snapshot while each close mutates the live
    /// set; iterating the set itself would skip entries.
    pub(crate) async fn snapshot(&self, name: &str) -> Vec<Arc<Notification>> {
        self.owners
            .read()
            .await
            .get(name)
            .cloned()
            .unwrap_or_default()
    }

    /// Adds a notification to its owner's set.
    ///
    /// An owner with no set (never started, or already torn down) is
    /// reported on the bus and the add is dropped.
    pub(crate) async fn add(&self, notification: Arc<Notification>) {
        let mut owners = self.owners.write().await;
        match owners.get_mut(notification.owner()) {
            Some(set) => set.push(notification),
            None => {
                let ev = Event::new(EventKind::OwnerMissing)
                    .with_owner(notification.owner().to_string())
                    .with_id(notification.id());
                drop(owners);
                self.bus.publish(ev);
            }
        }
    }

    /// Removes exactly this notification from its owner's set, by identity.
    pub(crate) async fn remove(&self, notification: &Notification) {
        let mut owners = self.owners.write().await;
        if let Some(set) = owners.get_mut(notification.owner()) {
            let target = notification as *const Notification;
            if let Some(pos) = set.iter().position(|n| Arc::as_ptr(n) == target) {
                set.remove(pos);
            }
        }
    }

    /// Finds an Active notification by id: linear scan, first match wins.
    pub(crate) async fn find(
        &self,
        owner: &str,
        id: &NotificationId,
    ) -> Option<Arc<Notification>> {
        let owners = self.owners.read().await;
        owners
            .get(owner)?
            .iter()
            .find(|n| n.id() == id)
            .map(Arc::clone)
    }

    /// Ids of the owner's Active notifications, in insertion order.
    pub(crate) async fn ids(&self, owner: &str) -> Vec<NotificationId> {
        self.owners
            .read()
            .await
            .get(owner)
            .map(|set| set.iter().map(|n| n.id().clone()).collect())
            .unwrap_or_default()
    }

    #[cfg(test)]
    pub(crate) async fn contains_owner(&self, name: &str) -> bool {
        self.owners.read().await.contains_key(name)
    }
}
