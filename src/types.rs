//! # Core vocabulary: owners, notification ids, display options.
//!
//! An [`Owner`] is an isolated extension-like unit identified by name; it may
//! carry a base resource URL against which relative icon paths are resolved.
//! A [`NotificationId`] is either owner-supplied text or a serial drawn from a
//! single process-wide counter shared by every owner.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use url::Url;

/// Process-wide id counter: monotonic, never reset, never reused.
static NEXT_SERIAL: AtomicU64 = AtomicU64::new(0);

/// Identifier of one notification, scoped to the owner that created it.
///
/// Different owners may use the same id independently; ids auto-assigned via
/// [`NotificationId::next_serial`] are unique across all owners for the life
/// of the process.
///
/// # Example
/// ```
/// use notivisor::NotificationId;
///
/// let a = NotificationId::from("reminder");
/// let b = NotificationId::from("reminder");
/// assert_eq!(a, b);
///
/// let first = NotificationId::next_serial();
/// let second = NotificationId::next_serial();
/// assert!(first.as_serial().unwrap() < second.as_serial().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NotificationId {
    /// Owner-supplied identifier.
    Text(Arc<str>),
    /// Auto-assigned from the process-wide counter.
    Serial(u64),
}

impl NotificationId {
    /// Draws the next id from the process-wide counter.
    pub fn next_serial() -> Self {
        Self::Serial(NEXT_SERIAL.fetch_add(1, AtomicOrdering::Relaxed))
    }

    /// Returns the serial value for auto-assigned ids, `None` for text ids.
    pub fn as_serial(&self) -> Option<u64> {
        match self {
            Self::Serial(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl From<&str> for NotificationId {
    fn from(s: &str) -> Self {
        Self::Text(Arc::from(s))
    }
}

impl From<String> for NotificationId {
    fn from(s: String) -> Self {
        Self::Text(Arc::from(s.as_str()))
    }
}

impl From<u64> for NotificationId {
    fn from(n: u64) -> Self {
        Self::Serial(n)
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Serial(n) => write!(f, "{n}"),
        }
    }
}

/// Display options for one notification.
///
/// `icon_url` may be relative; it is resolved against the owner's base
/// resource URL once, at creation time.
#[derive(Debug, Clone)]
pub struct NotificationOptions {
    /// Title line of the popup.
    pub title: String,
    /// Body text of the popup.
    pub message: String,
    /// Optional icon, absolute or relative to the owner's base URL.
    pub icon_url: Option<String>,
}

impl NotificationOptions {
    /// Creates options with a title and message and no icon.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            icon_url: None,
        }
    }

    /// Attaches an icon URL.
    #[must_use]
    pub fn with_icon(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }
}

/// An isolated extension-like unit that may hold its own notifications.
///
/// Owners are supplied by the embedding host, never constructed by the
/// lifecycle core. Identity is the name; the optional base URL anchors
/// relative icon paths.
#[derive(Debug, Clone)]
pub struct Owner {
    name: Arc<str>,
    base: Option<Url>,
}

impl Owner {
    /// Creates an owner identity.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            base: None,
        }
    }

    /// Sets the owner's base resource URL.
    #[must_use]
    pub fn with_base(mut self, base: Url) -> Self {
        self.base = Some(base);
        self
    }

    /// Returns the owner's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_arc(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    /// Resolves an icon reference to an absolute URL.
    ///
    /// Relative references join against the base; without a base only
    /// absolute URLs survive. Unresolvable icons degrade to `None` and the
    /// alert is shown without an image.
    pub(crate) fn resolve_icon(&self, raw: Option<&str>) -> Option<Url> {
        let raw = raw?;
        match &self.base {
            Some(base) => base.join(raw).ok(),
            None => Url::parse(raw).ok(),
        }
    }
}
