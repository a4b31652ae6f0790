//! Per-owner API surface.

mod surface;

pub use surface::{ButtonClickedListener, ClickedListener, CreateRequest, NotificationsApi};
