//! Event bus and runtime events.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
