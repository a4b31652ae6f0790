//! # Safe invocation of owner-supplied callbacks.
//!
//! Owner code runs sandboxed; a listener that panics must never take the
//! host down with it. Every owner-facing dispatch goes through [`invoke`],
//! which contains the panic and reports it on the bus as
//! `CallbackPanicked`.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::core::slots::ClosedListener;
use crate::events::{Bus, Event};
use crate::types::NotificationId;

/// Invokes an owner's closed-listener, containing any panic.
pub(crate) fn invoke(
    bus: &Bus,
    owner: &str,
    listener: &ClosedListener,
    id: &NotificationId,
    by_user: bool,
) {
    if let Err(panic_err) = catch_unwind(AssertUnwindSafe(|| listener(id, by_user))) {
        let info = {
            let any = &*panic_err;
            if let Some(msg) = any.downcast_ref::<&'static str>() {
                (*msg).to_string()
            } else if let Some(msg) = any.downcast_ref::<String>() {
                msg.clone()
            } else {
                "unknown panic".to_string()
            }
        };
        bus.publish(Event::callback_panicked(owner.to_string(), info));
    }
}
