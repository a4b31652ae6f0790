//! # Global runtime configuration.
//!
//! [`Config`] sizes the two channels the center owns: the broadcast event bus
//! and the owner lifecycle signal channel.
//!
//! # Example
//! ```
//! use notivisor::Config;
//!
//! let mut cfg = Config::default();
//! cfg.bus_capacity = 256;
//!
//! assert_eq!(cfg.bus_capacity, 256);
//! ```

/// Configuration for a [`NotificationCenter`](crate::NotificationCenter).
#[derive(Clone, Debug)]
pub struct Config {
    /// Capacity of the broadcast event bus.
    pub bus_capacity: usize,
    /// Capacity of the owner lifecycle signal channel created by
    /// [`signal_channel`](crate::signal_channel).
    pub signal_capacity: usize,
}

impl Default for Config {
    /// Provides a default configuration:
    /// - `bus_capacity = 1024`
    /// - `signal_capacity = 64`
    fn default() -> Self {
        Self {
            bus_capacity: 1024,
            signal_capacity: 64,
        }
    }
}
