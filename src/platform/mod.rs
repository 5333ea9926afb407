//! Platform abstraction layer
//!
//! Handles the host-facing pieces the simulation stays out of:
//! - Input events (key down/up to paddle direction + launch)
//! - Time (repeating fixed-period ticker)

pub mod input;
pub mod time;

pub use input::{Key, KeyState};
pub use time::FixedTicker;
