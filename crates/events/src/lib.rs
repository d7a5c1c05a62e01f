//! In-process portal event bus.
//!
//! Cross-component signals (payment completion, application submission)
//! travel over a typed broadcast channel instead of an implicit global
//! hook, so interested components subscribe explicitly and drop their
//! receiver on teardown.

pub mod bus;

pub use bus::{EventBus, PortalEvent, PortalEventKind};
