//! Event subscription module
//! Window events are fanned out to per-subscriber queues.

pub mod hub;
pub mod keys;

pub use hub::{EngineEvent, EventHub, SubscribeError, Subscription};
pub use keys::key_name;
