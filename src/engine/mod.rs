//! Engine module containing math types, console output, events, and window management.

pub mod console;
pub mod events;
pub mod math;
pub mod window;

// Re-export commonly used types
pub use console::{Console, LogLevel};
pub use events::{EngineEvent, EventHub, Subscription};
pub use math::Matrix;
pub use window::WindowManager;
