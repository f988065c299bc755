//! Library entry point for the engine's script bindings.

pub mod app;
pub mod config;
pub mod engine;
pub mod scripting;

// Re-export main types for convenience
pub use app::ScriptApp;
pub use config::ScriptConfig;
pub use engine::math::Matrix;
pub use scripting::{BindingError, FailurePolicy, ScriptError, ScriptHost};
