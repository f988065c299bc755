//! Lua bindings for the engine.
//!
//! Everything is installed under one global namespace table (`engine` by
//! default):
//!
//! - `engine.mat`: matrix construction and arithmetic
//! - `engine.log`: leveled console output
//! - `engine.events`: window event subscriptions

pub mod args;
pub mod error;
pub mod events;
pub mod host;
pub mod log;
pub mod matrix;

pub use error::{BindingError, FailurePolicy, ScriptError};
pub use host::ScriptHost;
pub use matrix::{is_matrix, LuaMatrix};
