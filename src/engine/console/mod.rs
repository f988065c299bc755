//! Console logging module
//! This module writes leveled, prefixed lines to standard output.

pub mod logger;

pub use logger::{Console, LogLevel, SharedBuffer, LINE_ENDING};
