//! Window management module.

pub mod manager;

pub use manager::WindowManager;
