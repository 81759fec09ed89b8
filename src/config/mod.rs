//! Configuration module.
//!
//! This module locates the captured diagnostic files and loads
//! their contents for the reporters.

pub mod loader;
pub mod paths;

pub use loader::InputLoader;
pub use paths::InputPaths;
