//! Configuration loading, parsing, and validation.

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigSource};
pub use schema::{Config, CustomTool};
