//! Toolshed - developer tool availability detection.
//!
//! Toolshed answers "is executable X runnable right now" with memoized
//! PATH probing, attaches install hints to missing tools, and conditionally
//! registers thin wrapper commands for the tools that are present.
//!
//! # Modules
//!
//! - [`availability`] - The availability cache: memoized probing, overrides,
//!   invalidation
//! - [`catalog`] - Built-in tool catalog and custom tool definitions
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Host shell environment detection
//! - [`ui`] - Terminal output, spinners, and tables
//! - [`wrappers`] - Conditional wrapper registration and execution
//!
//! # Example
//!
//! ```
//! use toolshed::availability::{AvailabilityCache, SystemProbe};
//!
//! let cache = AvailabilityCache::new(Box::new(SystemProbe::new()));
//! cache.set_override("docker", true);
//! assert!(cache.is_available("docker"));
//! ```

pub mod availability;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod shell;
pub mod ui;
pub mod wrappers;

pub use error::{Result, ToolshedError};
