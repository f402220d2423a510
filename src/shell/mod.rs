//! Host shell environment detection.

pub mod platform;

pub use platform::is_ci;
