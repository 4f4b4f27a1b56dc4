//! Logging utilities for output
//!
//! This module provides utilities for logging and console rendering.

pub mod console;
pub mod log;

// Re-export commonly used functions for convenience
pub use log::{log_dropped_rows, log_load_complete, log_load_start};
pub use console::{print_dashboard, render_dashboard};
