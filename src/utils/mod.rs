//! Utility functions for logging and console output

pub mod logging;
