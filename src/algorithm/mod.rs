//! Algorithm implementations for commercial adoption analysis
//!
//! This module contains the aggregations behind the dashboard: adoption
//! velocity, market concentration and the narrative insight text.

pub mod adoption;
