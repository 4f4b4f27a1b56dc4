//! A Rust library for computing commercial adoption metrics from
//! medical-device procedure records.
//!
//! The dataset is loaded once per session and passed explicitly to every
//! computation; each dashboard interaction is a pure function of the dataset
//! and a `FilterSelection`.

pub mod algorithm;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod loader;
pub mod models;
pub mod schema;
pub mod simulation;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::DashboardConfig;
pub use error::{DataIssue, EngineError, Result};
pub use models::{
    CategoryTotal, MonthlyAdoptionPoint, ProcedureRecord, RecordSet, RegionTotal, SpecialtyTotal,
    YearMonth,
};

// Loading and filtering
pub use filter::{FilterOptions, FilterSelection, Selection, filter, filter_options};
pub use loader::{load, load_with_config};

// Metrics
pub use algorithm::adoption::{
    build_focus_notes, build_insight_summary, first_adoption_month, month_over_month_growth,
    monthly_adoption_series, region_totals, specialty_totals,
};
pub use dashboard::{ChartTitles, DashboardView, compute_dashboard};
