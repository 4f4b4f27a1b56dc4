//! Adoption metrics for medical-device procedure data
//!
//! Every function here is pure: the output depends only on the records
//! passed in, and calling it twice gives the same result.

pub mod insight;
pub mod series;
pub mod totals;

// Re-export commonly used items
pub use insight::{NO_DATA_MESSAGE, build_focus_notes, build_insight_summary, format_currency};
pub use series::{
    first_adoption_month, format_growth, month_over_month_growth, monthly_adoption_series,
};
pub use totals::{highest_average_revenue, region_totals, specialty_totals};
