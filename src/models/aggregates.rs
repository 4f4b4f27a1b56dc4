//! Derived aggregate types
//!
//! Rebuilt from scratch on every filter change; nothing here is cached.

use serde::Serialize;

use super::period::YearMonth;

/// New adopters in one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyAdoptionPoint {
    /// Adoption month
    pub month: YearMonth,
    /// Physicians whose first procedure falls in `month`
    pub new_adopter_count: usize,
}

/// Procedure volume and revenue for one category value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// Category value (region or specialty name)
    pub name: String,
    /// Number of procedures
    pub procedure_count: usize,
    /// Sum of revenue impact
    pub total_revenue: f64,
    /// Mean revenue impact per procedure
    pub avg_revenue: f64,
}

impl CategoryTotal {
    /// Share of `total_count` contributed by this category, as a percentage
    #[must_use]
    pub fn share_of(&self, total_count: usize) -> f64 {
        if total_count == 0 {
            0.0
        } else {
            self.procedure_count as f64 / total_count as f64 * 100.0
        }
    }
}

/// Totals grouped by geographic region
pub type RegionTotal = CategoryTotal;

/// Totals grouped by specialty
pub type SpecialtyTotal = CategoryTotal;
