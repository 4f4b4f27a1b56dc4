//! Adoption velocity: first-adoption months and the monthly new-adopter series

use std::collections::BTreeMap;

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::models::{MonthlyAdoptionPoint, RecordSet, YearMonth};

/// Month of each physician's earliest procedure
///
/// Multiple procedures on the same earliest date still yield one entry.
#[must_use]
pub fn first_adoption_month(records: &RecordSet) -> BTreeMap<String, YearMonth> {
    let mut earliest: FxHashMap<&str, chrono::NaiveDate> = FxHashMap::default();
    for record in records {
        earliest
            .entry(record.physician_id.as_str())
            .and_modify(|date| {
                if record.procedure_date < *date {
                    *date = record.procedure_date;
                }
            })
            .or_insert(record.procedure_date);
    }

    earliest
        .into_iter()
        .map(|(physician, date)| (physician.to_string(), YearMonth::from_date(date)))
        .collect()
}

/// New adopters per month, ascending by month
///
/// Only months in which at least one physician adopted appear. The series
/// is not filled in over the calendar, so a month without adopters is absent
/// rather than present with a zero count.
#[must_use]
pub fn monthly_adoption_series(records: &RecordSet) -> Vec<MonthlyAdoptionPoint> {
    first_adoption_month(records)
        .into_values()
        .counts()
        .into_iter()
        .sorted_by_key(|(month, _)| *month)
        .map(|(month, new_adopter_count)| MonthlyAdoptionPoint {
            month,
            new_adopter_count,
        })
        .collect()
}

/// Percentage change between the last two points of the series
///
/// `None` when the series has fewer than two points or the previous count
/// is zero.
#[must_use]
pub fn month_over_month_growth(series: &[MonthlyAdoptionPoint]) -> Option<f64> {
    let [.., previous, latest] = series else {
        return None;
    };
    if previous.new_adopter_count == 0 {
        return None;
    }

    let previous = previous.new_adopter_count as f64;
    let latest = latest.new_adopter_count as f64;
    Some((latest - previous) / previous * 100.0)
}

/// Render a growth value for display (`"12.5%"` or `"N/A"`)
#[must_use]
pub fn format_growth(growth: Option<f64>) -> String {
    growth.map_or_else(|| "N/A".to_string(), |g| format!("{g:.1}%"))
}
