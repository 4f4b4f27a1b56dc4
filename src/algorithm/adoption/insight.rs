//! Narrative insight text for the dashboard's insight panel
//!
//! These functions only format numbers computed elsewhere.

use crate::filter::FilterSelection;
use crate::models::{MonthlyAdoptionPoint, RegionTotal, SpecialtyTotal};

use super::series::{format_growth, month_over_month_growth};
use super::totals::highest_average_revenue;

/// Summary shown when a selection matches no records
pub const NO_DATA_MESSAGE: &str = "No data for the current selection.";

/// Fill the fixed insight template from already computed aggregates
///
/// Expects totals ordered largest first, as produced by `region_totals` and
/// `specialty_totals`.
#[must_use]
pub fn build_insight_summary(
    series: &[MonthlyAdoptionPoint],
    region_totals: &[RegionTotal],
    specialty_totals: &[SpecialtyTotal],
) -> String {
    let (Some(latest), Some(top_region), Some(top_specialty)) =
        (series.last(), region_totals.first(), specialty_totals.first())
    else {
        return NO_DATA_MESSAGE.to_string();
    };

    let total_procedures: usize = region_totals.iter().map(|t| t.procedure_count).sum();

    format!(
        "Market Velocity: {month} saw {count} new physician adopters, a {growth} \
         month-over-month change. Market Concentration: {region} leads with \
         {share:.1}% of procedure volume. Specialty Value: {specialty} is the largest \
         segment, averaging ${revenue} revenue impact per procedure.",
        month = latest.month,
        count = latest.new_adopter_count,
        growth = format_growth(month_over_month_growth(series)),
        region = top_region.name,
        share = top_region.share_of(total_procedures),
        specialty = top_specialty.name,
        revenue = format_currency(top_specialty.avg_revenue),
    )
}

/// Additional notes for a restricted selection
///
/// * A selected region gets its share of total market volume, taken from
///   `market_region_totals` (totals over the unfiltered dataset).
/// * A selected specialty gets its volume and average revenue, compared with
///   the highest-revenue specialty in `scoped_specialty_totals` (totals over
///   the region-filtered dataset).
#[must_use]
pub fn build_focus_notes(
    selection: &FilterSelection,
    market_region_totals: &[RegionTotal],
    scoped_specialty_totals: &[SpecialtyTotal],
) -> Vec<String> {
    let mut notes = Vec::new();

    if let Some(region) = selection.region.as_value() {
        let market_total: usize = market_region_totals.iter().map(|t| t.procedure_count).sum();
        if let Some(regional) = market_region_totals.iter().find(|t| t.name == region) {
            notes.push(format!(
                "Regional Strategy ({region}): This region accounts for {:.1}% of total \
                 market volume. Ensure sales efforts focus on quality account penetration \
                 over pure volume acquisition.",
                regional.share_of(market_total)
            ));
        }
    }

    if let Some(specialty) = selection.specialty.as_value() {
        let focus = scoped_specialty_totals.iter().find(|t| t.name == specialty);
        if let (Some(focus), Some(best)) = (focus, highest_average_revenue(scoped_specialty_totals))
        {
            notes.push(format!(
                "Specialty Focus ({specialty}): This segment has generated {} procedures with \
                 an average revenue impact of ${} per procedure. The {} specialty shows the \
                 highest average revenue impact (${}). Consider targeting the highest revenue \
                 specialties for future high-value accounts.",
                focus.procedure_count,
                format_currency(focus.avg_revenue),
                best.name,
                format_currency(best.avg_revenue),
            ));
        }
    }

    notes
}

/// Round to whole units with thousands separators (`12345.6` -> `"12,346"`)
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}
