//! One dashboard interaction: dataset + selection in, view model out
//!
//! The presentation layer calls `compute_dashboard` once per filter change
//! and binds the returned `DashboardView` to its widgets.

use chrono::NaiveDate;
use serde::Serialize;

use crate::algorithm::adoption::{
    build_focus_notes, build_insight_summary, month_over_month_growth, monthly_adoption_series,
    region_totals, specialty_totals,
};
use crate::filter::{FilterOptions, FilterSelection, filter, filter_options};
use crate::models::{MonthlyAdoptionPoint, RecordSet, RegionTotal, SpecialtyTotal};

/// Everything the dashboard displays for one selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Selection this view was computed for
    pub selection: FilterSelection,
    /// Dropdown values available in the full dataset
    pub options: FilterOptions,
    /// Number of records matching the selection
    pub record_count: usize,
    /// Earliest and latest matching procedure dates
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    /// Line chart: new adopters per month
    pub adoption_series: Vec<MonthlyAdoptionPoint>,
    /// Growth between the last two months, `None` when undefined
    pub month_over_month_growth: Option<f64>,
    /// Bar chart: procedures per region
    pub region_totals: Vec<RegionTotal>,
    /// Bar chart: procedures per specialty, average revenue as hover data
    pub specialty_totals: Vec<SpecialtyTotal>,
    /// Insight panel summary
    pub summary: String,
    /// Extra insight paragraphs for restricted selections
    pub focus_notes: Vec<String>,
    /// Chart titles
    pub titles: ChartTitles,
}

impl DashboardView {
    /// True when the selection matched no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

/// Chart titles that depend on the region selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartTitles {
    /// Adoption line chart
    pub adoption: String,
    /// Region bar chart
    pub regions: String,
    /// Specialty bar chart
    pub specialties: String,
}

impl ChartTitles {
    /// Titles for the given selection
    #[must_use]
    pub fn for_selection(selection: &FilterSelection) -> Self {
        match selection.region.as_value() {
            Some(region) => Self {
                adoption: format!("Monthly New Adopting Physicians in {region}"),
                regions: "Total Procedure Volume by Geographic Region".to_string(),
                specialties: format!("Specialty Breakdown in {region}"),
            },
            None => Self {
                adoption: "Monthly New Adopting Physicians (Total Market)".to_string(),
                regions: "Total Procedure Volume by Geographic Region".to_string(),
                specialties: "Overall Specialty Breakdown".to_string(),
            },
        }
    }
}

/// Compute the full view for `selection` over `records`
///
/// The charts and summary use the records matching the whole selection.
/// Focus notes compare against the whole market (regions) and the
/// region-filtered records (specialties).
#[must_use]
pub fn compute_dashboard(records: &RecordSet, selection: &FilterSelection) -> DashboardView {
    let filtered = filter(records, selection);

    let adoption_series = monthly_adoption_series(&filtered);
    let growth = month_over_month_growth(&adoption_series);
    let regions = region_totals(&filtered);
    let specialties = specialty_totals(&filtered);
    let summary = build_insight_summary(&adoption_series, &regions, &specialties);

    let focus_notes = if selection.is_unrestricted() {
        Vec::new()
    } else {
        let market_regions = region_totals(records);
        let scoped_specialties = specialty_totals(&filter(records, &selection.region_only()));
        build_focus_notes(selection, &market_regions, &scoped_specialties)
    };

    log::debug!(
        "Computed dashboard for region={} specialty={}: {} records, {} months",
        selection.region,
        selection.specialty,
        filtered.len(),
        adoption_series.len()
    );

    DashboardView {
        selection: selection.clone(),
        options: filter_options(records),
        record_count: filtered.len(),
        date_range: filtered.date_range(),
        adoption_series,
        month_over_month_growth: growth,
        region_totals: regions,
        specialty_totals: specialties,
        summary,
        focus_notes,
        titles: ChartTitles::for_selection(selection),
    }
}
