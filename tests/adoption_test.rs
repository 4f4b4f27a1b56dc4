//! Tests for adoption metrics over filtered record sets

mod common;

use adoption_metrics::algorithm::adoption::{NO_DATA_MESSAGE, format_growth};
use adoption_metrics::{
    FilterSelection, MonthlyAdoptionPoint, RecordSet, YearMonth, build_insight_summary, filter,
    first_adoption_month, month_over_month_growth, monthly_adoption_series, region_totals,
    specialty_totals,
};
use common::{record, sample_records};

fn month(y: i32, m: u32) -> YearMonth {
    YearMonth::new(y, m).unwrap()
}

#[test]
fn test_two_physician_scenario() {
    let records: RecordSet = vec![
        record("P1", (2023, 1, 5), "West", "Cardiology", 100.0),
        record("P1", (2023, 2, 5), "West", "Cardiology", 100.0),
        record("P2", (2023, 2, 9), "West", "Cardiology", 100.0),
    ]
    .into_iter()
    .collect();

    let series = monthly_adoption_series(&records);
    assert_eq!(
        series,
        vec![
            MonthlyAdoptionPoint { month: month(2023, 1), new_adopter_count: 1 },
            MonthlyAdoptionPoint { month: month(2023, 2), new_adopter_count: 1 },
        ]
    );
    assert_eq!(month_over_month_growth(&series), Some(0.0));
    assert_eq!(format_growth(month_over_month_growth(&series)), "0.0%");
}

#[test]
fn test_single_record_scenario() {
    let records: RecordSet = vec![record("P1", (2023, 6, 1), "West", "Cardiology", 1000.0)]
        .into_iter()
        .collect();

    let regions = region_totals(&records);
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].name, "West");
    assert_eq!(regions[0].procedure_count, 1);
    assert!((regions[0].avg_revenue - 1000.0).abs() < f64::EPSILON);

    let east = filter(&records, &FilterSelection::new("East", "all"));
    assert!(east.is_empty());
    assert!(region_totals(&east).is_empty());
    assert!(specialty_totals(&east).is_empty());

    let series = monthly_adoption_series(&east);
    assert!(series.is_empty());
    assert_eq!(month_over_month_growth(&series), None);
    assert_eq!(
        build_insight_summary(&series, &region_totals(&east), &specialty_totals(&east)),
        NO_DATA_MESSAGE
    );
}

#[test]
fn test_region_counts_sum_to_record_count() {
    let records = sample_records();
    for selection in [
        FilterSelection::all(),
        FilterSelection::new("West", "all"),
        FilterSelection::new("all", "Cardiology"),
        FilterSelection::new("East", "Cardiology"),
    ] {
        let filtered = filter(&records, &selection);
        let total: usize = region_totals(&filtered).iter().map(|t| t.procedure_count).sum();
        assert_eq!(total, filtered.len(), "selection {selection:?}");
    }
}

#[test]
fn test_first_adoption_month_is_earliest_per_physician() {
    let records = sample_records();
    let firsts = first_adoption_month(&records);

    let distinct: std::collections::BTreeSet<&str> =
        records.iter().map(|r| r.physician_id.as_str()).collect();
    assert_eq!(firsts.len(), distinct.len());

    for record in &records {
        assert!(firsts[&record.physician_id] <= record.month());
    }
    assert_eq!(firsts["P1"], month(2023, 1));
}

#[test]
fn test_monthly_series_for_sample() {
    let series = monthly_adoption_series(&sample_records());
    let counts: Vec<(String, usize)> = series
        .iter()
        .map(|p| (p.month.to_string(), p.new_adopter_count))
        .collect();

    assert_eq!(
        counts,
        vec![
            ("2023-01".to_string(), 1),
            ("2023-02".to_string(), 2),
            ("2023-03".to_string(), 1),
        ]
    );
    assert_eq!(month_over_month_growth(&series), Some(-50.0));
}

#[test]
fn test_unrestricted_filter_is_identity() {
    let records = sample_records();
    assert_eq!(filter(&records, &FilterSelection::all()), records);
    assert_eq!(filter(&records, &FilterSelection::new("all", "All Specialties")), records);
}

#[test]
fn test_filter_by_both_dropdowns() {
    let records = sample_records();
    let east_cardio = filter(&records, &FilterSelection::new("East", "Cardiology"));
    assert_eq!(east_cardio.len(), 2);
    assert!(east_cardio
        .iter()
        .all(|r| r.geographic_region == "East" && r.specialty == "Cardiology"));

    let none = filter(&records, &FilterSelection::new("East", "Urology"));
    assert!(none.is_empty());
}

#[test]
fn test_aggregates_are_idempotent() {
    let filtered = filter(&sample_records(), &FilterSelection::new("West", "all"));

    assert_eq!(monthly_adoption_series(&filtered), monthly_adoption_series(&filtered));
    assert_eq!(first_adoption_month(&filtered), first_adoption_month(&filtered));
    assert_eq!(region_totals(&filtered), region_totals(&filtered));
    assert_eq!(specialty_totals(&filtered), specialty_totals(&filtered));

    let series = monthly_adoption_series(&filtered);
    let regions = region_totals(&filtered);
    let specialties = specialty_totals(&filtered);
    assert_eq!(
        build_insight_summary(&series, &regions, &specialties),
        build_insight_summary(&series, &regions, &specialties)
    );
}

#[test]
fn test_specialty_totals_for_sample() {
    let specialties = specialty_totals(&sample_records());
    assert_eq!(specialties.len(), 2);
    assert_eq!(specialties[0].name, "Cardiology");
    assert_eq!(specialties[0].procedure_count, 4);
    assert!((specialties[0].avg_revenue - 1250.0).abs() < f64::EPSILON);
    assert_eq!(specialties[1].name, "Urology");
    assert!((specialties[1].avg_revenue - 4000.0).abs() < f64::EPSILON);
}

#[test]
fn test_summary_for_sample() {
    let records = sample_records();
    let series = monthly_adoption_series(&records);
    let summary = build_insight_summary(
        &series,
        &region_totals(&records),
        &specialty_totals(&records),
    );

    assert!(summary.contains("2023-03 saw 1 new physician adopters"));
    assert!(summary.contains("a -50.0% month-over-month change"));
    assert!(summary.contains("West leads with 60.0% of procedure volume"));
    assert!(summary.contains("Cardiology is the largest segment, averaging $1,250"));
}
