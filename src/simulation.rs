//! Simulated procedure datasets
//!
//! Generates a reproducible device-adoption dataset from a seed and writes it
//! in the CSV layout the loader reads back.

use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::csv::WriterBuilder;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use chrono::{Duration, NaiveDate};
use rand::prelude::*;

use crate::models::{ProcedureRecord, RecordSet, YearMonth};
use crate::schema::{
    DEVICE_ID, GEOGRAPHIC_REGION, PHYSICIAN_ID, PROCEDURE_DATE, REVENUE_IMPACT, SPECIALTY,
};

/// Parameters for a simulated dataset
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// RNG seed; equal seeds give equal datasets
    pub seed: u64,
    /// Number of distinct physicians
    pub physician_count: usize,
    /// First month of the simulated window
    pub start_month: YearMonth,
    /// Length of the window in months
    pub months: u32,
    /// Region values to draw from
    pub regions: Vec<String>,
    /// Specialty values to draw from
    pub specialties: Vec<String>,
    /// Upper bound on procedures per physician (at least one each)
    pub max_procedures_per_physician: usize,
    /// Inclusive-exclusive revenue bounds per procedure
    pub revenue_range: (f64, f64),
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            physician_count: 250,
            start_month: YearMonth::new(2023, 1).unwrap_or_else(|| {
                YearMonth::from_date(NaiveDate::default())
            }),
            months: 12,
            regions: ["Northeast", "Southeast", "Midwest", "Southwest", "West"]
                .map(String::from)
                .to_vec(),
            specialties: [
                "Cardiology",
                "Interventional Radiology",
                "Vascular Surgery",
                "Neurosurgery",
            ]
            .map(String::from)
            .to_vec(),
            max_procedures_per_physician: 8,
            revenue_range: (1_500.0, 12_000.0),
        }
    }
}

/// Generate records for `config`
///
/// Each physician gets a region, a specialty and an adoption month; their
/// first procedure falls in that month and later ones anywhere up to the end
/// of the window.
#[must_use]
pub fn simulate_records(config: &SimulationConfig) -> RecordSet {
    let Some(window_start) = config.start_month.start_date() else {
        return RecordSet::default();
    };
    let window_end = config
        .start_month
        .plus_months(config.months)
        .start_date()
        .and_then(|d| d.pred_opt());
    let Some(window_end) = window_end else {
        return RecordSet::default();
    };

    if config.months == 0 || config.regions.is_empty() || config.specialties.is_empty() {
        log::warn!("Simulation config produces no records: {config:?}");
        return RecordSet::default();
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let (min_revenue, max_revenue) = config.revenue_range;
    let max_procedures = config.max_procedures_per_physician.max(1);
    let mut records = Vec::new();
    let mut device_counter = 0usize;

    for physician in 0..config.physician_count {
        let physician_id = format!("PHY-{:04}", physician + 1);
        let region = &config.regions[rng.random_range(0..config.regions.len())];
        let specialty = &config.specialties[rng.random_range(0..config.specialties.len())];

        let adoption_month = config
            .start_month
            .plus_months(rng.random_range(0..config.months));
        let adoption_date = adoption_month
            .start_date()
            .map_or(window_start, |d| d + Duration::days(rng.random_range(0..28)));
        let remaining_days = (window_end - adoption_date).num_days().max(0);

        for n in 0..rng.random_range(1..=max_procedures) {
            let procedure_date = if n == 0 {
                adoption_date
            } else {
                adoption_date + Duration::days(rng.random_range(0..=remaining_days))
            };
            let revenue = if max_revenue > min_revenue {
                rng.random_range(min_revenue..max_revenue)
            } else {
                min_revenue
            };

            device_counter += 1;
            records.push(
                ProcedureRecord::new(
                    procedure_date,
                    physician_id.clone(),
                    region.clone(),
                    specialty.clone(),
                    (revenue * 100.0).round() / 100.0,
                )
                .with_device_id(format!("DEV-{device_counter:06}")),
            );
        }
    }

    records.sort_by_key(|r| r.procedure_date);
    log::info!(
        "Simulated {} procedures for {} physicians",
        records.len(),
        config.physician_count
    );
    RecordSet::new(records)
}

/// Write `records` as CSV with a header row, creating parent directories
pub fn write_csv(records: &RecordSet, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let batch = to_record_batch(records).context("Failed to build record batch")?;
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = WriterBuilder::new().with_header(true).build(file);
    writer
        .write(&batch)
        .with_context(|| format!("Failed to write CSV to {}", path.display()))?;

    log::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

fn to_record_batch(records: &RecordSet) -> arrow::error::Result<RecordBatch> {
    let schema = Schema::new(vec![
        Field::new(PROCEDURE_DATE, DataType::Utf8, false),
        Field::new(PHYSICIAN_ID, DataType::Utf8, false),
        Field::new(GEOGRAPHIC_REGION, DataType::Utf8, false),
        Field::new(SPECIALTY, DataType::Utf8, false),
        Field::new(REVENUE_IMPACT, DataType::Float64, false),
        Field::new(DEVICE_ID, DataType::Utf8, true),
    ]);

    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from_iter_values(
            records
                .iter()
                .map(|r| r.procedure_date.format("%Y-%m-%d").to_string()),
        )),
        Arc::new(StringArray::from_iter_values(
            records.iter().map(|r| r.physician_id.as_str()),
        )),
        Arc::new(StringArray::from_iter_values(
            records.iter().map(|r| r.geographic_region.as_str()),
        )),
        Arc::new(StringArray::from_iter_values(
            records.iter().map(|r| r.specialty.as_str()),
        )),
        Arc::new(Float64Array::from_iter_values(
            records.iter().map(|r| r.revenue_impact),
        )),
        Arc::new(StringArray::from_iter(
            records.iter().map(|r| r.device_id.as_deref()),
        )),
    ];

    RecordBatch::try_new(Arc::new(schema), columns)
}
