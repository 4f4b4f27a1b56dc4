//! CSV dataset loading
//!
//! Reads procedure records with arrow's CSV reader. Every column is read as
//! text and parsed here, so a bad cell is reported with its row and column
//! instead of surfacing as a type inference failure.

use std::fs::File;
use std::io::Seek;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use arrow::array::{Array, StringArray};
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::record_batch::RecordBatch;

use crate::config::DashboardConfig;
use crate::error::util::safe_open_file;
use crate::error::{DataIssue, EngineError, Result};
use crate::models::{ProcedureRecord, RecordSet};
use crate::schema::{
    self, ColumnLayout, DateFormatConfig, GEOGRAPHIC_REGION, PHYSICIAN_ID, PROCEDURE_DATE,
    REVENUE_IMPACT, SPECIALTY, parse_date_string,
};
use crate::utils::logging::{log_dropped_rows, log_load_complete, log_load_start};

/// Load the dataset at `path` with default settings
///
/// # Errors
/// Returns `DataUnavailable` if the file is missing, malformed, lacks a
/// required column, holds an invalid value or has no records.
pub fn load(path: &Path) -> Result<RecordSet> {
    load_with_config(path, &DashboardConfig::default())
}

/// Load the dataset at `path` using the date handling and batch size in `config`
///
/// `config.data_path` is ignored; callers pass the path explicitly.
pub fn load_with_config(path: &Path, config: &DashboardConfig) -> Result<RecordSet> {
    log_load_start(path);
    let start = Instant::now();

    let mut file = safe_open_file(path, "reading procedure records")?;
    let unavailable = |issue: DataIssue| EngineError::data_unavailable(path, issue);

    let format = Format::default().with_header(true);
    let (file_schema, _) = format
        .infer_schema(&mut file, Some(100))
        .map_err(|e| unavailable(e.into()))?;
    file.rewind().map_err(|e| unavailable(e.into()))?;

    let layout = ColumnLayout::resolve(&file_schema)
        .map_err(|missing| unavailable(DataIssue::MissingColumns(missing)))?;

    let batches = read_batches(file, &file_schema, &layout, config.batch_size)
        .map_err(|e| unavailable(e.into()))?;

    let mut parser = RowParser {
        layout: &layout,
        dates: &config.date_format_config,
        drop_unparseable_dates: config.drop_unparseable_dates,
        rows_seen: 0,
        rows_dropped: 0,
    };

    let mut records = Vec::new();
    for batch in &batches {
        parser
            .parse_batch(batch, &mut records)
            .map_err(unavailable)?;
    }

    if parser.rows_dropped > 0 {
        log_dropped_rows(path, parser.rows_dropped, parser.rows_seen);
    }

    if records.is_empty() {
        return Err(unavailable(DataIssue::NoRecords));
    }

    let records = RecordSet::new(records);
    log_load_complete(path, &records, start.elapsed());
    Ok(records)
}

/// Read the projected columns of the file as text batches
fn read_batches(
    file: File,
    file_schema: &arrow::datatypes::Schema,
    layout: &ColumnLayout,
    batch_size: usize,
) -> std::result::Result<Vec<RecordBatch>, arrow::error::ArrowError> {
    let text_schema = schema::as_text_schema(file_schema);
    let projection = layout
        .projected_names()
        .into_iter()
        .map(|name| text_schema.index_of(name))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let reader = ReaderBuilder::new(Arc::new(text_schema))
        .with_header(true)
        .with_batch_size(batch_size)
        .with_projection(projection)
        .build(file)?;

    reader.collect()
}

/// Converts text batches into typed records, tracking row numbers across batches
struct RowParser<'a> {
    layout: &'a ColumnLayout,
    dates: &'a DateFormatConfig,
    drop_unparseable_dates: bool,
    rows_seen: usize,
    rows_dropped: usize,
}

impl RowParser<'_> {
    fn parse_batch(
        &mut self,
        batch: &RecordBatch,
        out: &mut Vec<ProcedureRecord>,
    ) -> std::result::Result<(), DataIssue> {
        let dates = text_column(batch, self.layout.header_for(PROCEDURE_DATE))?;
        let physicians = text_column(batch, self.layout.header_for(PHYSICIAN_ID))?;
        let regions = text_column(batch, self.layout.header_for(GEOGRAPHIC_REGION))?;
        let specialties = text_column(batch, self.layout.header_for(SPECIALTY))?;
        let revenues = text_column(batch, self.layout.header_for(REVENUE_IMPACT))?;
        let devices = match &self.layout.device_id {
            Some(name) => Some(text_column(batch, name)?),
            None => None,
        };

        out.reserve(batch.num_rows());
        for idx in 0..batch.num_rows() {
            self.rows_seen += 1;
            let row = self.rows_seen;

            let raw_date = required_cell(dates, idx, row, PROCEDURE_DATE)?;
            let Some(procedure_date) = parse_date_string(raw_date, self.dates) else {
                if self.drop_unparseable_dates {
                    self.rows_dropped += 1;
                    continue;
                }
                return Err(DataIssue::InvalidValue {
                    row,
                    column: PROCEDURE_DATE,
                    value: raw_date.to_string(),
                });
            };

            let raw_revenue = required_cell(revenues, idx, row, REVENUE_IMPACT)?;
            let revenue_impact = parse_revenue(raw_revenue).ok_or_else(|| {
                DataIssue::InvalidValue {
                    row,
                    column: REVENUE_IMPACT,
                    value: raw_revenue.to_string(),
                }
            })?;

            out.push(ProcedureRecord {
                procedure_date,
                physician_id: required_cell(physicians, idx, row, PHYSICIAN_ID)?.to_string(),
                geographic_region: required_cell(regions, idx, row, GEOGRAPHIC_REGION)?
                    .to_string(),
                specialty: required_cell(specialties, idx, row, SPECIALTY)?.to_string(),
                revenue_impact,
                device_id: devices
                    .and_then(|d| optional_cell(d, idx))
                    .map(str::to_string),
            });
        }

        Ok(())
    }
}

/// Get a projected column as a string array
fn text_column<'b>(
    batch: &'b RecordBatch,
    name: &str,
) -> std::result::Result<&'b StringArray, DataIssue> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| DataIssue::MissingColumns(vec![name.to_string()]))?;
    batch
        .column(idx)
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| DataIssue::MissingColumns(vec![name.to_string()]))
}

/// Trimmed cell content, or `None` if null or blank
fn optional_cell(array: &StringArray, idx: usize) -> Option<&str> {
    if array.is_null(idx) {
        return None;
    }
    let value = array.value(idx).trim();
    (!value.is_empty()).then_some(value)
}

fn required_cell<'b>(
    array: &'b StringArray,
    idx: usize,
    row: usize,
    column: &'static str,
) -> std::result::Result<&'b str, DataIssue> {
    optional_cell(array, idx).ok_or(DataIssue::MissingValue { row, column })
}

/// Parse a revenue amount; must be finite and non-negative
fn parse_revenue(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
