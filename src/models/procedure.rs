//! Procedure records and the in-memory dataset

use std::ops::Deref;

use chrono::NaiveDate;
use serde::Serialize;

use super::period::YearMonth;

/// One procedure performed with the device
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcedureRecord {
    /// Date the procedure was performed
    pub procedure_date: NaiveDate,
    /// Opaque physician identifier
    pub physician_id: String,
    /// Sales region
    pub geographic_region: String,
    /// Physician specialty
    pub specialty: String,
    /// Monetary value of the procedure (finite, non-negative)
    pub revenue_impact: f64,
    /// Device identifier, when the source carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
}

impl ProcedureRecord {
    /// Create a record without a device identifier
    pub fn new(
        procedure_date: NaiveDate,
        physician_id: impl Into<String>,
        geographic_region: impl Into<String>,
        specialty: impl Into<String>,
        revenue_impact: f64,
    ) -> Self {
        Self {
            procedure_date,
            physician_id: physician_id.into(),
            geographic_region: geographic_region.into(),
            specialty: specialty.into(),
            revenue_impact,
            device_id: None,
        }
    }

    /// Attach a device identifier
    #[must_use]
    pub fn with_device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    /// Calendar month of the procedure
    #[must_use]
    pub fn month(&self) -> YearMonth {
        YearMonth::from_date(self.procedure_date)
    }
}

/// Immutable collection of procedure records
///
/// Loaded once per session and passed by reference to every computation.
/// Filtering produces a new set; records are never modified in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: Vec<ProcedureRecord>,
}

impl RecordSet {
    /// Wrap a list of records
    #[must_use]
    pub fn new(records: Vec<ProcedureRecord>) -> Self {
        Self { records }
    }

    /// Earliest and latest procedure dates
    #[must_use]
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.procedure_date).min()?;
        let last = self.records.iter().map(|r| r.procedure_date).max()?;
        Some((first, last))
    }
}

impl Deref for RecordSet {
    type Target = [ProcedureRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl FromIterator<ProcedureRecord> for RecordSet {
    fn from_iter<I: IntoIterator<Item = ProcedureRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a ProcedureRecord;
    type IntoIter = std::slice::Iter<'a, ProcedureRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
