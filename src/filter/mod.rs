//! Filtering of procedure records by dropdown selections
//!
//! A `FilterSelection` is supplied by the presentation layer on each
//! interaction. Filtering is total: a selection that matches nothing yields
//! an empty `RecordSet`, never an error.

use std::fmt;

use itertools::Itertools;
use serde::Serialize;

use crate::models::{ProcedureRecord, RecordSet};

/// Defines a criterion for filtering records
pub trait FilterCriteria<T> {
    /// Determine if an entity meets the filter criteria
    fn meets_criteria(&self, entity: &T) -> bool;
}

/// A single dropdown value
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// No restriction
    #[default]
    All,
    /// Only records with exactly this value
    Only(String),
}

impl Selection {
    /// Does `value` pass this selection?
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }

    /// The selected value, if restricted
    #[must_use]
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value.as_str()),
        }
    }

    /// Is this the unrestricted selection?
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl From<&str> for Selection {
    /// Blank input and the dropdown's "all" labels map to `All`
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "" | "all" | "all regions" | "all specialties" => Self::All,
            _ => Self::Only(trimmed.to_string()),
        }
    }
}

impl From<Option<&str>> for Selection {
    fn from(s: Option<&str>) -> Self {
        s.map_or(Self::All, Self::from)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(value) => write!(f, "{value}"),
        }
    }
}

/// Region and specialty chosen in the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterSelection {
    /// Geographic region selection
    pub region: Selection,
    /// Specialty selection
    pub specialty: Selection,
}

impl FilterSelection {
    /// The unrestricted selection
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Build from raw dropdown values
    #[must_use]
    pub fn new(region: impl Into<Selection>, specialty: impl Into<Selection>) -> Self {
        Self {
            region: region.into(),
            specialty: specialty.into(),
        }
    }

    /// Replace the region selection
    #[must_use]
    pub fn with_region(mut self, region: impl Into<Selection>) -> Self {
        self.region = region.into();
        self
    }

    /// Replace the specialty selection
    #[must_use]
    pub fn with_specialty(mut self, specialty: impl Into<Selection>) -> Self {
        self.specialty = specialty.into();
        self
    }

    /// The same selection with the specialty restriction removed
    #[must_use]
    pub fn region_only(&self) -> Self {
        Self {
            region: self.region.clone(),
            specialty: Selection::All,
        }
    }

    /// Does this selection restrict anything?
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.region.is_all() && self.specialty.is_all()
    }
}

impl FilterCriteria<ProcedureRecord> for FilterSelection {
    fn meets_criteria(&self, record: &ProcedureRecord) -> bool {
        self.region.matches(&record.geographic_region) && self.specialty.matches(&record.specialty)
    }
}

/// Records matching `selection`, in their original order
#[must_use]
pub fn filter(records: &RecordSet, selection: &FilterSelection) -> RecordSet {
    if selection.is_unrestricted() {
        return records.clone();
    }

    let filtered: RecordSet = records
        .iter()
        .filter(|r| selection.meets_criteria(r))
        .cloned()
        .collect();

    log::debug!(
        "Filter region={} specialty={} kept {} of {} records",
        selection.region,
        selection.specialty,
        filtered.len(),
        records.len()
    );
    filtered
}

/// Values offered in the dashboard dropdowns
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterOptions {
    /// Distinct regions, sorted
    pub regions: Vec<String>,
    /// Distinct specialties, sorted
    pub specialties: Vec<String>,
}

/// Distinct, sorted region and specialty values present in `records`
#[must_use]
pub fn filter_options(records: &RecordSet) -> FilterOptions {
    FilterOptions {
        regions: records
            .iter()
            .map(|r| r.geographic_region.clone())
            .unique()
            .sorted()
            .collect(),
        specialties: records
            .iter()
            .map(|r| r.specialty.clone())
            .unique()
            .sorted()
            .collect(),
    }
}
