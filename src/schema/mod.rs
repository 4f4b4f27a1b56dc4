//! Input schema for procedure record files
//!
//! Defines the columns a dataset must carry and how header names in a file
//! are matched against them.

pub mod date_utils;

pub use date_utils::{DateFormatConfig, parse_date_string};

use arrow::datatypes::{DataType, Field, Schema};

/// Canonical name of the procedure date column
pub const PROCEDURE_DATE: &str = "procedure_date";
/// Canonical name of the physician identifier column
pub const PHYSICIAN_ID: &str = "physician_id";
/// Canonical name of the region column
pub const GEOGRAPHIC_REGION: &str = "geographic_region";
/// Canonical name of the specialty column
pub const SPECIALTY: &str = "specialty";
/// Canonical name of the revenue column
pub const REVENUE_IMPACT: &str = "revenue_impact";
/// Canonical name of the optional device identifier column
pub const DEVICE_ID: &str = "device_id";

/// Columns every dataset must provide
pub const REQUIRED_COLUMNS: [&str; 5] = [
    PROCEDURE_DATE,
    PHYSICIAN_ID,
    GEOGRAPHIC_REGION,
    SPECIALTY,
    REVENUE_IMPACT,
];

/// Normalize a header name for matching (`" Procedure_Date "` -> `"procedure_date"`)
#[must_use]
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Where each canonical column lives in a file's header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    /// Header name of each required column, in `REQUIRED_COLUMNS` order
    pub required: [String; 5],
    /// Header name of the device id column, if present
    pub device_id: Option<String>,
}

impl ColumnLayout {
    /// Resolve the canonical columns against a file schema
    ///
    /// # Errors
    /// Returns the canonical names of every required column that is absent
    pub fn resolve(schema: &Schema) -> std::result::Result<Self, Vec<String>> {
        let find = |canonical: &str| {
            schema
                .fields()
                .iter()
                .find(|f| normalize_column_name(f.name()) == canonical)
                .map(|f| f.name().clone())
        };

        let missing: Vec<String> = REQUIRED_COLUMNS
            .into_iter()
            .filter(|c| find(*c).is_none())
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(missing);
        }

        let required = REQUIRED_COLUMNS.map(|c| find(c).unwrap_or_default());
        Ok(Self {
            required,
            device_id: find(DEVICE_ID),
        })
    }

    /// Header name for a canonical required column
    #[must_use]
    pub fn header_for<'a>(&'a self, canonical: &'a str) -> &'a str {
        REQUIRED_COLUMNS
            .iter()
            .position(|c| *c == canonical)
            .map_or(canonical, |i| self.required[i].as_str())
    }

    /// Header names of every column the loader reads
    #[must_use]
    pub fn projected_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.required.iter().map(String::as_str).collect();
        if let Some(device) = &self.device_id {
            names.push(device.as_str());
        }
        names
    }
}

/// Rewrite a schema so every column reads as nullable UTF-8
///
/// Values are parsed by the loader rather than by the CSV reader's type
/// inference, which keeps error reporting per cell.
#[must_use]
pub fn as_text_schema(schema: &Schema) -> Schema {
    Schema::new(
        schema
            .fields()
            .iter()
            .map(|f| Field::new(f.name(), DataType::Utf8, true))
            .collect::<Vec<_>>(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(names: &[&str]) -> Schema {
        Schema::new(
            names
                .iter()
                .map(|n| Field::new(*n, DataType::Int64, true))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn test_resolve_accepts_mixed_case_headers() {
        let layout = ColumnLayout::resolve(&schema(&[
            "Device_ID",
            "Procedure_Date",
            "Physician_ID",
            "Geographic_Region",
            "Specialty",
            "Revenue_Impact",
        ]))
        .unwrap();

        assert_eq!(layout.header_for(PROCEDURE_DATE), "Procedure_Date");
        assert_eq!(layout.header_for(REVENUE_IMPACT), "Revenue_Impact");
        assert_eq!(layout.device_id.as_deref(), Some("Device_ID"));
        assert_eq!(layout.projected_names().len(), 6);
    }

    #[test]
    fn test_header_for_unknown_column_falls_back_to_name() {
        let layout = ColumnLayout::resolve(&schema(&REQUIRED_COLUMNS)).unwrap();
        let unknown = String::from("device_serial");
        assert_eq!(layout.header_for(&unknown), "device_serial");
        assert_eq!(layout.header_for(SPECIALTY), "specialty");
    }

    #[test]
    fn test_resolve_reports_missing_columns() {
        let missing = ColumnLayout::resolve(&schema(&[
            "procedure_date",
            "physician_id",
            "geographic_region",
        ]))
        .unwrap_err();

        assert_eq!(missing, vec!["specialty".to_string(), "revenue_impact".to_string()]);
    }

    #[test]
    fn test_text_schema_is_utf8() {
        let text = as_text_schema(&schema(&["a", "b"]));
        assert!(text.fields().iter().all(|f| f.data_type() == &DataType::Utf8));
    }
}
