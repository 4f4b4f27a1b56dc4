//! Configuration for the adoption dashboard.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::filter::FilterSelection;
use crate::schema::DateFormatConfig;

/// Environment variable overriding the dataset location
pub const ENV_DATA_PATH: &str = "ADOPTION_DATA_PATH";
/// Environment variable selecting a region
pub const ENV_REGION: &str = "ADOPTION_REGION";
/// Environment variable selecting a specialty
pub const ENV_SPECIALTY: &str = "ADOPTION_SPECIALTY";
/// Environment variable selecting the output format (`text` or `json`)
pub const ENV_OUTPUT: &str = "ADOPTION_OUTPUT";

/// Dataset location relative to the user's home directory
pub const DEFAULT_RELATIVE_PATH: [&str; 3] = [
    "Desktop",
    "Simulated_device_adoption",
    "device_adoption_data.csv",
];

/// How the dashboard binary renders a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain-text panels
    #[default]
    Text,
    /// Pretty-printed JSON of the full view
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Configuration for loading and presenting the dataset
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Location of the procedure CSV
    pub data_path: PathBuf,
    /// Date formats accepted in the `procedure_date` column
    pub date_format_config: DateFormatConfig,
    /// Drop rows whose date cannot be parsed instead of failing the load
    pub drop_unparseable_dates: bool,
    /// Rows per batch read from the CSV
    pub batch_size: usize,
    /// Initial filter selection
    pub selection: FilterSelection,
    /// Output format for the dashboard binary
    pub output: OutputFormat,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            date_format_config: DateFormatConfig::default(),
            drop_unparseable_dates: false,
            batch_size: 8192,
            selection: FilterSelection::default(),
            output: OutputFormat::default(),
        }
    }
}

impl DashboardConfig {
    /// Create a configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with overrides read from the environment
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = env::var(ENV_DATA_PATH) {
            if !path.trim().is_empty() {
                config.data_path = PathBuf::from(path);
            }
        }
        if let Ok(region) = env::var(ENV_REGION) {
            config.selection = config.selection.with_region(region.as_str());
        }
        if let Ok(specialty) = env::var(ENV_SPECIALTY) {
            config.selection = config.selection.with_specialty(specialty.as_str());
        }
        if let Ok(output) = env::var(ENV_OUTPUT) {
            config.output = OutputFormat::from(output.as_str());
        }

        config
    }

    /// Set the dataset location
    #[must_use]
    pub fn with_data_path(mut self, path: impl AsRef<Path>) -> Self {
        self.data_path = path.as_ref().to_path_buf();
        self
    }

    /// Drop rows with unparsable dates rather than failing
    #[must_use]
    pub fn lenient_dates(mut self) -> Self {
        self.drop_unparseable_dates = true;
        self
    }

    /// Set the CSV batch size (at least one row)
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Set the initial filter selection
    #[must_use]
    pub fn with_selection(mut self, selection: FilterSelection) -> Self {
        self.selection = selection;
        self
    }
}

impl fmt::Display for DashboardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dashboard Configuration:")?;
        writeln!(f, "  Data Path: {}", self.data_path.display())?;
        writeln!(f, "  Drop Unparseable Dates: {}", self.drop_unparseable_dates)?;
        writeln!(f, "  Batch Size: {}", self.batch_size)?;
        writeln!(f, "  Region: {}", self.selection.region)?;
        writeln!(f, "  Specialty: {}", self.selection.specialty)?;
        writeln!(f, "  Output: {:?}", self.output)
    }
}

/// `~/Desktop/Simulated_device_adoption/device_adoption_data.csv`
///
/// Falls back to a path relative to the working directory when no home
/// directory can be determined.
#[must_use]
pub fn default_data_path() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_default();
    path.extend(DEFAULT_RELATIVE_PATH);
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Selection;

    #[test]
    fn test_default_config() {
        let config = DashboardConfig::default();
        assert!(config.data_path.ends_with("Desktop/Simulated_device_adoption/device_adoption_data.csv"));
        assert!(!config.drop_unparseable_dates);
        assert_eq!(config.batch_size, 8192);
        assert_eq!(config.selection, FilterSelection::all());
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_builder_methods() {
        let config = DashboardConfig::new()
            .with_data_path("/tmp/data.csv")
            .lenient_dates()
            .with_batch_size(0)
            .with_selection(FilterSelection::all().with_region("West"));

        assert_eq!(config.data_path, PathBuf::from("/tmp/data.csv"));
        assert!(config.drop_unparseable_dates);
        assert_eq!(config.batch_size, 1);
        assert_eq!(config.selection.region, Selection::Only("West".to_string()));

        let rendered = config.to_string();
        assert!(rendered.contains("Data Path: /tmp/data.csv"));
        assert!(rendered.contains("Region: West"));
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::from("anything"), OutputFormat::Text);
    }
}
