//! Dashboard configuration, loadable from a JSON file.

use crate::dataset::source::{DataSource, DEFAULT_DATA_URL};
use crate::error::AirQualityError;
use crate::pipeline::CategoryLevelMode;
use crate::types::selection::CATEGORY_SEVERITY_ORDER;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Deploy-time settings for the dashboard.
///
/// All fields have defaults, so a config file only needs to name what it
/// overrides:
///
/// ```json
/// {
///     "data_url": "https://example.com/all_data.csv",
///     "passthrough_category_levels": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Where to fetch the readings CSV from.
    pub data_url: String,
    /// Cache directory override; the system cache directory when absent.
    pub cache_folder: Option<PathBuf>,
    /// Legend ordering for the category bar charts, most severe first.
    pub category_order: Vec<String>,
    /// Whether the bar chart grid receives the narrowed readings as-is
    /// instead of per-(station, category) averages.
    pub passthrough_category_levels: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            cache_folder: None,
            category_order: CATEGORY_SEVERITY_ORDER
                .iter()
                .map(|label| label.to_string())
                .collect(),
            passthrough_category_levels: true,
        }
    }
}

impl DashboardConfig {
    /// Reads a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, AirQualityError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AirQualityError::ConfigRead(path.to_path_buf(), e))?;
        serde_json::from_str(&raw).map_err(|e| AirQualityError::ConfigParse(path.to_path_buf(), e))
    }

    /// The data source this config points at.
    pub fn data_source(&self) -> DataSource {
        DataSource::Url(self.data_url.clone())
    }

    /// The categorizer mode this config selects.
    pub fn category_level_mode(&self) -> CategoryLevelMode {
        if self.passthrough_category_levels {
            CategoryLevelMode::Passthrough
        } else {
            CategoryLevelMode::Grouped
        }
    }
}
