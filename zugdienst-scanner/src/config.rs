//! Batch configuration.
//!
//! Loaded once per run from a JSON file:
//!
//! ```json
//! {
//!     "paths": ["/data/Zusi3/Timetables/Deutschland"],
//!     "datatype": { "timetable": "fpn", "service": "timetable.xml" },
//!     "exclusionKeywords": ["tutorial", "_docu"],
//!     "stationOverrides": { "sbk 5": "passenger-station" },
//!     "policy": { "stopMatchingAtEvent": false },
//!     "database": "zugdienste.db"
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{Category, StationOverrides};
use crate::route::ReconcilePolicy;

/// Errors loading or validating the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON deserialization failed.
    #[error("cannot parse config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A station override maps to an unknown classification tag.
    #[error("station override `{station}`: {source}")]
    BadOverride {
        station: String,
        #[source]
        source: crate::domain::ParseCategoryError,
    },
}

/// File suffixes identifying the two record kinds on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct Datatypes {
    /// Suffix of schedule files (without dot), e.g. `"fpn"`.
    pub timetable: String,
    /// Suffix of service timetable files, e.g. `"timetable.xml"`.
    pub service: String,
}

impl Default for Datatypes {
    fn default() -> Self {
        Self {
            timetable: "fpn".to_string(),
            service: "timetable.xml".to_string(),
        }
    }
}

/// The full batch configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchConfig {
    /// Roots to scan; each contains country directories.
    pub paths: Vec<PathBuf>,

    /// File suffixes for discovery.
    #[serde(default)]
    pub datatype: Datatypes,

    /// Keywords excluding countries, paths, and schedule groups
    /// (case-insensitive; normalised to lowercase on load).
    #[serde(default)]
    pub exclusion_keywords: Vec<String>,

    /// Station name → classification tag name.
    #[serde(default)]
    pub station_overrides: HashMap<String, String>,

    /// Reconciliation policy flags.
    #[serde(default)]
    pub policy: ReconcilePolicy,

    /// Result database path.
    #[serde(default = "default_database")]
    pub database: PathBuf,
}

fn default_database() -> PathBuf {
    PathBuf::from("zugdienste.db")
}

impl BatchConfig {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: BatchConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        for keyword in &mut config.exclusion_keywords {
            *keyword = keyword.to_lowercase();
        }

        // Fail fast on bad tags instead of misclassifying a whole batch
        config.overrides()?;

        Ok(config)
    }

    /// Build the immutable override table from the configured tag names.
    pub fn overrides(&self) -> Result<StationOverrides, ConfigError> {
        let mut map = HashMap::with_capacity(self.station_overrides.len());

        for (station, tag) in &self.station_overrides {
            let category: Category =
                tag.parse().map_err(|source| ConfigError::BadOverride {
                    station: station.clone(),
                    source,
                })?;
            map.insert(station.clone(), category);
        }

        Ok(StationOverrides::from_map(map))
    }
}
