//! Station classification tags and the override table.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown classification tag name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown classification tag: {tag}")]
pub struct ParseCategoryError {
    tag: String,
}

/// Classification of a station or operating point.
///
/// Every entry a service touches is tagged with exactly one of these.
/// The stable string names (`as_str`) are what the override table and the
/// output rows use.
///
/// # Examples
///
/// ```
/// use zugdienst_scanner::domain::Category;
///
/// assert_eq!(Category::PassengerStation.as_str(), "passenger-station");
/// assert_eq!("open-track".parse::<Category>().unwrap(), Category::OpenTrack);
/// assert!("signal-box".parse::<Category>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// No usable name on the entry.
    Invalid,
    /// An on-screen annotation row, not a physical point.
    Informational,
    /// Named, but matches no keyword group and no override.
    Unknown,
    /// Signals, block posts, junctions; passed without a proper stop.
    OpenTrack,
    /// Operational point (Betriebsbahnhof and the like).
    OperatingPoint,
    /// Freight or marshalling yard.
    FreightYard,
    /// A station where passengers board and alight.
    PassengerStation,
}

impl Category {
    /// Returns the stable string name of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Invalid => "invalid",
            Category::Informational => "informational",
            Category::Unknown => "unknown",
            Category::OpenTrack => "open-track",
            Category::OperatingPoint => "operating-point",
            Category::FreightYard => "freight-yard",
            Category::PassengerStation => "passenger-station",
        }
    }

    /// True for the two tags that mark a genuine scheduled stop.
    pub fn is_stop(&self) -> bool {
        matches!(self, Category::PassengerStation | Category::FreightYard)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "invalid" => Ok(Category::Invalid),
            "informational" => Ok(Category::Informational),
            "unknown" => Ok(Category::Unknown),
            "open-track" => Ok(Category::OpenTrack),
            "operating-point" => Ok(Category::OperatingPoint),
            "freight-yard" => Ok(Category::FreightYard),
            "passenger-station" => Ok(Category::PassengerStation),
            other => Err(ParseCategoryError {
                tag: other.to_string(),
            }),
        }
    }
}

/// Immutable station-name → classification override table.
///
/// Supplied once per batch run and shared read-only by every service.
/// Keys are stored lowercased; lookups lowercase the query, so the table
/// matches whatever casing the source files use.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use zugdienst_scanner::domain::{Category, StationOverrides};
///
/// let table = StationOverrides::from_map(HashMap::from([
///     ("SBK 5".to_string(), Category::PassengerStation),
/// ]));
/// assert_eq!(table.get("sbk 5"), Some(Category::PassengerStation));
/// assert_eq!(table.get("SBK 5"), Some(Category::PassengerStation));
/// assert_eq!(table.get("SBK 6"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StationOverrides {
    map: HashMap<String, Category>,
}

impl StationOverrides {
    /// An empty table: every classification falls through to the keyword
    /// heuristics.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from name → category pairs, lowercasing the keys.
    pub fn from_map(map: HashMap<String, Category>) -> Self {
        let map = map
            .into_iter()
            .map(|(name, cat)| (name.to_lowercase(), cat))
            .collect();
        Self { map }
    }

    /// Look up an override for a station name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<Category> {
        self.map.get(&name.to_lowercase()).copied()
    }

    /// Number of overridden names.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when no overrides are configured.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
