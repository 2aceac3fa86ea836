//! Station classification heuristics.
//!
//! German operating-point names carry their kind as an abbreviation token:
//! `"SBK 18"` is a block signal, `"Abzw Heide"` a junction, `"Hildesheim
//! Gbf"` a freight yard. Classification tests the whitespace-delimited
//! tokens of a name against ordered keyword groups; an explicit override
//! table wins over every heuristic.

use crate::domain::{Category, StationOverrides};

/// Block posts, signals, junctions: points a train passes on open track.
const OPEN_TRACK_KEYWORDS: &[&str] = &[
    "SBK",
    "BK",
    "ESIG",
    "ZSIG",
    "ASIG",
    "ABZW",
    "ÜST",
    "VSIG",
    "LZB",
    "NACH",
    "BKSIG",
    "STRECKENENDE",
    "ENDE",
];

/// Operational points without passenger traffic.
const OPERATING_POINT_KEYWORDS: &[&str] = &["BBF", "ÜST"];

/// Passenger stations and halts.
const PASSENGER_STATION_KEYWORDS: &[&str] = &["HP", "PBF", "HBF", "BF", "HST", "BFT"];

/// Freight and marshalling yards.
const FREIGHT_YARD_KEYWORDS: &[&str] = &["GBF", "RBF"];

/// Classify a station name.
///
/// Total and deterministic: every input maps to exactly one [`Category`].
/// Precedence: absent name, then the informational `- <text> -` pattern,
/// then the override table, then the keyword groups in order (open track,
/// operating point, passenger station, freight yard), then `Unknown`.
///
/// # Examples
///
/// ```
/// use zugdienst_scanner::classify::classify;
/// use zugdienst_scanner::domain::{Category, StationOverrides};
///
/// let none = StationOverrides::empty();
/// assert_eq!(classify(Some("Abzw Nord"), &none), Category::OpenTrack);
/// assert_eq!(classify(Some("Aachen Hbf"), &none), Category::PassengerStation);
/// assert_eq!(classify(Some("Hildesheim Gbf"), &none), Category::FreightYard);
/// assert_eq!(classify(Some("Salzkotten"), &none), Category::Unknown);
/// assert_eq!(classify(None, &none), Category::Invalid);
/// ```
pub fn classify(name: Option<&str>, overrides: &StationOverrides) -> Category {
    let Some(name) = name else {
        return Category::Invalid;
    };

    if is_informational_name(name) {
        return Category::Informational;
    }

    if let Some(category) = overrides.get(name) {
        return category;
    }

    if has_keyword(name, OPEN_TRACK_KEYWORDS) {
        return Category::OpenTrack;
    }
    if has_keyword(name, OPERATING_POINT_KEYWORDS) {
        return Category::OperatingPoint;
    }
    if has_keyword(name, PASSENGER_STATION_KEYWORDS) {
        return Category::PassengerStation;
    }
    if has_keyword(name, FREIGHT_YARD_KEYWORDS) {
        return Category::FreightYard;
    }

    Category::Unknown
}

/// True for names of the form `- <text> -`: display annotations the
/// timetable interleaves with real rows.
pub fn is_informational_name(name: &str) -> bool {
    let trimmed = name.trim();

    let Some(inner) = trimmed
        .strip_prefix('-')
        .and_then(|rest| rest.strip_suffix('-'))
    else {
        return false;
    };

    !inner.trim().is_empty()
}

/// Whole-word keyword membership: any whitespace-delimited token of the
/// name equals a keyword, compared case-insensitively. Substring matches
/// do not count: `"Bkw Nord"` is not a `BK`.
fn has_keyword(name: &str, keywords: &[&str]) -> bool {
    name.split_whitespace().any(|token| {
        let token = token.to_lowercase();
        keywords.iter().any(|kw| token == kw.to_lowercase())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_overrides() -> StationOverrides {
        StationOverrides::empty()
    }

    #[test]
    fn absent_name_is_invalid() {
        assert_eq!(classify(None, &no_overrides()), Category::Invalid);
    }

    #[test]
    fn informational_pattern() {
        assert_eq!(
            classify(Some("- Streckeninfo -"), &no_overrides()),
            Category::Informational
        );
        assert_eq!(
            classify(Some("  - Langsamfahrstelle 60 -  "), &no_overrides()),
            Category::Informational
        );
    }

    #[test]
    fn bare_dashes_are_not_informational() {
        assert!(!is_informational_name("-"));
        assert!(!is_informational_name("--"));
        assert!(!is_informational_name("- -"));
        assert!(!is_informational_name("Bad St. Peter-Ording"));
    }

    #[test]
    fn open_track_names() {
        for name in [
            "SBK 18",
            "Bk Buchberg",
            "Abzw Berliner Straße",
            "Abzw Nord",
            "Üst Veerßen",
            "ESIG Lehrte",
            "Streckenende",
        ] {
            assert_eq!(
                classify(Some(name), &no_overrides()),
                Category::OpenTrack,
                "{name}"
            );
        }
    }

    #[test]
    fn operating_point_names() {
        assert_eq!(
            classify(Some("Bbf Langenfelde"), &no_overrides()),
            Category::OperatingPoint
        );
    }

    #[test]
    fn passenger_station_names() {
        for name in [
            "Aachen Hbf",
            "Kassel Hbf",
            "Bad St Peter-Ording Hp",
            "Bft Au-Hirblinger Straße",
            "Husum Bf",
        ] {
            assert_eq!(
                classify(Some(name), &no_overrides()),
                Category::PassengerStation,
                "{name}"
            );
        }
    }

    #[test]
    fn freight_yard_names() {
        assert_eq!(
            classify(Some("Hildesheim Gbf"), &no_overrides()),
            Category::FreightYard
        );
        assert_eq!(
            classify(Some("Maschen Rbf"), &no_overrides()),
            Category::FreightYard
        );
    }

    #[test]
    fn plain_names_are_unknown() {
        for name in ["Salzkotten", "Au (Sieg)", "Aachen West", "Celle"] {
            assert_eq!(
                classify(Some(name), &no_overrides()),
                Category::Unknown,
                "{name}"
            );
        }
    }

    #[test]
    fn keyword_must_be_whole_token() {
        // "Hbf" inside a larger token does not classify
        assert_eq!(
            classify(Some("Hbfstraße"), &no_overrides()),
            Category::Unknown
        );
        // "Ende" as part of a town name does not end the line
        assert_eq!(
            classify(Some("Endenich"), &no_overrides()),
            Category::Unknown
        );
    }

    #[test]
    fn open_track_beats_passenger_station() {
        // A name carrying tokens of two groups takes the earlier group
        assert_eq!(
            classify(Some("Esig Aachen Hbf"), &no_overrides()),
            Category::OpenTrack
        );
    }

    #[test]
    fn override_short_circuits_heuristics() {
        let table = StationOverrides::from_map(HashMap::from([(
            "sbk 5".to_string(),
            Category::PassengerStation,
        )]));
        assert_eq!(classify(Some("SBK 5"), &table), Category::PassengerStation);
        // Unlisted names still go through the keywords
        assert_eq!(classify(Some("SBK 6"), &table), Category::OpenTrack);
    }

    #[test]
    fn override_does_not_apply_to_informational_rows() {
        let table = StationOverrides::from_map(HashMap::from([(
            "- streckeninfo -".to_string(),
            Category::PassengerStation,
        )]));
        assert_eq!(
            classify(Some("- Streckeninfo -"), &table),
            Category::Informational
        );
    }
}
