//! The reconciled service aggregate.

use super::Entry;

/// Schedule metadata for one service, merged across its timetable segments.
///
/// A service that spans several schedule segments carries the first
/// segment's category, traction, length, and mass; train numbers are
/// concatenated with `_` and itinerary labels with `->`.
#[derive(Debug, Clone, Default)]
pub struct ScheduleMeta {
    /// Train category code (e.g. `ICE`, `RB`, `DGS`).
    pub gattung: String,
    /// Train number, `_`-joined across segments.
    pub zugnr: String,
    /// Traction (Baureihe) code.
    pub br: String,
    /// Train length in whole metres.
    pub laenge_m: i64,
    /// Train mass in whole tonnes.
    pub masse_t: i64,
    /// Advertised itinerary, e.g. `"Kassel Hbf - Hamburg-Altona"`,
    /// `->`-joined across segments. May diverge from the operational route.
    pub zuglauf: Option<String>,
    /// Passenger service (as opposed to cargo).
    pub is_passenger: bool,
    /// Country directory the service was found under.
    pub country: String,
    /// Route directory the service was found under.
    pub route: String,
    /// Schedule folder the service file lives in.
    pub fahrplan: String,
}

/// One fully reconciled service: route endpoints, planned stops, and
/// schedule metadata.
///
/// Constructed once per run-log/timetable pair by the route reconstructor
/// and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Service {
    /// Schedule metadata merged across segments.
    pub meta: ScheduleMeta,
    /// Operational start point (from the run log).
    pub start: Entry,
    /// Final timetable point with a departure time.
    pub end: Entry,
    /// Genuine planned stops, in route order. No two consecutive entries
    /// share a name.
    pub planned_stops: Vec<Entry>,
    /// Scheduled direction reversals over the whole run.
    pub turnarounds: u32,
    /// An operational event was recorded somewhere on the run.
    pub has_event: bool,
}

impl Service {
    /// A service is valid when its start has a departure time and its end
    /// has an arrival or departure time.
    pub fn is_valid(&self) -> bool {
        self.start.departure.is_some()
            && (self.end.arrival.is_some() || self.end.departure.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, parse_timestamp};

    fn entry(departure: Option<&str>, arrival: Option<&str>) -> Entry {
        Entry {
            name: Some("Somewhere".to_string()),
            arrival: arrival.and_then(parse_timestamp),
            departure: departure.and_then(parse_timestamp),
            distance_m: Some(0),
            is_turnaround: false,
            is_informational: false,
            has_event: false,
            category: Category::Unknown,
        }
    }

    fn service(start: Entry, end: Entry) -> Service {
        Service {
            meta: ScheduleMeta::default(),
            start,
            end,
            planned_stops: Vec::new(),
            turnarounds: 0,
            has_event: false,
        }
    }

    #[test]
    fn valid_with_departures_at_both_ends() {
        let s = service(
            entry(Some("2019-05-01 08:00:00"), None),
            entry(Some("2019-05-01 09:30:00"), None),
        );
        assert!(s.is_valid());
    }

    #[test]
    fn valid_with_arrival_only_at_end() {
        let s = service(
            entry(Some("2019-05-01 08:00:00"), None),
            entry(None, Some("2019-05-01 09:30:00")),
        );
        assert!(s.is_valid());
    }

    #[test]
    fn invalid_without_start_departure() {
        let s = service(
            entry(None, Some("2019-05-01 08:00:00")),
            entry(Some("2019-05-01 09:30:00"), None),
        );
        assert!(!s.is_valid());
    }

    #[test]
    fn invalid_with_timeless_end() {
        let s = service(entry(Some("2019-05-01 08:00:00"), None), entry(None, None));
        assert!(!s.is_valid());
    }
}
