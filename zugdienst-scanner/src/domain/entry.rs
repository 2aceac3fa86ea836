//! The uniform entry type for both record sources.
//!
//! Run-log rows and timetable rows are normalized into a single `Entry`
//! shape with optional fields, rather than an inheritance-style hierarchy:
//! a run-log entry simply has no running distance, a timetable entry has no
//! event marker.

use chrono::NaiveDateTime;

use super::Category;

/// A single station or operating point touched by a service.
///
/// Validity is graded: an entry with a departure time is *valid* (usable
/// for start/end resolution); an entry with name, arrival, and departure is
/// additionally *planned-stop-eligible*. An entry with neither departure
/// nor distance is a placeholder and never appears in output.
///
/// The category is fixed at construction by the classifier; the only later
/// change is the deviation heuristic, which goes through [`Entry::with_category`]
/// and produces a new value.
///
/// # Examples
///
/// ```
/// use zugdienst_scanner::domain::{Category, Entry, parse_timestamp};
///
/// let entry = Entry {
///     name: Some("Kassel Hbf".to_string()),
///     arrival: parse_timestamp("2019-05-01 07:58:00"),
///     departure: parse_timestamp("2019-05-01 08:00:00"),
///     distance_m: Some(0),
///     is_turnaround: false,
///     is_informational: false,
///     has_event: false,
///     category: Category::PassengerStation,
/// };
/// assert!(entry.is_valid());
/// assert!(entry.is_planned_stop_eligible());
/// assert!(!entry.is_placeholder());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Station or operating-point name, if the row carried one.
    pub name: Option<String>,
    /// Arrival time at this point.
    pub arrival: Option<NaiveDateTime>,
    /// Departure time from this point.
    pub departure: Option<NaiveDateTime>,
    /// Cumulative running distance from the route origin, in metres.
    /// `Some` only for timetable rows.
    pub distance_m: Option<i64>,
    /// A scheduled direction reversal happens at this point.
    pub is_turnaround: bool,
    /// The row is an on-screen annotation, not a physical point.
    pub is_informational: bool,
    /// A run-log operational event was recorded at this point.
    pub has_event: bool,
    /// Classification tag, assigned at construction.
    pub category: Category,
}

impl Entry {
    /// Sentinel for "not yet found". Never emitted in output.
    pub fn placeholder() -> Self {
        Self {
            name: None,
            arrival: None,
            departure: None,
            distance_m: None,
            is_turnaround: false,
            is_informational: false,
            has_event: false,
            category: Category::Invalid,
        }
    }

    /// True when the entry carries no departure and no distance.
    pub fn is_placeholder(&self) -> bool {
        self.departure.is_none() && self.distance_m.is_none()
    }

    /// An entry is valid when it carries at least a departure time.
    pub fn is_valid(&self) -> bool {
        self.departure.is_some()
    }

    /// Eligible as a planned stop: name, arrival, and departure present.
    pub fn is_planned_stop_eligible(&self) -> bool {
        self.name.is_some() && self.arrival.is_some() && self.departure.is_some()
    }

    /// Returns a copy of this entry carrying a different category.
    ///
    /// The deviation heuristic uses this instead of mutating in place.
    pub fn with_category(&self, category: Category) -> Self {
        Self {
            category,
            ..self.clone()
        }
    }

    /// The name as a display string, empty when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
