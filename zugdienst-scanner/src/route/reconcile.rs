//! Route reconstruction.
//!
//! Reconciles the two records of one service into a canonical route: the
//! run log is authoritative for the operational start and for event
//! interruptions, the timetable for running distance, planned stops, and
//! the end point. The two disagree in coverage and naming, so the pass
//! tolerates missing arrival times, informational rows, and label/name
//! mismatches instead of failing the service.

use tracing::debug;

use crate::domain::{Category, Entry, ScheduleMeta, Service};

use super::config::ReconcilePolicy;

/// How far a timetable point may sit from a reference distance and still
/// count as "the same place", in metres.
const DEVIATION_RADIUS_M: i64 = 800;

/// Errors that reject a service during reconstruction.
///
/// These never abort the batch: the caller counts them and moves on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReconcileError {
    /// Fewer than two run-log entries carry a departure time.
    #[error("only {usable} usable run-log entries, need at least 2")]
    TooShortRunLog { usable: usize },

    /// Fewer than two timetable entries carry a departure time.
    #[error("only {usable} usable timetable entries, need at least 2")]
    TooShortTimetable { usable: usize },

    /// No non-informational timetable entry carries a departure time, so
    /// the end of the route cannot be resolved.
    #[error("no timetable entry carries a departure time")]
    UnresolvedEndpoint,
}

impl ReconcileError {
    /// True for the "not enough data to bother" rejections.
    pub fn is_too_short(&self) -> bool {
        matches!(
            self,
            ReconcileError::TooShortRunLog { .. } | ReconcileError::TooShortTimetable { .. }
        )
    }
}

/// Reconcile one service from its normalized entries.
///
/// `run_entries` and `timetable` must be in source order. Returns the
/// assembled [`Service`]; whether that service is *valid* is a separate
/// question answered by [`Service::is_valid`].
pub fn reconcile(
    meta: ScheduleMeta,
    run_entries: &[Entry],
    timetable: &[Entry],
    policy: &ReconcilePolicy,
) -> Result<Service, ReconcileError> {
    // Turnarounds and events are counted over the raw run log, before any
    // validity filtering: a reversal at a time-less point still happened.
    let turnarounds = run_entries.iter().filter(|e| e.is_turnaround).count() as u32;
    let has_event = run_entries.iter().any(|e| e.has_event);

    let usable_run: Vec<&Entry> = run_entries.iter().filter(|e| e.is_valid()).collect();
    if usable_run.len() < 2 {
        return Err(ReconcileError::TooShortRunLog {
            usable: usable_run.len(),
        });
    }

    let usable_timetable = timetable.iter().filter(|e| e.is_valid()).count();
    if usable_timetable < 2 {
        return Err(ReconcileError::TooShortTimetable {
            usable: usable_timetable,
        });
    }

    let mut start = usable_run[0].clone();

    let mut end = timetable
        .iter()
        .rev()
        .find(|e| e.is_valid() && !e.is_informational)
        .cloned()
        .ok_or(ReconcileError::UnresolvedEndpoint)?;

    let mut planned_stops = collect_planned_stops(timetable);

    if policy.stop_matching_at_event {
        if let Some(cutoff) = first_event_time(run_entries) {
            let before = planned_stops.len();
            planned_stops.retain(|stop| stop.departure.map(|dep| dep <= cutoff).unwrap_or(false));
            if planned_stops.len() != before {
                debug!(
                    dropped = before - planned_stops.len(),
                    "stop matching cut at first event"
                );
            }
        }
    }

    if meta.is_passenger || policy.deviation_applies_to_freight {
        if let Some((origin_token, terminus_token)) = label_tokens(meta.zuglauf.as_deref()) {
            if !name_contains(start.name.as_deref(), origin_token) {
                let category = nearby_category(timetable, 0);
                debug!(
                    start = start.display_name(),
                    from = %start.category,
                    to = %category,
                    "start name deviates from itinerary label"
                );
                start = start.with_category(category);
            }
            if !name_contains(end.name.as_deref(), terminus_token) {
                let reference = end.distance_m.unwrap_or(0);
                let category = nearby_category(timetable, reference);
                debug!(
                    end = end.display_name(),
                    from = %end.category,
                    to = %category,
                    "end name deviates from itinerary label"
                );
                end = end.with_category(category);
            }
        }
    }

    Ok(Service {
        meta,
        start,
        end,
        planned_stops,
        turnarounds,
        has_event,
    })
}

/// Filter the timetable down to genuine planned stops.
///
/// A stop must carry name, arrival, and departure, classify as a passenger
/// station or freight yard, and not repeat the previous stop's name. The
/// very first timetable entry is the departure point rather than a stop
/// when it sits within [`DEVIATION_RADIUS_M`] of the route origin.
fn collect_planned_stops(timetable: &[Entry]) -> Vec<Entry> {
    let mut stops: Vec<Entry> = Vec::new();

    for (index, entry) in timetable.iter().enumerate() {
        if !entry.is_planned_stop_eligible() || !entry.category.is_stop() {
            continue;
        }

        if index == 0 && entry.distance_m.unwrap_or(0) <= DEVIATION_RADIUS_M {
            continue;
        }

        // Exact equality only: "Aachen West" after "Aachen" is a new stop.
        if stops.last().map(|prev| prev.name == entry.name) == Some(true) {
            continue;
        }

        stops.push(entry.clone());
    }

    stops
}

/// The time of the first run-log entry carrying an event, if any entry
/// does and it has a time at all.
fn first_event_time(run_entries: &[Entry]) -> Option<chrono::NaiveDateTime> {
    run_entries
        .iter()
        .find(|e| e.has_event)
        .and_then(|e| e.departure.or(e.arrival))
}

/// Split the itinerary label into its origin and terminus tokens.
///
/// The label is `-`-delimited; hyphenated station names split too, which
/// is fine for substring containment ("Altona" still appears in
/// "Hamburg-Altona"). Labels with fewer than two tokens carry no usable
/// origin/terminus signal.
fn label_tokens(zuglauf: Option<&str>) -> Option<(&str, &str)> {
    let label = zuglauf?;
    let tokens: Vec<&str> = label
        .split('-')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.len() < 2 {
        return None;
    }

    Some((tokens[0], tokens[tokens.len() - 1]))
}

/// Case-insensitive substring containment for the label check.
fn name_contains(name: Option<&str>, token: &str) -> bool {
    name.map(|n| n.to_lowercase().contains(&token.to_lowercase()))
        .unwrap_or(false)
}

/// Category donated by the nearest timetable point with both arrival and
/// departure, measured against a reference running distance. Nothing
/// within the radius means the train really starts or ends on open track.
fn nearby_category(timetable: &[Entry], reference_m: i64) -> Category {
    timetable
        .iter()
        .filter(|e| e.arrival.is_some() && e.departure.is_some())
        .map(|e| ((e.distance_m.unwrap_or(0) - reference_m).abs(), e))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= DEVIATION_RADIUS_M)
        .map(|(_, e)| e.category)
        .unwrap_or(Category::OpenTrack)
}
