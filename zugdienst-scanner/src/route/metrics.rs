//! Derived route metrics.

use chrono::Duration;

use crate::domain::Service;

/// Figures derived from a reconciled route. Pure function of the service;
/// computing twice yields identical values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMetrics {
    /// Trip duration, start departure to end departure (or arrival).
    /// Zero when an endpoint time is missing; negative on malformed data.
    pub duration: Duration,
    /// Rounded average speed in km/h; 0 on zero duration or zero distance.
    pub average_speed_kmh: i64,
    /// Distance travelled in whole kilometres (truncated).
    pub distance_km: i64,
    /// Number of planned stops.
    pub stop_count: usize,
    /// Number of scheduled direction reversals.
    pub turnaround_count: u32,
}

/// Compute the metrics for a reconciled service.
///
/// Malformed data (missing times, zero or negative durations) degrades to
/// zeroed figures rather than failing; the record still gets emitted.
pub fn compute(service: &Service) -> RouteMetrics {
    let end_time = service.end.departure.or(service.end.arrival);

    let duration = match (service.start.departure, end_time) {
        (Some(start), Some(end)) => end.signed_duration_since(start),
        _ => Duration::zero(),
    };

    let end_distance = service.end.distance_m.unwrap_or(0);
    let start_distance = service.start.distance_m.unwrap_or(0);
    let travelled = end_distance - start_distance;

    let seconds = duration.num_seconds();
    let average_speed_kmh = if seconds == 0 || travelled == 0 {
        0
    } else {
        (travelled as f64 / seconds as f64 * 3.6).round() as i64
    };

    RouteMetrics {
        duration,
        average_speed_kmh,
        distance_km: end_distance / 1000,
        stop_count: service.planned_stops.len(),
        turnaround_count: service.turnarounds,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Category, Entry, ScheduleMeta};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn timed_entry(minutes: i64, dist: Option<i64>) -> Entry {
        let base = NaiveDate::from_ymd_opt(2019, 5, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Entry {
            name: None,
            arrival: None,
            departure: Some(base + Duration::minutes(minutes)),
            distance_m: dist,
            is_turnaround: false,
            is_informational: false,
            has_event: false,
            category: Category::Unknown,
        }
    }

    proptest! {
        /// Speed never faults, whatever the duration/distance combination.
        #[test]
        fn speed_is_total(
            start_min in 0i64..2880,
            end_min in 0i64..2880,
            dist in 0i64..2_000_000,
        ) {
            let s = Service {
                meta: ScheduleMeta::default(),
                start: timed_entry(start_min, None),
                end: timed_entry(end_min, Some(dist)),
                planned_stops: Vec::new(),
                turnarounds: 0,
                has_event: false,
            };
            let m = compute(&s);
            if start_min == end_min || dist == 0 {
                prop_assert_eq!(m.average_speed_kmh, 0);
            }
            prop_assert_eq!(m.distance_km, dist / 1000);
        }

        /// Metrics are a pure function of the service.
        #[test]
        fn pure(start_min in 0i64..1440, end_min in 0i64..1440, dist in 0i64..500_000) {
            let s = Service {
                meta: ScheduleMeta::default(),
                start: timed_entry(start_min, None),
                end: timed_entry(end_min, Some(dist)),
                planned_stops: Vec::new(),
                turnarounds: 0,
                has_event: false,
            };
            prop_assert_eq!(compute(&s), compute(&s));
        }
    }
}
