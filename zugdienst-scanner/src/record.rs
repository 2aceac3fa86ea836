//! The flat output row.
//!
//! One [`ServiceRecord`] per valid service, combining the reconciled route,
//! its metrics, and the schedule metadata. Field names follow the source
//! data's German vocabulary, since that is what downstream consumers query
//! the result tables by.

use serde::Serialize;

use crate::domain::{Service, format_duration};
use crate::route::RouteMetrics;

/// One row of the result table.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceRecord {
    /// `"P"` for passenger services, `"C"` for cargo.
    pub art: String,
    /// Train category code.
    pub gattung: String,
    /// Train number(s), `_`-joined across segments.
    pub zugnr: String,
    /// Departure clock time at the start, `HH:MM`.
    pub begin: String,
    /// Trip duration as `H:MM:SS` text.
    pub fahrzeit: String,
    /// Traction code.
    pub br: String,
    /// Train length in metres.
    pub laenge: i64,
    /// Train mass in tonnes.
    pub masse: i64,
    /// Planned stop count.
    pub nhalte: i64,
    /// An operational event occurred on the run.
    pub ev: bool,
    /// Turnaround count.
    pub w1: i64,
    /// Classification tag of the start point.
    pub start: String,
    /// Classification tag of the end point.
    pub ende: String,
    /// Route length in whole kilometres.
    pub s_km: i64,
    /// Average speed in km/h.
    pub dv: i64,
    /// Country directory.
    pub country: String,
    /// Route directory.
    pub route: String,
    /// Schedule folder.
    pub fahrplan: String,
    /// Name of the operational start point.
    pub aufgleispunkt: String,
    /// Advertised itinerary label.
    pub zuglauf: String,
    /// Comma-joined planned stop names.
    pub halte: String,
}

/// Column names of the result table, in row order.
pub const COLUMNS: &[&str] = &[
    "art",
    "gattung",
    "zugnr",
    "begin",
    "fahrzeit",
    "br",
    "laenge",
    "masse",
    "nhalte",
    "ev",
    "w1",
    "start",
    "ende",
    "s_km",
    "dv",
    "country",
    "route",
    "fahrplan",
    "aufgleispunkt",
    "zuglauf",
    "halte",
];

/// Assemble the output row for one service.
///
/// Read-only over the service aggregate; call after reconciliation and
/// metrics computation.
pub fn assemble(service: &Service, metrics: &RouteMetrics) -> ServiceRecord {
    let meta = &service.meta;

    let begin = service
        .start
        .departure
        .map(|dep| dep.format("%H:%M").to_string())
        .unwrap_or_default();

    let halte = service
        .planned_stops
        .iter()
        .map(|stop| stop.display_name())
        .collect::<Vec<_>>()
        .join(", ");

    ServiceRecord {
        art: if meta.is_passenger { "P" } else { "C" }.to_string(),
        gattung: meta.gattung.clone(),
        zugnr: meta.zugnr.clone(),
        begin,
        fahrzeit: format_duration(metrics.duration),
        br: meta.br.clone(),
        laenge: meta.laenge_m,
        masse: meta.masse_t,
        nhalte: metrics.stop_count as i64,
        ev: service.has_event,
        w1: metrics.turnaround_count as i64,
        start: service.start.category.as_str().to_string(),
        ende: service.end.category.as_str().to_string(),
        s_km: metrics.distance_km,
        dv: metrics.average_speed_kmh,
        country: meta.country.clone(),
        route: meta.route.clone(),
        fahrplan: meta.fahrplan.clone(),
        aufgleispunkt: service.start.display_name().to_string(),
        zuglauf: meta.zuglauf.clone().unwrap_or_default(),
        halte,
    }
}
