//! Conversion from Zusi DTOs to domain entries.
//!
//! This is the record normalizer: both file kinds collapse into the
//! uniform [`Entry`] shape here, and the per-segment timetable metadata is
//! merged into one [`ScheduleMeta`].

use crate::classify::{classify, is_informational_name};
use crate::domain::{Category, Entry, ScheduleMeta, StationOverrides, parse_timestamp_opt};

use super::types::{Buchfahrplan, FahrplanEintrag, FplZeile};

/// Vehicle-formation action code marking a turnaround.
const TURNAROUND_ACTION: &str = "2";

/// Normalize one run-log row.
///
/// Run-log rows carry precise times and the event markers, but no running
/// distance.
pub fn entry_from_run_row(row: &FahrplanEintrag, overrides: &StationOverrides) -> Entry {
    let name = row.betriebsstelle.clone();
    let category = classify(name.as_deref(), overrides);

    Entry {
        arrival: parse_timestamp_opt(row.ankunft.as_deref()),
        departure: parse_timestamp_opt(row.abfahrt.as_deref()),
        distance_m: None,
        is_turnaround: row.fzg_verband_aktion.as_deref() == Some(TURNAROUND_ACTION),
        is_informational: false,
        has_event: !row.ereignisse.is_empty(),
        name,
        category,
    }
}

/// Normalize one timetable row.
///
/// A departure-less row inherits its arrival as the departure (the train
/// leaves when it arrives). Rows with an icon marker, and rows whose name
/// is a `- <text> -` annotation, are informational and classify as such.
pub fn entry_from_timetable_row(row: &FplZeile, overrides: &StationOverrides) -> Entry {
    let name = row.name.as_ref().and_then(|n| n.text.clone());

    let arrival = parse_timestamp_opt(row.ankunft.as_ref().and_then(|a| a.ank.as_deref()));
    let departure = parse_timestamp_opt(row.abfahrt.as_ref().and_then(|a| a.abf.as_deref()));
    let departure = departure.or(arrival);

    let is_informational = row.icon.is_some()
        || name.as_deref().map(is_informational_name).unwrap_or(false);

    let category = if is_informational {
        Category::Informational
    } else {
        classify(name.as_deref(), overrides)
    };

    Entry {
        arrival,
        departure,
        distance_m: Some(row.laufweg.unwrap_or(0.0) as i64),
        is_turnaround: row.richtungswechsel.is_some(),
        is_informational,
        has_event: false,
        name,
        category,
    }
}

/// Normalize every row of every timetable segment, in file order.
pub fn timetable_entries(segments: &[Buchfahrplan], overrides: &StationOverrides) -> Vec<Entry> {
    segments
        .iter()
        .flat_map(|segment| segment.zeilen.iter())
        .map(|row| entry_from_timetable_row(row, overrides))
        .collect()
}

/// Merge the segment metadata of one service.
///
/// The first segment provides category, traction, length, and mass; train
/// numbers concatenate with `_` and itinerary labels with `->` across the
/// remaining segments.
pub fn schedule_meta(
    segments: &[Buchfahrplan],
    is_passenger: bool,
    country: &str,
    route: &str,
    fahrplan: &str,
) -> ScheduleMeta {
    let first = segments.first();

    let mut zugnr = first
        .and_then(|s| s.nummer.clone())
        .unwrap_or_default();
    let mut zuglauf = first.and_then(|s| s.zuglauf.clone());

    for segment in segments.iter().skip(1) {
        if let Some(nummer) = &segment.nummer {
            zugnr = format!("{zugnr}_{nummer}");
        }
        if let Some(lauf) = &segment.zuglauf {
            zuglauf = Some(match zuglauf {
                Some(existing) => format!("{existing} -> {lauf}"),
                None => lauf.clone(),
            });
        }
    }

    ScheduleMeta {
        gattung: first.and_then(|s| s.gattung.clone()).unwrap_or_default(),
        zugnr,
        br: first.and_then(|s| s.br.clone()).unwrap_or_default(),
        laenge_m: first.and_then(|s| s.laenge).unwrap_or(0.0) as i64,
        masse_t: first.and_then(|s| s.masse).unwrap_or(0.0) as i64 / 1000,
        zuglauf,
        is_passenger,
        country: country.to_string(),
        route: route.to_string(),
        fahrplan: fahrplan.to_string(),
    }
}

/// A passenger service carries a non-empty `Zugtyp` attribute.
pub fn is_passenger_train(zugtyp: Option<&str>) -> bool {
    zugtyp.map(|t| !t.is_empty()).unwrap_or(false)
}
