//! The per-service batch pipeline.
//!
//! Services are mutually independent; each runs the same synchronous
//! pipeline (read → normalize → reconcile → metrics → assemble) and a
//! failure in one never aborts the batch. All failure modes are counted
//! and reported in aggregate.

use std::fmt;

use tracing::{debug, info, warn};

use crate::config::BatchConfig;
use crate::discover::{ServicePair, discover_services, is_excluded};
use crate::domain::StationOverrides;
use crate::record::{ServiceRecord, assemble};
use crate::route::{ReconcilePolicy, compute, reconcile};
use crate::zusi;

/// Aggregate counts of one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Service pairs found by discovery.
    pub discovered: usize,
    /// Records assembled and handed to the store.
    pub written: usize,
    /// Services skipped for a missing `.trn` companion file.
    pub missing_run_log: usize,
    /// Services skipped for unreadable or unparsable files.
    pub unreadable: usize,
    /// Services skipped because their schedule group is excluded.
    pub excluded: usize,
    /// Services with fewer than two usable entries in either source.
    pub too_short: usize,
    /// Services whose start or end could not be resolved.
    pub invalid: usize,
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} discovered, {} written, {} too short, {} invalid, \
             {} missing run log, {} unreadable, {} excluded",
            self.discovered,
            self.written,
            self.too_short,
            self.invalid,
            self.missing_run_log,
            self.unreadable,
            self.excluded
        )
    }
}

/// Outcome of one service pair.
enum Outcome {
    Record(Box<ServiceRecord>),
    MissingRunLog,
    Unreadable,
    Excluded,
    TooShort,
    Invalid,
}

/// Run the whole batch: discovery plus the per-service pipeline.
///
/// Never fails; malformed services degrade to summary counts.
pub fn run_batch(
    config: &BatchConfig,
    overrides: &StationOverrides,
) -> (Vec<ServiceRecord>, BatchSummary) {
    let pairs = discover_services(&config.paths, &config.datatype, &config.exclusion_keywords);
    info!(services = pairs.len(), "discovery finished");

    let mut summary = BatchSummary {
        discovered: pairs.len(),
        ..BatchSummary::default()
    };
    let mut records = Vec::new();

    for pair in &pairs {
        match process_pair(pair, overrides, &config.policy, &config.exclusion_keywords) {
            Outcome::Record(record) => {
                records.push(*record);
                summary.written += 1;
            }
            Outcome::MissingRunLog => summary.missing_run_log += 1,
            Outcome::Unreadable => summary.unreadable += 1,
            Outcome::Excluded => summary.excluded += 1,
            Outcome::TooShort => summary.too_short += 1,
            Outcome::Invalid => summary.invalid += 1,
        }
    }

    info!(%summary, "batch finished");
    (records, summary)
}

/// Run one service through the pipeline.
fn process_pair(
    pair: &ServicePair,
    overrides: &StationOverrides,
    policy: &ReconcilePolicy,
    exclusions: &[String],
) -> Outcome {
    if !pair.run_log.exists() {
        debug!(timetable = %pair.timetable.display(), "run log missing");
        return Outcome::MissingRunLog;
    }

    let segments = match zusi::read_timetable(&pair.timetable) {
        Ok(segments) => segments,
        Err(e) => {
            warn!(error = %e, "skipping unreadable timetable");
            return Outcome::Unreadable;
        }
    };

    let zug = match zusi::read_run_log(&pair.run_log) {
        Ok(zug) => zug,
        Err(e) => {
            warn!(error = %e, "skipping unreadable run log");
            return Outcome::Unreadable;
        }
    };

    if let Some(group) = &zug.fahrplan_gruppe {
        if is_excluded(group, exclusions) {
            debug!(group = %group, "schedule group excluded");
            return Outcome::Excluded;
        }
    }

    let run_entries: Vec<_> = zug
        .eintraege
        .iter()
        .map(|row| zusi::entry_from_run_row(row, overrides))
        .collect();
    let timetable_entries = zusi::timetable_entries(&segments, overrides);

    let meta = zusi::schedule_meta(
        &segments,
        zusi::is_passenger_train(zug.zugtyp.as_deref()),
        &pair.country,
        &pair.route,
        &pair.fahrplan,
    );

    let service = match reconcile(meta, &run_entries, &timetable_entries, policy) {
        Ok(service) => service,
        Err(e) if e.is_too_short() => {
            debug!(timetable = %pair.timetable.display(), error = %e, "service too short");
            return Outcome::TooShort;
        }
        Err(e) => {
            debug!(timetable = %pair.timetable.display(), error = %e, "service rejected");
            return Outcome::Invalid;
        }
    };

    if !service.is_valid() {
        debug!(timetable = %pair.timetable.display(), "service has no valid endpoints");
        return Outcome::Invalid;
    }

    let metrics = compute(&service);
    Outcome::Record(Box::new(assemble(&service, &metrics)))
}
