//! Zusi reader error types.

use std::path::PathBuf;

/// Errors reading one Zusi service file.
///
/// These are per-service: the batch loop logs and counts them without
/// aborting the run.
#[derive(Debug, thiserror::Error)]
pub enum ZusiError {
    /// File could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// XML deserialization failed.
    #[error("cannot parse {path}: {source}")]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::DeError,
    },

    /// A run-log file without a `<Zug>` element.
    #[error("{path} contains no train run")]
    MissingTrainRun { path: PathBuf },

    /// A timetable file without any `<Buchfahrplan>` segment.
    #[error("{path} contains no timetable segment")]
    EmptyTimetable { path: PathBuf },
}
