//! Reading and deserializing the two Zusi file kinds.

use std::path::Path;

use super::error::ZusiError;
use super::types::{Buchfahrplan, RunLogFile, TimetableFile, Zug};

/// Read and parse a run-log (`.trn`) file.
pub fn read_run_log(path: &Path) -> Result<Zug, ZusiError> {
    let text = std::fs::read_to_string(path).map_err(|source| ZusiError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file: RunLogFile = quick_xml::de::from_str(&text).map_err(|source| ZusiError::Xml {
        path: path.to_path_buf(),
        source,
    })?;

    file.zug.ok_or_else(|| ZusiError::MissingTrainRun {
        path: path.to_path_buf(),
    })
}

/// Read and parse a timetable (`.timetable.xml`) file.
///
/// Returns the route segments in file order; a through service spans more
/// than one.
pub fn read_timetable(path: &Path) -> Result<Vec<Buchfahrplan>, ZusiError> {
    let text = std::fs::read_to_string(path).map_err(|source| ZusiError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file: TimetableFile = quick_xml::de::from_str(&text).map_err(|source| ZusiError::Xml {
        path: path.to_path_buf(),
        source,
    })?;

    if file.segmente.is_empty() {
        return Err(ZusiError::EmptyTimetable {
            path: path.to_path_buf(),
        });
    }

    Ok(file.segmente)
}
