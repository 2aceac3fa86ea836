//! Service-file discovery.
//!
//! The on-disk layout is `<root>/<country>/<route>/<schedule>.fpn`, with
//! the schedule's services in a sibling directory of the same name: each
//! service is a `<name>.timetable.xml` paired with a `<name>.trn` run log.
//! Discovery walks that tree, applies the exclusion keywords, and yields
//! the pairs in sorted order so batch output is deterministic.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::Datatypes;

/// One discovered service: the timetable path, the expected run-log path,
/// and the provenance recorded into the output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePair {
    /// The `.timetable.xml` file.
    pub timetable: PathBuf,
    /// The paired `.trn` file (existence not yet checked).
    pub run_log: PathBuf,
    /// Country directory name.
    pub country: String,
    /// Route directory name.
    pub route: String,
    /// Schedule folder name.
    pub fahrplan: String,
}

/// Discover all service pairs under the configured roots.
///
/// I/O problems (unreadable directory, vanished file) are logged and skip
/// the affected subtree; discovery itself never fails.
pub fn discover_services(
    roots: &[PathBuf],
    datatypes: &Datatypes,
    exclusions: &[String],
) -> Vec<ServicePair> {
    let mut pairs = Vec::new();

    for root in roots {
        for country in sorted_entries(root) {
            let Some(country_name) = dir_name(&country) else {
                continue;
            };
            if exclusions.contains(&country_name.to_lowercase()) {
                debug!(country = country_name, "country excluded");
                continue;
            }

            for route in sorted_entries(&country) {
                let Some(route_name) = dir_name(&route) else {
                    continue;
                };

                for schedule in schedule_dirs(&route, &datatypes.timetable) {
                    collect_pairs(
                        &schedule,
                        datatypes,
                        exclusions,
                        country_name,
                        route_name,
                        &mut pairs,
                    );
                }
            }
        }
    }

    pairs
}

/// Collect the service pairs of one schedule directory.
fn collect_pairs(
    schedule_dir: &Path,
    datatypes: &Datatypes,
    exclusions: &[String],
    country: &str,
    route: &str,
    pairs: &mut Vec<ServicePair>,
) {
    let Some(fahrplan) = dir_name(schedule_dir) else {
        return;
    };

    for entry in sorted_entries(schedule_dir) {
        let Some(file_name) = entry.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(stem) = file_name.strip_suffix(&datatypes.service) else {
            continue;
        };

        if is_excluded(&entry.to_string_lossy(), exclusions) {
            debug!(path = %entry.display(), "service path excluded");
            continue;
        }

        let run_log = schedule_dir.join(format!("{stem}trn"));

        pairs.push(ServicePair {
            timetable: entry.clone(),
            run_log,
            country: country.to_string(),
            route: route.to_string(),
            fahrplan: fahrplan.to_string(),
        });
    }
}

/// Schedule directories in a route: for every `<name>.fpn` file, the
/// sibling `<name>` directory holding its services.
fn schedule_dirs(route_dir: &Path, timetable_suffix: &str) -> Vec<PathBuf> {
    sorted_entries(route_dir)
        .into_iter()
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .map(|e| e.eq_ignore_ascii_case(timetable_suffix))
                .unwrap_or(false)
        })
        .map(|p| p.with_extension(""))
        .collect()
}

/// True when any exclusion keyword occurs in the path (case-insensitive).
pub fn is_excluded(text: &str, exclusions: &[String]) -> bool {
    let lower = text.to_lowercase();
    exclusions.iter().any(|kw| lower.contains(kw))
}

/// Directory entries sorted by path; unreadable directories yield nothing.
fn sorted_entries(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!(dir = %dir.display(), error = %e, "cannot list directory");
            return Vec::new();
        }
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "cannot read directory entry");
                None
            }
        })
        .collect();
    paths.sort();
    paths
}

fn dir_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Build `<root>/<country>/<route>/<schedule>.fpn` plus the schedule
    /// directory with the given service file names.
    fn fixture(
        root: &Path,
        country: &str,
        route: &str,
        schedule: &str,
        services: &[&str],
    ) {
        let route_dir = root.join(country).join(route);
        fs::create_dir_all(&route_dir).unwrap();
        fs::write(route_dir.join(format!("{schedule}.fpn")), "<Zusi/>").unwrap();

        let schedule_dir = route_dir.join(schedule);
        fs::create_dir_all(&schedule_dir).unwrap();
        for service in services {
            fs::write(schedule_dir.join(service), "<Zusi/>").unwrap();
        }
    }

    fn datatypes() -> Datatypes {
        Datatypes::default()
    }

    #[test]
    fn finds_paired_services() {
        let dir = tempfile::tempdir().unwrap();
        fixture(
            dir.path(),
            "Deutschland",
            "Nord",
            "Sommer2019",
            &["ICE572.timetable.xml", "ICE572.trn", "RB64.timetable.xml"],
        );

        let pairs = discover_services(&[dir.path().to_path_buf()], &datatypes(), &[]);

        assert_eq!(pairs.len(), 2);
        let first = &pairs[0];
        assert!(first.timetable.ends_with("ICE572.timetable.xml"));
        assert!(first.run_log.ends_with("ICE572.trn"));
        assert_eq!(first.country, "Deutschland");
        assert_eq!(first.route, "Nord");
        assert_eq!(first.fahrplan, "Sommer2019");
        // The pair for RB64 is still listed; its missing run log is the
        // batch loop's concern.
        assert!(pairs[1].run_log.ends_with("RB64.trn"));
    }

    #[test]
    fn skips_excluded_countries() {
        let dir = tempfile::tempdir().unwrap();
        fixture(dir.path(), "Tutorial", "Demo", "Plan", &["A.timetable.xml"]);
        fixture(dir.path(), "Deutschland", "Nord", "Plan", &["B.timetable.xml"]);

        let pairs = discover_services(
            &[dir.path().to_path_buf()],
            &datatypes(),
            &["tutorial".to_string()],
        );

        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].country, "Deutschland");
    }

    #[test]
    fn skips_excluded_service_paths() {
        let dir = tempfile::tempdir().unwrap();
        fixture(
            dir.path(),
            "Deutschland",
            "Nord",
            "Plan",
            &["ICE1.timetable.xml", "Leerfahrt_X.timetable.xml"],
        );

        let pairs = discover_services(
            &[dir.path().to_path_buf()],
            &datatypes(),
            &["leerfahrt".to_string()],
        );

        assert_eq!(pairs.len(), 1);
        assert!(pairs[0].timetable.ends_with("ICE1.timetable.xml"));
    }

    #[test]
    fn ignores_files_without_service_suffix() {
        let dir = tempfile::tempdir().unwrap();
        fixture(
            dir.path(),
            "Deutschland",
            "Nord",
            "Plan",
            &["ICE1.timetable.xml", "ICE1.trn", "notes.txt"],
        );

        let pairs = discover_services(&[dir.path().to_path_buf()], &datatypes(), &[]);
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn missing_root_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("no-such-dir");
        let pairs = discover_services(&[absent], &datatypes(), &[]);
        assert!(pairs.is_empty());
    }

    #[test]
    fn traversal_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fixture(
            dir.path(),
            "Deutschland",
            "Nord",
            "Plan",
            &["B.timetable.xml", "A.timetable.xml", "C.timetable.xml"],
        );

        let pairs = discover_services(&[dir.path().to_path_buf()], &datatypes(), &[]);
        let names: Vec<String> = pairs
            .iter()
            .map(|p| p.timetable.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["A.timetable.xml", "B.timetable.xml", "C.timetable.xml"]
        );
    }

    #[test]
    fn route_without_schedule_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        // Schedule dir exists but no .fpn marker next to it
        let schedule_dir = dir.path().join("Deutschland").join("Nord").join("Plan");
        fs::create_dir_all(&schedule_dir).unwrap();
        fs::write(schedule_dir.join("A.timetable.xml"), "<Zusi/>").unwrap();

        let pairs = discover_services(&[dir.path().to_path_buf()], &datatypes(), &[]);
        assert!(pairs.is_empty());
    }
}
