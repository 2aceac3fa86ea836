//! Zugdienst scanner.
//!
//! Reconciles the two records of each Zusi train service (the sparse run
//! log and the dense timetable) into one classified route description,
//! and writes the resulting rows to a SQLite database.

pub mod batch;
pub mod classify;
pub mod config;
pub mod discover;
pub mod domain;
pub mod record;
pub mod route;
pub mod store;
pub mod zusi;
