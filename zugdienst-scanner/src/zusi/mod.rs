//! Zusi file handling.
//!
//! A service consists of two paired XML files:
//! - the **run log** (`.trn`): the actually-executed stop events, with
//!   precise times but a limited set of points;
//! - the **timetable** (`.timetable.xml`): the planned route with every
//!   point the line passes, each carrying the cumulative running distance.
//!
//! This module reads both kinds and normalizes their rows into the uniform
//! domain [`Entry`](crate::domain::Entry) shape.

mod convert;
mod error;
mod reader;
mod types;

pub use convert::{
    entry_from_run_row, entry_from_timetable_row, is_passenger_train, schedule_meta,
    timetable_entries,
};
pub use error::ZusiError;
pub use reader::{read_run_log, read_timetable};
pub use types::{
    Buchfahrplan, Ereignis, FahrplanEintrag, FplAbf, FplAnk, FplIcon, FplName,
    FplRichtungswechsel, FplZeile, RunLogFile, TimetableFile, Zug,
};
