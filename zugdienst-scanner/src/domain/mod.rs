//! Domain types for the service scanner.
//!
//! This module contains the core model shared by the normalizer, the
//! classifier, and the route reconstructor: the uniform [`Entry`] value,
//! the classification [`Category`] taxonomy with its override table, the
//! merged schedule metadata, and the reconciled [`Service`] aggregate.

mod category;
mod entry;
mod service;
mod time;

pub use category::{Category, ParseCategoryError, StationOverrides};
pub use entry::Entry;
pub use service::{ScheduleMeta, Service};
pub use time::{format_duration, parse_timestamp, parse_timestamp_opt};
