//! Core booking logic.
//!
//! This module contains the pure, synchronous heart of the crate: interval
//! overlap math, the search/filter/paginate pipeline, and calendar
//! expansion. Nothing here performs I/O, holds state, or returns errors;
//! orchestration against the repository lives in `db::services`.

pub mod availability;

pub mod calendar;

pub mod search;

pub use availability::{is_range_available, ranges_overlap};
pub use calendar::month_grid;
pub use search::search_venues;
