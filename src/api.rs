//! Public API surface for the booking core.
//!
//! This file consolidates the value objects exchanged with callers: id
//! newtypes, the search query/result pair, and the calendar grid types.
//! All types derive Serialize/Deserialize for JSON serialization and use
//! camelCase field names to match the upstream booking API's wire shapes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::DayStamp;
use crate::models::Venue;

/// Default number of venues per result page.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Hard ceiling on the page size accepted from user input.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Venue identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VenueId(pub Uuid);

/// Reservation (booking) identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(pub Uuid);

impl VenueId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        VenueId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl ReservationId {
    pub fn new() -> Self {
        ReservationId(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl Default for VenueId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for ReservationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for VenueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for ReservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for VenueId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(VenueId(Uuid::parse_str(s)?))
    }
}

/// One venue search request, already normalized from whatever surface it
/// arrived on (URL query parameters, typically `q`, `dateFrom`, `dateTo`,
/// `guests`, `page`, `limit`).
///
/// Both date bounds must be present for availability filtering to
/// activate; a lone bound is ignored. A guest count of zero means "no
/// constraint", not "zero guests".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Free-text term matched as a substring against name, description,
    /// city and country.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<DayStamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<DayStamp>,
    /// Minimum guest capacity required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guests: Option<u32>,
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Page size, already clamped to `[1, MAX_PAGE_SIZE]` at the boundary
    /// that accepted it.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for SearchQuery {
    fn default() -> Self {
        SearchQuery {
            term: None,
            date_from: None,
            date_to: None,
            guests: None,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchQuery {
    /// Clamp a raw user-supplied limit into `[1, MAX_PAGE_SIZE]`,
    /// defaulting when absent. This is the one place the limit bound is
    /// enforced.
    pub fn clamp_limit(raw: Option<u32>) -> u32 {
        raw.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)
    }

    /// Clamp a raw user-supplied page number to `>= 1`. Pages past the
    /// last one are legitimate and yield an empty slice, so there is no
    /// upper clamp.
    pub fn clamp_page(raw: Option<u32>) -> u32 {
        raw.unwrap_or(1).max(1)
    }

    /// Availability filtering runs only when both bounds are present.
    pub fn wants_availability(&self) -> bool {
        self.date_from.is_some() && self.date_to.is_some()
    }
}

/// Pagination metadata returned alongside every result page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub current_page: u32,
    /// Number of venues matching the filters, before slicing.
    pub total_count: usize,
    /// Always at least 1, even for an empty match set.
    pub page_count: u32,
    pub previous_page: Option<u32>,
    pub next_page: Option<u32>,
    pub is_first_page: bool,
    pub is_last_page: bool,
}

/// One page of venues matching a [`SearchQuery`], plus pagination
/// metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub venues: Vec<Venue>,
    pub meta: PageMeta,
}

/// One cell of a month calendar grid.
///
/// `day` is `None` for the leading/trailing placeholders that align the
/// grid to a Monday-first week; placeholders carry no classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    pub booked: bool,
    pub is_today: bool,
    pub is_past: bool,
}

impl CalendarCell {
    /// A blank placeholder outside the displayed month.
    pub const BLANK: CalendarCell = CalendarCell {
        day: None,
        booked: false,
        is_today: false,
        is_past: false,
    };

    pub fn is_in_month(&self) -> bool {
        self.day.is_some()
    }
}

/// A full month expanded into grid cells, Monday-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
    pub cells: Vec<CalendarCell>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_clamped_to_ceiling() {
        assert_eq!(SearchQuery::clamp_limit(Some(500)), MAX_PAGE_SIZE);
        assert_eq!(SearchQuery::clamp_limit(Some(0)), 1);
        assert_eq!(SearchQuery::clamp_limit(None), DEFAULT_PAGE_SIZE);
        assert_eq!(SearchQuery::clamp_limit(Some(25)), 25);
    }

    #[test]
    fn test_page_clamped_below_only() {
        assert_eq!(SearchQuery::clamp_page(Some(0)), 1);
        assert_eq!(SearchQuery::clamp_page(None), 1);
        assert_eq!(SearchQuery::clamp_page(Some(9999)), 9999);
    }

    #[test]
    fn test_deserialize_applies_paging_defaults() {
        let query: SearchQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query, SearchQuery::default());

        let query: SearchQuery =
            serde_json::from_str(r#"{"term":"cabin","page":3,"limit":20}"#).unwrap();
        assert_eq!(query.page, 3);
        assert_eq!(query.limit, 20);
    }

    #[test]
    fn test_availability_needs_both_bounds() {
        let mut query = SearchQuery {
            date_from: Some(DayStamp::from_ymd(2025, 2, 10)),
            ..SearchQuery::default()
        };
        assert!(!query.wants_availability());
        query.date_to = Some(DayStamp::from_ymd(2025, 2, 12));
        assert!(query.wants_availability());
    }

    #[test]
    fn test_page_meta_serializes_camel_case() {
        let meta = PageMeta {
            current_page: 1,
            total_count: 0,
            page_count: 1,
            previous_page: None,
            next_page: None,
            is_first_page: true,
            is_last_page: true,
        };
        let json = serde_json::to_value(&meta).unwrap();
        assert!(json.get("isFirstPage").is_some());
        assert!(json.get("pageCount").is_some());
    }

    #[test]
    fn test_blank_cell_is_outside_month() {
        assert!(!CalendarCell::BLANK.is_in_month());
    }
}
