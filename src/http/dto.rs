//! Data Transfer Objects for the HTTP API.
//!
//! Query parameters arrive as raw strings and are normalized here into
//! the crate's value objects: limits clamped, dates day-normalized
//! (leniently — unparseable dates become invalid stamps, preserving the
//! core's permissive fallback for search).

use serde::{Deserialize, Serialize};

// Re-export result types that are already serializable.
pub use crate::api::{CalendarCell, MonthGrid, PageMeta, SearchResult};
pub use crate::models::{Venue, VenueDraft, VenueRecord};

use crate::api::SearchQuery;
use crate::models::DayStamp;

/// Query parameters for the venue search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchVenuesParams {
    /// Free-text search term
    #[serde(default)]
    pub q: Option<String>,
    /// Check-in day (ISO 8601)
    #[serde(default)]
    pub date_from: Option<String>,
    /// Checkout day (ISO 8601)
    #[serde(default)]
    pub date_to: Option<String>,
    /// Minimum guest capacity
    #[serde(default)]
    pub guests: Option<u32>,
    /// 1-based page number
    #[serde(default)]
    pub page: Option<u32>,
    /// Page size, clamped to [1, 100]
    #[serde(default)]
    pub limit: Option<u32>,
}

impl SearchVenuesParams {
    /// Normalize into a [`SearchQuery`]. This is the boundary where the
    /// page-size clamp is enforced.
    pub fn into_query(self) -> SearchQuery {
        SearchQuery {
            term: self.q,
            date_from: self.date_from.as_deref().map(DayStamp::parse),
            date_to: self.date_to.as_deref().map(DayStamp::parse),
            guests: self.guests,
            page: SearchQuery::clamp_page(self.page),
            limit: SearchQuery::clamp_limit(self.limit),
        }
    }
}

/// Query parameters for the calendar endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CalendarParams {
    #[serde(default)]
    pub year: Option<i32>,
    /// 1-based month number
    #[serde(default)]
    pub month: Option<u32>,
}

/// Request body for creating a booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub date_from: String,
    pub date_to: String,
    pub guests: u32,
}

/// Response for a created booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingResponse {
    pub id: crate::api::ReservationId,
    pub date_from: DayStamp,
    pub date_to: DayStamp,
    pub guests: u32,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Repository status
    pub repository: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

    #[test]
    fn test_into_query_applies_defaults() {
        let query = SearchVenuesParams::default().into_query();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, DEFAULT_PAGE_SIZE);
        assert!(query.term.is_none());
        assert!(!query.wants_availability());
    }

    #[test]
    fn test_into_query_clamps_limit() {
        let params = SearchVenuesParams {
            limit: Some(9999),
            page: Some(0),
            ..Default::default()
        };
        let query = params.into_query();
        assert_eq!(query.limit, MAX_PAGE_SIZE);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_into_query_parses_dates_leniently() {
        let params = SearchVenuesParams {
            date_from: Some("2025-02-10".to_string()),
            date_to: Some("not-a-date".to_string()),
            ..Default::default()
        };
        let query = params.into_query();
        assert!(query.date_from.unwrap().is_valid());
        // Unparseable bound still counts as present: availability filtering
        // activates and the invalid stamp reports everything available.
        assert!(!query.date_to.unwrap().is_valid());
        assert!(query.wants_availability());
    }

    #[test]
    fn test_search_params_accept_camel_case_keys() {
        let params: SearchVenuesParams =
            serde_json::from_str(r#"{"dateFrom":"2025-02-10","dateTo":"2025-02-12","q":"oslo"}"#)
                .unwrap();
        assert_eq!(params.q.as_deref(), Some("oslo"));
        assert!(params.date_from.is_some());
    }
}
