//! Venue search pipeline: filter, then paginate.
//!
//! The upstream booking API cannot filter by availability server-side, so
//! the surrounding layer over-fetches a coarse candidate set (capped, see
//! `db::services`) and this pipeline narrows it exactly in memory:
//!
//! 1. free-text filter (substring over name/description/city/country)
//! 2. guest-capacity filter
//! 3. availability filter (both date bounds required)
//! 4. pagination slice plus metadata
//!
//! The pipeline is pure: it reads the candidate records, clones the
//! surviving venues into the result, and touches nothing else.

use crate::api::{PageMeta, SearchQuery, SearchResult};
use crate::models::VenueRecord;

use super::availability::is_range_available;

/// Lowercased, trimmed text a venue is matched against.
fn haystack(record: &VenueRecord) -> String {
    let venue = record.venue();
    let location = &venue.location;
    [
        Some(venue.name.as_str()),
        Some(venue.description.as_str()),
        location.city.as_deref(),
        location.country.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(|part| part.trim().to_lowercase())
    .collect::<Vec<_>>()
    .join(" ")
}

fn matches_term(record: &VenueRecord, term: &str) -> bool {
    haystack(record).contains(term)
}

/// Run the full pipeline over an in-memory candidate set.
///
/// Guest and text filters always run before pagination; availability
/// filtering activates only when the query carries both date bounds. The
/// returned metadata is structurally valid for every input: an empty
/// match set still reports `page_count == 1`, and a page past the end
/// yields an empty slice rather than an error.
pub fn search_venues(records: &[VenueRecord], query: &SearchQuery) -> SearchResult {
    let needle = query
        .term
        .as_deref()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty());
    let min_guests = query.guests.filter(|&g| g > 0);

    let matches: Vec<&VenueRecord> = records
        .iter()
        .filter(|record| match &needle {
            Some(term) => matches_term(record, term),
            None => true,
        })
        .filter(|record| match min_guests {
            Some(guests) => record.venue().max_guests >= guests,
            None => true,
        })
        .filter(|record| match (query.date_from, query.date_to) {
            (Some(from), Some(to)) => is_range_available(record.reservations(), from, to),
            _ => true,
        })
        .collect();

    paginate(&matches, query.page, query.limit)
}

/// Slice the matches down to one page and build the metadata.
///
/// `limit` is assumed already clamped to `[1, MAX_PAGE_SIZE]` by the
/// boundary that accepted it; a zero slips through as a page count of
/// `total_count` pages of one rather than a panic.
fn paginate(matches: &[&VenueRecord], page: u32, limit: u32) -> SearchResult {
    let limit = limit.max(1) as usize;
    let total_count = matches.len();
    let page_count = (total_count.div_ceil(limit)).max(1) as u32;
    let page = page.max(1);

    let offset = (page as usize - 1).saturating_mul(limit);
    let venues = matches
        .iter()
        .skip(offset)
        .take(limit)
        .map(|record| record.venue().clone())
        .collect();

    SearchResult {
        venues,
        meta: PageMeta {
            current_page: page,
            total_count,
            page_count,
            previous_page: (page > 1).then(|| page - 1),
            next_page: (page < page_count).then(|| page + 1),
            is_first_page: page <= 1,
            is_last_page: page >= page_count,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ReservationId, VenueId};
    use crate::models::{DayStamp, Reservation, Venue, VenueLocation};

    fn venue(name: &str, city: &str, country: &str, max_guests: u32) -> Venue {
        Venue {
            id: VenueId::new(),
            name: name.to_string(),
            description: format!("{} listing", name),
            max_guests,
            price: 100.0,
            location: VenueLocation {
                address: None,
                city: Some(city.to_string()),
                country: Some(country.to_string()),
            },
            manager: None,
        }
    }

    fn reservation(from: &str, to: &str) -> Reservation {
        Reservation::from_iso(ReservationId::new(), from, to, 2)
    }

    fn fixtures() -> Vec<VenueRecord> {
        vec![
            VenueRecord::WithReservations {
                venue: venue("Cozy Cabin", "Bergen", "Norway", 4),
                reservations: vec![reservation("2025-02-10", "2025-02-12")],
            },
            VenueRecord::WithReservations {
                venue: venue("Oslo Apartment", "Oslo", "Norway", 2),
                reservations: vec![],
            },
        ]
    }

    fn names(result: &SearchResult) -> Vec<&str> {
        result.venues.iter().map(|v| v.name.as_str()).collect()
    }

    #[test]
    fn test_text_filter_matches_name() {
        let query = SearchQuery {
            term: Some("oslo".to_string()),
            ..SearchQuery::default()
        };
        let result = search_venues(&fixtures(), &query);
        assert_eq!(names(&result), vec!["Oslo Apartment"]);
    }

    #[test]
    fn test_text_filter_matches_location_fields() {
        let query = SearchQuery {
            term: Some("  BERGEN ".to_string()),
            ..SearchQuery::default()
        };
        let result = search_venues(&fixtures(), &query);
        assert_eq!(names(&result), vec!["Cozy Cabin"]);
    }

    #[test]
    fn test_blank_term_is_no_constraint() {
        let query = SearchQuery {
            term: Some("   ".to_string()),
            ..SearchQuery::default()
        };
        let result = search_venues(&fixtures(), &query);
        assert_eq!(result.meta.total_count, 2);
    }

    #[test]
    fn test_guest_filter_excludes_small_venues() {
        let query = SearchQuery {
            guests: Some(3),
            ..SearchQuery::default()
        };
        let result = search_venues(&fixtures(), &query);
        assert_eq!(names(&result), vec!["Cozy Cabin"]);
    }

    #[test]
    fn test_zero_guests_is_no_constraint() {
        let query = SearchQuery {
            guests: Some(0),
            ..SearchQuery::default()
        };
        let result = search_venues(&fixtures(), &query);
        assert_eq!(result.meta.total_count, 2);
    }

    #[test]
    fn test_availability_filter_excludes_overlap() {
        let query = SearchQuery {
            date_from: Some(DayStamp::from_ymd(2025, 2, 10)),
            date_to: Some(DayStamp::from_ymd(2025, 2, 11)),
            ..SearchQuery::default()
        };
        let result = search_venues(&fixtures(), &query);
        assert_eq!(names(&result), vec!["Oslo Apartment"]);
    }

    #[test]
    fn test_checkout_day_checkin_is_available() {
        let query = SearchQuery {
            date_from: Some(DayStamp::from_ymd(2025, 2, 12)),
            date_to: Some(DayStamp::from_ymd(2025, 2, 14)),
            ..SearchQuery::default()
        };
        let result = search_venues(&fixtures(), &query);
        assert_eq!(result.meta.total_count, 2);
    }

    #[test]
    fn test_lone_date_bound_does_not_filter() {
        let query = SearchQuery {
            date_from: Some(DayStamp::from_ymd(2025, 2, 10)),
            ..SearchQuery::default()
        };
        let result = search_venues(&fixtures(), &query);
        assert_eq!(result.meta.total_count, 2);
    }

    #[test]
    fn test_bare_record_treated_as_unreserved() {
        let records = vec![VenueRecord::Bare {
            venue: venue("Loft", "Oslo", "Norway", 2),
        }];
        let query = SearchQuery {
            date_from: Some(DayStamp::from_ymd(2025, 2, 10)),
            date_to: Some(DayStamp::from_ymd(2025, 2, 12)),
            ..SearchQuery::default()
        };
        let result = search_venues(&records, &query);
        assert_eq!(result.meta.total_count, 1);
    }

    #[test]
    fn test_empty_input_yields_valid_metadata() {
        let result = search_venues(&[], &SearchQuery::default());
        assert_eq!(result.meta.total_count, 0);
        assert_eq!(result.meta.page_count, 1);
        assert!(result.venues.is_empty());
        assert!(result.meta.is_first_page);
        assert!(result.meta.is_last_page);
        assert_eq!(result.meta.previous_page, None);
        assert_eq!(result.meta.next_page, None);
    }

    #[test]
    fn test_pagination_slices_and_flags() {
        let records: Vec<VenueRecord> = (0..5)
            .map(|i| VenueRecord::Bare {
                venue: venue(&format!("Venue {}", i), "Oslo", "Norway", 2),
            })
            .collect();
        let query = SearchQuery {
            page: 2,
            limit: 2,
            ..SearchQuery::default()
        };
        let result = search_venues(&records, &query);
        assert_eq!(names(&result), vec!["Venue 2", "Venue 3"]);
        assert_eq!(result.meta.page_count, 3);
        assert_eq!(result.meta.previous_page, Some(1));
        assert_eq!(result.meta.next_page, Some(3));
        assert!(!result.meta.is_first_page);
        assert!(!result.meta.is_last_page);
    }

    #[test]
    fn test_last_page_flags() {
        let records: Vec<VenueRecord> = (0..5)
            .map(|i| VenueRecord::Bare {
                venue: venue(&format!("Venue {}", i), "Oslo", "Norway", 2),
            })
            .collect();
        let query = SearchQuery {
            page: 3,
            limit: 2,
            ..SearchQuery::default()
        };
        let result = search_venues(&records, &query);
        assert_eq!(result.venues.len(), 1);
        assert!(result.meta.is_last_page);
        assert_eq!(result.meta.next_page, None);
    }

    #[test]
    fn test_page_past_end_is_empty_not_error() {
        let records = vec![VenueRecord::Bare {
            venue: venue("Only One", "Oslo", "Norway", 2),
        }];
        let query = SearchQuery {
            page: 7,
            limit: 12,
            ..SearchQuery::default()
        };
        let result = search_venues(&records, &query);
        assert!(result.venues.is_empty());
        assert_eq!(result.meta.current_page, 7);
        assert_eq!(result.meta.total_count, 1);
        assert!(result.meta.is_last_page);
        assert_eq!(result.meta.previous_page, Some(6));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn pagination_invariants(total in 0usize..120, limit in 1u32..20, page in 1u32..15) {
                let records: Vec<VenueRecord> = (0..total)
                    .map(|i| VenueRecord::Bare {
                        venue: venue(&format!("Venue {}", i), "Oslo", "Norway", 2),
                    })
                    .collect();
                let query = SearchQuery { page, limit, ..SearchQuery::default() };
                let result = search_venues(&records, &query);

                let expected_pages = (total.div_ceil(limit as usize)).max(1) as u32;
                prop_assert_eq!(result.meta.page_count, expected_pages);

                let offset = (page as usize - 1) * limit as usize;
                let expected_len = total.saturating_sub(offset).min(limit as usize);
                prop_assert_eq!(result.venues.len(), expected_len);

                prop_assert_eq!(result.meta.is_first_page, page == 1);
                prop_assert_eq!(result.meta.is_last_page, page >= expected_pages);
                prop_assert_eq!(result.meta.previous_page, (page > 1).then(|| page - 1));
                prop_assert_eq!(result.meta.next_page, (page < expected_pages).then(|| page + 1));
            }
        }
    }
}
