//! High-level operations over a repository.
//!
//! These functions are the recommended entry point for application code:
//! they combine the coarse repository fetch with the exact in-memory core
//! (`crate::services`) and enforce validation and authorization. Every
//! operation that needs a caller identity takes an explicit
//! [`SessionContext`]; nothing here reads ambient global state.

use log::debug;

use crate::api::{MonthGrid, ReservationId, SearchQuery, SearchResult, VenueId};
use crate::models::{DayStamp, Reservation, SessionContext, Venue, VenueDraft, VenueRecord};
use crate::services;

use super::repository::{RepositoryError, RepositoryResult, VenueRepository};

/// Listing capacity bounds accepted for a venue draft.
const GUEST_CAPACITY_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

/// Check that the backing store is reachable.
pub async fn health_check(repo: &dyn VenueRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Two-stage availability search: coarse server-side fetch feeding the
/// exact client-side pipeline.
///
/// The fetch is capped at `coarse_cap` records (see
/// `config::SearchConfig`); venues beyond the cap are not considered.
/// Reservation lists are only requested when the query actually filters
/// by availability.
pub async fn search_venues(
    repo: &dyn VenueRepository,
    query: &SearchQuery,
    coarse_cap: usize,
) -> RepositoryResult<SearchResult> {
    let records = repo
        .list_venues(coarse_cap, query.wants_availability())
        .await?;
    debug!(
        "coarse fetch returned {} venues (cap {})",
        records.len(),
        coarse_cap
    );
    Ok(services::search_venues(&records, query))
}

/// Fetch one venue with its reservations.
pub async fn get_venue(repo: &dyn VenueRepository, id: VenueId) -> RepositoryResult<VenueRecord> {
    repo.get_venue(id).await
}

/// Expand one month of a venue's booking calendar.
pub async fn venue_calendar(
    repo: &dyn VenueRepository,
    id: VenueId,
    year: i32,
    month: u32,
    today: DayStamp,
) -> RepositoryResult<MonthGrid> {
    let record = repo.get_venue(id).await?;
    Ok(services::month_grid(
        year,
        month,
        record.reservations(),
        today,
    ))
}

/// Create a venue listing. Requires a venue-manager session.
pub async fn create_venue(
    repo: &dyn VenueRepository,
    session: &SessionContext,
    draft: VenueDraft,
) -> RepositoryResult<Venue> {
    require_session(session)?;
    if !session.is_venue_manager() {
        return Err(RepositoryError::forbidden(
            "only venue managers may create listings",
        ));
    }
    validate_draft(&draft)?;

    let venue = Venue {
        id: VenueId::new(),
        name: draft.name.trim().to_string(),
        description: draft.description,
        max_guests: draft.max_guests,
        price: draft.price,
        location: draft.location,
        manager: Some(session.profile.name.clone()),
    };
    debug!("creating venue {} for {}", venue.id, session.profile.name);
    repo.insert_venue(venue).await
}

/// Update a venue listing. Only the owning manager may edit.
pub async fn update_venue(
    repo: &dyn VenueRepository,
    session: &SessionContext,
    id: VenueId,
    draft: VenueDraft,
) -> RepositoryResult<Venue> {
    require_session(session)?;
    let existing = repo.get_venue(id).await?.into_venue();
    if !session.owns(existing.manager.as_deref()) {
        return Err(RepositoryError::forbidden(
            "only the owning manager may edit this listing",
        ));
    }
    validate_draft(&draft)?;

    let venue = Venue {
        id,
        name: draft.name.trim().to_string(),
        description: draft.description,
        max_guests: draft.max_guests,
        price: draft.price,
        location: draft.location,
        manager: existing.manager,
    };
    repo.update_venue(venue).await
}

/// Delete a venue listing. Only the owning manager may delete.
pub async fn delete_venue(
    repo: &dyn VenueRepository,
    session: &SessionContext,
    id: VenueId,
) -> RepositoryResult<()> {
    require_session(session)?;
    let existing = repo.get_venue(id).await?.into_venue();
    if !session.owns(existing.manager.as_deref()) {
        return Err(RepositoryError::forbidden(
            "only the owning manager may delete this listing",
        ));
    }
    debug!("deleting venue {}", id);
    repo.delete_venue(id).await
}

/// Book a stay at a venue.
///
/// Validates the candidate range (parseable, non-inverted, non-empty) and
/// the guest count against capacity, then checks availability with the
/// same predicate the search pipeline uses. Unlike search, booking
/// rejects malformed dates outright: the permissive "invalid means
/// available" fallback is acceptable for a result listing, not for
/// writing a reservation.
pub async fn create_booking(
    repo: &dyn VenueRepository,
    session: &SessionContext,
    venue_id: VenueId,
    date_from: DayStamp,
    date_to: DayStamp,
    guests: u32,
) -> RepositoryResult<Reservation> {
    require_session(session)?;
    if !date_from.is_valid() || !date_to.is_valid() {
        return Err(RepositoryError::validation("unparseable booking dates"));
    }
    if !date_from.is_before(date_to) {
        return Err(RepositoryError::validation(
            "check-out must be after check-in",
        ));
    }
    if guests == 0 {
        return Err(RepositoryError::validation("at least one guest required"));
    }

    let record = repo.get_venue(venue_id).await?;
    if guests > record.venue().max_guests {
        return Err(RepositoryError::validation(format!(
            "venue sleeps at most {} guests",
            record.venue().max_guests
        )));
    }
    if !services::is_range_available(record.reservations(), date_from, date_to) {
        return Err(RepositoryError::Conflict(format!(
            "venue is already booked between {} and {}",
            date_from, date_to
        )));
    }

    let reservation = Reservation {
        id: ReservationId::new(),
        date_from,
        date_to,
        guests,
    };
    repo.insert_reservation(venue_id, reservation).await
}

fn require_session(session: &SessionContext) -> RepositoryResult<()> {
    if session.token.trim().is_empty() {
        return Err(RepositoryError::Unauthorized("missing bearer token".into()));
    }
    Ok(())
}

fn validate_draft(draft: &VenueDraft) -> RepositoryResult<()> {
    if draft.name.trim().is_empty() {
        return Err(RepositoryError::validation("venue name must not be empty"));
    }
    if !GUEST_CAPACITY_RANGE.contains(&draft.max_guests) {
        return Err(RepositoryError::validation(format!(
            "maxGuests must be between {} and {}",
            GUEST_CAPACITY_RANGE.start(),
            GUEST_CAPACITY_RANGE.end()
        )));
    }
    if !draft.price.is_finite() || draft.price < 0.0 {
        return Err(RepositoryError::validation("price must be non-negative"));
    }
    Ok(())
}
