//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic. Mutating handlers resolve an
//! explicit [`SessionContext`] from request headers; there is no ambient
//! auth state.

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};

use super::dto::{
    CalendarParams, CreateBookingRequest, CreateBookingResponse, HealthResponse,
    SearchVenuesParams,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{MonthGrid, SearchResult, VenueId};
use crate::models::{DayStamp, SessionContext, UserProfile, Venue, VenueDraft, VenueRecord};
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Resolve the caller's session from request headers.
///
/// - `Authorization: Bearer <token>` — opaque upstream token (required)
/// - `X-Profile-Name` — profile name resolved at login (required)
/// - `X-Venue-Manager: true` — venue-manager flag (optional)
fn session_from_headers(headers: &HeaderMap) -> Result<SessionContext, AppError> {
    let token = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Unauthorized("missing bearer token".to_string()))?;

    let name = headers
        .get("x-profile-name")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::Unauthorized("missing X-Profile-Name header".to_string()))?;

    let venue_manager = headers
        .get("x-venue-manager")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"));

    Ok(SessionContext::new(
        token,
        UserProfile {
            name: name.to_string(),
            email: String::new(),
            venue_manager,
        },
    ))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the
/// repository is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository: repo_status,
    }))
}

// =============================================================================
// Venue Search & Lookup
// =============================================================================

/// GET /v1/venues
///
/// Search venues. Accepts `q`, `dateFrom`, `dateTo`, `guests`, `page`
/// and `limit` query parameters; responds with one page of venues plus
/// pagination metadata.
pub async fn search_venues(
    State(state): State<AppState>,
    Query(params): Query<SearchVenuesParams>,
) -> HandlerResult<SearchResult> {
    let query = params.into_query();
    let result = db_services::search_venues(
        state.repository.as_ref(),
        &query,
        state.search.coarse_fetch_cap,
    )
    .await?;
    Ok(Json(result))
}

/// GET /v1/venues/{venue_id}
///
/// Fetch one venue with its reservation list.
pub async fn get_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<VenueId>,
) -> HandlerResult<VenueRecord> {
    let record = db_services::get_venue(state.repository.as_ref(), venue_id).await?;
    Ok(Json(record))
}

/// GET /v1/venues/{venue_id}/calendar
///
/// Expand one month of the venue's booking calendar. Defaults to the
/// current month when `year`/`month` are absent.
pub async fn get_calendar(
    State(state): State<AppState>,
    Path(venue_id): Path<VenueId>,
    Query(params): Query<CalendarParams>,
) -> HandlerResult<MonthGrid> {
    let today = DayStamp::today();
    let (default_year, default_month) = match today.date() {
        Some(date) => (chrono::Datelike::year(&date), chrono::Datelike::month(&date)),
        None => (1970, 1),
    };
    let year = params.year.unwrap_or(default_year);
    let month = params.month.unwrap_or(default_month);

    let grid =
        db_services::venue_calendar(state.repository.as_ref(), venue_id, year, month, today)
            .await?;
    Ok(Json(grid))
}

// =============================================================================
// Venue Management
// =============================================================================

/// POST /v1/venues
///
/// Create a venue listing. Requires a venue-manager session.
pub async fn create_venue(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(draft): Json<VenueDraft>,
) -> Result<(axum::http::StatusCode, Json<Venue>), AppError> {
    let session = session_from_headers(&headers)?;
    let venue = db_services::create_venue(state.repository.as_ref(), &session, draft).await?;
    Ok((axum::http::StatusCode::CREATED, Json(venue)))
}

/// PUT /v1/venues/{venue_id}
///
/// Update a venue listing. Only the owning manager may edit.
pub async fn update_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<VenueId>,
    headers: HeaderMap,
    Json(draft): Json<VenueDraft>,
) -> HandlerResult<Venue> {
    let session = session_from_headers(&headers)?;
    let venue =
        db_services::update_venue(state.repository.as_ref(), &session, venue_id, draft).await?;
    Ok(Json(venue))
}

/// DELETE /v1/venues/{venue_id}
///
/// Delete a venue listing. Only the owning manager may delete.
pub async fn delete_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<VenueId>,
    headers: HeaderMap,
) -> Result<axum::http::StatusCode, AppError> {
    let session = session_from_headers(&headers)?;
    db_services::delete_venue(state.repository.as_ref(), &session, venue_id).await?;
    Ok(axum::http::StatusCode::NO_CONTENT)
}

// =============================================================================
// Bookings
// =============================================================================

/// POST /v1/venues/{venue_id}/bookings
///
/// Book a stay. The candidate range is day-normalized and checked with
/// the same availability predicate the search pipeline uses.
pub async fn create_booking(
    State(state): State<AppState>,
    Path(venue_id): Path<VenueId>,
    headers: HeaderMap,
    Json(request): Json<CreateBookingRequest>,
) -> Result<(axum::http::StatusCode, Json<CreateBookingResponse>), AppError> {
    let session = session_from_headers(&headers)?;
    let reservation = db_services::create_booking(
        state.repository.as_ref(),
        &session,
        venue_id,
        DayStamp::parse(&request.date_from),
        DayStamp::parse(&request.date_to),
        request.guests,
    )
    .await?;

    Ok((
        axum::http::StatusCode::CREATED,
        Json(CreateBookingResponse {
            id: reservation.id,
            date_from: reservation.date_from,
            date_to: reservation.date_to,
            guests: reservation.guests,
        }),
    ))
}
