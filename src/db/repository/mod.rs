//! Repository trait for venue and reservation storage.
//!
//! The remote booking API is the system of record for venues and
//! bookings; this trait is the seam that stands in for it. The shipped
//! implementation is the in-memory [`super::repositories::LocalRepository`];
//! a client for the hosted API would implement the same trait.
//!
//! Repositories are dumb storage: authorization and validation live in
//! the service layer (`super::services`), which is the only recommended
//! entry point for application code.

pub mod error;

pub use error::{RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::VenueId;
use crate::models::{Reservation, Venue, VenueRecord};

/// Storage operations for venues and their reservations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait VenueRepository: Send + Sync {
    /// List up to `cap` venues.
    ///
    /// `with_reservations` selects the record variant: `true` returns
    /// [`VenueRecord::WithReservations`], `false` returns
    /// [`VenueRecord::Bare`]. The cap mirrors the upstream API's
    /// server-side page ceiling; availability search over-fetches up to
    /// it and filters exactly in memory.
    async fn list_venues(
        &self,
        cap: usize,
        with_reservations: bool,
    ) -> RepositoryResult<Vec<VenueRecord>>;

    /// Fetch one venue with its reservation list.
    async fn get_venue(&self, id: VenueId) -> RepositoryResult<VenueRecord>;

    /// Store a new venue.
    async fn insert_venue(&self, venue: Venue) -> RepositoryResult<Venue>;

    /// Replace an existing venue's listing fields, keeping its
    /// reservations.
    async fn update_venue(&self, venue: Venue) -> RepositoryResult<Venue>;

    /// Remove a venue and its reservations.
    async fn delete_venue(&self, id: VenueId) -> RepositoryResult<()>;

    /// Attach a reservation to a venue.
    async fn insert_reservation(
        &self,
        venue_id: VenueId,
        reservation: Reservation,
    ) -> RepositoryResult<Reservation>;

    /// Whether the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
