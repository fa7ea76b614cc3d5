//! In-memory repository implementation.
//!
//! Used for unit testing and local development. State lives in a
//! `parking_lot::RwLock`; all operations clone on the way out so callers
//! hold immutable snapshots, never references into the store.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::api::VenueId;
use crate::models::{Reservation, Venue, VenueRecord};

use super::super::repository::{RepositoryError, RepositoryResult, VenueRepository};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredVenue {
    venue: Venue,
    #[serde(default)]
    reservations: Vec<Reservation>,
}

/// In-memory venue store.
#[derive(Default)]
pub struct LocalRepository {
    venues: RwLock<HashMap<VenueId, StoredVenue>>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from a JSON file holding an array of
    /// `{ "venue": ..., "reservations": [...] }` objects.
    pub fn from_json_file(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::Configuration(format!(
                "cannot read seed file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let stored: Vec<StoredVenue> = serde_json::from_str(&raw)
            .map_err(|e| RepositoryError::Configuration(format!("invalid seed file: {}", e)))?;

        let repo = Self::new();
        {
            let mut venues = repo.venues.write();
            for entry in stored {
                venues.insert(entry.venue.id, entry);
            }
        }
        Ok(repo)
    }

    /// Number of venues currently stored.
    pub fn len(&self) -> usize {
        self.venues.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.read().is_empty()
    }
}

#[async_trait]
impl VenueRepository for LocalRepository {
    async fn list_venues(
        &self,
        cap: usize,
        with_reservations: bool,
    ) -> RepositoryResult<Vec<VenueRecord>> {
        let venues = self.venues.read();
        let mut stored: Vec<&StoredVenue> = venues.values().collect();
        // Deterministic order; the hash map itself has none.
        stored.sort_by(|a, b| {
            a.venue
                .name
                .cmp(&b.venue.name)
                .then_with(|| a.venue.id.value().cmp(&b.venue.id.value()))
        });

        Ok(stored
            .into_iter()
            .take(cap)
            .map(|entry| {
                if with_reservations {
                    VenueRecord::WithReservations {
                        venue: entry.venue.clone(),
                        reservations: entry.reservations.clone(),
                    }
                } else {
                    VenueRecord::Bare {
                        venue: entry.venue.clone(),
                    }
                }
            })
            .collect())
    }

    async fn get_venue(&self, id: VenueId) -> RepositoryResult<VenueRecord> {
        let venues = self.venues.read();
        let entry = venues.get(&id).ok_or(RepositoryError::VenueNotFound(id))?;
        Ok(VenueRecord::WithReservations {
            venue: entry.venue.clone(),
            reservations: entry.reservations.clone(),
        })
    }

    async fn insert_venue(&self, venue: Venue) -> RepositoryResult<Venue> {
        let mut venues = self.venues.write();
        let stored = StoredVenue {
            venue: venue.clone(),
            reservations: Vec::new(),
        };
        venues.insert(venue.id, stored);
        Ok(venue)
    }

    async fn update_venue(&self, venue: Venue) -> RepositoryResult<Venue> {
        let mut venues = self.venues.write();
        let entry = venues
            .get_mut(&venue.id)
            .ok_or(RepositoryError::VenueNotFound(venue.id))?;
        entry.venue = venue.clone();
        Ok(venue)
    }

    async fn delete_venue(&self, id: VenueId) -> RepositoryResult<()> {
        let mut venues = self.venues.write();
        venues
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::VenueNotFound(id))
    }

    async fn insert_reservation(
        &self,
        venue_id: VenueId,
        reservation: Reservation,
    ) -> RepositoryResult<Reservation> {
        let mut venues = self.venues.write();
        let entry = venues
            .get_mut(&venue_id)
            .ok_or(RepositoryError::VenueNotFound(venue_id))?;
        entry.reservations.push(reservation);
        Ok(reservation)
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VenueLocation;

    fn venue(name: &str) -> Venue {
        Venue {
            id: VenueId::new(),
            name: name.to_string(),
            description: String::new(),
            max_guests: 2,
            price: 80.0,
            location: VenueLocation::default(),
            manager: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let repo = LocalRepository::new();
        let v = repo.insert_venue(venue("Loft")).await.unwrap();
        let record = repo.get_venue(v.id).await.unwrap();
        assert_eq!(record.venue().name, "Loft");
        assert!(record.reservations().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let repo = LocalRepository::new();
        let err = repo.get_venue(VenueId::new()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::VenueNotFound(_)));
    }

    #[tokio::test]
    async fn test_list_is_sorted_and_capped() {
        let repo = LocalRepository::new();
        for name in ["Charlie", "Alpha", "Bravo"] {
            repo.insert_venue(venue(name)).await.unwrap();
        }
        let records = repo.list_venues(2, false).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].venue().name, "Alpha");
        assert_eq!(records[1].venue().name, "Bravo");
    }

    #[tokio::test]
    async fn test_list_variant_follows_flag() {
        let repo = LocalRepository::new();
        repo.insert_venue(venue("Loft")).await.unwrap();

        let bare = repo.list_venues(10, false).await.unwrap();
        assert!(matches!(bare[0], VenueRecord::Bare { .. }));

        let full = repo.list_venues(10, true).await.unwrap();
        assert!(matches!(full[0], VenueRecord::WithReservations { .. }));
    }

    #[tokio::test]
    async fn test_update_keeps_reservations() {
        let repo = LocalRepository::new();
        let v = repo.insert_venue(venue("Loft")).await.unwrap();
        let reservation = Reservation::from_iso(
            crate::api::ReservationId::new(),
            "2025-02-10",
            "2025-02-12",
            2,
        );
        repo.insert_reservation(v.id, reservation).await.unwrap();

        let mut updated = v.clone();
        updated.name = "Renovated Loft".to_string();
        repo.update_venue(updated).await.unwrap();

        let record = repo.get_venue(v.id).await.unwrap();
        assert_eq!(record.venue().name, "Renovated Loft");
        assert_eq!(record.reservations().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_venue() {
        let repo = LocalRepository::new();
        let v = repo.insert_venue(venue("Loft")).await.unwrap();
        repo.delete_venue(v.id).await.unwrap();
        assert!(repo.is_empty());
        let err = repo.delete_venue(v.id).await.unwrap_err();
        assert!(matches!(err, RepositoryError::VenueNotFound(_)));
    }
}
