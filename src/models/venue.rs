//! Venue and reservation domain types.
//!
//! Venues and their reservations are owned by the remote booking API; this
//! crate only ever reads them. The one wrinkle worth modeling explicitly is
//! that the upstream list endpoint can return venues either with or without
//! their booking lists, depending on how they were fetched. Rather than
//! sniffing for an optional array at runtime, the fetch boundary tags each
//! record as [`VenueRecord::Bare`] or [`VenueRecord::WithReservations`].

use serde::{Deserialize, Serialize};

use super::day::DayStamp;
use crate::api::{ReservationId, VenueId};

/// Location fields attached to a venue. All optional upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueLocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// A lodging venue as fetched from the booking API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub max_guests: u32,
    /// Nightly price in the API's currency unit.
    pub price: f64,
    #[serde(default)]
    pub location: VenueLocation,
    /// Profile name of the managing user, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<String>,
}

/// An existing booking on a venue, reduced to the fields the availability
/// math needs. Half-open: `date_from` is the check-in day, `date_to` the
/// checkout day, which is not occupied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: ReservationId,
    pub date_from: DayStamp,
    pub date_to: DayStamp,
    pub guests: u32,
}

impl Reservation {
    /// Build a reservation from upstream ISO date strings, day-normalizing
    /// both bounds. Unparseable bounds become invalid stamps; the overlap
    /// predicate treats those as never occupying any day.
    pub fn from_iso(id: ReservationId, date_from: &str, date_to: &str, guests: u32) -> Self {
        Reservation {
            id,
            date_from: DayStamp::parse(date_from),
            date_to: DayStamp::parse(date_to),
            guests,
        }
    }
}

/// A venue as it arrives from the fetch boundary, tagged by whether the
/// booking list was included in the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum VenueRecord {
    /// Listing fetched without bookings.
    Bare { venue: Venue },
    /// Listing fetched with its booking list.
    WithReservations {
        venue: Venue,
        reservations: Vec<Reservation>,
    },
}

impl VenueRecord {
    pub fn venue(&self) -> &Venue {
        match self {
            VenueRecord::Bare { venue } => venue,
            VenueRecord::WithReservations { venue, .. } => venue,
        }
    }

    /// The reservation list, empty for a bare record.
    pub fn reservations(&self) -> &[Reservation] {
        match self {
            VenueRecord::Bare { .. } => &[],
            VenueRecord::WithReservations { reservations, .. } => reservations,
        }
    }

    pub fn into_venue(self) -> Venue {
        match self {
            VenueRecord::Bare { venue } => venue,
            VenueRecord::WithReservations { venue, .. } => venue,
        }
    }
}

/// Fields a venue manager supplies when creating or editing a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub max_guests: u32,
    pub price: f64,
    #[serde(default)]
    pub location: VenueLocation,
}
