//! Explicit session context.
//!
//! Authorization state is passed into every operation that needs it rather
//! than read from a process-global store. The token itself is opaque to
//! this crate; the profile fields are whatever the auth layer resolved at
//! login time.

use serde::{Deserialize, Serialize};

/// The logged-in user's profile, as resolved by the auth layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Whether this account may manage venue listings.
    #[serde(default)]
    pub venue_manager: bool,
}

/// Everything an operation needs to decide "may this caller do that".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    /// Opaque bearer token for the upstream API.
    pub token: String,
    pub profile: UserProfile,
}

impl SessionContext {
    pub fn new(token: impl Into<String>, profile: UserProfile) -> Self {
        SessionContext {
            token: token.into(),
            profile,
        }
    }

    pub fn is_venue_manager(&self) -> bool {
        self.profile.venue_manager
    }

    /// Whether this session owns the given venue manager name.
    pub fn owns(&self, manager: Option<&str>) -> bool {
        manager.is_some_and(|m| m == self.profile.name)
    }
}
