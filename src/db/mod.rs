//! Venue data access module.
//!
//! This module provides abstractions over the venue data source via the
//! Repository pattern, allowing different storage backends to be swapped
//! easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, tests)                     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Orchestration             │
//! │  - Coarse fetch + exact in-memory filtering              │
//! │  - Validation and session-based authorization            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌──────────────────────────────────────────────┐
//!     │             Local Repository                  │
//!     │               (in-memory)                     │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! There is no process-global repository: callers construct one (see
//! [`repositories::LocalRepository`]) and pass it down explicitly,
//! together with the [`crate::models::SessionContext`] for operations
//! that need authorization.

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod config;
pub mod repositories;
pub mod repository;
pub mod services;

// ==================== Service Layer (Recommended for new code) ====================
// Use these high-level functions that work with any repository implementation

pub use services::{
    create_booking, create_venue, delete_venue, get_venue, health_check, search_venues,
    update_venue, venue_calendar,
};

// ==================== Repository Pattern Exports ====================

pub use config::SearchConfig;
pub use repositories::LocalRepository;
pub use repository::{RepositoryError, RepositoryResult, VenueRepository};
