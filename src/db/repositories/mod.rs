//! Repository implementations module.
//!
//! This module contains implementations of the `VenueRepository` trait:
//! - `local`: In-memory implementation for unit testing and local development
//!
//! A client for the hosted booking API would live here as well, behind its
//! own feature flag.
pub mod local;

pub use local::LocalRepository;
