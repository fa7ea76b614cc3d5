//! # Holidaze Booking Core
//!
//! Availability and search engine for an accommodation-booking platform.
//!
//! This crate implements the algorithmic heart of a venue-booking client:
//! half-open date-interval overlap math, the search/filter/paginate
//! pipeline built on it, and month-calendar day classification. Around
//! that pure core it carries the orchestration a real deployment needs: a
//! repository seam standing in for the remote booking API, a service
//! layer enforcing validation and session-based authorization, and an
//! optional axum REST surface.
//!
//! ## Features
//!
//! - **Overlap Engine**: half-open `[check-in, checkout)` interval math
//!   with same-day-turnover semantics
//! - **Search Pipeline**: free-text, guest-capacity and availability
//!   filters composed with client-side pagination
//! - **Calendar Expansion**: per-day booked/today/past classification on
//!   a Monday-first month grid
//! - **Venue Management**: create/edit/delete listings gated on an
//!   explicit session context
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Value objects exchanged with callers (queries, results, ids)
//! - [`models`]: Domain model (venues, reservations, day stamps, sessions)
//! - [`services`]: Pure core logic (overlap, search, calendar)
//! - [`db`]: Repository pattern and orchestration layer
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! The core in [`services`] is synchronous, stateless and total: it never
//! performs I/O, never panics on malformed data, and treats its inputs as
//! immutable snapshots, so concurrent invocations are trivially safe.

pub mod api;

pub mod db;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
