//! # tripsight-core
//!
//! Privacy-first trip visibility resolution and calendar overlap matching
//! for shared trip planning.
//!
//! A trip carries an owner-set disclosure level; each viewer may carry a
//! personal override. This crate resolves the two under a most-restrictive-
//! wins rule, derives the per-field display policy, matches query dates
//! against itinerary location ranges, and projects trips onto a shared
//! calendar as merged busy/free spans.
//!
//! ## Quick start
//!
//! ```rust
//! use tripsight_core::{display_policy, resolve_effective, VisibilityLevel};
//!
//! // The viewer's override can only tighten disclosure, never loosen it.
//! let effective = resolve_effective(
//!     VisibilityLevel::FullDetails,
//!     Some(VisibilityLevel::BusyOnly),
//! );
//! assert_eq!(effective, VisibilityLevel::BusyOnly);
//! assert!(!display_policy(effective).show_destination);
//! ```
//!
//! ## Modules
//!
//! - [`visibility`] — ordered disclosure levels + most-restrictive-wins resolution
//! - [`policy`] — effective level → per-field display policy
//! - [`overlap`] — query dates vs. itinerary location ranges
//! - [`projection`] — redacted, viewer-facing trip views
//! - [`calendar`] — merged busy spans and free gaps for the shared calendar
//! - [`error`] — error types

pub mod calendar;
pub mod error;
pub mod overlap;
pub mod policy;
pub mod projection;
pub mod visibility;

pub use calendar::{busy_spans, free_spans, BusySpan, FreeSpan};
pub use error::TripError;
pub use overlap::{find_overlapping, LocationRange};
pub use policy::{display_policy, DisplayAs, DisplayPolicy};
pub use projection::{project_trip, project_trips, TripSummary, TripView};
pub use visibility::{resolve_effective, should_show_trip, VisibilityLevel};
