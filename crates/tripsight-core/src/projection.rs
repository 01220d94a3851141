//! Viewer-facing trip projection with privacy-preserving redaction.
//!
//! Takes owner-side trip records, resolves the effective disclosure level per
//! trip (owner setting + optional per-viewer override), and produces views
//! that carry exactly the fields the display policy permits. Hidden trips are
//! dropped entirely -- their existence does not leak through.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::policy::{display_policy, DisplayAs};
use crate::visibility::{resolve_effective, VisibilityLevel};

/// The owner-side trip record a projection is computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripSummary {
    /// Opaque trip identifier.
    pub id: String,
    pub name: String,
    pub destination: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    /// The owner-set disclosure level for non-collaborator viewers.
    pub visibility: VisibilityLevel,
}

/// What one viewer may see of a trip.
///
/// Undisclosed fields are `None`, never empty strings -- a consumer cannot
/// distinguish "redacted" from "present but blank" and must not need to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripView {
    pub id: String,
    pub name: Option<String>,
    pub destination: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub display_as: DisplayAs,
}

/// Project a trip for one viewer.
///
/// Returns `None` when the effective level hides the trip entirely;
/// otherwise a [`TripView`] populated per the display policy.
pub fn project_trip(
    trip: &TripSummary,
    personal: Option<VisibilityLevel>,
) -> Option<TripView> {
    let effective = resolve_effective(trip.visibility, personal);
    if effective == VisibilityLevel::OnlyMe {
        return None;
    }

    let policy = display_policy(effective);
    Some(TripView {
        id: trip.id.clone(),
        name: policy.show_name.then(|| trip.name.clone()),
        destination: policy.show_destination.then(|| trip.destination.clone()),
        start: if policy.show_dates { trip.start } else { None },
        end: if policy.show_dates { trip.end } else { None },
        display_as: policy.display_as,
    })
}

/// Project a list of trips for one viewer, honoring per-trip overrides.
///
/// `overrides` maps trip id to the viewer's personal level for that trip;
/// trips without an entry use the owner's level alone. Hidden trips are
/// dropped and input order is preserved.
pub fn project_trips(
    trips: &[TripSummary],
    overrides: &HashMap<String, VisibilityLevel>,
) -> Vec<TripView> {
    trips
        .iter()
        .filter_map(|trip| project_trip(trip, overrides.get(&trip.id).copied()))
        .collect()
}
