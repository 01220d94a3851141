//! Visibility levels and most-restrictive-wins precedence resolution.
//!
//! A trip carries an owner-set disclosure level, and a viewer may carry a
//! personal override for that trip. The effective level is whichever of the
//! two is more restrictive. The precedence order is encoded in the enum
//! discriminants, so resolution is a single integer comparison.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TripError;

/// A trip's disclosure level, most restrictive first.
///
/// The discriminants carry the total order: a smaller value is more
/// restrictive. The derived `Ord` therefore compares restrictiveness
/// directly, and `a.min(b)` is the more restrictive of two levels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityLevel {
    /// The trip does not appear at all for this viewer.
    OnlyMe = 0,
    /// The viewer sees a busy block with no trip details.
    BusyOnly = 1,
    /// The viewer sees the trip dates only.
    DatesOnly = 2,
    /// The viewer sees destination and dates, but not the trip name.
    LocationOnly = 3,
    /// The viewer sees everything.
    FullDetails = 4,
}

impl VisibilityLevel {
    /// All levels in precedence order, most restrictive first.
    pub const ALL: [VisibilityLevel; 5] = [
        VisibilityLevel::OnlyMe,
        VisibilityLevel::BusyOnly,
        VisibilityLevel::DatesOnly,
        VisibilityLevel::LocationOnly,
        VisibilityLevel::FullDetails,
    ];

    /// The wire/storage spelling of this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            VisibilityLevel::OnlyMe => "only_me",
            VisibilityLevel::BusyOnly => "busy_only",
            VisibilityLevel::DatesOnly => "dates_only",
            VisibilityLevel::LocationOnly => "location_only",
            VisibilityLevel::FullDetails => "full_details",
        }
    }
}

impl fmt::Display for VisibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisibilityLevel {
    type Err = TripError;

    /// Parse the snake_case spelling of a level.
    ///
    /// Unknown strings are an error, never silently mapped to a default
    /// level. Disclosure decisions must not be guessed.
    fn from_str(s: &str) -> Result<Self, TripError> {
        match s {
            "only_me" => Ok(VisibilityLevel::OnlyMe),
            "busy_only" => Ok(VisibilityLevel::BusyOnly),
            "dates_only" => Ok(VisibilityLevel::DatesOnly),
            "location_only" => Ok(VisibilityLevel::LocationOnly),
            "full_details" => Ok(VisibilityLevel::FullDetails),
            other => Err(TripError::InvalidVisibility(other.to_string())),
        }
    }
}

/// Resolve the effective disclosure level for one viewer.
///
/// An absent override leaves the trip's own level in effect. Otherwise the
/// more restrictive of the two wins; equal levels return that level.
/// The result is never more permissive than either input.
pub fn resolve_effective(
    trip: VisibilityLevel,
    personal: Option<VisibilityLevel>,
) -> VisibilityLevel {
    match personal {
        Some(p) => trip.min(p),
        None => trip,
    }
}

/// Whether the trip appears at all for this viewer.
///
/// True iff the effective level is anything other than [`VisibilityLevel::OnlyMe`].
pub fn should_show_trip(trip: VisibilityLevel, personal: Option<VisibilityLevel>) -> bool {
    resolve_effective(trip, personal) != VisibilityLevel::OnlyMe
}
