//! Display policies -- per-field disclosure derived from an effective level.

use serde::{Deserialize, Serialize};

use crate::visibility::VisibilityLevel;

/// How a trip is rendered for a viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayAs {
    /// Not rendered at all.
    Hidden,
    /// An anonymous busy block.
    Busy,
    /// Dates only.
    Dates,
    /// Destination and dates.
    Location,
    /// Everything.
    Full,
}

/// Which trip fields a viewer may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPolicy {
    pub show_name: bool,
    pub show_destination: bool,
    pub show_dates: bool,
    pub display_as: DisplayAs,
}

/// Map an effective visibility level to its field disclosure policy.
///
/// The match is exhaustive with no wildcard arm: adding a level without
/// deciding its policy is a compile error, not a silent fallthrough to the
/// most permissive policy.
pub fn display_policy(effective: VisibilityLevel) -> DisplayPolicy {
    match effective {
        VisibilityLevel::OnlyMe => DisplayPolicy {
            show_name: false,
            show_destination: false,
            show_dates: false,
            display_as: DisplayAs::Hidden,
        },
        VisibilityLevel::BusyOnly => DisplayPolicy {
            show_name: false,
            show_destination: false,
            show_dates: false,
            display_as: DisplayAs::Busy,
        },
        VisibilityLevel::DatesOnly => DisplayPolicy {
            show_name: false,
            show_destination: false,
            show_dates: true,
            display_as: DisplayAs::Dates,
        },
        VisibilityLevel::LocationOnly => DisplayPolicy {
            show_name: false,
            show_destination: true,
            show_dates: true,
            display_as: DisplayAs::Location,
        },
        VisibilityLevel::FullDetails => DisplayPolicy {
            show_name: true,
            show_destination: true,
            show_dates: true,
            display_as: DisplayAs::Full,
        },
    }
}
