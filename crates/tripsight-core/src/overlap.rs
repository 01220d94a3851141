//! Date-range overlap matching for itinerary locations.
//!
//! Given a point-or-range query date, select the locations whose stay ranges
//! intersect it. Comparison is inclusive at both endpoints and at full
//! timestamp precision; no timezone normalization happens here, so callers
//! must supply comparable instants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A location stay with possibly-unset arrival and departure dates.
///
/// A range missing either endpoint is non-matchable and never appears in
/// overlap results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRange {
    pub location: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// Find the candidates whose stay ranges intersect the query interval.
///
/// Two intervals overlap when `query_start <= cand.end && query_end >= cand.start`
/// -- inclusive at both endpoints, so a query ending exactly when a stay
/// begins still matches.
///
/// - An absent `query_start` yields an empty result, not an error.
/// - An absent `query_end` collapses the query to the single instant at
///   `query_start`.
/// - Candidates missing either endpoint are skipped.
///
/// Input order is preserved.
pub fn find_overlapping(
    query_start: Option<DateTime<Utc>>,
    query_end: Option<DateTime<Utc>>,
    candidates: &[LocationRange],
) -> Vec<LocationRange> {
    let Some(qs) = query_start else {
        return Vec::new();
    };
    let qe = query_end.unwrap_or(qs);

    candidates
        .iter()
        .filter(|c| match (c.start, c.end) {
            (Some(cs), Some(ce)) => qs <= ce && qe >= cs,
            _ => false,
        })
        .cloned()
        .collect()
}
