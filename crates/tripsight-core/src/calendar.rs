//! Shared-calendar busy/free span computation.
//!
//! Sorts complete stay ranges by start time, merges overlapping or adjacent
//! busy periods, then computes the gaps between merged periods within a
//! calendar window. Ranges missing either endpoint never contribute.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::overlap::LocationRange;

/// A merged busy span on the shared calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusySpan {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_days: i64,
}

/// A free gap between busy spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeSpan {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_days: i64,
}

/// Merge overlapping or adjacent complete ranges, clipped to the window.
///
/// Returns a sorted, non-overlapping list of (start, end) intervals.
fn merge_ranges(
    ranges: &[LocationRange],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
    // Keep complete ranges that touch the window, clipped to it.
    let mut intervals: Vec<(DateTime<Utc>, DateTime<Utc>)> = ranges
        .iter()
        .filter_map(|r| match (r.start, r.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        })
        .filter(|&(start, end)| start < window_end && end > window_start)
        .map(|(start, end)| (start.max(window_start), end.min(window_end)))
        .collect();

    if intervals.is_empty() {
        return Vec::new();
    }

    // Sort by start time (then by end time for stability).
    intervals.sort_by_key(|&(start, end)| (start, end));

    // Merge overlapping intervals.
    let mut merged: Vec<(DateTime<Utc>, DateTime<Utc>)> = Vec::new();
    for (start, end) in intervals {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                // Overlapping or adjacent -- extend the current interval.
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
}

/// Compute the merged busy spans within a calendar window.
///
/// Stays may overlap -- overlapping busy periods are merged. Returns spans
/// sorted by start time, pairwise disjoint.
pub fn busy_spans(
    ranges: &[LocationRange],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Vec<BusySpan> {
    merge_ranges(ranges, window_start, window_end)
        .into_iter()
        .map(|(start, end)| BusySpan {
            start,
            end,
            duration_days: (end - start).num_days(),
        })
        .collect()
}

/// Compute the free gaps between busy spans within a calendar window.
///
/// The whole window is free when no complete range touches it; the result is
/// empty when busy spans cover the window. Busy and free spans together tile
/// the window exactly.
pub fn free_spans(
    ranges: &[LocationRange],
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Vec<FreeSpan> {
    let merged = merge_ranges(ranges, window_start, window_end);

    let mut free = Vec::new();
    let mut cursor = window_start;

    for (busy_start, busy_end) in &merged {
        if cursor < *busy_start {
            free.push(FreeSpan {
                start: cursor,
                end: *busy_start,
                duration_days: (*busy_start - cursor).num_days(),
            });
        }
        cursor = cursor.max(*busy_end);
    }

    // Trailing free span after the last busy period.
    if cursor < window_end {
        free.push(FreeSpan {
            start: cursor,
            end: window_end,
            duration_days: (window_end - cursor).num_days(),
        });
    }

    free
}
