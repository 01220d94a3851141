//! Tests for date-range overlap matching.

use chrono::{DateTime, TimeZone, Utc};
use tripsight_core::overlap::{find_overlapping, LocationRange};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn stay(location: &str, start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> LocationRange {
    LocationRange {
        location: location.to_string(),
        start,
        end,
    }
}

// ── Basic matching ───────────────────────────────────────────────────────────

#[test]
fn single_day_inside_range_matches() {
    let candidates = vec![stay("Lisbon", Some(day(2024, 5, 30)), Some(day(2024, 6, 2)))];

    let result = find_overlapping(Some(day(2024, 6, 1)), Some(day(2024, 6, 1)), &candidates);

    assert_eq!(result, candidates);
}

#[test]
fn disjoint_ranges_do_not_match() {
    let candidates = vec![stay("Porto", Some(day(2024, 6, 10)), Some(day(2024, 6, 12)))];

    let result = find_overlapping(Some(day(2024, 6, 1)), Some(day(2024, 6, 5)), &candidates);

    assert!(result.is_empty());
}

#[test]
fn absent_query_start_yields_empty() {
    let candidates = vec![stay("Lisbon", Some(day(2024, 5, 30)), Some(day(2024, 6, 2)))];

    assert!(find_overlapping(None, None, &candidates).is_empty());
    assert!(find_overlapping(None, Some(day(2024, 6, 1)), &candidates).is_empty());
}

#[test]
fn absent_query_end_collapses_to_single_instant() {
    let candidates = vec![stay("Lisbon", Some(day(2024, 5, 30)), Some(day(2024, 6, 2)))];

    let result = find_overlapping(Some(day(2024, 6, 1)), None, &candidates);

    assert_eq!(result.len(), 1);
}

#[test]
fn empty_candidates_yield_empty() {
    assert!(find_overlapping(Some(day(2024, 6, 1)), None, &[]).is_empty());
}

// ── Incomplete ranges ────────────────────────────────────────────────────────

#[test]
fn missing_start_excludes_candidate() {
    let candidates = vec![stay("TBD", None, Some(day(2024, 6, 1)))];

    let result = find_overlapping(Some(day(2024, 6, 1)), Some(day(2024, 6, 1)), &candidates);

    assert!(result.is_empty());
}

#[test]
fn missing_end_excludes_candidate() {
    let candidates = vec![stay("TBD", Some(day(2024, 6, 1)), None)];

    let result = find_overlapping(Some(day(2024, 6, 1)), Some(day(2024, 6, 1)), &candidates);

    assert!(result.is_empty());
}

// ── Boundaries ───────────────────────────────────────────────────────────────

#[test]
fn endpoint_touching_is_inclusive() {
    // Query ends exactly when the stay begins, and vice versa -- both match.
    let arriving = stay("Madrid", Some(day(2024, 6, 5)), Some(day(2024, 6, 8)));
    let departing = stay("Sevilla", Some(day(2024, 5, 28)), Some(day(2024, 6, 1)));
    let candidates = vec![arriving.clone(), departing.clone()];

    let result = find_overlapping(Some(day(2024, 6, 1)), Some(day(2024, 6, 5)), &candidates);

    assert_eq!(result, vec![arriving, departing]);
}

#[test]
fn timestamp_precision_is_respected() {
    // One second past the stay's end no longer matches.
    let end = Utc.with_ymd_and_hms(2024, 6, 2, 12, 0, 0).unwrap();
    let candidates = vec![stay("Lisbon", Some(day(2024, 5, 30)), Some(end))];

    let just_inside = Utc.with_ymd_and_hms(2024, 6, 2, 12, 0, 0).unwrap();
    let just_outside = Utc.with_ymd_and_hms(2024, 6, 2, 12, 0, 1).unwrap();

    assert_eq!(
        find_overlapping(Some(just_inside), None, &candidates).len(),
        1
    );
    assert!(find_overlapping(Some(just_outside), None, &candidates).is_empty());
}

// ── Ordering ─────────────────────────────────────────────────────────────────

#[test]
fn input_order_is_preserved() {
    let candidates = vec![
        stay("C", Some(day(2024, 6, 3)), Some(day(2024, 6, 4))),
        stay("A", Some(day(2024, 6, 1)), Some(day(2024, 6, 2))),
        stay("B", Some(day(2024, 6, 2)), Some(day(2024, 6, 3))),
    ];

    let result = find_overlapping(Some(day(2024, 6, 1)), Some(day(2024, 6, 4)), &candidates);

    let names: Vec<&str> = result.iter().map(|r| r.location.as_str()).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}
