//! WASM bindings for tripsight-core.
//!
//! Exposes visibility resolution, display policies, overlap matching, and
//! calendar span computation to JavaScript via `wasm-bindgen`. All complex
//! types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p tripsight-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/tripsight-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/tripsight_wasm.wasm
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tripsight_core::{LocationRange, VisibilityLevel};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Input format for location ranges passed from JavaScript.
#[derive(Deserialize)]
struct LocationInput {
    location: String,
    start: Option<String>,
    end: Option<String>,
}

#[derive(Serialize)]
struct LocationDto {
    location: String,
    start: Option<String>,
    end: Option<String>,
}

impl From<&LocationRange> for LocationDto {
    fn from(r: &LocationRange) -> Self {
        Self {
            location: r.location.clone(),
            start: r.start.map(|d| d.to_rfc3339()),
            end: r.end.map(|d| d.to_rfc3339()),
        }
    }
}

#[derive(Serialize)]
struct SpanDto {
    start: String,
    end: String,
    duration_days: i64,
}

#[derive(Serialize)]
struct CalendarDto {
    busy: Vec<SpanDto>,
    free: Vec<SpanDto>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (with timezone offset, e.g., "2024-06-01T00:00:00Z")
/// and naive local time (e.g., "2024-06-01T00:00:00"), which is interpreted as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, JsValue> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

fn parse_level(s: &str) -> Result<VisibilityLevel, JsValue> {
    s.parse()
        .map_err(|e: tripsight_core::TripError| JsValue::from_str(&e.to_string()))
}

/// Convert a JSON array of `{location, start, end}` objects (nullable dates)
/// into `Vec<LocationRange>`.
fn parse_locations_json(json: &str) -> Result<Vec<LocationRange>, JsValue> {
    let inputs: Vec<LocationInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid locations JSON: {}", e)))?;

    inputs
        .into_iter()
        .map(|input| {
            let start = input.start.as_deref().map(parse_datetime).transpose()?;
            let end = input.end.as_deref().map(parse_datetime).transpose()?;
            Ok(LocationRange {
                location: input.location,
                start,
                end,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Resolve the effective visibility level for one viewer.
///
/// Returns the snake_case level string (e.g., "busy_only"). An absent
/// `personal` override leaves the trip's own level in effect.
#[wasm_bindgen(js_name = "resolveVisibility")]
pub fn resolve_visibility(trip: &str, personal: Option<String>) -> Result<String, JsValue> {
    let trip_level = parse_level(trip)?;
    let personal_level = personal.as_deref().map(parse_level).transpose()?;

    let effective = tripsight_core::resolve_effective(trip_level, personal_level);
    Ok(effective.as_str().to_string())
}

/// Whether the trip appears at all for this viewer.
#[wasm_bindgen(js_name = "shouldShowTrip")]
pub fn should_show_trip(trip: &str, personal: Option<String>) -> Result<bool, JsValue> {
    let trip_level = parse_level(trip)?;
    let personal_level = personal.as_deref().map(parse_level).transpose()?;

    Ok(tripsight_core::should_show_trip(trip_level, personal_level))
}

/// Map an effective visibility level to its display policy.
///
/// Returns a JSON string of `{show_name, show_destination, show_dates,
/// display_as}`. Unknown level strings are an error, never a permissive
/// default.
#[wasm_bindgen(js_name = "displayPolicy")]
pub fn display_policy(level: &str) -> Result<String, JsValue> {
    let effective = parse_level(level)?;
    let policy = tripsight_core::display_policy(effective);

    serde_json::to_string(&policy)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Find the locations whose date ranges overlap the query interval.
///
/// `candidates_json` must be a JSON array of `{location, start, end}` objects
/// with ISO 8601 datetime strings or nulls. `end` defaults to `start` for a
/// single-day query. Returns a JSON array preserving input order.
#[wasm_bindgen(js_name = "findOverlapping")]
pub fn find_overlapping(
    candidates_json: &str,
    start: &str,
    end: Option<String>,
) -> Result<String, JsValue> {
    let candidates = parse_locations_json(candidates_json)?;
    let query_start = parse_datetime(start)?;
    let query_end = end.as_deref().map(parse_datetime).transpose()?;

    let matches = tripsight_core::find_overlapping(Some(query_start), query_end, &candidates);

    let dtos: Vec<LocationDto> = matches.iter().map(LocationDto::from).collect();
    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Compute merged busy spans and free gaps within a calendar window.
///
/// `ranges_json` must be a JSON array of `{location, start, end}` objects.
/// Returns a JSON string of `{busy: [...], free: [...]}` where each span is
/// `{start, end, duration_days}`.
#[wasm_bindgen(js_name = "busySpans")]
pub fn busy_spans(ranges_json: &str, from: &str, to: &str) -> Result<String, JsValue> {
    let ranges = parse_locations_json(ranges_json)?;
    let window_start = parse_datetime(from)?;
    let window_end = parse_datetime(to)?;

    let busy = tripsight_core::busy_spans(&ranges, window_start, window_end);
    let free = tripsight_core::free_spans(&ranges, window_start, window_end);

    let dto = CalendarDto {
        busy: busy
            .iter()
            .map(|b| SpanDto {
                start: b.start.to_rfc3339(),
                end: b.end.to_rfc3339(),
                duration_days: b.duration_days,
            })
            .collect(),
        free: free
            .iter()
            .map(|f| SpanDto {
                start: f.start.to_rfc3339(),
                end: f.end.to_rfc3339(),
                duration_days: f.duration_days,
            })
            .collect(),
    };

    serde_json::to_string(&dto)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
