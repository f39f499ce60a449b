//! Roadmap recovery: structure from raw model text.
//!
//! Two stages:
//! 1. Strict parse of the whole text as a JSON object.
//! 2. Strict parse of the span from the first `{` to the last `}`, which strips
//!    prose or code fences the model wrapped around the object.
//!
//! Anything else yields `None` ("no roadmap this time"), never an error.
//!
//! Limitation: the span is not brace-balanced. A stray `}` after the object, or
//! a `{` in leading prose, produces a span that fails to parse (and so `None`).

use serde_json::Value;
use tracing::debug;

use crate::roadmap::models::StructuredRoadmap;

pub fn recover_roadmap(raw: &str) -> Option<StructuredRoadmap> {
    if let Some(roadmap) = parse_roadmap(raw) {
        return Some(roadmap);
    }

    let span = extract_json_span(raw)?;
    let roadmap = parse_roadmap(span);
    if roadmap.is_some() {
        debug!("Roadmap recovered from embedded JSON span");
    }
    roadmap
}

/// Strict parse; the top level must be an object.
fn parse_roadmap(text: &str) -> Option<StructuredRoadmap> {
    let value: Value = serde_json::from_str(text).ok()?;
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value).ok()
}

/// Inclusive span from the first `{` to the last `}`.
fn extract_json_span(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}
