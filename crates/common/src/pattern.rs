//! Segment patterns used by the ignore lists of `ModelOverride`
//!
//! A pattern is a `.`-separated list of segments such as `getWidget.*` or
//! `*.404.x-trace-id`. A `*` segment matches any single segment; every other
//! segment must match exactly. `*` is never a substring wildcard: `get*.etag`
//! only matches an operation literally named `get*`.

use std::collections::BTreeSet;

/// Check whether `pattern` matches the given subject segments
///
/// The pattern is split into exactly `subject.len()` segments; its final
/// segment keeps any remaining dots so header names containing `.` can still
/// be matched exactly.
///
/// # Examples
/// ```
/// use service_model_generator_common::pattern::matches_segments;
///
/// assert!(matches_segments("*.etag", &["getWidget", "etag"]));
/// assert!(!matches_segments("get*.etag", &["getWidget", "etag"]));
/// ```
pub fn matches_segments(pattern: &str, subject: &[&str]) -> bool {
    if subject.is_empty() {
        return false;
    }

    let segments: Vec<&str> = pattern.splitn(subject.len(), '.').collect();
    if segments.len() != subject.len() {
        return false;
    }

    segments
        .iter()
        .zip(subject)
        .all(|(pattern_segment, subject_segment)| {
            *pattern_segment == "*" || pattern_segment == subject_segment
        })
}

/// Check whether any pattern in the set matches the subject segments
pub fn any_matches(patterns: &BTreeSet<String>, subject: &[&str]) -> bool {
    patterns
        .iter()
        .any(|pattern| matches_segments(pattern, subject))
}
