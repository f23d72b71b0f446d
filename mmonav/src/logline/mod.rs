//! Log line parsing - extracting coordinate reports from game chat logs.
//!
//! Game clients flush their chat logs in bursts, so several location reports
//! can land on one physical line. The parser always prefers the most recent
//! (rightmost) report: it walks marker-delimited blocks from the end of the
//! line, applies the profile's pattern to each block, and only falls back to
//! a plain numeric scan after the last marker when the pattern yields
//! nothing. A pattern that fails to compile is silently ignored in favor of
//! the fallback - a bad profile setting must not break live navigation.

use regex::{Regex, RegexBuilder};

use crate::scrub;

/// Literal phrase preceding a coordinate report, matched case-insensitively.
pub const LOCATION_MARKER: &str = "Your Location is";

/// Default per-profile pattern (EverQuest-style `/loc` output). Captures at
/// most three numbers; four-token reports are handled by the fallback scan.
pub const DEFAULT_LOG_PATTERN: &str =
    r"Your Location is.*?(-?\d+(?:\.\d+)?)\D+?(-?\d+(?:\.\d+)?)(?:\D+?(-?\d+(?:\.\d+)?))?";

/// Minimum captured numbers for a usable report.
const MIN_CAPTURES: usize = 2;

/// Maximum numbers taken by the fallback scan.
const MAX_FALLBACK_NUMBERS: usize = 4;

/// Extract a coordinate token string from one log line.
///
/// Returns the space-joined tokens of the most recent report on the line, or
/// `None` when the line carries no marker or fewer than two numbers after it.
pub fn try_parse_log_line(line: &str, user_pattern: &str) -> Option<String> {
    if line.trim().is_empty() {
        return None;
    }

    let marker_offsets = find_marker_offsets(line);

    if let Some(tokens) = parse_with_pattern(line, user_pattern, &marker_offsets) {
        return Some(tokens);
    }

    parse_fallback(line, &marker_offsets)
}

/// Byte offsets of every case-insensitive marker occurrence, in order.
fn find_marker_offsets(line: &str) -> Vec<usize> {
    let haystack = line.to_ascii_lowercase();
    let needle = LOCATION_MARKER.to_ascii_lowercase();

    let mut offsets = Vec::new();
    let mut start = 0;
    while let Some(pos) = haystack[start..].find(&needle) {
        offsets.push(start + pos);
        start += pos + 1;
    }
    offsets
}

/// Apply the user pattern to each marker block, starting from the last.
fn parse_with_pattern(line: &str, user_pattern: &str, marker_offsets: &[usize]) -> Option<String> {
    let regex = match compile_case_insensitive(user_pattern) {
        Some(regex) => regex,
        None => {
            tracing::debug!(pattern = user_pattern, "log pattern failed to compile");
            return None;
        }
    };

    for (i, &start) in marker_offsets.iter().enumerate().rev() {
        let end = marker_offsets.get(i + 1).copied().unwrap_or(line.len());
        let block = &line[start..end];

        // Several reports can still share a block when the pattern matches
        // repeatedly; keep the last match.
        let Some(captures) = regex.captures_iter(block).last() else {
            continue;
        };

        let values: Vec<&str> = captures
            .iter()
            .skip(1)
            .flatten()
            .map(|m| m.as_str())
            .filter(|s| !s.trim().is_empty())
            .collect();

        if values.len() >= MIN_CAPTURES {
            let tokens = values.join(" ");
            tracing::debug!(%tokens, block_offset = start, "pattern matched location report");
            return Some(tokens);
        }
    }

    None
}

/// Plain numeric scan after the last marker occurrence.
fn parse_fallback(line: &str, marker_offsets: &[usize]) -> Option<String> {
    let &last = marker_offsets.last()?;
    let after_marker = &line[last + LOCATION_MARKER.len()..];

    let numbers: Vec<&str> = scrub::numeric_pattern()
        .find_iter(after_marker)
        .take(MAX_FALLBACK_NUMBERS)
        .map(|m| m.as_str())
        .collect();

    if numbers.len() < MIN_CAPTURES {
        tracing::debug!(line, "no coordinate report found in line");
        return None;
    }

    let tokens = numbers.join(" ");
    tracing::debug!(%tokens, "fallback scan matched location report");
    Some(tokens)
}

fn compile_case_insensitive(pattern: &str) -> Option<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .ok()
}
