//! Free-text scrubbing into canonical numeric token sequences.
//!
//! Players paste coordinates in whatever shape their game prints them:
//! `"Your location is 10, -20.5, 30"`, `"10 20"`, `"loc: 1,2,3,4"`. Scrubbing
//! reduces such text to a space-separated sequence of up to four signed
//! decimal tokens. Input the scrubber cannot confidently normalize is
//! returned unchanged - ambiguous text must never be misread as coordinates.

use std::sync::OnceLock;

use regex::Regex;

/// Maximum accepted input length, in characters.
///
/// Anything longer is not a coordinate paste and is passed through untouched.
pub const MAX_ENTRY_LENGTH: usize = 100;

/// Maximum numeric tokens considered (x, z, y and an optional facing).
pub const MAX_COMPONENTS: usize = 4;

/// Signed decimal number pattern shared by the scrubber and the log-line
/// fallback scan.
pub(crate) fn numeric_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"-?\d+(\.\d+)?").expect("numeric pattern is valid"))
}

/// Normalize `value` into up to four space-joined numeric tokens.
///
/// Returns the input unchanged when it is empty or whitespace, longer than
/// [`MAX_ENTRY_LENGTH`] characters, spans multiple lines, contains no numbers
/// at all, or when any text between two adjacent numbers is something other
/// than whitespace and commas (fail-open).
///
/// The function is idempotent: scrubbing already-scrubbed text yields the
/// same tokens.
pub fn scrub_entry(value: &str) -> String {
    if value.trim().is_empty() {
        return value.to_string();
    }
    if value.chars().count() > MAX_ENTRY_LENGTH {
        tracing::trace!(len = value.len(), "entry too long to scrub");
        return value.to_string();
    }
    // Multi-line text is never a single coordinate report.
    if value.contains('\n') || value.contains('\r') {
        return value.to_string();
    }

    let matches: Vec<_> = numeric_pattern()
        .find_iter(value)
        .take(MAX_COMPONENTS)
        .collect();
    if matches.is_empty() {
        return value.to_string();
    }

    // Adjacent numbers may only be separated by whitespace and/or commas.
    // Anything else (including no separator at all) means the numbers are
    // embedded in text we don't understand, so leave the input alone.
    for pair in matches.windows(2) {
        let gap = &value[pair[0].end()..pair[1].start()];
        if gap.is_empty() || gap.chars().any(|c| !c.is_whitespace() && c != ',') {
            tracing::trace!(gap, "ambiguous separator, returning input unscrubbed");
            return value.to_string();
        }
    }

    matches
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_scrubs_comma_separated_location_line() {
        assert_eq!(scrub_entry("Your location is 0, 0, 100"), "0 0 100");
    }

    #[test]
    fn test_scrubs_mixed_casing() {
        assert_eq!(scrub_entry("YOUR LOCATION IS 10, 20, 30"), "10 20 30");
    }

    #[test]
    fn test_scrubs_negative_and_decimal_numbers() {
        assert_eq!(scrub_entry("-10, 20.5, -30"), "-10 20.5 -30");
    }

    #[test]
    fn test_keeps_at_most_four_components() {
        assert_eq!(scrub_entry("1 2 3 4"), "1 2 3 4");
        // A fifth number makes the gap between #4 and #5 irrelevant - only
        // the first four matches are considered.
        assert_eq!(scrub_entry("1 2 3 4 5"), "1 2 3 4");
    }

    #[test]
    fn test_passes_through_empty_and_whitespace() {
        assert_eq!(scrub_entry(""), "");
        assert_eq!(scrub_entry("   "), "   ");
    }

    #[test]
    fn test_passes_through_overlong_input() {
        let long = "1 ".repeat(60);
        assert_eq!(scrub_entry(&long), long, "over-length input must not be altered");
    }

    #[test]
    fn test_passes_through_multiline_input() {
        let input = "10 20\n30 40";
        assert_eq!(scrub_entry(input), input);
    }

    #[test]
    fn test_passes_through_text_without_numbers() {
        assert_eq!(scrub_entry("north of the bridge"), "north of the bridge");
    }

    #[test]
    fn test_fails_open_on_letter_between_numbers() {
        let input = "10 x 20";
        assert_eq!(scrub_entry(input), input, "letters between numbers are ambiguous");
    }

    #[test]
    fn test_fails_open_on_adjacent_numbers_without_separator() {
        // "1-2" matches "1" then "-2" with an empty gap between them.
        assert_eq!(scrub_entry("1-2"), "1-2");
    }

    #[test]
    fn test_leading_and_trailing_text_is_fine() {
        // Gap validation only applies between matched numbers.
        assert_eq!(scrub_entry("loc: 1, 2 (approx)"), "1 2");
    }

    #[test]
    fn test_idempotent_on_scrubbed_output() {
        let once = scrub_entry("Your location is 10, 20, 30");
        assert_eq!(scrub_entry(&once), once);
    }

    proptest! {
        /// Scrubbing is idempotent for every input the first pass normalizes.
        #[test]
        fn prop_scrub_is_idempotent(input in ".{0,120}") {
            let once = scrub_entry(&input);
            let twice = scrub_entry(&once);
            prop_assert_eq!(once, twice);
        }
    }
}
