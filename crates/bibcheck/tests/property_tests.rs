//! Property-based tests for segmentation and response handling.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p bibcheck --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p bibcheck --test property_tests
//! ```

use proptest::prelude::*;

use bibcheck::input::{segment, segment_with_format, SegmentFormat, MIN_REFERENCE_LEN};
use bibcheck::response::{extract_json, parse_response, repair};
use bibcheck::{Bibcheck, MockProvider};

// =============================================================================
// Test Strategies
// =============================================================================

/// A single BibTeX record without nested line-start `@`.
fn bibtex_entry() -> impl Strategy<Value = String> {
    (
        "(article|book|inproceedings|misc|techreport)",
        "[a-z][a-z0-9]{2,12}",
        "[A-Z][a-z]{2,10}( [a-z]{2,10}){0,6}",
        "(19|20)[0-9]{2}",
    )
        .prop_map(|(kind, key, title, year)| {
            format!(
                "@{}{{{},\n  title = {{{}}},\n  year = {{{}}}\n}}",
                kind, key, title, year
            )
        })
}

/// Mostly printable text with newlines and bibliography punctuation.
fn bibliography_like() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 .,:;\\[\\]{}@\\n-]{0,300}",
        prop::collection::vec("[A-Z][a-z]{1,10}, [A-Z]\\. \\([0-9]{4}\\)\\. [a-z ]{5,40}\\.", 0..8)
            .prop_map(|lines| lines.join("\n")),
        any::<String>(),
    ]
}

/// Near-JSON a model might produce.
fn response_like() -> impl Strategy<Value = String> {
    prop_oneof![
        "[{}\\[\\]\":,' a-zA-Z\\\\]{0,120}",
        "\\{(status|'status'|\"status\"): ?(VALID|INVALID|\"UNCERTAIN\"), ?details: ?\"[a-z \\\\]{0,30}\",? ?\\}",
        any::<String>(),
    ]
}

// =============================================================================
// Segmentation Properties
// =============================================================================

proptest! {
    /// Segmentation never panics.
    #[test]
    fn segment_never_panics(text in bibliography_like()) {
        let _ = segment(&text);
    }

    /// No segment is at or below the noise threshold.
    #[test]
    fn segments_exceed_min_length(text in bibliography_like()) {
        for entry in segment(&text) {
            prop_assert!(entry.trim().chars().count() > MIN_REFERENCE_LEN, "entry: {:?}", entry);
        }
    }

    /// Segmentation is deterministic.
    #[test]
    fn segment_is_deterministic(text in bibliography_like()) {
        prop_assert_eq!(segment_with_format(&text), segment_with_format(&text));
    }

    /// Each structured entry segments to itself.
    #[test]
    fn bibtex_entries_are_idempotent(entries in prop::collection::vec(bibtex_entry(), 1..6)) {
        let text = entries.join("\n\n");
        let segmented = segment_with_format(&text);

        prop_assert_eq!(segmented.format, SegmentFormat::Bibtex);
        prop_assert_eq!(&segmented.entries, &entries);

        for entry in &segmented.entries {
            prop_assert_eq!(segment(entry), vec![entry.clone()]);
        }
    }

    /// BibTeX detection wins over numbered markers inside fields.
    #[test]
    fn bibtex_wins_over_numbered_markers(entries in prop::collection::vec(bibtex_entry(), 1..4)) {
        let text = entries
            .iter()
            .map(|entry| entry.replacen("  year", "1. year", 1))
            .collect::<Vec<_>>()
            .join("\n");

        let segmented = segment_with_format(&text);
        prop_assert_eq!(segmented.format, SegmentFormat::Bibtex);
        prop_assert_eq!(segmented.entries.len(), entries.len());
    }
}

// =============================================================================
// Response Properties
// =============================================================================

proptest! {
    /// Extraction always returns a slice of the input.
    #[test]
    fn extract_returns_substring(text in response_like()) {
        let extracted = extract_json(&text);
        prop_assert!(text.contains(extracted));
    }

    /// Repair never panics and parsing is total.
    #[test]
    fn parse_never_panics(text in response_like()) {
        let _ = repair(&text);
        let _ = parse_response(&text);
    }

    /// Every run ends with one terminal result per segment.
    #[test]
    fn run_resolves_every_reference(
        text in bibliography_like(),
        reply in response_like(),
    ) {
        let expected = segment(&text).len();
        let bibcheck = Bibcheck::new(MockProvider::new().with_response(reply));

        match bibcheck.check(&text) {
            Ok(report) => {
                prop_assert_eq!(report.results.len(), expected);
                prop_assert!(report.results.iter().all(|r| !r.is_pending()));
            }
            Err(_) => prop_assert_eq!(expected, 0),
        }
    }
}
