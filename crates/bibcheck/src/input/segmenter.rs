//! Bibliography segmentation with format sniffing.
//!
//! Pasted bibliographies come as BibTeX databases, `\bibitem` lists,
//! numbered lists or loose text. Each strategy below looks for a
//! progressively weaker structural signal; the first one that yields
//! something is used and the rest are never run.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fragments whose trimmed length is at or below this are noise.
pub const MIN_REFERENCE_LEN: usize = 5;

/// Marker used by LaTeX `thebibliography` environments.
const BIBITEM_MARKER: &str = "\\bibitem";

/// Start of a BibTeX record: `@type{` at the beginning of a line.
static BIBTEX_ENTRY_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^@[A-Za-z0-9_]+\{").unwrap());

/// `[12]` or `3.` at the beginning of a line.
static NUMBERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(?:\[[0-9]+\]|[0-9]+\.)").unwrap());

/// One or more blank lines.
static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Which strategy produced a segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentFormat {
    /// Input was empty or whitespace only.
    Empty,
    /// `@article{...}` style records.
    Bibtex,
    /// `\bibitem` list.
    Bibitem,
    /// `[1]` or `1.` prefixed lines.
    Numbered,
    /// Blank-line separated blocks.
    Paragraphs,
    /// One reference per line.
    Lines,
}

impl fmt::Display for SegmentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SegmentFormat::Empty => "empty",
            SegmentFormat::Bibtex => "bibtex",
            SegmentFormat::Bibitem => "bibitem",
            SegmentFormat::Numbered => "numbered",
            SegmentFormat::Paragraphs => "paragraphs",
            SegmentFormat::Lines => "lines",
        };
        f.write_str(name)
    }
}

/// Segmented references together with the strategy that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segmentation {
    pub format: SegmentFormat,
    pub entries: Vec<String>,
}

/// Split raw pasted text into candidate reference strings, in input order.
///
/// Returns an empty vector for blank input; callers should report that as
/// an error rather than as a successful run over zero references.
pub fn segment(raw: &str) -> Vec<String> {
    segment_with_format(raw).entries
}

/// Like [`segment`], also reporting which strategy matched.
pub fn segment_with_format(raw: &str) -> Segmentation {
    let text = raw.trim();

    if text.is_empty() {
        return Segmentation {
            format: SegmentFormat::Empty,
            entries: Vec::new(),
        };
    }

    let strategies: [(SegmentFormat, fn(&str) -> Option<Vec<String>>); 5] = [
        (SegmentFormat::Bibtex, split_bibtex),
        (SegmentFormat::Bibitem, split_bibitems),
        (SegmentFormat::Numbered, split_numbered),
        (SegmentFormat::Paragraphs, split_paragraphs),
        (SegmentFormat::Lines, split_lines),
    ];

    for (format, strategy) in strategies {
        if let Some(entries) = strategy(text) {
            tracing::debug!(%format, count = entries.len(), "segmented bibliography");
            return Segmentation { format, entries };
        }
    }

    unreachable!("line fallback always produces a segmentation")
}

fn split_bibtex(text: &str) -> Option<Vec<String>> {
    if !(text.contains('{') && text.contains('@')) {
        return None;
    }
    let starts = BIBTEX_ENTRY_START.find_iter(text).map(|m| m.start());
    non_empty(keep_meaningful(split_before(text, starts)))
}

fn split_bibitems(text: &str) -> Option<Vec<String>> {
    if !text.contains(BIBITEM_MARKER) {
        return None;
    }
    let starts = text.match_indices(BIBITEM_MARKER).map(|(pos, _)| pos);
    non_empty(keep_meaningful(split_before(text, starts)))
}

fn split_numbered(text: &str) -> Option<Vec<String>> {
    if !NUMBERED_MARKER.is_match(text) {
        return None;
    }
    let starts = NUMBERED_MARKER.find_iter(text).map(|m| m.start());
    non_empty(keep_meaningful(split_before(text, starts)))
}

fn split_paragraphs(text: &str) -> Option<Vec<String>> {
    let blocks = keep_meaningful(PARAGRAPH_BREAK.split(text));
    (blocks.len() > 1).then_some(blocks)
}

fn split_lines(text: &str) -> Option<Vec<String>> {
    Some(keep_meaningful(text.split('\n')))
}

/// Cut `text` immediately before every boundary offset.
///
/// Offsets must be ascending char boundaries. The piece before the first
/// boundary is kept too; empty pieces are filtered later.
fn split_before(text: &str, boundaries: impl Iterator<Item = usize>) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut last = 0;

    for boundary in boundaries {
        if boundary > last {
            pieces.push(&text[last..boundary]);
            last = boundary;
        }
    }
    pieces.push(&text[last..]);

    pieces
}

fn keep_meaningful<'a>(pieces: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    pieces
        .into_iter()
        .map(str::trim)
        .filter(|piece| piece.chars().count() > MIN_REFERENCE_LEN)
        .map(str::to_string)
        .collect()
}

fn non_empty(entries: Vec<String>) -> Option<Vec<String>> {
    (!entries.is_empty()).then_some(entries)
}
