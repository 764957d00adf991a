//! Textual repair of near-JSON model output.
//!
//! Models asked to verify LaTeX references tend to echo raw backslashes
//! (`\bibitem`, `\textbf`), drop quotes around keys and leave trailing
//! commas. Each step below is a pure rewrite; the order is fixed because
//! later steps assume the escapes fixed by earlier ones.

use once_cell::sync::Lazy;
use regex::Regex;

/// Keys of the verdict object that the key-quoting steps recognise.
pub const KNOWN_KEYS: [&str; 5] = [
    "status",
    "correctedCitation",
    "details",
    "alternatives",
    "sourceUrl",
];

/// Characters that may follow a backslash in JSON text (plus `'`, which
/// models use often enough that it is left alone).
const ESCAPABLE: &str = "/\\bfnrtu\"'";

/// Escapes JSON would accept but which, followed by a letter, are far more
/// likely LaTeX commands (`\bibitem`, `\frac`, `\newblock`, `\rm`, `\textit`).
const LATEX_COMMAND_INITIALS: &str = "bfnrt";

static UNQUOTED_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"([{{,]\s*)({})\s*:", KNOWN_KEYS.join("|"))).unwrap()
});

static SINGLE_QUOTED_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"([{{,]\s*)'({})'\s*:", KNOWN_KEYS.join("|"))).unwrap()
});

static BARE_STATUS_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"("status"\s*:\s*)'?(VALID|INVALID|UNCERTAIN|PENDING)\b'?"#).unwrap()
});

static TRAILING_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r",(\s*[}\]])").unwrap());

/// A single rewrite step.
pub type RepairStep = fn(&str) -> String;

/// The repair steps, in application order.
pub const REPAIR_PIPELINE: [(&str, RepairStep); 7] = [
    ("invalid_unicode_escapes", escape_invalid_unicode),
    ("stray_backslashes", escape_stray_backslashes),
    ("latex_commands", escape_latex_commands),
    ("unquoted_keys", quote_bare_keys),
    ("single_quoted_keys", requote_single_quoted_keys),
    ("bare_status_labels", quote_bare_status_labels),
    ("trailing_commas", strip_trailing_commas),
];

/// Run every repair step over `input`, in order.
pub fn repair(input: &str) -> String {
    REPAIR_PIPELINE
        .iter()
        .fold(input.to_string(), |text, (name, step)| {
            let repaired = step(&text);
            if repaired != text {
                tracing::trace!(step = *name, "repair step rewrote response");
            }
            repaired
        })
}

/// `\u` not followed by four hex digits.
pub fn escape_invalid_unicode(input: &str) -> String {
    double_backslashes_where(input, |rest| {
        rest.strip_prefix('u')
            .is_some_and(|digits| !starts_with_hex_quad(digits))
    })
}

/// A backslash followed by anything JSON does not accept as an escape,
/// including a backslash at the very end of the text.
pub fn escape_stray_backslashes(input: &str) -> String {
    double_backslashes_where(input, |rest| match rest.chars().next() {
        Some(next) => !ESCAPABLE.contains(next),
        None => true,
    })
}

/// `\b`, `\f`, `\n`, `\r` or `\t` directly followed by a letter.
pub fn escape_latex_commands(input: &str) -> String {
    double_backslashes_where(input, |rest| {
        let mut chars = rest.chars();
        matches!(
            (chars.next(), chars.next()),
            (Some(initial), Some(following))
                if LATEX_COMMAND_INITIALS.contains(initial) && following.is_ascii_alphabetic()
        )
    })
}

/// `{status: ...}` → `{"status": ...}` for the known keys.
pub fn quote_bare_keys(input: &str) -> String {
    UNQUOTED_KEY
        .replace_all(input, r#"${1}"${2}":"#)
        .into_owned()
}

/// `{'status': ...}` → `{"status": ...}` for the known keys.
pub fn requote_single_quoted_keys(input: &str) -> String {
    SINGLE_QUOTED_KEY
        .replace_all(input, r#"${1}"${2}":"#)
        .into_owned()
}

/// `"status": VALID` → `"status": "VALID"`.
pub fn quote_bare_status_labels(input: &str) -> String {
    BARE_STATUS_LABEL
        .replace_all(input, r#"${1}"${2}""#)
        .into_owned()
}

/// `[1, 2,]` → `[1, 2]`, `{"a": 1,}` → `{"a": 1}`.
pub fn strip_trailing_commas(input: &str) -> String {
    TRAILING_COMMA.replace_all(input, "${1}").into_owned()
}

/// Copy `input`, doubling every backslash for which `should_escape`
/// returns true when given the text right after it.
fn double_backslashes_where(input: &str, should_escape: impl Fn(&str) -> bool) -> String {
    let mut out = String::with_capacity(input.len() + 16);

    for (idx, ch) in input.char_indices() {
        out.push(ch);
        if ch == '\\' && should_escape(&input[idx + 1..]) {
            out.push('\\');
        }
    }

    out
}

fn starts_with_hex_quad(text: &str) -> bool {
    text.len() >= 4 && text.as_bytes()[..4].iter().all(u8::is_ascii_hexdigit)
}
