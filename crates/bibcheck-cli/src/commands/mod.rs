//! CLI command implementations.

pub mod report;
pub mod sample;
pub mod segment;
pub mod verify;

use std::io::Read;
use std::path::{Path, PathBuf};

use bibcheck::input::read_bibliography;
use bibcheck::SAMPLE_REFERENCES;

/// Load bibliography text from the sample, a file, or stdin (`-` or no file).
pub(crate) fn read_input(
    file: Option<&Path>,
    sample: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    if sample {
        return Ok(SAMPLE_REFERENCES.to_string());
    }

    match file {
        Some(path) if path != Path::new("-") => Ok(read_bibliography(path)?),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Human-readable name for the input source.
pub(crate) fn input_label(file: Option<&PathBuf>, sample: bool) -> String {
    if sample {
        return "sample bibliography".to_string();
    }
    match file {
        Some(path) if path.as_path() != Path::new("-") => path.display().to_string(),
        _ => "stdin".to_string(),
    }
}

/// First line of a reference, shortened for terminal display.
pub(crate) fn headline(text: &str, max_chars: usize) -> String {
    let first = text.lines().next().unwrap_or_default().trim();
    if first.chars().count() <= max_chars {
        return first.to_string();
    }
    let cut: String = first.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline() {
        assert_eq!(headline("@article{a,\n title = {X}}", 40), "@article{a,");
        assert_eq!(headline("abcdefghij", 8), "abcde...");
        assert_eq!(headline("", 8), "");
    }

    #[test]
    fn test_read_sample() {
        let text = read_input(None, true).unwrap();
        assert!(text.contains("@techreport{nistfips204"));
    }

    #[test]
    fn test_input_label() {
        assert_eq!(input_label(None, false), "stdin");
        assert_eq!(input_label(Some(&PathBuf::from("-")), false), "stdin");
        assert_eq!(input_label(Some(&PathBuf::from("refs.bib")), false), "refs.bib");
        assert_eq!(input_label(None, true), "sample bibliography");
    }
}
