//! Run reports: the correction prompt and save/load of JSON reports.

use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::bibcheck::RunReport;
use crate::error::{BibcheckError, Result};
use crate::reference::{ReferenceResult, ValidationStatus};

const REPORT_HEADER: &str = "I have analyzed my bibliography using a verification tool. \
Please help me correct my references based on the following report:\n\n";

const SECTION_SEPARATOR: &str = "\n----------------------------------------\n\n";

/// Build a plain-text report meant to be pasted into a chat assistant so it
/// can help fix the bibliography.
///
/// Pending results are skipped and numbering follows the remaining ones.
/// Returns `None` when nothing has been verified yet.
pub fn correction_report(results: &[ReferenceResult]) -> Option<String> {
    let sections: Vec<String> = results
        .iter()
        .filter(|result| !result.is_pending())
        .enumerate()
        .map(|(index, result)| report_section(index + 1, result))
        .collect();

    if sections.is_empty() {
        return None;
    }

    Some(format!("{}{}", REPORT_HEADER, sections.join(SECTION_SEPARATOR)))
}

fn report_section(number: usize, result: &ReferenceResult) -> String {
    let mut section = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(section, "Reference {}: {}", number, result.status);
    let _ = writeln!(section, "Original Input: {}", result.original_text);

    match result.status {
        ValidationStatus::Valid => {
            match &result.corrected_citation {
                Some(citation) => {
                    let _ = writeln!(section, "Corrected Citation: {}", citation);
                }
                None => section.push_str("Status: Correct.\n"),
            }
            let _ = writeln!(section, "Details: {}", result.details);
        }
        ValidationStatus::Invalid => {
            section.push_str(
                "Analysis: This reference appears to be hallucinated or significantly incorrect.\n",
            );
            if !result.alternatives.is_empty() {
                section.push_str("Suggested Real Alternatives:\n");
                for alternative in &result.alternatives {
                    let _ = writeln!(section, "- {}", alternative);
                }
            }
        }
        ValidationStatus::Uncertain | ValidationStatus::Pending => {
            section.push_str("Analysis: Verification was inconclusive.\n");
        }
    }

    section
}

impl RunReport {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The correction prompt for this run's results.
    pub fn correction_report(&self) -> Option<String> {
        correction_report(&self.results)
    }

    /// Save the report to a JSON file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use bibcheck::RunReport;
    /// # fn example(report: &RunReport) -> bibcheck::Result<()> {
    /// report.save("refs.bibcheck.json")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    BibcheckError::Persistence(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = File::create(path).map_err(|e| {
            BibcheckError::Persistence(format!(
                "Failed to create file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self).map_err(|e| {
            BibcheckError::Persistence(format!("Failed to serialize run report: {}", e))
        })?;

        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| {
            BibcheckError::Persistence(format!(
                "Failed to open file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            BibcheckError::Persistence(format!(
                "Failed to parse run report '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(id: &str, text: &str, corrected: Option<&str>) -> ReferenceResult {
        ReferenceResult::resolve(
            id,
            text,
            ValidationStatus::Valid,
            "Found on publisher site.",
            corrected.map(str::to_string),
            vec![],
            None,
        )
    }

    #[test]
    fn test_none_when_all_pending() {
        assert_eq!(correction_report(&[]), None);
        assert_eq!(
            correction_report(&[ReferenceResult::pending("a", "Smith 2020")]),
            None
        );
    }

    #[test]
    fn test_valid_sections() {
        let report = correction_report(&[
            valid("a", "Shor 1994", None),
            valid("b", "Regev 2009", Some("Regev, O. (2009). On lattices.")),
        ])
        .unwrap();

        assert!(report.starts_with(REPORT_HEADER));
        assert!(report.contains(
            "Reference 1: VALID\nOriginal Input: Shor 1994\nStatus: Correct.\nDetails: Found on publisher site.\n"
        ));
        assert!(report.contains("Corrected Citation: Regev, O. (2009). On lattices.\n"));
        assert_eq!(report.matches(SECTION_SEPARATOR).count(), 1);
    }

    #[test]
    fn test_invalid_and_uncertain_sections() {
        let invalid = ReferenceResult::resolve(
            "a",
            "Fake 2031",
            ValidationStatus::Invalid,
            "Not found",
            None,
            vec!["Real A (2001)".to_string(), "Real B (2005)".to_string()],
            None,
        );
        let uncertain = ReferenceResult::uncertain("b", "Obscure 1962", "No record");

        let report = correction_report(&[invalid, uncertain]).unwrap();

        assert!(report.contains(
            "Analysis: This reference appears to be hallucinated or significantly incorrect.\n\
             Suggested Real Alternatives:\n- Real A (2001)\n- Real B (2005)\n"
        ));
        assert!(report.contains("Reference 2: UNCERTAIN\n"));
        assert!(report.ends_with("Analysis: Verification was inconclusive.\n"));
    }

    #[test]
    fn test_numbering_skips_pending() {
        let report = correction_report(&[
            ReferenceResult::pending("a", "Pending 2020"),
            valid("b", "Shor 1994", None),
        ])
        .unwrap();

        assert!(report.contains("Reference 1: VALID"));
        assert!(!report.contains("Pending 2020"));
    }
}
