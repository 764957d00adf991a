//! Integration tests for Bibcheck.

use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

use bibcheck::input::read_bibliography;
use bibcheck::{
    correction_report, Bibcheck, BibcheckError, MockProvider, RunReport, SegmentFormat,
    ValidationStatus, SAMPLE_REFERENCES, TECHNICAL_FAILURE_DETAILS,
};

const TWO_BIBTEX_ENTRIES: &str = "@article{shor1994,\n\
                                  title = {Algorithms for quantum computation},\n\
                                  year = {1994}\n\
                                  }\n\
                                  @inproceedings{regev2005,\n\
                                  title = {On lattices, learning with errors},\n\
                                  year = {2005}\n\
                                  }";

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

// =============================================================================
// End-to-end Runs
// =============================================================================

#[test]
fn test_two_entry_bibtex_run() {
    let bibcheck =
        Bibcheck::new(MockProvider::new().with_response(r#"{"status":"VALID","details":"ok"}"#));
    let report = bibcheck.check(TWO_BIBTEX_ENTRIES).expect("Run failed");

    assert_eq!(report.format, SegmentFormat::Bibtex);
    assert_eq!(report.results.len(), 2);
    assert!(report.results[0].original_text.starts_with("@article{shor1994"));
    assert!(report.results[1].original_text.starts_with("@inproceedings{regev2005"));
    for result in &report.results {
        assert_eq!(result.status, ValidationStatus::Valid);
        assert_eq!(result.details, "ok");
    }
    assert_eq!(report.summary.valid, 2);
    assert!(report.finished_at >= report.started_at);
}

#[test]
fn test_always_failing_provider_completes_run() {
    let bibcheck = Bibcheck::new(MockProvider::failing("503 Service Unavailable"));
    let mut last_state = None;

    let report = bibcheck
        .check_with_progress(TWO_BIBTEX_ENTRIES, |state, _| last_state = Some(state.clone()))
        .expect("Run failed");

    assert_eq!(report.results.len(), 2);
    for result in &report.results {
        assert_eq!(result.status, ValidationStatus::Uncertain);
        assert_eq!(result.details, TECHNICAL_FAILURE_DETAILS);
    }

    let state = last_state.unwrap();
    assert!(!state.is_processing);
    assert_eq!(state.current_step, "Completed");
    assert_eq!(state.progress.fraction(), 1.0);
}

#[test]
fn test_results_follow_input_order() {
    let input = "[1] Shor, P. W. Algorithms for quantum computation.\n\
                 [2] Fabricated, A. A paper that does not exist.\n\
                 [3] Someone, B. An obscure workshop note.";
    let provider = MockProvider::new()
        .then_respond(r#"{"status":"VALID","details":"found"}"#)
        .then_respond(r#"{"status":"INVALID","details":"not found","alternatives":["Real (2001)"]}"#)
        .then_respond("no JSON at all");

    let report = Bibcheck::new(provider).check(input).expect("Run failed");

    assert_eq!(report.format, SegmentFormat::Numbered);
    let statuses: Vec<_> = report.results.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![
            ValidationStatus::Valid,
            ValidationStatus::Invalid,
            ValidationStatus::Uncertain
        ]
    );
    assert!(report.results[0].original_text.starts_with("[1]"));
    assert!(report.results[2].original_text.starts_with("[3]"));
    assert_eq!(report.results[1].alternatives, vec!["Real (2001)"]);
    assert!(report.results[2]
        .details
        .starts_with("Could not parse AI analysis. Raw output: no JSON at all"));
}

#[test]
fn test_prompts_carry_reference_text() {
    let provider = std::sync::Arc::new(MockProvider::new());
    let bibcheck = Bibcheck::from_shared(provider.clone(), Default::default());

    bibcheck.check(TWO_BIBTEX_ENTRIES).expect("Run failed");

    let requests = provider.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].task_text.starts_with("Verify this academic reference:\n\n@article{shor1994"));
    assert!(requests[1].task_text.ends_with("You MUST output a JSON object."));
    assert!(requests.iter().all(|r| r.enable_grounded_search));
}

#[test]
fn test_no_references() {
    let bibcheck = Bibcheck::new(MockProvider::new());

    let err = bibcheck.check("  \n\t ").unwrap_err();
    assert!(matches!(err, BibcheckError::NoReferences));
    assert_eq!(err.to_string(), "No valid references found in input.");

    // Only noise fragments.
    assert!(bibcheck.check("a\nbb\nccc").is_err());
}

#[test]
fn test_sample_bibliography_run() {
    let report = Bibcheck::new(MockProvider::new())
        .check(SAMPLE_REFERENCES)
        .expect("Run failed");

    assert_eq!(report.format, SegmentFormat::Bibtex);
    assert_eq!(report.results.len(), report.summary.total);
    assert_eq!(
        report.summary.valid + report.summary.invalid + report.summary.uncertain,
        report.summary.total
    );
    assert!(report.results.iter().all(|r| !r.is_pending()));
}

// =============================================================================
// Reports
// =============================================================================

#[test]
fn test_report_save_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("runs").join("refs.bibcheck.json");

    let report = Bibcheck::new(MockProvider::new().with_response(
        r#"{"status":"VALID","correctedCitation":"Shor, P. W. (1994). Algorithms for quantum computation.","details":"ok"}"#,
    ))
    .check(TWO_BIBTEX_ENTRIES)
    .unwrap();

    report.save(&path).unwrap();
    let loaded = RunReport::load(&path).unwrap();

    assert_eq!(loaded.results, report.results);
    assert_eq!(loaded.summary, report.summary);
    assert_eq!(loaded.summary.with_corrections, 2);
    assert_eq!(loaded.format, SegmentFormat::Bibtex);
}

#[test]
fn test_report_load_rejects_garbage() {
    let file = create_test_file("not a report");
    let err = RunReport::load(file.path()).unwrap_err();
    assert!(matches!(err, BibcheckError::Persistence(_)));
}

#[test]
fn test_report_json_uses_camel_case_results() {
    let report = Bibcheck::new(MockProvider::new())
        .check(TWO_BIBTEX_ENTRIES)
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["format"], "bibtex");
    assert!(json["results"][0].get("originalText").is_some());
    assert_eq!(json["summary"]["total"], 2);
}

#[test]
fn test_correction_report_from_run() {
    let provider = MockProvider::new()
        .then_respond(r#"{"status":"VALID","details":"Matches DBLP."}"#)
        .then_respond(r#"{"status":"INVALID","details":"No record.","alternatives":["Regev, O. (2009). On lattices."]}"#);

    let report = Bibcheck::new(provider).check(TWO_BIBTEX_ENTRIES).unwrap();
    let text = correction_report(&report.results).unwrap();

    assert!(text.starts_with("I have analyzed my bibliography using a verification tool."));
    assert!(text.contains("Reference 1: VALID\n"));
    assert!(text.contains("Status: Correct.\nDetails: Matches DBLP.\n"));
    assert!(text.contains("Reference 2: INVALID\n"));
    assert!(text.contains("- Regev, O. (2009). On lattices.\n"));
    assert_eq!(report.correction_report(), Some(text));
}

#[test]
fn test_read_then_check_file() {
    let file = create_test_file(TWO_BIBTEX_ENTRIES);
    let text = read_bibliography(file.path()).unwrap();

    let report = Bibcheck::new(MockProvider::new()).check(&text).unwrap();
    assert_eq!(report.results.len(), 2);
}
