//! Main Bibcheck struct and public API.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BibcheckError, Result};
use crate::input::{segment_with_format, SegmentFormat};
use crate::llm::LlmProvider;
use crate::reference::{ReferenceResult, ValidationStatus};
use crate::verifier::Verifier;

/// Details for a reference whose verification aborted unexpectedly.
pub const CONNECTION_FAILURE_DETAILS: &str = "Failed to verify due to connection error.";

const STEP_INITIALIZING: &str = "Initializing...";
const STEP_COMPLETED: &str = "Completed";

/// Configuration for a verification run.
#[derive(Debug, Clone, Default)]
pub struct BibcheckConfig {
    /// Maximum references to verify (None = all).
    pub max_references: Option<usize>,
}

/// Position of a run within its reference list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl Progress {
    /// Completion ratio in `0.0..=1.0`.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.current as f64 / self.total as f64
    }
}

/// Snapshot of a run, published to the observer after every step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub is_processing: bool,
    pub current_step: String,
    pub progress: Progress,
    /// Run-level error, e.g. nothing to verify.
    pub error: Option<String>,
}

impl RunState {
    fn starting(total: usize) -> Self {
        Self {
            is_processing: true,
            current_step: STEP_INITIALIZING.to_string(),
            progress: Progress { current: 0, total },
            error: None,
        }
    }

    fn failed(error: &BibcheckError) -> Self {
        Self {
            is_processing: false,
            current_step: String::new(),
            progress: Progress::default(),
            error: Some(error.to_string()),
        }
    }
}

/// Outcome of one verification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// How the input was segmented.
    pub format: SegmentFormat,
    /// One result per verified reference, in input order.
    pub results: Vec<ReferenceResult>,
    pub summary: RunSummary,
}

/// Counts of results by status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub uncertain: usize,
    /// `VALID` results that came back with a corrected citation.
    pub with_corrections: usize,
}

impl RunSummary {
    /// Tally `results`. Pending results count towards `total` only.
    pub fn from_results(results: &[ReferenceResult]) -> Self {
        let mut summary = RunSummary {
            total: results.len(),
            ..Default::default()
        };

        for result in results {
            match result.status {
                ValidationStatus::Valid => summary.valid += 1,
                ValidationStatus::Invalid => summary.invalid += 1,
                ValidationStatus::Uncertain => summary.uncertain += 1,
                ValidationStatus::Pending => {}
            }
            if result.corrected_citation.is_some() {
                summary.with_corrections += 1;
            }
        }

        summary
    }
}

/// The main verification engine.
///
/// Segments pasted text once, then verifies each reference in order with
/// one provider call in flight at a time.
pub struct Bibcheck {
    config: BibcheckConfig,
    verifier: Verifier,
}

impl Bibcheck {
    /// Create a Bibcheck instance with default configuration.
    pub fn new(provider: impl LlmProvider + 'static) -> Self {
        Self::with_config(provider, BibcheckConfig::default())
    }

    /// Create a Bibcheck instance with custom configuration.
    pub fn with_config(provider: impl LlmProvider + 'static, config: BibcheckConfig) -> Self {
        Self::from_shared(Arc::new(provider), config)
    }

    /// Create a Bibcheck instance sharing an existing provider.
    pub fn from_shared(provider: Arc<dyn LlmProvider>, config: BibcheckConfig) -> Self {
        Self {
            config,
            verifier: Verifier::from_shared(provider),
        }
    }

    pub fn config(&self) -> &BibcheckConfig {
        &self.config
    }

    pub fn verifier(&self) -> &Verifier {
        &self.verifier
    }

    /// Verify every reference in `text`.
    pub fn check(&self, text: &str) -> Result<RunReport> {
        self.check_with_progress(text, |_, _| {})
    }

    /// Verify every reference in `text`, calling `observer` with the run
    /// state and the partial result list before and after each reference.
    ///
    /// Fails only when segmentation finds nothing to verify. Individual
    /// verification failures end up as `UNCERTAIN` results.
    pub fn check_with_progress<F>(&self, text: &str, mut observer: F) -> Result<RunReport>
    where
        F: FnMut(&RunState, &[ReferenceResult]),
    {
        let started_at = Utc::now();
        let segmentation = segment_with_format(text);
        let mut entries = segmentation.entries;

        if let Some(max) = self.config.max_references {
            if entries.len() > max {
                tracing::info!(found = entries.len(), max, "limiting references to verify");
                entries.truncate(max);
            }
        }

        if entries.is_empty() {
            let error = BibcheckError::NoReferences;
            tracing::warn!("{}", error);
            observer(&RunState::failed(&error), &[]);
            return Err(error);
        }

        let total = entries.len();
        let run_millis = started_at.timestamp_millis();
        let mut results: Vec<ReferenceResult> = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| ReferenceResult::pending(reference_id(run_millis, index), entry))
            .collect();

        tracing::info!(
            references = total,
            format = %segmentation.format,
            provider = self.verifier.provider().name(),
            "starting verification run"
        );

        let mut state = RunState::starting(total);
        observer(&state, &results);

        for index in 0..total {
            state.current_step = format!("Verifying reference {} of {}...", index + 1, total);
            state.progress.current = index + 1;
            observer(&state, &results);

            let id = results[index].id.clone();
            results[index] = self.verify_isolated(&entries[index], &id);
            observer(&state, &results);
        }

        state.is_processing = false;
        state.current_step = STEP_COMPLETED.to_string();
        observer(&state, &results);

        let summary = RunSummary::from_results(&results);
        tracing::info!(
            valid = summary.valid,
            invalid = summary.invalid,
            uncertain = summary.uncertain,
            "verification run completed"
        );

        Ok(RunReport {
            started_at,
            finished_at: Utc::now(),
            format: segmentation.format,
            results,
            summary,
        })
    }

    /// Verify one reference, turning a panic into an `UNCERTAIN` result so
    /// the rest of the run continues.
    fn verify_isolated(&self, text: &str, id: &str) -> ReferenceResult {
        panic::catch_unwind(AssertUnwindSafe(|| self.verifier.verify(text, id))).unwrap_or_else(
            |_| {
                tracing::error!(reference_id = id, "verification aborted");
                ReferenceResult::uncertain(id, text, CONNECTION_FAILURE_DETAILS)
            },
        )
    }
}

fn reference_id(run_millis: i64, index: usize) -> String {
    format!("ref-{}-{}", run_millis, index)
}
