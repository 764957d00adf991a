//! Bibcheck: LLM-assisted verification of academic references.
//!
//! Bibcheck takes a pasted bibliography (BibTeX, `\bibitem` lists, numbered
//! lists or loose text), splits it into individual references and asks a
//! search-grounded language model whether each one actually exists.
//!
//! # Core Principles
//!
//! - **Total**: every reference ends `VALID`, `INVALID` or `UNCERTAIN`
//! - **Non-destructive**: the segmented input text is never modified
//! - **Forgiving parsing**: malformed model JSON is repaired before giving up
//!
//! # Example
//!
//! ```no_run
//! use bibcheck::{Bibcheck, GeminiProvider};
//!
//! let bibcheck = Bibcheck::new(GeminiProvider::from_env().unwrap());
//! let report = bibcheck.check("[1] Shor, P. W. (1994). Algorithms for quantum computation.").unwrap();
//!
//! for result in &report.results {
//!     println!("{}: {}", result.status, result.details);
//! }
//! ```

pub mod error;
pub mod input;
pub mod llm;
pub mod reference;
pub mod report;
pub mod response;
pub mod verifier;

mod bibcheck;

pub use crate::bibcheck::{
    Bibcheck, BibcheckConfig, Progress, RunReport, RunState, RunSummary,
    CONNECTION_FAILURE_DETAILS,
};
pub use error::{BibcheckError, Result};
pub use input::{segment, segment_with_format, SegmentFormat, Segmentation, SAMPLE_REFERENCES};
pub use llm::{
    AnthropicProvider, GeminiProvider, LlmConfig, LlmProvider, MockProvider, OllamaProvider,
    OpenAIProvider,
};
pub use reference::{ReferenceResult, ValidationStatus};
pub use report::correction_report;
pub use verifier::{Verifier, TECHNICAL_FAILURE_DETAILS};
