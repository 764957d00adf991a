//! Input handling: splitting pasted bibliographies into references.

mod sample;
mod segmenter;

use std::fs;
use std::path::Path;

use crate::error::{BibcheckError, Result};

pub use sample::SAMPLE_REFERENCES;
pub use segmenter::{
    segment, segment_with_format, SegmentFormat, Segmentation, MIN_REFERENCE_LEN,
};

/// Read a bibliography file as text.
pub fn read_bibliography(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| BibcheckError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
