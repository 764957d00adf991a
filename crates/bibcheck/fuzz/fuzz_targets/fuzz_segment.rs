//! Fuzz target for bibliography segmentation.
//!
//! Segmentation must never panic, and every entry must be longer than
//! the noise threshold.

#![no_main]

use bibcheck::input::{segment, MIN_REFERENCE_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        for entry in segment(text) {
            assert!(entry.trim().chars().count() > MIN_REFERENCE_LEN);
        }
    }
});
