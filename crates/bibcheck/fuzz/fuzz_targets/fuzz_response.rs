//! Fuzz target for model response handling.
//!
//! Extraction, repair and parsing must never panic on arbitrary text.

#![no_main]

use bibcheck::response::{extract_json, parse_response, repair};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = repair(extract_json(text));
        let _ = parse_response(text);
    }
});
