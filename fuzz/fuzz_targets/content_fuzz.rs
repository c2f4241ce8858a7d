//! Fuzz test for the content loading and validation path
//!
//! Arbitrary bytes are parsed as a table set; whatever parses must pass
//! through validation and construction without panicking.
//!
//! Run with: cargo +nightly fuzz run content_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use patmos_kb::{validate, Knowledge, Tables};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Deserialization may reject the input, but must not panic.
        if let Ok(tables) = serde_json::from_str::<Tables>(text) {
            // Validation and both construction paths are total over any
            // deserializable table set.
            let _ = validate(&tables);
            let _ = Knowledge::new(tables.clone());
            let _ = Knowledge::new_lenient(tables);
        }
    }
});
