//! Fuzz test for knowledge-base search
//!
//! Feeds arbitrary byte sequences through the cross-table search to find:
//! - Panics or crashes
//! - Violations of the search contract
//!
//! Run with: cargo +nightly fuzz run search_fuzz -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use patmos_kb::knowledge;

fuzz_target!(|data: &[u8]| {
    // Search takes any valid UTF-8 query and must never panic.
    if let Ok(query) = std::str::from_utf8(data) {
        let kb = knowledge();
        let hits = kb.search(query);

        // Basic invariants that should always hold:
        // 1. Results never exceed the total record count
        assert!(hits.len() <= kb.tables().len(), "more hits than records");

        // 2. The empty query matches every record
        if query.is_empty() {
            assert_eq!(hits.len(), kb.tables().len(), "empty query must match all");
        }

        // 3. Keyed lookup on arbitrary input is total
        let _ = kb.prophecy(query);
        let _ = kb.related_prophecies(query);
    }
});
