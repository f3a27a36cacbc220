//! Fuzz target: parsing `--shell-complete-list` output.
//!
//! Every entry must be non-empty and carry no surrounding whitespace,
//! whatever the CLI prints.

#![no_main]

use fabric_core::split_listing;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let output = String::from_utf8_lossy(data);
    for entry in split_listing(&output) {
        assert!(!entry.is_empty());
        assert_eq!(entry.trim(), entry);
    }
});
