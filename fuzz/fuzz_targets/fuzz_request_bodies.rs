//! Fuzz target: JSON request bodies through argument construction.
//!
//! Arbitrary bytes must never panic the deserializers, and any body that
//! parses must yield a well-formed argument vector.

#![no_main]

use fabric_core::{
    chat_args, pattern_args, scrape_args, youtube_args, ChatRequest, PatternRequest,
    ScrapeRequest, YouTubeRequest,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(req) = serde_json::from_slice::<PatternRequest>(data) {
        let args = pattern_args(&req);
        assert_eq!(args[0], "--pattern");
        assert_eq!(args[1], req.pattern);
        assert_eq!(args.len() % 2, 0, "flags and values come in pairs");
    }

    if let Ok(req) = serde_json::from_slice::<ChatRequest>(data) {
        assert_eq!(chat_args(&req).len() % 2, 0, "flags and values come in pairs");
    }

    if let Ok(req) = serde_json::from_slice::<YouTubeRequest>(data) {
        assert_eq!(youtube_args(&req).len(), 3);
    }

    if let Ok(req) = serde_json::from_slice::<ScrapeRequest>(data) {
        assert_eq!(scrape_args(&req)[1], req.url);
    }
});
