//! Argument-vector construction for CLI invocations.
//!
//! Optional parameters are described by ordered [`OptionalFlag`] tables so
//! that the exact flags a request can produce are visible in one place and
//! testable without spawning anything.

use crate::request::{ChatRequest, PatternRequest, ScrapeRequest, YouTubeRequest};

/// One row of an optional-flag table: the flag and how to read its value.
///
/// A row contributes `[flag, value]` when `value` returns `Some`.
#[derive(Clone, Copy)]
pub struct OptionalFlag<T> {
    pub flag: &'static str,
    pub value: fn(&T) -> Option<String>,
}

/// Optional flags of `run_pattern`, in emission order.
pub static PATTERN_FLAGS: [OptionalFlag<PatternRequest>; 4] = [
    OptionalFlag { flag: "--model", value: |r| non_empty(r.model.as_deref()) },
    OptionalFlag { flag: "--vendor", value: |r| non_empty(r.vendor.as_deref()) },
    OptionalFlag { flag: "--context", value: |r| non_empty(r.context.as_deref()) },
    OptionalFlag { flag: "--temperature", value: |r| r.temperature.map(|t| t.to_string()) },
];

/// Optional flags of `chat`, in emission order.
pub static CHAT_FLAGS: [OptionalFlag<ChatRequest>; 3] = [
    OptionalFlag { flag: "--model", value: |r| non_empty(r.model.as_deref()) },
    OptionalFlag { flag: "--vendor", value: |r| non_empty(r.vendor.as_deref()) },
    OptionalFlag { flag: "--pattern", value: |r| non_empty(r.pattern.as_deref()) },
];

/// Empty strings count as absent.
fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_owned)
}

/// Append every present row of `table` to `args`, preserving table order.
pub fn append_optional<T>(args: &mut Vec<String>, req: &T, table: &[OptionalFlag<T>]) {
    for row in table {
        if let Some(value) = (row.value)(req) {
            args.push(row.flag.to_owned());
            args.push(value);
        }
    }
}

/// `--pattern <name>` followed by the optional pattern flags.
#[must_use]
pub fn pattern_args(req: &PatternRequest) -> Vec<String> {
    let mut args = vec!["--pattern".to_owned(), req.pattern.clone()];
    append_optional(&mut args, req, &PATTERN_FLAGS);
    args
}

/// Optional chat flags only; chat has no fixed prefix.
#[must_use]
pub fn chat_args(req: &ChatRequest) -> Vec<String> {
    let mut args = Vec::with_capacity(CHAT_FLAGS.len() * 2);
    append_optional(&mut args, req, &CHAT_FLAGS);
    args
}

/// `--youtube <url>` followed by exactly one transcript mode flag.
#[must_use]
pub fn youtube_args(req: &YouTubeRequest) -> Vec<String> {
    let mode = if req.with_timestamps {
        "--transcript-with-timestamps"
    } else {
        "--transcript"
    };
    vec!["--youtube".to_owned(), req.url.clone(), mode.to_owned()]
}

/// `--scrape_url <url>`.
#[must_use]
pub fn scrape_args(req: &ScrapeRequest) -> Vec<String> {
    vec!["--scrape_url".to_owned(), req.url.clone()]
}
