//! Core types for the Fabric gateway.
//!
//! Defines the per-request shapes, the invocation result envelope, the
//! argument-vector builders and the static tool catalog. Nothing in this
//! crate performs I/O.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod args;
pub mod error;
pub mod id;
pub mod invocation;
pub mod listing;
pub mod request;
pub mod tools;

pub use args::{chat_args, pattern_args, scrape_args, youtube_args, OptionalFlag};
pub use error::CoreError;
pub use id::InvocationId;
pub use invocation::{InvocationResult, TIMEOUT_MESSAGE};
pub use listing::{split_listing, ListingKind};
pub use request::{ChatRequest, PatternRequest, ScrapeRequest, Temperature, YouTubeRequest};
pub use tools::{ToolDescriptor, TOOL_CATALOG};

/// Pattern names of the three shortcut endpoints.
pub mod shortcuts {
    pub const SUMMARIZE: &str = "summarize";
    pub const EXTRACT_WISDOM: &str = "extract_wisdom";
    pub const ANALYZE_CLAIMS: &str = "analyze_claims";
}
