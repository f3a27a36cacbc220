//! The gateway proper: one method per operation, each building an argument
//! vector and handing it to the injected [`CommandRunner`].

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use fabric_core::{
    chat_args, pattern_args, scrape_args, split_listing, youtube_args, ChatRequest,
    InvocationResult, ListingKind, PatternRequest, ScrapeRequest, YouTubeRequest,
};
use fabric_executor::CommandRunner;

use crate::error::GatewayError;

/// File holding a pattern's prompt inside its directory.
const PATTERN_FILE: &str = "system.md";

/// Immutable for the process lifetime; shared across requests via `Arc`.
pub struct Gateway {
    runner: Arc<dyn CommandRunner>,
    patterns_dir: PathBuf,
}

impl Gateway {
    /// Create a gateway that runs the CLI through `runner` and reads pattern
    /// files from `<config_dir>/patterns`.
    pub fn new(runner: Arc<dyn CommandRunner>, config_dir: impl AsRef<Path>) -> Self {
        Self {
            runner,
            patterns_dir: config_dir.as_ref().join("patterns"),
        }
    }

    /// Enumerate patterns, models or contexts.
    ///
    /// # Errors
    /// Returns [`GatewayError::Listing`] if the CLI fails.
    pub async fn list(&self, kind: ListingKind) -> Result<Vec<String>, GatewayError> {
        let result = self.runner.run(&kind.args(), None).await;
        if !result.success {
            tracing::warn!(%kind, error = result.error_text(), "listing failed");
            return Err(GatewayError::Listing(result.error.unwrap_or_default()));
        }
        Ok(split_listing(&result.output))
    }

    /// Apply a pattern to `req.input_text`, which is piped to stdin.
    pub async fn run_pattern(&self, req: &PatternRequest) -> InvocationResult {
        self.runner.run(&pattern_args(req), Some(&req.input_text)).await
    }

    /// Fetch a YouTube transcript, with or without timestamps.
    pub async fn youtube_transcript(&self, req: &YouTubeRequest) -> InvocationResult {
        self.runner.run(&youtube_args(req), None).await
    }

    /// Scrape a web page to markdown.
    pub async fn scrape_url(&self, req: &ScrapeRequest) -> InvocationResult {
        self.runner.run(&scrape_args(req), None).await
    }

    /// Send `req.message` to the model, optionally through a pattern.
    pub async fn chat(&self, req: &ChatRequest) -> InvocationResult {
        self.runner.run(&chat_args(req), Some(&req.message)).await
    }

    /// Read `<patterns_dir>/<name>/system.md` verbatim.
    ///
    /// Names that are not a single plain path component are reported as
    /// not found without touching the filesystem.
    ///
    /// # Errors
    /// Returns [`GatewayError::PatternNotFound`] if the file does not exist
    /// and [`GatewayError::PatternRead`] for any other read failure.
    pub async fn pattern_content(&self, name: &str) -> Result<String, GatewayError> {
        if !is_plain_component(name) {
            return Err(GatewayError::PatternNotFound(name.to_owned()));
        }
        let path = self.patterns_dir.join(name).join(PATTERN_FILE);

        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(GatewayError::PatternNotFound(name.to_owned()))
            }
            Err(source) => {
                tracing::warn!(path = %path.display(), error = %source, "pattern read failed");
                Err(GatewayError::PatternRead { name: name.to_owned(), source })
            }
        }
    }
}

fn is_plain_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_component_accepts_simple_names() {
        assert!(is_plain_component("summarize"));
        assert!(is_plain_component("extract_wisdom"));
        assert!(is_plain_component("create_5_sentence_summary"));
    }

    #[test]
    fn plain_component_rejects_traversal() {
        assert!(!is_plain_component(""));
        assert!(!is_plain_component("."));
        assert!(!is_plain_component(".."));
        assert!(!is_plain_component("../secrets"));
        assert!(!is_plain_component("a/b"));
        assert!(!is_plain_component("/etc"));
    }
}
