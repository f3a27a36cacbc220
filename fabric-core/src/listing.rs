//! The three `--list*` queries and the parser for their output.

use std::fmt;

/// Which catalog the CLI is asked to enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ListingKind {
    Patterns,
    Models,
    Contexts,
}

impl ListingKind {
    /// The CLI flag selecting this listing.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Patterns => "--listpatterns",
            Self::Models => "--listmodels",
            Self::Contexts => "--listcontexts",
        }
    }

    /// The JSON key the entries are returned under.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Patterns => "patterns",
            Self::Models => "models",
            Self::Contexts => "contexts",
        }
    }

    /// Full argument vector: the listing flag in shell-completion format.
    #[must_use]
    pub fn args(self) -> Vec<String> {
        vec![self.flag().to_owned(), "--shell-complete-list".to_owned()]
    }
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Split CLI output into its non-empty, trimmed lines, preserving order.
///
/// # Complexity
/// O(n) in the length of `output`.
#[must_use]
pub fn split_listing(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
