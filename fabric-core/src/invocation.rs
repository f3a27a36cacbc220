use serde::{Deserialize, Serialize};

/// Message reported when the CLI does not exit within the wait ceiling.
pub const TIMEOUT_MESSAGE: &str = "Command timed out";

/// Normalised outcome of one CLI invocation.
///
/// `success` is true iff the process exited with status zero before the
/// timeout. `error` is only populated on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResult {
    pub success: bool,
    pub output: String,
    pub error: Option<String>,
}

impl InvocationResult {
    /// A zero-exit invocation with the captured stdout.
    pub fn succeeded(output: impl Into<String>) -> Self {
        Self { success: true, output: output.into(), error: None }
    }

    /// An invocation that never produced output (spawn failure, timeout).
    pub fn failed(error: impl Into<String>) -> Self {
        Self { success: false, output: String::new(), error: Some(error.into()) }
    }

    /// Build a result from a finished process.
    ///
    /// Stderr is only surfaced when the exit status is non-zero.
    #[must_use]
    pub fn from_exit(success: bool, stdout: String, stderr: String) -> Self {
        Self {
            success,
            output: stdout,
            error: if success { None } else { Some(stderr) },
        }
    }

    /// Shorthand for the timeout outcome.
    #[must_use]
    pub fn timed_out() -> Self {
        Self::failed(TIMEOUT_MESSAGE)
    }

    /// The error text, or an empty string when there is none.
    #[must_use]
    pub fn error_text(&self) -> &str {
        self.error.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_exit_hides_stderr_on_success() {
        let res = InvocationResult::from_exit(true, "out".to_owned(), "warning".to_owned());
        assert!(res.success);
        assert_eq!(res.output, "out");
        assert!(res.error.is_none(), "stderr must not leak into a successful result");
    }

    #[test]
    fn from_exit_surfaces_stderr_on_failure() {
        let res = InvocationResult::from_exit(false, "partial".to_owned(), "boom\n".to_owned());
        assert!(!res.success);
        assert_eq!(res.output, "partial");
        assert_eq!(res.error.as_deref(), Some("boom\n"));
    }

    #[test]
    fn timed_out_has_empty_output() {
        let res = InvocationResult::timed_out();
        assert!(!res.success);
        assert!(res.output.is_empty());
        assert_eq!(res.error_text(), "Command timed out");
    }

    #[test]
    fn serialization_emits_null_error() {
        let json = match serde_json::to_string(&InvocationResult::succeeded("x")) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, r#"{"success":true,"output":"x","error":null}"#);
    }
}
