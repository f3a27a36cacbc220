//! Integration tests for [`FabricCli`] against real processes.
//!
//! `/bin/sh` stands in for the `fabric` binary: the argument vector is
//! `["-c", <script>]`, which exercises spawning, stdin piping, exit status
//! capture and the timeout without needing the real CLI.

#![cfg(unix)]

use std::time::{Duration, Instant};

use fabric_executor::{CliConfig, CommandRunner, FabricCli};

fn sh() -> FabricCli {
    FabricCli::new(CliConfig::new("/bin/sh"))
}

fn script(body: &str) -> Vec<String> {
    vec!["-c".to_owned(), body.to_owned()]
}

#[tokio::test]
async fn zero_exit_captures_stdout_and_hides_stderr() {
    let result = sh()
        .run(&script("printf '# Example\\n'; echo noise >&2"), None)
        .await;

    assert!(result.success, "exit 0 must be success: {result:?}");
    assert_eq!(result.output, "# Example\n");
    assert!(result.error.is_none(), "stderr must be dropped on success");
}

#[tokio::test]
async fn stdin_payload_is_piped_and_closed() {
    // `cat` only terminates once stdin is closed.
    let result = sh().run(&script("cat"), Some("hello from stdin")).await;

    assert!(result.success);
    assert_eq!(result.output, "hello from stdin");
}

#[tokio::test]
async fn no_payload_means_empty_stdin() {
    let result = sh().run(&script("cat; echo done"), None).await;

    assert!(result.success);
    assert_eq!(result.output, "done\n");
}

#[tokio::test]
async fn large_payload_does_not_deadlock() {
    let payload = "x".repeat(1 << 20);
    let runner = FabricCli::new(CliConfig::new("/bin/sh").with_timeout(Duration::from_secs(30)));
    let result = runner.run(&script("cat"), Some(&payload)).await;

    assert!(result.success);
    assert_eq!(result.output.len(), payload.len());
}

#[tokio::test]
async fn non_zero_exit_reports_stderr() {
    let result = sh()
        .run(&script("echo partial; echo 'pattern not found' >&2; exit 3"), None)
        .await;

    assert!(!result.success);
    assert_eq!(result.output, "partial\n");
    assert_eq!(result.error.as_deref(), Some("pattern not found\n"));
}

#[tokio::test]
async fn timeout_yields_failure_envelope() {
    let runner =
        FabricCli::new(CliConfig::new("/bin/sh").with_timeout(Duration::from_millis(200)));

    let start = Instant::now();
    let result = runner.run(&script("sleep 30"), None).await;

    assert!(start.elapsed() < Duration::from_secs(10), "timeout must fire promptly");
    assert!(!result.success);
    assert!(result.output.is_empty());
    assert_eq!(result.error.as_deref(), Some("Command timed out"));
}

#[tokio::test]
async fn missing_binary_yields_failure_envelope() {
    let runner = FabricCli::new(CliConfig::new("/nonexistent/fabric-binary"));
    let result = runner.run(&["--listpatterns".to_owned()], None).await;

    assert!(!result.success);
    assert!(result.output.is_empty());
    let error = result.error.unwrap_or_default();
    assert!(error.contains("/nonexistent/fabric-binary"), "error must name the binary: {error}");
}

#[tokio::test]
async fn arguments_are_not_shell_interpreted() {
    // `$0` is the first argument after the script; it must arrive verbatim.
    let args = vec![
        "-c".to_owned(),
        "printf '%s' \"$0\"".to_owned(),
        "$(rm -rf /); `id`".to_owned(),
    ];
    let result = sh().run(&args, None).await;

    assert!(result.success);
    assert_eq!(result.output, "$(rm -rf /); `id`");
}
