//! Command execution capability.
//!
//! The gateway only ever talks to the CLI through this trait, so tests can
//! substitute a fake that returns canned results without spawning anything.

use async_trait::async_trait;
use fabric_core::InvocationResult;

/// Runs the external CLI once with the given arguments.
///
/// Implementations must be `Send + Sync` to be shared across request tasks.
/// There is no admission control: concurrent calls spawn concurrent
/// processes.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the CLI with `args`, writing `stdin` to its standard input when
    /// given.
    ///
    /// Never fails: spawn errors, non-zero exits and timeouts are all
    /// reported through the returned [`InvocationResult`].
    async fn run(&self, args: &[String], stdin: Option<&str>) -> InvocationResult;
}
