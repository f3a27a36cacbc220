//! Subprocess execution for the Fabric gateway.
//!
//! Provides the [`CommandRunner`] capability and [`FabricCli`], which runs
//! the external binary with an optional stdin payload and a bounded wait.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod backend;
pub mod cli;
pub mod config;
pub mod error;

pub use backend::CommandRunner;
pub use cli::FabricCli;
pub use config::{CliConfig, DEFAULT_TIMEOUT};
pub use error::ExecutorError;
