//! HTTP API gateway for the Fabric CLI.
//!
//! Each endpoint builds an argument vector, runs the `fabric` binary once
//! through an injected [`fabric_executor::CommandRunner`], and reshapes its
//! output as JSON. There is no admission control: concurrent requests spawn
//! concurrent processes.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
pub mod service;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use routes::create_router;
pub use service::Gateway;
