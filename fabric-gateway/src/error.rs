//! Error types for the gateway crate.
//!
//! Only request faults and listing failures become HTTP errors. Failed
//! pattern, chat, transcript and scrape invocations are reported in a 200
//! body instead.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// A `--list*` invocation failed; carries the CLI's error text.
    #[error("{0}")]
    Listing(String),

    /// No `system.md` exists for the requested pattern.
    #[error("Pattern '{0}' not found")]
    PatternNotFound(String),

    /// The pattern file exists but could not be read.
    #[error("failed to read pattern '{name}': {source}")]
    PatternRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The request body or query is malformed or missing a required field.
    #[error("{0}")]
    InvalidBody(String),
}

impl GatewayError {
    /// HTTP status this error is reported with.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Listing(_) | GatewayError::PatternRead { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            GatewayError::PatternNotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<JsonRejection> for GatewayError {
    fn from(rejection: JsonRejection) -> Self {
        GatewayError::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for GatewayError {
    fn from(rejection: QueryRejection) -> Self {
        GatewayError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({"detail": self.to_string()}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_error_status_codes_map_correctly() {
        let not_found = GatewayError::PatternNotFound("nope".to_owned());
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let bad_body = GatewayError::InvalidBody("missing field `url`".to_owned());
        assert_eq!(bad_body.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);

        let read = GatewayError::PatternRead {
            name: "p".to_owned(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(read.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn listing_error_returns_500_with_cli_message() {
        let err = GatewayError::Listing("no vendors configured".to_owned());
        assert_eq!(err.to_string(), "no vendors configured");
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "listing failures must map to 500"
        );
    }

    #[test]
    fn pattern_not_found_display_names_pattern() {
        let err = GatewayError::PatternNotFound("summarize".to_owned());
        assert_eq!(err.to_string(), "Pattern 'summarize' not found");
    }
}
