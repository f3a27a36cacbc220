//! Request bodies accepted by the gateway.
//!
//! Every shape lives for exactly one request. Optional string fields are
//! forwarded verbatim to the CLI when present and non-empty.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Sampling temperature forwarded as `--temperature`.
///
/// Always finite. Rendered with a decimal point so `1` becomes `1.0`, and
/// with a signed two-digit exponent outside `[1e-4, 1e16)` (`1e-05`, `1e+16`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64")]
#[non_exhaustive]
pub struct Temperature(f64);

impl Temperature {
    /// Creates a `Temperature` from a finite value.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidTemperature`] if `value` is NaN or infinite.
    pub fn new(value: f64) -> Result<Self, CoreError> {
        if !value.is_finite() {
            return Err(CoreError::InvalidTemperature { value });
        }
        Ok(Self(value))
    }

    /// Returns the inner `f64` value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Temperature {
    type Error = CoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `Debug` keeps the trailing `.0` on integral values and switches to
        // exponent form at the same thresholds; only the exponent differs.
        let shortest = format!("{:?}", self.0);
        match shortest.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exp),
                };
                write!(f, "{mantissa}e{sign}{digits:0>2}")
            }
            None => f.write_str(&shortest),
        }
    }
}

/// Body of `POST /run_pattern`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternRequest {
    /// Name of the pattern directory to apply.
    pub pattern: String,
    /// Text piped to the CLI's standard input.
    pub input_text: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub temperature: Option<Temperature>,
}

impl PatternRequest {
    /// Creates a request with no optional parameters.
    pub fn new(pattern: impl Into<String>, input_text: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            input_text: input_text.into(),
            model: None,
            vendor: None,
            context: None,
            temperature: None,
        }
    }
}

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Text piped to the CLI's standard input.
    pub message: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    /// Optional pattern; chat has no default.
    #[serde(default)]
    pub pattern: Option<String>,
}

/// Body of `POST /youtube_transcript`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YouTubeRequest {
    pub url: String,
    #[serde(default)]
    pub with_timestamps: bool,
}

/// Body of `POST /scrape_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeRequest {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_rejects_non_finite() {
        assert!(Temperature::new(f64::NAN).is_err());
        assert!(Temperature::new(f64::INFINITY).is_err());
        assert!(Temperature::new(f64::NEG_INFINITY).is_err());
        assert!(Temperature::new(0.0).is_ok());
        assert!(Temperature::new(-3.5).is_ok());
    }

    #[test]
    fn temperature_display_keeps_decimal_point() {
        let whole = Temperature::new(1.0).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(whole.to_string(), "1.0");
        let frac = Temperature::new(0.7).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(frac.to_string(), "0.7");
        let zero = Temperature::new(0.0).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(zero.to_string(), "0.0");
    }

    #[test]
    fn temperature_display_pads_and_signs_exponent() {
        let cases = [
            (1e-5, "1e-05"),
            (-1e-5, "-1e-05"),
            (1e16, "1e+16"),
            (1.5e16, "1.5e+16"),
            (1e-100, "1e-100"),
            (0.0001, "0.0001"),
            (1e15, "1000000000000000.0"),
        ];
        for (value, expected) in cases {
            let t = Temperature::new(value).unwrap_or_else(|e| panic!("{e}"));
            assert_eq!(t.to_string(), expected, "formatting {value:e}");
        }
    }

    #[test]
    fn pattern_request_optional_fields_default_to_none() {
        let req: PatternRequest =
            match serde_json::from_str(r#"{"pattern":"summarize","input_text":"hi"}"#) {
                Ok(r) => r,
                Err(e) => panic!("deserialization failed: {e}"),
            };
        assert_eq!(req, PatternRequest::new("summarize", "hi"));
    }

    #[test]
    fn pattern_request_missing_input_text_is_rejected() {
        let res = serde_json::from_str::<PatternRequest>(r#"{"pattern":"summarize"}"#);
        assert!(res.is_err(), "input_text is required");
    }

    #[test]
    fn pattern_request_null_temperature_is_absent() {
        let req: PatternRequest = match serde_json::from_str(
            r#"{"pattern":"p","input_text":"t","temperature":null}"#,
        ) {
            Ok(r) => r,
            Err(e) => panic!("deserialization failed: {e}"),
        };
        assert!(req.temperature.is_none());
    }

    #[test]
    fn youtube_request_with_timestamps_defaults_to_false() {
        let req: YouTubeRequest = match serde_json::from_str(r#"{"url":"abc"}"#) {
            Ok(r) => r,
            Err(e) => panic!("deserialization failed: {e}"),
        };
        assert!(!req.with_timestamps);
    }

    #[test]
    fn chat_request_ignores_unknown_fields() {
        let req: ChatRequest =
            match serde_json::from_str(r#"{"message":"hello","stream":true}"#) {
                Ok(r) => r,
                Err(e) => panic!("deserialization failed: {e}"),
            };
        assert_eq!(req.message, "hello");
        assert!(req.pattern.is_none());
    }
}
