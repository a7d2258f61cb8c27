// Copyright (c) 2026 Unfolded Circle ApS, Markus Zehnder <markus.z@unfoldedcircle.com>
// SPDX-License-Identifier: MPL-2.0

//! Custom application error with conversions from common Rust and 3rd-party errors.

use derive_more::Display;
use log::error;

#[derive(Debug, Display, PartialEq)]
pub enum ServiceError {
    #[display("Internal server error: {_0}")]
    InternalServerError(String),

    #[display("Internal serialization error: {_0}")]
    SerializationError(String),

    #[display("BadRequest: {_0}")]
    BadRequest(String),

    /// A device attribute is present but isn't a decimal-digit string.
    #[display("Malformed value '{value}' for attribute {key}")]
    MalformedAttribute { key: String, value: String },

    #[display("Configuration error: {_0}")]
    ConfigError(String),
}

impl std::error::Error for ServiceError {}

impl From<std::io::Error> for ServiceError {
    fn from(e: std::io::Error) -> Self {
        ServiceError::InternalServerError(format!("{:?}", e))
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        error!("{:?}", e);
        ServiceError::SerializationError(e.to_string())
    }
}

impl From<strum::ParseError> for ServiceError {
    fn from(e: strum::ParseError) -> Self {
        ServiceError::SerializationError(e.to_string())
    }
}

impl From<config::ConfigError> for ServiceError {
    fn from(e: config::ConfigError) -> Self {
        ServiceError::ConfigError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::ServiceError;

    #[test]
    fn config_error_converts_to_config_error_variant() {
        let e = config::ConfigError::Message("invalid winix.total_filter_life".into());

        assert_eq!(
            ServiceError::ConfigError("invalid winix.total_filter_life".into()),
            ServiceError::from(e)
        );
    }

    #[test]
    fn strum_parse_error_converts_to_serialization_error() {
        assert!(matches!(
            ServiceError::from(strum::ParseError::VariantNotFound),
            ServiceError::SerializationError(_)
        ));
    }
}
