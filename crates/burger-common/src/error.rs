//! Errors

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Message the backend sends when an access credential has expired
pub const JWT_EXPIRED: &str = "jwt expired";

/// Burger kit Error
#[derive(Debug, Error)]
pub enum Error {
    /// Backend answered with `success: false`
    #[error("{message}")]
    Api {
        /// Http status, when the body came with a non success status
        status: Option<u16>,
        /// Backend message
        message: String,
    },
    /// Access credential rejected as expired
    #[error("Access token expired")]
    TokenExpired,
    /// Http transport error
    #[error("Http error: {1}")]
    HttpError(Option<u16>, String),
    /// Operation needs an authenticated user
    #[error("Not authenticated")]
    NotAuthenticated,
    /// No credential stored for an authenticated call
    #[error("Missing {0} credential")]
    MissingCredential(&'static str),
    /// Order lookup returned nothing
    #[error("Order {0} not found")]
    OrderNotFound(u64),
    /// Url Error
    #[error(transparent)]
    Url(#[from] crate::api_url::Error),
    /// Serde Json error
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
    /// Custom Error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Whether the error means the access credential must be refreshed
    pub fn is_token_expired(&self) -> bool {
        match self {
            Self::TokenExpired => true,
            Self::Api { message, .. } => message == JWT_EXPIRED,
            _ => false,
        }
    }
}

/// Error body returned by the ordering API
///
/// The backend wraps every response in `{ "success": bool, ... }`; failures
/// carry a human readable `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always false for errors
    #[serde(default)]
    pub success: bool,
    /// Human readable description
    #[serde(default)]
    pub message: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ErrorResponse {
    /// Create new [`ErrorResponse`]
    pub fn new(message: String) -> Self {
        Self {
            success: false,
            message,
        }
    }

    /// Error response from json
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;

        Self::from_value(value)
    }

    /// Error response from json Value
    ///
    /// Bodies without a `message` give an empty message, so callers fall
    /// back to their own default.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default();

        Ok(Self::new(message.to_string()))
    }

    /// Convert into an [`Error`] tagged with the http status
    pub fn into_error(self, status: Option<u16>) -> Error {
        if self.message == JWT_EXPIRED {
            return Error::TokenExpired;
        }

        Error::Api {
            status,
            message: self.message,
        }
    }
}

impl From<ErrorResponse> for Error {
    fn from(err: ErrorResponse) -> Error {
        err.into_error(None)
    }
}
