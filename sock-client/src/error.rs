//! Client error types

use reqwest::StatusCode;
use shared::{BuildError, ErrorCode};
use thiserror::Error;

/// Transport-level error
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("Unexpected status {status} from {url}")]
    Status { status: StatusCode, url: String },

    /// Body did not match the expected document
    #[error("Invalid response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Code for errors that mean the same thing wherever they occur
    ///
    /// Transport failures have none on their own; [`FormError`] decides
    /// whether they were a load or a submit failure.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Config(_) => Some(ErrorCode::ConfigInvalid),
            Self::Http(_) | Self::Status { .. } | Self::Decode { .. } => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Form-level error, one variant per thing the user can be told
#[derive(Debug, Error)]
pub enum FormError {
    /// Either document failed to load; the whole form is unusable
    #[error("Load failed: {0}")]
    LoadFailed(#[source] ClientError),

    /// Build refused; no request was made
    #[error("Nothing to submit: {0}")]
    NothingToSubmit(#[from] BuildError),

    /// A submission is already outstanding
    #[error("Submit already in flight")]
    SubmitInFlight,

    /// Webhook rejected the order or was unreachable; selections are kept
    #[error("Submit failed: {0}")]
    SubmitFailed(#[source] ClientError),
}

impl FormError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::LoadFailed(_) => ErrorCode::LoadFailed,
            Self::NothingToSubmit(err) => err.code(),
            Self::SubmitInFlight => ErrorCode::SubmitInFlight,
            Self::SubmitFailed(_) => ErrorCode::SubmitFailed,
        }
    }

    /// Notice text for the user
    pub fn user_message(&self) -> &'static str {
        self.code().message()
    }
}

/// Result type for form operations
pub type FormResult<T> = Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_codes() {
        let config = ClientError::Config("SOCK_CATALOG_URL must be set".into());
        assert_eq!(config.code(), Some(ErrorCode::ConfigInvalid));
        let status = ClientError::Status {
            status: StatusCode::NOT_FOUND,
            url: "https://cdn.example/catalog.json".into(),
        };
        assert_eq!(status.code(), None);
    }

    #[test]
    fn test_form_error_codes() {
        let status = ClientError::Status {
            status: StatusCode::BAD_GATEWAY,
            url: "https://hooks.example/order".into(),
        };
        assert_eq!(FormError::SubmitFailed(status).code(), ErrorCode::SubmitFailed);
        assert_eq!(
            FormError::from(BuildError::NoParkSelected).code(),
            ErrorCode::NoParkSelected
        );
        assert_eq!(
            FormError::NothingToSubmit(BuildError::NoSubmittableLines).user_message(),
            "Nothing to submit"
        );
        assert_eq!(FormError::SubmitInFlight.code(), ErrorCode::SubmitInFlight);
    }
}
