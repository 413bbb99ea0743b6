//! Error codes for the sock ordering core
//!
//! Codes are organized by category:
//! - 4xxx: Order errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values so front ends can switch on them without
/// parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 4xxx: Order ====================
    /// No park resolved for the order
    NoParkSelected = 4001,
    /// Selection produced no orderable lines
    NoSubmittableLines = 4002,
    /// A submission is already outstanding
    SubmitInFlight = 4003,

    // ==================== 9xxx: System ====================
    /// Catalog or availability could not be loaded
    LoadFailed = 9001,
    /// Webhook rejected the order or was unreachable
    SubmitFailed = 9002,
    /// Required configuration is missing or malformed
    ConfigInvalid = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// User-facing notice text for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::NoParkSelected | ErrorCode::NoSubmittableLines => "Nothing to submit",
            ErrorCode::SubmitInFlight => "An order is already being submitted",

            ErrorCode::LoadFailed => "Could not load the order form. Please retry.",
            ErrorCode::SubmitFailed => "Submit failed. Your selections were kept.",
            ErrorCode::ConfigInvalid => "Configuration is invalid",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            4001 => Ok(ErrorCode::NoParkSelected),
            4002 => Ok(ErrorCode::NoSubmittableLines),
            4003 => Ok(ErrorCode::SubmitInFlight),

            9001 => Ok(ErrorCode::LoadFailed),
            9002 => Ok(ErrorCode::SubmitFailed),
            9003 => Ok(ErrorCode::ConfigInvalid),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
