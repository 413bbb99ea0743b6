//! Error system for the ordering core
//!
//! - [`ErrorCode`]: numeric codes shared with front ends
//! - [`ErrorCategory`]: classification by code range
//! - [`BuildError`]: why an order payload could not be built
//!
//! Build failures are the false branch of submit-eligibility, not faults:
//! front ends keep the submit action disabled and, if pressed anyway, show
//! [`ErrorCode::message`] instead of making a network call.

mod category;
mod codes;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};

use thiserror::Error;

/// Reasons [`crate::order::build`] refuses to produce a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    /// No park resolved, neither explicit nor default
    #[error("no park selected")]
    NoParkSelected,

    /// Every requested line was empty, unavailable or had no case pack
    #[error("no submittable lines")]
    NoSubmittableLines,
}

impl BuildError {
    /// Numeric code for this failure
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NoParkSelected => ErrorCode::NoParkSelected,
            Self::NoSubmittableLines => ErrorCode::NoSubmittableLines,
        }
    }

    /// Notice shown when submit is attempted anyway
    pub fn user_message(&self) -> &'static str {
        self.code().message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_error_codes() {
        assert_eq!(BuildError::NoParkSelected.code(), ErrorCode::NoParkSelected);
        assert_eq!(
            BuildError::NoSubmittableLines.code(),
            ErrorCode::NoSubmittableLines
        );
        assert_eq!(BuildError::NoParkSelected.user_message(), "Nothing to submit");
    }
}
