//! Email address syntax check.
//!
//! The check itself belongs to the `validator` crate; this module only maps
//! its boolean answer onto an error value the lessons can print.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("invalid format")]
    BadFormat,
}

/// Checks that `address` is a syntactically well-formed email address.
pub fn validate_email(address: &str) -> Result<(), EmailError> {
    if validator::validate_email(address) {
        Ok(())
    } else {
        Err(EmailError::BadFormat)
    }
}
