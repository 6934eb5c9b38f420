//! Error types for CNPJ operations.
//!
//! Only malformed calls are errors. A well-formed candidate that fails the
//! checksum is a plain `false` from [`validate`](crate::validate).

use thiserror::Error;

/// Precondition failures raised by CNPJ operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CnpjError {
    /// A required argument was absent.
    #[error("argument `{argument}` is required")]
    NullArgument { argument: &'static str },

    /// An argument was present but unusable.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: &'static str,
    },
}

impl CnpjError {
    pub(crate) const fn null(argument: &'static str) -> Self {
        CnpjError::NullArgument { argument }
    }

    pub(crate) const fn invalid(argument: &'static str, reason: &'static str) -> Self {
        CnpjError::InvalidArgument { argument, reason }
    }

    /// Name of the offending argument.
    pub fn argument(&self) -> &'static str {
        match self {
            CnpjError::NullArgument { argument } | CnpjError::InvalidArgument { argument, .. } => {
                argument
            }
        }
    }
}

/// Unwrap a nullable argument, failing with [`CnpjError::NullArgument`].
pub fn require<'a>(value: Option<&'a str>, argument: &'static str) -> Result<&'a str> {
    value.ok_or(CnpjError::null(argument))
}

/// Result type for CNPJ operations.
pub type Result<T> = std::result::Result<T, CnpjError>;
