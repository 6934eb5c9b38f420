//! CNPJ validation: length, digit and checksum checks.

use crate::check_digit::{complete, BASE_LEN, CNPJ_LEN};
use crate::error::{CnpjError, Result};

/// Check whether `candidate` is a valid CNPJ.
///
/// This performs:
/// - Empty check (an error, the call itself is malformed)
/// - Length check (anything but 14 characters is `false`)
/// - Digit check (any non-digit is `false`)
/// - Recomputation of both check digits from the first 12 digits
///
/// # Errors
///
/// Returns [`CnpjError::InvalidArgument`] if `candidate` is empty.
pub fn validate(candidate: &str) -> Result<bool> {
    if candidate.is_empty() {
        return Err(CnpjError::invalid("candidate", "must not be empty"));
    }

    Ok(validation_failure(candidate).is_none())
}

/// Why a non-empty candidate is not a valid CNPJ, or `None` if it is.
pub fn validation_failure(candidate: &str) -> Option<Failure> {
    let len = candidate.chars().count();
    if len != CNPJ_LEN {
        return Some(Failure::Length(len));
    }

    let bytes = candidate.as_bytes();
    if !bytes.iter().all(u8::is_ascii_digit) {
        return Some(Failure::NonDigit);
    }
    if complete(&bytes[..BASE_LEN])[..] != bytes[..] {
        return Some(Failure::CheckDigits);
    }

    None
}

/// Reason a well-formed candidate failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    /// Not 14 characters long (carries the actual length).
    Length(usize),
    /// Contains a character outside `0..=9`.
    NonDigit,
    /// Check digits do not match the base digits.
    CheckDigits,
}

impl Failure {
    /// Short description, used in error messages and logs.
    pub const fn reason(&self) -> &'static str {
        match self {
            Failure::Length(_) => "CNPJ must contain 14 digits",
            Failure::NonDigit => "CNPJ must contain only digits",
            Failure::CheckDigits => "check digits do not match",
        }
    }
}
