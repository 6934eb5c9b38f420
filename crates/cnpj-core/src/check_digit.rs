//! Weighted modulo-11 check-digit arithmetic.
//!
//! Both CNPJ check digits come from the same routine: multiply each digit by
//! the weight at the same position, sum, reduce modulo 11. A remainder of 0,
//! 1 or 2 yields `0`, anything else yields `11 - remainder`.

use crate::error::{CnpjError, Result};

/// Number of base digits (CNPJ without check digits).
pub const BASE_LEN: usize = 12;

/// Number of digits in a complete CNPJ.
pub const CNPJ_LEN: usize = 14;

/// Weights for the first check digit, aligned with the 12 base digits.
pub const FIRST_WEIGHTS: [u8; BASE_LEN] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second check digit, aligned with base digits plus the first check digit.
pub const SECOND_WEIGHTS: [u8; BASE_LEN + 1] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Compute one check digit over ASCII digits.
///
/// `digits` and `weights` must have the same length and every byte of
/// `digits` must be in `b'0'..=b'9'`. Callers validate before reaching here.
pub fn compute_check_digit(digits: &[u8], weights: &[u8]) -> u8 {
    debug_assert_eq!(digits.len(), weights.len());
    debug_assert!(digits.iter().all(u8::is_ascii_digit));

    let total: u32 = digits
        .iter()
        .zip(weights)
        .map(|(d, w)| u32::from(d - b'0') * u32::from(*w))
        .sum();

    match total % 11 {
        r if r <= 2 => 0,
        r => (11 - r) as u8,
    }
}

/// Compute the check digit for `digits` and return them with it appended.
pub fn append_check_digit(digits: &[u8], weights: &[u8]) -> Vec<u8> {
    let digit = compute_check_digit(digits, weights);
    let mut out = Vec::with_capacity(digits.len() + 1);
    out.extend_from_slice(digits);
    out.push(b'0' + digit);
    out
}

/// Complete 12 validated ASCII base digits into a 14-digit CNPJ.
pub(crate) fn complete(base: &[u8]) -> [u8; CNPJ_LEN] {
    debug_assert_eq!(base.len(), BASE_LEN);

    let mut out = [0u8; CNPJ_LEN];
    out[..BASE_LEN].copy_from_slice(base);
    out[BASE_LEN] = b'0' + compute_check_digit(&out[..BASE_LEN], &FIRST_WEIGHTS);
    out[BASE_LEN + 1] = b'0' + compute_check_digit(&out[..BASE_LEN + 1], &SECOND_WEIGHTS);
    out
}

/// Check that `base` is exactly 12 ASCII digits.
pub(crate) fn check_base(base: &str) -> Result<()> {
    if base.is_empty() {
        return Err(CnpjError::invalid("base", "must not be empty"));
    }
    if base.chars().count() != BASE_LEN {
        return Err(CnpjError::invalid("base", "partial CNPJ must contain 12 digits"));
    }
    if !base.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CnpjError::invalid("base", "partial CNPJ must contain only digits"));
    }
    Ok(())
}

/// Append both check digits to a 12-digit base.
///
/// # Errors
///
/// Returns [`CnpjError::InvalidArgument`] if `base` is empty, is not
/// exactly 12 characters, or contains anything but ASCII digits.
pub fn generate_check_digits(base: &str) -> Result<String> {
    check_base(base)?;
    let full = complete(base.as_bytes());
    Ok(full.iter().map(|&b| char::from(b)).collect())
}
