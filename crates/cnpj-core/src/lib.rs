//! # CNPJ Core
//!
//! Pure primitives for Brazilian CNPJ identifiers: check-digit arithmetic,
//! validation and validated newtypes.
//!
//! This crate contains no I/O and no randomness. It is pure computation over
//! digit strings.
//!
//! ## Key Types
//!
//! - [`Cnpj`] - A complete, checksum-valid 14-digit CNPJ
//! - [`BaseDigits`] - The 12 base digits, before check digits
//! - [`CnpjError`] - `NullArgument` / `InvalidArgument` precondition failures
//!
//! ## Check Digits
//!
//! Each check digit is a weighted modulo-11 sum. See [`check_digit`] module.

pub mod check_digit;
pub mod error;
pub mod types;
pub mod validation;

pub use check_digit::{
    append_check_digit, compute_check_digit, generate_check_digits, BASE_LEN, CNPJ_LEN,
    FIRST_WEIGHTS, SECOND_WEIGHTS,
};
pub use error::{require, CnpjError, Result};
pub use types::{BaseDigits, Cnpj};
pub use validation::{validate, validation_failure, Failure};
