//! # CNPJ
//!
//! Validation and generation of Brazilian CNPJ identifiers (national registry
//! of legal entities): 12 base digits followed by 2 weighted modulo-11 check
//! digits.
//!
//! ## Overview
//!
//! The [`CnpjService`] capability exposes three operations:
//!
//! - **validate**: is this 14-digit string a correctly checksummed CNPJ?
//! - **generate**: produce a random valid CNPJ
//! - **generate_check_digits**: complete 12 base digits with their check digits
//!
//! Malformed calls (a missing or empty argument, a base of the wrong length)
//! are errors. A candidate of the wrong length is simply not valid.
//!
//! ## Usage
//!
//! ```rust
//! use cnpj::{CnpjService, StandardCnpjService};
//!
//! let service = StandardCnpjService::new();
//!
//! let full = service.generate_check_digits(Some("169218060001")).unwrap();
//! assert_eq!(full, "16921806000152");
//!
//! assert!(service.validate(Some("16921806000152")).unwrap());
//! assert!(!service.validate(Some("16921806000151")).unwrap());
//!
//! let random = service.generate();
//! assert!(service.validate(Some(random.as_str())).unwrap());
//! ```
//!
//! ## Randomness
//!
//! Generation draws from an injected [`DigitSource`]. Use
//! [`ServiceConfig::seed`] or [`StandardCnpjService::with_source`] for
//! reproducible output.
//!
//! ## Re-exports
//!
//! - `cnpj::core` - Pure check-digit arithmetic and typed values

pub mod service;
pub mod source;

// Re-export component crates
pub use cnpj_core as core;

// Re-export main types for convenience
pub use service::{CnpjService, ServiceConfig, StandardCnpjService};
pub use source::{ConfiguredSource, DigitSource, SeededSource, ThreadRngSource};

// Re-export commonly used core types
pub use cnpj_core::{BaseDigits, Cnpj, CnpjError, Failure, Result};
