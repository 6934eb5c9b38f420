//! # CNPJ Testkit
//!
//! Testing utilities for CNPJ handling.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known bases with expected CNPJs for cross-platform verification
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Deterministic digit sources and ready-made services
//!
//! ## Golden Vectors
//!
//! ```rust
//! use cnpj_testkit::vectors::all_vectors;
//!
//! for vector in all_vectors() {
//!     let full = cnpj_core::generate_check_digits(vector.base).unwrap();
//!     assert_eq!(full, vector.expected);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use cnpj_testkit::generators::valid_cnpj;
//!
//! proptest! {
//!     #[test]
//!     fn generated_cnpj_validates(value in valid_cnpj()) {
//!         prop_assert_eq!(cnpj_core::validate(value.as_str()), Ok(true));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use cnpj::CnpjService;
//! use cnpj_testkit::fixtures::{FixedDigitSource, ServiceFixture};
//!
//! let fixture = ServiceFixture::new(FixedDigitSource(1));
//! assert_eq!(fixture.service.generate(), "11111111111180");
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{seeded_fixtures, CyclingDigitSource, FixedDigitSource, ServiceFixture};
pub use generators::{
    base_digits, base_string, non_digit_base, tampered_cnpj, valid_cnpj, wrong_length_candidate,
};
pub use vectors::{all_vectors, invalid_candidates, verify_all_vectors, GoldenVector};
