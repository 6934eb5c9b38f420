//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the check-digit algorithm so every implementation
//! produces identical results.

use cnpj_core::generate_check_digits;
use serde::Serialize;

/// A golden test vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The 12 base digits.
    pub base: &'static str,
    /// Expected complete CNPJ.
    pub expected: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "reference base",
            base: "169218060001",
            expected: "16921806000152",
        },
        GoldenVector {
            name: "all zeros",
            base: "000000000000",
            expected: "00000000000000",
        },
        GoldenVector {
            name: "first remainder 2",
            base: "000000000001",
            expected: "00000000000108",
        },
        GoldenVector {
            name: "second remainder 10",
            base: "330001670001",
            expected: "33000167000101",
        },
        GoldenVector {
            name: "documentation example",
            base: "112223330001",
            expected: "11222333000181",
        },
        GoldenVector {
            name: "ascending digits",
            base: "012345678901",
            expected: "01234567890107",
        },
        GoldenVector {
            name: "all ones",
            base: "111111111111",
            expected: "11111111111180",
        },
        GoldenVector {
            name: "all nines",
            base: "999999999999",
            expected: "99999999999962",
        },
    ]
}

/// Candidates with the right length but wrong check digits.
pub fn invalid_candidates() -> Vec<&'static str> {
    vec![
        "16921806000151",
        "16921806000162",
        "00000000000001",
        "11222333000180",
        "33000167000110",
    ]
}

/// Verify all golden vectors against the implementation.
///
/// Returns `(name, matches, actual)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let actual = generate_check_digits(v.base).unwrap_or_default();
            (v.name.to_string(), actual == v.expected, actual)
        })
        .collect()
}
