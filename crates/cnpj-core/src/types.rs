//! Strong type definitions for CNPJ values.
//!
//! Both types validate at construction, so holding one is proof the digits
//! are well formed. Deserialization routes through the same constructors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::check_digit::{check_base, complete, BASE_LEN};
use crate::error::{CnpjError, Result};
use crate::validation::validation_failure;

macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// The 12 base digits of a CNPJ, without check digits.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BaseDigits(String);

impl_validating_deserialize!(BaseDigits);

impl BaseDigits {
    /// Create from a string of exactly 12 ASCII digits.
    ///
    /// # Errors
    ///
    /// Returns [`CnpjError::InvalidArgument`] if `value` is empty, has the
    /// wrong length, or contains a non-digit.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let s = value.into();
        check_base(&s)?;
        Ok(Self(s))
    }

    /// Create from 12 digit values.
    ///
    /// Values are reduced modulo 10, so any `u8` maps onto a decimal digit.
    pub fn from_values(values: [u8; BASE_LEN]) -> Self {
        Self(values.iter().map(|v| char::from(b'0' + v % 10)).collect())
    }

    /// Access the digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append both check digits, producing a complete CNPJ.
    pub fn check_digits(&self) -> Cnpj {
        let full = complete(self.0.as_bytes());
        Cnpj(full.iter().map(|&b| char::from(b)).collect())
    }
}

impl fmt::Debug for BaseDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BaseDigits({})", self.0)
    }
}

impl fmt::Display for BaseDigits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BaseDigits {
    type Err = CnpjError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// A complete, checksum-valid CNPJ: 12 base digits plus 2 check digits.
///
/// Stored and displayed as 14 plain digits.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cnpj(String);

impl_validating_deserialize!(Cnpj);

impl Cnpj {
    /// Create a CNPJ from a string, validating length, digits and checksum.
    ///
    /// Unlike [`validate`](crate::validate), every kind of invalidity is an
    /// error here, since the caller asked for a value.
    ///
    /// # Errors
    ///
    /// Returns [`CnpjError::InvalidArgument`] if `value` is not a valid CNPJ.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let s = value.into();
        if s.is_empty() {
            return Err(CnpjError::invalid("cnpj", "must not be empty"));
        }
        if let Some(failure) = validation_failure(&s) {
            return Err(CnpjError::invalid("cnpj", failure.reason()));
        }
        Ok(Self(s))
    }

    /// Access the 14 digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// The 12 base digits.
    pub fn base(&self) -> BaseDigits {
        BaseDigits(self.0[..BASE_LEN].to_string())
    }

    /// The two check digits as values.
    pub fn check_digits(&self) -> (u8, u8) {
        let bytes = self.0.as_bytes();
        (bytes[BASE_LEN] - b'0', bytes[BASE_LEN + 1] - b'0')
    }
}

impl fmt::Debug for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cnpj({})", self.0)
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Cnpj {
    type Err = CnpjError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for Cnpj {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cnpj_accessors() {
        let cnpj: Cnpj = "16921806000152".parse().unwrap();
        assert_eq!(cnpj.as_str(), "16921806000152");
        assert_eq!(cnpj.base().as_str(), "169218060001");
        assert_eq!(cnpj.check_digits(), (5, 2));
        assert_eq!(format!("{}", cnpj), "16921806000152");
        assert_eq!(format!("{:?}", cnpj), "Cnpj(16921806000152)");
    }

    #[test]
    fn test_cnpj_rejects_invalid() {
        assert_eq!(
            Cnpj::new("16921806000151"),
            Err(CnpjError::invalid("cnpj", "check digits do not match"))
        );
        assert_eq!(
            Cnpj::new("16921806000"),
            Err(CnpjError::invalid("cnpj", "CNPJ must contain 14 digits"))
        );
        assert_eq!(
            Cnpj::new("16.921.806/000"),
            Err(CnpjError::invalid("cnpj", "CNPJ must contain only digits"))
        );
        assert!(Cnpj::new("").is_err());
    }

    #[test]
    fn test_base_digits_complete() {
        let base = BaseDigits::new("169218060001").unwrap();
        assert_eq!(base.check_digits().as_str(), "16921806000152");
        assert_eq!(base.check_digits().base(), base);
    }

    #[test]
    fn test_base_digits_from_values() {
        let base = BaseDigits::from_values([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
        assert_eq!(base.as_str(), "012345678901");
        assert_eq!(base.check_digits().as_str(), "01234567890107");
    }

    #[test]
    fn test_base_digits_rejects_invalid() {
        assert!(BaseDigits::new("").is_err());
        assert!(BaseDigits::new("16921806000").is_err());
        assert!(BaseDigits::new("16921806000x").is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let cnpj = Cnpj::new("11222333000181").unwrap();
        let json = serde_json::to_string(&cnpj).unwrap();
        assert_eq!(json, "\"11222333000181\"");

        let back: Cnpj = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cnpj);
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<Cnpj>("\"11222333000182\"").is_err());
        assert!(serde_json::from_str::<BaseDigits>("\"1122233300\"").is_err());
    }
}
