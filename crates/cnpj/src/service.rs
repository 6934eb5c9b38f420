//! The CNPJ service: validation and generation behind one capability.
//!
//! [`CnpjService`] is the seam callers depend on. [`StandardCnpjService`]
//! implements it on top of `cnpj-core` and an injected [`DigitSource`].

use cnpj_core::{require, BaseDigits, Result, BASE_LEN};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::source::{ConfiguredSource, DigitSource, SeededSource, ThreadRngSource};

/// Configuration for the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Seed for reproducible generation. `None` draws from the thread RNG.
    pub seed: Option<u64>,
}

/// Validate, generate and complete CNPJ values.
///
/// Arguments are nullable: `None` fails with `NullArgument`. A present but
/// unusable argument fails with `InvalidArgument`. A well-formed candidate
/// that is simply not a valid CNPJ yields `Ok(false)`.
pub trait CnpjService {
    /// Check whether `candidate` is a valid 14-digit CNPJ.
    fn validate(&self, candidate: Option<&str>) -> Result<bool>;

    /// Generate a random valid CNPJ.
    fn generate(&self) -> String;

    /// Append both check digits to a 12-digit base.
    fn generate_check_digits(&self, base: Option<&str>) -> Result<String>;
}

/// The default service.
///
/// Stateless apart from its digit source, so it can be shared across threads
/// whenever the source can.
#[derive(Debug, Clone, Default)]
pub struct StandardCnpjService<S = ThreadRngSource> {
    source: S,
}

impl StandardCnpjService<ThreadRngSource> {
    /// Create a service drawing from the thread RNG.
    pub fn new() -> Self {
        Self {
            source: ThreadRngSource,
        }
    }
}

impl StandardCnpjService<ConfiguredSource> {
    /// Create a service from configuration.
    pub fn from_config(config: &ServiceConfig) -> Self {
        let source = match config.seed {
            Some(seed) => {
                debug!(seed, "cnpj service using seeded digit source");
                ConfiguredSource::Seeded(SeededSource::new(seed))
            }
            None => ConfiguredSource::Thread(ThreadRngSource),
        };
        Self { source }
    }
}

impl<S: DigitSource> StandardCnpjService<S> {
    /// Create a service drawing from `source`.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Get the digit source.
    pub fn source(&self) -> &S {
        &self.source
    }

    fn draw_base(&self) -> BaseDigits {
        let mut values = [0u8; BASE_LEN];
        for v in values.iter_mut() {
            let digit = self.source.next_digit();
            debug_assert!(digit <= 9, "digit source produced {}", digit);
            *v = digit;
        }
        BaseDigits::from_values(values)
    }
}

impl<S: DigitSource> CnpjService for StandardCnpjService<S> {
    fn validate(&self, candidate: Option<&str>) -> Result<bool> {
        let candidate = require(candidate, "candidate")?;
        let valid = cnpj_core::validate(candidate)?;

        if !valid {
            if let Some(failure) = cnpj_core::validation_failure(candidate) {
                trace!(reason = failure.reason(), "cnpj rejected");
            }
        }
        Ok(valid)
    }

    fn generate(&self) -> String {
        let base = self.draw_base();
        let cnpj = base.check_digits();
        debug!(%cnpj, "generated cnpj");
        cnpj.into_string()
    }

    fn generate_check_digits(&self, base: Option<&str>) -> Result<String> {
        let base = require(base, "base")?;
        let cnpj = cnpj_core::generate_check_digits(base)?;
        debug!(base, %cnpj, "computed check digits");
        Ok(cnpj)
    }
}
