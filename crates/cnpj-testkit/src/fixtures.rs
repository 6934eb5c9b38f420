//! Test fixtures and helpers.
//!
//! Deterministic digit sources and a ready-made service for scenario tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use cnpj::{DigitSource, SeededSource, StandardCnpjService};

/// Always yields the same digit.
#[derive(Debug, Clone, Copy)]
pub struct FixedDigitSource(pub u8);

impl DigitSource for FixedDigitSource {
    fn next_digit(&self) -> u8 {
        self.0
    }
}

/// Replays a digit sequence, wrapping at the end.
#[derive(Debug)]
pub struct CyclingDigitSource {
    digits: Vec<u8>,
    next: AtomicUsize,
}

impl CyclingDigitSource {
    /// Create from a non-empty digit sequence.
    pub fn new(digits: impl Into<Vec<u8>>) -> Self {
        let digits = digits.into();
        assert!(!digits.is_empty(), "cycling source needs at least one digit");
        Self {
            digits,
            next: AtomicUsize::new(0),
        }
    }

    /// Cycle through 0..=9 in order.
    pub fn ascending() -> Self {
        Self::new((0..=9).collect::<Vec<u8>>())
    }

    /// Number of digits drawn so far.
    pub fn draws(&self) -> usize {
        self.next.load(Ordering::Relaxed)
    }
}

impl DigitSource for CyclingDigitSource {
    fn next_digit(&self) -> u8 {
        let i = self.next.fetch_add(1, Ordering::Relaxed);
        self.digits[i % self.digits.len()]
    }
}

/// A service wired to a shared, inspectable digit source.
pub struct ServiceFixture<S: DigitSource> {
    pub source: Arc<S>,
    pub service: StandardCnpjService<Arc<S>>,
}

impl<S: DigitSource> ServiceFixture<S> {
    /// Wrap `source` in a service, keeping a handle for inspection.
    pub fn new(source: S) -> Self {
        let source = Arc::new(source);
        Self {
            service: StandardCnpjService::with_source(Arc::clone(&source)),
            source,
        }
    }
}

impl ServiceFixture<SeededSource> {
    /// Create with a deterministic seeded source.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SeededSource::new(seed))
    }
}

impl ServiceFixture<CyclingDigitSource> {
    /// Create with a source cycling through 0..=9.
    pub fn ascending() -> Self {
        Self::new(CyclingDigitSource::ascending())
    }
}

/// Create several independently seeded fixtures.
pub fn seeded_fixtures(count: usize) -> Vec<ServiceFixture<SeededSource>> {
    (0..count as u64).map(ServiceFixture::with_seed).collect()
}
