//! Numeric tolerance used by gate validation.

use serde::{Deserialize, Serialize};

/// Relative and absolute tolerance for floating point comparison.
///
/// Two values are close when `|a - b| <= atol + rtol * |b|`. The comparison
/// is asymmetric in `b`, which is treated as the reference value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Relative tolerance.
    pub rtol: f64,
    /// Absolute tolerance.
    pub atol: f64,
}

impl Tolerance {
    /// Default relative tolerance.
    pub const DEFAULT_RTOL: f64 = 1e-5;
    /// Default absolute tolerance.
    pub const DEFAULT_ATOL: f64 = 1e-8;

    /// Create a tolerance with explicit bounds.
    pub fn new(rtol: f64, atol: f64) -> Self {
        Self { rtol, atol }
    }

    /// A tolerance that only accepts exact equality.
    pub fn exact() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Check whether `a` is close to the reference value `b`.
    #[inline]
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.atol + self.rtol * b.abs()
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RTOL, Self::DEFAULT_ATOL)
    }
}
