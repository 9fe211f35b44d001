//! Scalar parameters carried by parametrized gates.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A concrete gate parameter: an angle, an exponent or a generic scalar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Parameter {
    /// A real value.
    Real(f64),
    /// A complex value.
    Complex(Complex64),
}

impl Parameter {
    /// Check if this parameter is real-valued.
    pub fn is_real(&self) -> bool {
        matches!(self, Parameter::Real(_))
    }

    /// Get the value as `f64`.
    ///
    /// Complex parameters with a zero imaginary part are accepted.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Parameter::Real(v) => Some(*v),
            Parameter::Complex(c) if c.im == 0.0 => Some(c.re),
            Parameter::Complex(_) => None,
        }
    }

    /// Get the value as a complex number.
    pub fn as_complex(&self) -> Complex64 {
        match self {
            Parameter::Real(v) => Complex64::new(*v, 0.0),
            Parameter::Complex(c) => *c,
        }
    }

    /// Complex conjugate. Real parameters are returned unchanged.
    pub fn conj(&self) -> Self {
        match self {
            Parameter::Real(v) => Parameter::Real(*v),
            Parameter::Complex(c) => Parameter::Complex(c.conj()),
        }
    }

    /// Check that no component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        match self {
            Parameter::Real(v) => v.is_finite(),
            Parameter::Complex(c) => c.is_finite(),
        }
    }
}

impl Default for Parameter {
    fn default() -> Self {
        Parameter::Real(0.0)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Real(v) => write!(f, "{v}"),
            Parameter::Complex(c) => write!(f, "{c}"),
        }
    }
}

impl std::ops::Neg for Parameter {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Parameter::Real(v) => Parameter::Real(-v),
            Parameter::Complex(c) => Parameter::Complex(-c),
        }
    }
}

impl From<f64> for Parameter {
    fn from(value: f64) -> Self {
        Parameter::Real(value)
    }
}

impl From<i32> for Parameter {
    fn from(value: i32) -> Self {
        Parameter::Real(f64::from(value))
    }
}

impl From<Complex64> for Parameter {
    fn from(value: Complex64) -> Self {
        Parameter::Complex(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real() {
        let p = Parameter::from(1.5);
        assert!(p.is_real());
        assert_eq!(p.as_f64(), Some(1.5));
        assert_eq!(p.as_complex(), Complex64::new(1.5, 0.0));
    }

    #[test]
    fn test_complex() {
        let p = Parameter::from(Complex64::new(0.0, 2.0));
        assert!(!p.is_real());
        assert_eq!(p.as_f64(), None);
        assert_eq!(Parameter::from(Complex64::new(3.0, 0.0)).as_f64(), Some(3.0));
    }

    #[test]
    fn test_negation() {
        assert_eq!(-Parameter::from(0.5), Parameter::Real(-0.5));
        assert_eq!(
            -Parameter::from(Complex64::new(1.0, -2.0)),
            Parameter::Complex(Complex64::new(-1.0, 2.0))
        );
    }

    #[test]
    fn test_conjugate() {
        assert_eq!(Parameter::from(0.5).conj(), Parameter::Real(0.5));
        assert_eq!(
            Parameter::from(Complex64::new(1.0, -2.0)).conj(),
            Parameter::Complex(Complex64::new(1.0, 2.0))
        );
    }

    #[test]
    fn test_finite() {
        assert!(Parameter::from(2).is_finite());
        assert!(!Parameter::from(f64::NAN).is_finite());
        assert!(!Parameter::from(Complex64::new(0.0, f64::INFINITY)).is_finite());
    }

    #[test]
    fn test_display() {
        assert_eq!(Parameter::from(0.25).to_string(), "0.25");
    }
}
