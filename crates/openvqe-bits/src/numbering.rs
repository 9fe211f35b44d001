//! Bit numbering conventions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which end of the external string/array view holds bit 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BitNumbering {
    /// Position 0 is the least significant bit: `1 -> "01"` reads as `[1, 0]`.
    Lsb,
    /// Position 0 is the most significant bit: `1 -> "01"` reads as `[0, 1]`.
    Msb,
}

impl fmt::Display for BitNumbering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitNumbering::Lsb => write!(f, "LSB"),
            BitNumbering::Msb => write!(f, "MSB"),
        }
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Msb {}
    impl Sealed for super::Lsb {}
}

/// Type-level marker fixing the numbering of a [`BitString`](crate::BitString).
///
/// Implemented only by [`Msb`] and [`Lsb`].
pub trait Numbering:
    sealed::Sealed + Copy + Default + fmt::Debug + Send + Sync + 'static
{
    /// The runtime value of this convention.
    const NUMBERING: BitNumbering;
}

/// Most-significant-bit-first numbering (the default).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Msb;

/// Least-significant-bit-first numbering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Lsb;

impl Numbering for Msb {
    const NUMBERING: BitNumbering = BitNumbering::Msb;
}

impl Numbering for Lsb {
    const NUMBERING: BitNumbering = BitNumbering::Lsb;
}
