//! Integer-backed bit strings.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Index};
use std::str::FromStr;
use tracing::debug;

use crate::error::{BitResult, BitStringError};
use crate::numbering::{BitNumbering, Lsb, Msb, Numbering};

/// An unsigned integer viewed as a fixed-width sequence of bits.
///
/// The value is stored as an arbitrary-precision integer. The numbering
/// convention is part of the type: `BitString<Msb>` (the default) reads bit 0
/// as the most significant bit, `BitString<Lsb>` as the least significant one.
/// Both present the same value and width; only the string and array views are
/// mirrored.
///
/// The width `nbits` never drops below the number of bits needed to write the
/// value in binary (at least 1). Every factory and setter re-raises it, but a
/// larger explicitly declared width is kept.
///
/// # Example
///
/// ```rust
/// use openvqe_bits::{BitString, BitStringLsb};
///
/// let msb: BitString = BitString::from_integer(6u32, 4);
/// assert_eq!(msb.binary(), "0110");
/// assert_eq!(msb.array(), vec![0, 1, 1, 0]);
///
/// let lsb = BitStringLsb::from_bitstring(&msb);
/// assert_eq!(lsb.binary(), "0110".chars().rev().collect::<String>());
/// assert_eq!(lsb.integer(), msb.integer());
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "BitStringRepr", into = "BitStringRepr")]
pub struct BitString<N: Numbering = Msb> {
    /// The integer value.
    value: BigUint,
    /// Declared width, always at least `min_bits(value)`.
    nbits: usize,
    numbering: PhantomData<N>,
}

/// Bit string with least-significant-bit-first numbering.
pub type BitStringLsb = BitString<Lsb>;

/// Bit string with most-significant-bit-first numbering.
pub type BitStringMsb = BitString<Msb>;

/// Number of binary digits needed to write `value` (`0` needs one).
fn min_bits(value: &BigUint) -> usize {
    usize::try_from(value.bits()).unwrap_or(usize::MAX).max(1)
}

impl<N: Numbering> BitString<N> {
    /// The numbering convention of this type.
    pub const NUMBERING: BitNumbering = N::NUMBERING;

    /// Create an all-zero bit string of the given width.
    pub fn zeros(nbits: usize) -> Self {
        Self::from_integer(BigUint::zero(), nbits)
    }

    /// Create a bit string holding `value`.
    ///
    /// `nbits` is a lower bound; the width is raised to fit the value.
    pub fn from_integer(value: impl Into<BigUint>, nbits: usize) -> Self {
        let mut bits = Self {
            value: value.into(),
            nbits,
            numbering: PhantomData,
        };
        bits.update_nbits();
        bits
    }

    /// Create a bit string from a signed integer.
    ///
    /// Fails with [`BitStringError::TypeConstraint`] for negative input, which
    /// has no unsigned binary encoding.
    pub fn from_signed(value: i64, nbits: usize) -> BitResult<Self> {
        let unsigned = u64::try_from(value).map_err(|_| {
            debug!(value, "rejected negative integer for bit string");
            BitStringError::TypeConstraint(format!(
                "bit strings hold non-negative integers, got {value}"
            ))
        })?;
        Ok(Self::from_integer(unsigned, nbits))
    }

    /// Parse an unsigned binary literal, optionally prefixed with `0b`.
    ///
    /// The text is read in this type's numbering, so for `BitString<Lsb>` the
    /// first character is the least significant bit. Leading zeros do not
    /// count towards the width; pass `nbits` to keep them.
    pub fn from_binary(text: &str, nbits: usize) -> BitResult<Self> {
        let mut bits = Self::zeros(nbits);
        bits.set_binary(text)?;
        Ok(bits)
    }

    /// Build a bit string from individual bits (each `0` or `1`).
    ///
    /// The array is read in this type's numbering. As with
    /// [`from_binary`](Self::from_binary), only `nbits` and the value decide the
    /// width, not the array length.
    pub fn from_array(bits: &[u8], nbits: usize) -> BitResult<Self> {
        let mut result = Self::zeros(nbits);
        result.set_array(bits)?;
        Ok(result)
    }

    /// Copy the value and width of another bit string into this numbering.
    ///
    /// This converts between conventions: the integer is kept, so the string
    /// and array views of the result are mirrored when the numberings differ.
    pub fn from_bitstring<M: Numbering>(other: &BitString<M>) -> Self {
        Self::from_integer(other.value.clone(), other.nbits)
    }

    /// Get the numbering convention.
    pub fn numbering(&self) -> BitNumbering {
        N::NUMBERING
    }

    /// Get the width in bits.
    pub fn nbits(&self) -> usize {
        self.nbits
    }

    /// Get the integer value.
    pub fn integer(&self) -> &BigUint {
        &self.value
    }

    /// Get the value as a `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        self.value.to_u64()
    }

    /// Get the binary string, zero-padded to `nbits`, in this numbering.
    pub fn binary(&self) -> String {
        let digits = self.value.to_str_radix(2);
        let padded = format!("{digits:0>width$}", width = self.nbits);
        match N::NUMBERING {
            BitNumbering::Msb => padded,
            BitNumbering::Lsb => padded.chars().rev().collect(),
        }
    }

    /// Get the individual bits, in the order of [`binary`](Self::binary).
    pub fn array(&self) -> Vec<u8> {
        self.binary().bytes().map(|b| b - b'0').collect()
    }

    /// Set the declared width.
    ///
    /// Postcondition: `nbits() == max(nbits, bits needed for the value)`.
    pub fn set_nbits(&mut self, nbits: usize) {
        self.nbits = nbits;
        self.update_nbits();
    }

    /// Replace the value.
    ///
    /// Postcondition: the width is raised if the new value needs more bits.
    pub fn set_integer(&mut self, value: impl Into<BigUint>) {
        self.value = value.into();
        self.update_nbits();
    }

    /// Replace the value by parsing a binary literal (see [`from_binary`](Self::from_binary)).
    ///
    /// Postcondition: the width is raised if the new value needs more bits.
    /// On error the bit string is left unchanged.
    pub fn set_binary(&mut self, text: &str) -> BitResult<()> {
        let digits = text.strip_prefix("0b").unwrap_or(text);
        if digits.is_empty() {
            debug!(input = text, "rejected binary string without digits");
            return Err(BitStringError::Format {
                input: text.to_string(),
                reason: "no binary digits".to_string(),
            });
        }
        if let Some((position, ch)) = digits.char_indices().find(|(_, c)| !matches!(*c, '0' | '1'))
        {
            debug!(input = text, position, "rejected non-binary character");
            return Err(BitStringError::Format {
                input: text.to_string(),
                reason: format!("unexpected character '{ch}' at position {position}"),
            });
        }

        let ordered: String = match N::NUMBERING {
            BitNumbering::Msb => digits.to_string(),
            BitNumbering::Lsb => digits.chars().rev().collect(),
        };
        let value =
            BigUint::parse_bytes(ordered.as_bytes(), 2).ok_or_else(|| BitStringError::Format {
                input: text.to_string(),
                reason: "not an unsigned binary number".to_string(),
            })?;

        self.value = value;
        self.update_nbits();
        Ok(())
    }

    /// Replace the value from individual bits (see [`from_array`](Self::from_array)).
    ///
    /// Postcondition: the width is raised if the new value needs more bits.
    /// On error the bit string is left unchanged.
    pub fn set_array(&mut self, bits: &[u8]) -> BitResult<()> {
        if bits.is_empty() {
            debug!("rejected empty bit array");
            return Err(BitStringError::TypeConstraint(
                "bit array must contain at least one bit".to_string(),
            ));
        }
        if let Some((position, bit)) = bits.iter().enumerate().find(|(_, b)| **b > 1) {
            debug!(position, bit, "rejected non-binary array element");
            return Err(BitStringError::TypeConstraint(format!(
                "bit array element {position} is {bit}, expected 0 or 1"
            )));
        }

        let push = |acc: BigUint, bit: &u8| (acc << 1usize) + BigUint::from(*bit);
        self.value = match N::NUMBERING {
            BitNumbering::Msb => bits.iter().fold(BigUint::zero(), push),
            BitNumbering::Lsb => bits.iter().rev().fold(BigUint::zero(), push),
        };
        self.update_nbits();
        Ok(())
    }

    /// Get the bit at an array position, or `None` past the width.
    pub fn bit(&self, index: usize) -> Option<u8> {
        (index < self.nbits).then(|| u8::from(self.value.bit(self.significance(index))))
    }

    /// Set the bit at an array position to `0` or `1`.
    ///
    /// The width is unchanged.
    pub fn set_bit(&mut self, index: usize, bit: u8) -> BitResult<()> {
        if index >= self.nbits {
            return Err(BitStringError::IndexOutOfBounds {
                index,
                nbits: self.nbits,
            });
        }
        if bit > 1 {
            return Err(BitStringError::TypeConstraint(format!(
                "bit value must be 0 or 1, got {bit}"
            )));
        }
        let position = self.significance(index);
        self.value.set_bit(position, bit == 1);
        Ok(())
    }

    /// Binary significance of an array position.
    fn significance(&self, index: usize) -> u64 {
        match N::NUMBERING {
            BitNumbering::Msb => (self.nbits - 1 - index) as u64,
            BitNumbering::Lsb => index as u64,
        }
    }

    fn update_nbits(&mut self) {
        self.nbits = self.nbits.max(min_bits(&self.value));
    }
}

impl<N: Numbering> Default for BitString<N> {
    fn default() -> Self {
        Self::zeros(0)
    }
}

impl<N: Numbering> fmt::Display for BitString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<N: Numbering> fmt::Debug for BitString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitString")
            .field("numbering", &N::NUMBERING)
            .field("value", &self.value)
            .field("nbits", &self.nbits)
            .finish()
    }
}

impl<N: Numbering> FromStr for BitString<N> {
    type Err = BitStringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_binary(s, 0)
    }
}

impl<N: Numbering> From<u64> for BitString<N> {
    fn from(value: u64) -> Self {
        Self::from_integer(value, 0)
    }
}

impl<N: Numbering> From<BigUint> for BitString<N> {
    fn from(value: BigUint) -> Self {
        Self::from_integer(value, 0)
    }
}

impl<N: Numbering> TryFrom<i64> for BitString<N> {
    type Error = BitStringError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_signed(value, 0)
    }
}

impl<N: Numbering, M: Numbering> From<&BitString<M>> for BitString<N> {
    fn from(other: &BitString<M>) -> Self {
        Self::from_bitstring(other)
    }
}

// Equality: numbering and value. Width does not take part.
impl<N: Numbering, M: Numbering> PartialEq<BitString<M>> for BitString<N> {
    fn eq(&self, other: &BitString<M>) -> bool {
        N::NUMBERING == M::NUMBERING && self.value == other.value
    }
}

impl<N: Numbering> Eq for BitString<N> {}

impl<N: Numbering> PartialEq<BigUint> for BitString<N> {
    fn eq(&self, other: &BigUint) -> bool {
        &self.value == other
    }
}

impl<N: Numbering> PartialEq<str> for BitString<N> {
    fn eq(&self, other: &str) -> bool {
        self.binary() == other
    }
}

impl<N: Numbering> PartialEq<&str> for BitString<N> {
    fn eq(&self, other: &&str) -> bool {
        self.binary() == *other
    }
}

impl<N: Numbering> PartialEq<String> for BitString<N> {
    fn eq(&self, other: &String) -> bool {
        self.binary() == *other
    }
}

impl<N: Numbering> Ord for BitString<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<N: Numbering> PartialOrd for BitString<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Comparisons against every primitive integer, so an unsuffixed literal
// (`bits == 5`) falls back to `i32` and still compiles.
macro_rules! impl_unsigned_cmp {
    ($($ty:ty),*) => {$(
        impl<N: Numbering> PartialEq<$ty> for BitString<N> {
            fn eq(&self, other: &$ty) -> bool {
                self.value == BigUint::from(*other)
            }
        }

        impl<N: Numbering> PartialOrd<$ty> for BitString<N> {
            fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                Some(self.value.cmp(&BigUint::from(*other)))
            }
        }
    )*};
}

// Negative values never equal a bit string and order below all of them.
macro_rules! impl_signed_cmp {
    ($($ty:ty),*) => {$(
        impl<N: Numbering> PartialEq<$ty> for BitString<N> {
            fn eq(&self, other: &$ty) -> bool {
                BigUint::try_from(*other).is_ok_and(|value| self.value == value)
            }
        }

        impl<N: Numbering> PartialOrd<$ty> for BitString<N> {
            fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                match BigUint::try_from(*other) {
                    Ok(value) => Some(self.value.cmp(&value)),
                    Err(_) => Some(Ordering::Greater),
                }
            }
        }
    )*};
}

impl_unsigned_cmp!(u8, u16, u32, u64, u128, usize);
impl_signed_cmp!(i8, i16, i32, i64, i128, isize);

impl<N: Numbering> PartialOrd<BigUint> for BitString<N> {
    fn partial_cmp(&self, other: &BigUint) -> Option<Ordering> {
        Some(self.value.cmp(other))
    }
}

// Hashes the value only, so `BitString<Msb>` and `BitString<Lsb>` holding the
// same integer collide even though they compare unequal.
impl<N: Numbering> Hash for BitString<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<N: Numbering> Index<usize> for BitString<N> {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        match self.bit(index) {
            Some(0) => &0,
            Some(_) => &1,
            None => panic!(
                "bit index {index} out of bounds for bit string of width {}",
                self.nbits
            ),
        }
    }
}

impl<N: Numbering> Add for &BitString<N> {
    type Output = BitString<N>;

    /// Sum of the values; the width is the larger operand width, raised to fit.
    fn add(self, rhs: Self) -> BitString<N> {
        BitString::from_integer(&self.value + &rhs.value, self.nbits.max(rhs.nbits))
    }
}

impl<N: Numbering> Add for BitString<N> {
    type Output = BitString<N>;

    fn add(self, rhs: Self) -> BitString<N> {
        &self + &rhs
    }
}

impl<N: Numbering> AddAssign<&BitString<N>> for BitString<N> {
    fn add_assign(&mut self, rhs: &BitString<N>) {
        self.value += &rhs.value;
        self.nbits = self.nbits.max(rhs.nbits);
        self.update_nbits();
    }
}

impl<N: Numbering> AddAssign for BitString<N> {
    fn add_assign(&mut self, rhs: BitString<N>) {
        *self += &rhs;
    }
}

/// Serialized form: decimal value plus width.
#[derive(Serialize, Deserialize)]
struct BitStringRepr {
    value: String,
    nbits: usize,
}

impl<N: Numbering> From<BitString<N>> for BitStringRepr {
    fn from(bits: BitString<N>) -> Self {
        Self {
            value: bits.value.to_string(),
            nbits: bits.nbits,
        }
    }
}

impl<N: Numbering> TryFrom<BitStringRepr> for BitString<N> {
    type Error = BitStringError;

    fn try_from(repr: BitStringRepr) -> Result<Self, Self::Error> {
        let value = BigUint::from_str(&repr.value).map_err(|e| BitStringError::Format {
            input: repr.value.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_integer(value, repr.nbits))
    }
}
