//! Bit strings for quantum circuit bookkeeping.
//!
//! This crate provides [`BitString`], an unsigned integer of arbitrary size
//! viewed as a fixed-width sequence of bits. Simulators and measurement
//! post-processing use it to move between basis-state indices, binary labels
//! such as `"0110"`, and per-qubit bit arrays.
//!
//! # Numbering
//!
//! The bit numbering convention is a type parameter:
//!
//! - [`BitString<Msb>`](BitString) (the default): position 0 is the most
//!   significant bit.
//! - [`BitStringLsb`] = `BitString<Lsb>`: position 0 is the least significant
//!   bit.
//!
//! Converting between conventions goes through
//! [`BitString::from_bitstring`], which keeps the integer and mirrors the
//! string/array views. Reinterpreting a binary string under the other type
//! yields a different integer.
//!
//! # Example
//!
//! ```rust
//! use openvqe_bits::{BitString, BitStringLsb, Msb};
//!
//! let basis = BitString::<Msb>::from_binary("0b0011", 4).unwrap();
//! assert_eq!(basis, 3);
//! assert_eq!(basis, "0011");
//!
//! let lsb = BitStringLsb::from_bitstring(&basis);
//! assert_eq!(lsb.binary(), "1100");
//! assert_eq!(lsb[0], 1);
//! ```

mod bitstring;
mod error;
mod numbering;

pub use bitstring::{BitString, BitStringLsb, BitStringMsb};
pub use error::{BitResult, BitStringError};
pub use numbering::{BitNumbering, Lsb, Msb, Numbering};
