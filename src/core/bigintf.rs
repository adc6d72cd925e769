use std::fmt;
use std::str::FromStr;

use super::wide_arith::{limb_mask, limbs_from_words, words_from_limbs};
use super::{format_hex_payload, parse_hex_payload, HexError};

pub const F255_LIMBS: usize = 5;
pub const F255_LIMB_BITS: u32 = 51;

/// 255-bit integer as 5 x 51-bit limbs, each an exact integer inside an `f64`.
///
/// A limb is only exact while it stays below `2^53`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BigIntF255 {
    pub v: [f64; F255_LIMBS],
}

/// Raw FloatCIOS output: the lane-0 integer bits of the five retained accumulator slots.
///
/// Slots may exceed 51 bits, and become negative after [`UnresolvedF255::reduce`].
/// Must go through [`UnresolvedF255::resolve`] before it can be used as an operand again.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UnresolvedF255 {
    pub v: [i64; F255_LIMBS],
}

impl BigIntF255 {
    pub const ZERO: Self = Self { v: [0.0; F255_LIMBS] };
    pub const MASK: u64 = limb_mask(F255_LIMB_BITS);

    pub const fn new() -> Self {
        Self::ZERO
    }

    pub fn from_limbs(limbs: [u64; F255_LIMBS]) -> Self {
        Self { v: limbs.map(|l| l as f64) }
    }

    pub fn limbs(&self) -> [u64; F255_LIMBS] {
        self.v.map(|l| l as u64)
    }

    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        let words = parse_hex_payload(s)?;
        Ok(Self::from_limbs(limbs_from_words(&words, F255_LIMB_BITS)))
    }

    /// Bits above 255 (only reachable through an unmasked top limb) are dropped.
    pub fn to_hex(&self) -> String {
        format_hex_payload(&words_from_limbs(&self.limbs(), F255_LIMB_BITS))
    }
}

impl FromStr for BigIntF255 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for BigIntF255 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
