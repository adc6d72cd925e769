use std::fmt;
use std::str::FromStr;

use super::wide_arith::{limb_mask, limbs_from_words, words_from_limbs, LimbSplit};
use super::{format_hex_payload, parse_hex_payload, HexError};

/// Fixed-width multiprecision integer: `L` limbs of `W` bits, each held in a `u64`,
/// little-endian by limb index.
///
/// Outside of a multiplier every limb is below `2^W`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigInt<const L: usize, const W: u32> {
    pub v: [u64; L],
}

/// 8 x 32-bit limbs.
pub type BigInt256 = BigInt<8, 32>;
/// [`BigInt256`] with one extra zero limb, matching the CIOS accumulator width.
pub type BigInt256Wide = BigInt<9, 32>;
/// 9 x 30-bit limbs.
pub type BigInt270 = BigInt<9, 30>;
/// 9 x 29-bit limbs.
pub type BigInt261 = BigInt<9, 29>;

impl<const L: usize, const W: u32> Default for BigInt<L, W> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const L: usize, const W: u32> BigInt<L, W> {
    pub const ZERO: Self = Self { v: [0; L] };
    pub const NUM_LIMBS: usize = L;
    pub const LIMB_BITS: u32 = W;
    pub const MASK: u64 = limb_mask(W);

    pub const fn new() -> Self {
        Self::ZERO
    }

    pub const fn from_limbs(v: [u64; L]) -> Self {
        Self { v }
    }

    pub fn is_zero(&self) -> bool {
        self.v.iter().all(|&x| x == 0)
    }

    /// Returns true if `self > other`, scanning from the most significant limb.
    pub fn gt(&self, other: &Self) -> bool {
        for i in (0..L).rev() {
            if self.v[i] > other.v[i] {
                return true;
            } else if self.v[i] < other.v[i] {
                return false;
            }
        }
        false
    }

    /// `self >= other`
    pub fn ge(&self, other: &Self) -> bool {
        !other.gt(self)
    }

    /// Returns `(self - other, borrow)`.
    ///
    /// Only meaningful when `self >= other`; otherwise the difference wraps modulo
    /// `2^(L*W)` and the borrow is set.
    pub fn sub(&self, other: &Self) -> (Self, bool) {
        let mut res = Self::ZERO;
        let mut borrow = 0u64;
        for i in 0..L {
            let diff = self.v[i].wrapping_sub(other.v[i]).wrapping_sub(borrow);
            res.v[i] = diff.lo_bits(W);
            borrow = diff.hi_bits(W) & 1;
        }
        (res, borrow == 1)
    }

    /// Parses a 64-character big-endian hex string.
    pub fn from_hex(s: &str) -> Result<Self, HexError> {
        let words = parse_hex_payload(s)?;
        Ok(Self { v: limbs_from_words(&words, W) })
    }

    /// Serializes to a 64-character lowercase big-endian hex string.
    pub fn to_hex(&self) -> String {
        format_hex_payload(&words_from_limbs(&self.v, W))
    }
}

impl BigInt256 {
    /// Pads with one zero limb; the ClassicCIOS final subtraction compares against this.
    pub fn widen(&self) -> BigInt256Wide {
        let mut v = [0u64; 9];
        v[..8].copy_from_slice(&self.v);
        BigInt256Wide { v }
    }
}

impl<const L: usize, const W: u32> FromStr for BigInt<L, W> {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl<const L: usize, const W: u32> fmt::Display for BigInt<L, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
