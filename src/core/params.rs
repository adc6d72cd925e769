//! Field presets and the per-representation Montgomery parameters derived from them.
//!
//! Multipliers never derive their constants; callers build a [`MontParams`] once and
//! hand its fields to every call.

use super::bigint::{BigInt, BigInt256, BigInt256Wide, BigInt261, BigInt270};
use super::bigintf::{BigIntF255, F255_LIMB_BITS};
use super::wide_arith::limb_mask;
use super::HexError;

/// Supported prime fields.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldPreset {
    /// BLS12-377 scalar field, 253 bits.
    Bls12_377Fr,
}

impl FieldPreset {
    pub const fn modulus_hex(&self) -> &'static str {
        match self {
            FieldPreset::Bls12_377Fr => "12ab655e9a2ca55660b44d1e5c37b00159aa76fed00000010a11800000000001",
        }
    }

    pub fn get_params(&self) -> MontParams {
        match MontParams::from_hex(self.modulus_hex()) {
            Ok(params) => params,
            // 프리셋 상수는 항상 올바른 64자리 16진수입니다.
            Err(e) => unreachable!("preset modulus is malformed: {e}"),
        }
    }
}

/// The modulus in every limb encoding, plus the Montgomery constants each algorithm expects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MontParams {
    pub p256: BigInt256,
    pub p256_wide: BigInt256Wide,
    pub p270: BigInt270,
    pub p261: BigInt261,
    pub pf255: BigIntF255,
    /// `-p^-1 mod 2^32`, ClassicCIOS.
    pub n0_32: u64,
    /// `p^-1 mod 2^32`, BM17.
    pub mu_32: u64,
    /// `-p^-1 mod 2^30`
    pub mu_30: u64,
    /// `-p^-1 mod 2^29`
    pub mu_29: u64,
    /// `-p^-1 mod 2^51`, FloatCIOS.
    pub n0_51: u64,
}

impl MontParams {
    /// `p` must be odd.
    pub fn from_hex(p_hex: &str) -> Result<Self, HexError> {
        let p256 = BigInt256::from_hex(p_hex)?;
        let p270 = BigInt270::from_hex(p_hex)?;
        let p261 = BigInt261::from_hex(p_hex)?;
        let pf255 = BigIntF255::from_hex(p_hex)?;
        // 하위 51비트만으로 모든 역원을 구할 수 있습니다.
        let p_low = pf255.limbs()[0];
        Ok(Self {
            p256,
            p256_wide: p256.widen(),
            p270,
            p261,
            pf255,
            n0_32: compute_mont_inv(p_low, 32),
            mu_32: compute_inv(p_low) & limb_mask(32),
            mu_30: compute_mont_inv(p_low, 30),
            mu_29: compute_mont_inv(p_low, 29),
            n0_51: compute_mont_inv(p_low, F255_LIMB_BITS),
        })
    }

    /// Bit length of the modulus.
    pub fn modulus_bits(&self) -> u32 {
        modulus_bits(&self.p256)
    }
}

fn modulus_bits<const L: usize, const W: u32>(p: &BigInt<L, W>) -> u32 {
    for i in (0..L).rev() {
        if p.v[i] != 0 {
            return i as u32 * W + (64 - p.v[i].leading_zeros());
        }
    }
    0
}

/// `p0^-1 mod 2^64` by Newton iteration; each step doubles the number of correct
/// bits (1 -> 2 -> 4 -> ... -> 64). `p0` must be odd.
pub const fn compute_inv(p0: u64) -> u64 {
    let mut inv = 1u64;
    let mut i = 0;
    while i < 6 {
        inv = inv.wrapping_mul(2u64.wrapping_sub(p0.wrapping_mul(inv)));
        i += 1;
    }
    inv
}

/// `-p0^-1 mod 2^w`
pub const fn compute_mont_inv(p0: u64, w: u32) -> u64 {
    compute_inv(p0).wrapping_neg() & limb_mask(w)
}
