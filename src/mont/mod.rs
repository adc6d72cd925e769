// src/mont/mod.rs

//! Montgomery multipliers: `mont_mul(a, b) = a * b * R^-1 mod p`, where `R` is
//! 2 to the power of the representation's total limb width.
//!
//! Each algorithm is exposed twice: as a free function taking the modulus and the
//! Montgomery constant explicitly, and as a [`MontgomeryMultiplier`] that holds
//! them, so benches, the chain harness and the C ABI can swap algorithms freely.

use std::fmt;
use std::str::FromStr;

use crate::core::wide_arith::{limbs_from_words, words_from_limbs};
use crate::core::params::compute_mont_inv;
use crate::core::{BigInt, BigInt256, BigInt256Wide, BigIntF255, HexError, MontParams};
use crate::hal::{DefaultAlu, VectorAlu};

pub mod bm17;
pub mod chain;
pub mod cios;
pub mod delayed;
pub mod f64_cios;
pub mod reduce;

pub use bm17::{bm17_non_simd_mont_mul, bm17_simd_mont_mul, bm17_simd_mont_mul_with};
pub use chain::{chain, chain_hex};
pub use cios::mont_mul_cios;
pub use delayed::{mont_mul_9x29, mont_mul_9x30, mont_mul_delayed};
pub use f64_cios::{mont_mul_cios_f64_simd, mont_mul_cios_f64_with};

/// A Montgomery multiplier bound to one modulus.
pub trait MontgomeryMultiplier: Send + Sync {
    /// Operand and result representation.
    type Int: Copy
        + PartialEq
        + fmt::Debug
        + fmt::Display
        + FromStr<Err = HexError>
        + Send
        + Sync;

    const NAME: &'static str;

    /// No implementation here runs in constant time: final subtractions and
    /// reductions branch on the data.
    const CONSTANT_TIME: bool = false;

    /// `a * b * R^-1 mod p` for `a, b < p`. The result is below `p`.
    fn mont_mul(&self, a: &Self::Int, b: &Self::Int) -> Self::Int;
}

// --- ClassicCIOS ---
#[derive(Clone, Copy, Debug)]
pub struct Cios {
    pub p: BigInt256,
    pub p_wide: BigInt256Wide,
    pub n0: u64,
}

impl Cios {
    pub fn from_params(params: &MontParams) -> Self {
        Self { p: params.p256, p_wide: params.p256_wide, n0: params.n0_32 }
    }
}

impl MontgomeryMultiplier for Cios {
    type Int = BigInt256;
    const NAME: &'static str = "cios";

    #[inline]
    fn mont_mul(&self, a: &BigInt256, b: &BigInt256) -> BigInt256 {
        mont_mul_cios(a, b, &self.p, &self.p_wide, self.n0)
    }
}

// --- BM17 ---
#[derive(Clone, Copy, Debug)]
pub struct Bm17 {
    pub p: BigInt256,
    pub mu: u64,
}

impl Bm17 {
    pub fn from_params(params: &MontParams) -> Self {
        Self { p: params.p256, mu: params.mu_32 }
    }
}

impl MontgomeryMultiplier for Bm17 {
    type Int = BigInt256;
    const NAME: &'static str = "bm17";

    #[inline]
    fn mont_mul(&self, a: &BigInt256, b: &BigInt256) -> BigInt256 {
        bm17_non_simd_mont_mul(a, b, &self.p, self.mu)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Bm17Simd<A: VectorAlu = DefaultAlu> {
    pub alu: A,
    pub p: BigInt256,
    pub mu: u64,
}

impl<A: VectorAlu> Bm17Simd<A> {
    pub fn from_params(params: &MontParams) -> Self {
        Self::with_alu(A::default(), params)
    }

    pub fn with_alu(alu: A, params: &MontParams) -> Self {
        Self { alu, p: params.p256, mu: params.mu_32 }
    }
}

impl<A: VectorAlu> MontgomeryMultiplier for Bm17Simd<A> {
    type Int = BigInt256;
    const NAME: &'static str = "bm17-simd";

    #[inline]
    fn mont_mul(&self, a: &BigInt256, b: &BigInt256) -> BigInt256 {
        bm17_simd_mont_mul_with(self.alu, a, b, &self.p, self.mu)
    }
}

// --- FloatCIOS ---
/// FloatCIOS followed by `reduce` and `resolve`, so results can be chained.
#[derive(Clone, Copy, Debug)]
pub struct CiosF64<A: VectorAlu = DefaultAlu> {
    pub alu: A,
    pub p: BigIntF255,
    pub n0: u64,
}

impl<A: VectorAlu> CiosF64<A> {
    pub fn from_params(params: &MontParams) -> Self {
        Self::with_alu(A::default(), params)
    }

    pub fn with_alu(alu: A, params: &MontParams) -> Self {
        Self { alu, p: params.pf255, n0: params.n0_51 }
    }
}

impl<A: VectorAlu> MontgomeryMultiplier for CiosF64<A> {
    type Int = BigIntF255;
    const NAME: &'static str = "f64-cios";

    #[inline]
    fn mont_mul(&self, a: &BigIntF255, b: &BigIntF255) -> BigIntF255 {
        mont_mul_cios_f64_with(self.alu, a, b, &self.p, self.n0)
            .reduce(&self.p)
            .resolve()
    }
}

// --- DelayedCarry ---
#[derive(Clone, Copy, Debug)]
pub struct Delayed<const W: u32> {
    pub p: BigInt<9, W>,
    pub mu: u64,
}

pub type Delayed30 = Delayed<30>;
pub type Delayed29 = Delayed<29>;

impl<const W: u32> Delayed<W> {
    /// Re-encodes the modulus into `W`-bit limbs and derives `mu = -p^-1 mod 2^W`.
    pub fn from_params(params: &MontParams) -> Self {
        let words = words_from_limbs(&params.p256.v, BigInt256::LIMB_BITS);
        let p = BigInt::<9, W>::from_limbs(limbs_from_words(&words, W));
        Self { p, mu: compute_mont_inv(p.v[0], W) }
    }
}

impl<const W: u32> MontgomeryMultiplier for Delayed<W> {
    type Int = BigInt<9, W>;
    const NAME: &'static str = match W {
        30 => "9x30",
        29 => "9x29",
        _ => "delayed",
    };

    #[inline]
    fn mont_mul(&self, a: &BigInt<9, W>, b: &BigInt<9, W>) -> BigInt<9, W> {
        mont_mul_delayed(a, b, &self.p, self.mu)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BigInt261, BigInt270, FieldPreset};
    use crate::hal::ScalarAlu;

    #[test]
    fn delayed_params_match_preset() {
        let params = FieldPreset::Bls12_377Fr.get_params();
        let d30 = Delayed30::from_params(&params);
        assert_eq!(d30.p, params.p270);
        assert_eq!(d30.mu, params.mu_30);
        let d29 = Delayed29::from_params(&params);
        assert_eq!(d29.p, params.p261);
        assert_eq!(d29.mu, params.mu_29);
    }

    #[test]
    fn names_and_flags() {
        assert_eq!(Delayed30::NAME, "9x30");
        assert_eq!(Delayed29::NAME, "9x29");
        assert_eq!(<Bm17Simd<ScalarAlu>>::NAME, "bm17-simd");
        assert!(!Cios::CONSTANT_TIME);
        assert!(!<CiosF64<ScalarAlu>>::CONSTANT_TIME);
    }

    #[test]
    fn all_multipliers_agree_on_the_same_value() {
        // 같은 정수를 각 표현으로 인코딩하고, R이 다르므로 R·mont(a, b) = a·b (mod p)로 비교합니다.
        let params = FieldPreset::Bls12_377Fr.get_params();
        let p = test_utils::modulus();
        let a_hex = "0a0b0c0d0e0f101112131415161718191a1b1c1d1e1f20212223242526272829";
        let b_hex = "01ffeeddccbbaa99887766554433221100ffeeddccbbaa998877665544332211";
        let expected = test_utils::to_big(&BigInt256::from_hex(a_hex).unwrap().v, 32)
            * test_utils::to_big(&BigInt256::from_hex(b_hex).unwrap().v, 32)
            % &p;

        let undo = |x: num_bigint::BigUint, r_bits: u32| (x << r_bits) % &p;

        let cios = Cios::from_params(&params);
        let r = cios.mont_mul(&a_hex.parse().unwrap(), &b_hex.parse().unwrap());
        assert_eq!(undo(test_utils::to_big(&r.v, 32), 256), expected);

        let bm17 = Bm17Simd::<ScalarAlu>::from_params(&params);
        assert_eq!(bm17.mont_mul(&a_hex.parse().unwrap(), &b_hex.parse().unwrap()), r);

        let d30 = Delayed30::from_params(&params);
        let r30: BigInt270 = d30.mont_mul(&a_hex.parse().unwrap(), &b_hex.parse().unwrap());
        assert_eq!(undo(test_utils::to_big(&r30.v, 30), 270), expected);

        let d29 = Delayed29::from_params(&params);
        let r29: BigInt261 = d29.mont_mul(&a_hex.parse().unwrap(), &b_hex.parse().unwrap());
        assert_eq!(undo(test_utils::to_big(&r29.v, 29), 261), expected);

        let float = CiosF64::<ScalarAlu>::from_params(&params);
        let rf = float.mont_mul(&a_hex.parse().unwrap(), &b_hex.parse().unwrap());
        assert_eq!(undo(test_utils::to_big(&rf.limbs(), 51), 255), expected);
    }
}
