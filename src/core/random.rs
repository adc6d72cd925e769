//! Deterministic operand generation.
//!
//! `rand(seed)` hashes the big-endian seed bytes with SHA3-256 and spreads the 256-bit
//! digest over the limbs, so the same seed always yields the same integer.
//! `random_below` draws from a caller-supplied RNG and rejects values `>= p`.

use rand::Rng;
use sha3::{Digest, Sha3_256};

use super::bigint::BigInt;
use super::bigintf::{BigIntF255, F255_LIMB_BITS};
use super::wide_arith::{limb_mask, limbs_from_words, words_from_be_bytes, PAYLOAD_WORDS};

fn seed_words(seed: u64) -> [u64; PAYLOAD_WORDS] {
    let digest = Sha3_256::digest(seed.to_be_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&digest);
    words_from_be_bytes(&bytes)
}

impl<const L: usize, const W: u32> BigInt<L, W> {
    pub fn rand(seed: u64) -> Self {
        Self::from_limbs(limbs_from_words(&seed_words(seed), W))
    }

    /// Uniform in `[0, p)`; `p` must be non-zero.
    pub fn random_below<R: Rng>(rng: &mut R, p: &Self) -> Self {
        let top = match p.v.iter().rposition(|&l| l != 0) {
            Some(top) => top,
            None => return Self::ZERO,
        };
        let top_mask = limb_mask(64 - p.v[top].leading_zeros());
        loop {
            let mut x = Self::ZERO;
            for (i, limb) in x.v.iter_mut().enumerate().take(top + 1) {
                let r = rng.random::<u64>();
                *limb = if i == top { r & top_mask } else { r & Self::MASK };
            }
            if p.gt(&x) {
                return x;
            }
        }
    }
}

impl BigIntF255 {
    pub fn rand(seed: u64) -> Self {
        Self::from_limbs(limbs_from_words(&seed_words(seed), F255_LIMB_BITS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BigInt256, BigInt270, FieldPreset};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_bigint_rand() {
        let rand0 = BigInt256::rand(0);
        let rand1 = BigInt256::rand(1);
        let rand2 = BigInt256::rand(0);

        // A different seed should result in a different BigInt
        assert_ne!(rand0.to_hex(), rand1.to_hex());
        // The same seed should result in the same BigInt
        assert_eq!(rand0.to_hex(), rand2.to_hex());
    }

    #[test]
    fn rand_is_consistent_across_encodings() {
        // 270비트 표현은 256비트 값을 그대로 담으므로 16진수가 같아야 합니다.
        assert_eq!(BigInt256::rand(42).to_hex(), BigInt270::rand(42).to_hex());
        let f = BigIntF255::rand(42);
        assert_eq!(f, BigIntF255::rand(42));
        assert_ne!(f, BigIntF255::rand(43));
    }

    #[test]
    fn random_below_respects_modulus() {
        let p = FieldPreset::Bls12_377Fr.get_params().p270;
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let x = BigInt270::random_below(&mut rng, &p);
            assert!(p.gt(&x));
            assert!(x.v.iter().all(|&l| l <= BigInt270::MASK));
        }
    }
}
