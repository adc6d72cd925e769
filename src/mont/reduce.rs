//! Carry resolution and conditional subtraction for the 5 x 51-bit representation.

use crate::core::bigintf::{F255_LIMBS, F255_LIMB_BITS};
use crate::core::{BigInt, BigIntF255, UnresolvedF255};

/// [`BigIntF255`] limbs viewed as integers, for exact compare and subtract.
type Limbs51 = BigInt<F255_LIMBS, F255_LIMB_BITS>;

impl UnresolvedF255 {
    /// Subtracts `p` limb-wise, without borrows, when the top slot exceeds `p`'s top limb.
    ///
    /// Only valid on multiplier output, whose value is below `2p`.
    pub fn reduce(self, p: &BigIntF255) -> Self {
        let p = p.limbs();
        if self.v[4] > p[4] as i64 {
            Self {
                v: std::array::from_fn(|i| self.v[i].wrapping_sub(p[i] as i64)),
            }
        } else {
            self
        }
    }

    /// Ripples carries up from slot 0 with arithmetic shifts; the top limb is left unmasked.
    pub fn resolve(self) -> BigIntF255 {
        let [v0, v1, v2, v3, v4] = self.v;
        let l0 = v1.wrapping_add(v0 >> F255_LIMB_BITS);
        let l1 = v2.wrapping_add(l0 >> F255_LIMB_BITS);
        let l2 = v3.wrapping_add(l1 >> F255_LIMB_BITS);
        let r4 = v4.wrapping_add(l2 >> F255_LIMB_BITS);

        let mask = BigIntF255::MASK;
        BigIntF255::from_limbs([
            v0 as u64 & mask,
            l0 as u64 & mask,
            l1 as u64 & mask,
            l2 as u64 & mask,
            r4 as u64,
        ])
    }
}

impl BigIntF255 {
    /// Canonical representative in `[0, p)` of a resolved value.
    pub fn reduce_full(&self, p: &Self) -> Self {
        let p = Limbs51::from_limbs(p.limbs());
        let mut x = Limbs51::from_limbs(self.limbs());
        while x.ge(&p) {
            x = x.sub(&p).0;
        }
        Self::from_limbs(x.v)
    }
}
