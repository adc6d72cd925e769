use super::VectorAlu;

/// Portable fallback: each lane is computed with ordinary 64-bit scalar arithmetic.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarAlu;

/// Two lanes of raw bits; `f64` views go through `to_bits`/`from_bits`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lanes(pub [u64; 2]);

#[inline(always)]
fn map2(a: Lanes, b: Lanes, f: impl Fn(u64, u64) -> u64) -> Lanes {
    Lanes([f(a.0[0], b.0[0]), f(a.0[1], b.0[1])])
}

#[inline(always)]
fn map2_f64(a: Lanes, b: Lanes, f: impl Fn(f64, f64) -> f64) -> Lanes {
    map2(a, b, |x, y| f(f64::from_bits(x), f64::from_bits(y)).to_bits())
}

impl VectorAlu for ScalarAlu {
    type V = Lanes;

    fn name(&self) -> &'static str {
        "scalar"
    }

    #[inline(always)]
    fn i64x2_make(&self, l: u64, h: u64) -> Lanes {
        Lanes([l, h])
    }

    #[inline(always)]
    fn i64x2_splat(&self, x: u64) -> Lanes {
        Lanes([x, x])
    }

    #[inline(always)]
    fn f64x2_make(&self, l: f64, h: f64) -> Lanes {
        Lanes([l.to_bits(), h.to_bits()])
    }

    #[inline(always)]
    fn f64x2_splat(&self, x: f64) -> Lanes {
        self.i64x2_splat(x.to_bits())
    }

    #[inline(always)]
    fn i64x2_extract_l(&self, v: Lanes) -> u64 {
        v.0[0]
    }

    #[inline(always)]
    fn i64x2_extract_h(&self, v: Lanes) -> u64 {
        v.0[1]
    }

    #[inline(always)]
    fn f64x2_extract_l(&self, v: Lanes) -> f64 {
        f64::from_bits(v.0[0])
    }

    #[inline(always)]
    fn f64x2_extract_h(&self, v: Lanes) -> f64 {
        f64::from_bits(v.0[1])
    }

    #[inline(always)]
    fn i64x2_add(&self, a: Lanes, b: Lanes) -> Lanes {
        map2(a, b, u64::wrapping_add)
    }

    #[inline(always)]
    fn i64x2_sub(&self, a: Lanes, b: Lanes) -> Lanes {
        map2(a, b, u64::wrapping_sub)
    }

    #[inline(always)]
    fn i64x2_mul(&self, a: Lanes, b: Lanes) -> Lanes {
        map2(a, b, u64::wrapping_mul)
    }

    #[inline(always)]
    fn v128_and(&self, a: Lanes, b: Lanes) -> Lanes {
        map2(a, b, |x, y| x & y)
    }

    #[inline(always)]
    fn u64x2_shr(&self, a: Lanes, n: u32) -> Lanes {
        Lanes([a.0[0] >> n, a.0[1] >> n])
    }

    #[inline(always)]
    fn i64x2_shr(&self, a: Lanes, n: u32) -> Lanes {
        Lanes([((a.0[0] as i64) >> n) as u64, ((a.0[1] as i64) >> n) as u64])
    }

    #[inline(always)]
    fn f64x2_sub(&self, a: Lanes, b: Lanes) -> Lanes {
        map2_f64(a, b, |x, y| x - y)
    }

    #[inline(always)]
    fn f64x2_fma(&self, a: Lanes, b: Lanes, c: Lanes) -> Lanes {
        let lane = |i: usize| {
            f64::from_bits(a.0[i])
                .mul_add(f64::from_bits(b.0[i]), f64::from_bits(c.0[i]))
                .to_bits()
        };
        Lanes([lane(0), lane(1)])
    }
}
