#![cfg_attr(feature = "portable-simd", feature(portable_simd))]

// 라이브러리의 각 모듈을 선언합니다.
pub mod core;
pub mod ffi;
pub mod hal;
pub mod mont;
pub mod serialization;

// --- Public API ---
pub use crate::core::{
    BigInt, BigInt256, BigInt256Wide, BigInt261, BigInt270, BigIntF255, FieldPreset, HexError,
    MontParams, UnresolvedF255,
};
pub use crate::ffi::MontAlgorithm;
pub use crate::hal::{DefaultAlu, ScalarAlu, VectorAlu};
pub use crate::mont::{
    bm17_non_simd_mont_mul, bm17_simd_mont_mul, chain, chain_hex, mont_mul_9x29, mont_mul_9x30,
    mont_mul_cios, mont_mul_cios_f64_simd, Bm17, Bm17Simd, Cios, CiosF64, Delayed, Delayed29,
    Delayed30, MontgomeryMultiplier,
};
