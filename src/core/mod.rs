pub mod bigint;
pub use crate::core::bigint::{BigInt, BigInt256, BigInt256Wide, BigInt261, BigInt270};

pub mod bigintf;
pub use crate::core::bigintf::{BigIntF255, UnresolvedF255};

pub mod params;
pub use crate::core::params::{FieldPreset, MontParams};

pub mod random;
pub mod wide_arith;

use thiserror::Error;

// --- 16진수 코덱 파라미터 ---
/// Every representation serializes to the same 256-bit big-endian payload.
pub const HEX_LEN: usize = 64;
pub const PAYLOAD_BYTES: usize = HEX_LEN / 2;

/// Errors reported by the hex codecs. Multipliers never fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    #[error("invalid hex length: expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("invalid hex digit {digit:?} at index {index}")]
    InvalidDigit { index: usize, digit: char },
}

impl HexError {
    /// Status code used across the C ABI.
    pub fn code(&self) -> i32 {
        match self {
            HexError::InvalidLength { .. } => -2,
            HexError::InvalidDigit { .. } => -3,
        }
    }
}

/// Parses a 64-character big-endian hex string into little-endian 64-bit words.
pub(crate) fn parse_hex_payload(s: &str) -> Result<[u64; wide_arith::PAYLOAD_WORDS], HexError> {
    if s.len() != HEX_LEN {
        return Err(HexError::InvalidLength { expected: HEX_LEN, actual: s.len() });
    }
    let mut bytes = [0u8; PAYLOAD_BYTES];
    hex::decode_to_slice(s, &mut bytes).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, index } => HexError::InvalidDigit { index, digit: c },
        // 길이는 위에서 이미 검사했으므로 여기에 도달하지 않습니다.
        _ => HexError::InvalidLength { expected: HEX_LEN, actual: s.len() },
    })?;
    Ok(wide_arith::words_from_be_bytes(&bytes))
}

/// Lowercase, zero-padded, big-endian.
pub(crate) fn format_hex_payload(words: &[u64; wide_arith::PAYLOAD_WORDS]) -> String {
    hex::encode(wide_arith::be_bytes_from_words(words))
}
