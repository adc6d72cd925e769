//! Limb-splitting and word-packing helpers shared by every limb encoding.

/// Number of 64-bit words in the 256-bit hex payload.
pub const PAYLOAD_WORDS: usize = 4;

/// A trait for splitting a 64-bit accumulator word at a limb boundary.
pub trait LimbSplit: Sized {
    /// Returns the bits at and above position `w` (the carry).
    fn hi_bits(self, w: u32) -> Self;

    /// Returns the lower `w` bits (the limb).
    fn lo_bits(self, w: u32) -> Self;
}

impl LimbSplit for u64 {
    #[inline(always)]
    fn hi_bits(self, w: u32) -> u64 {
        self >> w
    }

    #[inline(always)]
    fn lo_bits(self, w: u32) -> u64 {
        self & limb_mask(w)
    }
}

/// `2^w - 1`
#[inline(always)]
pub const fn limb_mask(w: u32) -> u64 {
    (1u64 << w) - 1
}

/// 256비트 워드 배열에서 `L`개의 `w`비트 limb을 추출합니다.
/// Limbs that start beyond bit 255 are zero.
pub fn limbs_from_words<const L: usize>(words: &[u64; PAYLOAD_WORDS], w: u32) -> [u64; L] {
    let mut limbs = [0u64; L];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let bit = i * w as usize;
        let idx = bit / 64;
        let off = (bit % 64) as u32;
        if idx >= PAYLOAD_WORDS {
            break;
        }
        let mut v = words[idx] >> off;
        if off + w > 64 && idx + 1 < PAYLOAD_WORDS {
            v |= words[idx + 1] << (64 - off);
        }
        *limb = v & limb_mask(w);
    }
    limbs
}

/// Inverse of [`limbs_from_words`]. Bits above 255 are dropped.
pub fn words_from_limbs<const L: usize>(limbs: &[u64; L], w: u32) -> [u64; PAYLOAD_WORDS] {
    let mut words = [0u64; PAYLOAD_WORDS];
    for (i, &limb) in limbs.iter().enumerate() {
        let bit = i * w as usize;
        let idx = bit / 64;
        let off = (bit % 64) as u32;
        if idx >= PAYLOAD_WORDS {
            break;
        }
        words[idx] |= limb << off;
        if off + w > 64 && idx + 1 < PAYLOAD_WORDS {
            words[idx + 1] |= limb >> (64 - off);
        }
    }
    words
}

/// Big-endian bytes -> little-endian 64-bit words.
pub fn words_from_be_bytes(bytes: &[u8; 32]) -> [u64; PAYLOAD_WORDS] {
    let mut words = [0u64; PAYLOAD_WORDS];
    for (i, word) in words.iter_mut().enumerate() {
        let start = 32 - (i + 1) * 8;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&bytes[start..start + 8]);
        *word = u64::from_be_bytes(buf);
    }
    words
}

/// Little-endian 64-bit words -> big-endian bytes.
pub fn be_bytes_from_words(words: &[u64; PAYLOAD_WORDS]) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    for (i, word) in words.iter().enumerate() {
        let start = 32 - (i + 1) * 8;
        bytes[start..start + 8].copy_from_slice(&word.to_be_bytes());
    }
    bytes
}
