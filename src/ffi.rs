//! C ABI. Hex strings in, NUL-terminated hex strings out, `i32` status codes.

use std::ffi::{c_char, CStr};

use tracing::warn;

use crate::core::{FieldPreset, HexError, MontParams, HEX_LEN};
use crate::mont::{chain_hex, Bm17, Bm17Simd, Cios, CiosF64, Delayed29, Delayed30};

pub const MONTMUL_OK: i32 = 0;
pub const MONTMUL_ERR_NULL: i32 = -1;
/// Minimum size of an output buffer: 64 hex digits and the terminating NUL.
pub const MONTMUL_HEX_BUF_LEN: usize = HEX_LEN + 1;

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MontAlgorithm {
    Cios,
    Bm17,
    Bm17Simd,
    CiosF64,
    Mont9x30,
    Mont9x29,
}

impl MontAlgorithm {
    fn chain_hex(&self, params: &MontParams, a: &str, b: &str, iterations: usize) -> Result<String, HexError> {
        match self {
            MontAlgorithm::Cios => chain_hex(&Cios::from_params(params), a, b, iterations),
            MontAlgorithm::Bm17 => chain_hex(&Bm17::from_params(params), a, b, iterations),
            MontAlgorithm::Bm17Simd => chain_hex(&<Bm17Simd>::from_params(params), a, b, iterations),
            MontAlgorithm::CiosF64 => chain_hex(&<CiosF64>::from_params(params), a, b, iterations),
            MontAlgorithm::Mont9x30 => chain_hex(&Delayed30::from_params(params), a, b, iterations),
            MontAlgorithm::Mont9x29 => chain_hex(&Delayed29::from_params(params), a, b, iterations),
        }
    }
}

unsafe fn read_str<'a>(ptr: *const c_char) -> Result<&'a str, i32> {
    if ptr.is_null() {
        return Err(MONTMUL_ERR_NULL);
    }
    let s = unsafe { CStr::from_ptr(ptr) };
    s.to_str().map_err(|e| {
        HexError::InvalidDigit { index: e.valid_up_to(), digit: char::REPLACEMENT_CHARACTER }.code()
    })
}

unsafe fn write_str(out: *mut c_char, s: &str) {
    let bytes = s.as_bytes();
    unsafe {
        std::ptr::copy_nonoverlapping(bytes.as_ptr().cast::<c_char>(), out, bytes.len());
        *out.add(bytes.len()) = 0;
    }
}

/// Runs `iterations` chained Montgomery multiplications modulo `p_hex` and writes the
/// final value to `out`.
///
/// Returns 0 on success, -1 for a null pointer, -2 for a hex string of the wrong
/// length and -3 for an invalid hex digit. With `iterations == 1` this is a single
/// `mont_mul(a, b)`.
///
/// # Safety
/// Input pointers must be NUL-terminated strings and `out` must point to at least
/// [`MONTMUL_HEX_BUF_LEN`] writable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn montmul_chain_hex(
    algorithm: MontAlgorithm,
    p_hex: *const c_char,
    a_hex: *const c_char,
    b_hex: *const c_char,
    iterations: u32,
    out: *mut c_char,
) -> i32 {
    if out.is_null() {
        warn!(?algorithm, "montmul_chain_hex: null output buffer");
        return MONTMUL_ERR_NULL;
    }
    let inputs = unsafe { (read_str(p_hex), read_str(a_hex), read_str(b_hex)) };
    let (p, a, b) = match inputs {
        (Ok(p), Ok(a), Ok(b)) => (p, a, b),
        (Err(code), _, _) | (_, Err(code), _) | (_, _, Err(code)) => {
            warn!(?algorithm, code, "montmul_chain_hex: unreadable input string");
            return code;
        }
    };

    let result = MontParams::from_hex(p).and_then(|params| algorithm.chain_hex(&params, a, b, iterations as usize));
    match result {
        Ok(hex) => {
            unsafe { write_str(out, &hex) };
            MONTMUL_OK
        }
        Err(e) => {
            warn!(?algorithm, error = %e, "montmul_chain_hex failed");
            e.code()
        }
    }
}

/// Writes the modulus of `preset` to `out` as hex.
///
/// # Safety
/// `out` must point to at least [`MONTMUL_HEX_BUF_LEN`] writable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn montmul_preset_modulus_hex(preset: FieldPreset, out: *mut c_char) -> i32 {
    if out.is_null() {
        return MONTMUL_ERR_NULL;
    }
    unsafe { write_str(out, preset.modulus_hex()) };
    MONTMUL_OK
}
