//! Chained multiplication harness: `(x, y) <- (y, mont_mul(x, y))`, returning `y`.
//!
//! Every output feeds the next call, so a single wrong limb anywhere in the chain
//! shows up in the final value. Used by the tests, the benches and the C ABI.

use tracing::debug;

use super::MontgomeryMultiplier;
use crate::core::HexError;

pub fn chain<M: MontgomeryMultiplier>(m: &M, a: M::Int, b: M::Int, iterations: usize) -> M::Int {
    let _span = tracing::debug_span!("mont_chain", algorithm = M::NAME, iterations).entered();
    let (mut x, mut y) = (a, b);
    for _ in 0..iterations {
        let z = m.mont_mul(&x, &y);
        x = y;
        y = z;
    }
    debug!(result = %y, "chain finished");
    y
}

/// [`chain`] on hex operands, returning the final value as hex.
pub fn chain_hex<M: MontgomeryMultiplier>(
    m: &M,
    a_hex: &str,
    b_hex: &str,
    iterations: usize,
) -> Result<String, HexError> {
    let a: M::Int = a_hex.parse()?;
    let b: M::Int = b_hex.parse()?;
    Ok(chain(m, a, b, iterations).to_string())
}
