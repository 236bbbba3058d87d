//! Factorial by plain recursion, with the depth checked up front.

use super::EngineError;

/// Largest n with n! ≤ u64::MAX.
pub const MAX_FACTORIAL: u32 = 20;

/// `max_depth` is clamped to `MAX_FACTORIAL`.
pub fn factorial(n: u32, max_depth: u32) -> Result<u64, EngineError> {
    let max = max_depth.min(MAX_FACTORIAL);
    if n > max {
        return Err(EngineError::RecursionDepthExceeded { requested: u64::from(n), max });
    }
    Ok(recurse(u64::from(n)))
}

fn recurse(n: u64) -> u64 {
    if n == 0 { 1 } else { n * recurse(n - 1) }
}
