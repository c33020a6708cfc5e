//! The `Calculator` seam over the bignum Fibonacci variants.
//!
//! Both implementations are pure, bounded functions (a 256-bit value
//! caps every loop), so the trait carries no progress or cancellation
//! plumbing — just the computation and a name for dispatch, logs, and
//! test labels.

use crate::bignum::FixedBigInt;
use crate::fastdoubling;
use crate::naive;

/// A Fibonacci calculator over the fixed-width type.
pub trait Calculator: Send + Sync {
    /// Compute F(k), wrapping modulo 2^256.
    fn calculate(&self, k: u64) -> FixedBigInt;

    /// Name of this algorithm.
    fn name(&self) -> &'static str;
}

/// O(log k) fast-doubling calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastDoubling;

impl Calculator for FastDoubling {
    fn calculate(&self, k: u64) -> FixedBigInt {
        fastdoubling::fibonacci(k)
    }

    fn name(&self) -> &'static str {
        "FastDoubling"
    }
}

/// O(k) additive-recurrence calculator, the reference baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Naive;

impl Calculator for Naive {
    fn calculate(&self, k: u64) -> FixedBigInt {
        naive::fibonacci(k)
    }

    fn name(&self) -> &'static str {
        "Naive"
    }
}
