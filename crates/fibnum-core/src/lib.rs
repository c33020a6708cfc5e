//! # fibnum-core
//!
//! Fixed-width 256-bit two's-complement signed integer arithmetic and
//! the Fibonacci algorithms built on it: fast doubling and the naive
//! recurrence over [`FixedBigInt`], plus plain 64-bit variants for
//! comparison. All arithmetic wraps modulo its width; nothing here
//! blocks, allocates per-operation, or holds shared state.

pub mod bignum;
pub mod calculator;
pub mod constants;
pub mod decimal;
pub mod error;
pub mod fastdoubling;
pub mod naive;
pub mod native;

// Re-exports
pub use bignum::FixedBigInt;
pub use calculator::{Calculator, FastDoubling, Naive};
pub use constants::{
    exit_codes, BIGNUM_BYTES, DECIMAL_CAPACITY, MAX_BIGNUM_INDEX, MAX_NATIVE_INDEX,
};
pub use error::BignumError;

/// Compute F(k) using the fast doubling algorithm.
///
/// Convenience entry point for simple use; the result wraps modulo
/// 2^256 past k = 368.
///
/// # Example
/// ```
/// assert_eq!(fibnum_core::fibonacci(10).to_string(), "55");
/// assert_eq!(fibnum_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(k: u64) -> FixedBigInt {
    fastdoubling::fibonacci(k)
}
