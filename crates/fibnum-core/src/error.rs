//! Error type for the arithmetic core.

/// Errors reported by `FixedBigInt` operations.
///
/// Overflow is never an error: every arithmetic primitive wraps modulo
/// 2^256 by definition. Only decimal rendering and the `checked_*`
/// division wrappers have failure modes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BignumError {
    /// Decimal rendering was asked to fit a value into a buffer too small
    /// to hold its full expansion.
    #[error("decimal buffer of {capacity} bytes cannot hold the full value")]
    Capacity {
        /// The capacity that was requested.
        capacity: usize,
    },

    /// Division with a zero divisor, reported only by `checked_div` and
    /// `checked_divrem`. The unchecked primitives run the restoring loop
    /// to completion instead.
    #[error("division by zero")]
    ZeroDivisor,
}
