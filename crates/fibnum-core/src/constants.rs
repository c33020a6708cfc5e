//! Constants for the fixed-width representation, rendering, and index bounds.

/// Number of 32-bit limbs in a `FixedBigInt`.
pub const LIMBS: usize = 8;

/// Bits per limb.
pub const LIMB_BITS: usize = 32;

/// Total width of a `FixedBigInt` in bits.
pub const BIGNUM_BITS: usize = LIMBS * LIMB_BITS;

/// Total width of a `FixedBigInt` in bytes (raw serialized size).
pub const BIGNUM_BYTES: usize = BIGNUM_BITS / 8;

/// Digits per decimal rendering group.
pub const DECIMAL_GROUP_DIGITS: usize = 9;

/// Base of one decimal rendering group (10^9, the largest power of ten
/// fitting a single limb).
pub const DECIMAL_GROUP_BASE: u32 = 1_000_000_000;

/// Smallest buffer capacity the decimal renderer accepts: one 9-digit
/// group plus a terminator slot.
pub const MIN_DECIMAL_CAPACITY: usize = 10;

/// Buffer capacity that fits the decimal expansion of any 256-bit value:
/// nine 9-digit groups, a sign, and the terminator slot, with slack.
pub const DECIMAL_CAPACITY: usize = 96;

/// Largest index for which F(k) fits the signed 256-bit type.
/// F(368) is 255 bits wide; F(369) wraps.
pub const MAX_BIGNUM_INDEX: u64 = 368;

/// Largest index for which F(k) fits a signed 64-bit integer.
/// F(92) = 7,540,113,804,746,346,429; F(93) overflows `i64`.
pub const MAX_NATIVE_INDEX: u64 = 92;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Requested index exceeds the selected variant's bound.
    pub const ERROR_RANGE: i32 = 2;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limb_geometry() {
        assert_eq!(BIGNUM_BITS, 256);
        assert_eq!(BIGNUM_BYTES, 32);
    }

    #[test]
    fn decimal_capacity_fits_widest_value() {
        // 2^255 has 77 decimal digits; nine groups of nine plus sign fit.
        let groups = 77usize.div_ceil(DECIMAL_GROUP_DIGITS);
        assert!(DECIMAL_CAPACITY >= groups * DECIMAL_GROUP_DIGITS + 2);
    }
}
