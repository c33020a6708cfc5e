//! Computation results and their serialized forms.

use fibnum_core::{BignumError, FixedBigInt, BIGNUM_BYTES};

/// The value produced by one engine computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// A 256-bit result from one of the bignum variants.
    Bignum(FixedBigInt),
    /// A 64-bit result from one of the native variants.
    Native(i64),
}

impl Output {
    /// Fixed-size raw little-endian byte block: 32 bytes for bignum
    /// results, 8 for native ones.
    #[must_use]
    pub fn to_raw_bytes(&self) -> Vec<u8> {
        match self {
            Output::Bignum(v) => v.to_le_bytes().to_vec(),
            Output::Native(v) => v.to_le_bytes().to_vec(),
        }
    }

    /// Size in bytes of the raw form for this variant.
    #[must_use]
    pub fn raw_len(&self) -> usize {
        match self {
            Output::Bignum(_) => BIGNUM_BYTES,
            Output::Native(_) => 8,
        }
    }

    /// Decimal rendering into a `capacity`-byte buffer. Native results
    /// go through the same renderer as bignum ones, so capacity
    /// semantics are uniform across variants.
    pub fn to_decimal(&self, capacity: usize) -> Result<String, BignumError> {
        match self {
            Output::Bignum(v) => v.to_decimal(capacity),
            Output::Native(v) => FixedBigInt::from_int(*v).to_decimal(capacity),
        }
    }
}
