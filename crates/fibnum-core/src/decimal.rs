//! Decimal rendering of `FixedBigInt` values into a bounded buffer.
//!
//! The renderer peels 9-digit groups off the magnitude by repeated
//! divide-and-remainder by 10^9, writing each group zero-padded into a
//! simulated fixed-capacity buffer from the end backward. Rendering
//! never produces a truncated numeral: a buffer that cannot hold the
//! full expansion yields [`BignumError::Capacity`].

use std::fmt;

use crate::bignum::FixedBigInt;
use crate::constants::{
    DECIMAL_CAPACITY, DECIMAL_GROUP_BASE, DECIMAL_GROUP_DIGITS, MIN_DECIMAL_CAPACITY,
};
use crate::error::BignumError;

/// Render the value into a buffer of `capacity` bytes, one of which is
/// reserved for a terminator.
///
/// Groups of nine digits are written at offsets `capacity - 10`,
/// `capacity - 19`, ... until the magnitude is exhausted; leading zeros
/// of the topmost group are then trimmed (keeping at least one digit)
/// and a `-` is prefixed for negative values.
///
/// # Errors
///
/// [`BignumError::Capacity`] if `capacity` is below
/// [`MIN_DECIMAL_CAPACITY`], if the group slots run out before the
/// magnitude does, or if a negative value's sign has no byte left.
#[allow(clippy::cast_possible_wrap)]
pub fn render(value: &FixedBigInt, capacity: usize) -> Result<String, BignumError> {
    if capacity < MIN_DECIMAL_CAPACITY {
        return Err(BignumError::Capacity { capacity });
    }

    let base = FixedBigInt::from_int(i64::from(DECIMAL_GROUP_BASE));
    let mut quo = value.abs();
    // usable region is capacity - 1 bytes; the last byte is the terminator slot
    let mut buf = vec![0u8; capacity - 1];

    let mut offset = capacity as isize - 1 - DECIMAL_GROUP_DIGITS as isize;
    let mut exhausted = false;
    while offset >= 0 {
        // quo is a magnitude here (abs of the previous step), so divide
        // unsigned; the remainder is below 10^9 and fits the bottom limb.
        let (q, r) = quo.divrem_magnitude(&base);
        quo = q;
        write_group(&mut buf, offset.unsigned_abs(), r.limbs()[0]);
        if quo.is_zero() {
            exhausted = true;
            break;
        }
        offset -= DECIMAL_GROUP_DIGITS as isize;
    }

    if !exhausted {
        return Err(BignumError::Capacity { capacity });
    }

    let mut start = offset.unsigned_abs();
    let last = capacity - 2;
    while buf[start] == b'0' && start < last {
        start += 1;
    }
    if value.is_negative() {
        if start == 0 {
            // the first significant digit already sits at offset 0;
            // there is no byte left for the sign
            return Err(BignumError::Capacity { capacity });
        }
        start -= 1;
        buf[start] = b'-';
    }

    Ok(buf[start..].iter().map(|&b| char::from(b)).collect())
}

/// Write one zero-padded 9-digit group at `offset`.
#[allow(clippy::cast_possible_truncation)]
fn write_group(buf: &mut [u8], offset: usize, mut group: u32) {
    for slot in buf[offset..offset + DECIMAL_GROUP_DIGITS].iter_mut().rev() {
        *slot = b'0' + (group % 10) as u8;
        group /= 10;
    }
}

impl FixedBigInt {
    /// Render the value in decimal into a `capacity`-byte buffer.
    /// See [`render`].
    pub fn to_decimal(&self, capacity: usize) -> Result<String, BignumError> {
        render(self, capacity)
    }
}

impl fmt::Display for FixedBigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // DECIMAL_CAPACITY fits every 256-bit value
        let s = render(self, DECIMAL_CAPACITY).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}
