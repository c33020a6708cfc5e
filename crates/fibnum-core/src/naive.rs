//! Naive linear-recurrence Fibonacci and a lazy sequence iterator.
//!
//! The O(k) additive recurrence is the reference baseline the fast
//! doubling variant is validated against: both are built from the same
//! wrapping primitives, so they agree bit-exactly for every index,
//! including past the wrap boundary at k = 368.

use crate::bignum::FixedBigInt;

/// Compute F(k) by the additive recurrence.
#[must_use]
pub fn fibonacci(k: u64) -> FixedBigInt {
    if k <= 1 {
        #[allow(clippy::cast_possible_wrap)]
        return FixedBigInt::from_int(k as i64);
    }
    let mut a = FixedBigInt::from_int(0);
    let mut b = FixedBigInt::from_int(1);
    let mut result = FixedBigInt::zero();
    for _ in 1..k {
        result = a.add(&b);
        a = b;
        b = result;
    }
    result
}

/// Lazy iterator over the wrapping Fibonacci sequence.
///
/// Yields `(index, F(index))` pairs starting from F(0); past F(368) the
/// values are the wrapped 256-bit residues.
///
/// # Example
/// ```
/// use fibnum_core::naive::FibSequence;
///
/// let firsts: Vec<String> =
///     FibSequence::new().take(7).map(|(_, v)| v.to_string()).collect();
/// assert_eq!(firsts, ["0", "1", "1", "2", "3", "5", "8"]);
/// ```
pub struct FibSequence {
    a: FixedBigInt,
    b: FixedBigInt,
    index: u64,
}

impl FibSequence {
    #[must_use]
    pub fn new() -> Self {
        Self {
            a: FixedBigInt::from_int(0),
            b: FixedBigInt::from_int(1),
            index: 0,
        }
    }
}

impl Default for FibSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibSequence {
    type Item = (u64, FixedBigInt);

    fn next(&mut self) -> Option<Self::Item> {
        let val = self.a;
        let idx = self.index;
        let next = self.a.add(&self.b);
        self.a = self.b;
        self.b = next;
        self.index += 1;
        Some((idx, val))
    }
}
