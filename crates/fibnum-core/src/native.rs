//! Plain 64-bit Fibonacci variants.
//!
//! Performance baselines for the bignum path. `i64` holds exact values
//! up to F(92); beyond that the wrapping arithmetic keeps both variants
//! defined (and still in agreement with each other), just no longer the
//! true Fibonacci value.

/// Compute F(k) in `i64` by fast doubling, wrapping on overflow.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn fast_doubling64(k: u64) -> i64 {
    if k <= 1 {
        return k as i64;
    }
    let mut a = 0i64;
    let mut b = 1i64;
    let top = 63 - k.leading_zeros();
    for bit in (0..=top).rev() {
        let t = a.wrapping_mul(b.wrapping_shl(1).wrapping_sub(a));
        b = b.wrapping_mul(b).wrapping_add(a.wrapping_mul(a));
        a = t;
        if (k >> bit) & 1 == 1 {
            let t = a.wrapping_add(b);
            a = b;
            b = t;
        }
    }
    a
}

/// Compute F(k) in `i64` by the additive recurrence, wrapping on overflow.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn naive64(k: u64) -> i64 {
    if k <= 1 {
        return k as i64;
    }
    let mut a = 0i64;
    let mut b = 1i64;
    let mut result = 0i64;
    for _ in 1..k {
        result = a.wrapping_add(b);
        a = b;
        b = result;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_cases() {
        for f in [fast_doubling64, naive64] {
            assert_eq!(f(0), 0);
            assert_eq!(f(1), 1);
            assert_eq!(f(2), 1);
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(fast_doubling64(10), 55);
        assert_eq!(naive64(10), 55);
        assert_eq!(fast_doubling64(20), 6765);
        assert_eq!(naive64(20), 6765);
        assert_eq!(fast_doubling64(92), 7_540_113_804_746_346_429);
        assert_eq!(naive64(92), 7_540_113_804_746_346_429);
    }

    #[test]
    fn variants_agree_past_overflow() {
        for k in 0..=120u64 {
            assert_eq!(fast_doubling64(k), naive64(k), "mismatch at k={k}");
        }
    }
}
