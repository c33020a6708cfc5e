//! Fixed-width 256-bit signed integer arithmetic.
//!
//! `FixedBigInt` stores eight 32-bit limbs, least significant first, in
//! two's complement; the top limb carries the sign bit. Every operation
//! is total and wraps modulo 2^256 on overflow, matching native
//! signed-integer wraparound. Operands are read-only and results are
//! returned by value, so an output may freely alias an input at the
//! call site.

use crate::constants::LIMBS;
use crate::error::BignumError;

/// A 256-bit signed integer in two's complement.
///
/// # Example
/// ```
/// use fibnum_core::FixedBigInt;
///
/// let a = FixedBigInt::from_int(-5);
/// let b = FixedBigInt::from_int(7);
/// assert_eq!(a.mul(&b), FixedBigInt::from_int(-35));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FixedBigInt {
    limbs: [u32; LIMBS],
}

impl FixedBigInt {
    /// The smallest representable value, -2^255. Note `-MIN == MIN`.
    pub const MIN: Self = {
        let mut limbs = [0u32; LIMBS];
        limbs[LIMBS - 1] = 0x8000_0000;
        Self { limbs }
    };

    /// The largest representable value, 2^255 - 1.
    pub const MAX: Self = {
        let mut limbs = [u32::MAX; LIMBS];
        limbs[LIMBS - 1] = 0x7FFF_FFFF;
        Self { limbs }
    };

    /// The all-limbs-zero value.
    #[must_use]
    pub const fn zero() -> Self {
        Self { limbs: [0; LIMBS] }
    }

    /// Build a value from a native signed integer, sign-extending across
    /// the upper limbs.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_int(i: i64) -> Self {
        let fill = if i < 0 { u32::MAX } else { 0 };
        let mut limbs = [fill; LIMBS];
        limbs[0] = i as u32;
        limbs[1] = (i >> 32) as u32;
        Self { limbs }
    }

    /// Build a value directly from its limbs, least significant first.
    #[must_use]
    pub const fn from_limbs(limbs: [u32; LIMBS]) -> Self {
        Self { limbs }
    }

    /// The limbs, least significant first.
    #[must_use]
    pub const fn limbs(&self) -> &[u32; LIMBS] {
        &self.limbs
    }

    /// Raw little-endian byte representation (32 bytes).
    #[must_use]
    pub fn to_le_bytes(&self) -> [u8; LIMBS * 4] {
        let mut bytes = [0u8; LIMBS * 4];
        for (i, limb) in self.limbs.iter().enumerate() {
            bytes[i * 4..i * 4 + 4].copy_from_slice(&limb.to_le_bytes());
        }
        bytes
    }

    /// True iff every limb is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&l| l == 0)
    }

    /// True iff the sign bit of the top limb is set.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn is_negative(&self) -> bool {
        (self.limbs[LIMBS - 1] as i32) < 0
    }

    /// `self + rhs`, wrapping modulo 2^256.
    ///
    /// Ripple-carry over all eight limbs: each limb pair is widened to 64
    /// bits together with the incoming carry; the low 32 bits form the
    /// result limb and bit 32 is the carry out. Two's-complement addition
    /// is representation-agnostic, so the signed top limb joins the same
    /// chain.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn add(&self, rhs: &Self) -> Self {
        let mut limbs = [0u32; LIMBS];
        let mut carry = 0u64;
        for i in 0..LIMBS {
            let sum = u64::from(self.limbs[i]) + u64::from(rhs.limbs[i]) + carry;
            limbs[i] = sum as u32;
            carry = sum >> 32;
        }
        Self { limbs }
    }

    /// `self - rhs`, wrapping modulo 2^256.
    ///
    /// One pass of `a + !b + 1`: the same ripple-carry chain as `add`,
    /// seeded with a carry-in of 1 over the one's complement of `rhs`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn sub(&self, rhs: &Self) -> Self {
        let mut limbs = [0u32; LIMBS];
        let mut carry = 1u64;
        for i in 0..LIMBS {
            let sum = u64::from(self.limbs[i]) + u64::from(!rhs.limbs[i]) + carry;
            limbs[i] = sum as u32;
            carry = sum >> 32;
        }
        Self { limbs }
    }

    /// `-self`, computed as `!self + 1`. Wraps at `MIN`: `-MIN == MIN`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn neg(&self) -> Self {
        let mut limbs = [0u32; LIMBS];
        let mut carry = 1u64;
        for i in 0..LIMBS {
            let sum = u64::from(!self.limbs[i]) + carry;
            limbs[i] = sum as u32;
            carry = sum >> 32;
        }
        Self { limbs }
    }

    /// `|self|`, via conditional negation with an all-ones-or-zero mask.
    ///
    /// Each limb is complemented by xor with the mask and the mask's low
    /// bit is added back through the full carry chain, so the result is
    /// bit-identical to `neg` for every negative input. `abs(MIN) == MIN`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn abs(&self) -> Self {
        let mask = if self.is_negative() { u32::MAX } else { 0 };
        let mut limbs = [0u32; LIMBS];
        let mut carry = u64::from(mask & 1);
        for i in 0..LIMBS {
            let sum = u64::from(self.limbs[i] ^ mask) + carry;
            limbs[i] = sum as u32;
            carry = sum >> 32;
        }
        Self { limbs }
    }

    /// `self << 1` with `lsb` (low bit only) shifted into bit 0.
    ///
    /// The bit shifted out of each limb becomes the incoming bit of the
    /// next; the top limb's outgoing bit is discarded (wrap).
    #[must_use]
    pub fn shl1(&self, lsb: u32) -> Self {
        let mut limbs = [0u32; LIMBS];
        let mut carry = lsb & 1;
        for i in 0..LIMBS {
            let out = self.limbs[i] >> 31;
            limbs[i] = (self.limbs[i] << 1) | carry;
            carry = out;
        }
        Self { limbs }
    }

    /// `self >> 1` with `msb` (low bit only) shifted into bit 255.
    ///
    /// Processed from the top limb down; the caller chooses the incoming
    /// top bit, so passing the current sign bit gives an arithmetic shift
    /// and passing 0 a logical one.
    #[must_use]
    pub fn shr1(&self, msb: u32) -> Self {
        let mut limbs = [0u32; LIMBS];
        let mut carry = msb & 1;
        for i in (0..LIMBS).rev() {
            let out = self.limbs[i] & 1;
            limbs[i] = (self.limbs[i] >> 1) | (carry << 31);
            carry = out;
        }
        Self { limbs }
    }

    /// A 64-bit value placed at limb offset `unit`, i.e. `u * 2^(32*unit)`.
    /// Halves that land at or past limb 8 are dropped (wrap).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    fn from_shifted(u: u64, unit: usize) -> Self {
        let mut limbs = [0u32; LIMBS];
        if unit < LIMBS {
            limbs[unit] = u as u32;
            if unit + 1 < LIMBS {
                limbs[unit + 1] = (u >> 32) as u32;
            }
        }
        Self { limbs }
    }

    /// `self * rhs`, wrapping modulo 2^256.
    ///
    /// Sign of the result is the xor of the operand signs; magnitudes are
    /// multiplied schoolbook-style: every limb pair with `i + j < 8`
    /// contributes a 64-bit partial product shifted to limb offset
    /// `i + j`, accumulated by repeated `add`. Partials at offset 8 and
    /// beyond fall outside the width and are discarded.
    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        let negative = self.is_negative() != rhs.is_negative();
        let a = self.abs();
        let b = rhs.abs();
        let mut acc = Self::zero();
        for i in 0..LIMBS {
            for j in 0..LIMBS - i {
                let partial = u64::from(a.limbs[i]) * u64::from(b.limbs[j]);
                acc = acc.add(&Self::from_shifted(partial, i + j));
            }
        }
        if negative {
            acc.neg()
        } else {
            acc
        }
    }

    /// Bit-serial restoring division of magnitudes.
    ///
    /// `quo` starts as the dividend and doubles as the emerging quotient:
    /// each of the 256 steps shifts the remainder/quotient pair left one
    /// bit (the dividend bit leaving `quo` enters `rem`), tentatively
    /// subtracts the divisor from the remainder, and keeps the result
    /// with a quotient bit of 1 if it stayed non-negative, otherwise
    /// restores and records 0. The initial extra shift pulls in the
    /// dividend's top bit, so the full 256-bit magnitude (including
    /// `abs(MIN)` = 2^255) divides as an unsigned quantity; the final
    /// right shift of the remainder undoes it.
    ///
    /// Inputs are treated as unsigned magnitudes; callers apply signs.
    pub(crate) fn divrem_magnitude(&self, divisor: &Self) -> (Self, Self) {
        let mut quo = *self;
        let mut rem = Self::zero();

        let mut carry = u32::from(quo.is_negative());
        quo = quo.shl1(0);
        rem = rem.shl1(carry);

        for _ in 0..(LIMBS * 32) {
            let trial = rem.sub(divisor);
            if !trial.is_negative() {
                rem = trial;
                carry = u32::from(quo.is_negative());
                quo = quo.shl1(1);
            } else {
                carry = u32::from(quo.is_negative());
                quo = quo.shl1(0);
            }
            rem = rem.shl1(carry);
        }

        (quo, rem.shr1(0))
    }

    /// Truncating division and remainder.
    ///
    /// Quotient sign is the xor of operand signs; the remainder takes the
    /// dividend's sign, so `q*rhs + r == self` whenever `rhs` is nonzero.
    /// A zero divisor is not detected: the restoring loop runs to
    /// completion and yields the all-ones magnitude quotient for every
    /// magnitude below 2^255 (each trial subtraction of zero succeeds).
    /// The lone exception is `MIN`, whose 2^255 magnitude sets the
    /// remainder's sign bit on the final step and drops the last
    /// quotient bit. Callers needing an error must use
    /// [`checked_divrem`](Self::checked_divrem).
    #[must_use]
    pub fn divrem(&self, rhs: &Self) -> (Self, Self) {
        let negative = self.is_negative() != rhs.is_negative();
        let (q, r) = self.abs().divrem_magnitude(&rhs.abs());
        let q = if negative { q.neg() } else { q };
        let r = if self.is_negative() { r.neg() } else { r };
        (q, r)
    }

    /// Truncating quotient. See [`divrem`](Self::divrem) for the zero
    /// divisor caveat.
    #[must_use]
    pub fn div(&self, rhs: &Self) -> Self {
        self.divrem(rhs).0
    }

    /// Truncating remainder, with the dividend's sign.
    #[must_use]
    pub fn rem(&self, rhs: &Self) -> Self {
        self.divrem(rhs).1
    }

    /// Division that reports a zero divisor instead of running the
    /// restoring loop against it.
    pub fn checked_divrem(&self, rhs: &Self) -> Result<(Self, Self), BignumError> {
        if rhs.is_zero() {
            return Err(BignumError::ZeroDivisor);
        }
        Ok(self.divrem(rhs))
    }

    /// Checked truncating quotient.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, BignumError> {
        self.checked_divrem(rhs).map(|(q, _)| q)
    }
}

impl From<i64> for FixedBigInt {
    fn from(i: i64) -> Self {
        Self::from_int(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fx(i: i64) -> FixedBigInt {
        FixedBigInt::from_int(i)
    }

    #[test]
    fn zero_is_all_limbs_zero() {
        assert_eq!(FixedBigInt::zero().limbs(), &[0u32; LIMBS]);
        assert!(FixedBigInt::zero().is_zero());
        assert!(!FixedBigInt::zero().is_negative());
    }

    #[test]
    fn from_int_sign_extends() {
        let neg = fx(-1);
        assert_eq!(neg.limbs(), &[u32::MAX; LIMBS]);
        assert!(neg.is_negative());

        let pos = fx(1);
        assert_eq!(pos.limbs()[0], 1);
        assert_eq!(&pos.limbs()[1..], &[0u32; LIMBS - 1]);

        let wide = fx(-0x1_0000_0000);
        assert_eq!(wide.limbs()[0], 0);
        assert_eq!(wide.limbs()[1], u32::MAX);
        assert_eq!(&wide.limbs()[2..], &[u32::MAX; LIMBS - 2]);
    }

    #[test]
    fn add_carries_across_limbs() {
        let a = FixedBigInt::from_limbs([u32::MAX, 0, 0, 0, 0, 0, 0, 0]);
        let sum = a.add(&fx(1));
        assert_eq!(sum.limbs(), &[0, 1, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn add_identity_and_inverse() {
        for i in [-123_456_789_i64, -1, 0, 1, i64::MAX, i64::MIN] {
            let a = fx(i);
            assert_eq!(a.add(&FixedBigInt::zero()), a);
            assert!(a.add(&a.neg()).is_zero());
        }
    }

    #[test]
    fn sub_matches_add_neg() {
        let a = fx(1_000_000_007);
        let b = fx(-987_654_321);
        assert_eq!(a.sub(&b), a.add(&b.neg()));
        assert_eq!(a.sub(&a), FixedBigInt::zero());
    }

    #[test]
    fn neg_is_involutive_except_min() {
        let a = fx(42);
        assert_eq!(a.neg().neg(), a);
        assert_eq!(FixedBigInt::MIN.neg(), FixedBigInt::MIN);
    }

    #[test]
    fn max_plus_one_wraps_to_min() {
        assert_eq!(FixedBigInt::MAX.add(&fx(1)), FixedBigInt::MIN);
    }

    #[test]
    fn abs_matches_neg_for_negatives() {
        let cases = [
            fx(-1),
            fx(-0x1_0000_0000), // zero bottom limb
            FixedBigInt::from_limbs([0, 0, 0, 0, 1, 0, 0, u32::MAX]),
            FixedBigInt::MIN,
        ];
        for a in cases {
            assert!(a.is_negative());
            assert_eq!(a.abs(), a.neg());
            assert_eq!(a.abs().abs(), a.abs());
        }
        let p = fx(77);
        assert_eq!(p.abs(), p);
    }

    #[test]
    fn shl1_propagates_carries() {
        let a = FixedBigInt::from_limbs([0x8000_0000, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(a.shl1(0).limbs(), &[0, 1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(fx(3).shl1(1), fx(7));
    }

    #[test]
    fn shr1_propagates_carries() {
        let a = FixedBigInt::from_limbs([0, 1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(a.shr1(0).limbs(), &[0x8000_0000, 0, 0, 0, 0, 0, 0, 0]);
        // arithmetic shift of a negative value keeps the sign when the
        // caller feeds the sign bit back in
        let neg = fx(-4);
        assert_eq!(neg.shr1(1), fx(-2));
    }

    #[test]
    fn mul_signs_and_magnitude() {
        assert_eq!(fx(-5).mul(&fx(7)), fx(-35));
        assert_eq!(fx(5).mul(&fx(-7)), fx(-35));
        assert_eq!(fx(-5).mul(&fx(-7)), fx(35));
        assert_eq!(fx(0).mul(&fx(123)), FixedBigInt::zero());
    }

    #[test]
    fn mul_wide_operands() {
        // (2^32 + 1)^2 = 2^64 + 2^33 + 1
        let a = FixedBigInt::from_limbs([1, 1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(a.mul(&a).limbs(), &[1, 2, 1, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn mul_wraps_past_width() {
        // 2^224 * 2^32 = 2^256 == 0
        let a = FixedBigInt::from_limbs([0, 0, 0, 0, 0, 0, 0, 1]);
        let b = FixedBigInt::from_limbs([0, 1, 0, 0, 0, 0, 0, 0]);
        assert!(a.mul(&b).is_zero());
    }

    #[test]
    fn div_signs_and_magnitude() {
        assert_eq!(fx(-35).div(&fx(7)), fx(-5));
        assert_eq!(fx(35).div(&fx(-7)), fx(-5));
        assert_eq!(fx(-35).div(&fx(-7)), fx(5));
        assert_eq!(fx(36).div(&fx(7)), fx(5));
    }

    #[test]
    fn divrem_reconstructs_dividend() {
        let cases = [(37i64, 10i64), (-37, 10), (37, -10), (-37, -10), (0, 3)];
        for (a, b) in cases {
            let (q, r) = fx(a).divrem(&fx(b));
            assert_eq!(q, fx(a / b));
            assert_eq!(r, fx(a % b));
            assert_eq!(q.mul(&fx(b)).add(&r), fx(a));
        }
    }

    #[test]
    fn divrem_handles_min_dividend() {
        let (q, r) = FixedBigInt::MIN.divrem(&fx(2));
        // -2^255 / 2 = -2^254 exactly
        let mut expected = [0u32; LIMBS];
        expected[LIMBS - 1] = 0x4000_0000;
        assert_eq!(q, FixedBigInt::from_limbs(expected).neg());
        assert!(r.is_zero());
    }

    #[test]
    fn zero_divisor_emergent_value() {
        // With a zero divisor every restoring step keeps its quotient
        // bit, so the magnitude quotient is all ones — except for MIN,
        // whose 2^255 magnitude flips the remainder's sign bit on the
        // final step and loses the last quotient bit.
        assert_eq!(fx(5).div(&FixedBigInt::zero()), fx(-1));
        assert_eq!(fx(-5).div(&FixedBigInt::zero()), fx(1));
        assert_eq!(FixedBigInt::MAX.div(&FixedBigInt::zero()), fx(-1));
        assert_eq!(FixedBigInt::MIN.div(&FixedBigInt::zero()), fx(2));
    }

    #[test]
    fn checked_div_rejects_zero_divisor() {
        assert_eq!(
            fx(5).checked_div(&FixedBigInt::zero()),
            Err(crate::error::BignumError::ZeroDivisor)
        );
        assert_eq!(fx(35).checked_div(&fx(7)), Ok(fx(5)));
    }

    #[test]
    fn le_bytes_layout() {
        let bytes = fx(1).to_le_bytes();
        assert_eq!(bytes[0], 1);
        assert!(bytes[1..].iter().all(|&b| b == 0));
        assert_eq!(fx(-1).to_le_bytes(), [0xFF; 32]);
    }
}
