#![no_main]

use libfuzzer_sys::fuzz_target;

use fibnum_core::FixedBigInt;

fuzz_target!(|data: &[u8]| {
    if data.len() < 64 {
        return;
    }
    let mut limbs = [[0u32; 8]; 2];
    for (which, half) in limbs.iter_mut().enumerate() {
        for (i, limb) in half.iter_mut().enumerate() {
            let at = which * 32 + i * 4;
            *limb = u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]]);
        }
    }
    let a = FixedBigInt::from_limbs(limbs[0]);
    let b = FixedBigInt::from_limbs(limbs[1]);
    if b.is_zero() {
        return;
    }

    let (q, r) = a.divrem(&b);
    assert_eq!(q.mul(&b).add(&r), a, "q*b + r != a");
    // truncating remainder carries the dividend's sign (or is zero)
    assert!(r.is_zero() || r.is_negative() == a.is_negative());
});
