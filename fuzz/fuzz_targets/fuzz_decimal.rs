#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::{BigInt, BigUint};
use num_traits::One;

use fibnum_core::{FixedBigInt, DECIMAL_CAPACITY};

fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }
    let mut limbs = [0u32; 8];
    for (i, limb) in limbs.iter_mut().enumerate() {
        *limb = u32::from_le_bytes([
            data[i * 4],
            data[i * 4 + 1],
            data[i * 4 + 2],
            data[i * 4 + 3],
        ]);
    }
    let value = FixedBigInt::from_limbs(limbs);

    let mut expected = BigInt::from(BigUint::from_bytes_le(&value.to_le_bytes()));
    if value.is_negative() {
        expected -= BigInt::one() << 256;
    }
    let rendered = value
        .to_decimal(DECIMAL_CAPACITY)
        .expect("full capacity fits every value");
    assert_eq!(rendered, expected.to_string());
});
