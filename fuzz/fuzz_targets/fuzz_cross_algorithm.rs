#![no_main]

use libfuzzer_sys::fuzz_target;

use fibnum_core::{fastdoubling, naive};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // Use the first two bytes as k, capped to keep the naive loop cheap
    let k = u64::from(u16::from_le_bytes([data[0], data[1]])) % 2048;

    let fast = fastdoubling::fibonacci(k);
    let slow = naive::fibonacci(k);
    assert_eq!(fast, slow, "FastDoubling != Naive at k={k}");
});
