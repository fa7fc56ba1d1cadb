#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(samples) = quantile_checker::fuzzing::decode_response_input(input) {
            debug_assert!(samples.values().iter().all(|value| value.is_finite()));
        }
    }
});
