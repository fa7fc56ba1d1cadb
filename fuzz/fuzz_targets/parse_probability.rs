#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(probability) = quantile_checker::fuzzing::parse_probability_input(input) {
            let value = probability.get();
            debug_assert!(value.is_finite());
            debug_assert!((0.0..=1.0).contains(&value));
        }
    }
});
