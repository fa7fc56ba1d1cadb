#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(args) = quantile_checker::fuzzing::apply_config_from_toml(input) {
            debug_assert!((0.0..=1.0).contains(&args.quantile.get()));
            debug_assert!(!args.timeout.is_zero());
        }
    }
});
