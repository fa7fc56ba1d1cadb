#![no_main]

use clap::Parser;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let mut args = Vec::new();
        args.push("quantile-checker".to_owned());
        for token in input.split_whitespace().take(64) {
            args.push(token.to_owned());
        }
        let arg_refs: Vec<&str> = args.iter().map(|value| value.as_str()).collect();
        if let Ok(parsed) = quantile_checker::args::CheckArgs::try_parse_from(arg_refs) {
            let quantile = parsed.quantile.get();
            debug_assert!((0.0..=1.0).contains(&quantile));
            debug_assert!(!parsed.timeout.is_zero());
        }
    }
});
