#![no_main]

use libfuzzer_sys::fuzz_target;
use quantile_checker::args::Probability;

fn samples(bytes: &[u8]) -> Vec<f64> {
    bytes
        .chunks_exact(8)
        .filter_map(|chunk| chunk.try_into().ok())
        .map(f64::from_le_bytes)
        .collect()
}

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let split = rest.len() / 2 / 8 * 8;
    let (input, output) = rest.split_at(split);
    let probability = match Probability::try_from(f64::from(selector) / 255.0) {
        Ok(probability) => probability,
        Err(_) => return,
    };

    if let Ok((metrics, line)) =
        quantile_checker::fuzzing::report_input(&samples(input), &samples(output), probability)
    {
        for value in [
            metrics.quantile,
            metrics.max,
            metrics.input_mean,
            metrics.output_mean,
            metrics.precision,
        ] {
            assert!(value.is_finite(), "non-finite statistic in {}", line);
        }
        assert!(metrics.quantile <= metrics.max);
        assert!(!line.contains("NaN") && !line.contains("inf"), "{}", line);
        assert_eq!(metrics.burst, 1);
        assert!(line.contains("bandwith_stats_burst=1,"));
        assert!(!line.contains('\n'));
    }
});
