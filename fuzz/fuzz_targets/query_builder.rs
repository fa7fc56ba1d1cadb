#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let mut parts = input.splitn(4, '\u{1f}');
        let hostname = parts.next().unwrap_or_default();
        let service = parts.next().unwrap_or_default();
        let measurement = parts.next().unwrap_or_default();
        let metric = parts.next().unwrap_or_default();
        if let Ok(query) = quantile_checker::fuzzing::build_query_input(hostname, service, measurement, metric) {
            let statement = query.statement();
            debug_assert!(statement.ends_with("time > now() - 24h"));
            debug_assert_eq!(query.params().len(), 3);
            let rendered = query.to_string();
            debug_assert!(rendered.starts_with("SELECT \"value\" FROM "));
        }
    }
});
