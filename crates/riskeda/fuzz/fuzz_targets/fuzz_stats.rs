//! Fuzz target for density estimation and boxplot summaries.

#![no_main]

use libfuzzer_sys::fuzz_target;
use riskeda::stats::{BoxSummary, estimate_density};

fuzz_target!(|data: &[u8]| {
    let values: Vec<f64> = data
        .chunks_exact(8)
        .map(|chunk| {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            f64::from_le_bytes(bytes)
        })
        .collect();

    if let Some(summary) = BoxSummary::from_values(&values) {
        let _ = summary.iqr();
    }
    let _ = estimate_density(&values, 50);
});
