//! Fuzz target for the CSV loader.
//!
//! Arbitrary bytes must decode or fail with an error, never panic. Anything
//! that decodes must also survive the split and chart builders.

#![no_main]

use libfuzzer_sys::fuzz_target;
use riskeda::{chart, Loader, SplitConfig, train_test_split};

fuzz_target!(|data: &[u8]| {
    let Ok(dataset) = Loader::new().load_bytes(data) else {
        return;
    };

    let _ = dataset.risk_levels();
    let _ = chart::boxplot_grid(&dataset);

    if let Ok(split) = train_test_split(&dataset, SplitConfig::default()) {
        let _ = chart::density_grid(&split.train);
        let _ = chart::class_distribution(&split.train);
    }
});
