//! Seeded train/test partitioning.

use log::debug;

use crate::error::{EdaError, Result};
use crate::input::Dataset;

/// Split configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitConfig {
    /// Fraction of rows assigned to the test partition, in (0, 1).
    pub test_size: f64,
    /// Seed for the shuffle.
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            test_size: 0.2,
            seed: 123,
        }
    }
}

/// Disjoint train and test partitions of one dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplit {
    pub train: Dataset,
    pub test: Dataset,
}

/// Shuffle row indices with a seeded RNG and cut off the test partition.
///
/// The test partition holds `ceil(test_size * n)` rows. Both partitions keep
/// the shuffled order.
pub fn train_test_split(dataset: &Dataset, config: SplitConfig) -> Result<TrainTestSplit> {
    let n = dataset.len();
    if !(config.test_size > 0.0 && config.test_size < 1.0) {
        return Err(EdaError::InvalidSplit(format!(
            "test_size must be in (0, 1), got {}",
            config.test_size
        )));
    }

    let n_test = (config.test_size * n as f64).ceil() as usize;
    let n_train = n.saturating_sub(n_test);
    if n_test == 0 || n_train == 0 {
        return Err(EdaError::InvalidSplit(format!(
            "{} rows with test_size {} leaves an empty partition",
            n, config.test_size
        )));
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = fastrand::Rng::with_seed(config.seed);
    rng.shuffle(&mut indices);

    let (test_idx, train_idx) = indices.split_at(n_test);
    debug!(
        "Split {} rows into {} train / {} test (seed {})",
        n, n_train, n_test, config.seed
    );

    Ok(TrainTestSplit {
        train: dataset.subset(train_idx),
        test: dataset.subset(test_idx),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Feature, Record};

    fn dataset(n: usize) -> Dataset {
        Dataset::new(
            (0..n)
                .map(|i| Record {
                    age: i as f64,
                    systolic_bp: 120.0,
                    diastolic_bp: 80.0,
                    bs: 7.0,
                    body_temp: 98.0,
                    heart_rate: 70.0,
                    risk_level: if i % 2 == 0 { "low risk" } else { "high risk" }.to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_split_sizes_round_test_up() {
        let split = train_test_split(&dataset(11), SplitConfig::default()).unwrap();
        assert_eq!(split.test.len(), 3);
        assert_eq!(split.train.len(), 8);
    }

    #[test]
    fn test_split_is_deterministic() {
        let data = dataset(50);
        let a = train_test_split(&data, SplitConfig::default()).unwrap();
        let b = train_test_split(&data, SplitConfig::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_changes_order() {
        let data = dataset(50);
        let a = train_test_split(&data, SplitConfig::default()).unwrap();
        let b = train_test_split(&data, SplitConfig { seed: 7, ..SplitConfig::default() }).unwrap();
        assert_ne!(
            a.train.feature_values(Feature::Age),
            b.train.feature_values(Feature::Age)
        );
    }

    #[test]
    fn test_rejects_out_of_range_fraction() {
        let data = dataset(10);
        for test_size in [0.0, 1.0, -0.5, f64::NAN] {
            let err = train_test_split(&data, SplitConfig { test_size, seed: 1 }).unwrap_err();
            assert!(matches!(err, EdaError::InvalidSplit(_)));
        }
    }

    #[test]
    fn test_rejects_single_row() {
        let err = train_test_split(&dataset(1), SplitConfig::default()).unwrap_err();
        assert!(matches!(err, EdaError::InvalidSplit(_)));
    }
}
