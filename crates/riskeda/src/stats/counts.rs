//! Record counts per risk level.

use serde::{Deserialize, Serialize};

use crate::input::Dataset;

/// Number of records carrying one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Count records per risk level, sorted by label.
pub fn class_counts(dataset: &Dataset) -> Vec<CategoryCount> {
    let mut counts: std::collections::BTreeMap<&str, usize> = Default::default();
    for record in dataset.records() {
        *counts.entry(record.risk_level.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(label, count)| CategoryCount {
            label: label.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Record;

    #[test]
    fn test_class_counts() {
        let levels = ["low risk", "high risk", "low risk", "mid risk", "low risk"];
        let dataset = Dataset::new(
            levels
                .iter()
                .map(|l| Record {
                    age: 30.0,
                    systolic_bp: 120.0,
                    diastolic_bp: 80.0,
                    bs: 7.0,
                    body_temp: 98.0,
                    heart_rate: 70.0,
                    risk_level: l.to_string(),
                })
                .collect(),
        );

        let counts = class_counts(&dataset);
        let pairs: Vec<_> = counts.iter().map(|c| (c.label.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("high risk", 1), ("low risk", 3), ("mid risk", 1)]);
    }
}
