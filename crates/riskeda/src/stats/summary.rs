//! Five-number summaries for boxplots.

use serde::{Deserialize, Serialize};

use super::{quantile, sorted_finite};

/// Whisker reach as a multiple of the interquartile range.
const WHISKER_IQR: f64 = 1.5;

/// Boxplot statistics for one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Smallest value within `q1 - 1.5 * IQR`.
    pub lower_whisker: f64,
    /// Largest value within `q3 + 1.5 * IQR`.
    pub upper_whisker: f64,
    /// Values beyond the whiskers, ascending.
    pub outliers: Vec<f64>,
}

impl BoxSummary {
    /// Summarize the values; `None` when no finite value exists.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let sorted = sorted_finite(values);
        let q1 = quantile(&sorted, 0.25)?;
        let median = quantile(&sorted, 0.5)?;
        let q3 = quantile(&sorted, 0.75)?;

        let reach = WHISKER_IQR * (q3 - q1);
        let (low_fence, high_fence) = (q1 - reach, q3 + reach);

        let inside = || sorted.iter().copied().filter(|v| *v >= low_fence && *v <= high_fence);
        // Quartiles always lie inside the fences, so both exist.
        let lower_whisker = inside().next().unwrap_or(q1).min(q1);
        let upper_whisker = inside().last().unwrap_or(q3).max(q3);

        let outliers = sorted
            .iter()
            .copied()
            .filter(|v| *v < lower_whisker || *v > upper_whisker)
            .collect();

        Some(Self {
            min: sorted[0],
            q1,
            median,
            q3,
            max: sorted[sorted.len() - 1],
            lower_whisker,
            upper_whisker,
            outliers,
        })
    }

    /// Interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}
