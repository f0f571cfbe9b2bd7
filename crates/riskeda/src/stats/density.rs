//! Gaussian kernel density estimation.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::{quantile, sample_std, sorted_finite};

/// Number of evaluation points per curve.
pub const DEFAULT_STEPS: usize = 200;

/// A sampled density curve for one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityCurve {
    /// Kernel bandwidth used.
    pub bandwidth: f64,
    /// `(value, density)` pairs in ascending value order.
    pub points: Vec<(f64, f64)>,
}

impl DensityCurve {
    /// Largest density value on the curve.
    pub fn peak(&self) -> f64 {
        self.points.iter().map(|p| p.1).fold(0.0, f64::max)
    }

    /// Trapezoidal area under the sampled curve.
    pub fn area(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1].0 - w[0].0) * (w[0].1 + w[1].1) / 2.0)
            .sum()
    }
}

/// Rule-of-thumb bandwidth: `1.06 * min(std, IQR / 1.34) * n^(-1/5)`.
///
/// A zero spread falls back to the std, then `|q1|`, then 1.
pub fn estimate_bandwidth(sorted: &[f64]) -> f64 {
    let n = sorted.len().max(1) as f64;
    let std = sample_std(sorted).unwrap_or(0.0);
    let q1 = quantile(sorted, 0.25).unwrap_or(0.0);
    let q3 = quantile(sorted, 0.75).unwrap_or(0.0);
    let iqr = (q3 - q1) / 1.34;

    let spread = [std.min(iqr), std, q1.abs(), 1.0]
        .into_iter()
        .find(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(1.0);

    1.06 * spread * n.powf(-0.2)
}

/// Estimate a density over the values' own extent, sampled at `steps` points.
///
/// Returns `None` when there are no finite values.
pub fn estimate_density(values: &[f64], steps: usize) -> Option<DensityCurve> {
    let sorted = sorted_finite(values);
    let (&min, &max) = (sorted.first()?, sorted.last()?);
    let bandwidth = estimate_bandwidth(&sorted);

    // A single-point extent would collapse the curve to one sample.
    let (lo, hi) = if max > min {
        (min, max)
    } else {
        (min - 3.0 * bandwidth, max + 3.0 * bandwidth)
    };

    let steps = steps.max(2);
    let step = (hi - lo) / (steps - 1) as f64;
    let norm = 1.0 / (sorted.len() as f64 * bandwidth * (2.0 * PI).sqrt());

    let points = (0..steps)
        .map(|i| {
            let x = lo + step * i as f64;
            let density: f64 = sorted
                .iter()
                .map(|v| {
                    let z = (x - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum();
            (x, density * norm)
        })
        .collect();

    Some(DensityCurve { bandwidth, points })
}
