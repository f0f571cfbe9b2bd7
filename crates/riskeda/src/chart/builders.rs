//! Builders for the fixed set of exploratory charts.
//!
//! Every builder is a pure function of the dataset it is given.

use log::debug;

use super::spec::{ChartNode, Mark, Panel, Series};
use crate::input::Dataset;
use crate::schema::{Feature, LABEL_COLUMN};
use crate::stats::{self, BoxSummary, DEFAULT_STEPS};

/// Title font size used by the combined figure.
pub const COMBINED_TITLE_SIZE: u32 = 18;

const DENSITY_SIZE: u32 = 200;
const SCATTER_SIZE: u32 = 100;
const WIDE_PANEL_WIDTH: u32 = 400;
/// Height per category row in bar and boxplot panels.
const BAND_STEP: u32 = 20;

fn band_height(dataset: &Dataset) -> u32 {
    BAND_STEP * dataset.risk_levels().len().max(1) as u32
}

/// Bar chart of record counts per risk level.
pub fn class_distribution(dataset: &Dataset) -> ChartNode {
    let bars = stats::class_counts(dataset)
        .into_iter()
        .enumerate()
        .map(|(color, count)| Series {
            label: count.label.clone(),
            color,
            data: count,
        })
        .collect();

    ChartNode::Panel(Panel {
        width: WIDE_PANEL_WIDTH,
        height: band_height(dataset),
        x_title: "Count of Records".to_string(),
        y_title: LABEL_COLUMN.to_string(),
        mark: Mark::Bar { bars },
    })
    .titled("Distribution of Risk Level")
}

fn density_panel(dataset: &Dataset, feature: Feature) -> ChartNode {
    let curves: Vec<_> = dataset
        .grouped_values(feature)
        .into_iter()
        .enumerate()
        .filter_map(|(color, (label, values))| {
            let curve = stats::estimate_density(&values, DEFAULT_STEPS)?;
            debug!("{feature} / {label}: bandwidth {:.4}", curve.bandwidth);
            Some(Series {
                label: label.to_string(),
                color,
                data: curve,
            })
        })
        .collect();

    ChartNode::Panel(Panel {
        width: DENSITY_SIZE,
        height: DENSITY_SIZE,
        x_title: feature.column_name().to_string(),
        y_title: "density".to_string(),
        mark: Mark::Area {
            curves,
            stroke_width: 2,
            fill_opacity: 0.3,
        },
    })
}

/// Per-feature density curves by risk level, in a 2x3 grid.
pub fn density_grid(dataset: &Dataset) -> ChartNode {
    let rows = Feature::ALL
        .chunks(3)
        .map(|row| ChartNode::hconcat(row.iter().map(|&f| density_panel(dataset, f)).collect()))
        .collect();

    ChartNode::vconcat(rows).titled("Distribution of Predictors for Each Risk Level")
}

fn boxplot_panel(dataset: &Dataset, feature: Feature) -> ChartNode {
    let boxes = dataset
        .grouped_values(feature)
        .into_iter()
        .enumerate()
        .filter_map(|(color, (label, values))| {
            Some(Series {
                label: label.to_string(),
                color,
                data: BoxSummary::from_values(&values)?,
            })
        })
        .collect();

    ChartNode::Panel(Panel {
        width: WIDE_PANEL_WIDTH,
        height: band_height(dataset),
        x_title: feature.column_name().to_string(),
        y_title: LABEL_COLUMN.to_string(),
        mark: Mark::Boxplot { boxes },
    })
}

/// Per-feature boxplots by risk level, stacked vertically.
pub fn boxplot_grid(dataset: &Dataset) -> ChartNode {
    let panels = Feature::ALL
        .iter()
        .map(|&f| boxplot_panel(dataset, f))
        .collect();

    ChartNode::vconcat(panels).titled("Boxplots of Different Features")
}

/// Scatter plots over every feature pair.
///
/// Cell `(r, c)` plots `Feature::ALL[r]` on x against `Feature::ALL[c]` on y.
pub fn correlation_matrix(dataset: &Dataset) -> ChartNode {
    let columns: Vec<Vec<f64>> = Feature::ALL
        .iter()
        .map(|&f| dataset.feature_values(f))
        .collect();

    let rows = Feature::ALL
        .iter()
        .enumerate()
        .map(|(r, x_feature)| {
            let cells = Feature::ALL
                .iter()
                .enumerate()
                .map(|(c, y_feature)| {
                    let points = columns[r]
                        .iter()
                        .copied()
                        .zip(columns[c].iter().copied())
                        .filter(|(x, y)| x.is_finite() && y.is_finite())
                        .collect();
                    ChartNode::Panel(Panel {
                        width: SCATTER_SIZE,
                        height: SCATTER_SIZE,
                        x_title: x_feature.column_name().to_string(),
                        y_title: y_feature.column_name().to_string(),
                        mark: Mark::Point {
                            points,
                            opacity: 0.3,
                            radius: 2,
                        },
                    })
                })
                .collect();
            ChartNode::hconcat(cells)
        })
        .collect();

    ChartNode::vconcat(rows)
}

/// Class distribution over the density grid over the boxplot grid.
pub fn combined_figure(
    class_distribution: &ChartNode,
    density: &ChartNode,
    boxplots: &ChartNode,
) -> ChartNode {
    ChartNode::vconcat(vec![
        class_distribution.clone(),
        density.clone(),
        boxplots.clone(),
    ])
    .with_title_size(COMBINED_TITLE_SIZE)
}
