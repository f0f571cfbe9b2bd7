//! Chart specifications and the builders that derive them from a dataset.

mod builders;
mod spec;

pub use builders::{
    boxplot_grid, class_distribution, combined_figure, correlation_matrix, density_grid,
    COMBINED_TITLE_SIZE,
};
pub use spec::{ChartNode, DEFAULT_TITLE_SIZE, Mark, Panel, Series};
