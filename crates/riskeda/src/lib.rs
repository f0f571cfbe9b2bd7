//! riskeda: exploratory chart reports for maternal health risk datasets.
//!
//! The pipeline loads a CSV of six numeric measurements and a `RiskLevel`
//! label, holds out a seeded 20% test partition, and renders a fixed set of
//! charts from the train partition:
//!
//! - class distribution (bar chart of records per risk level)
//! - density curves per feature and risk level (2x3 grid)
//! - boxplots per feature and risk level (stacked)
//! - pairwise scatter matrix over all features
//! - a combined figure of the first three
//!
//! # Example
//!
//! ```no_run
//! let summary = riskeda::generate_eda_report("data/maternal_risk.csv", "figures/").unwrap();
//!
//! for artifact in &summary.artifacts {
//!     println!("{} ({} bytes)", artifact.path.display(), artifact.bytes);
//! }
//! ```

pub mod chart;
pub mod error;
pub mod input;
pub mod render;
pub mod schema;
pub mod split;
pub mod stats;

mod report;

pub use crate::report::{
    Artifact, BOXPLOT_FILE, CLASS_DISTRIBUTION_FILE, COMBINED_FILE, CORRELATION_FILE,
    DENSITY_FILE, ReportConfig, ReportGenerator, ReportSummary, generate_eda_report,
};
pub use chart::{ChartNode, Mark, Panel};
pub use error::{EdaError, Result};
pub use input::{Dataset, Loader, LoaderConfig, SourceMetadata};
pub use render::{ImageFormat, render_to_bytes, save_chart};
pub use schema::{Feature, Record};
pub use split::{SplitConfig, TrainTestSplit, train_test_split};
