//! End-to-end report generation: load, split, build charts, render.

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::chart::{self, ChartNode};
use crate::error::{EdaError, Result};
use crate::input::{Loader, LoaderConfig, SourceMetadata};
use crate::render::save_chart;
use crate::split::{SplitConfig, train_test_split};

/// Combined multi-panel figure.
pub const COMBINED_FILE: &str = "EDA.png";
/// Density grid.
pub const DENSITY_FILE: &str = "density_plot.png";
/// Boxplot grid.
pub const BOXPLOT_FILE: &str = "box_plot.png";
/// Class distribution bar chart.
pub const CLASS_DISTRIBUTION_FILE: &str = "class_distribution.png";
/// Pairwise scatter matrix.
pub const CORRELATION_FILE: &str = "output_32_0.png";

/// Configuration for a report run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Loader configuration.
    pub loader: LoaderConfig,
    /// Train/test split parameters.
    pub split: SplitConfig,
    /// Pixel multiplier for PNG output.
    pub scale_factor: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            loader: LoaderConfig::default(),
            split: SplitConfig::default(),
            scale_factor: 1.0,
        }
    }
}

/// One written image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// File name under the output prefix.
    pub name: String,
    pub path: PathBuf,
    /// Bytes written.
    pub bytes: u64,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub source: SourceMetadata,
    pub train_rows: usize,
    pub test_rows: usize,
    /// Risk levels in the train partition, sorted.
    pub risk_levels: Vec<String>,
    /// Written files in render order.
    pub artifacts: Vec<Artifact>,
}

/// Runs the load, split, chart and render pipeline.
pub struct ReportGenerator {
    config: ReportConfig,
    loader: Loader,
}

impl ReportGenerator {
    /// Create a generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(ReportConfig::default())
    }

    /// Create a generator with custom configuration.
    pub fn with_config(config: ReportConfig) -> Self {
        let loader = Loader::with_config(config.loader.clone());
        Self { config, loader }
    }

    /// Generate all five charts from `data_location`, writing each to
    /// `output_location` + file name.
    ///
    /// The output prefix is concatenated as a string, so `"out/"` writes
    /// `out/EDA.png` while `"out/run1_"` writes `out/run1_EDA.png`.
    pub fn generate(
        &self,
        data_location: impl AsRef<Path>,
        output_location: &str,
    ) -> Result<ReportSummary> {
        let data_location = data_location.as_ref();
        info!("Loading {}", data_location.display());
        let (dataset, source) = self.loader.load(data_location)?;

        let split = train_test_split(&dataset, self.config.split)?;
        info!(
            "Split {} rows: {} train, {} test",
            dataset.len(),
            split.train.len(),
            split.test.len()
        );
        let train = &split.train;

        let class_distribution = chart::class_distribution(train);
        let density = chart::density_grid(train);
        let boxplots = chart::boxplot_grid(train);
        let correlation = chart::correlation_matrix(train);
        let combined = chart::combined_figure(&class_distribution, &density, &boxplots);

        let combined_path = output_path(output_location, COMBINED_FILE);
        let mut artifacts = vec![self.render_creating_parent(&combined, &combined_path, COMBINED_FILE)?];

        for (node, name) in [
            (&density, DENSITY_FILE),
            (&boxplots, BOXPLOT_FILE),
            (&class_distribution, CLASS_DISTRIBUTION_FILE),
            (&correlation, CORRELATION_FILE),
        ] {
            artifacts.push(self.render(node, &output_path(output_location, name), name)?);
        }

        if !combined_path.is_file() {
            return Err(EdaError::MissingArtifact(combined_path));
        }

        info!("Wrote {} charts under '{}'", artifacts.len(), output_location);
        Ok(ReportSummary {
            source,
            train_rows: split.train.len(),
            test_rows: split.test.len(),
            risk_levels: split.train.risk_levels(),
            artifacts,
        })
    }

    fn render(&self, chart: &ChartNode, path: &Path, name: &str) -> Result<Artifact> {
        let bytes = save_chart(chart, path, self.config.scale_factor)?;
        Ok(Artifact {
            name: name.to_string(),
            path: path.to_path_buf(),
            bytes,
        })
    }

    /// Render once; if the output directory is missing, create it and retry once.
    fn render_creating_parent(&self, chart: &ChartNode, path: &Path, name: &str) -> Result<Artifact> {
        match self.render(chart, path, name) {
            Err(err) if err.is_missing_path() => {
                let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
                    return Err(err);
                };
                warn!("Output directory {} missing, creating it", parent.display());
                std::fs::create_dir_all(parent).map_err(|e| EdaError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
                self.render(chart, path, name)
            }
            other => other,
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate the report with default settings.
pub fn generate_eda_report(
    data_location: impl AsRef<Path>,
    output_location: &str,
) -> Result<ReportSummary> {
    ReportGenerator::new().generate(data_location, output_location)
}

fn output_path(prefix: &str, name: &str) -> PathBuf {
    PathBuf::from(format!("{prefix}{name}"))
}
