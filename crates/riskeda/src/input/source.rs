//! Loaded dataset and source metadata.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::schema::{Feature, Record};

/// Metadata about the source data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// Number of columns in the header.
    pub column_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has been loaded.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: String,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            row_count,
            column_count,
            loaded_at: Utc::now(),
        }
    }
}

/// An ordered, immutable sequence of records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Create a dataset from records, keeping their order.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Values of one feature, in record order.
    pub fn feature_values(&self, feature: Feature) -> Vec<f64> {
        self.records.iter().map(|r| feature.value(r)).collect()
    }

    /// Distinct risk levels, sorted ascending.
    pub fn risk_levels(&self) -> Vec<String> {
        let mut levels: Vec<String> = self.records.iter().map(|r| r.risk_level.clone()).collect();
        levels.sort();
        levels.dedup();
        levels
    }

    /// Values of one feature grouped by risk level, keyed in sorted order.
    pub fn grouped_values(&self, feature: Feature) -> BTreeMap<&str, Vec<f64>> {
        let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
        for record in &self.records {
            groups
                .entry(record.risk_level.as_str())
                .or_default()
                .push(feature.value(record));
        }
        groups
    }

    /// Build a new dataset from the given row indices, in the given order.
    ///
    /// Indices out of range are skipped.
    pub fn subset(&self, indices: &[usize]) -> Dataset {
        let records = indices
            .iter()
            .filter_map(|&i| self.records.get(i).cloned())
            .collect();
        Dataset { records }
    }
}
