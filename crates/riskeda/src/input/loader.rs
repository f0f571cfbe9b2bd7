//! CSV loader with delimiter detection and typed row decoding.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use sha2::{Digest, Sha256};

use super::source::{Dataset, SourceMetadata};
use crate::error::{EdaError, Result};
use crate::schema::{self, Record};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b',', b'\t', b';', b'|'];

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Maximum rows to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Loads the maternal health risk CSV into a [`Dataset`].
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    /// Create a loader with default configuration.
    pub fn new() -> Self {
        Self {
            config: LoaderConfig::default(),
        }
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load a file and return the dataset and its metadata.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        let path = path.as_ref();

        let contents = fs::read(path).map_err(|e| EdaError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = self.resolve_delimiter(&contents)?;
        let (dataset, column_count) = self.decode(&contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        debug!(
            "Loaded {} rows from {} ({}, {})",
            dataset.len(),
            path.display(),
            format,
            hash
        );

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            format,
            dataset.len(),
            column_count,
        );

        Ok((dataset, metadata))
    }

    /// Decode an in-memory CSV document.
    pub fn load_bytes(&self, bytes: &[u8]) -> Result<Dataset> {
        let delimiter = self.resolve_delimiter(bytes)?;
        self.decode(bytes, delimiter).map(|(dataset, _)| dataset)
    }

    fn resolve_delimiter(&self, bytes: &[u8]) -> Result<u8> {
        match self.config.delimiter {
            Some(d) => Ok(d),
            None => detect_delimiter(bytes),
        }
    }

    /// Decode rows, returning the dataset and the header width.
    fn decode(&self, bytes: &[u8], delimiter: u8) -> Result<(Dataset, usize)> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .trim(csv::Trim::All)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

        let missing: Vec<String> = schema::required_columns()
            .filter(|name| !headers.iter().any(|h| h == name))
            .map(|name| name.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(EdaError::MissingColumns(missing));
        }

        let mut records = Vec::new();
        for (row_idx, result) in reader.deserialize::<Record>().enumerate() {
            if let Some(max) = self.config.max_rows {
                if row_idx >= max {
                    break;
                }
            }

            let record = result.map_err(|e| describe_row_error(e, row_idx + 1, &headers))?;
            records.push(record);
        }

        if records.is_empty() {
            return Err(EdaError::EmptyData("No data rows found".to_string()));
        }

        Ok((Dataset::new(records), headers.len()))
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a field-level decode failure into a `Parse` error naming the column.
fn describe_row_error(err: csv::Error, row: usize, headers: &[String]) -> EdaError {
    if let csv::ErrorKind::Deserialize { err: de, .. } = err.kind() {
        if let Some(column) = de.field().and_then(|i| headers.get(i as usize)) {
            return EdaError::Parse {
                row,
                column: column.clone(),
                message: de.kind().to_string(),
            };
        }
    }
    EdaError::Csv(err)
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(EdaError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        // Consistent counts across lines win; ties keep the earlier delimiter.
        let score = if counts.iter().all(|&c| c == first_count) {
            first_count * 1000
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Feature;

    const HEADER: &str = "Age,SystolicBP,DiastolicBP,BS,BodyTemp,HeartRate,RiskLevel";

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = b"a\tb\tc\n1\t2\t3\n4\t5\t6";
        assert_eq!(detect_delimiter(data).unwrap(), b'\t');
    }

    #[test]
    fn test_load_bytes_decodes_records() {
        let data = format!("{HEADER}\n25,130,80,15,98,86,high risk\n35,140,90,13,98,70,low risk\n");
        let dataset = Loader::new().load_bytes(data.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].risk_level, "high risk");
        assert_eq!(dataset.feature_values(Feature::BS), vec![15.0, 13.0]);
    }

    #[test]
    fn test_load_bytes_ignores_extra_columns_and_order() {
        let data = "RiskLevel,Id,HeartRate,BodyTemp,BS,DiastolicBP,SystolicBP,Age\n\
                    mid risk,1,70,98.6,6.1,60,90,19\n";
        let dataset = Loader::new().load_bytes(data.as_bytes()).unwrap();

        assert_eq!(dataset.records()[0].age, 19.0);
        assert_eq!(dataset.records()[0].body_temp, 98.6);
    }

    #[test]
    fn test_missing_columns_are_named() {
        let data = b"Age,SystolicBP,BS,RiskLevel\n25,130,15,high risk\n";
        let err = Loader::new().load_bytes(data).unwrap_err();

        match err {
            EdaError::MissingColumns(cols) => {
                assert_eq!(cols, vec!["DiastolicBP", "BodyTemp", "HeartRate"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_cell_reports_column() {
        let data = format!("{HEADER}\n25,130,80,15,98,86,high risk\n30,abc,80,15,98,86,low risk\n");
        let err = Loader::new().load_bytes(data.as_bytes()).unwrap_err();

        match err {
            EdaError::Parse { row, column, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, "SystolicBP");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_cell_loads_as_nan() {
        let data = format!("{HEADER}\n25,130,80,15,98,86,high risk\n30,,80,7.5,98,  ,low risk\n");
        let dataset = Loader::new().load_bytes(data.as_bytes()).unwrap();

        assert_eq!(dataset.len(), 2);
        let record = &dataset.records()[1];
        assert!(record.systolic_bp.is_nan());
        assert!(record.heart_rate.is_nan());
        assert_eq!(record.age, 30.0);
        assert_eq!(record.risk_level, "low risk");
    }

    #[test]
    fn test_header_only_is_empty() {
        let err = Loader::new().load_bytes(HEADER.as_bytes()).unwrap_err();
        assert!(matches!(err, EdaError::EmptyData(_)));
    }

    #[test]
    fn test_max_rows_limits_records() {
        let data = format!(
            "{HEADER}\n25,130,80,15,98,86,high risk\n35,140,90,13,98,70,low risk\n29,90,70,8,100,80,mid risk\n"
        );
        let loader = Loader::with_config(LoaderConfig {
            max_rows: Some(2),
            ..LoaderConfig::default()
        });

        assert_eq!(loader.load_bytes(data.as_bytes()).unwrap().len(), 2);
    }
}
