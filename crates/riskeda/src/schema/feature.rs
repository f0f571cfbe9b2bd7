//! Numeric feature columns.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Record;

/// Name of the categorical label column.
pub const LABEL_COLUMN: &str = "RiskLevel";

/// A numeric predictor column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Feature {
    /// Age in years.
    Age,
    /// Upper blood pressure value (mmHg).
    SystolicBP,
    /// Lower blood pressure value (mmHg).
    DiastolicBP,
    /// Blood glucose (mmol/L).
    BS,
    /// Body temperature (F).
    BodyTemp,
    /// Resting heart rate (bpm).
    HeartRate,
}

impl Feature {
    /// Canonical column order, used for every chart grid.
    pub const ALL: [Feature; 6] = [
        Feature::Age,
        Feature::SystolicBP,
        Feature::DiastolicBP,
        Feature::BS,
        Feature::BodyTemp,
        Feature::HeartRate,
    ];

    /// Header name in the CSV file.
    pub fn column_name(&self) -> &'static str {
        match self {
            Feature::Age => "Age",
            Feature::SystolicBP => "SystolicBP",
            Feature::DiastolicBP => "DiastolicBP",
            Feature::BS => "BS",
            Feature::BodyTemp => "BodyTemp",
            Feature::HeartRate => "HeartRate",
        }
    }

    /// Read this feature from a record.
    pub fn value(&self, record: &Record) -> f64 {
        match self {
            Feature::Age => record.age,
            Feature::SystolicBP => record.systolic_bp,
            Feature::DiastolicBP => record.diastolic_bp,
            Feature::BS => record.bs,
            Feature::BodyTemp => record.body_temp,
            Feature::HeartRate => record.heart_rate,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}
