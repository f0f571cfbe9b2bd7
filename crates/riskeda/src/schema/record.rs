//! A single dataset row.

use serde::{Deserialize, Deserializer, Serialize};

/// One observation: six numeric measurements and a risk label.
///
/// A blank measurement cell loads as NaN; statistics and marks skip it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Age", deserialize_with = "blank_as_nan")]
    pub age: f64,
    #[serde(rename = "SystolicBP", deserialize_with = "blank_as_nan")]
    pub systolic_bp: f64,
    #[serde(rename = "DiastolicBP", deserialize_with = "blank_as_nan")]
    pub diastolic_bp: f64,
    #[serde(rename = "BS", deserialize_with = "blank_as_nan")]
    pub bs: f64,
    #[serde(rename = "BodyTemp", deserialize_with = "blank_as_nan")]
    pub body_temp: f64,
    #[serde(rename = "HeartRate", deserialize_with = "blank_as_nan")]
    pub heart_rate: f64,
    #[serde(rename = "RiskLevel")]
    pub risk_level: String,
}

/// Empty cells become NaN; anything else must parse as a number.
fn blank_as_nan<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
