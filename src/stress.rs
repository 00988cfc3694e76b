//! Stress module - Crop Stress Index (CSI) and the stress alert threshold

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ============================================================================
// CSI WEIGHTS
// ============================================================================

pub const TEMPERATURE_WEIGHT: f64 = 0.4;
pub const HUMIDITY_WEIGHT: f64 = 0.3;
pub const SOIL_WEIGHT: f64 = 0.3;

/// Temperature at which the temperature sub-score is zero (°C).
pub const COMFORT_TEMPERATURE: f64 = 20.0;
/// Soil moisture at which the soil sub-score is zero (%).
pub const TARGET_SOIL_MOISTURE: f64 = 60.0;

/// Round to two decimal places.
///
/// Rounds the exact binary value, so 1.115 (stored as 1.11499...) gives 1.11.
/// Exact decimal ties go to the even digit.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

// ============================================================================
// STRESS BREAKDOWN - Sub-scores behind a single CSI value
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StressBreakdown {
    pub temperature_score: f64,
    pub humidity_score: f64,
    pub soil_score: f64,
    pub csi: f64,
}

impl StressBreakdown {
    pub fn compute(temperature: f64, humidity: f64, soil_moisture: f64) -> Self {
        let temperature_score = (temperature - COMFORT_TEMPERATURE) / 20.0 * 100.0;
        let humidity_score = 100.0 - humidity;
        let soil_score = TARGET_SOIL_MOISTURE - soil_moisture;

        let csi = TEMPERATURE_WEIGHT * temperature_score
            + HUMIDITY_WEIGHT * humidity_score
            + SOIL_WEIGHT * soil_score;

        Self {
            temperature_score,
            humidity_score,
            soil_score,
            csi: round2(csi),
        }
    }
}

/// Crop Stress Index for one reading, rounded to two decimals.
///
/// Total over all finite inputs; values outside the usual field ranges
/// (20-45 °C, 0-100 %) give a less meaningful but still valid score.
pub fn calculate_csi(temperature: f64, humidity: f64, soil_moisture: f64) -> f64 {
    StressBreakdown::compute(temperature, humidity, soil_moisture).csi
}

// ============================================================================
// ALERT THRESHOLD
// ============================================================================

/// Stress alert threshold on the CSI scale, always within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct AlertThreshold(u8);

impl AlertThreshold {
    pub const MAX: u8 = 100;

    pub fn new(value: i64) -> Result<Self> {
        match u8::try_from(value) {
            Ok(v) if v <= Self::MAX => Ok(Self(v)),
            _ => Err(Error::ThresholdOutOfRange(value)),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// A stress alert fires only when the CSI is strictly above the threshold.
    pub fn is_exceeded_by(self, csi: f64) -> bool {
        csi > f64::from(self.0)
    }
}

impl Default for AlertThreshold {
    fn default() -> Self {
        Self(70)
    }
}

impl TryFrom<i64> for AlertThreshold {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<AlertThreshold> for i64 {
    fn from(threshold: AlertThreshold) -> Self {
        i64::from(threshold.0)
    }
}

impl std::fmt::Display for AlertThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
