//! Sensor module - Reading type, simulated data generation, and anomaly detection

pub mod anomaly;
pub mod generator;

use serde::{Deserialize, Serialize};

use crate::stress::{calculate_csi, StressBreakdown};

pub use anomaly::{assess, detect_anomaly, AnomalyCheck, AnomalyError, PopulationStats};
pub use generator::{Bounds, ReadingGenerator, SensorRanges};

// ============================================================================
// READING - One field measurement
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Air temperature, °C.
    pub temperature: f64,
    /// Relative humidity, %.
    pub humidity: f64,
    /// Volumetric soil moisture, %.
    pub soil_moisture: f64,
}

impl Reading {
    pub fn new(temperature: f64, humidity: f64, soil_moisture: f64) -> Self {
        Self {
            temperature,
            humidity,
            soil_moisture,
        }
    }

    pub fn csi(&self) -> f64 {
        calculate_csi(self.temperature, self.humidity, self.soil_moisture)
    }

    pub fn stress_breakdown(&self) -> StressBreakdown {
        StressBreakdown::compute(self.temperature, self.humidity, self.soil_moisture)
    }
}
