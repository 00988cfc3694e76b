use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Reading;

/// Inclusive range a simulated measurement is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.max <= self.min {
            return self.min;
        }
        rng.gen_range(self.min..=self.max)
    }
}

impl From<(f64, f64)> for Bounds {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorRanges {
    pub temperature: Bounds,
    pub humidity: Bounds,
    pub soil_moisture: Bounds,
}

impl SensorRanges {
    pub fn new(temperature: (f64, f64), humidity: (f64, f64), soil_moisture: (f64, f64)) -> Self {
        Self {
            temperature: temperature.into(),
            humidity: humidity.into(),
            soil_moisture: soil_moisture.into(),
        }
    }

    pub fn contains(&self, reading: &Reading) -> bool {
        self.temperature.contains(reading.temperature)
            && self.humidity.contains(reading.humidity)
            && self.soil_moisture.contains(reading.soil_moisture)
    }
}

impl Default for SensorRanges {
    /// Ranges used by the live monitoring dashboard.
    fn default() -> Self {
        Self::new((20.0, 40.0), (20.0, 80.0), (10.0, 60.0))
    }
}

/// Simulated field sensor. Stands in for real hardware; draws each
/// measurement uniformly from its configured range.
pub struct ReadingGenerator<R = StdRng> {
    rng: R,
    ranges: SensorRanges,
}

impl ReadingGenerator<StdRng> {
    pub fn seeded(seed: u64, ranges: SensorRanges) -> Self {
        Self::new(StdRng::seed_from_u64(seed), ranges)
    }
}

impl<R: Rng> ReadingGenerator<R> {
    pub fn new(rng: R, ranges: SensorRanges) -> Self {
        Self { rng, ranges }
    }

    pub fn generate(&mut self) -> Reading {
        Reading {
            temperature: self.ranges.temperature.sample(&mut self.rng),
            humidity: self.ranges.humidity.sample(&mut self.rng),
            soil_moisture: self.ranges.soil_moisture.sample(&mut self.rng),
        }
    }
}
