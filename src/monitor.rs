//! Live monitoring dashboard - one simulated reading per step

use std::path::{Path, PathBuf};

use log::{info, warn};
use rand::rngs::StdRng;
use rand::Rng;

use crate::error::Result;
use crate::export::{live_rows, write_csv_file, LIVE_EXPORT_FILE};
use crate::i18n::{Language, Phrase};
use crate::sensor::generator::{ReadingGenerator, SensorRanges};
use crate::session::{Record, Session};
use crate::stress::AlertThreshold;
use crate::visualization::{generate_trend_chart, TrendSeries};

/// Result of one "generate new reading" interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub record: Record,
    pub stress_alert: bool,
}

pub struct MonitorDashboard<R = StdRng> {
    language: Language,
    threshold: AlertThreshold,
    generator: ReadingGenerator<R>,
    session: Session,
}

impl MonitorDashboard<StdRng> {
    pub fn seeded(seed: u64, language: Language, threshold: AlertThreshold) -> Self {
        Self::new(
            ReadingGenerator::seeded(seed, SensorRanges::default()),
            language,
            threshold,
        )
    }
}

impl<R: Rng> MonitorDashboard<R> {
    pub fn new(generator: ReadingGenerator<R>, language: Language, threshold: AlertThreshold) -> Self {
        Self {
            language,
            threshold,
            generator,
            session: Session::new(),
        }
    }

    pub fn step(&mut self) -> Result<Observation> {
        let reading = self.generator.generate();
        let record = self.session.record(reading)?;
        let stress_alert = self.threshold.is_exceeded_by(record.csi);

        if stress_alert {
            warn!("CSI {:.2} above threshold {}", record.csi, self.threshold);
        }
        if record.is_anomaly() {
            warn!(
                "temperature anomaly: {:.2} °C (mean {:.2}, sigma {:.2})",
                reading.temperature, record.anomaly.stats.mean, record.anomaly.stats.std_dev
            );
        }

        Ok(Observation {
            record,
            stress_alert,
        })
    }

    pub fn run(&mut self, readings: usize) -> Result<Vec<Observation>> {
        (0..readings).map(|_| self.step()).collect()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn threshold(&self) -> AlertThreshold {
        self.threshold
    }

    /// Write the history to `farm_data.csv` under `dir`. Nothing to export
    /// before the first reading.
    pub fn export_csv(&self, dir: &Path) -> Result<Option<PathBuf>> {
        if self.session.is_empty() {
            return Ok(None);
        }
        let path = dir.join(LIVE_EXPORT_FILE);
        write_csv_file(&path, &live_rows(self.session.records()))?;
        Ok(Some(path))
    }

    pub fn render_chart(&self, path: &Path, size: (u32, u32)) -> Result<bool> {
        if self.session.is_empty() {
            return Ok(false);
        }
        let series = TrendSeries::from_records(self.session.records());
        generate_trend_chart(&series, self.language.text(Phrase::CombinedChart), path, size)?;
        info!("combined chart ready at {}", path.display());
        Ok(true)
    }
}
