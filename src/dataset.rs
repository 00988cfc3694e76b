//! Dataset module - Season-conditioned multi-day datasets for a chosen soil and crop

use std::path::{Path, PathBuf};

use log::{debug, warn};
use rand::Rng;
use serde::Serialize;

use crate::catalog::{Season, SoilType};
use crate::error::Result;
use crate::export::{dataset_file_name, write_csv_file, CsvRow};
use crate::sensor::generator::ReadingGenerator;
use crate::stress::{round2, AlertThreshold};
use crate::visualization::{generate_trend_chart, TrendSeries};

pub const DEFAULT_DAYS: u32 = 10;

// ============================================================================
// DATASET REQUEST - Soil, crop and season selection
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRequest {
    pub soil: SoilType,
    pub farming_type: &'static str,
    pub season: Season,
    /// True when the season came from the soil's default rather than a selection.
    pub auto_season: bool,
    pub days: u32,
}

impl DatasetRequest {
    /// Farming type defaults to the soil's first suggestion and season to the
    /// soil's default season.
    pub fn new(
        soil: SoilType,
        farming_type: Option<&str>,
        season: Option<Season>,
        days: u32,
    ) -> Result<Self> {
        Ok(Self {
            soil,
            farming_type: soil.farming_type(farming_type)?,
            season: season.unwrap_or_else(|| soil.default_season()),
            auto_season: season.is_none(),
            days,
        })
    }

    pub fn file_name(&self) -> String {
        dataset_file_name(self.soil, self.farming_type, self.season)
    }

    /// Chart file sitting next to the CSV, same stem.
    pub fn chart_file_name(&self) -> String {
        format!("{}_{}_{}.png", self.soil, self.farming_type, self.season)
    }

    pub fn generate<R: Rng>(&self, rng: R) -> Dataset {
        let mut generator = ReadingGenerator::new(rng, self.season.ranges());
        let rows = (1..=self.days)
            .map(|day| {
                let reading = generator.generate();
                DatasetRow {
                    day,
                    soil_type: self.soil,
                    farming_type: self.farming_type,
                    season: self.season,
                    temperature: round2(reading.temperature),
                    humidity: round2(reading.humidity),
                    soil_moisture: round2(reading.soil_moisture),
                    csi: reading.csi(),
                }
            })
            .collect::<Vec<_>>();
        debug!(
            "generated {} day dataset for {} / {} ({})",
            rows.len(),
            self.soil,
            self.farming_type,
            self.season
        );
        Dataset { rows }
    }
}

// ============================================================================
// DATASET ROWS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetRow {
    #[serde(rename = "Day")]
    pub day: u32,
    #[serde(rename = "SoilType")]
    pub soil_type: SoilType,
    #[serde(rename = "FarmingType")]
    pub farming_type: &'static str,
    #[serde(rename = "Season")]
    pub season: Season,
    #[serde(rename = "Temperature")]
    pub temperature: f64,
    #[serde(rename = "Humidity")]
    pub humidity: f64,
    #[serde(rename = "SoilMoisture")]
    pub soil_moisture: f64,
    /// Computed from the unrounded reading.
    #[serde(rename = "CSI")]
    pub csi: f64,
}

impl CsvRow for DatasetRow {
    const HEADERS: &'static [&'static str] = &[
        "Day",
        "SoilType",
        "FarmingType",
        "Season",
        "Temperature",
        "Humidity",
        "SoilMoisture",
        "CSI",
    ];
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub rows: Vec<DatasetRow>,
}

impl Dataset {
    /// Days whose CSI is above the threshold, in day order.
    pub fn stressed_days(&self, threshold: AlertThreshold) -> Vec<&DatasetRow> {
        let stressed: Vec<_> = self
            .rows
            .iter()
            .filter(|row| threshold.is_exceeded_by(row.csi))
            .collect();
        if !stressed.is_empty() {
            warn!(
                "{} of {} days above stress threshold {}",
                stressed.len(),
                self.rows.len(),
                threshold
            );
        }
        stressed
    }

    /// Write the CSV under `dir`, then the trends chart when `chart` carries a
    /// caption and size. The CSV is on disk even if the chart fails.
    pub fn write_outputs(
        &self,
        request: &DatasetRequest,
        dir: &Path,
        chart: Option<(&str, (u32, u32))>,
    ) -> Result<DatasetOutputs> {
        let csv = dir.join(request.file_name());
        write_csv_file(&csv, &self.rows)?;

        let chart = match chart {
            Some((caption, size)) => {
                let path = dir.join(request.chart_file_name());
                generate_trend_chart(&TrendSeries::from_dataset(self), caption, &path, size)?;
                Some(path)
            }
            None => None,
        };
        Ok(DatasetOutputs { csv, chart })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetOutputs {
    pub csv: PathBuf,
    pub chart: Option<PathBuf>,
}
