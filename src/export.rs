//! CSV export of session histories and generated datasets

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::catalog::{Season, SoilType};
use crate::error::Result;
use crate::session::Record;

/// File name offered for the live dashboard's download.
pub const LIVE_EXPORT_FILE: &str = "farm_data.csv";

/// A row type with a fixed header, written even when there are no rows.
pub trait CsvRow: Serialize {
    const HEADERS: &'static [&'static str];
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LiveRow {
    #[serde(rename = "Temp")]
    pub temperature: f64,
    #[serde(rename = "Humidity")]
    pub humidity: f64,
    #[serde(rename = "SoilMoisture")]
    pub soil_moisture: f64,
    #[serde(rename = "CSI")]
    pub csi: f64,
}

impl CsvRow for LiveRow {
    const HEADERS: &'static [&'static str] = &["Temp", "Humidity", "SoilMoisture", "CSI"];
}

impl From<&Record> for LiveRow {
    fn from(record: &Record) -> Self {
        Self {
            temperature: record.reading.temperature,
            humidity: record.reading.humidity,
            soil_moisture: record.reading.soil_moisture,
            csi: record.csi,
        }
    }
}

pub fn dataset_file_name(soil: SoilType, farming_type: &str, season: Season) -> String {
    format!("{soil}_{farming_type}_{season}.csv")
}

pub fn write_csv<W: Write, T: CsvRow>(writer: W, rows: &[T]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(T::HEADERS)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn to_csv_string<T: CsvRow>(rows: &[T]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, rows)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn write_csv_file<T: CsvRow>(path: &Path, rows: &[T]) -> Result<()> {
    let file = File::create(path)?;
    write_csv(file, rows)?;
    info!("exported {} rows to {}", rows.len(), path.display());
    Ok(())
}

pub fn live_rows(records: &[Record]) -> Vec<LiveRow> {
    records.iter().map(LiveRow::from).collect()
}
