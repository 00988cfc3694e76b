//! Error types shared across the dashboards

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::SoilType;
use crate::sensor::anomaly::AnomalyError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("alert threshold {0} is outside 0..=100")]
    ThresholdOutOfRange(i64),

    #[error("unknown {kind} '{value}'")]
    UnknownSelection { kind: &'static str, value: String },

    #[error("farming type '{farming}' is not suggested for {soil} soil")]
    FarmingNotOffered { soil: SoilType, farming: String },

    #[error(transparent)]
    Anomaly(#[from] AnomalyError),

    #[error("csv export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("chart rendering failed: {0}")]
    Chart(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
