// Dashboard configuration, loaded from TOML with CLI overrides applied by the binary
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

use crate::catalog::{Season, SoilType};
use crate::dataset::DEFAULT_DAYS;
use crate::error::{Error, Result};
use crate::i18n::Language;
use crate::stress::AlertThreshold;

pub const DEFAULT_CONFIG_PATH: &str = "config/dashboard.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub language: Language,
    pub threshold: AlertThreshold,
    /// Fixed RNG seed for reproducible runs; entropy when unset.
    pub seed: Option<u64>,
    /// Readings taken per `monitor` run.
    pub readings: usize,
    pub days: u32,
    pub soil: SoilType,
    pub farming: Option<String>,
    /// Overrides the soil's default season.
    pub season: Option<Season>,
    pub output_dir: PathBuf,
    pub chart: ChartConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            threshold: AlertThreshold::default(),
            seed: None,
            readings: 1,
            days: DEFAULT_DAYS,
            soil: SoilType::Sandy,
            farming: None,
            season: None,
            output_dir: PathBuf::from("."),
            chart: ChartConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub enabled: bool,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 800,
            height: 600,
        }
    }
}

/// Load a config file. A missing file yields the defaults; an unreadable or
/// malformed one is an error.
pub fn load_config(path: &Path) -> Result<DashboardConfig> {
    match std::fs::read_to_string(path) {
        Ok(s) => parse_config(&s).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("no config at {}, using defaults", path.display());
            Ok(DashboardConfig::default())
        }
        Err(source) => Err(Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub fn parse_config(s: &str) -> std::result::Result<DashboardConfig, toml::de::Error> {
    toml::from_str(s)
}
