//! Farm micro-climate monitoring: simulated sensor readings, the Crop Stress
//! Index, temperature anomaly flags, trend charts and CSV export.

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod disease;
pub mod error;
pub mod export;
pub mod i18n;
pub mod monitor;
pub mod sensor;
pub mod session;
pub mod stress;
pub mod visualization;

pub use catalog::{Season, SoilType};
pub use config::{load_config, DashboardConfig};
pub use dataset::{Dataset, DatasetRequest, DatasetRow};
pub use disease::{CapturedImage, Diagnosis, ImageClassifier, StubClassifier};
pub use error::{Error, Result};
pub use i18n::{Language, Phrase};
pub use monitor::{MonitorDashboard, Observation};
pub use sensor::{detect_anomaly, Reading, ReadingGenerator, SensorRanges};
pub use session::{Record, Session, SessionRegistry};
pub use stress::{calculate_csi, AlertThreshold, StressBreakdown};
