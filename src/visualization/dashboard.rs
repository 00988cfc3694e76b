use std::fmt::Write as _;

use crate::dataset::{Dataset, DatasetRequest};
use crate::i18n::{Language, Phrase};
use crate::session::Record;
use crate::stress::AlertThreshold;

/// Text block shown after each live reading: values, then any alerts.
pub fn reading_lines(language: Language, record: &Record, threshold: AlertThreshold) -> Vec<String> {
    let r = &record.reading;
    let mut lines = vec![
        language.labelled(Phrase::Temperature, format!("{:.2}", r.temperature)),
        language.labelled(Phrase::Humidity, format!("{:.2}", r.humidity)),
        language.labelled(Phrase::SoilMoisture, format!("{:.2}", r.soil_moisture)),
        language.labelled(Phrase::Csi, format!("{:.2}", record.csi)),
    ];
    if threshold.is_exceeded_by(record.csi) {
        lines.push(language.text(Phrase::StressAlert).to_string());
    }
    if record.is_anomaly() {
        lines.push(language.text(Phrase::TemperatureAnomaly).to_string());
    }
    lines
}

/// Selection summary for the dataset dashboard. The auto-season notice only
/// appears when the season was derived from the soil.
pub fn selection_lines(
    language: Language,
    request: &DatasetRequest,
    threshold: AlertThreshold,
) -> Vec<String> {
    let mut lines = vec![
        language.labelled(Phrase::SoilSelect, request.soil),
        language.labelled(Phrase::FarmingSelect, request.farming_type),
    ];
    if request.auto_season {
        lines.push(language.labelled(Phrase::SeasonAuto, request.season));
    }
    lines.push(language.labelled(Phrase::Threshold, threshold));
    lines
}

pub fn dataset_alert_lines(
    language: Language,
    dataset: &Dataset,
    threshold: AlertThreshold,
) -> Vec<String> {
    dataset
        .stressed_days(threshold)
        .into_iter()
        .map(|row| {
            format!(
                "{} (Day {}, CSI={:.2})",
                language.text(Phrase::StressAlert),
                row.day,
                row.csi
            )
        })
        .collect()
}

pub fn dataset_table(dataset: &Dataset) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4} {:<8} {:<11} {:<7} {:>11} {:>9} {:>12} {:>8}",
        "Day", "SoilType", "FarmingType", "Season", "Temperature", "Humidity", "SoilMoisture", "CSI"
    );
    for row in &dataset.rows {
        let _ = writeln!(
            out,
            "{:>4} {:<8} {:<11} {:<7} {:>11.2} {:>9.2} {:>12.2} {:>8.2}",
            row.day,
            row.soil_type.name(),
            row.farming_type,
            row.season.name(),
            row.temperature,
            row.humidity,
            row.soil_moisture,
            row.csi
        );
    }
    out
}
