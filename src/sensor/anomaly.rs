use thiserror::Error;

/// Readings further than this many standard deviations from the mean are anomalies.
pub const Z_SCORE_LIMIT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnomalyError {
    #[error("anomaly check needs at least one prior temperature reading")]
    EmptyHistory,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationStats {
    pub mean: f64,
    /// Population standard deviation (divisor N).
    pub std_dev: f64,
}

pub fn population_stats(values: &[f64]) -> Result<PopulationStats, AnomalyError> {
    if values.is_empty() {
        return Err(AnomalyError::EmptyHistory);
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    Ok(PopulationStats {
        mean,
        std_dev: variance.sqrt(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnomalyCheck {
    pub stats: PopulationStats,
    /// `None` when the history has zero spread.
    pub z_score: Option<f64>,
    pub is_anomaly: bool,
}

/// Compare `value` against the distribution of `history`.
///
/// `history` must not contain `value` itself unless the caller deliberately
/// seeds it that way. A flat history (sigma == 0) never flags an anomaly.
pub fn assess(history: &[f64], value: f64) -> Result<AnomalyCheck, AnomalyError> {
    let stats = population_stats(history)?;

    if stats.std_dev == 0.0 {
        return Ok(AnomalyCheck {
            stats,
            z_score: None,
            is_anomaly: false,
        });
    }

    let z = (value - stats.mean) / stats.std_dev;
    Ok(AnomalyCheck {
        stats,
        z_score: Some(z),
        is_anomaly: z.abs() > Z_SCORE_LIMIT,
    })
}

pub fn detect_anomaly(history: &[f64], value: f64) -> Result<bool, AnomalyError> {
    assess(history, value).map(|check| check.is_anomaly)
}
