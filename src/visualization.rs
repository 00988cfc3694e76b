//! Visualization module - Text dashboards and trend charts

pub mod chart;
pub mod dashboard;

pub use chart::{generate_trend_chart, TrendSeries};
