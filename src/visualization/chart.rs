use std::path::Path;

use log::info;
use plotters::prelude::*;

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::session::Record;

/// Per-reading values drawn as one line each on the trends chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendSeries {
    pub temperature: Vec<f64>,
    pub humidity: Vec<f64>,
    pub soil_moisture: Vec<f64>,
    pub csi: Vec<f64>,
}

impl TrendSeries {
    pub fn from_records(records: &[Record]) -> Self {
        let mut series = Self::default();
        for r in records {
            series.push(r.reading.temperature, r.reading.humidity, r.reading.soil_moisture, r.csi);
        }
        series
    }

    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut series = Self::default();
        for row in &dataset.rows {
            series.push(row.temperature, row.humidity, row.soil_moisture, row.csi);
        }
        series
    }

    fn push(&mut self, temperature: f64, humidity: f64, soil_moisture: f64, csi: f64) {
        self.temperature.push(temperature);
        self.humidity.push(humidity);
        self.soil_moisture.push(soil_moisture);
        self.csi.push(csi);
    }

    pub fn len(&self) -> usize {
        self.csi.len()
    }

    pub fn is_empty(&self) -> bool {
        self.csi.is_empty()
    }

    /// Y-axis span covering every series, always including zero.
    pub fn value_range(&self) -> (f64, f64) {
        let all = self
            .temperature
            .iter()
            .chain(&self.humidity)
            .chain(&self.soil_moisture)
            .chain(&self.csi)
            .copied();
        let (min, max) = all.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        let pad = ((max - min) * 0.1).max(1.0);
        (if min < 0.0 { min - pad } else { 0.0 }, max + pad)
    }
}

pub fn generate_trend_chart(
    series: &TrendSeries,
    caption: &str,
    path: &Path,
    size: (u32, u32),
) -> Result<()> {
    draw(series, caption, path, size).map_err(|e| Error::Chart(e.to_string()))?;
    info!("wrote trend chart with {} points to {}", series.len(), path.display());
    Ok(())
}

fn draw(
    series: &TrendSeries,
    caption: &str,
    path: &Path,
    size: (u32, u32),
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let (y_min, y_max) = series.value_range();
    let x_max = series.len().max(2) as f64;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(1.0..x_max, y_min..y_max)?;

    chart.configure_mesh().x_desc("Reading").y_desc("Value").draw()?;

    let lines: [(&str, &[f64], RGBColor); 4] = [
        ("Temperature", &series.temperature, RED),
        ("Humidity", &series.humidity, BLUE),
        ("SoilMoisture", &series.soil_moisture, GREEN),
        ("CSI", &series.csi, BLACK),
    ];
    for (label, values, color) in lines {
        chart
            .draw_series(LineSeries::new(
                values.iter().enumerate().map(|(i, v)| ((i + 1) as f64, *v)),
                &color,
            ))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}
