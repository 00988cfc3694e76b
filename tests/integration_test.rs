//! Integration tests for the farm stress monitor

use approx::assert_relative_eq;
use farm_stress_monitor::catalog::{Season, SoilType};
use farm_stress_monitor::dataset::DatasetRequest;
use farm_stress_monitor::disease::{CapturedImage, ImageClassifier, StubClassifier};
use farm_stress_monitor::i18n::{Language, Phrase};
use farm_stress_monitor::sensor::anomaly::{assess, detect_anomaly, population_stats, AnomalyError};
use farm_stress_monitor::sensor::{Reading, ReadingGenerator, SensorRanges};
use farm_stress_monitor::session::{Session, SessionRegistry};
use farm_stress_monitor::stress::{calculate_csi, round2, AlertThreshold, StressBreakdown};
use farm_stress_monitor::visualization::dashboard::{
    dataset_alert_lines, reading_lines, selection_lines,
};
use farm_stress_monitor::visualization::TrendSeries;
use farm_stress_monitor::{Error, MonitorDashboard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ============================================================================
// CROP STRESS INDEX TESTS
// ============================================================================

#[test]
fn test_csi_worked_example() {
    assert_eq!(calculate_csi(30.0, 50.0, 30.0), 44.0);

    let breakdown = StressBreakdown::compute(30.0, 50.0, 30.0);
    assert_relative_eq!(breakdown.temperature_score, 50.0);
    assert_relative_eq!(breakdown.humidity_score, 50.0);
    assert_relative_eq!(breakdown.soil_score, 30.0);
}

#[test]
fn test_csi_zero_at_comfort_point() {
    assert_eq!(calculate_csi(20.0, 100.0, 60.0), 0.0);
}

#[test]
fn test_csi_increases_with_temperature() {
    let mut previous = calculate_csi(0.0, 0.0, 0.0);
    for t in 1..=60 {
        let csi = calculate_csi(f64::from(t), 0.0, 0.0);
        assert!(csi > previous, "CSI should rise with temperature (t={t})");
        previous = csi;
    }
}

#[test]
fn test_csi_at_twenty_degrees_ignores_temperature_term() {
    for h in (0..=100).step_by(10) {
        for s in (0..=100).step_by(10) {
            let (h, s) = (f64::from(h), f64::from(s));
            let expected = round2(0.3 * (100.0 - h) + 0.3 * (60.0 - s));
            assert_relative_eq!(calculate_csi(20.0, h, s), expected, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_csi_always_two_decimals() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let csi = calculate_csi(
            rng.gen_range(-10.0..60.0),
            rng.gen_range(0.0..100.0),
            rng.gen_range(0.0..100.0),
        );
        let scaled = csi * 100.0;
        assert!((scaled - scaled.round()).abs() < 1e-6, "CSI {csi} has more than 2 decimals");
    }
}

#[test]
fn test_round2_uses_stored_value() {
    // 1.115 and 2.675 are stored just below the tie.
    assert_eq!(round2(1.115), 1.11);
    assert_eq!(round2(2.675), 2.67);
    assert_eq!(round2(-3.14159), -3.14);
    assert_eq!(round2(44.0), 44.0);
}

#[test]
fn test_csi_is_deterministic() {
    let first = calculate_csi(33.337, 41.2, 18.9);
    let second = calculate_csi(33.337, 41.2, 18.9);
    assert_eq!(first, second);
}

#[test]
fn test_csi_accepts_out_of_range_inputs() {
    let csi = calculate_csi(-40.0, 250.0, -5.0);
    assert!(csi.is_finite());
}

// ============================================================================
// ALERT THRESHOLD TESTS
// ============================================================================

#[test]
fn test_threshold_bounds() {
    assert!(AlertThreshold::new(0).is_ok());
    assert!(AlertThreshold::new(100).is_ok());
    assert!(matches!(AlertThreshold::new(101), Err(Error::ThresholdOutOfRange(101))));
    assert!(matches!(AlertThreshold::new(-1), Err(Error::ThresholdOutOfRange(-1))));
    assert_eq!(AlertThreshold::default().value(), 70);
}

#[test]
fn test_threshold_is_strict() {
    let threshold = AlertThreshold::new(70).unwrap();
    assert!(!threshold.is_exceeded_by(70.0));
    assert!(threshold.is_exceeded_by(70.01));
    assert!(!threshold.is_exceeded_by(12.5));
}

// ============================================================================
// ANOMALY DETECTION TESTS
// ============================================================================

#[test]
fn test_flat_history_never_flags() {
    assert!(!detect_anomaly(&[25.0, 25.0, 25.0, 25.0], 25.0).unwrap());
    assert!(!detect_anomaly(&[25.0, 25.0, 25.0, 25.0], 40.0).unwrap());

    let check = assess(&[25.0, 25.0], 30.0).unwrap();
    assert_eq!(check.z_score, None);
}

#[test]
fn test_anomaly_detector_finds_outliers() {
    let history = [20.0, 21.0, 19.0, 20.0, 21.0, 19.0, 20.0];
    let check = assess(&history, 40.0).unwrap();

    assert!(check.is_anomaly, "40 °C should stand out from a ~20 °C history");
    assert_relative_eq!(check.stats.mean, 20.0, epsilon = 1e-12);
    assert_relative_eq!(check.stats.std_dev, (4.0_f64 / 7.0).sqrt(), epsilon = 1e-12);
    assert!(check.z_score.unwrap() > 2.0);
}

#[test]
fn test_anomaly_detector_accepts_normal() {
    assert!(!detect_anomaly(&[20.0, 22.0, 18.0, 21.0, 19.0], 20.5).unwrap());
}

#[test]
fn test_anomaly_detector_flags_low_outliers() {
    assert!(detect_anomaly(&[20.0, 22.0, 18.0, 21.0, 19.0], 10.0).unwrap());
}

#[test]
fn test_population_std_dev_uses_n() {
    let stats = population_stats(&[20.0, 22.0, 18.0, 21.0, 19.0]).unwrap();
    assert_relative_eq!(stats.mean, 20.0);
    assert_relative_eq!(stats.std_dev, 2.0_f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn test_empty_history_is_rejected() {
    assert_eq!(detect_anomaly(&[], 25.0), Err(AnomalyError::EmptyHistory));
    assert_eq!(population_stats(&[]), Err(AnomalyError::EmptyHistory));
}

// ============================================================================
// SESSION TESTS
// ============================================================================

#[test]
fn test_first_reading_is_never_anomalous() {
    let mut session = Session::new();
    let record = session.record(Reading::new(45.0, 10.0, 5.0)).unwrap();

    assert!(!record.is_anomaly());
    assert_eq!(session.len(), 1);
}

#[test]
fn test_session_excludes_new_value_from_statistics() {
    let mut session = Session::new();
    for t in [20.0, 21.0, 19.0, 20.0, 21.0, 19.0, 20.0] {
        session.record(Reading::new(t, 50.0, 30.0)).unwrap();
    }

    let record = session.record(Reading::new(40.0, 50.0, 30.0)).unwrap();
    assert!(record.is_anomaly());
    assert_relative_eq!(record.anomaly.stats.mean, 20.0, epsilon = 1e-12);
    assert_eq!(session.len(), 8);
    assert_eq!(session.temperatures().last(), Some(&40.0));
}

#[test]
fn test_session_records_csi() {
    let mut session = Session::new();
    let reading = Reading::new(30.0, 50.0, 30.0);
    let record = session.record(reading).unwrap();
    assert_eq!(record.csi, 44.0);
    assert_eq!(record.csi, reading.stress_breakdown().csi);
    assert_eq!(session.latest(), Some(&record));
}

#[test]
fn test_registry_keeps_sessions_isolated() {
    let registry = SessionRegistry::new();
    let a = registry.open();
    let b = registry.open();
    assert_ne!(a, b);

    for t in [20.0, 21.0, 22.0] {
        registry
            .with_session(a, |s| s.record(Reading::new(t, 50.0, 30.0)))
            .unwrap()
            .unwrap();
    }

    assert_eq!(registry.with_session(a, |s| s.len()), Some(3));
    assert_eq!(registry.with_session(b, |s| s.len()), Some(0));

    assert!(registry.close(a));
    assert!(!registry.close(a));
    assert_eq!(registry.with_session(a, |s| s.len()), None);
    assert_eq!(registry.active_sessions(), 1);
}

// ============================================================================
// GENERATOR TESTS
// ============================================================================

#[test]
fn test_generator_stays_in_range() {
    let ranges = SensorRanges::default();
    let mut gen = ReadingGenerator::seeded(42, ranges);

    for _ in 0..1000 {
        let reading = gen.generate();
        assert!(ranges.contains(&reading), "{reading:?} outside default ranges");
    }
}

#[test]
fn test_generator_is_reproducible_with_seed() {
    let mut a = ReadingGenerator::seeded(7, SensorRanges::default());
    let mut b = ReadingGenerator::seeded(7, SensorRanges::default());
    for _ in 0..20 {
        assert_eq!(a.generate(), b.generate());
    }
}

#[test]
fn test_generator_produces_varied_readings() {
    let mut gen = ReadingGenerator::seeded(42, SensorRanges::default());
    let temps: Vec<f64> = (0..100).map(|_| gen.generate().temperature).collect();

    let min = temps.iter().copied().fold(f64::INFINITY, f64::min);
    let max = temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert!(max - min > 1.0, "Temperature readings should vary");
}

#[test]
fn test_seasonal_ranges() {
    for season in Season::ALL {
        let ranges = season.ranges();
        let mut gen = ReadingGenerator::seeded(3, ranges);
        for _ in 0..200 {
            assert!(ranges.contains(&gen.generate()));
        }
    }
    let summer = Season::Summer.ranges();
    assert_eq!((summer.temperature.min, summer.temperature.max), (30.0, 45.0));
}

// ============================================================================
// CATALOG & LANGUAGE TESTS
// ============================================================================

#[test]
fn test_soil_defaults() {
    assert_eq!(SoilType::Sandy.default_season(), Season::Summer);
    assert_eq!(SoilType::Clay.default_season(), Season::Rainy);
    assert_eq!(SoilType::Loamy.default_season(), Season::Winter);
    assert_eq!(SoilType::Saline.default_season(), Season::Summer);
    assert_eq!(SoilType::Clay.farming_options(), &["Rice", "Sugarcane", "Wheat"]);
}

#[test]
fn test_farming_type_must_match_soil() {
    assert_eq!(SoilType::Saline.farming_type(None).unwrap(), "Barley");
    assert_eq!(SoilType::Saline.farming_type(Some("date palm")).unwrap(), "Date Palm");
    assert!(matches!(
        SoilType::Sandy.farming_type(Some("Rice")),
        Err(Error::FarmingNotOffered { soil: SoilType::Sandy, .. })
    ));
}

#[test]
fn test_names_parse_case_insensitively() {
    assert_eq!("loamy".parse::<SoilType>().unwrap(), SoilType::Loamy);
    assert_eq!("RAINY".parse::<Season>().unwrap(), Season::Rainy);
    assert_eq!(" hindi ".parse::<Language>().unwrap(), Language::Hindi);
    assert!(matches!(
        "Peaty".parse::<SoilType>(),
        Err(Error::UnknownSelection { kind: "soil type", .. })
    ));
}

#[test]
fn test_language_changes_only_rendering() {
    let mut english = Session::new();
    let mut telugu = Session::new();
    let reading = Reading::new(30.0, 50.0, 30.0);
    let threshold = AlertThreshold::new(40).unwrap();

    let en = english.record(reading).unwrap();
    let te = telugu.record(reading).unwrap();
    assert_eq!(en, te);

    let en_lines = reading_lines(Language::English, &en, threshold);
    let te_lines = reading_lines(Language::Telugu, &te, threshold);
    assert_eq!(en_lines[3], "Crop Stress Index: 44.00");
    assert_eq!(te_lines[3], "పంట ఒత్తిడి సూచిక: 44.00");
    assert_eq!(en_lines[4], Language::English.text(Phrase::StressAlert));
    assert_eq!(te_lines[4], "⚠️ హెచ్చరిక: పంట ఒత్తిడిలో ఉంది!");
}

// ============================================================================
// DASHBOARD TESTS
// ============================================================================

#[test]
fn test_monitor_flags_stress_above_threshold() {
    let mut low = MonitorDashboard::seeded(5, Language::English, AlertThreshold::new(0).unwrap());
    let mut high = MonitorDashboard::seeded(5, Language::English, AlertThreshold::new(100).unwrap());

    let low_obs = low.run(10).unwrap();
    let high_obs = high.run(10).unwrap();

    assert!(!low_obs[0].record.is_anomaly());
    assert!(high_obs.iter().all(|o| !o.stress_alert));
    for (a, b) in low_obs.iter().zip(&high_obs) {
        assert_eq!(a.record, b.record, "Threshold must not change the readings");
        assert_eq!(a.stress_alert, a.record.csi > 0.0);
    }
    assert_eq!(low.session().len(), 10);
}

#[test]
fn test_reading_lines_without_alerts() {
    let mut session = Session::new();
    let record = session.record(Reading::new(30.0, 50.0, 30.0)).unwrap();
    let lines = reading_lines(Language::English, &record, AlertThreshold::default());

    assert_eq!(
        lines,
        vec![
            "Temperature: 30.00",
            "Humidity: 50.00",
            "Soil Moisture: 30.00",
            "Crop Stress Index: 44.00",
        ]
    );
}

#[test]
fn test_dataset_days_and_selection() {
    let request = DatasetRequest::new(SoilType::Clay, None, None, 10).unwrap();
    assert_eq!(request.farming_type, "Rice");
    assert_eq!(request.season, Season::Rainy);
    assert_eq!(request.file_name(), "Clay_Rice_Rainy.csv");

    let dataset = request.generate(StdRng::seed_from_u64(9));
    let days: Vec<u32> = dataset.rows.iter().map(|r| r.day).collect();
    assert_eq!(days, (1..=10).collect::<Vec<_>>());

    let ranges = Season::Rainy.ranges();
    for row in &dataset.rows {
        assert!(ranges.temperature.contains(row.temperature));
        assert!(ranges.humidity.contains(row.humidity));
        assert!(ranges.soil_moisture.contains(row.soil_moisture));
        assert_eq!(row.temperature, round2(row.temperature));
        assert_eq!(row.soil_type, SoilType::Clay);
    }
}

#[test]
fn test_dataset_season_override() {
    let request = DatasetRequest::new(SoilType::Sandy, Some("Cotton"), Some(Season::Winter), 3).unwrap();
    assert_eq!(request.file_name(), "Sandy_Cotton_Winter.csv");
    assert_eq!(request.generate(StdRng::seed_from_u64(1)).len(), 3);
}

#[test]
fn test_selection_lines_announce_only_automatic_season() {
    let threshold = AlertThreshold::default();
    let notice = Language::English.text(Phrase::SeasonAuto);

    let auto = DatasetRequest::new(SoilType::Clay, None, None, 10).unwrap();
    assert!(auto.auto_season);
    let lines = selection_lines(Language::English, &auto, threshold);
    assert!(lines.contains(&format!("{notice}: Rainy")));

    let chosen = DatasetRequest::new(SoilType::Clay, None, Some(Season::Summer), 10).unwrap();
    assert!(!chosen.auto_season);
    let lines = selection_lines(Language::English, &chosen, threshold);
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| !l.starts_with(notice)));
}

#[test]
fn test_dataset_alerts_per_day() {
    // Summer readings always score above 40.
    let request = DatasetRequest::new(SoilType::Sandy, None, None, 10).unwrap();
    let dataset = request.generate(StdRng::seed_from_u64(2));

    let all = dataset_alert_lines(Language::English, &dataset, AlertThreshold::new(0).unwrap());
    assert_eq!(all.len(), 10);
    assert!(all[0].starts_with("⚠️ ALERT: Crop under stress! (Day 1, CSI="));

    let none = dataset_alert_lines(Language::English, &dataset, AlertThreshold::new(100).unwrap());
    assert!(none.is_empty());
}

#[test]
fn test_trend_series_range_covers_negative_csi() {
    let mut session = Session::new();
    session.record(Reading::new(10.0, 100.0, 100.0)).unwrap();
    session.record(Reading::new(40.0, 20.0, 10.0)).unwrap();

    let series = TrendSeries::from_records(session.records());
    assert_eq!(series.len(), 2);
    let (lo, hi) = series.value_range();
    assert!(lo < series.csi[0]);
    assert!(hi > series.humidity[0]);
}

// ============================================================================
// DISEASE DETECTION TESTS
// ============================================================================

#[test]
fn test_stub_classifier_reports_fixed_diagnosis() {
    let diagnosis = StubClassifier
        .classify(&CapturedImage::from_bytes(vec![0xFF, 0xD8, 0xFF]))
        .expect("any capture yields a diagnosis");

    assert_eq!(
        diagnosis.render(Language::English),
        vec![
            "🚨 Disease detected: Leaf Spot",
            "Recommended Medicine: Copper Fungicide",
            "Dosage: 2g per litre, apply in evening",
        ]
    );
    assert_eq!(diagnosis.render(Language::Hindi)[0], "🚨 रोग पाया गया: Leaf Spot");
}

#[test]
fn test_stub_classifier_ignores_empty_capture() {
    assert_eq!(StubClassifier.classify(&CapturedImage::default()), None);
}
