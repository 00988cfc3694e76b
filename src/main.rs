use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use farm_stress_monitor::config::{load_config, DashboardConfig, DEFAULT_CONFIG_PATH};
use farm_stress_monitor::dataset::DatasetRequest;
use farm_stress_monitor::disease::{CapturedImage, ImageClassifier, StubClassifier};
use farm_stress_monitor::i18n::{Language, Phrase};
use farm_stress_monitor::monitor::MonitorDashboard;
use farm_stress_monitor::sensor::{ReadingGenerator, SensorRanges};
use farm_stress_monitor::visualization::dashboard::{
    dataset_alert_lines, dataset_table, reading_lines, selection_lines,
};
use farm_stress_monitor::{AlertThreshold, Season, SoilType};

// ============================================================================
// CLI ARGUMENTS
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "farm-monitor")]
#[command(about = "Farm micro-climate monitoring and crop stress dashboards")]
#[command(version)]
struct Args {
    /// Configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Display language (English, Telugu, Hindi)
    #[arg(short, long, global = true)]
    language: Option<Language>,

    /// Stress alert threshold on the CSI scale (0-100)
    #[arg(short, long, global = true)]
    threshold: Option<i64>,

    /// Fixed RNG seed for reproducible readings
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Directory for CSV exports and charts
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// Skip chart rendering
    #[arg(long, global = true)]
    no_chart: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Live dashboard: take readings, flag stress and temperature anomalies
    Monitor {
        /// Number of readings to take
        #[arg(short = 'n', long)]
        readings: Option<usize>,
    },
    /// Smart farming dashboard: season-conditioned dataset for a soil and crop
    Dataset {
        /// Soil type (Sandy, Clay, Loamy, Saline)
        #[arg(long)]
        soil: Option<SoilType>,
        /// Farming type; must be one of the soil's suggestions
        #[arg(long)]
        farming: Option<String>,
        /// Season override (Summer, Rainy, Winter)
        #[arg(long)]
        season: Option<Season>,
        /// Number of days to generate
        #[arg(long)]
        days: Option<u32>,
    },
    /// Plant disease detection from a camera capture
    Diagnose {
        /// Captured photo of the plant
        image: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let mut cfg = load_config(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    apply_overrides(&mut cfg, &args)?;

    match args.command {
        Command::Monitor { readings } => run_monitor(&cfg, readings.unwrap_or(cfg.readings)),
        Command::Dataset {
            soil,
            farming,
            season,
            days,
        } => {
            let request = DatasetRequest::new(
                soil.unwrap_or(cfg.soil),
                farming.as_deref().or(cfg.farming.as_deref()),
                season.or(cfg.season),
                days.unwrap_or(cfg.days),
            )?;
            run_dataset(&cfg, &request)
        }
        Command::Diagnose { image } => run_diagnose(cfg.language, image.as_deref()),
    }
}

fn apply_overrides(cfg: &mut DashboardConfig, args: &Args) -> Result<()> {
    if let Some(language) = args.language {
        cfg.language = language;
    }
    if let Some(threshold) = args.threshold {
        cfg.threshold = AlertThreshold::new(threshold)?;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    if let Some(dir) = &args.output_dir {
        cfg.output_dir = dir.clone();
    }
    if args.no_chart {
        cfg.chart.enabled = false;
    }
    Ok(())
}

fn rng_for(cfg: &DashboardConfig) -> StdRng {
    match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn ensure_output_dir(cfg: &DashboardConfig) -> Result<()> {
    std::fs::create_dir_all(&cfg.output_dir)
        .with_context(|| format!("creating {}", cfg.output_dir.display()))
}

fn banner(title: &str) {
    println!("===========================================");
    println!("{title}");
    println!("===========================================\n");
}

// ============================================================================
// LIVE MONITOR
// ============================================================================

fn run_monitor(cfg: &DashboardConfig, readings: usize) -> Result<()> {
    let t = cfg.language;
    ensure_output_dir(cfg)?;
    banner(t.text(Phrase::MonitorTitle));
    println!("{}\n", t.labelled(Phrase::Threshold, cfg.threshold));

    let generator = ReadingGenerator::new(rng_for(cfg), SensorRanges::default());
    let mut dashboard = MonitorDashboard::new(generator, t, cfg.threshold);

    for i in 1..=readings {
        let observation = dashboard.step()?;
        println!("--- #{i} ---");
        for line in reading_lines(t, &observation.record, cfg.threshold) {
            println!("{line}");
        }
        println!();
    }

    if let Some(path) = dashboard.export_csv(&cfg.output_dir)? {
        println!("CSV: {}", path.display());
    }
    if cfg.chart.enabled {
        let path = cfg.output_dir.join("farm_trends.png");
        if dashboard.render_chart(&path, (cfg.chart.width, cfg.chart.height))? {
            println!("{}: {}", t.text(Phrase::CombinedChart), path.display());
        }
    }
    Ok(())
}

// ============================================================================
// DATASET
// ============================================================================

fn run_dataset(cfg: &DashboardConfig, request: &DatasetRequest) -> Result<()> {
    let t = cfg.language;
    ensure_output_dir(cfg)?;
    banner(t.text(Phrase::DatasetTitle));
    for line in selection_lines(t, request, cfg.threshold) {
        println!("{line}");
    }
    println!("\n{}\n", t.text(Phrase::Generate));

    let dataset = request.generate(rng_for(cfg));
    print!("{}", dataset_table(&dataset));
    println!();
    for line in dataset_alert_lines(t, &dataset, cfg.threshold) {
        println!("{line}");
    }

    let chart = cfg
        .chart
        .enabled
        .then(|| (t.text(Phrase::Trends), (cfg.chart.width, cfg.chart.height)));
    let outputs = dataset.write_outputs(request, &cfg.output_dir, chart)?;

    println!("{}: {}", t.text(Phrase::Download), outputs.csv.display());
    if let Some(path) = outputs.chart {
        println!("{}: {}", t.text(Phrase::Trends), path.display());
    }
    Ok(())
}

// ============================================================================
// DISEASE DETECTION
// ============================================================================

fn run_diagnose(language: Language, image: Option<&Path>) -> Result<()> {
    println!("{}", language.text(Phrase::DiseaseHeader));
    println!("{}", language.text(Phrase::CameraPrompt));

    let Some(path) = image else {
        return Ok(());
    };
    let capture = CapturedImage::load(path).with_context(|| format!("reading {}", path.display()))?;
    if let Some(diagnosis) = StubClassifier.classify(&capture) {
        for line in diagnosis.render(language) {
            println!("{line}");
        }
    }
    Ok(())
}
