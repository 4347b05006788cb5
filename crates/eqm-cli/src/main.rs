//! EQ Match command-line tools
//!
//! Usage:
//!   eqmatch score --user u.json --target t.json    - Score an attempt
//!   eqmatch curve --bands b.json                   - Print a band set's curve
//!   eqmatch compare --user u.json --target t.json  - Compare two curves

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use eqm_core::Band;
use eqm_curve::{CurveConfig, compare_band_sets, curve_with};
use eqm_score::{EqScorer, ReportFormat, ScoreConfig, ScoreReport};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "eqmatch", about = "EQ matching scores and curves")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a user band set against a target
    Score {
        /// JSON array of user bands
        #[arg(short, long)]
        user: PathBuf,

        /// JSON array of target bands
        #[arg(short, long)]
        target: PathBuf,

        /// Score config file (.json, .yaml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Difficulty preset (beginner, standard, expert)
        #[arg(short, long, conflicts_with = "config")]
        preset: Option<String>,

        /// Gain tolerance override (dB)
        #[arg(long)]
        tol_db: Option<f64>,

        /// Frequency tolerance override (Hz)
        #[arg(long)]
        tol_freq: Option<f64>,

        /// Q tolerance override
        #[arg(long)]
        tol_q: Option<f64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the sampled response curve of a band set
    Curve {
        /// JSON array of bands
        #[arg(short, long)]
        bands: PathBuf,

        /// Number of sample points
        #[arg(short, long, default_value_t = 100)]
        points: usize,

        /// Output format (text or json)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Compare the curves of two band sets
    Compare {
        /// JSON array of user bands
        #[arg(short, long)]
        user: PathBuf,

        /// JSON array of target bands
        #[arg(short, long)]
        target: PathBuf,

        /// Number of sample points
        #[arg(short, long, default_value_t = 100)]
        points: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            user,
            target,
            config,
            preset,
            tol_db,
            tol_freq,
            tol_q,
            format,
        } => {
            let config = build_config(config.as_deref(), preset.as_deref(), tol_db, tol_freq, tol_q)?;
            run_score(&user, &target, &config, format)
        }
        Commands::Curve {
            bands,
            points,
            format,
        } => run_curve(&bands, points, format),
        Commands::Compare {
            user,
            target,
            points,
        } => run_compare(&user, &target, points),
    }
}

fn build_config(
    path: Option<&Path>,
    preset: Option<&str>,
    tol_db: Option<f64>,
    tol_freq: Option<f64>,
    tol_q: Option<f64>,
) -> Result<ScoreConfig> {
    let mut config = match (path, preset) {
        (Some(path), _) => ScoreConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        (None, Some(name)) => {
            ScoreConfig::preset(name).ok_or_else(|| anyhow!("Unknown preset: {}", name))?
        }
        (None, None) => ScoreConfig::default(),
    };

    if let Some(tol_db) = tol_db {
        config = config.with_tol_db(tol_db);
    }
    if let Some(tol_freq) = tol_freq {
        config = config.with_tol_freq(tol_freq);
    }
    if let Some(tol_q) = tol_q {
        config = config.with_tol_q(tol_q);
    }

    config.validate().context("Invalid tolerance override")?;
    Ok(config)
}

fn read_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn read_bands(path: &Path) -> Result<Vec<Band>> {
    serde_json::from_value(read_json(path)?)
        .with_context(|| format!("{} is not an array of bands", path.display()))
}

fn run_score(user: &Path, target: &Path, config: &ScoreConfig, format: OutputFormat) -> Result<()> {
    let user_value = read_json(user)?;
    let target_value = read_json(target)?;
    let score = EqScorer::score_values(&user_value, &target_value, config)
        .context("Failed to score bands")?;

    log::info!("{}", score.summary());

    match format {
        OutputFormat::Text => print!("{}", score.detailed_report()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&score)?),
        OutputFormat::Markdown => {
            let mut report = ScoreReport::new("EQ Match", config.pass_threshold);
            report.add_score(attempt_name(target), score);
            print!("{}", report.generate(ReportFormat::Markdown));
        }
    }
    Ok(())
}

fn run_curve(bands: &Path, points: usize, format: OutputFormat) -> Result<()> {
    let bands = read_bands(bands)?;
    let config = CurveConfig::default().with_num_points(points);
    let curve = curve_with(&bands, &config);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&curve)?),
        OutputFormat::Text | OutputFormat::Markdown => {
            for band in &bands {
                println!("# {}", describe_band(band));
            }
            for point in &curve {
                println!("{:>10.1} Hz  {:>+7.2} dB", point.freq_hz, point.gain_db);
            }
        }
    }
    Ok(())
}

fn run_compare(user: &Path, target: &Path, points: usize) -> Result<()> {
    let user = read_bands(user)?;
    let target = read_bands(target)?;
    let config = CurveConfig::default().with_num_points(points);

    println!("{}", compare_band_sets(&user, &target, &config).summary());
    Ok(())
}

fn describe_band(band: &Band) -> String {
    let filter_type = band.filter_type.unwrap_or_default();
    format!(
        "{} {:.0} Hz {:+.1} dB Q {:.2}",
        filter_type.name(),
        band.freq,
        band.gain_db,
        band.q.unwrap_or(eqm_core::DEFAULT_Q)
    )
}

fn attempt_name(target: &Path) -> String {
    target
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or("attempt")
        .to_string()
}
