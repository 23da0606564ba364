//! Mentis demo
//!
//! Builds a square-law theory from the configured data, refines it with the
//! configured update data, and prints the result.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use mentis_engine::{telemetry, Mentis, MentisConfig, MentisSnapshot, UpdateReport};
use serde::Serialize;

/// Mentis CLI
#[derive(Parser)]
#[command(name = "mentis")]
#[command(about = "Square-law hypothesis demo", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "MENTIS_CONFIG")]
    config: Option<String>,

    /// Log level (overrides the configured level)
    #[arg(long, env = "MENTIS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long)]
    log_json: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON document printed by `--output json`: final engine state plus the
/// per-pair outcome of the update pass.
#[derive(Serialize)]
struct DemoOutput<'a> {
    #[serde(flatten)]
    snapshot: MentisSnapshot,
    update: &'a UpdateReport,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = MentisConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.log_json {
        config.logging.json = true;
    }

    telemetry::init(&config.logging);

    run(config, cli.output)
}

fn run(config: MentisConfig, output: OutputFormat) -> anyhow::Result<()> {
    let theory_data = config.demo.theory_data.clone();
    let update_data = config.demo.update_data.clone();
    let mut mentis = Mentis::new(config);

    let (theory, _) = mentis.build_theory(&theory_data)?;
    if output == OutputFormat::Text {
        println!("Theory: {}", display_label(theory.as_deref()));
    }

    let report = mentis.update(&update_data)?;
    tracing::debug!(
        updated = report.updates.len(),
        skipped = report.skipped.len(),
        "update pass finished"
    );

    match output {
        OutputFormat::Text => {
            println!(
                "Updated theory: {}",
                display_label(mentis.best_hypothesis())
            );
        }
        OutputFormat::Json => {
            let doc = DemoOutput {
                snapshot: mentis.snapshot(),
                update: &report,
            };
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }

    Ok(())
}

fn display_label(label: Option<&str>) -> &str {
    label.unwrap_or("none")
}
