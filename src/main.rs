use clap::Parser;
use colored::Colorize;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;
use tracing::info;

mod config;
mod engine;
mod error;
mod graph;
mod intake;
mod model;
mod report;
mod strip;

use config::Config;
use engine::Engine;
use report::{JsonReporter, ReportFormat, TerminalReporter};
use strip::StripArchivesBuilder;

/// Reachability engine and archive strip filter demonstration harness.
///
/// This binary is intake/reporting plumbing around the engine — the real
/// class-file parser and AOT compilation pipeline it would normally sit
/// inside are out of scope here.
#[derive(Parser, Debug)]
#[command(name = "treeshake-reach")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON class descriptor stream.
    descriptors: Option<PathBuf>,

    /// Path to a TOML config file (defaults to `./treeshake.toml` if present).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tree-shaker policy override.
    #[arg(short, long, value_enum)]
    mode: Option<CliMode>,

    /// Output format.
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: ReportFormat,

    /// Also evaluate the archive strip filter over these paths and print
    /// the keep/drop decision for each.
    #[arg(long)]
    strip_check: Vec<String>,

    /// Verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Suppress all but error-level logging.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum CliMode {
    None,
    Conservative,
    Aggressive,
}

impl From<CliMode> for model::TreeShakerMode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::None => model::TreeShakerMode::None,
            CliMode::Conservative => model::TreeShakerMode::Conservative,
            CliMode::Aggressive => model::TreeShakerMode::Aggressive,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    info!("treeshake-reach v{}", env!("CARGO_PKG_VERSION"));

    let mut config = load_config(&cli)?;
    if let Some(mode) = cli.mode {
        config.mode = mode.into();
    }
    if let Some(path) = &cli.descriptors {
        config.descriptors = Some(path.clone());
    }

    if let Some(descriptors_path) = &config.descriptors {
        run_reachability(&config, descriptors_path, cli.format)?;
    }

    if !cli.strip_check.is_empty() {
        run_strip_check(&config, &cli.strip_check)?;
    }

    if config.descriptors.is_none() && cli.strip_check.is_empty() {
        eprintln!(
            "{}",
            "Nothing to do: pass a descriptor stream or --strip-check PATH".yellow()
        );
    }

    Ok(())
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(path) = &cli.config {
        Config::from_file(path).into_diagnostic()
    } else {
        Config::from_default_locations(&std::env::current_dir().into_diagnostic()?).into_diagnostic()
    }
}

fn run_reachability(config: &Config, descriptors_path: &PathBuf, format: ReportFormat) -> Result<()> {
    let entries = intake::load_descriptors(descriptors_path).into_diagnostic()?;
    info!(classes = entries.len(), "loaded descriptor stream");

    let mut engine = Engine::new(config.mode);
    for entry in &entries {
        engine.add(&entry.class, entry.is_root);
    }

    let all_classes = engine.get_all_classes();
    let reachable = engine.find_reachable_classes();

    match format {
        ReportFormat::Terminal => {
            TerminalReporter::new().report(&all_classes, &reachable);
        }
        ReportFormat::Json => {
            println!("{}", JsonReporter::new().render(&all_classes, &reachable));
        }
    }

    Ok(())
}

fn run_strip_check(config: &Config, paths: &[String]) -> Result<()> {
    let mut builder = StripArchivesBuilder::new();
    builder
        .add_include(config.strip_include.clone())
        .into_diagnostic()?;
    builder
        .add_exclude(config.strip_exclude.clone())
        .into_diagnostic()?;
    let archive_config = builder.build().into_diagnostic()?;

    println!();
    for path in paths {
        if archive_config.should_include(path) {
            println!("  {} {}", "keep".green(), path);
        } else {
            println!("  {} {}", "drop".red(), path);
        }
    }

    Ok(())
}
