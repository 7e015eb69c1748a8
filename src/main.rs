use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tarn::config::Config;
use tarn::report::{self, OutputFormat, Report, ResourceEntry};
use tarn::resource::{get_all_resource_keys, match_resource_keys};
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Terminal ARN navigator for AWS
#[derive(Parser, Debug)]
#[command(name = "tarn", version, about, long_about = None)]
struct Args {
    /// Output format (defaults to config, then table)
    #[arg(short, long, value_enum, global = true)]
    output: Option<OutputFormat>,

    /// Mask account ids in output
    #[arg(long, global = true)]
    demo: bool,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve ARNs (reads one per line from stdin when none or `-` is given)
    Parse {
        arns: Vec<String>,
    },
    /// List browsable resources, optionally matching a pattern
    Resources {
        pattern: Option<String>,
    },
    /// Show or change saved settings
    Config {
        /// Enable or disable demo mode
        #[arg(long)]
        set_demo: Option<bool>,

        /// Default output format
        #[arg(long, value_enum)]
        set_output: Option<OutputFormat>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("tarn started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("tarn").join("tarn.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".tarn").join("tarn.log");
    }
    PathBuf::from("tarn.log")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level)?;

    let mut config = Config::load();
    let format = config.effective_output(args.output);

    let output = match args.command {
        Command::Parse { arns } => {
            let inputs = collect_inputs(arns)?;
            let demo = config.effective_demo_mode(args.demo);
            tracing::debug!("Resolving {} inputs (demo: {})", inputs.len(), demo);

            let reports: Vec<Report> = inputs
                .iter()
                .map(|input| Report::new(input))
                .map(|r| if demo { r.masked() } else { r })
                .collect();
            report::render(&reports, format)?
        }
        Command::Resources { pattern } => {
            let keys = get_all_resource_keys();
            let matched = match_resource_keys(&keys, pattern.as_deref().unwrap_or_default());
            let entries: Vec<ResourceEntry> = matched
                .into_iter()
                .filter_map(ResourceEntry::from_key)
                .collect();
            report::render_resources(&entries, format)?
        }
        Command::Config {
            set_demo,
            set_output,
        } => {
            if let Some(enabled) = set_demo {
                config.set_demo_mode(enabled)?;
            }
            if let Some(output) = set_output {
                config.set_output(output)?;
            }
            serde_json::to_string_pretty(&config)? + "\n"
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// ARNs from the command line, or stdin when none (or `-`) are given
fn collect_inputs(arns: Vec<String>) -> Result<Vec<String>> {
    if !arns.is_empty() && arns != ["-"] {
        return Ok(arns);
    }

    let mut inputs = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            inputs.push(trimmed.to_string());
        }
    }
    Ok(inputs)
}
