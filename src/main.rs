//! Command-line interface for the PII redaction pipeline.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Arg, Command, ValueEnum};
use pii_redact::{Pipeline, ProcessingConfig};
use tracing::{error, info};

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warn,
    /// Info, warning, and error messages (default)
    Info,
    /// Debug and all messages
    Debug,
}

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    let log_level = matches.get_one::<LogLevel>("verbose").unwrap_or(&LogLevel::Info);
    init_logging(log_level);

    let input = matches.get_one::<String>("input").unwrap();
    let output = matches.get_one::<String>("output").unwrap();
    let full_name = matches.get_one::<String>("full-name").unwrap();

    if !PathBuf::from(input).exists() {
        error!("Input file does not exist: {}", input);
        process::exit(1);
    }

    let pipeline = Pipeline::new(ProcessingConfig::default());
    let start_time = std::time::Instant::now();

    match pipeline
        .execute(Path::new(input), Path::new(output), full_name)
        .await
    {
        Ok(()) => {
            info!("Redaction completed in {:.2?}", start_time.elapsed());
        }
        Err(e) => {
            error!("Pipeline execution failed: {}", e);
            process::exit(1);
        }
    }
}

fn build_cli() -> Command {
    Command::new("pii-redact")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Blurs names, emails, profile links and phone numbers out of a rendered PDF")
        .arg(
            Arg::new("input")
                .value_name("INPUT_PDF")
                .help("Input PDF file path")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .value_name("OUTPUT_PDF")
                .help("Output PDF file path")
                .required(true),
        )
        .arg(
            Arg::new("full-name")
                .value_name("FULL_NAME")
                .help("Full name to redact (quote multi-word names)")
                .required(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .value_parser(clap::value_parser!(LogLevel))
                .default_value("info")
                .help("Set logging verbosity"),
        )
}

fn init_logging(level: &LogLevel) {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let filter_level = match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(format!("pii_redact={}", filter_level)))
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
