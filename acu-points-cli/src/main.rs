//! ACU Point Table CLI Application
//!
//! Command-line front end for the acu-points library. It reads a document
//! mixing equipment documentation with `:ACU` point lines and writes the
//! normalized point table, either with the local transformer or by handing
//! the document to a chat-completion model.

use acu_points::{ModelClient, OutputRecord, RejectedLine, Transformer};
use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

mod config;

use config::{AppConfig, OutputFormat};

/// Environment variable consulted when `--api-key` is not given
const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// ACU Point Generator - Build ACU point tables from documentation
#[derive(Parser, Debug)]
#[command(name = "acu-points")]
#[command(about = "Build ACU point tables from equipment documentation", long_about = None)]
#[command(version)]
struct Args {
    /// Document to read (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file for the point table (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Send the document to the model instead of transforming it locally
    #[arg(long)]
    ai: bool,

    /// API key for the model endpoint (default: $OPENROUTER_API_KEY)
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Model identifier to use with --ai
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,

    /// Fail on the first malformed point line instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Never append evt annotations
    #[arg(long)]
    no_events: bool,

    /// Output format for the local transformer
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    records: &'a [OutputRecord],
    rejected: &'a [RejectedLine],
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::debug!("ACU Point Generator v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using acu-points library v{}", acu_points::VERSION);

    let config = resolve_config(&args)?;
    let document = read_document(args.input.as_deref())?;

    let table = if args.ai {
        if config.output.format == OutputFormat::Json {
            log::warn!("--format json is ignored with --ai; the model answer is written as-is");
        }
        let api_key = args
            .api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .with_context(|| format!("--ai needs an API key (--api-key or ${})", API_KEY_ENV))?;
        model_mode(&document, &config, &api_key)
            .context("AI parsing failed. Check API key and connection.")?
    } else {
        local_mode(&document, &config)?
    };

    write_output(args.output.as_deref(), &table)
}

/// Load the config file (if any) and apply command-line overrides
fn resolve_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    if args.strict {
        config.transform = config.transform.strict();
    }
    if args.no_events {
        config.transform = config.transform.with_event_annotations(false);
    }
    if let Some(model) = &args.model {
        config.model = config.model.with_model(model.as_str());
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }

    log::debug!("Effective configuration: {:?}", config);
    Ok(config)
}

fn read_document(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {:?}", path)),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}

/// Local mode - deterministic transformation
fn local_mode(document: &str, config: &AppConfig) -> Result<String> {
    let transformer = Transformer::new(config.transform.clone());
    let output = transformer.run(document)?;

    for rejected in &output.rejected {
        log::warn!("Line {} dropped ({}): {}", rejected.line, rejected.reason, rejected.text);
    }

    match config.output.format {
        OutputFormat::Text => Ok(output.render()),
        OutputFormat::Json => {
            let report = JsonReport {
                records: &output.records,
                rejected: &output.rejected,
            };
            serde_json::to_string_pretty(&report).context("Failed to serialize report")
        }
    }
}

/// Model mode - one request to the chat-completion endpoint
fn model_mode(document: &str, config: &AppConfig, api_key: &str) -> Result<String> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let client = ModelClient::new(config.model.clone());
    let answer = runtime.block_on(client.delegate(document, api_key))?;
    Ok(answer)
}

fn write_output(path: Option<&Path>, table: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, format!("{}\n", table))
                .with_context(|| format!("Failed to write output file: {:?}", path))?;
            log::info!("Point table written to {:?}", path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", table)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use acu_points::MalformedLinePolicy;

    const DOC: &str = "0: Ephemeris Table 1\n\
                       :ACU:PNT:FI:10004:EPHEMERIS_TABLE:\"Ephemeris Table\":grp \"Slave Table\":\n\
                       :ACU:PNT";

    #[test]
    fn test_args_overrides() {
        let args = Args::parse_from(["acu-points", "--strict", "--no-events", "--model", "x/y", "-f", "json"]);
        let config = resolve_config(&args).unwrap();

        assert_eq!(config.transform.malformed_lines, MalformedLinePolicy::Fail);
        assert!(!config.transform.annotate_events);
        assert_eq!(config.model.model, "x/y");
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_local_mode_text() {
        let table = local_mode(DOC, &AppConfig::default()).unwrap();
        assert_eq!(
            table,
            ":ACU:PNT:FI:10004:EPHEMERIS:\"Ephemeris Table\":grp \"Slave Table\":evt \"Ephemeris Table 1\"==0,0:"
        );
    }

    #[test]
    fn test_local_mode_json() {
        let mut config = AppConfig::default();
        config.output.format = OutputFormat::Json;

        let json: serde_json::Value = serde_json::from_str(&local_mode(DOC, &config).unwrap()).unwrap();
        assert_eq!(json["records"][0]["name"], "EPHEMERIS");
        assert_eq!(json["records"][0]["events"][0]["value"], "0");
        assert_eq!(json["rejected"][0]["line"], 3);
    }

    #[test]
    fn test_local_mode_strict_fails() {
        let args = Args::parse_from(["acu-points", "--strict"]);
        let config = resolve_config(&args).unwrap();
        assert!(local_mode(DOC, &config).is_err());
    }

    #[test]
    fn test_read_and_write_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("doc.txt");
        let output = dir.path().join("table.txt");
        fs::write(&input, DOC).unwrap();

        let document = read_document(Some(&input)).unwrap();
        let table = local_mode(&document, &AppConfig::default()).unwrap();
        write_output(Some(&output), &table).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), format!("{}\n", table));
        // The input document is never touched
        assert_eq!(fs::read_to_string(&input).unwrap(), DOC);
    }
}
