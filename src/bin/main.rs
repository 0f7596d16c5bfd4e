//! Univers CLI - Ask questions about Business Objects universe exports
//!
//! Usage:
//!   univers ask <universe.json> "<question>" [--output <format>]
//!   univers sanitize <universe.json>
//!   univers summary <universe.json>
//!
//! Examples:
//!   univers ask exports/ventes.json "Quels objets contiennent la marge ?"
//!   univers ask exports/ventes.json "marge" --output json
//!   univers summary exports/ventes.json

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use univers::config::Settings;
use univers::query::answer_question_with_limits;
use univers::sanitize::sanitize_with_limits;

#[derive(Parser)]
#[command(name = "univers")]
#[command(about = "Univers - Question answering over Business Objects universe exports")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a question about a universe export
    Ask {
        /// Path to the universe JSON file
        file: PathBuf,

        /// The question to answer
        question: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Print the sanitized form of a universe export
    Sanitize {
        /// Path to the universe JSON file
        file: PathBuf,
    },

    /// Print entity counts for a universe export
    Summary {
        /// Path to the universe JSON file
        file: PathBuf,
    },

    /// Start the HTTP API server
    #[cfg(feature = "ui")]
    Serve {
        /// Port to listen on (overrides univers.toml)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Answer plus per-category match lines
    Text,
    /// Full query outcome as JSON
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            file,
            question,
            output,
        } => cmd_ask(file, question, output),
        Commands::Sanitize { file } => cmd_sanitize(file),
        Commands::Summary { file } => cmd_summary(file),
        #[cfg(feature = "ui")]
        Commands::Serve { port } => cmd_serve(port),
    }
}

fn cmd_ask(file: PathBuf, question: String, output: OutputFormat) -> ExitCode {
    let raw = match read_document(&file) {
        Ok(value) => value,
        Err(code) => return code,
    };

    let settings = Settings::load().unwrap_or_default();
    let outcome = answer_question_with_limits(&question, &raw, &settings.limits);

    match output {
        OutputFormat::Json => match serde_json::to_string_pretty(&outcome) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error serializing outcome: {}", e);
                ExitCode::FAILURE
            }
        },
        OutputFormat::Text => {
            println!("{}", outcome.answer);

            if !outcome.matches.objects.is_empty() {
                println!();
                println!("Objets:");
                for m in &outcome.matches.objects {
                    match &m.kind {
                        Some(kind) => println!("  - {} ({}, classe {})", m.name, kind, m.class),
                        None => println!("  - {} (classe {})", m.name, m.class),
                    }
                }
            }

            if !outcome.matches.classes.is_empty() {
                println!();
                println!("Classes:");
                for m in &outcome.matches.classes {
                    println!("  - {}", m.name);
                }
            }

            if !outcome.matches.tables.is_empty() {
                println!();
                println!("Tables:");
                for m in &outcome.matches.tables {
                    println!("  - {}", m.name);
                }
            }

            if !outcome.matches.joins.is_empty() {
                println!();
                println!("Jointures:");
                for m in &outcome.matches.joins {
                    println!("  - {} ({} ↔ {})", m.name, m.from, m.to);
                }
            }

            ExitCode::SUCCESS
        }
    }
}

fn cmd_sanitize(file: PathBuf) -> ExitCode {
    let raw = match read_document(&file) {
        Ok(value) => value,
        Err(code) => return code,
    };

    let settings = Settings::load().unwrap_or_default();
    let universe = sanitize_with_limits(&raw, &settings.limits);

    match serde_json::to_string_pretty(&universe) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing universe: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_summary(file: PathBuf) -> ExitCode {
    let raw = match read_document(&file) {
        Ok(value) => value,
        Err(code) => return code,
    };

    let settings = Settings::load().unwrap_or_default();
    let universe = sanitize_with_limits(&raw, &settings.limits);
    let summary = universe.summary();

    println!("Univers: {}", universe.metadata.name);
    if let Some(description) = &universe.metadata.description {
        println!("{}", description);
    }
    println!();
    println!("  {} classes", summary.classes);
    println!("  {} objets", summary.objects);
    println!("  {} tables", summary.tables);
    println!("  {} jointures", summary.joins);

    ExitCode::SUCCESS
}

#[cfg(feature = "ui")]
fn cmd_serve(port: Option<u16>) -> ExitCode {
    let mut settings = Settings::load().unwrap_or_default();
    if let Some(port) = port {
        settings.server.port = port;
    }

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error starting runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(univers::web::serve(settings)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Read and parse a universe file. Both failure modes are framing errors.
fn read_document(file: &PathBuf) -> Result<serde_json::Value, ExitCode> {
    let content = match fs::read_to_string(file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", file.display(), e);
            return Err(ExitCode::FAILURE);
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => Ok(value),
        Err(e) => {
            eprintln!("Error parsing '{}': {}", file.display(), e);
            Err(ExitCode::FAILURE)
        }
    }
}
