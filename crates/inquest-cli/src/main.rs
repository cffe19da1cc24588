use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod output;

use inquest_core::{DetailLevel, DocumentAnalyzer};
use inquest_pdf::PdfExtractBackend;
use output::ColorMode;

/// Forensic document analyzer - extract metadata, summaries, and findings from PDF reports
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a PDF report and print the result
    Analyze {
        /// Path to the PDF file to analyze
        file_path: PathBuf,

        /// Summary detail level (brief, standard, detailed, comprehensive, auto)
        #[arg(long, default_value = "auto")]
        detail: String,

        /// Print the raw JSON report instead of the formatted view
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "inquest=warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze {
            file_path,
            detail,
            json,
            no_color,
        } => analyze(&file_path, &detail, json, no_color),
    }
}

fn analyze(file_path: &PathBuf, detail: &str, json: bool, no_color: bool) -> ExitCode {
    let analyzer = DocumentAnalyzer::new();
    let backend = PdfExtractBackend::new();
    let level = DetailLevel::parse(detail);

    match analyzer.analyze(file_path, &backend, level.sentence_target()) {
        Ok(report) => {
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(body) => println!("{body}"),
                    Err(e) => {
                        eprintln!("Failed to encode report: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                output::print_report(&report, ColorMode(!no_color));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
