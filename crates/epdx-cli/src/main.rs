mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "epdx",
    version,
    about = "Client for extracting structured data from EPD documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a PDF to the extraction API and display the structured result
    Extract {
        /// Path to the EPD PDF file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the raw API response to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Write a CSV export of the resolved fields
        #[arg(long, value_name = "FILE")]
        csv: Option<PathBuf>,

        /// Write JSON and CSV exports with generated filenames
        #[arg(long)]
        save: bool,

        /// Base URL of the extraction API
        #[arg(long, env = "EPDX_API_URL", default_value = epdx_core::DEFAULT_API_BASE_URL)]
        api_url: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = epdx_core::DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,
    },
    /// Re-export a previously saved raw response (no network access)
    Export {
        /// Path to a raw response JSON file (from `extract --out`)
        input_file: PathBuf,

        /// Export format: csv (default) or json
        #[arg(short, long, default_value = "csv")]
        format: String,

        /// Output file (generated filename in the current directory if omitted)
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Check the extraction API health endpoint
    Health {
        /// Base URL of the extraction API
        #[arg(long, env = "EPDX_API_URL", default_value = epdx_core::DEFAULT_API_BASE_URL)]
        api_url: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output,
            out,
            csv,
            save,
            api_url,
            timeout_secs,
        } => commands::extract::run(input_file, &output, out, csv, save, &api_url, timeout_secs).await,
        Commands::Export {
            input_file,
            format,
            out,
        } => commands::export::run(input_file, &format, out),
        Commands::Health { api_url } => commands::health::run(&api_url).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
