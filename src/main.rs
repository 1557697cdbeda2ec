#![forbid(unsafe_code)]
//! csv2readme Command Line Interface

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use csv2readme::commands::{execute_render, RenderOptions};

#[derive(Parser)]
#[command(name = "csv2readme")]
#[command(about = "Render CSV data files as markdown tables into a README template")]
#[command(version)]
struct Cli {
    /// Template file containing {{ name }} placeholders
    #[arg(short, long, default_value = "README.template.md")]
    template: PathBuf,

    /// Directory of <name>.csv data files
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "README.md")]
    output: PathBuf,

    /// Print the substituted document to stdout instead of writing the output file
    #[arg(long)]
    dry_run: bool,

    /// Print a JSON substitution report
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let options = RenderOptions {
        template: cli.template,
        data_dir: cli.data_dir,
        output: cli.output,
        dry_run: cli.dry_run,
        json: cli.json,
    };
    execute_render(options)
}
