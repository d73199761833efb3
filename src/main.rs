//! Linksweep main entry point
//!
//! This is the command-line interface for the linksweep broken-link sweeper.

use anyhow::{bail, Context};
use clap::Parser;
use linksweep::checker::check_links;
use linksweep::config::{load_config, Config};
use linksweep::crawler::crawl;
use linksweep::http::build_client;
use linksweep::input::read_url_list;
use linksweep::output::{filter_report, print_run_summary, write_broken_links, RunSummary};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Linksweep: a broken-link sweeper
///
/// Crawls a website breadth-first (or reads a URL list from a file) and
/// checks every discovered link concurrently, reporting each broken link
/// with its HTTP status.
#[derive(Parser, Debug)]
#[command(name = "linksweep")]
#[command(version)]
#[command(about = "Find broken links on a website or in a URL list", long_about = None)]
struct Cli {
    /// Seed URL to start crawling from
    #[arg(value_name = "SEED_URL")]
    seed_url: Option<String>,

    /// Maximum crawl depth; the seed page is depth 1 (default: 2)
    #[arg(short, long)]
    depth: Option<u32>,

    /// Check the URLs in this newline-delimited file instead of crawling
    #[arg(short, long, value_name = "INPUT_FILE", conflicts_with = "seed_url")]
    file: Option<PathBuf>,

    /// Write broken links to this file
    #[arg(short, long, value_name = "OUTPUT_FILE")]
    output: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Filter an existing results file into a CSV report and exit
    #[arg(
        long,
        value_name = "RESULTS_FILE",
        requires = "csv",
        conflicts_with_all = ["seed_url", "file", "output", "depth"]
    )]
    filter: Option<PathBuf>,

    /// Destination CSV path for --filter
    #[arg(long, value_name = "CSV_FILE", requires = "filter")]
    csv: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let (Some(results_file), Some(csv_path)) = (&cli.filter, &cli.csv) {
        return handle_filter(results_file, csv_path);
    }

    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    handle_sweep(cli, config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linksweep=info,warn"),
            1 => EnvFilter::new("linksweep=debug,info"),
            2 => EnvFilter::new("linksweep=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --filter mode: turns a results file into a CSV report
fn handle_filter(results_file: &PathBuf, csv_path: &PathBuf) -> anyhow::Result<()> {
    let rows = filter_report(results_file, csv_path)
        .with_context(|| format!("Failed to filter {}", results_file.display()))?;

    println!(
        "Filtered data saved to {} ({} rows)",
        csv_path.display(),
        rows
    );
    Ok(())
}

/// Handles the main sweep: gather URLs, check them, report
async fn handle_sweep(cli: Cli, config: Config) -> anyhow::Result<()> {
    let client = build_client(&config.http).context("Failed to build HTTP client")?;

    let urls = if let Some(list_path) = &cli.file {
        tracing::info!("Reading URL list from {}", list_path.display());
        read_url_list(list_path)?
    } else if let Some(seed_url) = &cli.seed_url {
        let max_depth = cli.depth.unwrap_or(config.crawler.max_depth);
        tracing::info!("Crawling {} to depth {}", seed_url, max_depth);
        crawl(&client, seed_url, max_depth).await?
    } else {
        bail!("Provide either a seed URL or an input file (--file)");
    };

    if urls.is_empty() {
        println!("No valid websites to process. Exiting.");
        return Ok(());
    }

    tracing::info!("Checking {} candidate links", urls.len());
    let (results, elapsed) = check_links(&client, urls, config.checker.workers).await;

    let broken: Vec<_> = results
        .iter()
        .filter(|result| result.is_broken())
        .cloned()
        .collect();

    let summary = RunSummary::from_results(&results, elapsed);
    print_run_summary(&summary, &broken);

    if let Some(output_path) = &cli.output {
        write_broken_links(output_path, &broken)
            .with_context(|| format!("Failed to write results to {}", output_path.display()))?;
        println!("Results saved to {}", output_path.display());
    }

    Ok(())
}
