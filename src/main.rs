//! Websift main entry point
//!
//! This is the command-line interface for the websift batch URL relevance
//! scanner.

use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use websift::config::{load_config_with_hash, validate, Config};
use websift::scanner::{batch_count, read_url_lines, run_scan};
use websift::sink::print_stats;
use websift::url::{has_explicit_scheme, normalize_url};

/// Websift: find URLs whose pages mention your keywords
///
/// Websift reads a text file of URL candidates (one per line), fetches them
/// in sequential batches of concurrent requests, and appends every URL whose
/// page text contains a configured keyword to the results file.
#[derive(Parser, Debug)]
#[command(name = "websift")]
#[command(version = "1.0.0")]
#[command(about = "A batch URL relevance scanner", long_about = None)]
struct Cli {
    /// Path to the URL list (one URL per line)
    #[arg(value_name = "URLS_FILE")]
    input: PathBuf,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Where to write matched URLs (overrides config)
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// URLs fetched concurrently per batch (overrides config)
    #[arg(long, value_name = "N")]
    batch_size: Option<usize>,

    /// Per-request timeout in seconds (overrides config)
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,

    /// Pause between batches in milliseconds (overrides config)
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Keyword to match; repeat for several (overrides config)
    #[arg(short, long = "keyword", value_name = "WORD")]
    keywords: Vec<String>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and input and show what would be scanned
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config, &cli.input)?;
    } else {
        handle_scan(config, &cli.input).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("websift=info,warn"),
            1 => EnvFilter::new("websift=debug,info"),
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

/// Builds the effective configuration: defaults, then config file, then flags
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            tracing::info!(
                "Configuration loaded from {} (hash: {})",
                path.display(),
                hash
            );
            config
        }
        None => Config::default(),
    };

    if let Some(output) = &cli.output {
        config.output.results_path = output.clone();
    }
    if let Some(batch_size) = cli.batch_size {
        config.scan.batch_size = batch_size;
    }
    if let Some(timeout) = cli.timeout_secs {
        config.scan.request_timeout_secs = timeout;
    }
    if let Some(delay) = cli.delay_ms {
        config.scan.batch_delay_ms = delay;
    }
    if !cli.keywords.is_empty() {
        config.scan.keywords = cli.keywords.clone();
    }

    Ok(config)
}

/// Handles the --dry-run mode: validates config and input, shows what would
/// be scanned without touching the network
fn handle_dry_run(config: &Config, input: &Path) -> anyhow::Result<()> {
    validate(config)?;
    let urls = read_url_lines(input)?;

    println!("=== Websift Dry Run ===\n");

    println!("Scan Configuration:");
    println!("  Batch size: {}", config.scan.batch_size);
    println!("  Request timeout: {}s", config.scan.request_timeout_secs);
    println!("  Batch delay: {}ms", config.scan.batch_delay_ms);
    println!("  Keywords: {}", config.scan.keywords.join(", "));

    println!("\nOutput:");
    println!("  Results: {}", config.output.results_path);

    let schemeless = urls
        .iter()
        .filter(|line| !line.is_empty() && !has_explicit_scheme(&normalize_url(line)))
        .count();
    if schemeless > 0 {
        println!(
            "\n⚠ {} entries lack an explicit scheme and will likely fail at fetch time",
            schemeless
        );
    }

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would scan {} URLs in {} batches",
        urls.len(),
        batch_count(urls.len(), config.scan.batch_size)
    );

    Ok(())
}

/// Handles the main scan operation
async fn handle_scan(config: Config, input: &Path) -> anyhow::Result<()> {
    let report = run_scan(config, input).await?;

    print_stats(&report.stats);
    println!();

    let duration = (report.finished_at - report.started_at).num_seconds();
    if report.no_matches() {
        println!(
            "No relevant URLs found in {}s (empty results at {})",
            duration,
            report.output_path.display()
        );
    } else {
        println!(
            "{} relevant URLs written to {} in {}s",
            report.stats.matched,
            report.output_path.display(),
            duration
        );
    }

    Ok(())
}
