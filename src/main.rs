//! # secnews
//!
//! Prints the latest posts from security-news front pages: a fixed number of
//! titles per site, each with its description and publish date unless those
//! are excluded.
//!
//! ## Usage
//!
//! ```sh
//! secnews -1 -2 -3 --date
//! ```
//!
//! ## Architecture
//!
//! Each selected site runs the same pipeline:
//! 1. **Fetching**: One GET for the site's landing page
//! 2. **Extraction**: Titles, dates and descriptions located in parallel
//!    using the site's selector profile
//! 3. **Assembly**: Field lists aligned into a batch of exactly ten posts
//! 4. **Output**: Plain-text listing or JSON on stdout
//!
//! Sites are scraped concurrently but printed in a fixed order. A site that
//! fails is reported and skipped; the exit status is non-zero if any did.

use chrono::Utc;
use clap::Parser;
use futures::stream::{self, StreamExt};
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod error;
mod models;
mod outputs;
mod retry;
mod scrapers;
mod utils;

use cli::Cli;
use models::SiteReport;
use outputs::{console, json};
use retry::RetryFetch;
use scrapers::fetch::{HttpFetcher, create_client};
use scrapers::profile::Site;
use scrapers::scrape_site;

const RETRY_BASE_DELAY: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = Instant::now();
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let sites = args.sites();
    if sites.is_empty() {
        info!("No site selected; pass -1, -2, -3 or --all");
        return ExitCode::SUCCESS;
    }
    let options = args.options();

    let client = match create_client(Duration::from_secs(args.timeout_secs), &args.user_agent) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to build HTTP client");
            return ExitCode::FAILURE;
        }
    };
    let fetcher = RetryFetch::new(HttpFetcher::new(client), args.retries, RETRY_BASE_DELAY);

    info!(
        sites = sites.len(),
        exclude_date = options.exclude_date,
        exclude_description = options.exclude_description,
        "Scraping selected sites"
    );

    let fetcher = &fetcher;
    let mut results = stream::iter(sites.iter().copied())
        .map(|site| async move { (site, scrape_site(fetcher, site, options).await) })
        .buffered(Site::ALL.len());

    let mut failed = 0usize;
    let mut reports = Vec::new();
    while let Some((site, result)) = results.next().await {
        let batch = match result {
            Ok(batch) => {
                if !batch.is_complete() {
                    debug!(site = site.name(), shortfalls = ?batch.shortfalls, "Batch was padded");
                }
                batch
            }
            Err(e) => {
                failed += 1;
                error!(site = site.name(), url = site.url(), error = %e, "Site failed; skipping");
                continue;
            }
        };

        if args.json {
            reports.push(SiteReport {
                site: site.name().to_string(),
                url: site.url().to_string(),
                fetched_at: Utc::now(),
                batch,
            });
        } else if let Err(e) = console::render(&mut io::stdout().lock(), site, &batch, options) {
            error!(error = %e, "Failed to write output");
            return ExitCode::FAILURE;
        }
    }

    if args.json {
        if let Err(e) = json::render(&mut io::stdout().lock(), &reports) {
            error!(error = %e, "Failed to write JSON output");
            return ExitCode::FAILURE;
        }
    }
    if let Err(e) = io::stdout().flush() {
        error!(error = %e, "Failed to flush output");
        return ExitCode::FAILURE;
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        succeeded = sites.len() - failed,
        failed,
        "Execution complete"
    );

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
