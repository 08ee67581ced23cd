//! Command-line interface definitions for secnews.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! Network tuning options can also be provided via environment variables.

use crate::models::ExtractOptions;
use crate::scrapers::profile::Site;
use clap::Parser;

const DEFAULT_USER_AGENT: &str = concat!("secnews/", env!("CARGO_PKG_VERSION"));

/// Command-line arguments for secnews.
///
/// # Examples
///
/// ```sh
/// # Latest Hacker News headlines with descriptions and dates
/// secnews -1
///
/// # Titles only from Cybersecurity News and Cyware
/// secnews -2 -3 --date --description
///
/// # Every site, as JSON
/// secnews --all --json
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Exclude dates
    #[arg(long = "date", visible_alias = "no-date")]
    pub exclude_date: bool,

    /// Exclude descriptions
    #[arg(long = "description", visible_alias = "no-description")]
    pub exclude_description: bool,

    /// thehackernews.com posts
    #[arg(short = '1', long)]
    pub hackernews: bool,

    /// cybersecuritynews.com posts
    #[arg(short = '2', long)]
    pub cybersecuritynews: bool,

    /// cyware.com posts
    #[arg(short = '3', long)]
    pub cyware: bool,

    /// Posts from every supported site
    #[arg(short, long)]
    pub all: bool,

    /// Print JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Per-request timeout in seconds
    #[arg(long, env = "SECNEWS_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Extra attempts after a transient fetch failure
    #[arg(long, env = "SECNEWS_RETRIES", default_value_t = 0)]
    pub retries: usize,

    /// User-Agent header sent with every request
    #[arg(long, env = "SECNEWS_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

impl Cli {
    /// The exclusion switches, as passed to extraction and rendering.
    pub fn options(&self) -> ExtractOptions {
        ExtractOptions {
            exclude_date: self.exclude_date,
            exclude_description: self.exclude_description,
        }
    }

    /// Selected sites in presentation order. Empty when no site flag is set.
    pub fn sites(&self) -> Vec<Site> {
        Site::ALL
            .into_iter()
            .filter(|site| {
                self.all
                    || match site {
                        Site::TheHackerNews => self.hackernews,
                        Site::CybersecurityNews => self.cybersecuritynews,
                        Site::Cyware => self.cyware,
                    }
            })
            .collect()
    }
}
