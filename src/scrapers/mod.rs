//! Security-news scrapers.
//!
//! Every site goes through the same pipeline; only its
//! [`SiteSelectorProfile`](profile::SiteSelectorProfile) differs.
//!
//! 1. **Fetching** ([`fetch`]): one GET for the landing page
//! 2. **Extraction** ([`extract`]): titles, dates and descriptions in parallel
//! 3. **Assembly** ([`assemble`]): align the field lists into a fixed-size batch
//!
//! # Supported Sources
//!
//! | Source | Landing page | Item container |
//! |--------|--------------|----------------|
//! | The Hacker News | `thehackernews.com` | `.home-right` |
//! | Cybersecurity News | `cybersecuritynews.com` | `.entry-title` |
//! | Cyware | `cyware.com/cyber-security-news-articles` | `.cy-panel__body` |

pub mod assemble;
pub mod extract;
pub mod fetch;
pub mod profile;

use crate::error::Result;
use crate::models::{Batch, ExtractOptions, POSTS_PER_PAGE};
use fetch::FetchDocument;
use profile::{Site, profile_for};
use tracing::{info, instrument};

/// Run the full pipeline for one site.
///
/// Any fetch or extraction error aborts the site; no partial batch is
/// produced. Short pages still succeed, padded, with their shortfalls listed
/// in the batch.
#[instrument(level = "info", skip(fetcher, site, options), fields(site = site.name()))]
pub async fn scrape_site<F: FetchDocument>(
    fetcher: &F,
    site: Site,
    options: ExtractOptions,
) -> Result<Batch> {
    let document = fetcher.fetch(site.url()).await?;
    let values = extract::extract(&document, profile_for(site), options, POSTS_PER_PAGE)?;
    let batch = assemble::assemble(values, POSTS_PER_PAGE);

    info!(
        posts = batch.len(),
        padded_fields = batch.shortfalls.len(),
        "Scraped site"
    );
    Ok(batch)
}
