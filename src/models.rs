//! Data models for scraped posts and the batches they travel in.
//!
//! This module defines the core data structures used throughout the application:
//! - [`Post`]: One headline with its optional description and date
//! - [`Batch`]: The fixed-size, page-ordered result of scraping one site
//! - [`FieldValues`]: Raw per-field text lists produced by extraction
//! - [`ExtractOptions`]: The exclusion switches threaded through every stage
//! - [`SiteReport`]: A batch wrapped with site metadata for JSON output

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of posts every batch holds.
pub const POSTS_PER_PAGE: usize = 10;

/// A single article listing as shown on a site's front page.
///
/// Any field may be empty: either it was excluded by [`ExtractOptions`], or
/// the page had nothing at that position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// The headline text.
    pub title: String,
    /// The teaser or excerpt shown under the headline.
    pub description: String,
    /// The publish date exactly as the site prints it.
    pub date: String,
}

/// The logical fields a site profile knows how to locate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Date,
    Description,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Title => "title",
            Field::Date => "date",
            Field::Description => "description",
        })
    }
}

/// Switches that decide which optional fields are scraped and rendered.
///
/// The same value is handed to extraction and to the renderers, so an
/// excluded field is never fetched from the page and never printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Skip date extraction; every post's `date` is empty.
    pub exclude_date: bool,
    /// Skip description extraction; every post's `description` is empty.
    pub exclude_description: bool,
}

/// Per-field text lists in document order, before alignment into posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub titles: Vec<String>,
    pub dates: Vec<String>,
    pub descriptions: Vec<String>,
}

/// Padding applied to one field because the page was short.
///
/// Short pages are never an error: the batch is padded to size and each
/// padded field is recorded here instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortfall {
    pub field: Field,
    pub found: usize,
    pub expected: usize,
}

/// The fixed-size, page-ordered output of one site's pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// Exactly as many posts as the assembler was asked for.
    pub posts: Vec<Post>,
    /// Fields that had to be padded, in title/date/description order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shortfalls: Vec<Shortfall>,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether every field had at least the expected number of entries.
    pub fn is_complete(&self) -> bool {
        self.shortfalls.is_empty()
    }
}

/// A batch together with where and when it was scraped.
#[derive(Debug, Serialize)]
pub struct SiteReport {
    /// Human readable site name.
    pub site: String,
    /// The landing page that was fetched.
    pub url: String,
    /// When the pipeline finished, in UTC.
    pub fetched_at: DateTime<Utc>,
    /// The scraped posts.
    pub batch: Batch,
}
