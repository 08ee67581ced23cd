//! Plain-text console output.
//!
//! Each site gets a heading, then every post is printed as a numbered block:
//!
//! ```text
//! News 1:
//! <title>
//! Description:
//! <description>
//! Date:
//! <date>
//! ```
//!
//! The description and date sections are omitted when excluded.

use crate::models::{Batch, ExtractOptions};
use crate::scrapers::profile::Site;
use std::io::{self, Write};

/// Write `batch` for `site` to `out`, numbering posts from 1.
///
/// `out` is flushed before returning, so a closed pipe is reported here.
pub fn render<W: Write>(
    out: &mut W,
    site: Site,
    batch: &Batch,
    options: ExtractOptions,
) -> io::Result<()> {
    writeln!(out, "{} ({})", site.name(), site.url())?;
    writeln!(out)?;

    for (i, post) in batch.posts.iter().enumerate() {
        writeln!(out, "News {}:", i + 1)?;
        writeln!(out, "{}", post.title)?;
        if !options.exclude_description {
            writeln!(out, "Description:")?;
            writeln!(out, "{}", post.description)?;
        }
        if !options.exclude_date {
            writeln!(out, "Date:")?;
            writeln!(out, "{}", post.date)?;
        }
        writeln!(out)?;
    }
    out.flush()
}
