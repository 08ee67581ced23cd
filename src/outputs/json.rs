//! JSON output.
//!
//! All successful sites are written as one pretty-printed array of
//! [`SiteReport`] objects, so the output can be piped straight into `jq`.
//!
//! ```text
//! [
//!   {
//!     "site": "Cyware",
//!     "url": "https://cyware.com/cyber-security-news-articles",
//!     "fetched_at": "2025-10-19T09:51:00Z",
//!     "batch": { "posts": [ { "title": "…", "description": "", "date": "…" } ] }
//!   }
//! ]
//! ```

use crate::models::SiteReport;
use std::io::{self, Write};
use tracing::{info, instrument};

/// Serialize `reports` to `out` followed by a newline, then flush it.
///
/// Excluded fields are kept as empty strings so every post has the same shape.
#[instrument(level = "debug", skip_all, fields(reports = reports.len()))]
pub fn render<W: Write>(out: &mut W, reports: &[SiteReport]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)?;
    out.flush()?;
    info!("Wrote JSON report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Batch, Post};
    use chrono::Utc;

    #[test]
    fn test_render_writes_array_of_reports() {
        let reports = vec![SiteReport {
            site: "Cybersecurity News".to_string(),
            url: "https://cybersecuritynews.com/".to_string(),
            fetched_at: Utc::now(),
            batch: Batch {
                posts: vec![Post {
                    title: "Zero-day".into(),
                    description: String::new(),
                    date: "Oct 19".into(),
                }],
                shortfalls: vec![],
            },
        }];

        let mut out = Vec::new();
        render(&mut out, &reports).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value[0]["site"], "Cybersecurity News");
        assert_eq!(value[0]["batch"]["posts"][0]["title"], "Zero-day");
        assert_eq!(value[0]["batch"]["posts"][0]["description"], "");
        assert!(value[0]["batch"].get("shortfalls").is_none());
    }

    #[test]
    fn test_render_empty_is_empty_array() {
        let mut out = Vec::new();
        render(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim(), "[]");
    }
}
