//! Concurrent field extraction.
//!
//! Titles, dates and descriptions are located independently, each on its own
//! scoped OS thread. Every thread reads the same immutable [`Document`] and
//! fills a vector it alone owns; the vectors are only combined after all
//! threads have been joined. Excluded fields never get a thread: their list
//! is synthesized as empty strings.

use crate::error::{Result, ScrapeError};
use crate::models::{ExtractOptions, Field, FieldValues};
use crate::scrapers::fetch::Document;
use crate::scrapers::profile::SiteSelectorProfile;
use crate::utils::normalize_whitespace;
use scraper::Selector;
use std::thread::{self, Scope, ScopedJoinHandle};
use tracing::{Span, debug, instrument};

/// A field's selectors, compiled and ready to run.
#[derive(Debug)]
struct CompiledQuery {
    field: Field,
    container: Selector,
    inner: Selector,
}

impl CompiledQuery {
    fn compile(profile: &SiteSelectorProfile, field: Field) -> Result<Self> {
        let query = profile.query(field);
        Ok(Self {
            field,
            container: parse_selector(query.container)?,
            inner: parse_selector(query.inner)?,
        })
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::selector(selector, e))
}

/// Extract every field the options ask for from `document`.
///
/// Selectors for scheduled fields are compiled before any thread starts, so a
/// broken profile fails fast with [`ScrapeError::Selector`]. Lists are
/// returned in document order and are not padded; alignment to the batch
/// size is the assembler's job. Excluded fields come back as `expected`
/// empty strings, so they always line up with the batch being built.
#[instrument(level = "info", skip_all, fields(url = %document.url(), expected))]
pub fn extract(
    document: &Document,
    profile: &SiteSelectorProfile,
    options: ExtractOptions,
    expected: usize,
) -> Result<FieldValues> {
    let title_query = CompiledQuery::compile(profile, Field::Title)?;
    let date_query = (!options.exclude_date)
        .then(|| CompiledQuery::compile(profile, Field::Date))
        .transpose()?;
    let desc_query = (!options.exclude_description)
        .then(|| CompiledQuery::compile(profile, Field::Description))
        .transpose()?;

    let (titles, dates, descriptions) = thread::scope(|scope| {
        let titles = spawn_field(scope, document, &title_query);
        let dates = date_query.as_ref().map(|q| spawn_field(scope, document, q));
        let descriptions = desc_query.as_ref().map(|q| spawn_field(scope, document, q));

        // Join everything before looking at any result.
        (
            join_field(titles, Field::Title),
            dates.map(|h| join_field(h, Field::Date)),
            descriptions.map(|h| join_field(h, Field::Description)),
        )
    });

    let values = FieldValues {
        titles: titles?,
        dates: dates.transpose()?.unwrap_or_else(|| empty_field(expected)),
        descriptions: descriptions
            .transpose()?
            .unwrap_or_else(|| empty_field(expected)),
    };

    debug!(
        titles = values.titles.len(),
        dates = values.dates.len(),
        descriptions = values.descriptions.len(),
        "Extraction joined"
    );
    Ok(values)
}

fn empty_field(len: usize) -> Vec<String> {
    vec![String::new(); len]
}

fn spawn_field<'scope, 'env>(
    scope: &'scope Scope<'scope, 'env>,
    document: &'env Document,
    query: &'env CompiledQuery,
) -> ScopedJoinHandle<'scope, Vec<String>> {
    let span = Span::current();
    scope.spawn(move || span.in_scope(|| collect_field(document, query)))
}

fn join_field(handle: ScopedJoinHandle<'_, Vec<String>>, field: Field) -> Result<Vec<String>> {
    handle.join().map_err(|_| ScrapeError::Extraction { field })
}

/// One entry per container match, in document order.
///
/// The entry is the whitespace-normalized text of every inner match inside
/// that container, or `""` when the container has none.
fn collect_field(document: &Document, query: &CompiledQuery) -> Vec<String> {
    let tree = document.tree();
    let mut out = Vec::new();
    for container in tree.select(&query.container) {
        let text: String = container
            .select(&query.inner)
            .flat_map(|el| el.text())
            .collect();
        out.push(normalize_whitespace(&text));
    }
    debug!(field = %query.field, count = out.len(), "Collected field");
    out
}
