//! Document fetching.
//!
//! One GET per call, no retries. A response only becomes a [`Document`] when
//! the status is `200 OK` and the body decodes under its declared charset
//! (UTF-8 when none is given); every other outcome maps to a distinct
//! [`ScrapeError`] variant.

use crate::error::{Result, ScrapeError};
use encoding_rs::{Encoding, UTF_8};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use scraper::Html;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};
use url::Url;

/// A fetched page, ready to be queried.
///
/// The decoded markup is shared immutably; [`Document::tree`] parses it into
/// a [`scraper::Html`] tree. Parsed trees are not `Sync`, so threads that
/// read the same page each build their own identical tree from this value.
#[derive(Debug, Clone)]
pub struct Document {
    url: String,
    markup: Arc<str>,
}

impl Document {
    /// Wrap already-decoded markup.
    pub fn from_markup(url: impl Into<String>, markup: impl Into<Arc<str>>) -> Self {
        Self {
            url: url.into(),
            markup: markup.into(),
        }
    }

    /// The URL the markup was fetched from.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Parse the markup into a queryable tree.
    pub fn tree(&self) -> Html {
        Html::parse_document(&self.markup)
    }
}

/// Anything that can turn a URL into a [`Document`].
///
/// The pipeline is generic over this so the same code runs against the real
/// HTTP client, the retry decorator, or canned pages in tests.
pub trait FetchDocument {
    async fn fetch(&self, url: &str) -> Result<Document>;
}

/// Fetches documents over HTTP with a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl FetchDocument for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Document> {
        fetch(&self.client, url).await
    }
}

/// Build the HTTP client shared by every site.
pub fn create_client(timeout: Duration, user_agent: &str) -> Result<Client> {
    let client = Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// Fetch `url` once and decode it into a [`Document`].
///
/// # Errors
///
/// - [`ScrapeError::Url`] if `url` is not absolute
/// - [`ScrapeError::Network`] on connect, timeout or body read failures
/// - [`ScrapeError::HttpStatus`] for any status other than `200`
/// - [`ScrapeError::Parse`] if the body is malformed for its charset
///
/// The response is either fully read or dropped before returning, so the
/// connection is released on every path.
#[instrument(level = "info", skip(client))]
pub async fn fetch(client: &Client, url: &str) -> Result<Document> {
    let target = Url::parse(url)?;
    let t0 = Instant::now();

    let response = client.get(target).send().await?;
    let status = response.status();
    if status != StatusCode::OK {
        warn!(code = status.as_u16(), "Unexpected response status");
        return Err(ScrapeError::HttpStatus {
            code: status.as_u16(),
        });
    }

    let encoding = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(charset_label)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);

    let body = response.bytes().await?;
    let (markup, encoding) = decode_body(&body, encoding)?;
    let document = Document::from_markup(url, markup);

    info!(
        bytes = body.len(),
        encoding = encoding.name(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "Fetched landing page"
    );
    debug!(preview = %crate::utils::truncate_for_log(document.markup(), 200), "Body preview");

    Ok(document)
}

/// The `charset` parameter of a `Content-Type` value, unquoted.
fn charset_label(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"'))
    })
}

/// Decode `body`, letting a byte order mark override the declared charset.
///
/// Malformed input is rejected instead of being replaced with U+FFFD.
fn decode_body(body: &[u8], declared: &'static Encoding) -> Result<(String, &'static Encoding)> {
    let (encoding, payload) = match Encoding::for_bom(body) {
        Some((bom, len)) => (bom, &body[len..]),
        None => (declared, body),
    };
    encoding
        .decode_without_bom_handling_and_without_replacement(payload)
        .map(|text| (text.into_owned(), encoding))
        .ok_or_else(|| {
            ScrapeError::Parse(format!("body is not valid {}", encoding.name()))
        })
}
