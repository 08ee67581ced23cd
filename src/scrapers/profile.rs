//! Per-site selector profiles.
//!
//! A profile is plain data: it names the CSS selectors that locate each
//! logical field on one site's landing page. The extraction code never
//! branches on the site, so supporting another outlet means adding a
//! [`Site`] variant, its URL and its profile here.

use crate::models::Field;

/// CSS selectors describing where a site keeps its listing fields.
///
/// Each field is located in two steps: every element matching the container
/// selector yields one entry, whose text is gathered from the descendants
/// matching the inner selector. Titles use `item_selector` as container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSelectorProfile {
    /// Repeating element that anchors each title.
    pub item_selector: &'static str,
    /// Title text inside an item.
    pub title_selector: &'static str,
    /// Repeating element that anchors each date.
    pub date_container_selector: &'static str,
    /// Date text inside a date container.
    pub date_selector: &'static str,
    /// Repeating element that anchors each description.
    pub desc_container_selector: &'static str,
    /// Description text inside a description container.
    pub desc_selector: &'static str,
}

/// A container/inner selector pair for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldQuery {
    pub container: &'static str,
    pub inner: &'static str,
}

impl SiteSelectorProfile {
    /// The selectors used to locate `field`.
    pub fn query(&self, field: Field) -> FieldQuery {
        match field {
            Field::Title => FieldQuery {
                container: self.item_selector,
                inner: self.title_selector,
            },
            Field::Date => FieldQuery {
                container: self.date_container_selector,
                inner: self.date_selector,
            },
            Field::Description => FieldQuery {
                container: self.desc_container_selector,
                inner: self.desc_selector,
            },
        }
    }
}

static THE_HACKER_NEWS: SiteSelectorProfile = SiteSelectorProfile {
    item_selector: ".home-right",
    title_selector: ".home-title",
    date_container_selector: ".item-label",
    date_selector: ".h-datetime",
    desc_container_selector: ".home-right",
    desc_selector: ".home-desc",
};

static CYBERSECURITY_NEWS: SiteSelectorProfile = SiteSelectorProfile {
    item_selector: ".entry-title",
    title_selector: "a",
    date_container_selector: ".td-post-date",
    date_selector: "time",
    desc_container_selector: ".item-details",
    desc_selector: ".td-excerpt",
};

static CYWARE: SiteSelectorProfile = SiteSelectorProfile {
    item_selector: ".cy-panel__body",
    title_selector: "a h1",
    date_container_selector: ".cy-panel__body",
    date_selector: "span",
    desc_container_selector: ".cy-panel__body",
    desc_selector: ".cy-card__description",
};

/// The built-in news sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Site {
    TheHackerNews,
    CybersecurityNews,
    Cyware,
}

impl Site {
    /// Every supported site, in presentation order.
    pub const ALL: [Site; 3] = [Site::TheHackerNews, Site::CybersecurityNews, Site::Cyware];

    /// Human readable name used in logs and reports.
    pub fn name(self) -> &'static str {
        match self {
            Site::TheHackerNews => "The Hacker News",
            Site::CybersecurityNews => "Cybersecurity News",
            Site::Cyware => "Cyware",
        }
    }

    /// The landing page whose listing is scraped.
    pub fn url(self) -> &'static str {
        match self {
            Site::TheHackerNews => "https://thehackernews.com/",
            Site::CybersecurityNews => "https://cybersecuritynews.com/",
            Site::Cyware => "https://cyware.com/cyber-security-news-articles",
        }
    }

    /// The selector profile for this site's markup.
    pub fn profile(self) -> &'static SiteSelectorProfile {
        match self {
            Site::TheHackerNews => &THE_HACKER_NEWS,
            Site::CybersecurityNews => &CYBERSECURITY_NEWS,
            Site::Cyware => &CYWARE,
        }
    }
}

/// Look up the profile for a site.
pub fn profile_for(site: Site) -> &'static SiteSelectorProfile {
    site.profile()
}
