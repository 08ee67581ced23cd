//! Rendering of scraped batches.
//!
//! Renderers receive the same [`ExtractOptions`](crate::models::ExtractOptions)
//! that drove extraction, so excluded fields are skipped rather than printed
//! as blanks.
//!
//! # Submodules
//!
//! - [`console`]: numbered plain-text listing, one block per post
//! - [`json`]: pretty-printed [`SiteReport`](crate::models::SiteReport) array

pub mod console;
pub mod json;
