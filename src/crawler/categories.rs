//! Category enumeration from the region landing page

use crate::page::Document;
use url::Url;

/// One entry per country in the landing page's country list
pub const CATEGORY_ENTRY: &str = "ul.countries__countries-list li";

/// Anchor inside a category entry
pub const CATEGORY_LINK: &str = "a";

/// Extracts category URLs from the landing page, in document order
///
/// Entries without an anchor are skipped. Repeated URLs are kept, so a
/// category listed twice is harvested twice.
pub fn enumerate_categories(doc: &Document) -> Vec<Url> {
    doc.all(CATEGORY_ENTRY)
        .iter()
        .filter_map(|entry| entry.link(CATEGORY_LINK))
        .filter_map(|href| Url::parse(&href).ok())
        .collect()
}
