//! Station detail page extraction
//!
//! A detail page is read with a fixed selector schema. The email address is
//! queried first and gates everything else: without one the page produces no
//! record and no further queries run. Every other field is independently
//! optional, so a missing element only empties that field.

use crate::crawler::StationRecord;
use crate::page::{Document, PageSource};
use crate::Result;
use url::Url;

pub const EMAIL: &str = r#"p[itemprop="email"] a"#;
pub const NAME: &str = r#"h1[itemprop="name"]"#;
pub const TAG_ENTRY: &str = "ul.station__tags li";
pub const LIKES: &str = r#"span.i-chart[title="rating"]"#;
pub const WEBSITE: &str = r#"a[itemprop="url"]"#;
pub const PHONE: &str = r#"p[itemprop="telephone"]"#;
pub const DESCRIPTION: &str = r#"div[itemprop="description"]"#;
pub const FACEBOOK: &str = "a.i-fb--reference";
pub const TWITTER: &str = "a.i-tw--reference";
pub const ADDITIONAL_INFO: &str = r#"p[itemprop="additionalProperty"]"#;
pub const LANGUAGE: &str = "li.station__reference__lang a";
pub const BREADCRUMB_ENTRY: &str = "ul.breadcrumbs li";

/// Label the site prints in front of phone numbers
pub const PHONE_LABEL: &str = "Phone:";

/// Extracts a station record from a rendered detail page
///
/// Returns `None` when the page has no email address.
///
/// # Example
///
/// ```
/// use radio_harvest::crawler::extract_station;
/// use radio_harvest::page::Document;
/// use url::Url;
///
/// let url = Url::parse("https://radio.example.com/us/wxyz").unwrap();
/// let html = r#"<p itemprop="email"><a>studio@wxyz.example</a></p>"#;
/// let record = extract_station(&Document::parse(html, url.clone()), &url).unwrap();
/// assert_eq!(record.email, "studio@wxyz.example");
/// assert_eq!(record.source_url, url.as_str());
/// ```
pub fn extract_station(doc: &Document, source_url: &Url) -> Option<StationRecord> {
    let email = doc.text(EMAIL)?;

    Some(StationRecord {
        name: doc.text(NAME),
        email,
        likes: doc.text(LIKES),
        tags: doc
            .all(TAG_ENTRY)
            .iter()
            .map(|tag| tag.text("a").unwrap_or_default())
            .collect(),
        website: doc.link(WEBSITE),
        language: doc.text(LANGUAGE),
        location: breadcrumb_location(doc),
        facebook: doc.link(FACEBOOK),
        twitter: doc.link(TWITTER),
        description: doc.inner_html(DESCRIPTION).map(|html| strip_line_breaks(&html)),
        additional_info: doc
            .inner_html(ADDITIONAL_INFO)
            .map(|html| strip_line_breaks(&html)),
        phone: doc.text(PHONE).and_then(|text| strip_phone_label(&text)),
        source_url: source_url.to_string(),
    })
}

/// Loads a detail page and extracts its station record
///
/// The record's source URL is the URL requested, even if the site redirected.
pub async fn fetch_station(source: &dyn PageSource, url: &Url) -> Result<Option<StationRecord>> {
    let fetched = source.fetch_document(url).await?;
    Ok(extract_station(&fetched.into_document(), url))
}

/// Breadcrumb texts minus the final entry, which is the station itself
fn breadcrumb_location(doc: &Document) -> Vec<String> {
    let mut crumbs: Vec<String> = doc
        .all(BREADCRUMB_ENTRY)
        .iter()
        .map(|crumb| crumb.text("a span").unwrap_or_default())
        .collect();
    crumbs.pop();
    crumbs
}

/// Removes every CR and LF so markup fits on one output line
pub fn strip_line_breaks(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}

fn strip_phone_label(text: &str) -> Option<String> {
    let phone = text.replacen(PHONE_LABEL, "", 1).trim().to_string();
    (!phone.is_empty()).then_some(phone)
}
