//! Station record produced by the extractor

/// One harvested radio station
///
/// Built from a single detail page. Only pages that publish an email address
/// produce a record; every other field is best-effort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationRecord {
    pub name: Option<String>,

    /// Contact address; never empty
    pub email: String,

    /// Rating count as shown on the page
    pub likes: Option<String>,

    /// Genre tags, in page order
    pub tags: Vec<String>,

    pub website: Option<String>,

    pub language: Option<String>,

    /// Breadcrumb path without the station's own entry
    pub location: Vec<String>,

    pub facebook: Option<String>,

    pub twitter: Option<String>,

    /// Description markup with line breaks removed
    pub description: Option<String>,

    /// Extra details markup with line breaks removed
    pub additional_info: Option<String>,

    /// Phone number without its label
    pub phone: Option<String>,

    /// The detail page URL that was loaded
    pub source_url: String,
}
