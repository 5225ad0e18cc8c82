//! Queryable page model over parsed HTML
//!
//! Extraction code never touches the HTML tree directly. It asks a
//! [`Document`] (or a [`Node`] scoped inside it) for text, markup, attributes
//! or links by CSS selector. A missing element is always `None` or an empty
//! list, never an error.

use scraper::{ElementRef, Html, Selector};
use url::Url;

/// A parsed HTML page together with the URL it was loaded from
pub struct Document {
    html: Html,
    url: Url,
}

impl Document {
    /// Parses an HTML document; relative links resolve against `url`
    ///
    /// # Example
    ///
    /// ```
    /// use radio_harvest::page::Document;
    /// use url::Url;
    ///
    /// let html = r#"<h1 itemprop="name"> Radio One </h1><a class="home" href="/r1">home</a>"#;
    /// let doc = Document::parse(html, Url::parse("https://radio.example.com/us").unwrap());
    /// assert_eq!(doc.text(r#"h1[itemprop="name"]"#), Some("Radio One".to_string()));
    /// assert_eq!(doc.link("a.home"), Some("https://radio.example.com/r1".to_string()));
    /// ```
    pub fn parse(html: &str, url: Url) -> Self {
        Self {
            html: Html::parse_document(html),
            url,
        }
    }

    /// The URL this document was loaded from
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The whole document as a queryable scope
    pub fn root(&self) -> Node<'_> {
        Node {
            element: self.html.root_element(),
            base: &self.url,
        }
    }

    pub fn text(&self, selector: &str) -> Option<String> {
        self.root().text(selector)
    }

    pub fn inner_html(&self, selector: &str) -> Option<String> {
        self.root().inner_html(selector)
    }

    pub fn attr(&self, selector: &str, name: &str) -> Option<String> {
        self.root().attr(selector, name)
    }

    pub fn link(&self, selector: &str) -> Option<String> {
        self.root().link(selector)
    }

    pub fn all(&self, selector: &str) -> Vec<Node<'_>> {
        self.root().all(selector)
    }
}

/// An element scope inside a [`Document`]
///
/// Queries run against the element's descendants.
#[derive(Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
    base: &'a Url,
}

impl<'a> Node<'a> {
    /// Trimmed text content of the first match; `None` when missing or blank
    pub fn text(&self, selector: &str) -> Option<String> {
        self.first(selector)
            .map(|element| element.text().collect::<String>().trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Inner markup of the first match; `None` when missing or empty
    pub fn inner_html(&self, selector: &str) -> Option<String> {
        self.first(selector)
            .map(|element| element.inner_html())
            .filter(|s| !s.trim().is_empty())
    }

    /// Raw attribute value of the first match
    pub fn attr(&self, selector: &str, name: &str) -> Option<String> {
        self.first(selector)
            .and_then(|element| element.value().attr(name))
            .map(str::to_string)
    }

    /// `href` of the first match, resolved to an absolute URL
    ///
    /// Mirrors what a browser reports for an anchor's `href` property: an
    /// anchor without an `href` (or with an unresolvable one) yields `None`.
    pub fn link(&self, selector: &str) -> Option<String> {
        let href = self.attr(selector, "href")?;
        let href = href.trim();

        if href.is_empty() {
            return None;
        }

        self.base.join(href).ok().map(String::from)
    }

    /// Every match, in document order
    pub fn all(&self, selector: &str) -> Vec<Node<'a>> {
        let Some(selector) = parse_selector(selector) else {
            return Vec::new();
        };

        let base = self.base;
        let nodes = self
            .element
            .select(&selector)
            .map(|element| Node { element, base })
            .collect();
        nodes
    }

    fn first(&self, selector: &str) -> Option<ElementRef<'a>> {
        let selector = parse_selector(selector)?;
        let found = self.element.select(&selector).next();
        found
    }
}

fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::debug!("Ignoring invalid selector '{}': {:?}", selector, e);
            None
        }
    }
}
