//! Page loading and querying
//!
//! This module contains everything that touches raw pages:
//! - Loading documents through a [`PageSource`]
//! - A typed, selector-based page model ([`Document`], [`Node`])

mod document;
mod fetcher;

pub use document::{Document, Node};
pub use fetcher::{build_http_client, FetchedDocument, HttpPageSource, PageSource};
