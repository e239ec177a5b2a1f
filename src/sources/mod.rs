/*! Page sources.

The crawl engine hands pages to the corpus pipeline as an iterator of `Result<Page, Error>`.
This module provides the seed list, text extraction from HTML and a minimal fetcher
that downloads each seed once.
!*/
pub mod html;
pub mod seeds;
pub mod web;

pub use seeds::Seeds;
pub use web::SeedFetcher;

/// A fetched page: its final URL and its extracted text nodes, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    url: String,
    text_nodes: Vec<String>,
}

impl Page {
    pub fn new(url: String, text_nodes: Vec<String>) -> Self {
        Self { url, text_nodes }
    }

    /// Build a page from its HTML body.
    pub fn from_html(url: String, body: &str) -> Self {
        Self {
            url,
            text_nodes: html::text_nodes(body),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn text_nodes(&self) -> &[String] {
        &self.text_nodes
    }
}
