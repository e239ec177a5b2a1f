/*! Minimal seed fetcher.

Downloads each seed once and yields a [Page] per seed.
There is no link following, retry or politeness handling here:
this is the boundary where a full crawl engine plugs in.
!*/
use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;

use crate::error::Error;

use super::{Page, Seeds};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct SeedFetcher {
    client: Client,
    seeds: std::vec::IntoIter<url::Url>,
}

impl SeedFetcher {
    pub fn new(seeds: &Seeds, timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        let urls: Vec<_> = seeds.seeds().iter().map(|seed| seed.url.clone()).collect();
        Ok(Self {
            client,
            seeds: urls.into_iter(),
        })
    }

    /// Fetch a page, keeping the URL reached after redirects.
    fn fetch(&self, url: url::Url) -> Result<Page, Error> {
        info!("fetching {url}");
        let response = self.client.get(url).send()?.error_for_status()?;
        let final_url = response.url().to_string();
        let body = response.text()?;
        debug!("{final_url}: {} bytes", body.len());

        Ok(Page::from_html(final_url, &body))
    }
}

impl Iterator for SeedFetcher {
    type Item = Result<Page, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let url = self.seeds.next()?;
        Some(self.fetch(url))
    }
}
