//! Seed list: a CSV file with `name,description,url` columns, or a single URL.
use std::{fs::File, io::Read, path::Path};

use log::info;
use serde::Deserialize;
use url::Url;

use crate::error::Error;
use crate::io::naming::netloc;

#[derive(Debug, Deserialize)]
struct SeedRow {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

/// A website to start from. Only [Seed::url] is used by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Url,
}

#[derive(Debug, Clone, Default)]
pub struct Seeds(Vec<Seed>);

impl Seeds {
    /// Read seeds from a CSV file.
    ///
    /// # Errors
    /// Any row without a valid `url` is an error: the whole seed list is refused.
    pub fn from_csv(path: &Path) -> Result<Self, Error> {
        let seeds = Self::from_reader(File::open(path)?)?;
        info!("{} seeds loaded from {:?}", seeds.0.len(), path);
        Ok(seeds)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut reader = csv::Reader::from_reader(reader);
        let mut seeds = Vec::new();

        for (idx, row) in reader.deserialize::<SeedRow>().enumerate() {
            let row = row?;
            // header is line 1
            let line = idx + 2;
            let url = match row.url.as_deref().map(str::trim) {
                Some(url) if !url.is_empty() => url,
                _ => return Err(Error::Seed(format!("line {line}: missing url"))),
            };
            let url =
                Url::parse(url).map_err(|e| Error::Seed(format!("line {line}: {url}: {e}")))?;

            seeds.push(Seed {
                name: row.name,
                description: row.description,
                url,
            });
        }

        Ok(Self(seeds))
    }

    /// Single seed mode.
    pub fn from_url(url: &str) -> Result<Self, Error> {
        let url = Url::parse(url).map_err(|e| Error::Seed(format!("{url}: {e}")))?;
        Ok(Self(vec![Seed {
            name: None,
            description: None,
            url,
        }]))
    }

    pub fn seeds(&self) -> &[Seed] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Hosts of the seeds, deduplicated, in first-seen order.
    ///
    /// A crawl engine can use these to stay on the seeded websites.
    pub fn allowed_domains(&self) -> Vec<String> {
        let mut domains: Vec<String> = Vec::new();
        for domain in self.0.iter().filter_map(|seed| netloc(&seed.url)) {
            if !domains.contains(&domain) {
                domains.push(domain);
            }
        }
        domains
    }
}
