//! Per-domain metadata file.
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::error::Error;

/// One page of a domain and where its words have been written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainMetadataEntry {
    /// host without `www.`, TLD kept
    pub domain: String,
    pub web_page_url: String,
    pub file_web_page_content: String,
}

/// Metadata entries of a domain, deduplicated by page URL, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct DomainMetadata {
    entries: Vec<DomainMetadataEntry>,
}

impl DomainMetadata {
    /// Add an entry if its URL is not already present.
    /// Returns `true` if the entry has been added.
    pub fn insert(&mut self, entry: DomainMetadataEntry) -> bool {
        if self
            .entries
            .iter()
            .any(|e| e.web_page_url == entry.web_page_url)
        {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn entries(&self) -> &[DomainMetadataEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write entries as a JSON array, indented with 4 spaces.
    /// Non-ASCII characters are kept as is.
    pub fn write_to(&self, path: &Path) -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
        self.entries.serialize(&mut ser)?;
        writer.flush()?;
        Ok(())
    }
}
