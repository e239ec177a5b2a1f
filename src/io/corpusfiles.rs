/*! Domain-separated corpus writer.

Words of a page are appended to `<dst>/<clean_domain>/<page_filename>`,
one per line. Files are created on first write (truncating any previous run)
and flushed after each word.

Each domain also gets a `<dst>/<clean_domain>/<clean_domain>.json` metadata file
listing its pages. These are only written by [CorpusAssembler::finalize],
which is also invoked on drop if it has not been called before.
!*/
use std::{
    collections::{hash_map::Entry, BTreeMap, HashMap},
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::{debug, error, info, warn};
use url::Url;

use crate::error::Error;
use crate::extract::ClassifiedWord;

use super::metadata::{DomainMetadata, DomainMetadataEntry};
use super::naming;

pub struct CorpusAssembler {
    dst: PathBuf,
    files: HashMap<PathBuf, BufWriter<File>>,
    metadata: BTreeMap<String, DomainMetadata>,
    finalized: bool,
}

impl CorpusAssembler {
    /// Nothing is created until the first word is accepted.
    pub fn new(dst: &Path) -> Self {
        Self {
            dst: dst.to_path_buf(),
            files: HashMap::new(),
            metadata: BTreeMap::new(),
            finalized: false,
        }
    }

    /// Append a word to its page file and record the page in its domain metadata.
    ///
    /// The page is only recorded once its word has been written.
    pub fn accept(&mut self, word: &ClassifiedWord) -> Result<(), Error> {
        if self.finalized {
            return Err(Error::Custom(format!(
                "{:?}: corpus already finalized",
                self.dst
            )));
        }

        let url = Url::parse(word.url())?;
        let clean_domain = naming::clean_domain(word.domain());
        let domain_dir = self.dst.join(&clean_domain);
        let path = domain_dir.join(naming::clean_page_filename(&url));

        let file = match self.files.entry(path.clone()) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                std::fs::create_dir_all(&domain_dir)?;
                debug!("creating {:?}", e.key());
                let file = File::create(e.key())?;
                e.insert(BufWriter::new(file))
            }
        };
        writeln!(file, "{}", word.word())?;
        file.flush()?;

        let entry = DomainMetadataEntry {
            domain: naming::full_domain(word.domain()).to_string(),
            web_page_url: word.url().to_string(),
            file_web_page_content: path.display().to_string(),
        };
        if self.metadata.entry(clean_domain).or_default().insert(entry) {
            debug!("new page {}", word.url());
        }

        Ok(())
    }

    /// Currently open page files.
    pub fn open_files(&self) -> usize {
        self.files.len()
    }

    /// Number of domains that got at least one word.
    pub fn domains(&self) -> usize {
        self.metadata.len()
    }

    /// Metadata of a domain, keyed by its clean name.
    pub fn metadata(&self, clean_domain: &str) -> Option<&DomainMetadata> {
        self.metadata.get(clean_domain)
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Close page files and write domain metadata files.
    ///
    /// A failing domain is logged and does not prevent the others from being written.
    /// Returns the number of metadata files written.
    /// Subsequent calls do nothing.
    pub fn finalize(&mut self) -> usize {
        if self.finalized {
            warn!("{:?}: corpus already finalized", self.dst);
            return 0;
        }
        self.finalized = true;

        for (path, mut file) in self.files.drain() {
            if let Err(e) = file.flush() {
                error!("could not close {:?}: {}", path, e);
            }
        }

        let mut written = 0;
        for (clean_domain, metadata) in &self.metadata {
            if metadata.is_empty() {
                continue;
            }
            let path = self
                .dst
                .join(clean_domain)
                .join(format!("{clean_domain}.json"));
            match metadata.write_to(&path) {
                Ok(()) => {
                    info!("{:?}: {} pages", path, metadata.len());
                    written += 1;
                }
                Err(e) => error!("could not write metadata {:?}: {}", path, e),
            }
        }

        written
    }
}

impl Drop for CorpusAssembler {
    fn drop(&mut self) {
        if !self.finalized {
            self.finalize();
        }
    }
}
