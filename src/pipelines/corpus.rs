//! Guarani corpus generation pipeline
//!
//! # Processing
//! 1. Each seed is fetched once and its text nodes are extracted.
//! 1. Text nodes that are long enough are classified as a whole by the [Classifier] vote.
//!    Accepted chunks give all their words, rejected ones only the words that pass the word rules.
//! 1. Words are appended to their page file, and pages are recorded in their domain metadata.
//! 1. Once every page has been processed, page files are closed and metadata files are written.
//!
//! A page that fails (fetch, extraction) is logged and skipped, as is a word that fails to be written.
use std::{fmt, path::PathBuf, time::Duration};

use log::{error, info, warn};

use crate::error::Error;
use crate::extract::Extractor;
use crate::identifiers::Classifier;
use crate::io::CorpusAssembler;
use crate::sources::{Page, SeedFetcher, Seeds};

use super::pipeline::Pipeline;

/// Counters of a corpus run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// pages successfully processed
    pub pages: usize,
    pub failed_pages: usize,
    /// words written
    pub words: usize,
    /// words that could not be written
    pub dropped_words: usize,
    /// domains that got at least one word
    pub domains: usize,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pages ({} failed), {} words ({} dropped), {} domains",
            self.pages, self.failed_pages, self.words, self.dropped_words, self.domains
        )
    }
}

pub struct CorpusPipeline {
    seeds: Seeds,
    dst: PathBuf,
    lid_path: PathBuf,
    generic_lid_path: PathBuf,
    timeout: Duration,
}

impl CorpusPipeline {
    pub fn new(
        seeds: Seeds,
        dst: PathBuf,
        lid_path: PathBuf,
        generic_lid_path: PathBuf,
        timeout: Duration,
    ) -> Self {
        Self {
            seeds,
            dst,
            lid_path,
            generic_lid_path,
            timeout,
        }
    }

    /// Process pages into `corpus` then finalize it.
    ///
    /// Failing pages and words are counted and skipped.
    pub fn process<I>(pages: I, extractor: &Extractor, mut corpus: CorpusAssembler) -> RunSummary
    where
        I: IntoIterator<Item = Result<Page, Error>>,
    {
        let mut summary = RunSummary::default();

        for (idx, page) in pages.into_iter().enumerate() {
            let page = match page {
                Ok(page) => page,
                Err(e) => {
                    error!("page {idx}: {e}");
                    summary.failed_pages += 1;
                    continue;
                }
            };

            let words = match extractor.extract(&page) {
                Ok(words) => words,
                Err(e) => {
                    error!("{}: {e}", page.url());
                    summary.failed_pages += 1;
                    continue;
                }
            };
            summary.pages += 1;

            for word in &words {
                match corpus.accept(word) {
                    Ok(()) => summary.words += 1,
                    Err(e) => {
                        warn!("{}: could not write {:?}: {e}", word.url(), word.word());
                        summary.dropped_words += 1;
                    }
                }
            }
        }

        summary.domains = corpus.domains();
        let metadata_files = corpus.finalize();
        info!("{metadata_files} metadata files written");

        summary
    }
}

impl Pipeline<RunSummary> for CorpusPipeline {
    fn run(&self) -> Result<RunSummary, Error> {
        if self.seeds.is_empty() {
            return Err(Error::Seed("empty seed list".to_string()));
        }
        info!("{} seeds, writing into {:?}", self.seeds.len(), self.dst);

        let fetcher = SeedFetcher::new(&self.seeds, self.timeout)?;
        let extractor = Extractor::new(Classifier::with_models(
            &self.lid_path,
            &self.generic_lid_path,
        ));
        let corpus = CorpusAssembler::new(&self.dst);

        let summary = Self::process(fetcher, &extractor, corpus);
        info!("done: {summary}");
        Ok(summary)
    }
}
