/*! Segmentation and extraction of Guarani words from page text.

Each text node long enough to be a chunk is classified as a whole.
An accepted chunk gives all its words, a rejected one only gives the words
that pass the word-level rules on their own.
!*/
use log::{debug, info};
use url::Url;

use crate::error::Error;
use crate::filtering::{ChunkLength, Filter, WordLength};
use crate::identifiers::Classifier;
use crate::io::naming::netloc;
use crate::sources::Page;

/// A Guarani word along with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedWord {
    word: String,
    url: String,
    domain: String,
}

impl ClassifiedWord {
    /// `word` must be a non-empty, whitespace-free token
    /// and `url` must have a host.
    pub fn new(word: &str, url: &Url) -> Result<Self, Error> {
        if word.is_empty() || word.chars().any(char::is_whitespace) {
            return Err(Error::InvalidWord(format!("{word:?} is not a single token")));
        }
        let domain =
            netloc(url).ok_or_else(|| Error::InvalidWord(format!("{url} has no host")))?;

        Ok(Self {
            word: word.to_string(),
            url: url.to_string(),
            domain,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// host (and port, if any) of [Self::url].
    pub fn domain(&self) -> &str {
        &self.domain
    }
}

pub struct Extractor {
    classifier: Classifier,
    chunk_filter: ChunkLength,
    word_filter: WordLength,
}

impl Extractor {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            chunk_filter: ChunkLength::default(),
            word_filter: WordLength::default(),
        }
    }

    /// Guarani words of a single chunk, in order of appearance.
    pub fn chunk_words<'a>(&self, chunk: &'a str) -> Vec<&'a str> {
        let words = chunk.split_whitespace().filter(|w| self.word_filter.detect(w));

        if self.classifier.classify_chunk(chunk) {
            debug!("found Guarani chunk");
            words.collect()
        } else {
            words
                .filter(|w| {
                    let accepted = self.classifier.classify_word(w);
                    if accepted {
                        debug!("found individual Guarani word: {w:?}");
                    }
                    accepted
                })
                .collect()
        }
    }

    /// Classified words of a page, in document order.
    pub fn extract(&self, page: &Page) -> Result<Vec<ClassifiedWord>, Error> {
        let url = Url::parse(page.url())?;

        let mut words = Vec::new();
        for chunk in page.text_nodes() {
            let chunk = chunk.trim();
            if chunk.is_empty() || !self.chunk_filter.detect(chunk) {
                continue;
            }

            for word in self.chunk_words(chunk) {
                words.push(ClassifiedWord::new(word, &url)?);
            }
        }

        if !words.is_empty() {
            info!("{}: {} words found", page.url(), words.len());
        }
        Ok(words)
    }
}
