/*! Multi-signal Guarani classifier.

A chunk gets three independent votes:

1. fasttext (`gn` with a confidence of at least [STATISTICAL_MIN_PROB]),
1. a generic multilingual detector ([Multilingual], `grn` with a confidence of at least [GENERIC_MIN_CONFIDENCE] out of 100),
1. the [lexical] rules.

and is accepted by [quorum]. A word only goes through the [lexical] rules.
!*/
use std::path::Path;

use log::{debug, error};

use super::fasttext::FastTextBuilder;
use super::generic::Multilingual;
use super::lexical;
use super::vote::{quorum, Vote, Voter};
use super::Identifier;

/// fasttext label for Guarani.
pub const STATISTICAL_LABEL: &str = "gn";
pub const STATISTICAL_MIN_PROB: f32 = 0.6;

/// ISO 639-3 code for Guarani.
pub const GENERIC_LABEL: &str = "grn";
pub const GENERIC_MIN_CONFIDENCE: f32 = 60.0;

/// Text handed to the voters: trimmed, on a single line.
fn clean_chunk(text: &str) -> String {
    text.trim().replace('\n', " ").replace('\r', "")
}

pub struct Classifier {
    statistical: Option<Voter>,
    generic: Option<Voter>,
}

impl Classifier {
    /// Build a classifier from optional identifiers.
    ///
    /// A missing identifier always abstains.
    pub fn new(
        statistical: Option<Box<dyn Identifier>>,
        generic: Option<Box<dyn Identifier>>,
    ) -> Self {
        Self {
            statistical: statistical.map(|id| {
                Voter::new("fasttext", id, STATISTICAL_LABEL, STATISTICAL_MIN_PROB)
            }),
            generic: generic
                .map(|id| Voter::new("generic", id, GENERIC_LABEL, GENERIC_MIN_CONFIDENCE)),
        }
    }

    /// Load fasttext from `lid_path` and the [Multilingual] detector from `generic_lid_path`.
    ///
    /// A model that fails to load is logged and abstains for the whole run.
    pub fn with_models(lid_path: &Path, generic_lid_path: &Path) -> Self {
        let statistical: Option<Box<dyn Identifier>> =
            match FastTextBuilder::default().path(lid_path).build() {
                Ok(model) => Some(Box::new(model)),
                Err(e) => {
                    error!("could not load fasttext model {lid_path:?}, it will abstain: {e}");
                    None
                }
            };

        let generic: Option<Box<dyn Identifier>> = match Multilingual::new(generic_lid_path) {
            Ok(model) => Some(Box::new(model)),
            Err(e) => {
                error!(
                    "could not load multilingual model {generic_lid_path:?}, it will abstain: {e}"
                );
                None
            }
        };

        Self::new(statistical, generic)
    }

    /// Lexical rules only.
    pub fn lexical_only() -> Self {
        Self::new(None, None)
    }

    /// Collect the three votes on `text`.
    pub fn votes(&self, text: &str) -> [Vote; 3] {
        let cleaned = clean_chunk(text);
        let ask = |voter: &Option<Voter>| {
            voter
                .as_ref()
                .map_or(Vote::Abstain, |voter| voter.vote(&cleaned))
        };

        [
            ask(&self.statistical),
            ask(&self.generic),
            Vote::from(lexical::check(&cleaned)),
        ]
    }

    /// Chunk-level verdict: at least 2 affirmative votes.
    pub fn classify_chunk(&self, text: &str) -> bool {
        let votes = self.votes(text);
        let accepted = quorum(&votes);
        debug!(
            "votes {votes:?} -> {} ({:.40}...)",
            if accepted { "GUARANI" } else { "NOT GUARANI" },
            text.trim()
        );
        accepted
    }

    /// Word-level verdict, lexical rules only.
    pub fn classify_word(&self, text: &str) -> bool {
        lexical::check(text)
    }
}
