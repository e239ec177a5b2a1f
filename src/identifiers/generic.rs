//! General-purpose multilingual detector.
//!
//! Backed by a broad-coverage fasttext model such as [GlotLID](https://github.com/cisnlp/GlotLID),
//! whose labels are `__label__<ISO 639-3>_<script>` (`__label__grn_Latn` for Guarani).
//! Only the ISO 639-3 part is kept, and the confidence is scaled to `0..=100`.
use std::path::Path;

use log::debug;

use crate::error::Error;

use super::fasttext::{FastText, FastTextBuilder};
use super::{Identification, Identifier};

/// The detector refuses texts shorter than this (in chars).
pub const MIN_DETECTION_CHARS: usize = 100;

/// Default location of the multilingual model.
pub const DEFAULT_GENERIC_LID_PATH: &str = "glotlid.bin";

/// ISO 639-3 code of a cleaned label (`grn_Latn` gives `grn`).
fn language_code(label: &str) -> Option<&str> {
    label.split('_').next().filter(|code| !code.is_empty())
}

fn check_length(sentence: &str) -> Result<(), Error> {
    let nb_chars = sentence.chars().count();
    if nb_chars < MIN_DETECTION_CHARS {
        return Err(Error::NotEnoughSignal(format!(
            "need a longer snippet ({nb_chars} < {MIN_DETECTION_CHARS} chars)"
        )));
    }
    Ok(())
}

/// Multilingual detector returning ISO 639-3 codes with a `0..=100` confidence.
///
/// Short texts and texts without a prediction are errors, not rejections.
pub struct Multilingual {
    model: FastText,
}

impl Multilingual {
    /// Load the model at `path` (a GlotLID-style `bin` file).
    pub fn new(path: &Path) -> Result<Self, Error> {
        let model = FastTextBuilder::default().path(path).build()?;
        Ok(Self { model })
    }
}

impl Identifier for Multilingual {
    fn identify(&self, sentence: &str) -> Result<Option<Identification>, Error> {
        check_length(sentence)?;

        let id = self
            .model
            .identify(sentence)?
            .ok_or_else(|| Error::NotEnoughSignal("no language signal in snippet".to_string()))?;

        let code = language_code(id.label())
            .ok_or_else(|| Error::FastText(format!("unexpected label {:?}", id.label())))?;
        let confidence = id.prob() * 100.0;
        debug!("multilingual: {code} ({confidence:.1})");
        Ok(Some(Identification::new(code, confidence)))
    }
}
