//! Fasttext identifier
use std::path::Path;

use fasttext::{FastText as FastTextLib, Prediction};
use log::debug;

use crate::error::Error;

use super::{Identification, Identifier};

/// Clean the prediction label field from `__label__xx` into `xx`.
///
/// Be aware that the function only skips 9 chars without doing any parsing,
/// so it may silently fail if `prediction.label.chars().count() > 9`
/// but not of a `__label__xx` form.
///
/// # Errors
/// Returns an error if provided prediction is too short to be cleaned.
fn clean_prediction(prediction: &Prediction) -> Result<Prediction, String> {
    if prediction.label.chars().count() < 9 {
        return Err(format!(
            "Label is too short to be cleaned: {}",
            prediction.label
        ));
    }
    Ok(Prediction {
        prob: prediction.prob,
        label: prediction.label.chars().skip(9).collect(),
    })
}

/// Holds a [fasttext::FastText] instance and its prediction threshold.
///
/// Only the top-1 prediction is ever requested.
pub struct FastText {
    predictor: FastTextLib,
    threshold: f32,
}

impl FastText {
    /// Create a new fasttext classifier.
    ///
    /// filename has to be a path to a `bin` file.
    pub fn new(filename: &Path, threshold: f32) -> Result<Self, Error> {
        let mut predictor = FastTextLib::new();
        let filename = filename
            .to_str()
            .ok_or_else(|| Error::Custom(format!("invalid filepath for lid: {:?}", filename)))?;
        predictor.load_model(filename).map_err(Error::FastText)?;
        Ok(Self {
            predictor,
            threshold,
        })
    }
}

impl Identifier for FastText {
    fn identify(&self, sentence: &str) -> Result<Option<Identification>, Error> {
        // null chars crash the underlying C++ code
        let sentence = sentence.replace(char::from(0), "");
        let prediction = self
            .predictor
            .predict(&sentence, 1, self.threshold)
            .map_err(Error::FastText)?;

        match prediction.into_iter().next() {
            Some(p) => {
                let p = clean_prediction(&p).unwrap_or(p);
                debug!("fasttext: {} ({:.3})", p.label, p.prob);
                Ok(Some(Identification::new(p.label, p.prob)))
            }
            None => Ok(None),
        }
    }
}

/// Fasttext builder.
pub struct FastTextBuilder<'a> {
    path: Option<&'a Path>,
}

impl<'a> FastTextBuilder<'a> {
    /// Build, resorting to `lid.176.bin` if no path is set.
    ///
    /// No prediction threshold is applied: the vote applies its own.
    pub fn build(&self) -> Result<FastText, Error> {
        let path = self.path.unwrap_or_else(|| Path::new("lid.176.bin"));
        FastText::new(path, 0.0)
    }

    pub fn path<'b>(&'b mut self, path: &'a Path) -> &'b mut FastTextBuilder<'a> {
        self.path = Some(path);
        self
    }
}

impl<'a> Default for FastTextBuilder<'a> {
    fn default() -> Self {
        Self { path: None }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use fasttext::Prediction;

    use super::*;

    #[test]
    fn test_clean_prediction() {
        let p = Prediction {
            prob: 0.9,
            label: "__label__gn".to_string(),
        };
        let cleaned = clean_prediction(&p).unwrap();
        assert_eq!(cleaned.label, "gn");
        assert_eq!(cleaned.prob, p.prob);
    }

    #[test]
    fn test_clean_prediction_too_short() {
        let p = Prediction {
            prob: 0.9,
            label: "gn".to_string(),
        };
        assert!(clean_prediction(&p).is_err());
    }

    #[test]
    fn test_missing_model() {
        let res = FastTextBuilder::default()
            .path(Path::new("this/model/does/not/exist.bin"))
            .build();
        assert!(res.is_err());
    }
}
