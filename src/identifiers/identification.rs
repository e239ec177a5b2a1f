/*! Identifier trait

Model-backed voters implement [Identifier] to be usable by the [super::Classifier].
!*/
use crate::error::Error;

/// A language label along with the model's confidence.
///
/// The confidence scale depends on the identifier
/// (`0..=1` for fasttext, `0..=100` for the generic detector).
#[derive(Debug, Clone, PartialEq)]
pub struct Identification {
    label: String,
    prob: f32,
}

impl Identification {
    pub fn new(label: impl Into<String>, prob: f32) -> Self {
        Self {
            label: label.into(),
            prob,
        }
    }

    /// Get a reference to the identification's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get a reference to the identification's prob.
    pub fn prob(&self) -> &f32 {
        &self.prob
    }
}

pub trait Identifier {
    /// returns the top identification for `sentence`, `None` if the model has no answer.
    ///
    /// Errors are reserved for failures (model error, not enough signal)
    /// and turn into abstentions when voting.
    fn identify(&self, sentence: &str) -> Result<Option<Identification>, Error>;
}
