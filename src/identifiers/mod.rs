/*! Language identification

Holds an [Identifier] trait for model-backed signals, the rule-based [lexical] detection
and the [Classifier] that combines them.

Both model-backed signals run on [fasttext](https://fasttext.cc): `lid.176.bin` for the statistical vote,
a broad-coverage model (GlotLID) for the generic multilingual vote.
!*/
pub(crate) mod classifier;
pub mod fasttext;
pub mod generic;
pub(crate) mod identification;
pub mod lexical;
pub mod vote;

pub use classifier::Classifier;
pub use identification::{Identification, Identifier};
pub use vote::Vote;
