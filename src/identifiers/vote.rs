//! Votes and quorum.
use log::{debug, warn};

use crate::error::Error;

use super::{Identification, Identifier};

/// Number of affirmative votes needed to accept a chunk.
pub const QUORUM: usize = 2;

/// Outcome of a single signal.
///
/// [Vote::Abstain] means the signal could not be computed,
/// it never counts as a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Affirmative,
    Abstain,
    Rejected,
}

impl Vote {
    /// Turn an identifier result into a vote.
    ///
    /// Affirmative iff the label is `label` and the confidence is at least `min_prob`.
    pub fn from_identification(
        result: Result<Option<Identification>, Error>,
        label: &str,
        min_prob: f32,
    ) -> Self {
        match result {
            Ok(Some(id)) if id.label() == label && *id.prob() >= min_prob => Vote::Affirmative,
            Ok(_) => Vote::Rejected,
            Err(e) => {
                debug!("abstaining: {e}");
                Vote::Abstain
            }
        }
    }
}

impl From<bool> for Vote {
    fn from(accepted: bool) -> Self {
        if accepted {
            Vote::Affirmative
        } else {
            Vote::Rejected
        }
    }
}

/// Accept iff at least [QUORUM] votes are affirmative, whatever the number of abstentions.
pub fn quorum(votes: &[Vote]) -> bool {
    votes.iter().filter(|v| **v == Vote::Affirmative).count() >= QUORUM
}

/// A model-backed signal: an [Identifier] along with the label it votes for
/// and the confidence it needs.
pub struct Voter {
    name: &'static str,
    identifier: Box<dyn Identifier>,
    label: String,
    min_prob: f32,
}

impl Voter {
    pub fn new(
        name: &'static str,
        identifier: Box<dyn Identifier>,
        label: impl Into<String>,
        min_prob: f32,
    ) -> Self {
        Self {
            name,
            identifier,
            label: label.into(),
            min_prob,
        }
    }

    pub fn vote(&self, text: &str) -> Vote {
        let result = self.identifier.identify(text);
        match &result {
            Err(Error::NotEnoughSignal(_)) | Ok(_) => (),
            Err(e) => warn!("{}: {e}", self.name),
        }
        let vote = Vote::from_identification(result, &self.label, self.min_prob);
        debug!("{}: {vote:?}", self.name);
        vote
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quorum() {
        use Vote::*;
        assert!(quorum(&[Affirmative, Affirmative, Rejected]));
        assert!(quorum(&[Affirmative, Abstain, Affirmative]));
        assert!(!quorum(&[Affirmative, Rejected, Rejected]));
        // one voter left, affirmative: still not enough
        assert!(!quorum(&[Affirmative, Abstain, Abstain]));
        assert!(!quorum(&[]));
    }

    #[test]
    fn test_threshold() {
        let vote = |prob| Vote::from_identification(Ok(Some(Identification::new("gn", prob))), "gn", 0.6);
        assert_eq!(vote(0.6), Vote::Affirmative);
        assert_eq!(vote(0.59), Vote::Rejected);
    }

    #[test]
    fn test_other_label_rejected() {
        let id = Identification::new("es", 0.99);
        assert_eq!(
            Vote::from_identification(Ok(Some(id)), "gn", 0.6),
            Vote::Rejected
        );
        assert_eq!(Vote::from_identification(Ok(None), "gn", 0.6), Vote::Rejected);
    }

    #[test]
    fn test_error_abstains() {
        let res = Err(Error::FastText("boom".to_string()));
        assert_eq!(Vote::from_identification(res, "gn", 0.6), Vote::Abstain);
    }
}
