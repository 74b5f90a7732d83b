use entity::candidate::CandidateStatus;
use serde::{Deserialize, Serialize};

use crate::model::db::CandidateModel;

/// A found car to record against a subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCandidate {
    pub source_url: String,
    /// Existing listing to attach, subject to the one-candidate-per-listing rule.
    pub listing_id: Option<i32>,
    /// Initial status, `published` when absent.
    pub status: Option<CandidateStatus>,
}

impl NewCandidate {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            listing_id: None,
            status: None,
        }
    }

    pub fn with_listing(mut self, listing_id: i32) -> Self {
        self.listing_id = Some(listing_id);
        self
    }
}

/// Candidates of one subscription split by status, as shown in the UI tabs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatePartition {
    pub published: Vec<CandidateModel>,
    pub moderation: Vec<CandidateModel>,
    pub deleted: Vec<CandidateModel>,
}

impl CandidatePartition {
    /// Sorts each candidate into exactly one bucket by its status.
    pub fn from_candidates(candidates: Vec<CandidateModel>) -> Self {
        let mut partition = Self::default();

        for candidate in candidates {
            match candidate.status {
                CandidateStatus::Published => partition.published.push(candidate),
                CandidateStatus::Moderation => partition.moderation.push(candidate),
                CandidateStatus::Deleted => partition.deleted.push(candidate),
            }
        }

        partition
    }

    pub fn len(&self) -> usize {
        self.published.len() + self.moderation.len() + self.deleted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
