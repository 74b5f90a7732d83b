use entity::{
    candidate::CandidateStatus, listing::ListingStatus, subscription::SubscriptionStatus,
};
use thiserror::Error;

/// A lifecycle transition was requested from a state that does not allow it.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("Parsing cannot be toggled for subscription {id} (status {status:?}, deleted: {deleted})")]
    ParsingToggleRejected {
        id: i32,
        status: SubscriptionStatus,
        deleted: bool,
    },
    #[error("Subscription {id} is not awaiting review (status {status:?}, deleted: {deleted})")]
    NotInReview {
        id: i32,
        status: SubscriptionStatus,
        deleted: bool,
    },
    #[error("Subscription {0} is already deleted")]
    SubscriptionAlreadyDeleted(i32),
    #[error("Subscription {0} must be soft-deleted first")]
    SubscriptionNotDeleted(i32),
    #[error("Candidate {0} is already deleted")]
    CandidateAlreadyDeleted(i32),
    #[error("Candidate {id} must be soft-deleted first (status {status:?})")]
    CandidateNotDeleted { id: i32, status: CandidateStatus },
    #[error("Candidate {0} is deleted and cannot be promoted")]
    CandidateDeleted(i32),
    #[error("Listing {id} cannot be soft-deleted (status {status:?})")]
    ListingAlreadyDeleted { id: i32, status: ListingStatus },
}
