use thiserror::Error;

/// Validation failures of the one-off link/move tooling.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MaintenanceError {
    #[error("No listing with public id {0}")]
    ListingNotFound(i64),
    #[error("No active subscription with public id {subscription_public_id} for client {client_id}")]
    SubscriptionNotFound {
        subscription_public_id: i64,
        client_id: i32,
    },
    #[error("Listing {0} has no source URL to record on a candidate")]
    MissingSourceUrl(i64),
    #[error("No candidate references listing {0}")]
    CandidateNotFound(i64),
    #[error("Subscription {subscription_public_id} belongs to client {subscription_client_id}, listing belongs to client {listing_client_id}")]
    ClientMismatch {
        subscription_public_id: i64,
        subscription_client_id: i32,
        listing_client_id: i32,
    },
}
