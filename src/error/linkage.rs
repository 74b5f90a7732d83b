use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LinkageError {
    /// Another candidate already references the listing.
    #[error("Listing {listing_id} is already linked to candidate {candidate_id}")]
    ListingAlreadyLinked { listing_id: i32, candidate_id: i32 },
    /// The candidate already references a listing.
    #[error("Candidate {candidate_id} is already linked to listing {listing_id}")]
    CandidateAlreadyLinked { candidate_id: i32, listing_id: i32 },
    #[error("Listing {0} does not exist")]
    ListingNotFound(i32),
}
