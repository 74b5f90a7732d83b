use sea_orm::{ConnectionTrait, TransactionSession, TransactionTrait};

use crate::{
    data::{candidate::CandidateRepository, listing::ListingRepository},
    error::Error,
};

/// What [`CascadeDeleter::permanently_remove`] removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeOutcome {
    pub candidate_removed: bool,
    pub listing_removed: bool,
}

/// Removes a candidate together with the listing it owns.
pub struct CascadeDeleter<'a, C: ConnectionTrait + TransactionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait + TransactionTrait> CascadeDeleter<'a, C> {
    /// Creates a new instance of [`CascadeDeleter`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Hard-deletes a candidate and its referenced listing
    ///
    /// Both deletes share one transaction: either both rows are gone afterwards or neither
    /// is. A candidate without a listing reference is removed alone. No state check is made,
    /// callers decide whether the candidate may be destroyed.
    ///
    /// # Returns
    /// - `Ok(CascadeOutcome)` - Which rows were removed, both `false` if the candidate
    ///   did not exist
    /// - `Err(Error::DbErr)` - A delete failed, nothing was removed
    pub async fn permanently_remove(&self, candidate_id: i32) -> Result<CascadeOutcome, Error> {
        let txn = self.db.begin().await?;

        let candidate_repo = CandidateRepository::new(&txn);
        let listing_repo = ListingRepository::new(&txn);

        let Some(candidate) = candidate_repo.get_by_id(candidate_id).await? else {
            txn.rollback().await?;
            return Ok(CascadeOutcome::default());
        };

        let mut outcome = CascadeOutcome::default();

        if let Some(listing_id) = candidate.listing_id {
            let result = listing_repo.delete(listing_id).await?;
            outcome.listing_removed = result.rows_affected > 0;
        }

        let result = candidate_repo.delete(candidate.id).await?;
        outcome.candidate_removed = result.rows_affected > 0;

        txn.commit().await?;

        tracing::info!(
            "Permanently removed candidate {} (listing {:?} removed: {})",
            candidate.id,
            candidate.listing_id,
            outcome.listing_removed
        );

        Ok(outcome)
    }
}
