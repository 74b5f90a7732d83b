use sea_orm::ConnectionTrait;

use crate::{
    data::{candidate::CandidateRepository, listing::ListingRepository},
    error::{linkage::LinkageError, Error},
    model::db::CandidateModel,
};

/// Maintains the single candidate to listing link.
///
/// At most one candidate references a given listing. The unique index on
/// `candidate.listing_id` backs this up, but every write here checks first so callers get a
/// [`LinkageError`] instead of a constraint violation.
pub struct LinkageCoordinator<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LinkageCoordinator<'a, C> {
    /// Creates a new instance of [`LinkageCoordinator`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Checks that a listing exists and no candidate holds it yet
    ///
    /// # Returns
    /// - `Ok(())` - The listing can be referenced by a new candidate
    /// - `Err(Error::LinkageError(ListingNotFound))` - No such listing
    /// - `Err(Error::LinkageError(ListingAlreadyLinked))` - Another candidate holds it
    pub async fn ensure_listing_available(&self, listing_id: i32) -> Result<(), Error> {
        let listing_repo = ListingRepository::new(self.db);
        let candidate_repo = CandidateRepository::new(self.db);

        if listing_repo.get_by_id(listing_id).await?.is_none() {
            return Err(LinkageError::ListingNotFound(listing_id).into());
        }

        if let Some(holder) = candidate_repo.get_by_listing_id(listing_id).await? {
            tracing::warn!(
                "Listing {} is already linked to candidate {}",
                listing_id,
                holder.id
            );
            return Err(LinkageError::ListingAlreadyLinked {
                listing_id,
                candidate_id: holder.id,
            }
            .into());
        }

        Ok(())
    }

    /// Points a candidate at a listing
    ///
    /// # Behavior
    /// - Attaching a candidate to the listing it already holds is a no-op
    /// - A candidate holding a different listing must be detached first
    /// - A listing held by another candidate is rejected
    ///
    /// # Returns
    /// - `Ok(Some(CandidateModel))` - The linked candidate
    /// - `Ok(None)` - The candidate does not exist
    pub async fn attach(
        &self,
        candidate_id: i32,
        listing_id: i32,
    ) -> Result<Option<CandidateModel>, Error> {
        let candidate_repo = CandidateRepository::new(self.db);

        let Some(candidate) = candidate_repo.get_by_id(candidate_id).await? else {
            return Ok(None);
        };

        match candidate.listing_id {
            Some(current) if current == listing_id => return Ok(Some(candidate)),
            Some(current) => {
                return Err(LinkageError::CandidateAlreadyLinked {
                    candidate_id,
                    listing_id: current,
                }
                .into())
            }
            None => (),
        }

        self.ensure_listing_available(listing_id).await?;

        let candidate = candidate_repo
            .update_listing_id(candidate_id, Some(listing_id))
            .await?;

        tracing::debug!("Attached listing {} to candidate {}", listing_id, candidate_id);

        Ok(candidate)
    }

    /// Clears the listing reference of a candidate, the listing itself is kept
    pub async fn detach(&self, candidate_id: i32) -> Result<Option<CandidateModel>, Error> {
        let candidate_repo = CandidateRepository::new(self.db);

        let candidate = candidate_repo.update_listing_id(candidate_id, None).await?;

        if candidate.is_some() {
            tracing::debug!("Detached listing from candidate {}", candidate_id);
        }

        Ok(candidate)
    }

    /// Finds the candidate holding a listing
    pub async fn lookup_by_listing(&self, listing_id: i32) -> Result<Option<CandidateModel>, Error> {
        let candidate_repo = CandidateRepository::new(self.db);

        Ok(candidate_repo.get_by_listing_id(listing_id).await?)
    }

    /// Moves a candidate, together with its listing link, under another subscription
    ///
    /// Only the owning subscription changes. Whether both subscriptions belong to the same
    /// client is not checked here.
    pub async fn move_candidate(
        &self,
        candidate_id: i32,
        subscription_id: i32,
    ) -> Result<Option<CandidateModel>, Error> {
        let candidate_repo = CandidateRepository::new(self.db);

        let candidate = candidate_repo
            .update_subscription_id(candidate_id, subscription_id)
            .await?;

        if candidate.is_some() {
            tracing::debug!(
                "Moved candidate {} to subscription {}",
                candidate_id,
                subscription_id
            );
        }

        Ok(candidate)
    }
}
