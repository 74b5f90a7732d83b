use entity::{candidate::CandidateStatus, listing::ListingStatus};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        candidate::CandidateRepository, listing::ListingRepository, public_id::PublicIdAllocator,
        subscription::SubscriptionRepository,
    },
    error::{lifecycle::LifecycleError, linkage::LinkageError, Error},
    model::{
        candidate::{CandidatePartition, NewCandidate},
        db::{CandidateModel, ListingModel},
        listing::NewListing,
    },
    service::{
        cascade::{CascadeDeleter, CascadeOutcome},
        linkage::LinkageCoordinator,
    },
};

/// Candidate lifecycle: `published | moderation -> deleted -> destroyed`.
///
/// There is no way back from `deleted` through this service.
/// [`CandidateRepository::update_status`] is the direct fix for a candidate deleted by mistake.
pub struct CandidateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CandidateService<'a> {
    /// Creates a new instance of [`CandidateService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a found car against a subscription
    ///
    /// # Arguments
    /// - `subscription_id` (`i32`): ID of the owning subscription
    /// - `candidate` ([`NewCandidate`]): Source URL, optional existing listing and status,
    ///   `published` unless given
    ///
    /// # Returns
    /// - `Ok(CandidateModel)` - The created candidate
    /// - `Err(Error::LinkageError)` - The listing doesn't exist or another candidate holds it
    /// - `Err(Error::DbErr)` - Database error, e.g. the subscription doesn't exist
    pub async fn create(
        &self,
        subscription_id: i32,
        candidate: NewCandidate,
    ) -> Result<CandidateModel, Error> {
        let txn = self.db.begin().await?;

        if let Some(listing_id) = candidate.listing_id {
            LinkageCoordinator::new(&txn)
                .ensure_listing_available(listing_id)
                .await?;
        }

        let status = candidate.status.unwrap_or(CandidateStatus::Published);
        let candidate = CandidateRepository::new(&txn)
            .create(
                subscription_id,
                candidate.source_url,
                candidate.listing_id,
                status,
            )
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "Recorded candidate {} under subscription {} (listing {:?})",
            candidate.id,
            subscription_id,
            candidate.listing_id
        );

        Ok(candidate)
    }

    pub async fn get_by_id(&self, candidate_id: i32) -> Result<Option<CandidateModel>, Error> {
        Ok(CandidateRepository::new(self.db)
            .get_by_id(candidate_id)
            .await?)
    }

    /// Candidates of a subscription in a single status
    pub async fn get_many_by_status(
        &self,
        subscription_id: i32,
        status: CandidateStatus,
    ) -> Result<Vec<CandidateModel>, Error> {
        Ok(CandidateRepository::new(self.db)
            .get_many_by_subscription_id_and_status(subscription_id, status)
            .await?)
    }

    /// All candidates of a subscription split by status
    pub async fn partition(&self, subscription_id: i32) -> Result<CandidatePartition, Error> {
        let candidates = CandidateRepository::new(self.db)
            .get_many_by_subscription_id(subscription_id)
            .await?;

        Ok(CandidatePartition::from_candidates(candidates))
    }

    /// Marks a candidate deleted, a linked listing is left untouched
    ///
    /// # Returns
    /// - `Ok(Some(CandidateModel))` - The candidate, now `deleted`
    /// - `Ok(None)` - The candidate doesn't exist
    /// - `Err(Error::LifecycleError(CandidateAlreadyDeleted))` - Already `deleted`
    pub async fn soft_delete(&self, candidate_id: i32) -> Result<Option<CandidateModel>, Error> {
        let candidate_repo = CandidateRepository::new(self.db);

        let Some(candidate) = candidate_repo.get_by_id(candidate_id).await? else {
            return Ok(None);
        };

        if candidate.status == CandidateStatus::Deleted {
            return Err(LifecycleError::CandidateAlreadyDeleted(candidate.id).into());
        }

        let candidate = candidate_repo
            .update_status(candidate_id, CandidateStatus::Deleted)
            .await?;

        tracing::debug!("Soft-deleted candidate {}", candidate_id);

        Ok(candidate)
    }

    /// Permanently removes a deleted candidate and the listing it holds
    ///
    /// # Returns
    /// - `Ok(Some(CascadeOutcome))` - The rows removed
    /// - `Ok(None)` - The candidate doesn't exist
    /// - `Err(Error::LifecycleError(CandidateNotDeleted))` - The candidate isn't `deleted`
    pub async fn destroy(&self, candidate_id: i32) -> Result<Option<CascadeOutcome>, Error> {
        let Some(candidate) = CandidateRepository::new(self.db)
            .get_by_id(candidate_id)
            .await?
        else {
            return Ok(None);
        };

        if candidate.status != CandidateStatus::Deleted {
            tracing::warn!(
                "Rejected destroy of candidate {} in status {:?}",
                candidate.id,
                candidate.status
            );
            return Err(LifecycleError::CandidateNotDeleted {
                id: candidate.id,
                status: candidate.status,
            }
            .into());
        }

        let outcome = CascadeDeleter::new(self.db)
            .permanently_remove(candidate_id)
            .await?;

        Ok(Some(outcome))
    }

    /// Moves a candidate under another subscription
    pub async fn reassign(
        &self,
        candidate_id: i32,
        subscription_id: i32,
    ) -> Result<Option<CandidateModel>, Error> {
        LinkageCoordinator::new(self.db)
            .move_candidate(candidate_id, subscription_id)
            .await
    }

    /// Promotes a candidate into a public listing owned by the subscription's client
    ///
    /// Allocating the public id, inserting the listing and linking it to the candidate
    /// happen in one transaction.
    ///
    /// # Returns
    /// - `Ok(Some((CandidateModel, ListingModel)))` - The linked candidate and the new listing
    /// - `Ok(None)` - The candidate doesn't exist
    /// - `Err(Error::LifecycleError(CandidateDeleted))` - The candidate is `deleted`
    /// - `Err(Error::LinkageError(CandidateAlreadyLinked))` - The candidate already has a listing
    pub async fn publish_listing(
        &self,
        candidate_id: i32,
        listing: NewListing,
    ) -> Result<Option<(CandidateModel, ListingModel)>, Error> {
        let txn = self.db.begin().await?;

        let candidate_repo = CandidateRepository::new(&txn);

        let Some(candidate) = candidate_repo.get_by_id(candidate_id).await? else {
            txn.rollback().await?;
            return Ok(None);
        };

        if candidate.status == CandidateStatus::Deleted {
            return Err(LifecycleError::CandidateDeleted(candidate.id).into());
        }

        if let Some(listing_id) = candidate.listing_id {
            return Err(LinkageError::CandidateAlreadyLinked {
                candidate_id: candidate.id,
                listing_id,
            }
            .into());
        }

        let subscription = SubscriptionRepository::new(&txn)
            .get_by_id(candidate.subscription_id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Subscription {} of candidate {} not found",
                    candidate.subscription_id, candidate.id
                ))
            })?;

        let public_id = PublicIdAllocator::new()
            .allocate::<entity::listing::Entity, _>(&txn)
            .await?;
        let listing = ListingRepository::new(&txn)
            .create(
                subscription.client_id,
                public_id,
                listing,
                ListingStatus::Active,
            )
            .await?;

        let candidate = LinkageCoordinator::new(&txn)
            .attach(candidate.id, listing.id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Candidate {} disappeared while publishing",
                    candidate_id
                ))
            })?;

        txn.commit().await?;

        tracing::debug!(
            "Published candidate {} as listing {} ({})",
            candidate.id,
            listing.id,
            listing.public_id
        );

        Ok(Some((candidate, listing)))
    }
}
