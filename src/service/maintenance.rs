//! One-off operator tooling for fixing candidate/listing attachments.

use entity::candidate::CandidateStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        candidate::CandidateRepository, listing::ListingRepository,
        subscription::SubscriptionRepository,
    },
    error::{maintenance::MaintenanceError, Error},
    model::{
        db::{CandidateModel, ListingModel, SubscriptionModel},
        subscription::ActiveScope,
    },
    service::linkage::LinkageCoordinator,
};

pub struct MaintenanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceService<'a> {
    /// Creates a new instance of [`MaintenanceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attaches an existing listing to a subscription by recording a new published candidate
    ///
    /// # Arguments
    /// - `listing_public_id` (`i64`): Public id of the listing to attach
    /// - `subscription_public_id` (`i64`): Public id of an approved, non-deleted subscription
    ///   of the listing's client
    ///
    /// # Returns
    /// - `Ok(CandidateModel)` - The candidate now holding the listing
    /// - `Err(Error::MaintenanceError)` - A lookup failed or the listing has no source URL
    /// - `Err(Error::LinkageError(ListingAlreadyLinked))` - Another candidate holds the listing
    pub async fn link_listing(
        &self,
        listing_public_id: i64,
        subscription_public_id: i64,
    ) -> Result<CandidateModel, Error> {
        let txn = self.db.begin().await?;

        let listing = ListingRepository::new(&txn)
            .get_by_public_id(listing_public_id)
            .await?
            .ok_or(MaintenanceError::ListingNotFound(listing_public_id))?;

        let subscription = SubscriptionRepository::new(&txn)
            .get_many_active_by_client_id(listing.client_id, ActiveScope::Platform)
            .await?
            .into_iter()
            .find(|subscription| subscription.public_id == subscription_public_id)
            .ok_or(MaintenanceError::SubscriptionNotFound {
                subscription_public_id,
                client_id: listing.client_id,
            })?;

        let source_url = listing
            .source_url
            .clone()
            .ok_or(MaintenanceError::MissingSourceUrl(listing_public_id))?;

        LinkageCoordinator::new(&txn)
            .ensure_listing_available(listing.id)
            .await?;

        let candidate = CandidateRepository::new(&txn)
            .create(
                subscription.id,
                source_url,
                Some(listing.id),
                CandidateStatus::Published,
            )
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Linked listing {} to subscription {} through candidate {}",
            listing_public_id,
            subscription_public_id,
            candidate.id
        );

        Ok(candidate)
    }

    /// Moves the candidate holding a listing under another subscription of the same client
    ///
    /// # Returns
    /// - `Ok(CandidateModel)` - The moved candidate
    /// - `Err(Error::MaintenanceError(ClientMismatch))` - The subscription belongs to
    ///   another client than the listing
    /// - `Err(Error::MaintenanceError)` - The listing, subscription or holding candidate
    ///   wasn't found
    pub async fn move_listing(
        &self,
        listing_public_id: i64,
        subscription_public_id: i64,
    ) -> Result<CandidateModel, Error> {
        let txn = self.db.begin().await?;

        let (listing, subscription) = self
            .lookup_pair(&txn, listing_public_id, subscription_public_id)
            .await?;

        if listing.client_id != subscription.client_id {
            tracing::warn!(
                "Refusing to move listing {} to subscription {} of another client",
                listing_public_id,
                subscription_public_id
            );
            return Err(MaintenanceError::ClientMismatch {
                subscription_public_id,
                subscription_client_id: subscription.client_id,
                listing_client_id: listing.client_id,
            }
            .into());
        }

        let linkage = LinkageCoordinator::new(&txn);

        let candidate = linkage
            .lookup_by_listing(listing.id)
            .await?
            .ok_or(MaintenanceError::CandidateNotFound(listing_public_id))?;

        let candidate = linkage
            .move_candidate(candidate.id, subscription.id)
            .await?
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Candidate {} disappeared while moving",
                    candidate.id
                ))
            })?;

        txn.commit().await?;

        tracing::info!(
            "Moved listing {} to subscription {}",
            listing_public_id,
            subscription_public_id
        );

        Ok(candidate)
    }

    async fn lookup_pair(
        &self,
        txn: &sea_orm::DatabaseTransaction,
        listing_public_id: i64,
        subscription_public_id: i64,
    ) -> Result<(ListingModel, SubscriptionModel), Error> {
        let listing = ListingRepository::new(txn)
            .get_by_public_id(listing_public_id)
            .await?
            .ok_or(MaintenanceError::ListingNotFound(listing_public_id))?;

        let subscription = SubscriptionRepository::new(txn)
            .get_by_public_id(subscription_public_id)
            .await?
            .filter(|subscription| subscription.deleted_at.is_none())
            .ok_or(MaintenanceError::SubscriptionNotFound {
                subscription_public_id,
                client_id: listing.client_id,
            })?;

        Ok((listing, subscription))
    }
}
