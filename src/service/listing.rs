use entity::listing::ListingStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{listing::ListingRepository, public_id::PublicIdAllocator},
    error::{lifecycle::LifecycleError, Error},
    model::{
        db::ListingModel,
        listing::{is_public, ListingUpdate, NewListing},
    },
};

/// Listing lifecycle: `active <-> deleted`, plus the stored but unused `review`.
pub struct ListingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListingService<'a> {
    /// Creates a new instance of [`ListingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a standalone, publicly visible listing for a client
    ///
    /// Listings promoted from a candidate are created through
    /// [`CandidateService::publish_listing`](crate::service::candidate::CandidateService::publish_listing)
    /// instead, which also links them.
    pub async fn create(&self, client_id: i32, listing: NewListing) -> Result<ListingModel, Error> {
        let txn = self.db.begin().await?;

        let public_id = PublicIdAllocator::new()
            .allocate::<entity::listing::Entity, _>(&txn)
            .await?;
        let listing = ListingRepository::new(&txn)
            .create(client_id, public_id, listing, ListingStatus::Active)
            .await?;

        txn.commit().await?;

        tracing::debug!("Created listing {} for client {}", listing.id, client_id);

        Ok(listing)
    }

    pub async fn get_by_id(&self, listing_id: i32) -> Result<Option<ListingModel>, Error> {
        Ok(ListingRepository::new(self.db).get_by_id(listing_id).await?)
    }

    /// Resolves a listing by exact public id match regardless of status
    pub async fn get_by_public_id(&self, public_id: i64) -> Result<Option<ListingModel>, Error> {
        Ok(ListingRepository::new(self.db)
            .get_by_public_id(public_id)
            .await?)
    }

    /// Resolves a listing for the public catalog, only `active` listings are returned
    pub async fn get_public_by_public_id(
        &self,
        public_id: i64,
    ) -> Result<Option<ListingModel>, Error> {
        let listing = ListingRepository::new(self.db)
            .get_by_public_id(public_id)
            .await?;

        Ok(listing.filter(is_public))
    }

    /// Lists a client's listings in one status, ordered by id
    pub async fn find_for_client(
        &self,
        client_id: i32,
        status: ListingStatus,
    ) -> Result<Vec<ListingModel>, Error> {
        Ok(ListingRepository::new(self.db)
            .get_many_by_client_id_and_status(client_id, status)
            .await?)
    }

    /// Replaces the editable fields, status is never changed by an edit
    pub async fn update(
        &self,
        listing_id: i32,
        update: ListingUpdate,
    ) -> Result<Option<ListingModel>, Error> {
        Ok(ListingRepository::new(self.db)
            .update_fields(listing_id, update)
            .await?)
    }

    /// Hides a listing from the catalog
    ///
    /// # Returns
    /// - `Ok(Some(ListingModel))` - The listing, now `deleted`
    /// - `Ok(None)` - The listing doesn't exist
    /// - `Err(Error::LifecycleError(ListingAlreadyDeleted))` - Already `deleted`
    pub async fn soft_delete(&self, listing_id: i32) -> Result<Option<ListingModel>, Error> {
        let listing_repo = ListingRepository::new(self.db);

        let Some(listing) = listing_repo.get_by_id(listing_id).await? else {
            return Ok(None);
        };

        if listing.status == ListingStatus::Deleted {
            return Err(LifecycleError::ListingAlreadyDeleted {
                id: listing.id,
                status: listing.status,
            }
            .into());
        }

        let listing = listing_repo
            .update_status(listing_id, ListingStatus::Deleted)
            .await?;

        tracing::debug!("Soft-deleted listing {}", listing_id);

        Ok(listing)
    }

    /// Assigns a status directly, the only way back from `deleted`
    pub async fn set_status(
        &self,
        listing_id: i32,
        status: ListingStatus,
    ) -> Result<Option<ListingModel>, Error> {
        let listing = ListingRepository::new(self.db)
            .update_status(listing_id, status)
            .await?;

        if listing.is_some() {
            tracing::debug!("Listing {} status set to {:?}", listing_id, status);
        }

        Ok(listing)
    }

    /// Hard-deletes a listing in any status
    ///
    /// A candidate referencing the listing keeps existing with its reference cleared.
    pub async fn destroy(&self, listing_id: i32) -> Result<bool, Error> {
        let result = ListingRepository::new(self.db).delete(listing_id).await?;

        if result.rows_affected > 0 {
            tracing::info!("Destroyed listing {}", listing_id);
        }

        Ok(result.rows_affected > 0)
    }
}
