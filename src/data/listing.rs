use chrono::Utc;
use entity::listing::ListingStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::listing::{images_to_json, ListingUpdate, NewListing};

pub struct ListingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ListingRepository<'a, C> {
    /// Creates a new instance of [`ListingRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new listing owned by a client
    ///
    /// # Arguments
    /// - `client_id` (`i32`): ID of the owning client
    /// - `public_id` (`i64`): Public id allocated on the same connection
    /// - `listing` ([`NewListing`]): Catalog fields
    /// - `status` ([`ListingStatus`]): Initial status
    pub async fn create(
        &self,
        client_id: i32,
        public_id: i64,
        listing: NewListing,
        status: ListingStatus,
    ) -> Result<entity::listing::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let listing = entity::listing::ActiveModel {
            public_id: ActiveValue::Set(public_id),
            client_id: ActiveValue::Set(client_id),
            title: ActiveValue::Set(listing.title),
            description: ActiveValue::Set(listing.description),
            price: ActiveValue::Set(listing.price),
            images: ActiveValue::Set(images_to_json(&listing.images)),
            source_url: ActiveValue::Set(listing.source_url),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        listing.insert(self.db).await
    }

    pub async fn get_by_id(&self, listing_id: i32) -> Result<Option<entity::listing::Model>, DbErr> {
        entity::prelude::Listing::find_by_id(listing_id)
            .one(self.db)
            .await
    }

    /// Gets a listing by exact public id match regardless of status
    pub async fn get_by_public_id(
        &self,
        public_id: i64,
    ) -> Result<Option<entity::listing::Model>, DbErr> {
        entity::prelude::Listing::find()
            .filter(entity::listing::Column::PublicId.eq(public_id))
            .one(self.db)
            .await
    }

    pub async fn get_many_by_client_id_and_status(
        &self,
        client_id: i32,
        status: ListingStatus,
    ) -> Result<Vec<entity::listing::Model>, DbErr> {
        entity::prelude::Listing::find()
            .filter(entity::listing::Column::ClientId.eq(client_id))
            .filter(entity::listing::Column::Status.eq(status))
            .order_by_asc(entity::listing::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces the editable fields of a listing, status is left as is
    ///
    /// # Returns
    /// - `Option<`[`entity::listing::Model`]`>`: Some if update is successful
    ///   or None if the listing was not found
    pub async fn update_fields(
        &self,
        listing_id: i32,
        update: ListingUpdate,
    ) -> Result<Option<entity::listing::Model>, DbErr> {
        let listing = match entity::prelude::Listing::find_by_id(listing_id)
            .one(self.db)
            .await?
        {
            Some(listing) => listing,
            None => return Ok(None),
        };

        let mut listing_am = listing.into_active_model();
        listing_am.title = ActiveValue::Set(update.title);
        listing_am.description = ActiveValue::Set(update.description);
        listing_am.price = ActiveValue::Set(update.price);
        listing_am.images = ActiveValue::Set(images_to_json(&update.images));
        listing_am.source_url = ActiveValue::Set(update.source_url);
        listing_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let listing = listing_am.update(self.db).await?;

        Ok(Some(listing))
    }

    pub async fn update_status(
        &self,
        listing_id: i32,
        status: ListingStatus,
    ) -> Result<Option<entity::listing::Model>, DbErr> {
        let listing = match entity::prelude::Listing::find_by_id(listing_id)
            .one(self.db)
            .await?
        {
            Some(listing) => listing,
            None => return Ok(None),
        };

        let mut listing_am = listing.into_active_model();
        listing_am.status = ActiveValue::Set(status);
        listing_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let listing = listing_am.update(self.db).await?;

        Ok(Some(listing))
    }

    /// Deletes a listing, a candidate referencing it keeps existing with its reference cleared
    pub async fn delete(&self, listing_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Listing::delete_by_id(listing_id)
            .exec(self.db)
            .await
    }
}
