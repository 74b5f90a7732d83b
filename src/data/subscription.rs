use chrono::{NaiveDateTime, Utc};
use entity::subscription::SubscriptionStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::subscription::{ActiveScope, NewSubscription, SubscriptionUpdate};

pub struct SubscriptionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SubscriptionRepository<'a, C> {
    /// Creates a new instance of [`SubscriptionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new subscription
    ///
    /// # Arguments
    /// - `client_id` (`i32`): ID of the owning client
    /// - `public_id` (`i64`): Public id allocated on the same connection
    /// - `subscription` ([`NewSubscription`]): Search criteria
    /// - `status` ([`SubscriptionStatus`]): Initial status chosen by the creation path
    pub async fn create(
        &self,
        client_id: i32,
        public_id: i64,
        subscription: NewSubscription,
        status: SubscriptionStatus,
    ) -> Result<entity::subscription::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let subscription = entity::subscription::ActiveModel {
            public_id: ActiveValue::Set(public_id),
            client_id: ActiveValue::Set(client_id),
            name: ActiveValue::Set(subscription.name),
            country: ActiveValue::Set(subscription.country),
            source_site: ActiveValue::Set(subscription.source_site),
            search_url: ActiveValue::Set(subscription.search_url),
            status: ActiveValue::Set(status),
            deleted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        subscription.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        subscription_id: i32,
    ) -> Result<Option<entity::subscription::Model>, DbErr> {
        entity::prelude::Subscription::find_by_id(subscription_id)
            .one(self.db)
            .await
    }

    /// Gets a subscription by exact public id match, deleted or not
    pub async fn get_by_public_id(
        &self,
        public_id: i64,
    ) -> Result<Option<entity::subscription::Model>, DbErr> {
        entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::PublicId.eq(public_id))
            .one(self.db)
            .await
    }

    /// Gets the subscriptions of a client that are not soft-deleted
    ///
    /// [`ActiveScope::Platform`] additionally leaves out subscriptions still in review.
    pub async fn get_many_active_by_client_id(
        &self,
        client_id: i32,
        scope: ActiveScope,
    ) -> Result<Vec<entity::subscription::Model>, DbErr> {
        let mut query = entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::ClientId.eq(client_id))
            .filter(entity::subscription::Column::DeletedAt.is_null());

        if scope == ActiveScope::Platform {
            query = query
                .filter(entity::subscription::Column::Status.ne(SubscriptionStatus::Review));
        }

        query
            .order_by_asc(entity::subscription::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the soft-deleted subscriptions of a client
    pub async fn get_many_deleted_by_client_id(
        &self,
        client_id: i32,
    ) -> Result<Vec<entity::subscription::Model>, DbErr> {
        entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::ClientId.eq(client_id))
            .filter(entity::subscription::Column::DeletedAt.is_not_null())
            .order_by_asc(entity::subscription::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets every subscription awaiting platform review, oldest first
    pub async fn get_many_in_review(&self) -> Result<Vec<entity::subscription::Model>, DbErr> {
        entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::Status.eq(SubscriptionStatus::Review))
            .filter(entity::subscription::Column::DeletedAt.is_null())
            .order_by_asc(entity::subscription::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Replaces the editable fields of a subscription
    ///
    /// # Returns
    /// - `Option<`[`entity::subscription::Model`]`>`: Some if update is successful
    ///   or None if the subscription was not found
    pub async fn update_fields(
        &self,
        subscription_id: i32,
        update: SubscriptionUpdate,
    ) -> Result<Option<entity::subscription::Model>, DbErr> {
        let subscription = match entity::prelude::Subscription::find_by_id(subscription_id)
            .one(self.db)
            .await?
        {
            Some(subscription) => subscription,
            None => return Ok(None),
        };

        let mut subscription_am = subscription.into_active_model();
        subscription_am.name = ActiveValue::Set(update.name);
        subscription_am.country = ActiveValue::Set(update.country);
        subscription_am.source_site = ActiveValue::Set(update.source_site);
        subscription_am.search_url = ActiveValue::Set(update.search_url);
        subscription_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let subscription = subscription_am.update(self.db).await?;

        Ok(Some(subscription))
    }

    pub async fn update_status(
        &self,
        subscription_id: i32,
        status: SubscriptionStatus,
    ) -> Result<Option<entity::subscription::Model>, DbErr> {
        let subscription = match entity::prelude::Subscription::find_by_id(subscription_id)
            .one(self.db)
            .await?
        {
            Some(subscription) => subscription,
            None => return Ok(None),
        };

        let mut subscription_am = subscription.into_active_model();
        subscription_am.status = ActiveValue::Set(status);
        subscription_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let subscription = subscription_am.update(self.db).await?;

        Ok(Some(subscription))
    }

    /// Sets or clears the soft-delete marker
    ///
    /// Only `deleted_at` is written, so clearing the marker restores the row exactly as it was.
    pub async fn update_deleted_at(
        &self,
        subscription_id: i32,
        deleted_at: Option<NaiveDateTime>,
    ) -> Result<Option<entity::subscription::Model>, DbErr> {
        let subscription = match entity::prelude::Subscription::find_by_id(subscription_id)
            .one(self.db)
            .await?
        {
            Some(subscription) => subscription,
            None => return Ok(None),
        };

        let mut subscription_am = subscription.into_active_model();
        subscription_am.deleted_at = ActiveValue::Set(deleted_at);

        let subscription = subscription_am.update(self.db).await?;

        Ok(Some(subscription))
    }

    /// Deletes a subscription, its candidates go with it through the foreign key cascade
    ///
    /// Returns OK regardless of the subscription existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, subscription_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Subscription::delete_by_id(subscription_id)
            .exec(self.db)
            .await
    }
}
