use chrono::Utc;
use entity::subscription::SubscriptionStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{public_id::PublicIdAllocator, subscription::SubscriptionRepository},
    error::{lifecycle::LifecycleError, Error},
    model::{
        db::SubscriptionModel,
        subscription::{
            next_parsing_status, ActiveScope, CreationPath, NewSubscription, SubscriptionUpdate,
        },
    },
};

/// Subscription lifecycle.
///
/// `status` moves `review -> active <-> disabled`. Soft deletion is tracked by `deleted_at`
/// alone and never changes `status`, so a restored subscription comes back exactly as it was.
pub struct SubscriptionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionService<'a> {
    /// Creates a new instance of [`SubscriptionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a subscription for a client with a freshly allocated public id
    ///
    /// # Arguments
    /// - `client_id` (`i32`): ID of the owning client
    /// - `subscription` ([`NewSubscription`]): Search criteria
    /// - `path` ([`CreationPath`]): Who is creating it, decides the initial status
    ///
    /// # Returns
    /// - `Ok(SubscriptionModel)` - The created subscription
    /// - `Err(Error::IdentifierError)` - No free public id was found
    /// - `Err(Error::DbErr)` - Database error, e.g. the client doesn't exist
    pub async fn create(
        &self,
        client_id: i32,
        subscription: NewSubscription,
        path: CreationPath,
    ) -> Result<SubscriptionModel, Error> {
        let txn = self.db.begin().await?;

        let public_id = PublicIdAllocator::new()
            .allocate::<entity::subscription::Entity, _>(&txn)
            .await?;
        let subscription = SubscriptionRepository::new(&txn)
            .create(client_id, public_id, subscription, path.initial_status())
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "Created subscription {} for client {} in status {:?}",
            subscription.id,
            client_id,
            subscription.status
        );

        Ok(subscription)
    }

    pub async fn get_by_id(&self, subscription_id: i32) -> Result<Option<SubscriptionModel>, Error> {
        Ok(SubscriptionRepository::new(self.db)
            .get_by_id(subscription_id)
            .await?)
    }

    /// Resolves a subscription by exact public id match, including soft-deleted ones
    pub async fn get_by_public_id(
        &self,
        public_id: i64,
    ) -> Result<Option<SubscriptionModel>, Error> {
        Ok(SubscriptionRepository::new(self.db)
            .get_by_public_id(public_id)
            .await?)
    }

    /// Replaces the editable search criteria, leaving status and deletion state alone
    pub async fn update(
        &self,
        subscription_id: i32,
        update: SubscriptionUpdate,
    ) -> Result<Option<SubscriptionModel>, Error> {
        let subscription = SubscriptionRepository::new(self.db)
            .update_fields(subscription_id, update)
            .await?;

        Ok(subscription)
    }

    /// Approves a subscription awaiting review, authorizing parsing
    ///
    /// # Returns
    /// - `Ok(Some(SubscriptionModel))` - The subscription, now `active`
    /// - `Ok(None)` - The subscription doesn't exist
    /// - `Err(Error::LifecycleError(NotInReview))` - Not in review, or soft-deleted
    pub async fn approve(&self, subscription_id: i32) -> Result<Option<SubscriptionModel>, Error> {
        let subscription_repo = SubscriptionRepository::new(self.db);

        let Some(subscription) = subscription_repo.get_by_id(subscription_id).await? else {
            return Ok(None);
        };

        if subscription.status != SubscriptionStatus::Review || subscription.deleted_at.is_some() {
            tracing::warn!(
                "Rejected approval of subscription {} in status {:?}",
                subscription.id,
                subscription.status
            );
            return Err(LifecycleError::NotInReview {
                id: subscription.id,
                status: subscription.status,
                deleted: subscription.deleted_at.is_some(),
            }
            .into());
        }

        let subscription = subscription_repo
            .update_status(subscription_id, SubscriptionStatus::Active)
            .await?;

        tracing::debug!("Approved subscription {}", subscription_id);

        Ok(subscription)
    }

    /// Flips parsing between `active` and `disabled`
    ///
    /// Subscriptions in review or soft-deleted are rejected with
    /// [`LifecycleError::ParsingToggleRejected`].
    pub async fn toggle_parsing(
        &self,
        subscription_id: i32,
    ) -> Result<Option<SubscriptionModel>, Error> {
        let subscription_repo = SubscriptionRepository::new(self.db);

        let Some(subscription) = subscription_repo.get_by_id(subscription_id).await? else {
            return Ok(None);
        };

        let Some(next) = next_parsing_status(&subscription) else {
            tracing::warn!(
                "Rejected parsing toggle of subscription {} in status {:?}",
                subscription.id,
                subscription.status
            );
            return Err(LifecycleError::ParsingToggleRejected {
                id: subscription.id,
                status: subscription.status,
                deleted: subscription.deleted_at.is_some(),
            }
            .into());
        };

        let subscription = subscription_repo
            .update_status(subscription_id, next)
            .await?;

        tracing::debug!("Subscription {} parsing now {:?}", subscription_id, next);

        Ok(subscription)
    }

    /// Moves a subscription to the client's trash, status is kept
    pub async fn soft_delete(
        &self,
        subscription_id: i32,
    ) -> Result<Option<SubscriptionModel>, Error> {
        let subscription_repo = SubscriptionRepository::new(self.db);

        let Some(subscription) = subscription_repo.get_by_id(subscription_id).await? else {
            return Ok(None);
        };

        if subscription.deleted_at.is_some() {
            return Err(LifecycleError::SubscriptionAlreadyDeleted(subscription.id).into());
        }

        let subscription = subscription_repo
            .update_deleted_at(subscription_id, Some(Utc::now().naive_utc()))
            .await?;

        tracing::debug!("Soft-deleted subscription {}", subscription_id);

        Ok(subscription)
    }

    /// Takes a subscription out of the trash
    pub async fn restore(&self, subscription_id: i32) -> Result<Option<SubscriptionModel>, Error> {
        let subscription_repo = SubscriptionRepository::new(self.db);

        let Some(subscription) = subscription_repo.get_by_id(subscription_id).await? else {
            return Ok(None);
        };

        if subscription.deleted_at.is_none() {
            return Err(LifecycleError::SubscriptionNotDeleted(subscription.id).into());
        }

        let subscription = subscription_repo
            .update_deleted_at(subscription_id, None)
            .await?;

        tracing::debug!("Restored subscription {}", subscription_id);

        Ok(subscription)
    }

    /// Permanently removes a soft-deleted subscription together with its candidates
    ///
    /// Listings promoted from those candidates are not removed; their candidate references
    /// simply disappear with the candidates.
    ///
    /// # Returns
    /// - `Ok(true)` - The subscription was removed
    /// - `Ok(false)` - The subscription doesn't exist
    /// - `Err(Error::LifecycleError(SubscriptionNotDeleted))` - Not soft-deleted yet
    pub async fn destroy(&self, subscription_id: i32) -> Result<bool, Error> {
        let subscription_repo = SubscriptionRepository::new(self.db);

        let Some(subscription) = subscription_repo.get_by_id(subscription_id).await? else {
            return Ok(false);
        };

        if subscription.deleted_at.is_none() {
            tracing::warn!(
                "Rejected destroy of subscription {} that is not in the trash",
                subscription.id
            );
            return Err(LifecycleError::SubscriptionNotDeleted(subscription.id).into());
        }

        let result = subscription_repo.delete(subscription_id).await?;

        tracing::info!("Destroyed subscription {}", subscription_id);

        Ok(result.rows_affected > 0)
    }

    /// Subscriptions of a client that are not in the trash, per the given scope
    pub async fn find_active_for_client(
        &self,
        client_id: i32,
        scope: ActiveScope,
    ) -> Result<Vec<SubscriptionModel>, Error> {
        Ok(SubscriptionRepository::new(self.db)
            .get_many_active_by_client_id(client_id, scope)
            .await?)
    }

    /// The client's restorable trash
    pub async fn find_deleted_for_client(
        &self,
        client_id: i32,
    ) -> Result<Vec<SubscriptionModel>, Error> {
        Ok(SubscriptionRepository::new(self.db)
            .get_many_deleted_by_client_id(client_id)
            .await?)
    }

    /// Platform moderation queue
    pub async fn find_pending_review(&self) -> Result<Vec<SubscriptionModel>, Error> {
        Ok(SubscriptionRepository::new(self.db)
            .get_many_in_review()
            .await?)
    }
}
