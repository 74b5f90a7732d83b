//! Subscription fixture utilities.

pub mod factory;

use chrono::Utc;
use entity::subscription::{Country, SubscriptionStatus};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{ClientModel, SubscriptionModel},
    TestContext,
};

impl TestContext {
    /// Access subscription fixtures.
    pub fn subscription<'a>(&'a mut self) -> SubscriptionFixtures<'a> {
        SubscriptionFixtures { setup: self }
    }
}

pub struct SubscriptionFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> SubscriptionFixtures<'a> {
    /// Insert a subscription for the client with the provided status.
    pub async fn insert_subscription(
        &mut self,
        client_id: i32,
        status: SubscriptionStatus,
    ) -> Result<SubscriptionModel, TestError> {
        self.insert(client_id, status, false).await
    }

    /// Insert a subscription that is already soft-deleted.
    pub async fn insert_deleted_subscription(
        &mut self,
        client_id: i32,
        status: SubscriptionStatus,
    ) -> Result<SubscriptionModel, TestError> {
        self.insert(client_id, status, true).await
    }

    /// Insert an active subscription under a freshly created partner and client.
    pub async fn insert_mock_subscription(
        &mut self,
    ) -> Result<(ClientModel, SubscriptionModel), TestError> {
        let (_, client) = self.setup.client().insert_mock_client().await?;
        let subscription = self
            .insert_subscription(client.id, SubscriptionStatus::Active)
            .await?;

        Ok((client, subscription))
    }

    async fn insert(
        &mut self,
        client_id: i32,
        status: SubscriptionStatus,
        deleted: bool,
    ) -> Result<SubscriptionModel, TestError> {
        let public_id = self
            .setup
            .next_public_id(entity::subscription::PUBLIC_ID_PARTITION);
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Subscription::insert(entity::subscription::ActiveModel {
                public_id: ActiveValue::Set(public_id),
                client_id: ActiveValue::Set(client_id),
                name: ActiveValue::Set("Hyundai Palisade 2022".to_string()),
                country: ActiveValue::Set(Country::Korea),
                source_site: ActiveValue::Set(Some("encar".to_string())),
                search_url: ActiveValue::Set(
                    "https://www.encar.com/search?q=palisade".to_string(),
                ),
                status: ActiveValue::Set(status),
                deleted_at: ActiveValue::Set(deleted.then_some(now)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
