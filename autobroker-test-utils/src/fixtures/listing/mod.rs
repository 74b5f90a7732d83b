//! Listing fixture utilities.

pub mod factory;

use chrono::Utc;
use entity::listing::ListingStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::ListingModel, TestContext};

impl TestContext {
    /// Access listing fixtures.
    pub fn listing<'a>(&'a mut self) -> ListingFixtures<'a> {
        ListingFixtures { setup: self }
    }
}

pub struct ListingFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> ListingFixtures<'a> {
    /// Insert an active listing owned by the client.
    pub async fn insert_listing(&mut self, client_id: i32) -> Result<ListingModel, TestError> {
        self.insert_listing_with_status(client_id, ListingStatus::Active)
            .await
    }

    pub async fn insert_listing_with_status(
        &mut self,
        client_id: i32,
        status: ListingStatus,
    ) -> Result<ListingModel, TestError> {
        let public_id = self
            .setup
            .next_public_id(entity::listing::PUBLIC_ID_PARTITION);
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Listing::insert(entity::listing::ActiveModel {
                public_id: ActiveValue::Set(public_id),
                client_id: ActiveValue::Set(client_id),
                title: ActiveValue::Set("Genesis G80 2021".to_string()),
                description: ActiveValue::Set(Some("Single owner, full service history".to_string())),
                price: ActiveValue::Set(Some(3_250_000)),
                images: ActiveValue::Set(Some(serde_json::json!(["g80/front.jpg"]))),
                source_url: ActiveValue::Set(Some(
                    "https://www.encar.com/dc/dc_cardetailview.do?carid=100".to_string(),
                )),
                status: ActiveValue::Set(status),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
