//! Partner and client fixture utilities.

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    error::TestError,
    model::{ClientModel, PartnerModel},
    TestContext,
};

impl TestContext {
    /// Access partner and client fixtures.
    pub fn client<'a>(&'a mut self) -> ClientFixtures<'a> {
        ClientFixtures { setup: self }
    }
}

pub struct ClientFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> ClientFixtures<'a> {
    pub async fn insert_partner(&mut self, slug: &str) -> Result<PartnerModel, TestError> {
        Ok(
            entity::prelude::Partner::insert(entity::partner::ActiveModel {
                slug: ActiveValue::Set(slug.to_string()),
                name: ActiveValue::Set(format!("Partner {}", slug)),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn get_or_insert_partner(&mut self, slug: &str) -> Result<PartnerModel, TestError> {
        let existing = entity::prelude::Partner::find()
            .filter(entity::partner::Column::Slug.eq(slug))
            .one(&self.setup.db)
            .await?;

        match existing {
            Some(partner) => Ok(partner),
            None => self.insert_partner(slug).await,
        }
    }

    pub async fn insert_client(&mut self, partner_id: i32) -> Result<ClientModel, TestError> {
        let public_id = self
            .setup
            .next_public_id(entity::client::PUBLIC_ID_PARTITION);

        Ok(
            entity::prelude::Client::insert(entity::client::ActiveModel {
                public_id: ActiveValue::Set(public_id),
                partner_id: ActiveValue::Set(partner_id),
                name: ActiveValue::Set("Test Client".to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a client under a freshly created partner with a unique slug.
    pub async fn insert_mock_client(&mut self) -> Result<(PartnerModel, ClientModel), TestError> {
        let slug = self.setup.next_slug();
        let partner = self.insert_partner(&slug).await?;
        let client = self.insert_client(partner.id).await?;

        Ok((partner, client))
    }
}
