use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct PartnerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PartnerRepository<'a, C> {
    /// Creates a new instance of [`PartnerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new partner
    ///
    /// # Arguments
    /// - `slug` (`&str`): Unique URL segment for the partner
    /// - `name` (`&str`): Display name
    pub async fn create(&self, slug: &str, name: &str) -> Result<entity::partner::Model, DbErr> {
        let partner = entity::partner::ActiveModel {
            slug: ActiveValue::Set(slug.to_string()),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        partner.insert(self.db).await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<entity::partner::Model>, DbErr> {
        entity::prelude::Partner::find()
            .filter(entity::partner::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }
}

pub struct ClientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClientRepository<'a, C> {
    /// Creates a new instance of [`ClientRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new client for a partner
    ///
    /// # Arguments
    /// - `partner_id` (`i32`): ID of the registering partner
    /// - `public_id` (`i64`): Public id allocated on the same connection
    /// - `name` (`&str`): Display name
    pub async fn create(
        &self,
        partner_id: i32,
        public_id: i64,
        name: &str,
    ) -> Result<entity::client::Model, DbErr> {
        let client = entity::client::ActiveModel {
            public_id: ActiveValue::Set(public_id),
            partner_id: ActiveValue::Set(partner_id),
            name: ActiveValue::Set(name.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        client.insert(self.db).await
    }

    pub async fn get_by_id(&self, client_id: i32) -> Result<Option<entity::client::Model>, DbErr> {
        entity::prelude::Client::find_by_id(client_id)
            .one(self.db)
            .await
    }

    /// Gets a client together with its partner, used to scope public paths by partner slug
    pub async fn get_with_partner(
        &self,
        client_id: i32,
    ) -> Result<Option<(entity::client::Model, Option<entity::partner::Model>)>, DbErr> {
        entity::prelude::Client::find_by_id(client_id)
            .find_also_related(entity::partner::Entity)
            .one(self.db)
            .await
    }

    /// Gets a client by public id together with its partner
    pub async fn get_by_public_id(
        &self,
        public_id: i64,
    ) -> Result<Option<(entity::client::Model, Option<entity::partner::Model>)>, DbErr> {
        entity::prelude::Client::find()
            .filter(entity::client::Column::PublicId.eq(public_id))
            .find_also_related(entity::partner::Entity)
            .one(self.db)
            .await
    }
}
