use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Leading digit of every subscription public id.
pub const PUBLIC_ID_PARTITION: i64 = 2;

/// Marketplace region a subscription searches in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum Country {
    #[sea_orm(string_value = "korea")]
    Korea,
    #[sea_orm(string_value = "china")]
    China,
    #[sea_orm(string_value = "europe")]
    Europe,
}

/// Approval and parsing state of a subscription.
///
/// Soft deletion is tracked separately through `deleted_at` and never changes this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    /// Awaiting platform approval, parsing not authorized.
    #[sea_orm(string_value = "review")]
    Review,
    /// Approved, parsing authorized.
    #[sea_orm(string_value = "active")]
    Active,
    /// Approved but paused.
    #[sea_orm(string_value = "disabled")]
    Disabled,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "subscription")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub public_id: i64,
    #[sea_orm(indexed)]
    pub client_id: i32,
    pub name: String,
    pub country: Country,
    pub source_site: Option<String>,
    pub search_url: String,
    pub status: SubscriptionStatus,
    pub deleted_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Client,
    #[sea_orm(has_many = "super::candidate::Entity")]
    Candidate,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::candidate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Candidate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
