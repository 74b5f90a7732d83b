use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260105_000002_client::Client;

static IDX_SUBSCRIPTION_CLIENT_ID: &str = "idx_subscription_client_id";
static FK_SUBSCRIPTION_CLIENT_ID: &str = "fk_subscription_client_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Status has no default: the creation path decides between `review` and `active`.
        manager
            .create_table(
                Table::create()
                    .table(Subscription::Table)
                    .if_not_exists()
                    .col(pk_auto(Subscription::Id))
                    .col(big_integer_uniq(Subscription::PublicId))
                    .col(integer(Subscription::ClientId))
                    .col(string(Subscription::Name))
                    .col(string_len(Subscription::Country, 16))
                    .col(string_null(Subscription::SourceSite))
                    .col(text(Subscription::SearchUrl))
                    .col(string_len(Subscription::Status, 16))
                    .col(timestamp_null(Subscription::DeletedAt))
                    .col(timestamp(Subscription::CreatedAt))
                    .col(timestamp(Subscription::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SUBSCRIPTION_CLIENT_ID)
                    .table(Subscription::Table)
                    .col(Subscription::ClientId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SUBSCRIPTION_CLIENT_ID)
                    .from_tbl(Subscription::Table)
                    .from_col(Subscription::ClientId)
                    .to_tbl(Client::Table)
                    .to_col(Client::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SUBSCRIPTION_CLIENT_ID)
                    .table(Subscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SUBSCRIPTION_CLIENT_ID)
                    .table(Subscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Subscription::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Subscription {
    Table,
    Id,
    PublicId,
    ClientId,
    Name,
    Country,
    SourceSite,
    SearchUrl,
    Status,
    DeletedAt,
    CreatedAt,
    UpdatedAt,
}
