use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260105_000002_client::Client;

static IDX_LISTING_CLIENT_ID: &str = "idx_listing_client_id";
static FK_LISTING_CLIENT_ID: &str = "fk_listing_client_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Listing::Table)
                    .if_not_exists()
                    .col(pk_auto(Listing::Id))
                    .col(big_integer_uniq(Listing::PublicId))
                    .col(integer(Listing::ClientId))
                    .col(string(Listing::Title))
                    .col(text_null(Listing::Description))
                    .col(big_integer_null(Listing::Price))
                    .col(json_null(Listing::Images))
                    .col(text_null(Listing::SourceUrl))
                    .col(string_len(Listing::Status, 16))
                    .col(timestamp(Listing::CreatedAt))
                    .col(timestamp(Listing::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LISTING_CLIENT_ID)
                    .table(Listing::Table)
                    .col(Listing::ClientId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LISTING_CLIENT_ID)
                    .from_tbl(Listing::Table)
                    .from_col(Listing::ClientId)
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
                    .name(FK_LISTING_CLIENT_ID)
                    .table(Listing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_LISTING_CLIENT_ID)
                    .table(Listing::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Listing::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Listing {
    Table,
    Id,
    PublicId,
    ClientId,
    Title,
    Description,
    Price,
    Images,
    SourceUrl,
    Status,
    CreatedAt,
    UpdatedAt,
}
