use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260105_000001_partner::Partner;

static FK_CLIENT_PARTNER_ID: &str = "fk_client_partner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Client::Table)
                    .if_not_exists()
                    .col(pk_auto(Client::Id))
                    .col(big_integer_uniq(Client::PublicId))
                    .col(integer(Client::PartnerId))
                    .col(string(Client::Name))
                    .col(timestamp(Client::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CLIENT_PARTNER_ID)
                    .from_tbl(Client::Table)
                    .from_col(Client::PartnerId)
                    .to_tbl(Partner::Table)
                    .to_col(Partner::Id)
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
                    .name(FK_CLIENT_PARTNER_ID)
                    .table(Client::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Client::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Client {
    Table,
    Id,
    PublicId,
    PartnerId,
    Name,
    CreatedAt,
}
