use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260105_000003_subscription::Subscription, m20260105_000004_listing::Listing,
};

static IDX_CANDIDATE_SUBSCRIPTION_ID: &str = "idx_candidate_subscription_id";
static UNQ_CANDIDATE_LISTING_ID: &str = "unq_candidate_listing_id";
static FK_CANDIDATE_SUBSCRIPTION_ID: &str = "fk_candidate_subscription_id";
static FK_CANDIDATE_LISTING_ID: &str = "fk_candidate_listing_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Candidate::Table)
                    .if_not_exists()
                    .col(pk_auto(Candidate::Id))
                    .col(integer(Candidate::SubscriptionId))
                    .col(text(Candidate::SourceUrl))
                    .col(integer_null(Candidate::ListingId))
                    .col(string_len(Candidate::Status, 16))
                    .col(timestamp(Candidate::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CANDIDATE_SUBSCRIPTION_ID)
                    .table(Candidate::Table)
                    .col(Candidate::SubscriptionId)
                    .to_owned(),
            )
            .await?;

        // At most one candidate per listing; NULL references are unconstrained.
        manager
            .create_index(
                Index::create()
                    .name(UNQ_CANDIDATE_LISTING_ID)
                    .table(Candidate::Table)
                    .col(Candidate::ListingId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CANDIDATE_SUBSCRIPTION_ID)
                    .from_tbl(Candidate::Table)
                    .from_col(Candidate::SubscriptionId)
                    .to_tbl(Subscription::Table)
                    .to_col(Subscription::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_CANDIDATE_LISTING_ID)
                    .from_tbl(Candidate::Table)
                    .from_col(Candidate::ListingId)
                    .to_tbl(Listing::Table)
                    .to_col(Listing::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CANDIDATE_LISTING_ID)
                    .table(Candidate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_CANDIDATE_SUBSCRIPTION_ID)
                    .table(Candidate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(UNQ_CANDIDATE_LISTING_ID)
                    .table(Candidate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CANDIDATE_SUBSCRIPTION_ID)
                    .table(Candidate::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Candidate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Candidate {
    Table,
    Id,
    SubscriptionId,
    SourceUrl,
    ListingId,
    Status,
    CreatedAt,
}
