use chrono::Utc;
use entity::candidate::CandidateStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct CandidateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CandidateRepository<'a, C> {
    /// Creates a new instance of [`CandidateRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new candidate under a subscription
    ///
    /// The unique index on `listing_id` rejects a second candidate for the same listing, callers
    /// check the link first to report a domain error instead.
    pub async fn create(
        &self,
        subscription_id: i32,
        source_url: String,
        listing_id: Option<i32>,
        status: CandidateStatus,
    ) -> Result<entity::candidate::Model, DbErr> {
        let candidate = entity::candidate::ActiveModel {
            subscription_id: ActiveValue::Set(subscription_id),
            source_url: ActiveValue::Set(source_url),
            listing_id: ActiveValue::Set(listing_id),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        candidate.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        candidate_id: i32,
    ) -> Result<Option<entity::candidate::Model>, DbErr> {
        entity::prelude::Candidate::find_by_id(candidate_id)
            .one(self.db)
            .await
    }

    /// Gets the candidate currently referencing the listing, if any
    pub async fn get_by_listing_id(
        &self,
        listing_id: i32,
    ) -> Result<Option<entity::candidate::Model>, DbErr> {
        entity::prelude::Candidate::find()
            .filter(entity::candidate::Column::ListingId.eq(listing_id))
            .one(self.db)
            .await
    }

    pub async fn get_many_by_subscription_id(
        &self,
        subscription_id: i32,
    ) -> Result<Vec<entity::candidate::Model>, DbErr> {
        entity::prelude::Candidate::find()
            .filter(entity::candidate::Column::SubscriptionId.eq(subscription_id))
            .order_by_asc(entity::candidate::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_many_by_subscription_id_and_status(
        &self,
        subscription_id: i32,
        status: CandidateStatus,
    ) -> Result<Vec<entity::candidate::Model>, DbErr> {
        entity::prelude::Candidate::find()
            .filter(entity::candidate::Column::SubscriptionId.eq(subscription_id))
            .filter(entity::candidate::Column::Status.eq(status))
            .order_by_asc(entity::candidate::Column::Id)
            .all(self.db)
            .await
    }

    /// Updates the status of a candidate
    ///
    /// # Returns
    /// - `Option<`[`entity::candidate::Model`]`>`: Some if update is successful
    ///   or None if the candidate was not found
    pub async fn update_status(
        &self,
        candidate_id: i32,
        status: CandidateStatus,
    ) -> Result<Option<entity::candidate::Model>, DbErr> {
        let candidate = match entity::prelude::Candidate::find_by_id(candidate_id)
            .one(self.db)
            .await?
        {
            Some(candidate) => candidate,
            None => return Ok(None),
        };

        let mut candidate_am = candidate.into_active_model();
        candidate_am.status = ActiveValue::Set(status);

        let candidate = candidate_am.update(self.db).await?;

        Ok(Some(candidate))
    }

    /// Sets or clears the listing reference of a candidate
    pub async fn update_listing_id(
        &self,
        candidate_id: i32,
        listing_id: Option<i32>,
    ) -> Result<Option<entity::candidate::Model>, DbErr> {
        let candidate = match entity::prelude::Candidate::find_by_id(candidate_id)
            .one(self.db)
            .await?
        {
            Some(candidate) => candidate,
            None => return Ok(None),
        };

        let mut candidate_am = candidate.into_active_model();
        candidate_am.listing_id = ActiveValue::Set(listing_id);

        let candidate = candidate_am.update(self.db).await?;

        Ok(Some(candidate))
    }

    /// Moves a candidate under another subscription
    pub async fn update_subscription_id(
        &self,
        candidate_id: i32,
        subscription_id: i32,
    ) -> Result<Option<entity::candidate::Model>, DbErr> {
        let candidate = match entity::prelude::Candidate::find_by_id(candidate_id)
            .one(self.db)
            .await?
        {
            Some(candidate) => candidate,
            None => return Ok(None),
        };

        let mut candidate_am = candidate.into_active_model();
        candidate_am.subscription_id = ActiveValue::Set(subscription_id);

        let candidate = candidate_am.update(self.db).await?;

        Ok(Some(candidate))
    }

    /// Deletes a candidate row, leaving any referenced listing in place
    pub async fn delete(&self, candidate_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Candidate::delete_by_id(candidate_id)
            .exec(self.db)
            .await
    }
}
