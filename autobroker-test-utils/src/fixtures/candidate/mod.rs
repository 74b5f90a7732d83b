//! Candidate fixture utilities.

pub mod factory;

use chrono::Utc;
use entity::candidate::CandidateStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CandidateModel, ListingModel, SubscriptionModel},
    TestContext,
};

impl TestContext {
    /// Access candidate fixtures.
    pub fn candidate<'a>(&'a mut self) -> CandidateFixtures<'a> {
        CandidateFixtures { setup: self }
    }
}

pub struct CandidateFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> CandidateFixtures<'a> {
    /// Insert a candidate under the subscription.
    ///
    /// # Arguments
    /// - `subscription_id` - ID of the owning subscription
    /// - `listing_id` - Optional listing the candidate references
    /// - `status` - Lifecycle status of the candidate
    pub async fn insert_candidate(
        &mut self,
        subscription_id: i32,
        listing_id: Option<i32>,
        status: CandidateStatus,
    ) -> Result<CandidateModel, TestError> {
        Ok(
            entity::prelude::Candidate::insert(entity::candidate::ActiveModel {
                subscription_id: ActiveValue::Set(subscription_id),
                source_url: ActiveValue::Set(format!(
                    "https://www.encar.com/dc/dc_cardetailview.do?carid={}",
                    subscription_id
                )),
                listing_id: ActiveValue::Set(listing_id),
                status: ActiveValue::Set(status),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a published candidate linked to a new listing owned by the subscription's client.
    pub async fn insert_candidate_with_listing(
        &mut self,
        subscription: &SubscriptionModel,
    ) -> Result<(CandidateModel, ListingModel), TestError> {
        let listing = self
            .setup
            .listing()
            .insert_listing(subscription.client_id)
            .await?;
        let candidate = self
            .insert_candidate(
                subscription.id,
                Some(listing.id),
                CandidateStatus::Published,
            )
            .await?;

        Ok((candidate, listing))
    }
}
