//! Tests for CandidateService::reassign method.

use autobroker::service::candidate::CandidateService;
use autobroker_test_utils::prelude::*;
use entity::subscription::SubscriptionStatus;
use sea_orm::EntityTrait;

/// Tests moving a linked candidate to another subscription.
///
/// Verifies that the listing link follows the candidate and nothing but the owning
/// subscription changes.
///
/// Expected: Ok with only `subscription_id` changed
#[tokio::test]
async fn changes_only_owning_subscription() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (client, subscription) = test.subscription().insert_mock_subscription().await?;
    let target = test
        .subscription()
        .insert_subscription(client.id, SubscriptionStatus::Disabled)
        .await?;
    let (candidate, listing) = test
        .candidate()
        .insert_candidate_with_listing(&subscription)
        .await?;

    let candidate_service = CandidateService::new(&test.db);
    let moved = candidate_service
        .reassign(candidate.id, target.id)
        .await
        .unwrap()
        .unwrap();

    let mut expected = candidate.clone();
    expected.subscription_id = target.id;
    assert_eq!(moved, expected);

    let listing_after = entity::prelude::Listing::find_by_id(listing.id)
        .one(&test.db)
        .await?;
    assert_eq!(listing_after, Some(listing));

    Ok(())
}
