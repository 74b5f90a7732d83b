//! Tests for SubscriptionService::destroy method.

use autobroker::service::subscription::SubscriptionService;
use autobroker_test_utils::prelude::*;
use entity::candidate::CandidateStatus;
use sea_orm::EntityTrait;

/// Tests destroying a trashed subscription with candidates.
///
/// Verifies that the candidates go with the subscription while a listing promoted from one
/// of them stays.
///
/// Expected: Ok(true), subscription and candidates gone, listing kept
#[tokio::test]
async fn removes_candidates_keeps_listings() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (_, subscription) = test.subscription().insert_mock_subscription().await?;
    let (linked, listing) = test
        .candidate()
        .insert_candidate_with_listing(&subscription)
        .await?;
    let plain = test
        .candidate()
        .insert_candidate(subscription.id, None, CandidateStatus::Published)
        .await?;

    let subscription_service = SubscriptionService::new(&test.db);
    subscription_service
        .soft_delete(subscription.id)
        .await
        .unwrap();
    let result = subscription_service.destroy(subscription.id).await;

    assert!(matches!(result, Ok(true)));
    assert!(entity::prelude::Subscription::find_by_id(subscription.id)
        .one(&test.db)
        .await?
        .is_none());
    for candidate_id in [linked.id, plain.id] {
        assert!(entity::prelude::Candidate::find_by_id(candidate_id)
            .one(&test.db)
            .await?
            .is_none());
    }
    assert!(entity::prelude::Listing::find_by_id(listing.id)
        .one(&test.db)
        .await?
        .is_some());

    Ok(())
}
