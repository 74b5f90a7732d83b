//! Tests for CandidateService::destroy method.
//!
//! Destroying a deleted candidate goes through the cascade deleter, which also removes a
//! listing the candidate holds.

use autobroker::service::{
    candidate::CandidateService, cascade::CascadeOutcome, linkage::LinkageCoordinator,
};
use autobroker_test_utils::prelude::*;
use entity::candidate::CandidateStatus;
use sea_orm::EntityTrait;

/// Tests destroying a deleted candidate holding a listing.
///
/// Expected: Ok with both rows removed
#[tokio::test]
async fn removes_candidate_and_listing() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (_, subscription) = test.subscription().insert_mock_subscription().await?;
    let (candidate, listing) = test
        .candidate()
        .insert_candidate_with_listing(&subscription)
        .await?;

    let candidate_service = CandidateService::new(&test.db);
    candidate_service
        .soft_delete(candidate.id)
        .await
        .unwrap();
    let outcome = candidate_service.destroy(candidate.id).await.unwrap();

    assert_eq!(
        outcome,
        Some(CascadeOutcome {
            candidate_removed: true,
            listing_removed: true
        })
    );
    assert!(entity::prelude::Listing::find_by_id(listing.id)
        .one(&test.db)
        .await?
        .is_none());
    let holder = LinkageCoordinator::new(&test.db)
        .lookup_by_listing(listing.id)
        .await
        .unwrap();
    assert!(holder.is_none());

    Ok(())
}

/// Tests destroying a deleted candidate without a listing.
///
/// Expected: Ok with only the candidate removed, other listings of the client kept
#[tokio::test]
async fn removes_only_candidate_without_listing() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (client, subscription) = test.subscription().insert_mock_subscription().await?;
    let other_listing = test.listing().insert_listing(client.id).await?;
    let candidate = test
        .candidate()
        .insert_candidate(subscription.id, None, CandidateStatus::Deleted)
        .await?;

    let candidate_service = CandidateService::new(&test.db);
    let outcome = candidate_service.destroy(candidate.id).await.unwrap();

    assert_eq!(
        outcome,
        Some(CascadeOutcome {
            candidate_removed: true,
            listing_removed: false
        })
    );
    assert!(entity::prelude::Candidate::find_by_id(candidate.id)
        .one(&test.db)
        .await?
        .is_none());
    assert!(entity::prelude::Listing::find_by_id(other_listing.id)
        .one(&test.db)
        .await?
        .is_some());

    Ok(())
}

/// Tests destroying a published candidate.
///
/// Expected: Err, candidate and listing both still present
#[tokio::test]
async fn keeps_rows_when_rejected() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (_, subscription) = test.subscription().insert_mock_subscription().await?;
    let (candidate, listing) = test
        .candidate()
        .insert_candidate_with_listing(&subscription)
        .await?;

    let candidate_service = CandidateService::new(&test.db);
    let result = candidate_service.destroy(candidate.id).await;

    assert!(result.is_err());
    assert!(entity::prelude::Candidate::find_by_id(candidate.id)
        .one(&test.db)
        .await?
        .is_some());
    assert!(entity::prelude::Listing::find_by_id(listing.id)
        .one(&test.db)
        .await?
        .is_some());

    Ok(())
}
