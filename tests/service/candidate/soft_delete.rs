//! Tests for CandidateService::soft_delete method.

use autobroker::{
    error::{lifecycle::LifecycleError, Error},
    service::candidate::CandidateService,
};
use autobroker_test_utils::prelude::*;
use entity::candidate::CandidateStatus;
use sea_orm::EntityTrait;

/// Tests soft-deleting a candidate that holds a listing.
///
/// Verifies that the candidate becomes `deleted` while the listing row is left exactly as it
/// was and stays linked.
///
/// Expected: Ok with candidate deleted, listing unchanged
#[tokio::test]
async fn leaves_linked_listing_untouched() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (_, subscription) = test.subscription().insert_mock_subscription().await?;
    let (candidate, listing) = test
        .candidate()
        .insert_candidate_with_listing(&subscription)
        .await?;

    let candidate_service = CandidateService::new(&test.db);
    let deleted = candidate_service
        .soft_delete(candidate.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(deleted.status, CandidateStatus::Deleted);
    assert_eq!(deleted.listing_id, Some(listing.id));

    let listing_after = entity::prelude::Listing::find_by_id(listing.id)
        .one(&test.db)
        .await?;
    assert_eq!(listing_after, Some(listing));

    Ok(())
}

/// Tests soft-deleting a candidate in moderation.
///
/// Expected: Ok with status `deleted`
#[tokio::test]
async fn deletes_moderation_candidate() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (_, subscription) = test.subscription().insert_mock_subscription().await?;
    let candidate = test
        .candidate()
        .insert_candidate(subscription.id, None, CandidateStatus::Moderation)
        .await?;

    let candidate_service = CandidateService::new(&test.db);
    let deleted = candidate_service
        .soft_delete(candidate.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(deleted.status, CandidateStatus::Deleted);

    Ok(())
}

/// Tests soft-deleting a candidate twice.
///
/// Expected: Err with CandidateAlreadyDeleted
#[tokio::test]
async fn rejects_already_deleted() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (_, subscription) = test.subscription().insert_mock_subscription().await?;
    let candidate = test
        .candidate()
        .insert_candidate(subscription.id, None, CandidateStatus::Deleted)
        .await?;

    let candidate_service = CandidateService::new(&test.db);
    let result = candidate_service.soft_delete(candidate.id).await;

    assert!(matches!(
        result,
        Err(Error::LifecycleError(LifecycleError::CandidateAlreadyDeleted(id))) if id == candidate.id
    ));

    Ok(())
}

/// Tests soft-deleting a candidate that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_candidate() -> Result<(), TestError> {
    let test = test_setup_with_broker_tables!()?;

    let candidate_service = CandidateService::new(&test.db);
    let result = candidate_service.soft_delete(1).await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}
