//! Tests for ListingService::destroy method.

use autobroker::service::listing::ListingService;
use autobroker_test_utils::prelude::*;
use entity::{candidate::CandidateStatus, listing::ListingStatus};
use sea_orm::EntityTrait;

/// Tests hard-deleting a listing held by a candidate.
///
/// Verifies that the candidate survives with its listing reference cleared.
///
/// Expected: Ok(true), candidate kept with no listing
#[tokio::test]
async fn clears_reference_on_holding_candidate() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (_, subscription) = test.subscription().insert_mock_subscription().await?;
    let (candidate, listing) = test
        .candidate()
        .insert_candidate_with_listing(&subscription)
        .await?;

    let listing_service = ListingService::new(&test.db);
    let result = listing_service.destroy(listing.id).await;

    assert!(matches!(result, Ok(true)));
    let candidate_after = entity::prelude::Candidate::find_by_id(candidate.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert!(candidate_after.listing_id.is_none());
    assert_eq!(candidate_after.status, CandidateStatus::Published);

    Ok(())
}

/// Tests hard-deleting regardless of status.
///
/// Expected: Ok(true) for a listing in review
#[tokio::test]
async fn has_no_state_check() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (_, client) = test.client().insert_mock_client().await?;
    let listing = test
        .listing()
        .insert_listing_with_status(client.id, ListingStatus::Review)
        .await?;

    let listing_service = ListingService::new(&test.db);
    let result = listing_service.destroy(listing.id).await;

    assert!(matches!(result, Ok(true)));

    Ok(())
}

/// Tests hard-deleting a listing that doesn't exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_listing() -> Result<(), TestError> {
    let test = test_setup_with_broker_tables!()?;

    let listing_service = ListingService::new(&test.db);
    let result = listing_service.destroy(1).await;

    assert!(matches!(result, Ok(false)));

    Ok(())
}
