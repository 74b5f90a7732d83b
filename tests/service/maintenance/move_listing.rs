//! Tests for MaintenanceService::move_listing method.

use autobroker::{
    error::{maintenance::MaintenanceError, Error},
    service::maintenance::MaintenanceService,
};
use autobroker_test_utils::prelude::*;
use entity::subscription::SubscriptionStatus;

/// Tests moving a listing between two subscriptions of the same client.
///
/// Expected: Ok with the holding candidate now under the target subscription
#[tokio::test]
async fn moves_holding_candidate() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (client, subscription) = test.subscription().insert_mock_subscription().await?;
    let target = test
        .subscription()
        .insert_subscription(client.id, SubscriptionStatus::Active)
        .await?;
    let (candidate, listing) = test
        .candidate()
        .insert_candidate_with_listing(&subscription)
        .await?;

    let maintenance = MaintenanceService::new(&test.db);
    let moved = maintenance
        .move_listing(listing.public_id, target.public_id)
        .await
        .unwrap();

    assert_eq!(moved.id, candidate.id);
    assert_eq!(moved.subscription_id, target.id);
    assert_eq!(moved.listing_id, Some(listing.id));

    Ok(())
}

/// Tests moving a listing to a trashed subscription.
///
/// Expected: Err with SubscriptionNotFound
#[tokio::test]
async fn rejects_trashed_subscription() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (client, subscription) = test.subscription().insert_mock_subscription().await?;
    let trashed = test
        .subscription()
        .insert_deleted_subscription(client.id, SubscriptionStatus::Active)
        .await?;
    let (_, listing) = test
        .candidate()
        .insert_candidate_with_listing(&subscription)
        .await?;

    let maintenance = MaintenanceService::new(&test.db);
    let result = maintenance
        .move_listing(listing.public_id, trashed.public_id)
        .await;

    assert!(matches!(
        result,
        Err(Error::MaintenanceError(MaintenanceError::SubscriptionNotFound { .. }))
    ));

    Ok(())
}

/// Tests moving a listing to a subscription of another client.
///
/// Expected: Err with ClientMismatch naming both clients
#[tokio::test]
async fn rejects_client_mismatch() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (client, subscription) = test.subscription().insert_mock_subscription().await?;
    let (other_client, foreign) = test.subscription().insert_mock_subscription().await?;
    let (_, listing) = test
        .candidate()
        .insert_candidate_with_listing(&subscription)
        .await?;

    let maintenance = MaintenanceService::new(&test.db);
    let result = maintenance
        .move_listing(listing.public_id, foreign.public_id)
        .await;

    match result {
        Err(Error::MaintenanceError(error)) => assert_eq!(
            error,
            MaintenanceError::ClientMismatch {
                subscription_public_id: foreign.public_id,
                subscription_client_id: other_client.id,
                listing_client_id: client.id,
            }
        ),
        other => panic!("expected ClientMismatch, got {:?}", other),
    }

    Ok(())
}
