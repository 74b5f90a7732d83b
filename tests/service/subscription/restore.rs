//! Tests for SubscriptionService::soft_delete and SubscriptionService::restore methods.
//!
//! This module verifies that soft deletion only sets the deletion marker and that restoring
//! returns the row to exactly its state before deletion.

use autobroker::{
    error::{lifecycle::LifecycleError, Error},
    model::subscription::ActiveScope,
    service::subscription::SubscriptionService,
};
use autobroker_test_utils::prelude::*;
use entity::subscription::SubscriptionStatus;

/// Tests soft-deleting then restoring a disabled subscription.
///
/// Expected: Ok with a restored row identical to the original
#[tokio::test]
async fn restore_yields_identical_row() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (_, client) = test.client().insert_mock_client().await?;
    let subscription = test
        .subscription()
        .insert_subscription(client.id, SubscriptionStatus::Disabled)
        .await?;

    let subscription_service = SubscriptionService::new(&test.db);
    let deleted = subscription_service
        .soft_delete(subscription.id)
        .await
        .unwrap()
        .unwrap();
    assert!(deleted.deleted_at.is_some());
    assert_eq!(deleted.status, SubscriptionStatus::Disabled);

    let restored = subscription_service
        .restore(subscription.id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(restored, subscription);

    Ok(())
}

/// Tests that a soft-deleted subscription leaves the active lists for the trash.
///
/// Expected: excluded from both active scopes, present in the deleted list
#[tokio::test]
async fn soft_deleted_moves_to_trash() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (client, subscription) = test.subscription().insert_mock_subscription().await?;

    let subscription_service = SubscriptionService::new(&test.db);
    subscription_service
        .soft_delete(subscription.id)
        .await
        .unwrap();

    let client_scope = subscription_service
        .find_active_for_client(client.id, ActiveScope::Client)
        .await
        .unwrap();
    let platform_scope = subscription_service
        .find_active_for_client(client.id, ActiveScope::Platform)
        .await
        .unwrap();
    let trash = subscription_service
        .find_deleted_for_client(client.id)
        .await
        .unwrap();

    assert!(client_scope.is_empty());
    assert!(platform_scope.is_empty());
    assert_eq!(trash.len(), 1);
    assert_eq!(trash[0].id, subscription.id);

    Ok(())
}

/// Tests soft-deleting twice.
///
/// Expected: Err with SubscriptionAlreadyDeleted
#[tokio::test]
async fn rejects_double_soft_delete() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (_, client) = test.client().insert_mock_client().await?;
    let subscription = test
        .subscription()
        .insert_deleted_subscription(client.id, SubscriptionStatus::Active)
        .await?;

    let subscription_service = SubscriptionService::new(&test.db);
    let result = subscription_service.soft_delete(subscription.id).await;

    assert!(matches!(
        result,
        Err(Error::LifecycleError(LifecycleError::SubscriptionAlreadyDeleted(_)))
    ));

    Ok(())
}

/// Tests restoring a subscription that isn't in the trash.
///
/// Expected: Err with SubscriptionNotDeleted
#[tokio::test]
async fn rejects_restore_of_live_subscription() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (_, subscription) = test.subscription().insert_mock_subscription().await?;

    let subscription_service = SubscriptionService::new(&test.db);
    let result = subscription_service.restore(subscription.id).await;

    assert!(matches!(
        result,
        Err(Error::LifecycleError(LifecycleError::SubscriptionNotDeleted(_)))
    ));

    Ok(())
}
