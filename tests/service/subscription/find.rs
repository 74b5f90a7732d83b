//! Tests for the SubscriptionService query methods.

use autobroker::{model::subscription::ActiveScope, service::subscription::SubscriptionService};
use autobroker_test_utils::prelude::*;
use entity::subscription::SubscriptionStatus;

/// Tests the platform moderation queue.
///
/// Verifies that only subscriptions in review that aren't trashed are queued, across clients.
///
/// Expected: Ok with the two live review subscriptions
#[tokio::test]
async fn pending_review_lists_live_review_subscriptions() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (_, first_client) = test.client().insert_mock_client().await?;
    let (_, second_client) = test.client().insert_mock_client().await?;
    let first = test
        .subscription()
        .insert_subscription(first_client.id, SubscriptionStatus::Review)
        .await?;
    let second = test
        .subscription()
        .insert_subscription(second_client.id, SubscriptionStatus::Review)
        .await?;
    test.subscription()
        .insert_deleted_subscription(first_client.id, SubscriptionStatus::Review)
        .await?;
    test.subscription()
        .insert_subscription(first_client.id, SubscriptionStatus::Active)
        .await?;

    let subscription_service = SubscriptionService::new(&test.db);
    let pending = subscription_service.find_pending_review().await.unwrap();

    let mut ids: Vec<i32> = pending.iter().map(|s| s.id).collect();
    ids.sort();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests the two active scopes against every status.
///
/// Expected: client scope includes review, platform scope doesn't, neither has trashed rows
#[tokio::test]
async fn active_scopes_differ_only_in_review() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (_, client) = test.client().insert_mock_client().await?;
    let review = test
        .subscription()
        .insert_subscription(client.id, SubscriptionStatus::Review)
        .await?;
    let active = test
        .subscription()
        .insert_subscription(client.id, SubscriptionStatus::Active)
        .await?;
    let disabled = test
        .subscription()
        .insert_subscription(client.id, SubscriptionStatus::Disabled)
        .await?;
    test.subscription()
        .insert_deleted_subscription(client.id, SubscriptionStatus::Active)
        .await?;

    let subscription_service = SubscriptionService::new(&test.db);
    let client_scope = subscription_service
        .find_active_for_client(client.id, ActiveScope::Client)
        .await
        .unwrap();
    let platform_scope = subscription_service
        .find_active_for_client(client.id, ActiveScope::Platform)
        .await
        .unwrap();

    assert_eq!(client_scope, vec![review, active.clone(), disabled.clone()]);
    assert_eq!(platform_scope, vec![active, disabled]);

    Ok(())
}

/// Tests resolving by public id.
///
/// Expected: exact match found, sequence id not treated as a public id
#[tokio::test]
async fn resolves_by_exact_public_id() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (_, subscription) = test.subscription().insert_mock_subscription().await?;

    let subscription_service = SubscriptionService::new(&test.db);
    let found = subscription_service
        .get_by_public_id(subscription.public_id)
        .await
        .unwrap();
    let by_sequence = subscription_service
        .get_by_public_id(subscription.id as i64)
        .await
        .unwrap();

    assert_eq!(found, Some(subscription));
    assert!(by_sequence.is_none());

    Ok(())
}
