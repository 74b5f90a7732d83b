//! Tests for SubscriptionService::update method.

use autobroker::{
    model::subscription::SubscriptionUpdate, service::subscription::SubscriptionService,
};
use autobroker_test_utils::prelude::*;
use entity::subscription::{Country, SubscriptionStatus};

/// Tests editing a subscription in review.
///
/// Verifies that the editable fields change while status and the deletion marker stay
/// as they were.
///
/// Expected: Ok with new fields, status still `review`
#[tokio::test]
async fn keeps_status_and_deletion_state() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (_, client) = test.client().insert_mock_client().await?;
    let subscription = test
        .subscription()
        .insert_subscription(client.id, SubscriptionStatus::Review)
        .await?;

    let subscription_service = SubscriptionService::new(&test.db);
    let updated = subscription_service
        .update(
            subscription.id,
            SubscriptionUpdate {
                name: "BYD Seal".to_string(),
                country: Country::China,
                source_site: None,
                search_url: "https://www.che168.com/china/byd/".to_string(),
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "BYD Seal");
    assert_eq!(updated.country, Country::China);
    assert!(updated.source_site.is_none());
    assert_eq!(updated.status, SubscriptionStatus::Review);
    assert!(updated.deleted_at.is_none());
    assert!(updated.updated_at >= subscription.updated_at);

    Ok(())
}

/// Tests editing a subscription that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_subscription() -> Result<(), TestError> {
    let test = test_setup_with_broker_tables!()?;

    let subscription_service = SubscriptionService::new(&test.db);
    let result = subscription_service
        .update(
            1,
            SubscriptionUpdate {
                name: "Missing".to_string(),
                country: Country::Europe,
                source_site: None,
                search_url: "https://suchen.mobile.de/".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}
