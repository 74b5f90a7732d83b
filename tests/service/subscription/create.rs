//! Tests for SubscriptionService::create method.
//!
//! This module verifies that the creation path decides the initial status and that every
//! subscription receives a public id inside the subscription partition.

use std::collections::HashSet;

use autobroker::{
    data::public_id::partition_range,
    error::Error,
    model::subscription::{CreationPath, NewSubscription},
    service::subscription::SubscriptionService,
};
use autobroker_test_utils::prelude::*;
use entity::subscription::{Country, SubscriptionStatus};

fn new_subscription(name: &str) -> NewSubscription {
    NewSubscription {
        name: name.to_string(),
        country: Country::Korea,
        source_site: Some("encar.com".to_string()),
        search_url: "https://www.encar.com/dc/dc_carsearchlist.do?carType=kor".to_string(),
    }
}

/// Tests a client request creating a subscription.
///
/// Expected: Ok with status `review` and no deletion marker
#[tokio::test]
async fn client_request_starts_in_review() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (_, client) = test.client().insert_mock_client().await?;

    let subscription_service = SubscriptionService::new(&test.db);
    let result = subscription_service
        .create(
            client.id,
            new_subscription("Hyundai Tucson"),
            CreationPath::ClientRequest,
        )
        .await;

    assert!(result.is_ok());
    let subscription = result.unwrap();
    assert_eq!(subscription.status, SubscriptionStatus::Review);
    assert!(subscription.deleted_at.is_none());

    Ok(())
}

/// Tests a platform administrator creating a subscription.
///
/// Expected: Ok with status `active`
#[tokio::test]
async fn platform_admin_starts_active() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (_, client) = test.client().insert_mock_client().await?;

    let subscription_service = SubscriptionService::new(&test.db);
    let subscription = subscription_service
        .create(
            client.id,
            new_subscription("Kia Sorento"),
            CreationPath::PlatformAdmin,
        )
        .await
        .unwrap();

    assert_eq!(subscription.status, SubscriptionStatus::Active);

    Ok(())
}

/// Tests public id allocation across many subscriptions.
///
/// Verifies that every allocated id lies inside the subscription partition and that no two
/// subscriptions share an id.
///
/// Expected: Ok with distinct in-range public ids
#[tokio::test]
async fn allocates_distinct_ids_in_partition() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (_, client) = test.client().insert_mock_client().await?;

    let subscription_service = SubscriptionService::new(&test.db);
    let range = partition_range(entity::subscription::PUBLIC_ID_PARTITION);
    let mut seen = HashSet::new();

    for i in 0..25 {
        let subscription = subscription_service
            .create(
                client.id,
                new_subscription(&format!("Search {}", i)),
                CreationPath::ClientRequest,
            )
            .await
            .unwrap();

        assert!(range.contains(&subscription.public_id));
        assert!(seen.insert(subscription.public_id));
    }

    Ok(())
}

/// Tests creating a subscription for a client that doesn't exist.
///
/// Expected: Err with DbErr from the foreign key, no row left behind
#[tokio::test]
async fn fails_for_missing_client() -> Result<(), TestError> {
    let test = test_setup_with_broker_tables!()?;

    let subscription_service = SubscriptionService::new(&test.db);
    let result = subscription_service
        .create(
            42,
            new_subscription("Nowhere"),
            CreationPath::ClientRequest,
        )
        .await;

    assert!(matches!(result, Err(Error::DbErr(_))));
    assert!(subscription_service.find_pending_review().await.unwrap().is_empty());

    Ok(())
}
