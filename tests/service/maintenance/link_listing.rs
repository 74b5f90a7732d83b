//! Tests for MaintenanceService::link_listing method.
//!
//! This module verifies attaching an existing listing to an approved subscription of its
//! client by recording a new published candidate, and the lookups that can reject it.

use autobroker::{
    error::{linkage::LinkageError, maintenance::MaintenanceError, Error},
    service::{linkage::LinkageCoordinator, maintenance::MaintenanceService},
};
use autobroker_test_utils::prelude::*;
use entity::{
    candidate::CandidateStatus, listing::ListingStatus, subscription::SubscriptionStatus,
};
use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel};

/// Tests linking a free listing to an active subscription.
///
/// Expected: Ok with a published candidate holding the listing, using its source URL
#[tokio::test]
async fn records_published_candidate() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (client, subscription) = test.subscription().insert_mock_subscription().await?;
    let listing = test.listing().insert_listing(client.id).await?;

    let maintenance = MaintenanceService::new(&test.db);
    let candidate = maintenance
        .link_listing(listing.public_id, subscription.public_id)
        .await
        .unwrap();

    assert_eq!(candidate.subscription_id, subscription.id);
    assert_eq!(candidate.listing_id, Some(listing.id));
    assert_eq!(candidate.status, CandidateStatus::Published);
    assert_eq!(Some(candidate.source_url.clone()), listing.source_url);

    let holder = LinkageCoordinator::new(&test.db)
        .lookup_by_listing(listing.id)
        .await
        .unwrap();
    assert_eq!(holder, Some(candidate));

    Ok(())
}

/// Tests linking to a subscription still in review.
///
/// Expected: Err with SubscriptionNotFound, review subscriptions aren't link targets
#[tokio::test]
async fn rejects_subscription_in_review() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (_, client) = test.client().insert_mock_client().await?;
    let subscription = test
        .subscription()
        .insert_subscription(client.id, SubscriptionStatus::Review)
        .await?;
    let listing = test.listing().insert_listing(client.id).await?;

    let maintenance = MaintenanceService::new(&test.db);
    let result = maintenance
        .link_listing(listing.public_id, subscription.public_id)
        .await;

    assert!(matches!(
        result,
        Err(Error::MaintenanceError(MaintenanceError::SubscriptionNotFound { .. }))
    ));

    Ok(())
}

/// Tests linking to a subscription of another client.
///
/// Expected: Err with SubscriptionNotFound
#[tokio::test]
async fn rejects_subscription_of_other_client() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (_, subscription) = test.subscription().insert_mock_subscription().await?;
    let (_, other_client) = test.client().insert_mock_client().await?;
    let listing = test.listing().insert_listing(other_client.id).await?;

    let maintenance = MaintenanceService::new(&test.db);
    let result = maintenance
        .link_listing(listing.public_id, subscription.public_id)
        .await;

    assert!(matches!(
        result,
        Err(Error::MaintenanceError(MaintenanceError::SubscriptionNotFound { client_id, .. }))
            if client_id == other_client.id
    ));

    Ok(())
}

/// Tests linking a listing that another candidate already holds.
///
/// Expected: Err with ListingAlreadyLinked
#[tokio::test]
async fn rejects_listing_already_held() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (_, subscription) = test.subscription().insert_mock_subscription().await?;
    let (holder, listing) = test
        .candidate()
        .insert_candidate_with_listing(&subscription)
        .await?;

    let maintenance = MaintenanceService::new(&test.db);
    let result = maintenance
        .link_listing(listing.public_id, subscription.public_id)
        .await;

    assert!(matches!(
        result,
        Err(Error::LinkageError(LinkageError::ListingAlreadyLinked { candidate_id, .. }))
            if candidate_id == holder.id
    ));

    Ok(())
}

/// Tests linking a listing without a source URL.
///
/// Expected: Err with MissingSourceUrl
#[tokio::test]
async fn rejects_listing_without_source_url() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (client, subscription) = test.subscription().insert_mock_subscription().await?;
    let listing = test
        .listing()
        .insert_listing_with_status(client.id, ListingStatus::Active)
        .await?;
    let mut listing_am = listing.clone().into_active_model();
    listing_am.source_url = ActiveValue::Set(None);
    listing_am.update(&test.db).await?;

    let maintenance = MaintenanceService::new(&test.db);
    let result = maintenance
        .link_listing(listing.public_id, subscription.public_id)
        .await;

    assert!(matches!(
        result,
        Err(Error::MaintenanceError(MaintenanceError::MissingSourceUrl(id))) if id == listing.public_id
    ));

    Ok(())
}

/// Tests linking an unknown listing.
///
/// Expected: Err with ListingNotFound
#[tokio::test]
async fn rejects_unknown_listing() -> Result<(), TestError> {
    let mut test = test_setup_with_broker_tables!()?;
    let (_, subscription) = test.subscription().insert_mock_subscription().await?;

    let maintenance = MaintenanceService::new(&test.db);
    let result = maintenance
        .link_listing(300_000_000_001, subscription.public_id)
        .await;

    assert!(matches!(
        result,
        Err(Error::MaintenanceError(MaintenanceError::ListingNotFound(300_000_000_001)))
    ));

    Ok(())
}
