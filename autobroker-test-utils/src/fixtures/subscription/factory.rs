//! Factory functions for generating in-memory subscription models.

use chrono::Utc;
use entity::subscription::{Country, SubscriptionStatus};

use crate::model::SubscriptionModel;

/// Create a mock subscription model without touching the database.
///
/// # Arguments
/// - `status` - Lifecycle status of the subscription
/// - `deleted` - Whether the soft-delete marker is set
pub fn mock_subscription_model(status: SubscriptionStatus, deleted: bool) -> SubscriptionModel {
    let now = Utc::now().naive_utc();
    SubscriptionModel {
        id: 1,
        public_id: 200_000_000_001,
        client_id: 1,
        name: "Kia Sorento".to_string(),
        country: Country::Korea,
        source_site: None,
        search_url: "https://www.encar.com/search?q=sorento".to_string(),
        status,
        deleted_at: deleted.then_some(now),
        created_at: now,
        updated_at: now,
    }
}
