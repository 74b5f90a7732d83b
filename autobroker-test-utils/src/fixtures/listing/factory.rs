//! Factory functions for generating in-memory listing models.

use chrono::Utc;
use entity::listing::ListingStatus;

use crate::model::ListingModel;

/// Create a mock listing model without touching the database.
pub fn mock_listing_model(status: ListingStatus) -> ListingModel {
    let now = Utc::now().naive_utc();
    ListingModel {
        id: 1,
        public_id: 300_000_000_001,
        client_id: 1,
        title: "Genesis G80 2021".to_string(),
        description: None,
        price: None,
        images: None,
        source_url: None,
        status,
        created_at: now,
        updated_at: now,
    }
}
