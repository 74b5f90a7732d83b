use entity::listing::ListingStatus;
use serde::{Deserialize, Serialize};

use crate::model::db::ListingModel;

/// Fields of a listing created standalone or promoted from a candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewListing {
    pub title: String,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub images: Vec<String>,
    pub source_url: Option<String>,
}

/// Replacement values for a listing's editable fields. Never changes status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingUpdate {
    pub title: String,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub images: Vec<String>,
    pub source_url: Option<String>,
}

/// Encodes an image list for the JSON `images` column, `None` when empty.
pub fn images_to_json(images: &[String]) -> Option<serde_json::Value> {
    if images.is_empty() {
        return None;
    }

    Some(serde_json::Value::from(images.to_vec()))
}

/// Decodes the JSON `images` column, skipping anything that isn't a string.
pub fn images_from_json(images: Option<&serde_json::Value>) -> Vec<String> {
    images
        .and_then(|value| value.as_array())
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Whether the listing may be shown in the public catalog.
pub fn is_public(listing: &ListingModel) -> bool {
    listing.status == ListingStatus::Active
}
