use entity::subscription::{Country, SubscriptionStatus};
use serde::{Deserialize, Serialize};

use crate::model::db::SubscriptionModel;

/// Editable search criteria of a new subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSubscription {
    pub name: String,
    pub country: Country,
    pub source_site: Option<String>,
    pub search_url: String,
}

/// Replacement values for a subscription's editable fields.
///
/// Applying an update never touches status or the soft-delete marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionUpdate {
    pub name: String,
    pub country: Country,
    pub source_site: Option<String>,
    pub search_url: String,
}

/// Who is creating a subscription, which decides its initial status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreationPath {
    /// Partner or client request, starts awaiting platform review.
    ClientRequest,
    /// Created by a platform administrator, approved immediately.
    PlatformAdmin,
}

impl CreationPath {
    pub fn initial_status(self) -> SubscriptionStatus {
        match self {
            Self::ClientRequest => SubscriptionStatus::Review,
            Self::PlatformAdmin => SubscriptionStatus::Active,
        }
    }
}

/// Inclusion rule for "active subscriptions of a client".
///
/// Both scopes exclude soft-deleted subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveScope {
    /// Client-facing list: every status, including those still in review.
    Client,
    /// Platform and maintenance list: approved subscriptions only.
    Platform,
}

/// Status parsing flips to, `None` when the subscription is in review or in the trash.
pub fn next_parsing_status(subscription: &SubscriptionModel) -> Option<SubscriptionStatus> {
    if subscription.deleted_at.is_some() {
        return None;
    }

    match subscription.status {
        SubscriptionStatus::Active => Some(SubscriptionStatus::Disabled),
        SubscriptionStatus::Disabled => Some(SubscriptionStatus::Active),
        SubscriptionStatus::Review => None,
    }
}
