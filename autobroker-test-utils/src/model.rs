//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main autobroker crate to keep fixture signatures
//! consistent with the code under test.

/// Type alias for partner database model.
pub type PartnerModel = entity::partner::Model;

/// Type alias for client database model.
pub type ClientModel = entity::client::Model;

/// Type alias for subscription database model.
pub type SubscriptionModel = entity::subscription::Model;

/// Type alias for candidate database model.
pub type CandidateModel = entity::candidate::Model;

/// Type alias for listing database model.
pub type ListingModel = entity::listing::Model;
