//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM models of the `entity` crate, so service signatures
//! don't need to spell out the generated module paths.

/// Type alias for partner database model.
///
/// # Fields (from `entity::partner::Model`)
/// - `id` - Primary key
/// - `slug` - Unique URL segment identifying the partner
/// - `name` - Display name
/// - `created_at` - Timestamp when the partner was registered
pub type PartnerModel = entity::partner::Model;

/// Type alias for client database model.
///
/// # Fields (from `entity::client::Model`)
/// - `id` - Primary key, internal sequence id
/// - `public_id` - Public identifier (partition 1)
/// - `partner_id` - Foreign key to the registering partner
/// - `name` - Display name
/// - `created_at` - Timestamp when the client was registered
pub type ClientModel = entity::client::Model;

/// Type alias for subscription database model.
///
/// # Fields (from `entity::subscription::Model`)
/// - `id` - Primary key, internal sequence id
/// - `public_id` - Public identifier (partition 2)
/// - `client_id` - Foreign key to the owning client
/// - `name`, `country`, `source_site`, `search_url` - Editable search criteria
/// - `status` - `review`, `active` or `disabled`
/// - `deleted_at` - Soft-delete marker, independent of `status`
/// - `created_at`, `updated_at` - Row timestamps
pub type SubscriptionModel = entity::subscription::Model;

/// Type alias for candidate database model.
///
/// # Fields (from `entity::candidate::Model`)
/// - `id` - Primary key; candidates have no public id
/// - `subscription_id` - Foreign key to the owning subscription
/// - `source_url` - Marketplace page the car was found on
/// - `listing_id` - Optional, unique reference to the promoted listing
/// - `status` - `published`, `moderation` or `deleted`
/// - `created_at` - Timestamp when the candidate was recorded
pub type CandidateModel = entity::candidate::Model;

/// Type alias for listing database model.
///
/// # Fields (from `entity::listing::Model`)
/// - `id` - Primary key, internal sequence id
/// - `public_id` - Public identifier (partition 3)
/// - `client_id` - Foreign key to the owning client
/// - `title` - Required title
/// - `description`, `price`, `images`, `source_url` - Optional details
/// - `status` - `active`, `deleted` or `review`
/// - `created_at`, `updated_at` - Row timestamps
pub type ListingModel = entity::listing::Model;
