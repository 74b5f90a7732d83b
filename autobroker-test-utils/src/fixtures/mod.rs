//! Test fixture modules for database row creation.
//!
//! Each submodule provides an accessor on [`TestContext`](crate::TestContext) that inserts
//! rows directly, bypassing the services under test, plus a `factory` of in-memory models:
//!
//! - `client` - partners and their clients
//! - `subscription` - search subscriptions
//! - `listing` - published car listings
//! - `candidate` - found cars attached to subscriptions

pub mod candidate;
pub mod client;
pub mod listing;
pub mod subscription;
