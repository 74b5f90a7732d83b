//! Data access layer repositories.
//!
//! This module contains the database repositories for every broker entity, plus the public
//! identifier allocator shared by all of them. Repositories are generic over
//! [`sea_orm::ConnectionTrait`] so the same code runs on a plain connection or inside a
//! transaction opened by a service.

pub mod candidate;
pub mod client;
pub mod listing;
pub mod public_id;
pub mod subscription;
