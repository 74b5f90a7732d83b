//! Business logic layer.
//!
//! Services enforce the lifecycle rules of subscriptions, candidates and listings on top of the
//! repositories in [`crate::data`]. Operations spanning several rows open a transaction and run
//! the repositories on it, so either every write lands or none does.

pub mod candidate;
pub mod cascade;
pub mod client;
pub mod linkage;
pub mod listing;
pub mod maintenance;
pub mod subscription;
