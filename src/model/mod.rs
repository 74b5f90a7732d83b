//! Core models and type definitions.
//!
//! This module contains database model type aliases, the input types accepted by the
//! lifecycle services, and the public path codec used to expose entities in URLs.

pub mod candidate;
pub mod db;
pub mod listing;
pub mod path;
pub mod subscription;
