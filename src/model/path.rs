//! Public URL paths.
//!
//! Entities are exposed to browsers only through their public ids, scoped by the partner's
//! slug. Consumers resolve a parsed path by exact public id match, never by sequence id.

use std::{fmt, str::FromStr};

use crate::{
    error::Error,
    model::db::{ClientModel, ListingModel, SubscriptionModel},
};

/// A parsed public path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicPath {
    /// `/{partner}/cars/{listing_public_id}`
    Listing { partner: String, public_id: i64 },
    /// `/{partner}/selection/{subscription_public_id}`
    Subscription { partner: String, public_id: i64 },
    /// `/{partner}/c/{client_public_id}`
    Client { partner: String, public_id: i64 },
}

impl PublicPath {
    pub fn partner(&self) -> &str {
        match self {
            Self::Listing { partner, .. }
            | Self::Subscription { partner, .. }
            | Self::Client { partner, .. } => partner,
        }
    }

    pub fn public_id(&self) -> i64 {
        match self {
            Self::Listing { public_id, .. }
            | Self::Subscription { public_id, .. }
            | Self::Client { public_id, .. } => *public_id,
        }
    }
}

impl fmt::Display for PublicPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Listing { partner, public_id } => write!(f, "/{}/cars/{}", partner, public_id),
            Self::Subscription { partner, public_id } => {
                write!(f, "/{}/selection/{}", partner, public_id)
            }
            Self::Client { partner, public_id } => write!(f, "/{}/c/{}", partner, public_id),
        }
    }
}

impl FromStr for PublicPath {
    type Err = Error;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

        let [partner, kind, id] = segments.as_slice() else {
            return Err(Error::ParseError(format!(
                "expected /{{partner}}/{{kind}}/{{id}}, got {}",
                path
            )));
        };

        if partner.is_empty() {
            return Err(Error::ParseError(format!("missing partner in {}", path)));
        }

        let public_id = id
            .parse::<i64>()
            .map_err(|e| Error::ParseError(format!("invalid public id {:?}: {}", id, e)))?;
        let partner = partner.to_string();

        match *kind {
            "cars" => Ok(Self::Listing { partner, public_id }),
            "selection" => Ok(Self::Subscription { partner, public_id }),
            "c" => Ok(Self::Client { partner, public_id }),
            other => Err(Error::ParseError(format!(
                "unknown path segment {:?} in {}",
                other, path
            ))),
        }
    }
}

/// The entity a [`PublicPath`] resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedPath {
    Listing(ListingModel),
    Subscription(SubscriptionModel),
    Client(ClientModel),
}
