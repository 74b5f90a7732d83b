use entity::partner;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        client::{ClientRepository, PartnerRepository},
        listing::ListingRepository,
        public_id::PublicIdAllocator,
        subscription::SubscriptionRepository,
    },
    error::Error,
    model::{
        db::{ClientModel, ListingModel, PartnerModel, SubscriptionModel},
        listing::is_public,
        path::{PublicPath, ResolvedPath},
    },
};

/// Partner and client registry, and resolution of public paths.
pub struct ClientService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClientService<'a> {
    /// Creates a new instance of [`ClientService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a partner under a unique URL slug
    pub async fn register_partner(&self, slug: &str, name: &str) -> Result<PartnerModel, Error> {
        let partner = PartnerRepository::new(self.db).create(slug, name).await?;

        tracing::info!("Registered partner {} ({})", partner.slug, partner.id);

        Ok(partner)
    }

    /// Registers a client of a partner with a freshly allocated public id
    pub async fn register_client(&self, partner_id: i32, name: &str) -> Result<ClientModel, Error> {
        let txn = self.db.begin().await?;

        let public_id = PublicIdAllocator::new()
            .allocate::<entity::client::Entity, _>(&txn)
            .await?;
        let client = ClientRepository::new(&txn)
            .create(partner_id, public_id, name)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "Registered client {} for partner {} with public id {}",
            client.id,
            partner_id,
            client.public_id
        );

        Ok(client)
    }

    /// Resolves a client by public id, only if it belongs to the partner
    pub async fn resolve_client(
        &self,
        partner_slug: &str,
        public_id: i64,
    ) -> Result<Option<ClientModel>, Error> {
        let client = ClientRepository::new(self.db)
            .get_by_public_id(public_id)
            .await?;

        Ok(client
            .filter(|(_, partner)| is_partner(partner.as_ref(), partner_slug))
            .map(|(client, _)| client))
    }

    /// Resolves a subscription by public id, only if it belongs to the partner and isn't in
    /// the trash
    pub async fn resolve_subscription(
        &self,
        partner_slug: &str,
        public_id: i64,
    ) -> Result<Option<SubscriptionModel>, Error> {
        let Some(subscription) = SubscriptionRepository::new(self.db)
            .get_by_public_id(public_id)
            .await?
        else {
            return Ok(None);
        };

        if subscription.deleted_at.is_some()
            || !self
                .client_belongs_to(subscription.client_id, partner_slug)
                .await?
        {
            return Ok(None);
        }

        Ok(Some(subscription))
    }

    /// Resolves an `active` listing by public id, only if it belongs to the partner
    pub async fn resolve_listing(
        &self,
        partner_slug: &str,
        public_id: i64,
    ) -> Result<Option<ListingModel>, Error> {
        let Some(listing) = ListingRepository::new(self.db)
            .get_by_public_id(public_id)
            .await?
        else {
            return Ok(None);
        };

        if !is_public(&listing)
            || !self
                .client_belongs_to(listing.client_id, partner_slug)
                .await?
        {
            return Ok(None);
        }

        Ok(Some(listing))
    }

    /// Resolves any public path to the entity it addresses
    pub async fn resolve(&self, path: &PublicPath) -> Result<Option<ResolvedPath>, Error> {
        let resolved = match path {
            PublicPath::Listing { partner, public_id } => self
                .resolve_listing(partner, *public_id)
                .await?
                .map(ResolvedPath::Listing),
            PublicPath::Subscription { partner, public_id } => self
                .resolve_subscription(partner, *public_id)
                .await?
                .map(ResolvedPath::Subscription),
            PublicPath::Client { partner, public_id } => self
                .resolve_client(partner, *public_id)
                .await?
                .map(ResolvedPath::Client),
        };

        if resolved.is_none() {
            tracing::debug!("Public path {} did not resolve", path);
        }

        Ok(resolved)
    }

    async fn client_belongs_to(&self, client_id: i32, partner_slug: &str) -> Result<bool, Error> {
        let client = ClientRepository::new(self.db)
            .get_with_partner(client_id)
            .await?;

        Ok(client.is_some_and(|(_, partner)| is_partner(partner.as_ref(), partner_slug)))
    }
}

fn is_partner(partner: Option<&partner::Model>, slug: &str) -> bool {
    partner.is_some_and(|partner| partner.slug == slug)
}
