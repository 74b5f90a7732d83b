pub use sea_orm_migration::prelude::*;

mod m20260105_000001_partner;
mod m20260105_000002_client;
mod m20260105_000003_subscription;
mod m20260105_000004_listing;
mod m20260105_000005_candidate;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_partner::Migration),
            Box::new(m20260105_000002_client::Migration),
            Box::new(m20260105_000003_subscription::Migration),
            Box::new(m20260105_000004_listing::Migration),
            Box::new(m20260105_000005_candidate::Migration),
        ]
    }
}
