//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixture rows. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_broker_tables: bool,

    // Database fixtures to insert
    partners: Vec<String>,
    clients: Vec<String>, // partner slugs to create a client under
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_broker_tables: false,
            partners: Vec::new(),
            clients: Vec::new(),
        }
    }

    /// Add every broker table to the test database.
    ///
    /// Creates Partner, Client, Subscription, Listing and Candidate in foreign key order.
    pub fn with_broker_tables(mut self) -> Self {
        self.include_broker_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use autobroker_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), autobroker_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Partner)
    ///     .with_table(Client)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a partner with the given slug during `build()`.
    pub fn with_mock_partner(mut self, slug: impl Into<String>) -> Self {
        self.partners.push(slug.into());
        self
    }

    /// Insert a client under the partner with the given slug during `build()`.
    ///
    /// The partner is created first if it was not queued with `with_mock_partner`.
    pub fn with_mock_client(mut self, partner_slug: impl Into<String>) -> Self {
        self.clients.push(partner_slug.into());
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_broker_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Partner),
                schema.create_table_from_entity(entity::prelude::Client),
                schema.create_table_from_entity(entity::prelude::Subscription),
                schema.create_table_from_entity(entity::prelude::Listing),
                schema.create_table_from_entity(entity::prelude::Candidate),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert fixtures
        for slug in self.partners {
            setup.client().insert_partner(&slug).await?;
        }

        for slug in self.clients {
            let partner = setup.client().get_or_insert_partner(&slug).await?;
            setup.client().insert_client(partner.id).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
