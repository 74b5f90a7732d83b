//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context wraps an
//! in-memory SQLite database and hands out fixture accessors for every broker entity.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Width of a public id partition, mirrors the allocator range.
const PUBLIC_ID_PARTITION_WIDTH: i64 = 100_000_000_000;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_broker_tables().build().await?;
///
/// let (client, subscription) = test.subscription().insert_mock_subscription().await?;
/// let listing = test.listing().insert_listing(client.id).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,

    /// Counter used to hand out unique public ids to fixtures
    pub(crate) public_id_sequence: i64,
    /// Counter used to hand out unique partner slugs to fixtures
    pub(crate) slug_sequence: u32,
}

impl TestContext {
    /// Create a new test context backed by a fresh in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context without any tables
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            public_id_sequence: 0,
            slug_sequence: 0,
        })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Next fixture public id inside the given partition.
    ///
    /// Fixture ids count up from the bottom of the partition so they never collide with
    /// each other; they still satisfy the allocator's range contract.
    pub(crate) fn next_public_id(&mut self, partition: i64) -> i64 {
        self.public_id_sequence += 1;
        partition * PUBLIC_ID_PARTITION_WIDTH + self.public_id_sequence
    }

    pub(crate) fn next_slug(&mut self) -> String {
        self.slug_sequence += 1;
        format!("partner-{}", self.slug_sequence)
    }
}
