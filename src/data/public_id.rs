//! Collision-resistant public identifiers.
//!
//! Every publicly addressable entity gets a random id drawn from a range selected by the
//! entity's partition digit `d`: `[d * 10^11, d * 10^11 + 9 * 10^11)`. The leading digit makes
//! an id recognisable per entity type and the ~9 * 10^11 wide range makes enumerating ids
//! from a public URL infeasible.
//!
//! There is no reservation step. The existence check and the insert of the drawn id must run
//! on the same transaction; two concurrent allocations can still both pass the check, which
//! the size of the range makes negligible rather than impossible.

use std::ops::Range;

use rand::{rngs::StdRng, Rng, SeedableRng};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::error::{identifier::IdentifierError, Error};

/// 10^11, the offset between two partition digits.
pub const PARTITION_BASE: i64 = 100_000_000_000;

/// Number of ids available to one entity type.
pub const PARTITION_SPAN: i64 = 9 * PARTITION_BASE;

/// Draws made before giving up on an allocation.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 50;

/// An entity whose rows carry an allocated public id.
pub trait PublicIdEntity: EntityTrait {
    /// Leading digit selecting the entity's id range.
    const PARTITION_DIGIT: i64;

    /// Column holding the public id.
    fn public_id_column() -> Self::Column;
}

impl PublicIdEntity for entity::client::Entity {
    const PARTITION_DIGIT: i64 = entity::client::PUBLIC_ID_PARTITION;

    fn public_id_column() -> Self::Column {
        entity::client::Column::PublicId
    }
}

impl PublicIdEntity for entity::subscription::Entity {
    const PARTITION_DIGIT: i64 = entity::subscription::PUBLIC_ID_PARTITION;

    fn public_id_column() -> Self::Column {
        entity::subscription::Column::PublicId
    }
}

impl PublicIdEntity for entity::listing::Entity {
    const PARTITION_DIGIT: i64 = entity::listing::PUBLIC_ID_PARTITION;

    fn public_id_column() -> Self::Column {
        entity::listing::Column::PublicId
    }
}

/// Range of valid public ids for a partition digit.
pub fn partition_range(partition_digit: i64) -> Range<i64> {
    let start = partition_digit * PARTITION_BASE;
    start..start + PARTITION_SPAN
}

/// Allocates unused public ids by random draw with a bounded retry budget.
pub struct PublicIdAllocator<R = StdRng> {
    rng: R,
    max_attempts: u32,
}

impl PublicIdAllocator<StdRng> {
    /// Creates an allocator seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl Default for PublicIdAllocator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PublicIdAllocator<R> {
    /// Creates an allocator drawing from the provided random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the retry budget.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Draws a uniformly random id inside the partition, without checking storage.
    pub fn draw(&mut self, partition_digit: i64) -> i64 {
        self.rng.random_range(partition_range(partition_digit))
    }

    /// Allocates a public id not yet used by any row of `E`.
    ///
    /// # Arguments
    /// - `db` - Connection or transaction the caller will insert the new row on
    ///
    /// # Returns
    /// - `Ok(i64)` - An id inside `E`'s partition with no existing row
    /// - `Err(Error::IdentifierError(CapacityExhausted))` - Every draw collided
    /// - `Err(Error::DbErr)` - The existence check failed
    pub async fn allocate<E, C>(&mut self, db: &C) -> Result<i64, Error>
    where
        E: PublicIdEntity + Send + Sync,
        E::Model: Send + Sync,
        C: ConnectionTrait,
    {
        let entity_name = E::default().table_name().to_string();

        for attempt in 1..=self.max_attempts {
            let public_id = self.draw(E::PARTITION_DIGIT);

            let existing = E::find()
                .filter(E::public_id_column().eq(public_id))
                .count(db)
                .await?;

            if existing == 0 {
                tracing::debug!(
                    "Allocated {} public id {} on attempt {}",
                    entity_name,
                    public_id,
                    attempt
                );
                return Ok(public_id);
            }

            tracing::warn!(
                "Public id collision for {} (attempt {}/{})",
                entity_name,
                attempt,
                self.max_attempts
            );
        }

        tracing::error!(
            "Exhausted {} attempts allocating a public id for {}",
            self.max_attempts,
            entity_name
        );

        Err(IdentifierError::CapacityExhausted {
            entity: entity_name,
            attempts: self.max_attempts,
        }
        .into())
    }
}
