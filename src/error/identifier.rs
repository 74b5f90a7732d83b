use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdentifierError {
    /// Every draw in the retry budget collided with an existing row.
    ///
    /// Fatal to the creation that requested the id; the allocator never retries past its budget.
    #[error("No free public id found for {entity} after {attempts} attempts")]
    CapacityExhausted { entity: String, attempts: u32 },
}
