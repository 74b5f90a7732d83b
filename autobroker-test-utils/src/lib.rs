pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        fixtures::{
            candidate::factory as candidate_factory, listing::factory as listing_factory,
            subscription::factory as subscription_factory,
        },
        test_setup_with_broker_tables, test_setup_with_tables, TestBuilder, TestContext,
        TestError,
    };
}
