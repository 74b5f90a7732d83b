pub use super::candidate::Entity as Candidate;
pub use super::client::Entity as Client;
pub use super::listing::Entity as Listing;
pub use super::partner::Entity as Partner;
pub use super::subscription::Entity as Subscription;
