pub mod prelude;

pub mod candidate;
pub mod client;
pub mod listing;
pub mod partner;
pub mod subscription;
