pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod publishing;
pub mod seed;

pub use error::{PublishError, RewriteError};
pub use publishing::{PublishedPage, publish_legacy_page};
