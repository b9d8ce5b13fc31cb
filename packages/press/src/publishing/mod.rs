//! Publishing into the legacy schema.

pub mod module;
pub mod rewrite;

pub use module::{CONTENT_MEDIA_TYPE, PORTAL_TYPE, PublishedPage, publish_legacy_page};
pub use rewrite::{replace_id_and_version, rewrite_identity};
