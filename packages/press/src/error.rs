use common::StorageError;
use quick_xml::events::attributes::AttrError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublishError {
    /// The module or its metadata has no id. Assigning ids on first
    /// publication is not supported.
    #[error("module and metadata must both carry an id")]
    MissingId,

    #[error("{0} not found")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Content rewrite error: {0}")]
    Rewrite(#[from] RewriteError),
}

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed attribute: {0}")]
    Attr(#[from] AttrError),

    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, PublishError>;
