use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

use crate::config::DatabaseConfig;

pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.clone());

    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(config.sqlx_logging);

    Database::connect(opt).await
}

/// Create any legacy table that does not exist yet.
///
/// Existing tables are left as they are; this is for fresh development and
/// test databases, not for migrating a production schema.
pub async fn sync_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.get_schema_registry("press::entity::*").sync(db).await?;
    info!("Legacy schema synced");
    Ok(())
}

/// Connect, create missing tables and install the store-side publishing
/// logic (triggers and indexes).
pub async fn init_db(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let db = connect(config).await?;
    sync_schema(&db).await?;
    crate::seed::ensure_triggers(&db).await?;
    crate::seed::ensure_indexes(&db).await?;
    Ok(db)
}
