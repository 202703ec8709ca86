pub mod models;
pub mod reconcile;
pub mod test_utils;
pub mod views;

use migration::Migrator;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use std::path::Path;
use util::config::AppConfig;

/// Opens the configured database and applies any pending migrations.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    let url = {
        let cfg = AppConfig::global();
        // SQLite won't create intermediate dirs.
        if cfg.postgres.is_none() && !cfg.database_path.starts_with("sqlite:") {
            if let Some(parent) = Path::new(&cfg.database_path).parent() {
                let _ = std::fs::create_dir_all(parent);
            }
        }
        cfg.database_url()
    };

    let db = Database::connect(&url).await?;
    Migrator::up(&db, None).await?;
    tracing::info!(backend = ?db.get_database_backend(), "Database ready");
    Ok(db)
}
