use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::path::Path;

/// A migrated in-memory SQLite database.
///
/// Every pooled connection would open its own empty in-memory database, so the
/// pool is pinned to one connection.
pub async fn setup_test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    migrated(opts).await
}

/// A migrated SQLite database file at `path`, served by up to `pool_size`
/// connections. Used where several connections must contend for the write lock.
pub async fn setup_file_test_db(path: &Path, pool_size: u32) -> DatabaseConnection {
    let mut opts = ConnectOptions::new(format!("sqlite://{}?mode=rwc", path.display()));
    opts.max_connections(pool_size)
        .min_connections(1)
        .sqlx_logging(false);

    migrated(opts).await
}

async fn migrated(opts: ConnectOptions) -> DatabaseConnection {
    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to test db");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}
