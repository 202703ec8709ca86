//! Application state container shared across Axum route handlers.
//!
//! Holds the injected database connection and the live location feed. It is
//! cloned into every handler through Axum's `State<T>` extractor.

use crate::ws::{LocationFeed, WebSocketManager};
use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
///
/// This includes:
/// - A cloned, thread-safe database connection for use with SeaORM.
/// - The `LocationFeed` that caches and broadcasts the latest device location.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    location: LocationFeed,
}

impl AppState {
    /// Creates a new `AppState` with the given database connection and WebSocket manager.
    ///
    /// # Arguments
    ///
    /// * `db` - A SeaORM `DatabaseConnection`, typically cloned from the main pool.
    /// * `ws` - A `WebSocketManager` backing the location topic.
    pub fn new(db: DatabaseConnection, ws: WebSocketManager) -> Self {
        Self {
            db,
            location: LocationFeed::new(ws),
        }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns a shared reference to the location feed.
    pub fn location(&self) -> &LocationFeed {
        &self.location
    }
}

impl AppState {
    /// Returns a cloned copy of the database connection.
    ///
    /// Useful for async contexts or spawning tasks that require ownership.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }

    /// Returns a cloned handle to the location feed.
    pub fn location_clone(&self) -> LocationFeed {
        self.location.clone()
    }
}
