//! Live location feed.
//!
//! Keeps the most recent location in memory and fans every update out to the
//! sockets listening on the `location` topic. Nothing here is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::{RwLock, broadcast};

use super::WebSocketManager;

/// Topic every location socket subscribes to.
pub const LOCATION_TOPIC: &str = "location";

/// A single location report from a trainee's device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationUpdate {
    pub student_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub received_at: DateTime<Utc>,
}

/// Last-value cache plus broadcast fan-out for [`LocationUpdate`]s.
#[derive(Clone, Default)]
pub struct LocationFeed {
    ws: WebSocketManager,
    latest: Arc<RwLock<Option<LocationUpdate>>>,
}

impl LocationFeed {
    pub fn new(ws: WebSocketManager) -> Self {
        Self {
            ws,
            latest: Arc::default(),
        }
    }

    /// Overwrites the cached location and pushes it to every connected listener.
    ///
    /// The cache stays write-locked until the broadcast is sent, so listeners see
    /// updates in cache order and the last one they receive matches
    /// [`LocationFeed::snapshot`].
    pub async fn publish(&self, update: LocationUpdate) {
        let json = match serde_json::to_string(&update) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Failed to serialize location update: {e}");
                return;
            }
        };

        let mut latest = self.latest.write().await;
        *latest = Some(update);
        self.ws.broadcast(LOCATION_TOPIC, json).await;
    }

    /// The most recent location, if any update has been received since startup.
    pub async fn snapshot(&self) -> Option<LocationUpdate> {
        self.latest.read().await.clone()
    }

    /// Registers a new listener on the location topic.
    pub async fn subscribe(&self) -> broadcast::Receiver<String> {
        self.ws.subscribe(LOCATION_TOPIC).await
    }
}
