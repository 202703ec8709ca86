//! WebSocket handler for the `location` topic.
//!
//! A new client first receives the last known location (when there is one) and
//! then every update published through `POST /api/location`. Frames sent by the
//! client are read and dropped; the connection lives until either side closes.

use axum::{
    extract::{
        State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::IntoResponse,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use util::state::AppState;
use util::ws::LocationFeed;

/// Axum handler performing the upgrade on `GET /ws/location`.
pub async fn location_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let feed = state.location_clone();
    ws.on_upgrade(move |socket| serve_location(socket, feed))
}

async fn serve_location(socket: WebSocket, feed: LocationFeed) {
    // Subscribe before reading the snapshot so no update falls in between.
    let mut rx = feed.subscribe().await;
    let (mut sink, mut stream) = socket.split();

    if let Some(latest) = feed.snapshot().await {
        match serde_json::to_string(&latest) {
            Ok(json) => {
                if sink.send(Message::Text(json.into())).await.is_err() {
                    return;
                }
            }
            Err(e) => tracing::warn!("Failed to serialize location snapshot: {e}"),
        }
    }

    // Server → Client
    let mut forward_task = tokio::spawn(async move {
        loop {
            match rx.recv().await {
                Ok(msg) => {
                    if sink.send(Message::Text(msg.into())).await.is_err() {
                        tracing::info!("Location client disconnected");
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Location client lagging, dropped updates");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    // Client → Server: ignored until close
    let mut receive_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = stream.next().await {
            if let Message::Close(_) = msg {
                break;
            }
        }
    });

    tokio::select! {
        _ = &mut forward_task => receive_task.abort(),
        _ = &mut receive_task => forward_task.abort(),
    }
}
