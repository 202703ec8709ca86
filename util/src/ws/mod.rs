pub mod location;
pub mod manager;

pub use location::{LOCATION_TOPIC, LocationFeed, LocationUpdate};
pub use manager::WebSocketManager;
