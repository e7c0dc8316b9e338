//! In-process RoomProvider over a fixed room list.
//!
//! Used by tests and by the CLI's offline fixture mode.

use async_trait::async_trait;

use crate::domain::{ProviderError, Room, RoomProvider};
use crate::infrastructure::dto::RoomDto;

/// Provider that always answers with the same room collection.
pub struct FixedRoomProvider {
    rooms: Vec<Room>,
}

impl FixedRoomProvider {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    /// Build a provider from a JSON array in the wire format, running
    /// the same normalization as the HTTP provider.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let dtos: Vec<RoomDto> = serde_json::from_str(json)?;
        Ok(Self::new(
            dtos.into_iter().map(RoomDto::into_domain).collect(),
        ))
    }
}

#[async_trait]
impl RoomProvider for FixedRoomProvider {
    async fn fetch_rooms(&self) -> Result<Vec<Room>, ProviderError> {
        Ok(self.rooms.clone())
    }
}
