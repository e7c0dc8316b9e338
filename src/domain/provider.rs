//! Room provider abstraction.
//!
//! The domain defines the trait; concrete implementations live in the
//! infrastructure layer (dependency inversion). The catalog controller
//! depends only on this trait, which is what the tests mock.

use async_trait::async_trait;

use super::{error::ProviderError, room::Room};

/// Source of the raw room collection.
///
/// Implementations return rooms already normalized into domain [`Room`]
/// records; the active/inactive cut is the engine's job, so inactive
/// rooms are still part of the result.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomProvider: Send + Sync {
    /// Fetch the complete room collection.
    ///
    /// A provider-side "no content" answer is an empty collection, not
    /// an error.
    async fn fetch_rooms(&self) -> Result<Vec<Room>, ProviderError>;
}
