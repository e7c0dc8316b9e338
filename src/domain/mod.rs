//! Domain layer for the room catalog.
//!
//! This module contains the normalized room model and the pure
//! filter/sort logic, independent of wire DTOs and infrastructure
//! concerns.

pub mod error;
pub mod filter;
pub mod provider;
pub mod room;

pub use error::ProviderError;
pub use filter::{FilterCriteria, SortOrder};
pub use provider::RoomProvider;
pub use room::{
    AmenitySet, Photo, Room, RoomType, Translation, DEFAULT_LANGUAGE, FALLBACK_LANGUAGE,
};
