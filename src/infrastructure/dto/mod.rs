//! Wire DTOs for the backend REST API.

pub mod room;

pub use room::{PhotoDto, RoomDto, TranslationDto};
