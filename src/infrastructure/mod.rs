//! Infrastructure layer: wire DTOs and concrete room providers.

pub mod dto;
pub mod provider;

pub use provider::{FixedRoomProvider, HttpRoomProvider};
