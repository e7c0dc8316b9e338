//! Domain layer error definitions.

use thiserror::Error;

/// Errors raised by a room provider while fetching the catalog.
///
/// Every variant carries the single user-facing message the UI is
/// expected to show as a notification; `Display` is that message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider answered with a non-success HTTP status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The provider could not be reached at all.
    #[error("room provider unreachable: {message}")]
    Transport { message: String },

    /// The provider answered successfully but the body was not a
    /// valid room collection.
    #[error("room provider returned an unreadable response: {message}")]
    Decode { message: String },
}
