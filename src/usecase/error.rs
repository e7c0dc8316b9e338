//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::ProviderError;

/// Errors surfaced to the presentation layer as user notifications.
///
/// No variant is fatal: a failed load degrades to an empty catalog and
/// a failed lookup aborts the detail/booking flow, in both cases with
/// exactly one visible notification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The room provider could not deliver the collection.
    #[error("failed to load rooms: {source}")]
    Load {
        #[from]
        source: ProviderError,
    },

    /// A detail or booking flow referenced an id absent from the
    /// loaded catalog.
    #[error("room '{id}' not found in the loaded catalog")]
    RoomNotFound { id: String },
}
