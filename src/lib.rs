//! Room catalog engine for the Seaview hotel booking app.
//!
//! This library owns the in-memory room collection, the composable
//! filter/sort pipeline over it, and the view-models handed to the
//! presentation surface. Room data comes from an external REST provider.

pub mod domain;
pub mod infrastructure;
pub mod logger;
pub mod usecase;
pub mod view;

// Re-export the session entry point
pub use usecase::Catalog;
