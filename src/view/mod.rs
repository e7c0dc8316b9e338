//! Presentation view-models.
//!
//! Pure functions from domain data to the structures a UI binds to
//! widgets. No rendering technology leaks in here; the actual surface
//! (web page, terminal, ...) is an external collaborator.

pub mod catalog;
pub mod detail;
mod labels;

pub use catalog::{render, CatalogBody, CatalogView, RoomCard};
pub use detail::{BookingTarget, PhotoView, RoomDetailView};
