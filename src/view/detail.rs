//! Room detail and booking view-models.

use serde::Serialize;

use crate::domain::{AmenitySet, Room};

use super::labels;

/// One gallery entry of the detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoView {
    pub url: String,
    pub thumbnail_url: Option<String>,
}

/// Detail view of a single room.
///
/// Photos are ordered by `display_order` ascending; `initial_photo`
/// indexes the primary photo in that order (or the first photo).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomDetailView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub type_label: String,
    pub capacity: u32,
    pub area_sqm: f64,
    pub price_label: String,
    /// Labels of the amenities the room actually has.
    pub amenities: Vec<String>,
    pub photos: Vec<PhotoView>,
    pub initial_photo: usize,
}

/// Minimal view-model handed to the booking flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingTarget {
    pub room_id: String,
    pub name: String,
    pub price_label: String,
}

/// Build the detail view for a room already resolved from the master set.
pub fn render(room: &Room, lang: &str) -> RoomDetailView {
    let mut ordered: Vec<&crate::domain::Photo> = room.photos.iter().collect();
    ordered.sort_by_key(|photo| photo.display_order);

    let initial_photo = ordered
        .iter()
        .position(|photo| photo.is_primary)
        .unwrap_or(0);

    RoomDetailView {
        id: room.id.clone(),
        name: room.display_name(lang),
        description: room.description(lang),
        type_label: room.room_type.label().to_string(),
        capacity: room.capacity,
        area_sqm: room.area_sqm,
        price_label: labels::price_label(room.base_price),
        amenities: amenity_labels(&room.amenities),
        photos: ordered
            .into_iter()
            .map(|photo| PhotoView {
                url: photo.url.clone(),
                thumbnail_url: photo.thumbnail_url.clone(),
            })
            .collect(),
        initial_photo,
    }
}

pub fn booking_target(room: &Room, lang: &str) -> BookingTarget {
    BookingTarget {
        room_id: room.id.clone(),
        name: room.display_name(lang),
        price_label: labels::price_label(room.base_price),
    }
}

/// Labels for the amenity flags that are set, in a fixed display order.
fn amenity_labels(amenities: &AmenitySet) -> Vec<String> {
    let all = [
        (amenities.wifi, "Wi-Fi"),
        (amenities.tv, "Телевизор"),
        (amenities.minibar, "Мини-бар"),
        (amenities.balcony, "Балкон"),
        (amenities.sea_view, "Вид на море"),
    ];
    all.iter()
        .filter(|(present, _)| *present)
        .map(|(_, label)| label.to_string())
        .collect()
}
