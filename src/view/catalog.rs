//! Catalog list view-models.

use serde::Serialize;

use crate::domain::{AmenitySet, Room};

use super::labels;

/// Image shown on a card when a room has no photos.
pub const PLACEHOLDER_IMAGE: &str = "/img/room-placeholder.svg";

/// Text of the zero-result state.
pub const EMPTY_STATE_LABEL: &str = "По вашему запросу ничего не найдено";

/// Rendered catalog page: a count line plus either summary cards or
/// the empty-state indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView {
    pub count_label: String,
    pub body: CatalogBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CatalogBody {
    Cards(Vec<RoomCard>),
    Empty,
}

/// Summary card for one room.
///
/// `id` is the target of both the "book" and "view details" actions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomCard {
    pub id: String,
    pub name: String,
    pub type_label: String,
    pub price_label: String,
    pub image_url: String,
    pub features: AmenitySet,
    pub area_label: String,
    pub capacity_label: String,
}

/// Render the current working set.
///
/// Pure function: same input, same view. `lang` is the session language
/// names are resolved in.
pub fn render(rooms: &[Room], lang: &str) -> CatalogView {
    let count_label = format!("Найдено номеров: {}", rooms.len());
    let body = if rooms.is_empty() {
        CatalogBody::Empty
    } else {
        CatalogBody::Cards(rooms.iter().map(|room| card(room, lang)).collect())
    };
    CatalogView { count_label, body }
}

fn card(room: &Room, lang: &str) -> RoomCard {
    let image_url = room
        .primary_photo()
        .map(|photo| {
            photo
                .thumbnail_url
                .clone()
                .unwrap_or_else(|| photo.url.clone())
        })
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    RoomCard {
        id: room.id.clone(),
        name: room.display_name(lang),
        type_label: room.room_type.label().to_string(),
        price_label: labels::price_label(room.base_price),
        image_url,
        features: room.amenities,
        area_label: labels::area_label(room.area_sqm),
        capacity_label: labels::capacity_label(room.capacity),
    }
}
