//! Room wire DTOs and their normalization into the domain model.
//!
//! The backend payload is loosely typed: numeric fields may arrive as
//! numbers, numeric strings, or be missing entirely, and every boolean
//! has its own default. All of that is resolved here, once, so the
//! domain [`Room`] downstream never re-derives defaults.
//!
//! Lenient by design: malformed price/area/rating/capacity values are
//! normalized to 0 rather than rejected, and unknown room type codes
//! pass through as raw text.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{AmenitySet, Photo, Room, RoomType, Translation};

/// One room record as sent by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomDto {
    pub id: Option<Value>,
    pub room_number: Option<String>,
    #[serde(rename = "type")]
    pub room_type: Option<String>,
    pub base_price: Option<Value>,
    pub capacity: Option<Value>,
    pub area_sqm: Option<Value>,
    pub average_rating: Option<Value>,
    pub is_active: Option<bool>,
    pub has_wifi: Option<bool>,
    pub has_tv: Option<bool>,
    pub has_minibar: Option<bool>,
    pub has_balcony: Option<bool>,
    pub has_sea_view: Option<bool>,
    pub translations: HashMap<String, TranslationDto>,
    pub photos: Vec<PhotoDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationDto {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhotoDto {
    pub url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub is_primary: Option<bool>,
    pub display_order: Option<Value>,
}

impl RoomDto {
    /// Normalize the wire record into a domain [`Room`] with every
    /// default resolved.
    pub fn into_domain(self) -> Room {
        Room {
            id: opaque_id(self.id.as_ref()),
            room_number: self.room_number.unwrap_or_default(),
            room_type: RoomType::from_code(self.room_type.as_deref().unwrap_or("STANDARD")),
            base_price: lenient_number(self.base_price.as_ref()),
            capacity: lenient_number(self.capacity.as_ref()) as u32,
            area_sqm: lenient_number(self.area_sqm.as_ref()),
            average_rating: lenient_number(self.average_rating.as_ref()),
            // absent means active; only an explicit `false` marks a room inactive
            is_active: self.is_active.unwrap_or(true),
            amenities: AmenitySet {
                wifi: self.has_wifi.unwrap_or(true),
                tv: self.has_tv.unwrap_or(true),
                minibar: self.has_minibar.unwrap_or(false),
                balcony: self.has_balcony.unwrap_or(false),
                sea_view: self.has_sea_view.unwrap_or(false),
            },
            translations: self
                .translations
                .into_iter()
                .map(|(lang, t)| {
                    (
                        lang,
                        Translation {
                            name: t.name.unwrap_or_default(),
                            description: t.description.unwrap_or_default(),
                        },
                    )
                })
                .collect(),
            photos: self.photos.into_iter().map(PhotoDto::into_domain).collect(),
        }
    }
}

impl PhotoDto {
    fn into_domain(self) -> Photo {
        Photo {
            url: self.url.unwrap_or_default(),
            thumbnail_url: self.thumbnail_url,
            is_primary: self.is_primary.unwrap_or(false),
            display_order: lenient_number(self.display_order.as_ref()) as i32,
        }
    }
}

/// The one "invalid -> 0" coercion rule used for every numeric field.
fn lenient_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Identifiers are opaque; numbers and strings on the wire both become
/// strings internally.
fn opaque_id(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_number_accepts_numbers_and_numeric_strings() {
        // テスト項目: 数値・数値文字列はパースされ、不正値・欠損は 0 になる
        assert_eq!(lenient_number(Some(&Value::from(100))), 100.0);
        assert_eq!(lenient_number(Some(&Value::from(99.5))), 99.5);
        assert_eq!(lenient_number(Some(&Value::from("100"))), 100.0);
        assert_eq!(lenient_number(Some(&Value::from(" 42.5 "))), 42.5);
        assert_eq!(lenient_number(Some(&Value::from("abc"))), 0.0);
        assert_eq!(lenient_number(Some(&Value::Null)), 0.0);
        assert_eq!(lenient_number(None), 0.0);
    }

    #[test]
    fn test_minimal_record_gets_all_defaults() {
        // テスト項目: 空のレコードでも全フィールドがデフォルト値で正規化される
        // given (前提条件):
        let dto: RoomDto = serde_json::from_str("{}").unwrap();

        // when (操作):
        let room = dto.into_domain();

        // then (期待する結果):
        assert_eq!(room.id, "");
        assert_eq!(room.room_number, "");
        assert_eq!(room.room_type, RoomType::Standard);
        assert_eq!(room.base_price, 0.0);
        assert_eq!(room.capacity, 0);
        assert_eq!(room.area_sqm, 0.0);
        assert_eq!(room.average_rating, 0.0);
        assert!(room.is_active);
        // hasWifi / hasTv は省略時 true、その他の設備は false
        assert!(room.amenities.wifi);
        assert!(room.amenities.tv);
        assert!(!room.amenities.minibar);
        assert!(!room.amenities.balcony);
        assert!(!room.amenities.sea_view);
        assert!(room.translations.is_empty());
        assert!(room.photos.is_empty());
    }

    #[test]
    fn test_full_record_normalization() {
        // テスト項目: camelCase のフル レコードが正しくドメインモデルになる
        // given (前提条件):
        let json = r#"{
            "id": 12,
            "roomNumber": "12B",
            "type": "DELUXE",
            "basePrice": "4500",
            "capacity": 3,
            "areaSqm": 32.5,
            "averageRating": 4.7,
            "isActive": true,
            "hasWifi": true,
            "hasTv": false,
            "hasSeaView": true,
            "translations": {
                "RU": {"name": "Делюкс", "description": "Вид на море"},
                "EN": {"name": "Deluxe"}
            },
            "photos": [
                {"url": "a.jpg", "thumbnailUrl": "a-thumb.jpg", "isPrimary": true, "displayOrder": 1},
                {"url": "b.jpg", "displayOrder": 2}
            ]
        }"#;
        let dto: RoomDto = serde_json::from_str(json).unwrap();

        // when (操作):
        let room = dto.into_domain();

        // then (期待する結果):
        assert_eq!(room.id, "12");
        assert_eq!(room.room_number, "12B");
        assert_eq!(room.room_type, RoomType::Deluxe);
        assert_eq!(room.base_price, 4500.0);
        assert_eq!(room.capacity, 3);
        assert_eq!(room.area_sqm, 32.5);
        assert!(!room.amenities.tv);
        assert!(room.amenities.sea_view);
        assert_eq!(room.translations["RU"].name, "Делюкс");
        assert_eq!(room.translations["EN"].description, "");
        assert_eq!(room.photos.len(), 2);
        assert!(room.photos[0].is_primary);
        assert_eq!(
            room.photos[0].thumbnail_url.as_deref(),
            Some("a-thumb.jpg")
        );
        assert!(!room.photos[1].is_primary);
    }

    #[test]
    fn test_unknown_type_code_is_kept() {
        // テスト項目: 未知のタイプコードは Other としてそのまま保持される
        // given (前提条件):
        let dto: RoomDto = serde_json::from_str(r#"{"type": "BUNGALOW"}"#).unwrap();

        // when (操作) / then (期待する結果):
        assert_eq!(
            dto.into_domain().room_type,
            RoomType::Other("BUNGALOW".to_string())
        );
    }

    #[test]
    fn test_string_id_is_kept_verbatim() {
        // テスト項目: 文字列 id はそのまま、数値 id は文字列化される
        let dto: RoomDto = serde_json::from_str(r#"{"id": "room-7"}"#).unwrap();
        assert_eq!(dto.into_domain().id, "room-7");

        let dto: RoomDto = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        assert_eq!(dto.into_domain().id, "7");
    }

    #[test]
    fn test_explicit_inactive_flag_survives_normalization() {
        // テスト項目: isActive: false は正規化後も保持される（除外はロード側の責務）
        // given (前提条件):
        let dto: RoomDto = serde_json::from_str(r#"{"isActive": false}"#).unwrap();

        // when (操作) / then (期待する結果):
        assert!(!dto.into_domain().is_active);
    }
}
