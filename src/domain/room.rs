//! Core domain model for the room catalog.
//!
//! A `Room` is fully normalized: every optional or loosely-typed wire
//! field has been resolved to a concrete value by the DTO layer before
//! it reaches this type, so filter/sort/render logic never re-derives
//! defaults. Rooms are never mutated after load; every derived view is
//! computed fresh from the immutable collection.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Language the catalog resolves names in by default.
pub const DEFAULT_LANGUAGE: &str = "RU";

/// Language tried when the requested one has no translation.
pub const FALLBACK_LANGUAGE: &str = "EN";

/// Room category as advertised by the backend.
///
/// Unknown wire codes are kept verbatim in `Other` and shown as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    Apartment,
    Penthouse,
    Other(String),
}

impl RoomType {
    /// Parse a wire code (`"STANDARD"`, `"DELUXE"`, ...).
    pub fn from_code(code: &str) -> Self {
        match code {
            "STANDARD" => Self::Standard,
            "DELUXE" => Self::Deluxe,
            "SUITE" => Self::Suite,
            "APARTMENT" => Self::Apartment,
            "PENTHOUSE" => Self::Penthouse,
            other => Self::Other(other.to_string()),
        }
    }

    /// The wire code this type came from.
    pub fn code(&self) -> &str {
        match self {
            Self::Standard => "STANDARD",
            Self::Deluxe => "DELUXE",
            Self::Suite => "SUITE",
            Self::Apartment => "APARTMENT",
            Self::Penthouse => "PENTHOUSE",
            Self::Other(raw) => raw,
        }
    }

    /// Display label shown on cards and in the detail view.
    pub fn label(&self) -> &str {
        match self {
            Self::Standard => "Стандарт",
            Self::Deluxe => "Делюкс",
            Self::Suite => "Люкс",
            Self::Apartment => "Апартаменты",
            Self::Penthouse => "Пентхаус",
            Self::Other(raw) => raw,
        }
    }
}

/// Boolean amenity flags of a room, also used as an AND-combined
/// requirement set in filter criteria.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmenitySet {
    pub wifi: bool,
    pub tv: bool,
    pub minibar: bool,
    pub balcony: bool,
    pub sea_view: bool,
}

impl AmenitySet {
    /// Whether this set provides every amenity checked in `required`.
    pub fn satisfies(&self, required: &AmenitySet) -> bool {
        (!required.wifi || self.wifi)
            && (!required.tv || self.tv)
            && (!required.minibar || self.minibar)
            && (!required.balcony || self.balcony)
            && (!required.sea_view || self.sea_view)
    }
}

/// Localized name/description pair for one language code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    pub name: String,
    pub description: String,
}

/// A single photo of a room.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Photo {
    pub url: String,
    pub thumbnail_url: Option<String>,
    pub is_primary: bool,
    pub display_order: i32,
}

/// A room in the catalog, normalized and read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    /// Opaque stable identifier, used for detail lookup and navigation.
    pub id: String,
    /// Display label of the room ("12B").
    pub room_number: String,
    pub room_type: RoomType,
    /// Price per night; malformed wire values were normalized to 0.
    pub base_price: f64,
    /// Guest count; 0 when the backend omitted it.
    pub capacity: u32,
    pub area_sqm: f64,
    pub average_rating: f64,
    /// Rooms with `false` are dropped from the working set at load time.
    pub is_active: bool,
    pub amenities: AmenitySet,
    /// Language code -> translation; keys are case-sensitive ("RU", "EN").
    pub translations: HashMap<String, Translation>,
    pub photos: Vec<Photo>,
}

impl Room {
    /// Translation for `lang`, falling back to [`FALLBACK_LANGUAGE`].
    pub fn translation(&self, lang: &str) -> Option<&Translation> {
        self.translations
            .get(lang)
            .or_else(|| self.translations.get(FALLBACK_LANGUAGE))
    }

    /// Resolve the display name of the room.
    ///
    /// Fixed fallback order: non-empty name in `lang`, then in
    /// [`FALLBACK_LANGUAGE`], then a synthesized `"Номер {room_number}"`.
    pub fn display_name(&self, lang: &str) -> String {
        for key in [lang, FALLBACK_LANGUAGE] {
            if let Some(t) = self.translations.get(key) {
                if !t.name.is_empty() {
                    return t.name.clone();
                }
            }
        }
        format!("Номер {}", self.room_number)
    }

    /// Resolve the description with the same fallback order as the
    /// name; empty string when no translation carries one.
    pub fn description(&self, lang: &str) -> String {
        for key in [lang, FALLBACK_LANGUAGE] {
            if let Some(t) = self.translations.get(key) {
                if !t.description.is_empty() {
                    return t.description.clone();
                }
            }
        }
        String::new()
    }

    /// The photo marked primary, or the first one when none is marked.
    pub fn primary_photo(&self) -> Option<&Photo> {
        self.photos
            .iter()
            .find(|p| p.is_primary)
            .or_else(|| self.photos.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_with_translations(pairs: &[(&str, &str)], room_number: &str) -> Room {
        let translations = pairs
            .iter()
            .map(|(lang, name)| {
                (
                    lang.to_string(),
                    Translation {
                        name: name.to_string(),
                        description: String::new(),
                    },
                )
            })
            .collect();
        Room {
            id: "r1".to_string(),
            room_number: room_number.to_string(),
            room_type: RoomType::Standard,
            base_price: 0.0,
            capacity: 0,
            area_sqm: 0.0,
            average_rating: 0.0,
            is_active: true,
            amenities: AmenitySet::default(),
            translations,
            photos: Vec::new(),
        }
    }

    #[test]
    fn test_display_name_prefers_requested_language() {
        // テスト項目: 要求された言語の名前が最優先で返される
        // given (前提条件):
        let room = room_with_translations(&[("RU", "Стандарт у моря"), ("EN", "Sea Standard")], "12B");

        // when (操作) / then (期待する結果):
        assert_eq!(room.display_name("RU"), "Стандарт у моря");
        assert_eq!(room.display_name("EN"), "Sea Standard");
    }

    #[test]
    fn test_display_name_falls_back_to_english() {
        // テスト項目: 要求言語の翻訳が無い場合は EN にフォールバックする
        // given (前提条件):
        let room = room_with_translations(&[("EN", "Ocean View")], "12B");

        // when (操作) / then (期待する結果):
        assert_eq!(room.display_name("RU"), "Ocean View");
    }

    #[test]
    fn test_display_name_synthesized_from_room_number() {
        // テスト項目: 翻訳が全く無い場合は部屋番号から名前を合成する
        // given (前提条件):
        let room = room_with_translations(&[], "12B");

        // when (操作) / then (期待する結果):
        assert_eq!(room.display_name("RU"), "Номер 12B");
    }

    #[test]
    fn test_display_name_empty_room_number() {
        // テスト項目: 部屋番号も無い場合は接頭辞のみの名前になる
        // given (前提条件):
        let room = room_with_translations(&[], "");

        // when (操作) / then (期待する結果):
        assert_eq!(room.display_name("RU"), "Номер ");
    }

    #[test]
    fn test_display_name_skips_empty_name_entry() {
        // テスト項目: 名前が空文字の翻訳エントリはフォールバック対象外
        // given (前提条件):
        let room = room_with_translations(&[("RU", ""), ("EN", "Ocean View")], "12B");

        // when (操作) / then (期待する結果):
        assert_eq!(room.display_name("RU"), "Ocean View");
    }

    #[test]
    fn test_translation_keys_are_case_sensitive() {
        // テスト項目: 言語コードは大文字小文字を区別する（"en" は "EN" と別キー）
        // given (前提条件):
        let room = room_with_translations(&[("en", "lowercase entry")], "7");

        // when (操作) / then (期待する結果):
        assert_eq!(room.display_name("EN"), "Номер 7");
    }

    #[test]
    fn test_room_type_from_known_code() {
        // テスト項目: 既知のタイプコードが列挙値に解決される
        assert_eq!(RoomType::from_code("SUITE"), RoomType::Suite);
        assert_eq!(RoomType::from_code("PENTHOUSE"), RoomType::Penthouse);
    }

    #[test]
    fn test_room_type_unknown_code_passes_through() {
        // テスト項目: 未知のタイプコードはそのまま表示ラベルになる
        // given (前提条件):
        let room_type = RoomType::from_code("BUNGALOW");

        // then (期待する結果):
        assert_eq!(room_type, RoomType::Other("BUNGALOW".to_string()));
        assert_eq!(room_type.label(), "BUNGALOW");
        assert_eq!(room_type.code(), "BUNGALOW");
    }

    #[test]
    fn test_amenity_set_satisfies() {
        // テスト項目: チェックされた設備を全て持つ場合のみ条件を満たす
        // given (前提条件):
        let room_amenities = AmenitySet {
            wifi: true,
            tv: true,
            minibar: false,
            balcony: true,
            sea_view: false,
        };

        // then (期待する結果):
        assert!(room_amenities.satisfies(&AmenitySet::default()));
        assert!(room_amenities.satisfies(&AmenitySet {
            wifi: true,
            balcony: true,
            ..AmenitySet::default()
        }));
        assert!(!room_amenities.satisfies(&AmenitySet {
            wifi: true,
            minibar: true,
            ..AmenitySet::default()
        }));
    }

    #[test]
    fn test_primary_photo_selection() {
        // テスト項目: isPrimary の写真が優先され、無ければ先頭の写真が返る
        // given (前提条件):
        let mut room = room_with_translations(&[], "1");
        room.photos = vec![
            Photo {
                url: "a.jpg".to_string(),
                ..Photo::default()
            },
            Photo {
                url: "b.jpg".to_string(),
                is_primary: true,
                ..Photo::default()
            },
        ];

        // then (期待する結果):
        assert_eq!(room.primary_photo().map(|p| p.url.as_str()), Some("b.jpg"));

        room.photos[1].is_primary = false;
        assert_eq!(room.primary_photo().map(|p| p.url.as_str()), Some("a.jpg"));

        room.photos.clear();
        assert!(room.primary_photo().is_none());
    }
}
