//! Filter and sort pipeline over the room collection.
//!
//! Criteria are ephemeral: the UI rebuilds a [`FilterCriteria`] from its
//! control state on every filter action and the working set is recomputed
//! in full from the master set. All predicates are independent AND
//! conditions, so their application order does not affect the result.

use std::cmp::Ordering;

use super::room::{AmenitySet, Room, RoomType};

/// Capacity filter value meaning "this many guests or more".
///
/// The capacity selector tops out at "5+"; every smaller value is an
/// exact match.
pub const CAPACITY_OPEN_END: u32 = 5;

/// Sort strategy for the working set.
///
/// Each ordering variant supplies a pure comparator; [`SortOrder::Popular`]
/// keeps the master-set order. Adding a new order is one variant plus one
/// comparator arm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Popular,
    PriceAsc,
    PriceDesc,
    AreaDesc,
    RatingDesc,
}

impl SortOrder {
    /// Parse a wire/UI code (`"PRICE_ASC"`, ...).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "POPULAR" => Some(Self::Popular),
            "PRICE_ASC" => Some(Self::PriceAsc),
            "PRICE_DESC" => Some(Self::PriceDesc),
            "AREA_DESC" => Some(Self::AreaDesc),
            "RATING_DESC" => Some(Self::RatingDesc),
            _ => None,
        }
    }

    /// Comparator lookup; `None` means "keep current order".
    ///
    /// Numeric fields were normalized at load time (invalid -> 0), so
    /// invalid values sort as the lowest possible value.
    pub fn comparator(&self) -> Option<fn(&Room, &Room) -> Ordering> {
        match self {
            Self::Popular => None,
            Self::PriceAsc => Some(|a, b| a.base_price.total_cmp(&b.base_price)),
            Self::PriceDesc => Some(|a, b| b.base_price.total_cmp(&a.base_price)),
            Self::AreaDesc => Some(|a, b| b.area_sqm.total_cmp(&a.area_sqm)),
            Self::RatingDesc => Some(|a, b| b.average_rating.total_cmp(&a.average_rating)),
        }
    }
}

/// User-editable filter criteria, rebuilt from UI state on every action.
///
/// `Default` matches everything and keeps the master-set order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against the resolved room name,
    /// the room number and the type label. Empty = no text filter.
    pub search: String,
    pub room_type: Option<RoomType>,
    /// Inclusive price bounds.
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    /// Exact guest count, except [`CAPACITY_OPEN_END`] and above which
    /// mean "that many or more".
    pub capacity: Option<u32>,
    /// AND-combined amenity requirements.
    pub required: AmenitySet,
    pub sort: SortOrder,
}

impl FilterCriteria {
    /// Whether `room` passes every predicate of this criteria set.
    ///
    /// `lang` is the session language the display name is resolved in
    /// for the text search.
    pub fn matches(&self, room: &Room, lang: &str) -> bool {
        self.matches_search(room, lang)
            && self.matches_type(room)
            && self.matches_price(room)
            && self.matches_capacity(room)
            && room.amenities.satisfies(&self.required)
    }

    /// Recompute a working set from `master`: predicates, then the sort
    /// comparator. Always succeeds; the result may be empty. The sort is
    /// stable, so ties keep master-set order.
    pub fn apply(&self, master: &[Room], lang: &str) -> Vec<Room> {
        let mut working: Vec<Room> = master
            .iter()
            .filter(|room| self.matches(room, lang))
            .cloned()
            .collect();

        if let Some(compare) = self.sort.comparator() {
            working.sort_by(compare);
        }

        working
    }

    fn matches_search(&self, room: &Room, lang: &str) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        room.display_name(lang).to_lowercase().contains(&needle)
            || room.room_number.to_lowercase().contains(&needle)
            || room.room_type.label().to_lowercase().contains(&needle)
    }

    fn matches_type(&self, room: &Room) -> bool {
        match &self.room_type {
            Some(room_type) => &room.room_type == room_type,
            None => true,
        }
    }

    fn matches_price(&self, room: &Room) -> bool {
        if let Some(min) = self.price_min {
            if room.base_price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if room.base_price > max {
                return false;
            }
        }
        true
    }

    fn matches_capacity(&self, room: &Room) -> bool {
        match self.capacity {
            None => true,
            Some(wanted) if wanted >= CAPACITY_OPEN_END => room.capacity >= CAPACITY_OPEN_END,
            Some(wanted) => room.capacity == wanted,
        }
    }
}
