//! Place category registry.
//!
//! The catalog knows exactly sixteen categories. Each one has a numeric id
//! (what the backend stores), a string key (what older payloads carry) and a
//! Russian display label. All three live on the `PlaceCategory` enum so the
//! tables cannot drift apart; the `const` block at the bottom of the type
//! rejects a broken registry at compile time.
//!
//! On the wire a category is written as `{"id": 3, "title": "museum"}`. For
//! backward compatibility it is also accepted as the bare key `"museum"`; both
//! shapes go through `CategoryRepr` and are normalized on ingestion.

use serde::{Deserialize, Serialize};

use crate::model::error::ModelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CategoryRepr", into = "CategoryWire")]
#[repr(u32)]
pub enum PlaceCategory {
    Cathedral = 1,
    Church = 2,
    Museum = 3,
    Theatre = 4,
    Park = 5,
    Garden = 6,
    Palace = 7,
    Bridge = 8,
    Monument = 9,
    Embankment = 10,
    Viewpoint = 11,
    Street = 12,
    Cafe = 13,
    Restaurant = 14,
    Bar = 15,
    Other = 16,
}

impl PlaceCategory {
    /// Every category in registry order. Choice controls are populated from this.
    pub const ALL: [PlaceCategory; 16] = [
        PlaceCategory::Cathedral,
        PlaceCategory::Church,
        PlaceCategory::Museum,
        PlaceCategory::Theatre,
        PlaceCategory::Park,
        PlaceCategory::Garden,
        PlaceCategory::Palace,
        PlaceCategory::Bridge,
        PlaceCategory::Monument,
        PlaceCategory::Embankment,
        PlaceCategory::Viewpoint,
        PlaceCategory::Street,
        PlaceCategory::Cafe,
        PlaceCategory::Restaurant,
        PlaceCategory::Bar,
        PlaceCategory::Other,
    ];

    pub const fn id(self) -> u32 {
        self as u32
    }

    pub const fn key(self) -> &'static str {
        match self {
            PlaceCategory::Cathedral => "cathedral",
            PlaceCategory::Church => "church",
            PlaceCategory::Museum => "museum",
            PlaceCategory::Theatre => "theatre",
            PlaceCategory::Park => "park",
            PlaceCategory::Garden => "garden",
            PlaceCategory::Palace => "palace",
            PlaceCategory::Bridge => "bridge",
            PlaceCategory::Monument => "monument",
            PlaceCategory::Embankment => "embankment",
            PlaceCategory::Viewpoint => "viewpoint",
            PlaceCategory::Street => "street",
            PlaceCategory::Cafe => "cafe",
            PlaceCategory::Restaurant => "restaurant",
            PlaceCategory::Bar => "bar",
            PlaceCategory::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            PlaceCategory::Cathedral => "Собор",
            PlaceCategory::Church => "Храм",
            PlaceCategory::Museum => "Музей",
            PlaceCategory::Theatre => "Театр",
            PlaceCategory::Park => "Парк",
            PlaceCategory::Garden => "Сад",
            PlaceCategory::Palace => "Дворец",
            PlaceCategory::Bridge => "Мост",
            PlaceCategory::Monument => "Памятник",
            PlaceCategory::Embankment => "Набережная",
            PlaceCategory::Viewpoint => "Смотровая площадка",
            PlaceCategory::Street => "Улица / проспект",
            PlaceCategory::Cafe => "Кафе",
            PlaceCategory::Restaurant => "Ресторан",
            PlaceCategory::Bar => "Бар",
            PlaceCategory::Other => "Другое",
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|category| category.id() == id)
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|category| category.key() == key)
    }
}

impl Default for PlaceCategory {
    /// New drafts start on the first registry entry.
    fn default() -> Self {
        Self::ALL[0]
    }
}

// Registry integrity: ids follow declaration order 1..=16 and every label is set.
const _: () = {
    let mut index = 0;
    while index < PlaceCategory::ALL.len() {
        let category = PlaceCategory::ALL[index];
        assert!(category.id() as usize == index + 1);
        assert!(!category.key().is_empty());
        assert!(!category.label().is_empty());
        index += 1;
    }
};

pub fn key_for_id(id: u32) -> Option<&'static str> {
    PlaceCategory::from_id(id).map(PlaceCategory::key)
}

pub fn id_for_key(key: &str) -> Option<u32> {
    PlaceCategory::from_key(key).map(PlaceCategory::id)
}

pub fn label_for_key(key: &str) -> Option<&'static str> {
    PlaceCategory::from_key(key).map(PlaceCategory::label)
}

/// Keys in registry order, for `<select>` options.
pub fn option_keys() -> impl Iterator<Item = &'static str> {
    PlaceCategory::ALL.iter().map(|category| category.key())
}

/// Any shape a category may arrive in.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CategoryRepr {
    Structured {
        #[serde(default)]
        id: Option<u32>,
        #[serde(default)]
        title: Option<String>,
    },
    Key(String),
}

impl TryFrom<CategoryRepr> for PlaceCategory {
    type Error = ModelError;

    /// Structured input is resolved by key first and by id only when the key
    /// is missing or unknown.
    fn try_from(repr: CategoryRepr) -> Result<Self, Self::Error> {
        match repr {
            CategoryRepr::Key(key) => {
                PlaceCategory::from_key(&key).ok_or(ModelError::UnknownCategory(key))
            }
            CategoryRepr::Structured { id, title } => title
                .as_deref()
                .and_then(PlaceCategory::from_key)
                .or_else(|| id.and_then(PlaceCategory::from_id))
                .ok_or_else(|| {
                    ModelError::UnknownCategory(match (title, id) {
                        (Some(title), _) => title,
                        (None, Some(id)) => id.to_string(),
                        (None, None) => String::new(),
                    })
                }),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryWire {
    pub id: u32,
    pub title: &'static str,
}

impl From<PlaceCategory> for CategoryWire {
    fn from(category: PlaceCategory) -> Self {
        CategoryWire {
            id: category.id(),
            title: category.key(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn id_to_key_to_id_round_trips() {
        for id in 1..=16 {
            let key = key_for_id(id).unwrap();
            assert_eq!(id_for_key(key), Some(id));
        }
    }

    #[test]
    fn key_to_id_to_key_round_trips() {
        for key in option_keys() {
            let id = id_for_key(key).unwrap();
            assert_eq!(key_for_id(id), Some(key));
        }
    }

    #[test]
    fn registry_has_sixteen_distinct_keys() {
        let keys: Vec<_> = option_keys().collect();
        let distinct: HashSet<_> = keys.iter().collect();
        assert_eq!(keys.len(), 16);
        assert_eq!(distinct.len(), 16);
        assert_eq!(keys[0], "cathedral");
        assert_eq!(keys[15], "other");
    }

    #[test]
    fn labelled_keys_match_registry_keys() {
        let labelled: HashSet<_> = option_keys()
            .filter(|key| label_for_key(key).is_some_and(|label| !label.is_empty()))
            .collect();
        let registry: HashSet<_> = option_keys().collect();
        assert_eq!(labelled, registry);
    }

    #[test]
    fn unknown_lookups_are_none() {
        assert_eq!(key_for_id(0), None);
        assert_eq!(key_for_id(17), None);
        assert_eq!(id_for_key("casino"), None);
        assert_eq!(label_for_key(""), None);
    }

    #[test]
    fn default_is_first_entry() {
        assert_eq!(PlaceCategory::default(), PlaceCategory::Cathedral);
    }

    #[test]
    fn serializes_as_structured_object() {
        let json = serde_json::to_value(PlaceCategory::Museum).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 3, "title": "museum" }));
    }

    #[test]
    fn accepts_bare_key() {
        let category: PlaceCategory = serde_json::from_str("\"viewpoint\"").unwrap();
        assert_eq!(category, PlaceCategory::Viewpoint);
        assert_eq!(category.label(), "Смотровая площадка");
    }

    #[test]
    fn structured_prefers_key_over_id() {
        let category: PlaceCategory =
            serde_json::from_value(serde_json::json!({ "id": 1, "title": "bar" })).unwrap();
        assert_eq!(category, PlaceCategory::Bar);

        let by_id: PlaceCategory =
            serde_json::from_value(serde_json::json!({ "id": 8, "title": "ferry" })).unwrap();
        assert_eq!(by_id, PlaceCategory::Bridge);
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(serde_json::from_str::<PlaceCategory>("\"casino\"").is_err());
        assert!(
            serde_json::from_value::<PlaceCategory>(serde_json::json!({ "id": 99 })).is_err()
        );
    }
}
