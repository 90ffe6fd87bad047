//! Collectible sticker definitions

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::value_objects::Rarity;

/// Which sticker series an item belongs to.
///
/// Carried explicitly on every id so bonus-series membership is a field test,
/// not a numeric-range convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionTag {
    Main,
    Bonus,
}

impl fmt::Display for CollectionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CollectionTag::Main => "main",
            CollectionTag::Bonus => "bonus",
        };
        write!(f, "{name}")
    }
}

/// Identifier of a collectible sticker: series tag plus slot number within
/// the series (1-based).
///
/// Serialized as `"main#42"` so it can key JSON maps in persisted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId {
    pub collection: CollectionTag,
    pub number: u32,
}

impl ItemId {
    pub fn main(number: u32) -> Self {
        Self {
            collection: CollectionTag::Main,
            number,
        }
    }

    pub fn bonus(number: u32) -> Self {
        Self {
            collection: CollectionTag::Bonus,
            number,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.collection, self.number)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid item id {0:?}: expected \"<series>#<number>\"")]
pub struct ParseItemIdError(String);

impl FromStr for ItemId {
    type Err = ParseItemIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, number) = s
            .split_once('#')
            .ok_or_else(|| ParseItemIdError(s.to_string()))?;
        let collection = match tag {
            "main" => CollectionTag::Main,
            "bonus" => CollectionTag::Bonus,
            _ => return Err(ParseItemIdError(s.to_string())),
        };
        let number = number
            .parse()
            .map_err(|_| ParseItemIdError(s.to_string()))?;
        Ok(Self { collection, number })
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// A sticker definition in the catalog. Immutable once generated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollectibleItem {
    pub id: ItemId,
    pub rarity: Rarity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_round_trips_through_string_form() {
        let id = ItemId::bonus(7);
        let parsed: ItemId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn item_id_rejects_malformed_strings() {
        assert!("main".parse::<ItemId>().is_err());
        assert!("gold#3".parse::<ItemId>().is_err());
        assert!("main#x".parse::<ItemId>().is_err());
    }

    #[test]
    fn item_id_keys_json_maps() {
        let mut map = std::collections::HashMap::new();
        map.insert(ItemId::main(3), 2u32);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"main#3":2}"#);
        let back: std::collections::HashMap<ItemId, u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
