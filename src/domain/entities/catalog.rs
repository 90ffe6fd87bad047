//! The fixed sticker catalog and its page-based generation rules

use std::collections::HashMap;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::domain::entities::collectible::{CollectibleItem, CollectionTag, ItemId};
use crate::domain::value_objects::Rarity;

/// Page/slot layout that fixes the rarity of every slot in a series.
///
/// Within a page (slots 0-based): slots in `rare_slots` are rare, slots in
/// `epic_slots` are epic, the last slot of every `legendary_page_interval`-th
/// page is legendary, everything else is common. The legendary rule wins over
/// the other two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogLayout {
    pub pages: u32,
    pub page_size: u32,
    pub rare_slots: Range<u32>,
    pub epic_slots: Vec<u32>,
    /// Every n-th page ends with a legendary slot; 0 disables legendaries.
    pub legendary_page_interval: u32,
}

impl CatalogLayout {
    pub fn size(&self) -> u32 {
        self.pages * self.page_size
    }

    /// Rarity of a slot, a pure function of its position.
    fn rarity_of_slot(&self, page: u32, slot: u32) -> Rarity {
        if self.legendary_page_interval > 0
            && (page + 1) % self.legendary_page_interval == 0
            && slot + 1 == self.page_size
        {
            return Rarity::Legendary;
        }
        if self.epic_slots.contains(&slot) {
            return Rarity::Epic;
        }
        if self.rare_slots.contains(&slot) {
            return Rarity::Rare;
        }
        Rarity::Common
    }
}

/// The fixed universe of collectible stickers across every series.
///
/// Generation is deterministic: the same layouts always yield the same
/// rarity per slot, so rarity counts are known in advance.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CollectibleItem>,
    rarities: HashMap<ItemId, Rarity>,
    tiers: HashMap<(CollectionTag, Rarity), Vec<ItemId>>,
}

impl Catalog {
    pub fn generate(main: &CatalogLayout, bonus: &CatalogLayout) -> Self {
        let mut items = Vec::with_capacity((main.size() + bonus.size()) as usize);
        Self::fill(&mut items, CollectionTag::Main, main);
        Self::fill(&mut items, CollectionTag::Bonus, bonus);

        let mut rarities = HashMap::with_capacity(items.len());
        let mut tiers: HashMap<(CollectionTag, Rarity), Vec<ItemId>> = HashMap::new();
        for item in &items {
            rarities.insert(item.id, item.rarity);
            tiers
                .entry((item.id.collection, item.rarity))
                .or_default()
                .push(item.id);
        }
        Self {
            items,
            rarities,
            tiers,
        }
    }

    fn fill(items: &mut Vec<CollectibleItem>, collection: CollectionTag, layout: &CatalogLayout) {
        for page in 0..layout.pages {
            for slot in 0..layout.page_size {
                let number = page * layout.page_size + slot + 1;
                items.push(CollectibleItem {
                    id: ItemId { collection, number },
                    rarity: layout.rarity_of_slot(page, slot),
                });
            }
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[CollectibleItem] {
        &self.items
    }

    pub fn rarity_of(&self, id: ItemId) -> Option<Rarity> {
        self.rarities.get(&id).copied()
    }

    /// Item ids of one rarity tier within one series. Empty when the layout
    /// has no such slot.
    pub fn tier(&self, collection: CollectionTag, rarity: Rarity) -> &[ItemId] {
        self.tiers
            .get(&(collection, rarity))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> CatalogLayout {
        CatalogLayout {
            pages: 3,
            page_size: 6,
            rare_slots: 3..5,
            epic_slots: vec![5],
            legendary_page_interval: 3,
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let bonus = layout();
        let a = Catalog::generate(&layout(), &bonus);
        let b = Catalog::generate(&layout(), &bonus);
        assert_eq!(a.items(), b.items());
    }

    #[test]
    fn slot_rules_place_rarities() {
        let catalog = Catalog::generate(&layout(), &layout());
        // 3 pages x 6 slots per series.
        assert_eq!(catalog.len(), 36);
        // Page 3 (the only legendary page) ends in a legendary.
        assert_eq!(catalog.rarity_of(ItemId::main(18)), Some(Rarity::Legendary));
        // The same slot on other pages stays epic.
        assert_eq!(catalog.rarity_of(ItemId::main(6)), Some(Rarity::Epic));
        assert_eq!(catalog.rarity_of(ItemId::main(12)), Some(Rarity::Epic));
        // Rare band and commons.
        assert_eq!(catalog.rarity_of(ItemId::main(4)), Some(Rarity::Rare));
        assert_eq!(catalog.rarity_of(ItemId::main(1)), Some(Rarity::Common));
    }

    #[test]
    fn tier_counts_match_layout() {
        let catalog = Catalog::generate(&layout(), &layout());
        assert_eq!(catalog.tier(CollectionTag::Main, Rarity::Legendary).len(), 1);
        assert_eq!(catalog.tier(CollectionTag::Main, Rarity::Epic).len(), 2);
        assert_eq!(catalog.tier(CollectionTag::Main, Rarity::Rare).len(), 6);
        assert_eq!(catalog.tier(CollectionTag::Main, Rarity::Common).len(), 9);
        // The bonus series is indexed separately.
        assert_eq!(catalog.tier(CollectionTag::Bonus, Rarity::Legendary).len(), 1);
    }

    #[test]
    fn unknown_items_have_no_rarity() {
        let catalog = Catalog::generate(&layout(), &layout());
        assert_eq!(catalog.rarity_of(ItemId::main(999)), None);
    }
}
