use indexmap::IndexSet;
use tracing::warn;

use crate::objects::{ObjectEntryIndex, ObjectType};

/// Ordered, de-duplicated object identifiers of one category
#[derive(Debug, Clone)]
pub struct EntryList {
    object_type: ObjectType,
    max: usize,
    entries: IndexSet<String>,
}

impl EntryList {
    pub fn new(object_type: ObjectType, max: usize) -> Self {
        Self { object_type, max, entries: IndexSet::new() }
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn capacity(&self) -> usize {
        self.max
    }

    /// Index of `identifier`, appending it when new. A full list logs and
    /// returns `None` without changing.
    pub fn get_or_add(&mut self, identifier: &str) -> Option<ObjectEntryIndex> {
        if let Some(index) = self.entries.get_index_of(identifier) {
            return Some(index as ObjectEntryIndex);
        }
        if self.entries.len() >= self.max {
            warn!(
                category = ?self.object_type,
                object = identifier,
                max = self.max,
                "too many objects in category, dropping"
            );
            return None;
        }
        let (index, _) = self.entries.insert_full(identifier.to_owned());
        Some(index as ObjectEntryIndex)
    }

    pub fn index_of(&self, identifier: &str) -> Option<ObjectEntryIndex> {
        self.entries.get_index_of(identifier).map(|i| i as ObjectEntryIndex)
    }

    pub fn get(&self, index: ObjectEntryIndex) -> Option<&str> {
        self.entries.get_index(index as usize).map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Where a legacy type code points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Slot {
    #[default]
    Unset,
    /// Known code that needs no object of its own
    Ignored,
    Index(ObjectEntryIndex),
}

impl Slot {
    pub fn index(self) -> Option<ObjectEntryIndex> {
        match self {
            Slot::Index(i) => Some(i),
            _ => None,
        }
    }

    pub fn is_unset(self) -> bool {
        self == Slot::Unset
    }
}

/// Legacy type code to entry index, one slot per code
#[derive(Debug, Clone)]
pub struct TypeToEntryMap {
    slots: Vec<Slot>,
}

impl TypeToEntryMap {
    pub fn new(size: usize) -> Self {
        Self { slots: vec![Slot::Unset; size] }
    }

    pub fn get(&self, code: usize) -> Slot {
        self.slots.get(code).copied().unwrap_or(Slot::Unset)
    }

    pub fn index(&self, code: usize) -> Option<ObjectEntryIndex> {
        self.get(code).index()
    }

    pub fn is_unset(&self, code: usize) -> bool {
        self.get(code).is_unset()
    }

    /// Fill an unset slot. Slots are written once; later writes are ignored.
    pub fn set(&mut self, code: usize, slot: Slot) {
        if let Some(current) = self.slots.get_mut(code) {
            if current.is_unset() {
                *current = slot;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_add_is_idempotent() {
        let mut list = EntryList::new(ObjectType::Ride, 255);
        let a = list.get_or_add("rct1.ride.dodgems");
        let b = list.get_or_add("rct1.ride.dodgems");
        assert_eq!(a, Some(0));
        assert_eq!(a, b);
        assert_eq!(list.len(), 1);
        assert_eq!(list.get_or_add("rct1.ride.toilets"), Some(1));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_full_list_drops_new_entries() {
        let mut list = EntryList::new(ObjectType::Water, 1);
        assert_eq!(list.get_or_add("rct2.water.wtrcyan"), Some(0));
        assert_eq!(list.get_or_add("rct2.water.wtrorng"), None);
        assert_eq!(list.len(), 1);
        assert_eq!(list.get_or_add("rct2.water.wtrcyan"), Some(0));
    }

    #[test]
    fn test_map_slots_are_written_once() {
        let mut map = TypeToEntryMap::new(4);
        assert!(map.is_unset(2));
        map.set(2, Slot::Index(7));
        map.set(2, Slot::Index(9));
        assert_eq!(map.index(2), Some(7));
        map.set(3, Slot::Ignored);
        assert_eq!(map.get(3), Slot::Ignored);
        assert_eq!(map.index(3), None);
        assert_eq!(map.get(100), Slot::Unset);
    }
}
