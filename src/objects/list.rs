use indexmap::IndexMap;
use serde::Serialize;

use super::{ObjectEntryIndex, ObjectType};

/// Objects a park needs, grouped by category. The position of an identifier
/// within its category is the entry index the park refers to it by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ObjectList {
    entries: IndexMap<ObjectType, Vec<String>>,
}

impl ObjectList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an identifier to a category, returning its entry index
    pub fn add(&mut self, object_type: ObjectType, identifier: impl Into<String>) -> ObjectEntryIndex {
        let list = self.entries.entry(object_type).or_default();
        list.push(identifier.into());
        (list.len() - 1) as ObjectEntryIndex
    }

    /// Add every identifier of `identifiers` in order
    pub fn extend<I, S>(&mut self, object_type: ObjectType, identifiers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = self.entries.entry(object_type).or_default();
        list.extend(identifiers.into_iter().map(Into::into));
    }

    pub fn get(&self, object_type: ObjectType) -> &[String] {
        self.entries.get(&object_type).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn identifier(&self, object_type: ObjectType, index: ObjectEntryIndex) -> Option<&str> {
        self.get(object_type).get(index as usize).map(|s| s.as_str())
    }

    pub fn contains(&self, object_type: ObjectType, identifier: &str) -> bool {
        self.get(object_type).iter().any(|s| s == identifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectType, &[String])> {
        self.entries.iter().map(|(t, v)| (*t, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_follow_insertion() {
        let mut list = ObjectList::new();
        assert_eq!(list.add(ObjectType::Ride, "rct1.ride.a"), 0);
        assert_eq!(list.add(ObjectType::Water, "rct2.water.wtrcyan"), 0);
        assert_eq!(list.add(ObjectType::Ride, "rct1.ride.b"), 1);
        assert_eq!(list.identifier(ObjectType::Ride, 1), Some("rct1.ride.b"));
        assert_eq!(list.len(), 3);
        assert!(list.get(ObjectType::Walls).is_empty());
    }

    #[test]
    fn test_groups_keep_first_seen_order() {
        let mut list = ObjectList::new();
        list.extend(ObjectType::TerrainSurface, ["x", "y"]);
        list.add(ObjectType::Ride, "r");
        let order: Vec<_> = list.iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec![ObjectType::TerrainSurface, ObjectType::Ride]);
    }
}
