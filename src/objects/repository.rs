use std::path::Path;

use ahash::AHashMap;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{
    LoadedObject, ObjectData, ObjectDescriptor, ObjectEntryIndex, ObjectList, ObjectManager, ObjectType,
    SpriteBounds,
};
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct Manifest {
    objects: Vec<ObjectDescriptor>,
}

#[derive(Debug, Default)]
pub struct ObjectRepository {
    known: AHashMap<String, ObjectDescriptor>,
    /// Resolve any well-formed identifier, deriving its data from the legacy tables
    accept_all: bool,
    loaded: AHashMap<ObjectType, Vec<Option<LoadedObject>>>,
}

impl ObjectRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository that knows every identifier the legacy tables can produce
    pub fn accept_all() -> Self {
        Self { accept_all: true, ..Self::default() }
    }

    pub fn from_manifest_str(json: &str) -> Result<Self> {
        let manifest: Manifest = serde_json::from_str(json)?;
        let mut repo = Self::new();
        for desc in manifest.objects {
            repo.insert(desc);
        }
        debug!(objects = repo.known.len(), "loaded object manifest");
        Ok(repo)
    }

    pub fn from_manifest_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_manifest_str(&json)
    }

    pub fn insert(&mut self, desc: ObjectDescriptor) {
        self.known.insert(desc.id.clone(), desc);
    }

    /// Load every object a park requires. Each category's table is replaced;
    /// identifiers that cannot be resolved leave an empty slot so the indices
    /// of the remaining entries stay put.
    pub fn load_objects(&mut self, list: &ObjectList) {
        self.loaded.clear();
        for (object_type, identifiers) in list.iter() {
            let slots: Vec<Option<LoadedObject>> = identifiers
                .iter()
                .map(|id| {
                    let loaded = self.load_temp_object(id);
                    if loaded.is_none() {
                        warn!(object = %id, "required object could not be loaded");
                    }
                    loaded
                })
                .collect();
            self.loaded.insert(object_type, slots);
        }
    }

    fn synthesize(&self, identifier: &str) -> Option<ObjectDescriptor> {
        let object_type = ObjectType::from_identifier(identifier)?;
        let mut desc = ObjectDescriptor::new(identifier, object_type);
        match object_type {
            ObjectType::Ride => desc.ride_type = Some(legacy_ride_type_of(identifier)? as u16),
            ObjectType::PeepAnimations => desc.sprite_bounds = Some(SpriteBounds::STANDARD),
            _ => {}
        }
        Some(desc)
    }
}

/// Ride type a ride or vehicle object was built from
fn legacy_ride_type_of(identifier: &str) -> Option<u8> {
    let from_ride = (0..rct1_tables::RIDE_TYPE_COUNT as u8)
        .find(|&t| !rct1_tables::ride_type_uses_vehicles(t) && rct1_tables::ride_type_object(t) == Some(identifier));
    from_ride.or_else(|| {
        (0..rct1_tables::VEHICLE_TYPE_COUNT as u8)
            .find(|&v| rct1_tables::vehicle_object(v) == Some(identifier))
            .and_then(rct1_tables::vehicles::vehicle_ride_type)
    })
}

impl ObjectManager for ObjectRepository {
    fn find_object(&self, identifier: &str) -> Option<ObjectDescriptor> {
        match self.known.get(identifier) {
            Some(desc) => Some(desc.clone()),
            None if self.accept_all => self.synthesize(identifier),
            None => None,
        }
    }

    fn load_temp_object(&self, identifier: &str) -> Option<LoadedObject> {
        let desc = self.find_object(identifier)?;
        let data = match desc.object_type {
            ObjectType::Ride => match desc.ride_type {
                Some(ride_type) => ObjectData::Ride { ride_type },
                None => ObjectData::None,
            },
            ObjectType::PeepAnimations => ObjectData::PeepAnimations {
                bounds: desc.sprite_bounds.unwrap_or(SpriteBounds::STANDARD),
            },
            ObjectType::ScenarioText => match desc.scenario_text {
                Some(text) => ObjectData::ScenarioText(text),
                None => ObjectData::None,
            },
            _ => ObjectData::None,
        };
        Some(LoadedObject { identifier: desc.id, object_type: desc.object_type, data })
    }

    fn get_loaded_object(&self, object_type: ObjectType, index: ObjectEntryIndex) -> Option<&LoadedObject> {
        self.loaded.get(&object_type)?.get(index as usize)?.as_ref()
    }

    fn loaded_object_index(&self, object_type: ObjectType, identifier: &str) -> Option<ObjectEntryIndex> {
        self.loaded
            .get(&object_type)?
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|o| o.identifier == identifier))
            .map(|i| i as ObjectEntryIndex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_all_derives_ride_types() {
        let repo = ObjectRepository::accept_all();
        let flat = repo.find_object("rct1.ride.merry_go_round").unwrap();
        assert_eq!(flat.ride_type, Some(rct1_tables::rides::MERRY_GO_ROUND as u16));

        let vehicle = repo.find_object("rct1.ride.wooden_rc_trains").unwrap();
        assert_eq!(vehicle.ride_type, Some(rct1_tables::rides::WOODEN_ROLLER_COASTER as u16));

        assert!(repo.find_object("not-an-identifier").is_none());
    }

    #[test]
    fn test_manifest_lookup() {
        let json = r#"{"objects": [
            {"id": "rct1.scenario_text.forest_frontiers", "type": "scenario_text",
             "scenario_text": {"name": "Forest Frontiers", "details": "Deep in the forest"}},
            {"id": "rct2.peep_animations.guest", "type": "peep_animations",
             "sprite_bounds": {"width": 10, "height_negative": 20, "height_positive": 5}}
        ]}"#;
        let repo = ObjectRepository::from_manifest_str(json).unwrap();
        assert!(repo.find_object("rct1.ride.merry_go_round").is_none());

        let text = repo.load_temp_object("rct1.scenario_text.forest_frontiers").unwrap();
        assert_eq!(text.scenario_text().unwrap().name, "Forest Frontiers");

        let anim = repo.load_temp_object("rct2.peep_animations.guest").unwrap();
        assert_eq!(anim.sprite_bounds().unwrap().width, 10);
    }

    #[test]
    fn test_loaded_indices_match_list() {
        let mut repo = ObjectRepository::accept_all();
        let mut list = ObjectList::new();
        list.add(ObjectType::Ride, "rct1.ride.dodgems");
        list.add(ObjectType::Ride, "rct1.ride.nonexistent_thing");
        list.add(ObjectType::Ride, "rct1.ride.toilets");
        repo.load_objects(&list);

        assert!(repo.get_loaded_object(ObjectType::Ride, 0).is_some());
        assert!(repo.get_loaded_object(ObjectType::Ride, 2).is_some());
        assert_eq!(repo.loaded_object_index(ObjectType::Ride, "rct1.ride.toilets"), Some(2));
        assert!(repo.get_loaded_object(ObjectType::Ride, 1).is_none());
    }

    #[test]
    fn test_bad_manifest() {
        assert!(ObjectRepository::from_manifest_str("{").is_err());
    }
}
