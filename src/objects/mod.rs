pub mod list;
pub mod repository;

use serde::{Deserialize, Serialize};

pub use list::ObjectList;
pub use repository::ObjectRepository;

/// Index of a loaded object within its category
pub type ObjectEntryIndex = u16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Ride,
    SmallScenery,
    LargeScenery,
    Walls,
    Banners,
    PathAdditions,
    SceneryGroup,
    ParkEntrance,
    Water,
    ScenarioText,
    TerrainSurface,
    TerrainEdge,
    FootpathSurface,
    FootpathRailings,
    PeepNames,
    PeepAnimations,
}

impl ObjectType {
    pub const ALL: [ObjectType; 16] = [
        ObjectType::Ride,
        ObjectType::SmallScenery,
        ObjectType::LargeScenery,
        ObjectType::Walls,
        ObjectType::Banners,
        ObjectType::PathAdditions,
        ObjectType::SceneryGroup,
        ObjectType::ParkEntrance,
        ObjectType::Water,
        ObjectType::ScenarioText,
        ObjectType::TerrainSurface,
        ObjectType::TerrainEdge,
        ObjectType::FootpathSurface,
        ObjectType::FootpathRailings,
        ObjectType::PeepNames,
        ObjectType::PeepAnimations,
    ];

    /// Category segment used in object identifiers (`rct1.<segment>.<name>`)
    pub fn identifier_segment(self) -> &'static str {
        match self {
            ObjectType::Ride => "ride",
            ObjectType::SmallScenery => "scenery_small",
            ObjectType::LargeScenery => "scenery_large",
            ObjectType::Walls => "scenery_wall",
            ObjectType::Banners => "footpath_banner",
            ObjectType::PathAdditions => "footpath_item",
            ObjectType::SceneryGroup => "scenery_group",
            ObjectType::ParkEntrance => "park_entrance",
            ObjectType::Water => "water",
            ObjectType::ScenarioText => "scenario_text",
            ObjectType::TerrainSurface => "terrain_surface",
            ObjectType::TerrainEdge => "terrain_edge",
            ObjectType::FootpathSurface => "footpath_surface",
            ObjectType::FootpathRailings => "footpath_railings",
            ObjectType::PeepNames => "peep_names",
            ObjectType::PeepAnimations => "peep_animations",
        }
    }

    pub fn from_identifier_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.identifier_segment() == segment)
    }

    /// Category of an identifier of the form `source.category.name`
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        let mut parts = identifier.splitn(3, '.');
        let _source = parts.next()?;
        let segment = parts.next()?;
        parts.next()?;
        Self::from_identifier_segment(segment)
    }
}

/// Sprite extents of one peep animation set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpriteBounds {
    pub width: u8,
    pub height_negative: u8,
    pub height_positive: u8,
}

impl SpriteBounds {
    /// Extents of the stock animation sets
    pub const STANDARD: SpriteBounds = SpriteBounds { width: 8, height_negative: 26, height_positive: 9 };
}

/// Localised strings of an official scenario
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScenarioText {
    pub name: String,
    #[serde(default)]
    pub park_name: String,
    #[serde(default)]
    pub details: String,
}

/// What the repository knows about an object before it is loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectDescriptor {
    pub id: String,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    /// Native ride type of a ride object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ride_type: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite_bounds: Option<SpriteBounds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario_text: Option<ScenarioText>,
}

impl ObjectDescriptor {
    pub fn new(id: impl Into<String>, object_type: ObjectType) -> Self {
        Self { id: id.into(), object_type, ride_type: None, sprite_bounds: None, scenario_text: None }
    }
}

/// Loaded object data the importer reads back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectData {
    None,
    Ride { ride_type: u16 },
    PeepAnimations { bounds: SpriteBounds },
    ScenarioText(ScenarioText),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedObject {
    pub identifier: String,
    pub object_type: ObjectType,
    pub data: ObjectData,
}

impl LoadedObject {
    pub fn ride_type(&self) -> Option<u16> {
        match self.data {
            ObjectData::Ride { ride_type } => Some(ride_type),
            _ => None,
        }
    }

    pub fn sprite_bounds(&self) -> Option<SpriteBounds> {
        match self.data {
            ObjectData::PeepAnimations { bounds } => Some(bounds),
            _ => None,
        }
    }

    pub fn scenario_text(&self) -> Option<&ScenarioText> {
        match &self.data {
            ObjectData::ScenarioText(text) => Some(text),
            _ => None,
        }
    }
}

/// Object system as seen by the importer
pub trait ObjectManager {
    fn find_object(&self, identifier: &str) -> Option<ObjectDescriptor>;

    /// Load an object outside the park's object table
    fn load_temp_object(&self, identifier: &str) -> Option<LoadedObject>;

    /// Object loaded for the current park at `index` within its category
    fn get_loaded_object(&self, object_type: ObjectType, index: ObjectEntryIndex) -> Option<&LoadedObject>;

    /// Entry index of a loaded object by identifier
    fn loaded_object_index(&self, object_type: ObjectType, identifier: &str) -> Option<ObjectEntryIndex>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_from_identifier() {
        assert_eq!(ObjectType::from_identifier("rct1.ride.wooden_rc_trains"), Some(ObjectType::Ride));
        assert_eq!(ObjectType::from_identifier("rct2.scenery_group.scgtrees"), Some(ObjectType::SceneryGroup));
        assert_eq!(ObjectType::from_identifier("rct1aa.footpath_surface.road"), Some(ObjectType::FootpathSurface));
        assert_eq!(ObjectType::from_identifier("rct1.unknown.thing"), None);
        assert_eq!(ObjectType::from_identifier("ride"), None);
    }

    #[test]
    fn test_descriptor_manifest_shape() {
        let json = r#"{"id": "rct1.ride.merry_go_round", "type": "ride", "ride_type": 33}"#;
        let desc: ObjectDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(desc.object_type, ObjectType::Ride);
        assert_eq!(desc.ride_type, Some(33));
        assert!(desc.scenario_text.is_none());
    }
}
