pub mod reader;
pub mod writer;
pub mod types;
pub mod sawyer;
pub mod tile_element;
pub mod ride;
pub mod entity;
pub mod s4;

pub use reader::BinaryReader;
pub use writer::BinaryWriter;
pub use types::*;
pub use sawyer::{decode_park, DecodedPark};
pub use tile_element::{LegacyElementKind, LegacyTileElement, TileChains, TileCoords};
pub use ride::{LegacyRide, LegacyRideMeasurement, LegacyVehicleColour};
pub use entity::{EntityHeader, LegacyEntity, LegacyEntityBody, LegacyMisc, LegacyPeep, LegacyVehicle};
pub use s4::{LegacyBanner, LegacyParkFlags, LegacyResearchItem, S4, S4_SIZE};
