pub mod banner;
pub mod entity;
pub mod patrol;
pub mod research;
pub mod ride;
pub mod ride_type;
pub mod tile;
pub mod world;

pub use banner::{Banner, BannerFlags, BannerIndex};
pub use entity::{Entity, EntityBase, EntityId, EntityKind, EntityRegistry, Guest, Peep, Staff, StaffType, Vehicle};
pub use patrol::{ConsolidatedPatrolAreas, PatrolArea};
pub use research::{Research, ResearchCategory, ResearchFlags, ResearchItem, ResearchType};
pub use ride::{Ride, RideId, RideLifecycle, RideMeasurement, RideStatus, Station, TileCoordsXY, TileCoordsXYZD, VehicleColour};
pub use ride_type::{RideMode, RideType, RideTypeFlags, RIDE_TYPE_NULL};
pub use tile::{TileElement, TileElementKind, TileMap};
pub use world::{Park, ParkFlags, MONEY64_UNDEFINED};
