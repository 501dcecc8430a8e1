//! Static knowledge about the RollerCoaster Tycoon 1 file formats
//!
//! The legacy formats address every piece of content with a small fixed
//! type code. The importer needs to translate those codes into the string
//! identifiers of dynamically loaded objects, and needs to know a handful of
//! per-type facts (does the ride use vehicles, is the vehicle reversed, which
//! colours does the vehicle copy). All of that lives here so the importer
//! itself only deals with mechanics.
//!
//! Modules:
//! - `colours` - legacy palette to native palette
//! - `rides` - ride type codes and their objects
//! - `vehicles` - vehicle type codes, objects, colour copy descriptors
//! - `scenery` - small/large scenery, walls, banners, scenery themes
//! - `paths` - footpath surfaces, railings, path additions
//! - `terrain` - terrain surfaces, edges, water
//! - `scenarios` - the official scenario source table

pub mod colours;
pub mod paths;
pub mod rides;
pub mod scenarios;
pub mod scenery;
pub mod terrain;
pub mod vehicles;

pub use colours::to_native_colour;
pub use paths::{footpath_surface_object, normalise_path_addition, path_addition_object, path_is_queue, railings_object};
pub use rides::{ride_type_object, ride_type_uses_vehicles, RideTypeInfo, RIDE_TYPE_COUNT, RIDE_TYPE_NULL};
pub use scenarios::{scenario_source, ScenarioCategory, ScenarioSource, SourceDescriptor};
pub use scenery::{
    banner_object, large_scenery_object, scenery_group_object, scenery_theme_objects,
    small_scenery_object, wall_object,
};
pub use terrain::{terrain_edge_object, terrain_surface_object, water_object};
pub use vehicles::{colour_copy_descriptor, vehicle_object, vehicle_type_is_reversed, CopyColour, CopyDescriptor, VEHICLE_TYPE_COUNT};

/// Research list constants
pub mod research {
    pub const FLAGS_SEPARATOR: u8 = 0xFF;

    pub const END_AVAILABLE: u8 = 0xFF;
    pub const END_RESEARCHABLE: u8 = 0xFE;
    pub const END: u8 = 0xFD;

    pub const TYPE_THEME: u8 = 0;
    pub const TYPE_RIDE: u8 = 1;
    pub const TYPE_VEHICLE: u8 = 2;
    pub const TYPE_SPECIAL: u8 = 3;
}
