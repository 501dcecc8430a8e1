use bitflags::bitflags;
use serde::Serialize;

use super::ride_type::{self, RideMode, RideType, RIDE_TYPE_NULL};
use crate::objects::ObjectEntryIndex;

pub type RideId = u16;

pub const MAX_RIDES: usize = 255;
pub const MAX_STATIONS: usize = 8;
pub const MAX_VEHICLES_PER_RIDE: usize = 31;
pub const NUM_COLOUR_SCHEMES: usize = 4;
pub const MAX_CARS_PER_TRAIN: usize = 32;
pub const NUM_CUSTOMER_SAMPLES: usize = 10;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
    pub struct RideLifecycle: u32 {
        const ON_TRACK = 1 << 0;
        const TESTED = 1 << 1;
        const TEST_IN_PROGRESS = 1 << 2;
        const NO_RAW_STATS = 1 << 3;
        const HAS_STALLED_VEHICLE = 1 << 4;
        const CALLING_MECHANIC = 1 << 5;
        const BREAKDOWN_PENDING = 1 << 6;
        const BROKEN_DOWN = 1 << 7;
        const DUE_INSPECTION = 1 << 8;
        const QUEUE_FULL = 1 << 9;
        const CRASHED = 1 << 10;
        const HAS_ENTRANCE_EXIT_LINKS = 1 << 11;
        const EVER_BEEN_OPENED = 1 << 12;
        const MUSIC = 1 << 13;
        const INDESTRUCTIBLE = 1 << 14;
        const INDESTRUCTIBLE_TRACK = 1 << 15;
        const CABLE_LIFT = 1 << 17;
        const NOT_CUSTOM_DESIGN = 1 << 18;
        const SIX_FLAGS_DEPRECATED = 1 << 19;
        const REVERSED_TRAINS = 1 << 23;
    }
}

impl RideLifecycle {
    /// Bits the first legacy edition never wrote
    pub const CLASSIC_INVALID: RideLifecycle = RideLifecycle::MUSIC
        .union(RideLifecycle::INDESTRUCTIBLE)
        .union(RideLifecycle::INDESTRUCTIBLE_TRACK);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RideStatus {
    #[default]
    Closed,
    Open,
    Testing,
    Simulating,
}

impl RideStatus {
    pub fn from_legacy(status: u8) -> Self {
        match status {
            1 => RideStatus::Open,
            2 => RideStatus::Testing,
            _ => RideStatus::Closed,
        }
    }
}

/// Tile position with height and facing, used for station entrances and exits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileCoordsXYZD {
    pub x: u8,
    pub y: u8,
    pub z: u8,
    pub direction: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TileCoordsXY {
    pub x: u8,
    pub y: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Station {
    pub start: Option<TileCoordsXY>,
    pub height: u8,
    pub length: u8,
    pub depart: u8,
    pub entrance: Option<TileCoordsXYZD>,
    pub exit: Option<TileCoordsXYZD>,
    pub last_peep_in_queue: Option<u16>,
    pub queue_length: u16,
    pub queue_time: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TrackColour {
    pub main: u8,
    pub additional: u8,
    pub supports: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VehicleColour {
    pub body: u8,
    pub trim: u8,
    pub tertiary: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RideName {
    pub custom: Option<String>,
    /// Number appended to the type name when there is no custom name
    pub default_number: u16,
}

/// Ratings and statistics gathered by the last test run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RideStats {
    pub excitement: i16,
    pub intensity: i16,
    pub nausea: i16,
    pub value: u16,
    pub max_speed: i32,
    pub average_speed: i32,
    pub lengths: [i32; 4],
    pub times: [u16; 4],
    pub max_positive_vertical_g: i16,
    pub max_negative_vertical_g: i16,
    pub max_lateral_g: i16,
    pub previous_vertical_g: i16,
    pub previous_lateral_g: i16,
    pub turn_count_default: u16,
    pub turn_count_banked: u16,
    pub turn_count_sloped: u16,
    pub inversions: u8,
    pub drops: u8,
    pub powered_lifts: u8,
    pub holes: u8,
    pub helices: u8,
    pub special_track_flags: u8,
    pub start_drop_height: u8,
    pub highest_drop_height: u8,
    pub sheltered_length: i32,
    pub num_sheltered_sections: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RideEconomics {
    pub price: [u16; 2],
    pub total_customers: u32,
    pub total_profit: i32,
    pub income_per_hour: i32,
    pub profit: i32,
    pub upkeep_cost: i16,
    pub popularity: u8,
    pub satisfaction: u8,
    pub num_customers: [u16; NUM_CUSTOMER_SAMPLES],
    pub num_riders: u16,
    pub build_date: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RideReliability {
    pub reliability: u16,
    pub unreliability_factor: u8,
    pub downtime: u8,
    pub inspection_interval: u8,
    pub last_inspection: u8,
    pub breakdown_reason: u8,
    pub mechanic_status: u8,
    pub mechanic: Option<u16>,
}

/// Sampled ride telemetry from the last test run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RideMeasurement {
    pub flags: u8,
    pub last_use_tick: u32,
    pub num_items: u16,
    pub current_item: u16,
    pub vehicle_index: u8,
    pub current_station: u8,
    #[serde(skip)]
    pub vertical: Vec<i8>,
    #[serde(skip)]
    pub lateral: Vec<i8>,
    #[serde(skip)]
    pub velocity: Vec<u8>,
    #[serde(skip)]
    pub altitude: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ride {
    pub id: RideId,
    pub ride_type: RideType,
    /// Ride object entry; `None` only while the ride type is null
    pub subtype: Option<ObjectEntryIndex>,
    pub mode: RideMode,
    pub status: RideStatus,
    pub name: RideName,
    pub lifecycle_flags: RideLifecycle,
    pub depart_flags: u8,
    pub stations: [Station; MAX_STATIONS],
    pub overall_view: Option<TileCoordsXY>,

    pub colour_scheme_type: u8,
    pub track_colours: [TrackColour; NUM_COLOUR_SCHEMES],
    pub vehicle_colours: Vec<VehicleColour>,
    pub entrance_style: Option<u8>,
    pub maze_wall_type: u8,
    pub music: u8,

    pub vehicles: Vec<Option<u16>>,
    pub num_stations: u8,
    pub num_trains: u8,
    pub num_cars_per_train: u8,
    pub proposed_num_trains: u8,
    pub proposed_num_cars_per_train: u8,
    pub max_trains: u8,
    pub min_cars_per_train: u8,
    pub max_cars_per_train: u8,
    pub min_waiting_time: u8,
    pub max_waiting_time: u8,
    pub operation_option: u8,
    pub boat_hire_return_direction: u8,
    pub boat_hire_return_position: TileCoordsXY,
    pub num_block_brakes: u16,

    pub stats: RideStats,
    pub economics: RideEconomics,
    pub reliability: RideReliability,
    pub measurement: Option<RideMeasurement>,
}

impl Ride {
    pub fn new(id: RideId) -> Self {
        Self {
            id,
            ride_type: RIDE_TYPE_NULL,
            subtype: None,
            mode: RideMode::Normal,
            status: RideStatus::Closed,
            name: RideName::default(),
            lifecycle_flags: RideLifecycle::empty(),
            depart_flags: 0,
            stations: [Station::default(); MAX_STATIONS],
            overall_view: None,
            colour_scheme_type: 0,
            track_colours: [TrackColour::default(); NUM_COLOUR_SCHEMES],
            vehicle_colours: vec![VehicleColour::default(); MAX_VEHICLES_PER_RIDE],
            entrance_style: None,
            maze_wall_type: 0,
            music: 0,
            vehicles: vec![None; MAX_VEHICLES_PER_RIDE],
            num_stations: 0,
            num_trains: 0,
            num_cars_per_train: 0,
            proposed_num_trains: 0,
            proposed_num_cars_per_train: 0,
            max_trains: 0,
            min_cars_per_train: 0,
            max_cars_per_train: 0,
            min_waiting_time: 0,
            max_waiting_time: 0,
            operation_option: 0,
            boat_hire_return_direction: 0,
            boat_hire_return_position: TileCoordsXY::default(),
            num_block_brakes: 0,
            stats: RideStats::default(),
            economics: RideEconomics::default(),
            reliability: RideReliability::default(),
            measurement: None,
        }
    }

    pub fn is_null_type(&self) -> bool {
        self.ride_type == RIDE_TYPE_NULL
    }

    /// Drop the ride back to the null type, forgetting its object
    pub fn set_null_type(&mut self) {
        self.ride_type = RIDE_TYPE_NULL;
        self.subtype = None;
    }

    pub fn type_descriptor(&self) -> &'static ride_type::RideTypeDescriptor {
        ride_type::descriptor(self.ride_type)
    }

    pub fn default_name(&self, number: u16) -> String {
        format!("{} {}", self.type_descriptor().name, number)
    }

    /// Display name: the custom name, or the type name with its number
    pub fn formatted_name(&self) -> String {
        match &self.name.custom {
            Some(name) => name.clone(),
            None => self.default_name(self.name.default_number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ride_is_null() {
        let ride = Ride::new(3);
        assert!(ride.is_null_type());
        assert!(ride.subtype.is_none());
        assert!(ride.stations.iter().all(|s| s.start.is_none() && s.entrance.is_none()));
    }

    #[test]
    fn test_formatted_name() {
        let mut ride = Ride::new(0);
        ride.ride_type = rct1_tables::rides::MERRY_GO_ROUND as RideType;
        ride.name.default_number = 2;
        assert_eq!(ride.formatted_name(), "Merry-Go-Round 2");
        ride.name.custom = Some("Carousel".into());
        assert_eq!(ride.formatted_name(), "Carousel");
    }

    #[test]
    fn test_classic_mask() {
        let flags = RideLifecycle::TESTED | RideLifecycle::MUSIC | RideLifecycle::INDESTRUCTIBLE;
        assert_eq!(flags - RideLifecycle::CLASSIC_INVALID, RideLifecycle::TESTED);
    }
}
