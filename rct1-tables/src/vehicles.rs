use crate::colours::native;
use crate::rides;

pub const STEEL_ROLLER_COASTER_TRAIN: u8 = 0;
pub const STEEL_ROLLER_COASTER_TRAIN_BACKWARDS: u8 = 1;
pub const WOODEN_ROLLER_COASTER_TRAIN: u8 = 2;
pub const INVERTED_COASTER_TRAIN: u8 = 3;
pub const SUSPENDED_SWINGING_CARS: u8 = 4;
pub const LADYBIRD_CARS: u8 = 5;
pub const STANDUP_ROLLER_COASTER_CARS: u8 = 6;
pub const SPINNING_CARS: u8 = 7;
pub const SINGLE_PERSON_SWINGING_CHAIRS: u8 = 8;
pub const SWANS_PEDAL_BOATS: u8 = 9;
pub const LARGE_MONORAIL_TRAIN: u8 = 10;
pub const CANOES: u8 = 11;
pub const ROWING_BOATS: u8 = 12;
pub const STEAM_TRAIN: u8 = 13;
pub const WOODEN_MOUSE_CARS: u8 = 14;
pub const BUMPER_BOATS: u8 = 15;
pub const WOODEN_ROLLER_COASTER_TRAIN_BACKWARDS: u8 = 16;
pub const ROCKET_CARS: u8 = 17;
pub const HORSES: u8 = 18;
pub const SPORTSCARS: u8 = 19;
pub const LYING_DOWN_SWINGING_CARS: u8 = 20;
pub const WOODEN_MINE_CARS: u8 = 21;
pub const SUSPENDED_SWINGING_AIRPLANE_CARS: u8 = 22;
pub const SMALL_MONORAIL_CARS: u8 = 23;
pub const WATER_TRICYCLES: u8 = 24;
pub const BOBSLEIGH_CARS: u8 = 25;
pub const DINGHIES: u8 = 26;
pub const MINE_TRAIN: u8 = 27;
pub const CHAIRLIFT_CARS: u8 = 28;
pub const CORKSCREW_ROLLER_COASTER_TRAIN: u8 = 29;
pub const GO_KARTS: u8 = 30;
pub const LOG_FLUME_BOATS: u8 = 31;
pub const RIVER_RAFTS: u8 = 32;
pub const REVERSE_FREEFALL_CAR: u8 = 33;
pub const VERTICAL_ROLLER_COASTER_CARS: u8 = 34;
pub const GHOST_TRAIN_CARS: u8 = 35;
pub const TWISTER_ROLLER_COASTER_TRAIN: u8 = 36;
pub const WOODEN_TWISTER_TRAIN: u8 = 37;
pub const SIDE_FRICTION_CARS: u8 = 38;
pub const WILD_MOUSE_CARS: u8 = 39;
pub const VINTAGE_CARS: u8 = 40;
pub const MINE_TRAIN_BACKWARDS: u8 = 41;
pub const CORKSCREW_ROLLER_COASTER_TRAIN_BACKWARDS: u8 = 42;
pub const TWISTER_ROLLER_COASTER_TRAIN_BACKWARDS: u8 = 43;
pub const MINI_GOLF_PLAYERS: u8 = 44;
pub const SPLASH_BOATS: u8 = 45;
pub const SUBMARINES: u8 = 46;
pub const MINI_HELICOPTERS: u8 = 47;
pub const WATER_COASTER_BOATS: u8 = 48;
pub const REVERSER_CARS: u8 = 49;
pub const LAY_DOWN_TRAIN: u8 = 50;
pub const HEARTLINE_TWISTER_CARS: u8 = 51;
pub const SUSPENDED_MONORAIL_CARS: u8 = 52;
pub const CAT_CARS: u8 = 53;
pub const TRUCKS: u8 = 54;

pub const VEHICLE_TYPE_COUNT: usize = 55;

/// Source of one native vehicle colour channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyColour {
    /// Copy the legacy body colour
    Body,
    /// Copy the legacy trim colour
    Trim,
    /// Always this native colour
    Fixed(u8),
}

/// Where the native body, trim and tertiary colours come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyDescriptor {
    pub body: CopyColour,
    pub trim: CopyColour,
    pub tertiary: CopyColour,
}

#[derive(Debug, Clone, Copy)]
struct VehicleInfo {
    object: &'static str,
    ride_type: u8,
    reversed: bool,
    colours: CopyDescriptor,
}

use CopyColour::{Body, Fixed, Trim};

const BODY_TRIM: CopyDescriptor = CopyDescriptor { body: Body, trim: Trim, tertiary: Trim };
const BODY_TRIM_BLACK: CopyDescriptor = CopyDescriptor { body: Body, trim: Trim, tertiary: Fixed(native::BLACK) };
const BODY_BODY_TRIM: CopyDescriptor = CopyDescriptor { body: Body, trim: Body, tertiary: Trim };
const BODY_GREY_TRIM: CopyDescriptor = CopyDescriptor { body: Body, trim: Fixed(native::GREY), tertiary: Trim };
const TRIM_BODY_WHITE: CopyDescriptor = CopyDescriptor { body: Trim, trim: Body, tertiary: Fixed(native::WHITE) };

const fn vehicle(object: &'static str, ride_type: u8, colours: CopyDescriptor) -> VehicleInfo {
    VehicleInfo { object, ride_type, reversed: false, colours }
}

const fn backwards(object: &'static str, ride_type: u8, colours: CopyDescriptor) -> VehicleInfo {
    VehicleInfo { object, ride_type, reversed: true, colours }
}

static VEHICLES: [VehicleInfo; VEHICLE_TYPE_COUNT] = [
    vehicle("rct1.ride.steel_rc_trains", rides::STEEL_ROLLER_COASTER, BODY_TRIM),
    backwards("rct1.ride.steel_rc_trains", rides::STEEL_ROLLER_COASTER, BODY_TRIM),
    vehicle("rct1.ride.wooden_rc_trains", rides::WOODEN_ROLLER_COASTER, BODY_TRIM_BLACK),
    vehicle("rct1.ride.inverted_trains", rides::INVERTED_ROLLER_COASTER, BODY_TRIM),
    vehicle("rct1.ride.suspended_swinging_cars", rides::SUSPENDED_ROLLER_COASTER, BODY_TRIM_BLACK),
    vehicle("rct1.ride.ladybird_trains", rides::STEEL_MINI_ROLLER_COASTER, BODY_TRIM_BLACK),
    vehicle("rct1.ride.stand_up_trains", rides::STAND_UP_STEEL_ROLLER_COASTER, BODY_TRIM),
    vehicle("rct1.ride.spinning_cars", rides::STEEL_MINI_ROLLER_COASTER, BODY_TRIM_BLACK),
    vehicle("rct1.ride.single_person_swinging_cars", rides::SUSPENDED_SINGLE_RAIL_ROLLER_COASTER, BODY_TRIM),
    vehicle("rct1.ride.swan_boats", rides::BOAT_HIRE, BODY_BODY_TRIM),
    vehicle("rct1.ride.large_monorail_trains", rides::MONORAIL, BODY_TRIM),
    vehicle("rct1.ride.canoes", rides::BOAT_HIRE, BODY_TRIM_BLACK),
    vehicle("rct1.ride.rowing_boats", rides::BOAT_HIRE, BODY_TRIM_BLACK),
    vehicle("rct1.ride.steam_trains", rides::MINIATURE_RAILROAD, BODY_GREY_TRIM),
    vehicle("rct1.ride.mouse_cars", rides::WOODEN_CRAZY_RODENT_ROLLER_COASTER, BODY_TRIM),
    vehicle("rct1.ride.bumper_boats", rides::BOAT_HIRE, BODY_BODY_TRIM),
    backwards("rct1.ride.wooden_rc_trains", rides::WOODEN_ROLLER_COASTER, BODY_TRIM_BLACK),
    vehicle("rct1.ride.rocket_cars", rides::SINGLE_RAIL_ROLLER_COASTER, BODY_TRIM),
    vehicle("rct1.ride.horses", rides::CAR_RIDE, TRIM_BODY_WHITE),
    vehicle("rct1.ride.sports_cars", rides::CAR_RIDE, BODY_TRIM_BLACK),
    vehicle("rct1.ride.lay_down_swinging_cars", rides::SUSPENDED_SINGLE_RAIL_ROLLER_COASTER, BODY_TRIM),
    vehicle("rct1.ride.mine_cars", rides::WOODEN_CRAZY_RODENT_ROLLER_COASTER, BODY_TRIM_BLACK),
    vehicle("rct1.ride.suspended_airplane_cars", rides::SUSPENDED_ROLLER_COASTER, BODY_TRIM),
    vehicle("rct1.ride.small_monorail_cars", rides::MONORAIL, BODY_TRIM),
    vehicle("rct1.ride.water_tricycles", rides::BOAT_HIRE, BODY_BODY_TRIM),
    vehicle("rct1.ride.bobsleigh_cars", rides::BOBSLED_ROLLER_COASTER, BODY_TRIM),
    vehicle("rct1.ride.dinghies", rides::WATER_SLIDE, BODY_TRIM_BLACK),
    vehicle("rct1.ride.mine_trains", rides::MINE_TRAIN_ROLLER_COASTER, BODY_TRIM_BLACK),
    vehicle("rct1.ride.chairlift_cars", rides::CHAIRLIFT, BODY_GREY_TRIM),
    vehicle("rct1.ride.corkscrew_trains", rides::STEEL_CORKSCREW_ROLLER_COASTER, BODY_TRIM),
    vehicle("rct1.ride.go_karts", rides::GO_KARTS, BODY_TRIM_BLACK),
    vehicle("rct1.ride.log_boats", rides::LOG_FLUME, BODY_TRIM_BLACK),
    vehicle("rct1.ride.river_rafts", rides::RIVER_RAPIDS, BODY_TRIM_BLACK),
    vehicle("rct1.ride.reverse_freefall_car", rides::REVERSE_FREEFALL_ROLLER_COASTER, BODY_TRIM),
    vehicle("rct1.ride.vertical_drop_trains", rides::VERTICAL_ROLLER_COASTER, BODY_TRIM),
    vehicle("rct1.ride.ghost_train_cars", rides::GHOST_TRAIN, BODY_TRIM_BLACK),
    vehicle("rct1.ride.twister_trains", rides::STEEL_TWISTER_ROLLER_COASTER, BODY_TRIM),
    vehicle("rct1aa.ride.wooden_twister_trains", rides::WOODEN_TWISTER_ROLLER_COASTER, BODY_TRIM_BLACK),
    vehicle("rct1aa.ride.side_friction_cars", rides::WOODEN_SIDE_FRICTION_ROLLER_COASTER, BODY_TRIM_BLACK),
    vehicle("rct1aa.ride.wild_mouse_cars", rides::STEEL_WILD_MOUSE_ROLLER_COASTER, BODY_TRIM),
    vehicle("rct1.ride.vintage_cars", rides::CAR_RIDE, BODY_TRIM_BLACK),
    backwards("rct1.ride.mine_trains", rides::MINE_TRAIN_ROLLER_COASTER, BODY_TRIM_BLACK),
    backwards("rct1.ride.corkscrew_trains", rides::STEEL_CORKSCREW_ROLLER_COASTER, BODY_TRIM),
    backwards("rct1.ride.twister_trains", rides::STEEL_TWISTER_ROLLER_COASTER, BODY_TRIM),
    vehicle("rct1ll.ride.mini_golf_players", rides::MINI_GOLF, BODY_TRIM),
    vehicle("rct1ll.ride.splash_boats", rides::SPLASH_BOATS, BODY_TRIM_BLACK),
    vehicle("rct1ll.ride.submarines", rides::SUBMARINE_RIDE, BODY_BODY_TRIM),
    vehicle("rct1ll.ride.mini_helicopters", rides::MINI_HELICOPTERS, BODY_TRIM),
    vehicle("rct1ll.ride.water_coaster_boats", rides::WATER_COASTER, BODY_TRIM_BLACK),
    vehicle("rct1ll.ride.reverser_cars", rides::REVERSER_ROLLER_COASTER, BODY_TRIM_BLACK),
    vehicle("rct1ll.ride.lay_down_trains", rides::LAY_DOWN_ROLLER_COASTER, BODY_TRIM),
    vehicle("rct1ll.ride.heartline_twister_cars", rides::HEARTLINE_TWISTER_ROLLER_COASTER, BODY_TRIM),
    vehicle("rct1ll.ride.suspended_monorail_cars", rides::SUSPENDED_MONORAIL, BODY_TRIM),
    vehicle("rct1ll.ride.cat_cars", rides::CAR_RIDE, BODY_TRIM_BLACK),
    vehicle("rct1ll.ride.trucks", rides::CAR_RIDE, BODY_TRIM_BLACK),
];

pub fn vehicle_object(vehicle_type: u8) -> Option<&'static str> {
    VEHICLES.get(vehicle_type as usize).map(|v| v.object)
}

/// Ride type a vehicle type belongs to
pub fn vehicle_ride_type(vehicle_type: u8) -> Option<u8> {
    VEHICLES.get(vehicle_type as usize).map(|v| v.ride_type)
}

/// Trains that run backwards share their object with the forward train.
pub fn vehicle_type_is_reversed(vehicle_type: u8) -> bool {
    VEHICLES.get(vehicle_type as usize).map(|v| v.reversed).unwrap_or(false)
}

pub fn colour_copy_descriptor(vehicle_type: u8) -> CopyDescriptor {
    VEHICLES
        .get(vehicle_type as usize)
        .map(|v| v.colours)
        .unwrap_or(BODY_TRIM_BLACK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backwards_trains_share_objects() {
        assert_eq!(
            vehicle_object(STEEL_ROLLER_COASTER_TRAIN),
            vehicle_object(STEEL_ROLLER_COASTER_TRAIN_BACKWARDS)
        );
        assert!(vehicle_type_is_reversed(STEEL_ROLLER_COASTER_TRAIN_BACKWARDS));
        assert!(!vehicle_type_is_reversed(STEEL_ROLLER_COASTER_TRAIN));
    }

    #[test]
    fn test_vehicle_ride_types() {
        assert_eq!(vehicle_ride_type(MINE_TRAIN_BACKWARDS), Some(rides::MINE_TRAIN_ROLLER_COASTER));
        assert_eq!(vehicle_ride_type(0xFF), None);
    }

    #[test]
    fn test_copy_descriptors() {
        let steam = colour_copy_descriptor(STEAM_TRAIN);
        assert_eq!(steam.body, CopyColour::Body);
        assert_eq!(steam.trim, CopyColour::Fixed(native::GREY));
        assert_eq!(colour_copy_descriptor(0xFF), BODY_TRIM_BLACK);
    }
}
