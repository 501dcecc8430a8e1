pub const WOODEN_ROLLER_COASTER: u8 = 0;
pub const STAND_UP_STEEL_ROLLER_COASTER: u8 = 1;
pub const SUSPENDED_ROLLER_COASTER: u8 = 2;
pub const INVERTED_ROLLER_COASTER: u8 = 3;
pub const STEEL_MINI_ROLLER_COASTER: u8 = 4;
pub const MINIATURE_RAILROAD: u8 = 5;
pub const MONORAIL: u8 = 6;
pub const SUSPENDED_SINGLE_RAIL_ROLLER_COASTER: u8 = 7;
pub const BOAT_HIRE: u8 = 8;
pub const WOODEN_CRAZY_RODENT_ROLLER_COASTER: u8 = 9;
pub const SINGLE_RAIL_ROLLER_COASTER: u8 = 10;
pub const CAR_RIDE: u8 = 11;
pub const LAUNCHED_FREEFALL: u8 = 12;
pub const BOBSLED_ROLLER_COASTER: u8 = 13;
pub const OBSERVATION_TOWER: u8 = 14;
pub const STEEL_ROLLER_COASTER: u8 = 15;
pub const WATER_SLIDE: u8 = 16;
pub const MINE_TRAIN_ROLLER_COASTER: u8 = 17;
pub const CHAIRLIFT: u8 = 18;
pub const STEEL_CORKSCREW_ROLLER_COASTER: u8 = 19;
pub const HEDGE_MAZE: u8 = 20;
pub const SPIRAL_SLIDE: u8 = 21;
pub const GO_KARTS: u8 = 22;
pub const LOG_FLUME: u8 = 23;
pub const RIVER_RAPIDS: u8 = 24;
pub const DODGEMS: u8 = 25;
pub const SWINGING_SHIP: u8 = 26;
pub const SWINGING_INVERTER_SHIP: u8 = 27;
pub const ICE_CREAM_STALL: u8 = 28;
pub const CHIPS_STALL: u8 = 29;
pub const DRINK_STALL: u8 = 30;
pub const CANDYFLOSS_STALL: u8 = 31;
pub const BURGER_BAR: u8 = 32;
pub const MERRY_GO_ROUND: u8 = 33;
pub const BALLOON_STALL: u8 = 34;
pub const INFORMATION_KIOSK: u8 = 35;
pub const TOILETS: u8 = 36;
pub const FERRIS_WHEEL: u8 = 37;
pub const MOTION_SIMULATOR: u8 = 38;
pub const CINEMA_3D: u8 = 39;
pub const TOP_SPIN: u8 = 40;
pub const SPACE_RINGS: u8 = 41;
pub const REVERSE_FREEFALL_ROLLER_COASTER: u8 = 42;
pub const SOUVENIR_STALL: u8 = 43;
pub const VERTICAL_ROLLER_COASTER: u8 = 44;
pub const PIZZA_STALL: u8 = 45;
pub const TWIST: u8 = 46;
pub const HAUNTED_HOUSE: u8 = 47;
pub const POPCORN_STALL: u8 = 48;
pub const CIRCUS_SHOW: u8 = 49;
pub const GHOST_TRAIN: u8 = 50;
pub const STEEL_TWISTER_ROLLER_COASTER: u8 = 51;
pub const WOODEN_TWISTER_ROLLER_COASTER: u8 = 52;
pub const WOODEN_SIDE_FRICTION_ROLLER_COASTER: u8 = 53;
pub const STEEL_WILD_MOUSE_ROLLER_COASTER: u8 = 54;
pub const HOT_DOG_STALL: u8 = 55;
pub const EXOTIC_SEA_FOOD_STALL: u8 = 56;
pub const HAT_STALL: u8 = 57;
pub const CANDY_APPLE_STAND: u8 = 58;
pub const VIRTUAL_REALITY: u8 = 59;
pub const DOUGHNUT_SHOP: u8 = 60;
pub const COFFEE_SHOP: u8 = 61;
pub const FRIED_CHICKEN_STALL: u8 = 62;
pub const LEMONADE_STALL: u8 = 63;
pub const ROTO_DROP: u8 = 64;
pub const FLYING_SAUCERS: u8 = 65;
pub const CROOKED_HOUSE: u8 = 66;
pub const ENTERPRISE: u8 = 67;
pub const MINI_GOLF: u8 = 68;
pub const SPLASH_BOATS: u8 = 69;
pub const SUBMARINE_RIDE: u8 = 70;
pub const MINI_HELICOPTERS: u8 = 71;
pub const MAGIC_CARPET: u8 = 72;
pub const WATER_COASTER: u8 = 73;
pub const REVERSER_ROLLER_COASTER: u8 = 74;
pub const LAY_DOWN_ROLLER_COASTER: u8 = 75;
pub const HEARTLINE_TWISTER_ROLLER_COASTER: u8 = 76;
pub const SUSPENDED_MONORAIL: u8 = 77;
pub const LIFT: u8 = 78;
pub const T_SHIRT_STALL: u8 = 79;

pub const RIDE_TYPE_COUNT: usize = 80;
pub const RIDE_TYPE_NULL: u8 = 0xFF;

#[derive(Debug, Clone, Copy)]
pub struct RideTypeInfo {
    /// Object loaded when the ride is not described by a vehicle
    pub object: &'static str,
    /// Track rides pick their object from the vehicle type instead
    pub uses_vehicles: bool,
}

const fn flat(object: &'static str) -> RideTypeInfo {
    RideTypeInfo { object, uses_vehicles: false }
}

const fn tracked(object: &'static str) -> RideTypeInfo {
    RideTypeInfo { object, uses_vehicles: true }
}

static RIDE_TYPES: [RideTypeInfo; RIDE_TYPE_COUNT] = [
    tracked("rct1.ride.wooden_rc_trains"),
    tracked("rct1.ride.stand_up_trains"),
    tracked("rct1.ride.suspended_swinging_cars"),
    tracked("rct1.ride.inverted_trains"),
    tracked("rct1.ride.ladybird_trains"),
    tracked("rct1.ride.steam_trains"),
    tracked("rct1.ride.large_monorail_trains"),
    tracked("rct1.ride.single_person_swinging_cars"),
    tracked("rct1.ride.rowing_boats"),
    tracked("rct1.ride.mouse_cars"),
    tracked("rct1.ride.rocket_cars"),
    tracked("rct1.ride.vintage_cars"),
    flat("rct1.ride.launched_freefall"),
    tracked("rct1.ride.bobsleigh_cars"),
    flat("rct1.ride.observation_tower"),
    tracked("rct1.ride.steel_rc_trains"),
    tracked("rct1.ride.dinghies"),
    tracked("rct1.ride.mine_trains"),
    tracked("rct1.ride.chairlift_cars"),
    tracked("rct1.ride.corkscrew_trains"),
    flat("rct1.ride.hedge_maze"),
    flat("rct1.ride.spiral_slide"),
    tracked("rct1.ride.go_karts"),
    tracked("rct1.ride.log_boats"),
    tracked("rct1.ride.river_rafts"),
    flat("rct1.ride.dodgems"),
    flat("rct1.ride.swinging_ship"),
    flat("rct1.ride.swinging_inverter_ship"),
    flat("rct1.ride.ice_cream_stall"),
    flat("rct1.ride.chips_stall"),
    flat("rct1.ride.drinks_stall"),
    flat("rct1.ride.candyfloss_stall"),
    flat("rct1.ride.burger_bar"),
    flat("rct1.ride.merry_go_round"),
    flat("rct1.ride.balloon_stall"),
    flat("rct1.ride.information_kiosk"),
    flat("rct1.ride.toilets"),
    flat("rct1.ride.ferris_wheel"),
    flat("rct1.ride.motion_simulator"),
    flat("rct1.ride.3d_cinema"),
    flat("rct1.ride.top_spin"),
    flat("rct1.ride.space_rings"),
    tracked("rct1.ride.reverse_freefall_car"),
    flat("rct1.ride.souvenir_stall"),
    tracked("rct1.ride.vertical_drop_trains"),
    flat("rct1.ride.pizza_stall"),
    flat("rct1.ride.twist"),
    flat("rct1.ride.haunted_house"),
    flat("rct1.ride.popcorn_stall"),
    flat("rct1.ride.circus"),
    tracked("rct1.ride.ghost_train_cars"),
    tracked("rct1.ride.twister_trains"),
    tracked("rct1aa.ride.wooden_twister_trains"),
    tracked("rct1aa.ride.side_friction_cars"),
    tracked("rct1aa.ride.wild_mouse_cars"),
    flat("rct1aa.ride.hot_dog_stall"),
    flat("rct1aa.ride.seafood_stall"),
    flat("rct1aa.ride.hat_stall"),
    flat("rct1aa.ride.toffee_apple_stall"),
    flat("rct1aa.ride.virtual_reality"),
    flat("rct1ll.ride.doughnut_shop"),
    flat("rct1ll.ride.coffee_shop"),
    flat("rct1ll.ride.chicken_stall"),
    flat("rct1ll.ride.lemonade_stall"),
    flat("rct1ll.ride.roto_drop"),
    flat("rct1ll.ride.flying_saucers"),
    flat("rct1ll.ride.crooked_house"),
    flat("rct1ll.ride.enterprise"),
    tracked("rct1ll.ride.mini_golf_players"),
    tracked("rct1ll.ride.splash_boats"),
    tracked("rct1ll.ride.submarines"),
    tracked("rct1ll.ride.mini_helicopters"),
    flat("rct1ll.ride.magic_carpet"),
    tracked("rct1ll.ride.water_coaster_boats"),
    tracked("rct1ll.ride.reverser_cars"),
    tracked("rct1ll.ride.lay_down_trains"),
    tracked("rct1ll.ride.heartline_twister_cars"),
    tracked("rct1ll.ride.suspended_monorail_cars"),
    flat("rct1ll.ride.lift"),
    flat("rct1ll.ride.t_shirt_stall"),
];

pub fn ride_type_info(ride_type: u8) -> Option<&'static RideTypeInfo> {
    RIDE_TYPES.get(ride_type as usize)
}

/// Object identifier for a ride type, `None` for codes outside the table.
pub fn ride_type_object(ride_type: u8) -> Option<&'static str> {
    ride_type_info(ride_type).map(|info| info.object)
}

pub fn ride_type_uses_vehicles(ride_type: u8) -> bool {
    ride_type_info(ride_type).map(|info| info.uses_vehicles).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ride_type_objects() {
        assert_eq!(ride_type_object(MERRY_GO_ROUND), Some("rct1.ride.merry_go_round"));
        assert_eq!(ride_type_object(T_SHIRT_STALL), Some("rct1ll.ride.t_shirt_stall"));
        assert_eq!(ride_type_object(RIDE_TYPE_NULL), None);
    }

    #[test]
    fn test_vehicle_usage() {
        assert!(ride_type_uses_vehicles(WOODEN_ROLLER_COASTER));
        assert!(ride_type_uses_vehicles(GHOST_TRAIN));
        assert!(!ride_type_uses_vehicles(HEDGE_MAZE));
        assert!(!ride_type_uses_vehicles(TOILETS));
        assert!(!ride_type_uses_vehicles(RIDE_TYPE_NULL));
    }
}
