use bitflags::bitflags;
use rct1_tables::rides as legacy;

pub type RideType = u16;

pub const RIDE_TYPE_NULL: RideType = 0xFF;

/// Music styles a ride can play
pub mod music {
    pub const DODGEMS_BEAT: u8 = 0;
    pub const FAIRGROUND_ORGAN: u8 = 1;
    pub const ROMAN_FANFARE: u8 = 2;
    pub const ORIENTAL: u8 = 3;
    pub const MARTIAN: u8 = 4;
    pub const JUNGLE_DRUMS: u8 = 5;
    pub const EGYPTIAN: u8 = 6;
    pub const TOYLAND: u8 = 7;
    pub const CIRCUS: u8 = 8;
    pub const SPACE: u8 = 9;
    pub const HORROR: u8 = 10;
    pub const TECHNO: u8 = 11;
    pub const GENTLE: u8 = 12;
    pub const SUMMER: u8 = 13;
    pub const WATER: u8 = 14;
    pub const WILD_WEST: u8 = 15;
    pub const JURASSIC: u8 = 16;
    pub const ROCK: u8 = 17;
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RideTypeFlags: u16 {
        const HAS_TRACK = 0x0001;
        /// Fixed-layout ride placed as one footprint piece
        const FLAT_RIDE = 0x0002;
        const IS_SHOP = 0x0004;
        const IS_MAZE = 0x0008;
        const HAS_ENTRANCE_EXIT = 0x0010;
        const HAS_VEHICLES = 0x0020;
        const PLAYS_MUSIC = 0x0040;
        /// Vehicle colours follow the track colours
        const VEHICLE_IS_INTEGRAL = 0x0080;
        const IS_COASTER = 0x0100;
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RideTypeDescriptor {
    pub name: &'static str,
    pub default_music: u8,
    pub flags: RideTypeFlags,
}

impl RideTypeDescriptor {
    pub fn has(&self, flag: RideTypeFlags) -> bool {
        self.flags.contains(flag)
    }
}

const COASTER: RideTypeFlags = RideTypeFlags::HAS_TRACK
    .union(RideTypeFlags::HAS_ENTRANCE_EXIT)
    .union(RideTypeFlags::HAS_VEHICLES)
    .union(RideTypeFlags::IS_COASTER);
const TRACKED: RideTypeFlags = RideTypeFlags::HAS_TRACK
    .union(RideTypeFlags::HAS_ENTRANCE_EXIT)
    .union(RideTypeFlags::HAS_VEHICLES);
const FLAT: RideTypeFlags = RideTypeFlags::HAS_TRACK
    .union(RideTypeFlags::FLAT_RIDE)
    .union(RideTypeFlags::HAS_ENTRANCE_EXIT)
    .union(RideTypeFlags::HAS_VEHICLES)
    .union(RideTypeFlags::VEHICLE_IS_INTEGRAL);
const SHOP: RideTypeFlags = RideTypeFlags::HAS_TRACK
    .union(RideTypeFlags::FLAT_RIDE)
    .union(RideTypeFlags::IS_SHOP);
const MAZE: RideTypeFlags = RideTypeFlags::HAS_TRACK
    .union(RideTypeFlags::IS_MAZE)
    .union(RideTypeFlags::HAS_ENTRANCE_EXIT);

const fn rtd(name: &'static str, default_music: u8, flags: RideTypeFlags) -> RideTypeDescriptor {
    RideTypeDescriptor { name, default_music, flags }
}

static DESCRIPTORS: [RideTypeDescriptor; legacy::RIDE_TYPE_COUNT] = [
    rtd("Wooden Roller Coaster", music::ROCK, COASTER),
    rtd("Stand-up Roller Coaster", music::TECHNO, COASTER),
    rtd("Suspended Swinging Coaster", music::ROCK, COASTER),
    rtd("Inverted Roller Coaster", music::TECHNO, COASTER),
    rtd("Junior Roller Coaster", music::TOYLAND, COASTER),
    rtd("Miniature Railway", music::GENTLE, TRACKED),
    rtd("Monorail", music::GENTLE, TRACKED),
    rtd("Mini Suspended Coaster", music::ROCK, COASTER),
    rtd("Boat Hire", music::WATER, TRACKED),
    rtd("Wooden Wild Mouse", music::ROCK, COASTER),
    rtd("Steeplechase", music::ROCK, COASTER),
    rtd("Car Ride", music::GENTLE, TRACKED),
    rtd("Launched Freefall", music::TECHNO, TRACKED),
    rtd("Bobsleigh Coaster", music::ROCK, COASTER),
    rtd("Observation Tower", music::GENTLE, TRACKED),
    rtd("Looping Roller Coaster", music::ROCK, COASTER),
    rtd("Dinghy Slide", music::WATER, TRACKED),
    rtd("Mine Train Coaster", music::WILD_WEST, COASTER),
    rtd("Chairlift", music::GENTLE, TRACKED),
    rtd("Corkscrew Roller Coaster", music::ROCK, COASTER),
    rtd("Maze", music::GENTLE, MAZE),
    rtd("Spiral Slide", music::SUMMER, FLAT),
    rtd("Go-Karts", music::TECHNO, TRACKED),
    rtd("Log Flume", music::WATER, TRACKED),
    rtd("River Rapids", music::WATER, TRACKED),
    rtd("Dodgems", music::DODGEMS_BEAT, FLAT),
    rtd("Swinging Ship", music::ROCK, FLAT),
    rtd("Swinging Inverter Ship", music::ROCK, FLAT),
    rtd("Ice Cream Stall", music::GENTLE, SHOP),
    rtd("Chips Stall", music::GENTLE, SHOP),
    rtd("Drinks Stall", music::GENTLE, SHOP),
    rtd("Candyfloss Stall", music::GENTLE, SHOP),
    rtd("Burger Bar", music::GENTLE, SHOP),
    rtd("Merry-Go-Round", music::FAIRGROUND_ORGAN, FLAT),
    rtd("Balloon Stall", music::GENTLE, SHOP),
    rtd("Information Kiosk", music::GENTLE, SHOP),
    rtd("Toilets", music::GENTLE, SHOP),
    rtd("Ferris Wheel", music::GENTLE, FLAT),
    rtd("Motion Simulator", music::TECHNO, FLAT),
    rtd("3D Cinema", music::TECHNO, FLAT),
    rtd("Top Spin", music::TECHNO, FLAT),
    rtd("Space Rings", music::SPACE, FLAT),
    rtd("Reverse Freefall Coaster", music::TECHNO, COASTER),
    rtd("Souvenir Stall", music::GENTLE, SHOP),
    rtd("Vertical Drop Roller Coaster", music::ROCK, COASTER),
    rtd("Pizza Stall", music::GENTLE, SHOP),
    rtd("Twist", music::ROCK, FLAT),
    rtd("Haunted House", music::HORROR, FLAT),
    rtd("Popcorn Stall", music::GENTLE, SHOP),
    rtd("Circus", music::CIRCUS, FLAT),
    rtd("Ghost Train", music::HORROR, TRACKED),
    rtd("Twister Roller Coaster", music::ROCK, COASTER),
    rtd("Wooden Twister Coaster", music::ROCK, COASTER),
    rtd("Side-Friction Roller Coaster", music::ROCK, COASTER),
    rtd("Steel Wild Mouse", music::ROCK, COASTER),
    rtd("Hot Dog Stall", music::GENTLE, SHOP),
    rtd("Exotic Sea Food Stall", music::GENTLE, SHOP),
    rtd("Hat Stall", music::GENTLE, SHOP),
    rtd("Toffee Apple Stall", music::GENTLE, SHOP),
    rtd("Virtual Reality", music::TECHNO, FLAT),
    rtd("Doughnut Shop", music::GENTLE, SHOP),
    rtd("Coffee Shop", music::GENTLE, SHOP),
    rtd("Fried Chicken Stall", music::GENTLE, SHOP),
    rtd("Lemonade Stall", music::GENTLE, SHOP),
    rtd("Roto-Drop", music::TECHNO, TRACKED),
    rtd("Flying Saucers", music::SPACE, FLAT),
    rtd("Crooked House", music::GENTLE, FLAT),
    rtd("Enterprise", music::TECHNO, FLAT),
    rtd("Mini Golf", music::SUMMER, TRACKED),
    rtd("Splash Boats", music::WATER, TRACKED),
    rtd("Submarine Ride", music::WATER, TRACKED),
    rtd("Mini Helicopters", music::GENTLE, TRACKED),
    rtd("Magic Carpet", music::ORIENTAL, FLAT),
    rtd("Water Coaster", music::WATER, COASTER),
    rtd("Reverser Roller Coaster", music::ROCK, COASTER),
    rtd("Lay-down Roller Coaster", music::ROCK, COASTER),
    rtd("Heartline Twister Coaster", music::ROCK, COASTER),
    rtd("Suspended Monorail", music::GENTLE, TRACKED),
    rtd("Lift", music::GENTLE, TRACKED),
    rtd("T-Shirt Stall", music::GENTLE, SHOP),
];

static NULL_DESCRIPTOR: RideTypeDescriptor = rtd("Ride", music::GENTLE, RideTypeFlags::empty());

/// Descriptor of a native ride type. Unknown types get an inert descriptor.
pub fn descriptor(ride_type: RideType) -> &'static RideTypeDescriptor {
    DESCRIPTORS.get(ride_type as usize).unwrap_or(&NULL_DESCRIPTOR)
}

pub fn is_valid(ride_type: RideType) -> bool {
    (ride_type as usize) < DESCRIPTORS.len()
}

/// Native operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RideMode {
    #[default]
    Normal,
    ContinuousCircuit,
    ReverseInclineLaunchedShuttle,
    /// Launch that passes back through the station between laps
    PoweredLaunchPassthrough,
    Shuttle,
    BoatHire,
    UpwardLaunch,
    RotatingLift,
    StationToStation,
    SingleRidePerAdmission,
    UnlimitedRidesPerAdmission,
    Maze,
    Race,
    Dodgems,
    Swing,
    ShopStall,
    Rotation,
    ForwardRotation,
    BackwardRotation,
    FilmAvengingAviators,
    MouseTails3DFilm,
    SpaceRings,
    Beginners,
    LimPoweredLaunch,
    FilmThrillRiders,
    StormChasers3DFilm,
    SpaceRaiders3DFilm,
    Intense,
    Berserk,
    HauntedHouse,
    Circus,
    DownwardLaunch,
    CrookedHouse,
    FreefallDrop,
    ContinuousCircuitBlockSectioned,
    /// Launch whose trains never pass back through the station
    PoweredLaunch,
    PoweredLaunchBlockSectioned,
}

impl RideMode {
    /// Native mode for a legacy mode byte. The legacy powered launch never
    /// passed through the station, so it maps onto `PoweredLaunch`.
    pub fn from_legacy(mode: u8) -> Self {
        use RideMode::*;
        match mode {
            0 => Normal,
            1 => ContinuousCircuit,
            2 => ReverseInclineLaunchedShuttle,
            3 => PoweredLaunch,
            4 => Shuttle,
            5 => BoatHire,
            6 => UpwardLaunch,
            7 => RotatingLift,
            8 => StationToStation,
            9 => SingleRidePerAdmission,
            10 => UnlimitedRidesPerAdmission,
            11 => Maze,
            12 => Race,
            13 => Dodgems,
            14 => Swing,
            15 => ShopStall,
            16 => Rotation,
            17 => ForwardRotation,
            18 => BackwardRotation,
            19 => FilmAvengingAviators,
            20 => MouseTails3DFilm,
            21 => SpaceRings,
            22 => Beginners,
            23 => LimPoweredLaunch,
            24 => FilmThrillRiders,
            25 => StormChasers3DFilm,
            26 => SpaceRaiders3DFilm,
            27 => Intense,
            28 => Berserk,
            29 => HauntedHouse,
            30 => Circus,
            31 => DownwardLaunch,
            32 => CrookedHouse,
            33 => FreefallDrop,
            34 => ContinuousCircuitBlockSectioned,
            35 => PoweredLaunchPassthrough,
            36 => PoweredLaunchBlockSectioned,
            _ => Normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_lookup() {
        let mgr = descriptor(legacy::MERRY_GO_ROUND as RideType);
        assert_eq!(mgr.name, "Merry-Go-Round");
        assert_eq!(mgr.default_music, music::FAIRGROUND_ORGAN);
        assert!(mgr.has(RideTypeFlags::FLAT_RIDE));

        assert!(descriptor(legacy::HEDGE_MAZE as RideType).has(RideTypeFlags::IS_MAZE));
        assert!(descriptor(legacy::TOILETS as RideType).has(RideTypeFlags::IS_SHOP));
        assert!(!descriptor(legacy::GHOST_TRAIN as RideType).has(RideTypeFlags::FLAT_RIDE));
        assert_eq!(descriptor(RIDE_TYPE_NULL).flags, RideTypeFlags::empty());
    }

    #[test]
    fn test_powered_launch_skips_station() {
        assert_eq!(RideMode::from_legacy(3), RideMode::PoweredLaunch);
        assert_ne!(RideMode::from_legacy(3), RideMode::PoweredLaunchPassthrough);
        assert_eq!(RideMode::from_legacy(1), RideMode::ContinuousCircuit);
        assert_eq!(RideMode::from_legacy(200), RideMode::Normal);
    }
}
