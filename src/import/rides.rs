use rct1_tables::{rides as legacy, to_native_colour, CopyColour, CopyDescriptor};
use tracing::{debug, warn};

use super::context::ImportContext;
use crate::codec::ride::{LegacyRide, LegacyRideMeasurement, LegacyVehicleColour, DEPART_PLAY_MUSIC};
use crate::codec::{Edition, TileXY, S4};
use crate::objects::{ObjectEntryIndex, ObjectManager, ObjectType};
use crate::state::ride::{
    Ride, RideId, RideLifecycle, RideMeasurement, RideName, RideStatus, Station, TileCoordsXY, TileCoordsXYZD,
    TrackColour, VehicleColour, MAX_VEHICLES_PER_RIDE, NUM_COLOUR_SCHEMES,
};
use crate::state::ride_type::{RideMode, RideTypeFlags};
use crate::state::world::Park;

pub const MAZE_WALL_TYPE_BRICK: u8 = 0;
pub const MAZE_WALL_TYPE_HEDGE: u8 = 1;
pub const MAZE_WALL_TYPE_WOOD: u8 = 3;

const DROPS_MASK: u8 = 0x3F;
const HELICES_MASK: u8 = 0x1F;
const SPECIAL_FLAGS_MASK: u8 = 0xE0;

fn tile_xy(xy: TileXY) -> Option<TileCoordsXY> {
    (!xy.is_null()).then_some(TileCoordsXY { x: xy.x, y: xy.y })
}

fn saturate_i16(v: i32) -> i16 {
    v.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

/// Build a native vehicle colour from a legacy body/trim pair.
pub fn vehicle_colour(desc: CopyDescriptor, src: LegacyVehicleColour) -> VehicleColour {
    let pick = |c: CopyColour| match c {
        CopyColour::Body => to_native_colour(src.body),
        CopyColour::Trim => to_native_colour(src.trim),
        CopyColour::Fixed(native) => native,
    };
    VehicleColour {
        body: pick(desc.body),
        trim: pick(desc.trim),
        tertiary: pick(desc.tertiary),
    }
}

/// Entry index the legacy ride was registered under during discovery
pub fn ride_subtype(ctx: &ImportContext, src: &LegacyRide) -> Option<ObjectEntryIndex> {
    if rct1_tables::ride_type_uses_vehicles(src.ride_type) {
        ctx.vehicle_type_map.index(src.vehicle_type as usize)
    } else {
        ctx.ride_type_map.index(src.ride_type as usize)
    }
}

pub fn import_rides(s4: &S4, ctx: &ImportContext, objects: &dyn ObjectManager, park: &mut Park) {
    for (index, src) in s4.rides.iter().enumerate() {
        if src.is_null() {
            continue;
        }
        let Some(slot) = park.rides.get_mut(index) else {
            break;
        };
        *slot = Some(import_ride(s4, ctx, objects, index as RideId, src));
    }
    debug!(rides = park.rides().count(), "imported rides");
}

pub fn import_ride(s4: &S4, ctx: &ImportContext, objects: &dyn ObjectManager, id: RideId, src: &LegacyRide) -> Ride {
    let mut dst = Ride::new(id);

    let subtype = ride_subtype(ctx, src);
    let ride_type = subtype.and_then(|idx| objects.get_loaded_object(ObjectType::Ride, idx)?.ride_type());
    match (subtype, ride_type) {
        (Some(subtype), Some(ride_type)) => {
            dst.subtype = Some(subtype);
            dst.ride_type = ride_type;
        }
        _ => {
            warn!(ride = id, legacy_type = src.ride_type, vehicle_type = src.vehicle_type, "discarding ride without a loaded object");
            dst.set_null_type();
        }
    }

    match s4.user_string(src.name) {
        Some(name) => dst.name.custom = Some(name.to_string()),
        None => dst.name = RideName { custom: None, default_number: src.name_argument },
    }

    dst.status = RideStatus::from_legacy(src.status);
    dst.mode = RideMode::from_legacy(src.operating_mode);
    dst.depart_flags = src.depart_flags;

    dst.lifecycle_flags = RideLifecycle::from_bits_truncate(src.lifecycle_flags as u32);
    if ctx.edition == Edition::Classic {
        dst.lifecycle_flags.remove(RideLifecycle::CLASSIC_INVALID);
    }
    if rct1_tables::vehicle_type_is_reversed(src.vehicle_type) {
        dst.lifecycle_flags.insert(RideLifecycle::REVERSED_TRAINS);
    }

    import_music(ctx.edition, src, &mut dst);
    import_stations(src, &mut dst);
    import_colours(ctx.edition, src, &mut dst);

    dst.overall_view = tile_xy(src.overall_view);
    for (dst_vehicle, &sprite) in dst.vehicles.iter_mut().zip(src.vehicles.iter()) {
        *dst_vehicle = (sprite != 0xFFFF).then_some(sprite);
    }
    dst.num_stations = src.num_stations;
    dst.num_trains = src.num_trains;
    dst.num_cars_per_train = src.num_cars_per_train;
    dst.proposed_num_trains = src.proposed_num_trains;
    dst.proposed_num_cars_per_train = src.proposed_num_cars;
    dst.max_trains = src.max_trains;
    dst.min_cars_per_train = src.min_max_cars_per_train >> 4;
    dst.max_cars_per_train = src.min_max_cars_per_train & 0x0F;
    dst.min_waiting_time = src.min_waiting_time;
    dst.max_waiting_time = src.max_waiting_time;
    dst.operation_option = src.operation_option;
    dst.boat_hire_return_direction = src.boat_hire_return_direction;
    dst.boat_hire_return_position = tile_xy(src.boat_hire_return_position).unwrap_or_default();

    import_stats(src, &mut dst);
    import_economics(src, &mut dst);
    dst
}

fn import_music(edition: Edition, src: &LegacyRide, dst: &mut Ride) {
    if edition != Edition::Classic {
        dst.music = src.music;
        return;
    }
    dst.music = dst.type_descriptor().default_music;
    // The merry-go-round and dodgems stored their music toggle in a depart flag
    if matches!(src.ride_type, legacy::MERRY_GO_ROUND | legacy::DODGEMS) && src.depart_flags & DEPART_PLAY_MUSIC != 0 {
        dst.depart_flags &= !DEPART_PLAY_MUSIC;
        dst.lifecycle_flags.insert(RideLifecycle::MUSIC);
    }
}

fn import_stations(src: &LegacyRide, dst: &mut Ride) {
    for (i, station) in dst.stations.iter_mut().enumerate().take(src.station_starts.len()) {
        let height = src.station_heights[i];
        let place = |xy: TileXY| {
            (!xy.is_null()).then_some(TileCoordsXYZD { x: xy.x, y: xy.y, z: height, direction: 0 })
        };
        *station = Station {
            start: tile_xy(src.station_starts[i]),
            height,
            length: src.station_lengths[i],
            depart: src.station_depart[i],
            entrance: place(src.entrances[i]),
            exit: place(src.exits[i]),
            last_peep_in_queue: (src.last_peep_in_queue[i] != 0xFFFF).then_some(src.last_peep_in_queue[i]),
            queue_length: src.num_peeps_in_queue[i] as u16,
            queue_time: src.queue_time[i],
        };
    }
}

fn import_colours(edition: Edition, src: &LegacyRide, dst: &mut Ride) {
    if edition == Edition::Classic {
        let mut main = to_native_colour(src.track_primary_colour);
        match src.ride_type {
            legacy::BALLOON_STALL => main = rct1_tables::colours::native::LIGHT_BLUE,
            legacy::RIVER_RAPIDS => main = rct1_tables::colours::native::WHITE,
            _ => {}
        }
        dst.track_colours[0] = TrackColour {
            main,
            additional: to_native_colour(src.track_secondary_colour),
            supports: to_native_colour(src.track_support_colour),
        };
    } else {
        for i in 0..NUM_COLOUR_SCHEMES {
            dst.track_colours[i] = TrackColour {
                main: to_native_colour(src.track_colour_main[i]),
                additional: to_native_colour(src.track_colour_additional[i]),
                supports: to_native_colour(src.track_colour_supports[i]),
            };
        }
    }

    dst.entrance_style = None;
    if dst.type_descriptor().has(RideTypeFlags::HAS_ENTRANCE_EXIT) {
        dst.entrance_style = Some(match edition {
            Edition::Classic => 0,
            _ => src.entrance_style,
        });
    }

    if edition == Edition::LoopyLandscapes && src.ride_type == legacy::HEDGE_MAZE {
        let wall = src.track_colour_supports[0];
        dst.maze_wall_type = if wall > MAZE_WALL_TYPE_WOOD { MAZE_WALL_TYPE_HEDGE } else { wall };
        dst.track_colours[0].supports = dst.maze_wall_type;
    }

    if edition < Edition::LoopyLandscapes && dst.type_descriptor().has(RideTypeFlags::VEHICLE_IS_INTEGRAL) {
        for (i, colour) in dst.vehicle_colours.iter_mut().enumerate().take(NUM_COLOUR_SCHEMES) {
            let track = dst.track_colours[i];
            *colour = VehicleColour { body: track.main, trim: track.additional, tertiary: track.supports };
        }
        return;
    }

    let desc = rct1_tables::colour_copy_descriptor(src.vehicle_type);
    dst.colour_scheme_type = match edition {
        Edition::Classic => 0,
        _ => src.colour_scheme,
    };
    for (i, colour) in dst.vehicle_colours.iter_mut().enumerate().take(MAX_VEHICLES_PER_RIDE) {
        let legacy_index = match edition {
            Edition::Classic => 0,
            _ => i.min(src.vehicle_colours.len() - 1),
        };
        *colour = vehicle_colour(desc, src.vehicle_colours[legacy_index]);
    }
}

fn import_stats(src: &LegacyRide, dst: &mut Ride) {
    let stats = &mut dst.stats;
    stats.excitement = src.excitement;
    stats.intensity = src.intensity;
    stats.nausea = src.nausea;
    stats.value = src.value;
    stats.max_speed = src.max_speed;
    stats.average_speed = src.average_speed;
    stats.lengths = src.lengths;
    stats.times = src.times;
    stats.max_positive_vertical_g = saturate_i16(src.max_positive_vertical_g);
    stats.max_negative_vertical_g = saturate_i16(src.max_negative_vertical_g);
    stats.max_lateral_g = saturate_i16(src.max_lateral_g);
    stats.turn_count_default = src.turn_count_default;
    stats.turn_count_banked = src.turn_count_banked;
    stats.turn_count_sloped = src.turn_count_sloped;
    stats.inversions = src.inversions;
    stats.drops = src.drops & DROPS_MASK;
    stats.powered_lifts = src.drops >> 6;
    stats.helices = src.special_track_elements & HELICES_MASK;
    stats.special_track_flags = src.special_track_elements & SPECIAL_FLAGS_MASK;
    stats.start_drop_height = src.start_drop_height;
    stats.highest_drop_height = src.highest_drop_height;
    stats.sheltered_length = src.sheltered_length;
    stats.num_sheltered_sections = src.num_sheltered_sections;
}

fn import_economics(src: &LegacyRide, dst: &mut Ride) {
    let eco = &mut dst.economics;
    eco.price = [src.price, src.price_secondary];
    eco.total_customers = src.total_customers;
    eco.total_profit = src.total_profit;
    eco.income_per_hour = src.income_per_hour;
    eco.profit = src.profit;
    eco.upkeep_cost = src.upkeep_cost;
    eco.popularity = src.popularity;
    eco.satisfaction = src.satisfaction;
    eco.num_customers = src.num_customers;
    eco.num_riders = src.num_riders;
    eco.build_date = src.build_date;

    let rel = &mut dst.reliability;
    rel.reliability = src.reliability;
    rel.unreliability_factor = src.unreliability_factor;
    rel.downtime = src.downtime;
    rel.inspection_interval = src.inspection_interval;
    rel.last_inspection = src.last_inspection;
    rel.breakdown_reason = src.breakdown_reason;
    rel.mechanic_status = src.mechanic_status;
    rel.mechanic = (src.mechanic != 0xFFFF).then_some(src.mechanic);
}

/// Distances and velocities were stored at double resolution.
pub fn import_measurement(src: &LegacyRideMeasurement) -> RideMeasurement {
    RideMeasurement {
        flags: src.flags,
        last_use_tick: src.last_use_tick,
        num_items: src.num_items,
        current_item: src.current_item,
        vehicle_index: src.vehicle_index,
        current_station: src.current_station,
        vertical: src.vertical.clone(),
        lateral: src.lateral.clone(),
        velocity: src.velocity.iter().map(|v| v / 2).collect(),
        altitude: src.altitude.iter().map(|a| a / 2).collect(),
    }
}

pub fn import_ride_measurements(s4: &S4, park: &mut Park) {
    for src in &s4.ride_measurements {
        if src.ride_index == 0xFF {
            continue;
        }
        match park.ride_mut(src.ride_index as RideId) {
            Some(ride) => ride.measurement = Some(import_measurement(src)),
            None => debug!(ride = src.ride_index, "measurement for a missing ride"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ride::MODE_POWERED_LAUNCH;
    use crate::import::discovery;
    use crate::objects::{ObjectList, ObjectRepository};
    use crate::state::ride_type::RideType;
    use rct1_tables::{colours::native, vehicles};

    fn setup(edition: Edition, src: &LegacyRide) -> (ImportContext, ObjectRepository) {
        let mut s4 = S4::new_blank();
        s4.rides[0] = src.clone();
        let mut ctx = ImportContext::new(edition);
        discovery::scan_rides(&s4, &mut ctx);
        let mut repo = ObjectRepository::accept_all();
        let mut list = ObjectList::new();
        list.extend(ObjectType::Ride, ctx.rides.iter());
        repo.load_objects(&list);
        (ctx, repo)
    }

    fn coaster() -> LegacyRide {
        LegacyRide {
            ride_type: legacy::STEEL_ROLLER_COASTER,
            vehicle_type: vehicles::STEEL_ROLLER_COASTER_TRAIN_BACKWARDS,
            ..LegacyRide::default()
        }
    }

    #[test]
    fn test_subtype_resolves_or_nulls() {
        let src = coaster();
        let (ctx, repo) = setup(Edition::LoopyLandscapes, &src);
        let ride = import_ride(&S4::new_blank(), &ctx, &repo, 0, &src);
        assert_eq!(ride.subtype, Some(0));
        assert_eq!(ride.ride_type, legacy::STEEL_ROLLER_COASTER as RideType);
        assert!(ride.lifecycle_flags.contains(RideLifecycle::REVERSED_TRAINS));

        let empty = ObjectRepository::new();
        let ride = import_ride(&S4::new_blank(), &ctx, &empty, 0, &src);
        assert!(ride.is_null_type());
        assert!(ride.subtype.is_none());
    }

    #[test]
    fn test_powered_launch_mode() {
        let src = LegacyRide { operating_mode: MODE_POWERED_LAUNCH, ..coaster() };
        let (ctx, repo) = setup(Edition::AddedAttractions, &src);
        let ride = import_ride(&S4::new_blank(), &ctx, &repo, 0, &src);
        assert_eq!(ride.mode, RideMode::PoweredLaunch);
    }

    #[test]
    fn test_classic_music_flag() {
        let src = LegacyRide {
            ride_type: legacy::MERRY_GO_ROUND,
            depart_flags: DEPART_PLAY_MUSIC | 1,
            lifecycle_flags: RideLifecycle::INDESTRUCTIBLE.bits() as u16,
            ..LegacyRide::default()
        };
        let (ctx, repo) = setup(Edition::Classic, &src);
        let ride = import_ride(&S4::new_blank(), &ctx, &repo, 0, &src);
        assert_eq!(ride.depart_flags, 1);
        assert!(ride.lifecycle_flags.contains(RideLifecycle::MUSIC));
        assert!(!ride.lifecycle_flags.contains(RideLifecycle::INDESTRUCTIBLE));
        assert_eq!(ride.music, crate::state::ride_type::music::FAIRGROUND_ORGAN);
    }

    #[test]
    fn test_classic_colour_exceptions() {
        let src = LegacyRide {
            ride_type: legacy::BALLOON_STALL,
            track_primary_colour: 1,
            ..LegacyRide::default()
        };
        let (ctx, repo) = setup(Edition::Classic, &src);
        let ride = import_ride(&S4::new_blank(), &ctx, &repo, 0, &src);
        assert_eq!(ride.track_colours[0].main, native::LIGHT_BLUE);
    }

    #[test]
    fn test_body_colour_copied_through_descriptor() {
        let mut src = coaster();
        src.vehicle_colours[0] = LegacyVehicleColour { body: 5, trim: 9 };
        let (ctx, repo) = setup(Edition::LoopyLandscapes, &src);
        let ride = import_ride(&S4::new_blank(), &ctx, &repo, 0, &src);
        assert_eq!(ride.vehicle_colours[0].body, to_native_colour(5));
        assert_eq!(ride.vehicle_colours[0].trim, to_native_colour(9));
    }

    #[test]
    fn test_packed_fields_split() {
        let src = LegacyRide { drops: 0b1100_0101, special_track_elements: 0b1010_0011, ..coaster() };
        let (ctx, repo) = setup(Edition::LoopyLandscapes, &src);
        let ride = import_ride(&S4::new_blank(), &ctx, &repo, 0, &src);
        assert_eq!(ride.stats.drops, 5);
        assert_eq!(ride.stats.powered_lifts, 3);
        assert_eq!(ride.stats.helices, 3);
        assert_eq!(ride.stats.special_track_flags, 0b1010_0000);
    }

    #[test]
    fn test_maze_wall_range_check() {
        let mut src = LegacyRide { ride_type: legacy::HEDGE_MAZE, ..LegacyRide::default() };
        src.track_colour_supports[0] = 9;
        let (ctx, repo) = setup(Edition::LoopyLandscapes, &src);
        let ride = import_ride(&S4::new_blank(), &ctx, &repo, 0, &src);
        assert_eq!(ride.maze_wall_type, MAZE_WALL_TYPE_HEDGE);

        src.track_colour_supports[0] = MAZE_WALL_TYPE_BRICK;
        let ride = import_ride(&S4::new_blank(), &ctx, &repo, 0, &src);
        assert_eq!(ride.maze_wall_type, MAZE_WALL_TYPE_BRICK);
    }

    #[test]
    fn test_custom_name_from_user_string() {
        let mut s4 = S4::new_blank();
        s4.string_table[3] = "Big One".into();
        let src = LegacyRide { name: crate::codec::USER_STRING_START + 3, ..coaster() };
        let (ctx, repo) = setup(Edition::LoopyLandscapes, &src);
        let ride = import_ride(&s4, &ctx, &repo, 0, &src);
        assert_eq!(ride.name.custom.as_deref(), Some("Big One"));
    }

    #[test]
    fn test_measurement_halved() {
        let src = LegacyRideMeasurement {
            ride_index: 0,
            velocity: vec![10, 7],
            altitude: vec![4],
            ..LegacyRideMeasurement::default()
        };
        let m = import_measurement(&src);
        assert_eq!(m.velocity, vec![5, 3]);
        assert_eq!(m.altitude, vec![2]);
    }
}
