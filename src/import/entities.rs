use rct1_tables::to_native_colour;
use tracing::{debug, warn};

use super::rides::vehicle_colour;
use crate::codec::entity::{
    EntityHeader, LegacyEntity, LegacyEntityBody, LegacyFountain, LegacyMisc, LegacyPeep, LegacyThought,
    LegacyVehicle, PEEP_TYPE_STAFF, THOUGHT_ITEM_NONE,
};
use crate::codec::ride::LegacyVehicleColour;
use crate::codec::s4::PATROL_AREA_SIZE;
use crate::codec::S4;
use crate::state::entity::{
    EntityBase, EntityId, EntityKind, Guest, JumpingFountain, Peep, Staff, StaffType, Thought, Vehicle,
};
use crate::state::patrol::PatrolArea;
use crate::state::ride::RideId;
use crate::state::world::Park;

const COORDS_Z_STEP: i32 = 8;
const ENTITY_NULL: u16 = 0xFFFF;
const RIDE_NULL: u8 = 0xFF;
/// Tiles covered by one patrol bit along each axis
const PATROL_CELL_TILES: usize = 4;

fn entity_ref(id: u16) -> Option<EntityId> {
    (id != ENTITY_NULL).then_some(id)
}

fn ride_ref(id: u8) -> Option<RideId> {
    (id != RIDE_NULL).then_some(id as RideId)
}

fn base_of(header: &EntityHeader) -> EntityBase {
    EntityBase {
        x: header.x as i32,
        y: header.y as i32,
        z: header.z as i32,
        sprite_direction: header.sprite_direction,
        sprite_width: header.sprite_width,
        sprite_height_negative: header.sprite_height_negative,
        sprite_height_positive: header.sprite_height_positive,
    }
}

pub fn import_entities(s4: &S4, park: &mut Park) {
    let mut count = 0;
    for (index, src) in s4.entities.iter().enumerate() {
        let Some(kind) = convert_entity(s4, park, src) else {
            continue;
        };
        let id = index as EntityId;
        if park.entities.create_entity_at(id, base_of(&src.header), kind).is_none() {
            warn!(id, "no room for entity");
            continue;
        }
        count += 1;
    }
    debug!(entities = count, "imported entities");
}

/// Picks the native entity type for a legacy slot. `None` for empty slots.
pub fn convert_entity(s4: &S4, park: &Park, src: &LegacyEntity) -> Option<EntityKind> {
    let kind = match &src.body {
        LegacyEntityBody::Null => return None,
        LegacyEntityBody::Vehicle(vehicle) => EntityKind::Vehicle(Box::new(convert_vehicle(s4, park, vehicle))),
        LegacyEntityBody::Peep(peep) if peep.peep_type == PEEP_TYPE_STAFF => {
            EntityKind::Staff(Box::new(convert_staff(s4, peep)?))
        }
        LegacyEntityBody::Peep(peep) => EntityKind::Guest(Box::new(convert_guest(s4, peep))),
        LegacyEntityBody::Litter(litter) => EntityKind::Litter {
            litter_type: litter.litter_type,
            creation_tick: litter.creation_tick,
        },
        LegacyEntityBody::Misc(misc) => convert_misc(misc)?,
    };
    Some(kind)
}

fn convert_vehicle(s4: &S4, park: &Park, src: &LegacyVehicle) -> Vehicle {
    let legacy_ride = s4.rides.get(src.ride as usize);
    let vehicle_type = legacy_ride.map(|r| r.vehicle_type).unwrap_or(0);
    let descriptor = rct1_tables::colour_copy_descriptor(vehicle_type);

    Vehicle {
        ride: src.ride as RideId,
        ride_subtype: park.ride(src.ride as RideId).and_then(|r| r.subtype),
        colours: vehicle_colour(descriptor, LegacyVehicleColour { body: src.body_colour, trim: src.trim_colour }),
        is_reversed: legacy_ride.is_some() && rct1_tables::vehicle_type_is_reversed(vehicle_type),
        pitch: src.vehicle_sprite_type,
        bank_rotation: src.bank_rotation,
        remaining_distance: src.remaining_distance,
        velocity: src.velocity,
        acceleration: src.acceleration,
        track_progress: src.track_progress,
        track_type: src.track_type_and_direction >> 2,
        track_direction: (src.track_type_and_direction & 0x03) as u8,
        track_location: (src.track_x as i32, src.track_y as i32, src.track_z as i32),
        next_vehicle_on_train: entity_ref(src.next_vehicle_on_train),
        prev_vehicle_on_ride: entity_ref(src.prev_vehicle_on_ride),
        next_vehicle_on_ride: entity_ref(src.next_vehicle_on_ride),
        mass: src.mass,
        update_flags: src.update_flags,
        swing_sprite: src.swing_sprite,
        current_station: src.current_station,
        swinging_car_var_0: src.swinging_car_var_0,
        status: src.status,
        sub_state: src.sub_state,
        peeps: src.peep.iter().map(|&p| entity_ref(p)).collect(),
        peep_tshirt_colours: src.peep_tshirt_colours.iter().map(|&c| to_native_colour(c)).collect(),
        num_seats: src.num_seats,
        num_peeps: src.num_peeps,
        next_free_seat: src.next_free_seat,
        restraints_position: src.restraints_position,
        spin_speed: src.spin_speed,
        spin_sprite: src.spin_sprite,
        time_waiting: src.time_waiting,
        speed: src.speed,
        powered_acceleration: src.powered_acceleration,
        animation_frame: src.animation_frame,
        scream_sound_id: src.scream_sound_id,
        num_laps: src.num_laps,
        brake_speed: src.brake_speed,
        lost_time_out: src.lost_time_out,
        vertical_drop_countdown: src.vertical_drop_countdown,
    }
}

fn convert_thought(src: &LegacyThought) -> Thought {
    Thought {
        thought_type: src.thought_type,
        item: (src.item != THOUGHT_ITEM_NONE).then_some(src.item as u16),
        freshness: src.freshness,
        fresh_timeout: src.fresh_timeout,
    }
}

/// Fields guests and staff share, including needs, money and thoughts
fn convert_peep(s4: &S4, src: &LegacyPeep) -> Peep {
    let mut thoughts = [Thought::default(); crate::state::entity::PEEP_MAX_THOUGHTS];
    for (dst, src) in thoughts.iter_mut().zip(src.thoughts.iter()) {
        *dst = convert_thought(src);
    }
    Peep {
        name: s4.user_string(src.name_string_idx).map(str::to_string),
        id: src.id,
        state: src.state,
        sub_state: src.sub_state,
        animation_group: src.sprite_type,
        next_loc: (src.next_x as i32, src.next_y as i32, src.next_z as i32 * COORDS_Z_STEP),
        next_flags: src.next_flags,
        outside_of_park: src.outside_of_park != 0,
        destination: (src.destination_x as i32, src.destination_y as i32),
        destination_tolerance: src.destination_tolerance,
        tshirt_colour: to_native_colour(src.tshirt_colour),
        trousers_colour: to_native_colour(src.trousers_colour),
        energy: src.energy,
        energy_target: src.energy_target,
        mass: src.mass,
        action: src.action,
        action_frame: src.action_frame,
        direction: src.direction,
        interaction_ride: ride_ref(src.interaction_ride_index),
        current_ride: ride_ref(src.current_ride),
        current_ride_station: src.current_ride_station,
        current_train: src.current_train,
        current_car: src.current_car,
        current_seat: src.current_seat,
        pathfind_goal: (src.pathfind_goal[0], src.pathfind_goal[1], src.pathfind_goal[2], src.pathfind_goal[3]),
        peep_flags: src.peep_flags,
        happiness: src.happiness,
        happiness_target: src.happiness_target,
        nausea: src.nausea,
        nausea_target: src.nausea_target,
        hunger: src.hunger,
        thirst: src.thirst,
        toilet: src.toilet,
        cash_in_pocket: src.cash_in_pocket,
        cash_spent: src.cash_spent,
        thoughts,
    }
}

/// Rides a guest has been on, from the legacy 256-bit set
fn rides_been_on(bits: &[u8; 32]) -> Vec<RideId> {
    bits.iter()
        .enumerate()
        .flat_map(|(i, &byte)| (0..8).filter(move |j| byte & (1 << j) != 0).map(move |j| (i * 8 + j) as RideId))
        .collect()
}

fn convert_guest(s4: &S4, src: &LegacyPeep) -> Guest {
    Guest {
        peep: convert_peep(s4, src),
        time_to_consume: src.time_to_consume,
        intensity_min: src.intensity & 0x0F,
        intensity_max: src.intensity >> 4,
        nausea_tolerance: src.nausea_tolerance,
        park_entry_time: src.park_entry_time,
        paid_to_enter: src.paid_to_enter as i32,
        paid_on_rides: src.paid_on_rides as i32,
        paid_on_food: src.paid_on_food as i32,
        paid_on_souvenirs: src.paid_on_souvenirs as i32,
        amount_of_food: src.no_of_food,
        amount_of_drinks: src.no_of_drinks,
        amount_of_souvenirs: src.no_of_souvenirs,
        rides_been_on: rides_been_on(&src.rides_been_on),
        previous_ride: ride_ref(src.previous_ride),
        previous_ride_time_out: src.previous_ride_time_out,
        guest_heading_to_ride: ride_ref(src.guest_heading_to_ride_id),
        lost_countdown: src.peep_is_lost_countdown,
        litter_count: src.litter_count,
        time_on_ride: src.time_on_ride,
        disgusting_count: src.disgusting_count,
        vandalism_seen: src.vandalism_seen,
        voucher_type: src.voucher_type,
        voucher_arguments: src.voucher_arguments,
        surroundings_thought_timeout: src.surroundings_thought_timeout,
        angriness: src.angriness,
        time_lost: src.time_lost,
        days_in_queue: src.days_in_queue,
        balloon_colour: to_native_colour(src.balloon_colour),
        umbrella_colour: to_native_colour(src.umbrella_colour),
        hat_colour: to_native_colour(src.hat_colour),
        favourite_ride: ride_ref(src.favourite_ride),
        favourite_ride_rating: src.favourite_ride_rating,
        item_flags: src.item_standard_flags as u64,
        time_in_queue: src.time_in_queue,
    }
}

fn convert_staff(s4: &S4, src: &LegacyPeep) -> Option<Staff> {
    let Some(staff_type) = StaffType::from_legacy(src.staff_type) else {
        warn!(staff_type = src.staff_type, "skipping staff member of unknown type");
        return None;
    };
    let patrol_area = s4
        .patrol_areas
        .get(src.staff_id as usize)
        .map(decode_patrol_area)
        .filter(|area| !area.is_empty());
    Some(Staff {
        peep: convert_peep(s4, src),
        staff_type,
        staff_id: src.staff_id,
        orders: src.staff_orders,
        costume: src.sprite_type,
        // The legacy game kept work statistics in the guest spending fields
        lawns_mown: src.paid_to_enter as u16 as u32,
        gardens_watered: src.paid_on_rides as u16 as u32,
        litter_swept: src.paid_on_food as u16 as u32,
        bins_emptied: src.paid_on_souvenirs as u16 as u32,
        patrol_area,
    })
}

/// Each bit covers a 4x4 tile cell. The bit position packs the cell's
/// x in its low 5 bits and y in the next 5.
pub fn decode_patrol_area(bits: &[u8; PATROL_AREA_SIZE]) -> PatrolArea {
    let mut area = PatrolArea::new();
    for (i, &byte) in bits.iter().enumerate() {
        if byte == 0 {
            continue;
        }
        for j in 0..8 {
            if byte & (1 << j) == 0 {
                continue;
            }
            let val = j | (i << 3);
            let x = (val & 0x1F) * PATROL_CELL_TILES;
            let y = ((val & 0x3E0) >> 5) * PATROL_CELL_TILES;
            area.mark_rect(x, y, x + PATROL_CELL_TILES - 1, y + PATROL_CELL_TILES - 1);
        }
    }
    area
}

fn convert_fountain(src: &LegacyFountain, is_snow: bool) -> JumpingFountain {
    JumpingFountain {
        is_snow,
        num_ticks_alive: src.num_ticks_alive,
        frame: src.frame,
        fountain_flags: src.fountain_flags,
        target: (src.target_x as i32, src.target_y as i32),
        iteration: src.iteration,
    }
}

fn convert_misc(src: &LegacyMisc) -> Option<EntityKind> {
    let kind = match *src {
        LegacyMisc::SteamParticle { time_to_move, frame } => EntityKind::SteamParticle { time_to_move, frame },
        LegacyMisc::MoneyEffect { move_delay, num_movements, value, offset_x, wiggle } => {
            EntityKind::MoneyEffect { move_delay, num_movements, value, offset_x, wiggle }
        }
        LegacyMisc::CrashedVehicleParticle { frame, time_to_live, colour, crashed_sprite_base, velocity, acceleration } => {
            EntityKind::CrashedVehicleParticle {
                frame,
                time_to_live,
                colours: (to_native_colour(colour[0]), to_native_colour(colour[1])),
                crashed_sprite_base,
                velocity: (velocity[0], velocity[1], velocity[2]),
                acceleration: (acceleration[0], acceleration[1], acceleration[2]),
            }
        }
        LegacyMisc::ExplosionCloud { frame } => EntityKind::ExplosionCloud { frame },
        LegacyMisc::CrashSplash { frame } => EntityKind::CrashSplash { frame },
        LegacyMisc::ExplosionFlare { frame } => EntityKind::ExplosionFlare { frame },
        LegacyMisc::JumpingFountainWater(ref f) => EntityKind::JumpingFountain(convert_fountain(f, false)),
        LegacyMisc::JumpingFountainSnow(ref f) => EntityKind::JumpingFountain(convert_fountain(f, true)),
        LegacyMisc::Balloon { popped, time_to_move, frame, colour } => EntityKind::Balloon {
            popped: popped != 0,
            time_to_move,
            frame,
            colour: to_native_colour(colour),
        },
        LegacyMisc::Duck { frame, target_x, target_y, state } => EntityKind::Duck {
            frame,
            target: (target_x as i32, target_y as i32),
            state,
        },
        LegacyMisc::Unknown(subtype) => {
            debug!(subtype, "skipping unknown misc entity");
            return None;
        }
    };
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::entity::{IDENTIFIER_MISC, IDENTIFIER_PEEP, IDENTIFIER_VEHICLE, MISC_DUCK};
    use crate::codec::LegacyRide;
    use rct1_tables::{colours::native, rides, vehicles};

    #[test]
    fn test_patrol_cell_decode() {
        let mut bits = [0u8; PATROL_AREA_SIZE];
        // bit 1 of byte 4: val = 33, cell (1, 1)
        bits[4] = 0b10;
        let area = decode_patrol_area(&bits);
        assert_eq!(area.tile_count(), 16);
        assert!(area.contains(4, 4));
        assert!(area.contains(7, 7));
        assert!(!area.contains(8, 4));
        assert!(!area.contains(3, 4));
    }

    #[test]
    fn test_guest_and_staff_dispatch() {
        let mut s4 = S4::new_blank();
        let header = EntityHeader::new(IDENTIFIER_PEEP, 0, 100, 200, 16);
        s4.entities[3] = LegacyEntity::peep(
            header,
            LegacyPeep { rides_been_on: { let mut b = [0; 32]; b[1] = 0b100; b }, ..LegacyPeep::default() },
        );
        s4.entities[4] = LegacyEntity::peep(
            header,
            LegacyPeep {
                peep_type: PEEP_TYPE_STAFF,
                staff_type: 1,
                staff_id: 2,
                paid_to_enter: 12,
                paid_on_souvenirs: -1,
                ..LegacyPeep::default()
            },
        );
        let mut park = Park::new();
        import_entities(&s4, &mut park);

        let guest = park.entities.get(3).and_then(|e| e.as_guest()).unwrap();
        assert_eq!(guest.rides_been_on, vec![10]);
        assert_eq!(park.entities.get(3).unwrap().base.x, 100);

        let staff = park.entities.get(4).and_then(|e| e.as_staff()).unwrap();
        assert_eq!(staff.staff_type, StaffType::Mechanic);
        assert_eq!(staff.lawns_mown, 12);
        assert_eq!(staff.bins_emptied, 0xFFFF);
        assert!(staff.patrol_area.is_none());
    }

    #[test]
    fn test_staff_keep_needs_and_thoughts() {
        let mut s4 = S4::new_blank();
        let mut thoughts = [LegacyThought::default(); crate::codec::entity::PEEP_MAX_THOUGHTS];
        thoughts[0] = LegacyThought { thought_type: 7, item: 3, freshness: 2, fresh_timeout: 9 };
        s4.entities[1] = LegacyEntity::peep(
            EntityHeader::new(IDENTIFIER_PEEP, 0, 0, 0, 0),
            LegacyPeep {
                peep_type: PEEP_TYPE_STAFF,
                staff_type: 0,
                happiness: 180,
                hunger: 40,
                thirst: 50,
                cash_in_pocket: 300,
                thoughts,
                ..LegacyPeep::default()
            },
        );
        let mut park = Park::new();
        import_entities(&s4, &mut park);

        let staff = park.entities.get(1).and_then(|e| e.as_staff()).unwrap();
        assert_eq!(staff.peep.happiness, 180);
        assert_eq!(staff.peep.hunger, 40);
        assert_eq!(staff.peep.thirst, 50);
        assert_eq!(staff.peep.cash_in_pocket, 300);
        assert_eq!(staff.peep.thoughts[0], Thought { thought_type: 7, item: Some(3), freshness: 2, fresh_timeout: 9 });
        assert_eq!(staff.peep.thoughts[1].item, None);
    }

    #[test]
    fn test_vehicle_uses_ride_colours_and_reversal() {
        let mut s4 = S4::new_blank();
        s4.rides[2] = LegacyRide {
            ride_type: rides::STEEL_ROLLER_COASTER,
            vehicle_type: vehicles::STEEL_ROLLER_COASTER_TRAIN_BACKWARDS,
            ..LegacyRide::default()
        };
        s4.entities[0] = LegacyEntity::vehicle(
            EntityHeader::new(IDENTIFIER_VEHICLE, 0, 0, 0, 0),
            LegacyVehicle { ride: 2, body_colour: 3, trim_colour: 4, ..LegacyVehicle::default() },
        );
        let mut park = Park::new();
        import_entities(&s4, &mut park);
        let vehicle = park.entities.get(0).and_then(|e| e.as_vehicle()).unwrap();
        assert!(vehicle.is_reversed);
        assert_eq!(vehicle.colours.body, to_native_colour(3));
        assert_eq!(vehicle.ride, 2);
        assert_eq!(vehicle.peeps.len(), 32);
    }

    #[test]
    fn test_misc_entities() {
        let mut s4 = S4::new_blank();
        s4.entities[7] = LegacyEntity::misc(
            EntityHeader::new(IDENTIFIER_MISC, MISC_DUCK, 0, 0, 0),
            LegacyMisc::Duck { frame: 1, target_x: -5, target_y: 9, state: 2 },
        );
        s4.entities[8] = LegacyEntity::misc(
            EntityHeader::new(IDENTIFIER_MISC, 7, 0, 0, 0),
            LegacyMisc::Balloon { popped: 1, time_to_move: 0, frame: 0, colour: 0 },
        );
        s4.entities[9] = LegacyEntity::misc(EntityHeader::new(IDENTIFIER_MISC, 40, 0, 0, 0), LegacyMisc::Unknown(40));
        let mut park = Park::new();
        import_entities(&s4, &mut park);
        assert_eq!(park.entities.len(), 2);
        assert!(matches!(park.entities.get(7).unwrap().kind, EntityKind::Duck { target: (-5, 9), .. }));
        assert!(matches!(
            park.entities.get(8).unwrap().kind,
            EntityKind::Balloon { popped: true, colour: native::BLACK, .. }
        ));
    }
}
