use super::{BinaryReader, BinaryWriter};
use crate::error::Result;

pub const MAX_ENTITIES: usize = 5000;
pub const ENTITY_SIZE: usize = 0x100;
const HEADER_SIZE: usize = 0x20;

pub const IDENTIFIER_VEHICLE: u8 = 0;
pub const IDENTIFIER_PEEP: u8 = 1;
pub const IDENTIFIER_MISC: u8 = 2;
pub const IDENTIFIER_LITTER: u8 = 3;
pub const IDENTIFIER_NULL: u8 = 0xFF;

pub const MISC_STEAM_PARTICLE: u8 = 0;
pub const MISC_MONEY_EFFECT: u8 = 1;
pub const MISC_CRASHED_VEHICLE_PARTICLE: u8 = 2;
pub const MISC_EXPLOSION_CLOUD: u8 = 3;
pub const MISC_CRASH_SPLASH: u8 = 4;
pub const MISC_EXPLOSION_FLARE: u8 = 5;
pub const MISC_JUMPING_FOUNTAIN_WATER: u8 = 6;
pub const MISC_BALLOON: u8 = 7;
pub const MISC_DUCK: u8 = 8;
pub const MISC_JUMPING_FOUNTAIN_SNOW: u8 = 9;

pub const PEEP_TYPE_GUEST: u8 = 0;
pub const PEEP_TYPE_STAFF: u8 = 1;

pub const PEEP_MAX_THOUGHTS: usize = 5;
pub const THOUGHT_ITEM_NONE: u8 = 0xFF;

/// Fields every slot shares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EntityHeader {
    pub identifier: u8,
    pub subtype: u8,
    pub next: u16,
    pub previous: u16,
    pub linked_list_offset: u8,
    pub sprite_height_negative: u8,
    pub sprite_index: u16,
    pub flags: u16,
    pub x: i16,
    pub y: i16,
    pub z: i16,
    pub sprite_width: u8,
    pub sprite_height_positive: u8,
    pub sprite_left: i16,
    pub sprite_top: i16,
    pub sprite_right: i16,
    pub sprite_bottom: i16,
    pub sprite_direction: u8,
}

impl EntityHeader {
    pub fn new(identifier: u8, subtype: u8, x: i16, y: i16, z: i16) -> Self {
        Self { identifier, subtype, x, y, z, ..Default::default() }
    }

    fn read(r: &mut BinaryReader) -> Result<Self> {
        let header = Self {
            identifier: r.read_u8()?,
            subtype: r.read_u8()?,
            next: r.read_u16_le()?,
            previous: r.read_u16_le()?,
            linked_list_offset: r.read_u8()?,
            sprite_height_negative: r.read_u8()?,
            sprite_index: r.read_u16_le()?,
            flags: r.read_u16_le()?,
            x: r.read_i16_le()?,
            y: r.read_i16_le()?,
            z: r.read_i16_le()?,
            sprite_width: r.read_u8()?,
            sprite_height_positive: r.read_u8()?,
            sprite_left: r.read_i16_le()?,
            sprite_top: r.read_i16_le()?,
            sprite_right: r.read_i16_le()?,
            sprite_bottom: r.read_i16_le()?,
            sprite_direction: r.read_u8()?,
        };
        r.skip(3)?;
        Ok(header)
    }

    fn write(&self, w: &mut BinaryWriter) {
        let start = w.len();
        w.write_u8(self.identifier);
        w.write_u8(self.subtype);
        w.write_u16_le(self.next);
        w.write_u16_le(self.previous);
        w.write_u8(self.linked_list_offset);
        w.write_u8(self.sprite_height_negative);
        w.write_u16_le(self.sprite_index);
        w.write_u16_le(self.flags);
        w.write_i16_le(self.x);
        w.write_i16_le(self.y);
        w.write_i16_le(self.z);
        w.write_u8(self.sprite_width);
        w.write_u8(self.sprite_height_positive);
        w.write_i16_le(self.sprite_left);
        w.write_i16_le(self.sprite_top);
        w.write_i16_le(self.sprite_right);
        w.write_i16_le(self.sprite_bottom);
        w.write_u8(self.sprite_direction);
        w.pad_to(start, HEADER_SIZE);
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LegacyVehicle {
    pub vehicle_sprite_type: u8,
    pub bank_rotation: u8,
    pub remaining_distance: i32,
    pub velocity: i32,
    pub acceleration: i32,
    pub ride: u8,
    pub vehicle_type: u8,
    pub body_colour: u8,
    pub trim_colour: u8,
    pub track_progress: u16,
    /// Track type in the upper bits, direction in the low two
    pub track_type_and_direction: u16,
    pub track_x: i16,
    pub track_y: i16,
    pub track_z: i16,
    pub next_vehicle_on_train: u16,
    pub prev_vehicle_on_ride: u16,
    pub next_vehicle_on_ride: u16,
    pub mass: u16,
    pub update_flags: u16,
    pub swing_sprite: u8,
    pub current_station: u8,
    pub swinging_car_var_0: i16,
    pub status: u8,
    pub sub_state: u8,
    pub peep: [u16; 32],
    pub peep_tshirt_colours: [u8; 32],
    pub num_seats: u8,
    pub num_peeps: u8,
    pub next_free_seat: u8,
    pub restraints_position: u8,
    pub spin_speed: i16,
    pub spin_sprite: u8,
    pub time_waiting: u16,
    pub speed: u8,
    pub powered_acceleration: u8,
    pub animation_frame: u8,
    pub scream_sound_id: u8,
    pub num_laps: u8,
    pub brake_speed: u8,
    pub lost_time_out: u16,
    pub vertical_drop_countdown: i8,
    pub mini_golf_current_animation: u8,
    pub mini_golf_flags: u8,
}

impl LegacyVehicle {
    fn read(r: &mut BinaryReader) -> Result<Self> {
        Ok(Self {
            vehicle_sprite_type: r.read_u8()?,
            bank_rotation: r.read_u8()?,
            remaining_distance: r.read_i32_le()?,
            velocity: r.read_i32_le()?,
            acceleration: r.read_i32_le()?,
            ride: r.read_u8()?,
            vehicle_type: r.read_u8()?,
            body_colour: r.read_u8()?,
            trim_colour: r.read_u8()?,
            track_progress: r.read_u16_le()?,
            track_type_and_direction: r.read_u16_le()?,
            track_x: r.read_i16_le()?,
            track_y: r.read_i16_le()?,
            track_z: r.read_i16_le()?,
            next_vehicle_on_train: r.read_u16_le()?,
            prev_vehicle_on_ride: r.read_u16_le()?,
            next_vehicle_on_ride: r.read_u16_le()?,
            mass: r.read_u16_le()?,
            update_flags: r.read_u16_le()?,
            swing_sprite: r.read_u8()?,
            current_station: r.read_u8()?,
            swinging_car_var_0: r.read_i16_le()?,
            status: r.read_u8()?,
            sub_state: r.read_u8()?,
            peep: r.read_u16_array()?,
            peep_tshirt_colours: r.read_array()?,
            num_seats: r.read_u8()?,
            num_peeps: r.read_u8()?,
            next_free_seat: r.read_u8()?,
            restraints_position: r.read_u8()?,
            spin_speed: r.read_i16_le()?,
            spin_sprite: r.read_u8()?,
            time_waiting: r.read_u16_le()?,
            speed: r.read_u8()?,
            powered_acceleration: r.read_u8()?,
            animation_frame: r.read_u8()?,
            scream_sound_id: r.read_u8()?,
            num_laps: r.read_u8()?,
            brake_speed: r.read_u8()?,
            lost_time_out: r.read_u16_le()?,
            vertical_drop_countdown: r.read_i8()?,
            mini_golf_current_animation: r.read_u8()?,
            mini_golf_flags: r.read_u8()?,
        })
    }

    fn write(&self, w: &mut BinaryWriter) {
        w.write_u8(self.vehicle_sprite_type);
        w.write_u8(self.bank_rotation);
        w.write_i32_le(self.remaining_distance);
        w.write_i32_le(self.velocity);
        w.write_i32_le(self.acceleration);
        w.write_u8(self.ride);
        w.write_u8(self.vehicle_type);
        w.write_u8(self.body_colour);
        w.write_u8(self.trim_colour);
        w.write_u16_le(self.track_progress);
        w.write_u16_le(self.track_type_and_direction);
        w.write_i16_le(self.track_x);
        w.write_i16_le(self.track_y);
        w.write_i16_le(self.track_z);
        w.write_u16_le(self.next_vehicle_on_train);
        w.write_u16_le(self.prev_vehicle_on_ride);
        w.write_u16_le(self.next_vehicle_on_ride);
        w.write_u16_le(self.mass);
        w.write_u16_le(self.update_flags);
        w.write_u8(self.swing_sprite);
        w.write_u8(self.current_station);
        w.write_i16_le(self.swinging_car_var_0);
        w.write_u8(self.status);
        w.write_u8(self.sub_state);
        w.write_u16_slice(&self.peep);
        w.write_bytes(&self.peep_tshirt_colours);
        w.write_u8(self.num_seats);
        w.write_u8(self.num_peeps);
        w.write_u8(self.next_free_seat);
        w.write_u8(self.restraints_position);
        w.write_i16_le(self.spin_speed);
        w.write_u8(self.spin_sprite);
        w.write_u16_le(self.time_waiting);
        w.write_u8(self.speed);
        w.write_u8(self.powered_acceleration);
        w.write_u8(self.animation_frame);
        w.write_u8(self.scream_sound_id);
        w.write_u8(self.num_laps);
        w.write_u8(self.brake_speed);
        w.write_u16_le(self.lost_time_out);
        w.write_i8(self.vertical_drop_countdown);
        w.write_u8(self.mini_golf_current_animation);
        w.write_u8(self.mini_golf_flags);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyThought {
    pub thought_type: u8,
    pub item: u8,
    pub freshness: u8,
    pub fresh_timeout: u8,
}

impl Default for LegacyThought {
    fn default() -> Self {
        Self { thought_type: 0xFF, item: THOUGHT_ITEM_NONE, freshness: 0, fresh_timeout: 0 }
    }
}

/// A guest or staff member. Staff reuse the guest spending fields for
/// their work statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyPeep {
    pub name_string_idx: u16,
    pub next_x: u16,
    pub next_y: u16,
    pub next_z: u8,
    pub next_flags: u8,
    pub outside_of_park: u8,
    pub state: u8,
    pub sub_state: u8,
    pub sprite_type: u8,
    pub peep_type: u8,
    pub staff_type: u8,
    pub tshirt_colour: u8,
    pub trousers_colour: u8,
    pub destination_x: u16,
    pub destination_y: u16,
    pub destination_tolerance: u8,
    pub energy: u8,
    pub energy_target: u8,
    pub happiness: u8,
    pub happiness_target: u8,
    pub nausea: u8,
    pub nausea_target: u8,
    pub hunger: u8,
    pub thirst: u8,
    pub toilet: u8,
    pub mass: u8,
    pub time_to_consume: u8,
    /// Max intensity in the high nibble, min in the low nibble
    pub intensity: u8,
    pub nausea_tolerance: u8,
    pub rides_been_on: [u8; 32],
    pub id: u32,
    pub cash_in_pocket: i32,
    pub cash_spent: i32,
    pub park_entry_time: i32,
    pub thoughts: [LegacyThought; PEEP_MAX_THOUGHTS],
    pub previous_ride: u8,
    pub previous_ride_time_out: u16,
    pub guest_heading_to_ride_id: u8,
    pub peep_is_lost_countdown: u8,
    pub peep_flags: u32,
    pub pathfind_goal: [u8; 4],
    pub no_action_frame_num: u8,
    pub litter_count: u8,
    pub time_on_ride: u8,
    pub disgusting_count: u8,
    pub paid_to_enter: i16,
    pub paid_on_rides: i16,
    pub paid_on_food: i16,
    pub paid_on_souvenirs: i16,
    pub no_of_food: u8,
    pub no_of_drinks: u8,
    pub no_of_souvenirs: u8,
    pub vandalism_seen: u8,
    pub voucher_type: u8,
    pub voucher_arguments: u8,
    pub surroundings_thought_timeout: u8,
    pub angriness: u8,
    pub time_lost: u8,
    pub days_in_queue: u8,
    pub balloon_colour: u8,
    pub umbrella_colour: u8,
    pub hat_colour: u8,
    pub favourite_ride: u8,
    pub favourite_ride_rating: u8,
    pub item_standard_flags: u32,
    pub current_ride: u8,
    pub current_ride_station: u8,
    pub current_train: u8,
    pub current_car: u8,
    pub current_seat: u8,
    pub time_in_queue: u16,
    pub staff_id: u8,
    pub staff_orders: u8,
    pub action: u8,
    pub action_frame: u8,
    pub direction: u8,
    pub interaction_ride_index: u8,
}

impl Default for LegacyPeep {
    fn default() -> Self {
        Self {
            name_string_idx: 0,
            next_x: 0,
            next_y: 0,
            next_z: 0,
            next_flags: 0,
            outside_of_park: 0,
            state: 0,
            sub_state: 0,
            sprite_type: 0,
            peep_type: PEEP_TYPE_GUEST,
            staff_type: 0,
            tshirt_colour: 0,
            trousers_colour: 0,
            destination_x: 0,
            destination_y: 0,
            destination_tolerance: 0,
            energy: 0,
            energy_target: 0,
            happiness: 0,
            happiness_target: 0,
            nausea: 0,
            nausea_target: 0,
            hunger: 0,
            thirst: 0,
            toilet: 0,
            mass: 0,
            time_to_consume: 0,
            intensity: 0,
            nausea_tolerance: 0,
            rides_been_on: [0; 32],
            id: 0,
            cash_in_pocket: 0,
            cash_spent: 0,
            park_entry_time: 0,
            thoughts: [LegacyThought::default(); PEEP_MAX_THOUGHTS],
            previous_ride: 0xFF,
            previous_ride_time_out: 0,
            guest_heading_to_ride_id: 0xFF,
            peep_is_lost_countdown: 0,
            peep_flags: 0,
            pathfind_goal: [0xFF; 4],
            no_action_frame_num: 0,
            litter_count: 0,
            time_on_ride: 0,
            disgusting_count: 0,
            paid_to_enter: 0,
            paid_on_rides: 0,
            paid_on_food: 0,
            paid_on_souvenirs: 0,
            no_of_food: 0,
            no_of_drinks: 0,
            no_of_souvenirs: 0,
            vandalism_seen: 0,
            voucher_type: 0,
            voucher_arguments: 0,
            surroundings_thought_timeout: 0,
            angriness: 0,
            time_lost: 0,
            days_in_queue: 0,
            balloon_colour: 0,
            umbrella_colour: 0,
            hat_colour: 0,
            favourite_ride: 0xFF,
            favourite_ride_rating: 0,
            item_standard_flags: 0,
            current_ride: 0xFF,
            current_ride_station: 0,
            current_train: 0,
            current_car: 0,
            current_seat: 0,
            time_in_queue: 0,
            staff_id: 0,
            staff_orders: 0,
            action: 0xFF,
            action_frame: 0,
            direction: 0,
            interaction_ride_index: 0xFF,
        }
    }
}

impl LegacyPeep {
    pub fn has_ridden(&self, ride_index: u8) -> bool {
        self.rides_been_on[ride_index as usize / 8] & (1 << (ride_index % 8)) != 0
    }

    fn read(r: &mut BinaryReader) -> Result<Self> {
        let mut peep = Self {
            name_string_idx: r.read_u16_le()?,
            next_x: r.read_u16_le()?,
            next_y: r.read_u16_le()?,
            next_z: r.read_u8()?,
            next_flags: r.read_u8()?,
            outside_of_park: r.read_u8()?,
            state: r.read_u8()?,
            sub_state: r.read_u8()?,
            sprite_type: r.read_u8()?,
            peep_type: r.read_u8()?,
            staff_type: r.read_u8()?,
            tshirt_colour: r.read_u8()?,
            trousers_colour: r.read_u8()?,
            destination_x: r.read_u16_le()?,
            destination_y: r.read_u16_le()?,
            destination_tolerance: r.read_u8()?,
            energy: r.read_u8()?,
            energy_target: r.read_u8()?,
            happiness: r.read_u8()?,
            happiness_target: r.read_u8()?,
            nausea: r.read_u8()?,
            nausea_target: r.read_u8()?,
            hunger: r.read_u8()?,
            thirst: r.read_u8()?,
            toilet: r.read_u8()?,
            mass: r.read_u8()?,
            time_to_consume: r.read_u8()?,
            intensity: r.read_u8()?,
            nausea_tolerance: r.read_u8()?,
            rides_been_on: r.read_array()?,
            id: r.read_u32_le()?,
            cash_in_pocket: r.read_i32_le()?,
            cash_spent: r.read_i32_le()?,
            park_entry_time: r.read_i32_le()?,
            ..Default::default()
        };
        for t in peep.thoughts.iter_mut() {
            t.thought_type = r.read_u8()?;
            t.item = r.read_u8()?;
            t.freshness = r.read_u8()?;
            t.fresh_timeout = r.read_u8()?;
        }
        peep.previous_ride = r.read_u8()?;
        peep.previous_ride_time_out = r.read_u16_le()?;
        peep.guest_heading_to_ride_id = r.read_u8()?;
        peep.peep_is_lost_countdown = r.read_u8()?;
        peep.peep_flags = r.read_u32_le()?;
        peep.pathfind_goal = r.read_array()?;
        peep.no_action_frame_num = r.read_u8()?;
        peep.litter_count = r.read_u8()?;
        peep.time_on_ride = r.read_u8()?;
        peep.disgusting_count = r.read_u8()?;
        peep.paid_to_enter = r.read_i16_le()?;
        peep.paid_on_rides = r.read_i16_le()?;
        peep.paid_on_food = r.read_i16_le()?;
        peep.paid_on_souvenirs = r.read_i16_le()?;
        peep.no_of_food = r.read_u8()?;
        peep.no_of_drinks = r.read_u8()?;
        peep.no_of_souvenirs = r.read_u8()?;
        peep.vandalism_seen = r.read_u8()?;
        peep.voucher_type = r.read_u8()?;
        peep.voucher_arguments = r.read_u8()?;
        peep.surroundings_thought_timeout = r.read_u8()?;
        peep.angriness = r.read_u8()?;
        peep.time_lost = r.read_u8()?;
        peep.days_in_queue = r.read_u8()?;
        peep.balloon_colour = r.read_u8()?;
        peep.umbrella_colour = r.read_u8()?;
        peep.hat_colour = r.read_u8()?;
        peep.favourite_ride = r.read_u8()?;
        peep.favourite_ride_rating = r.read_u8()?;
        peep.item_standard_flags = r.read_u32_le()?;
        peep.current_ride = r.read_u8()?;
        peep.current_ride_station = r.read_u8()?;
        peep.current_train = r.read_u8()?;
        peep.current_car = r.read_u8()?;
        peep.current_seat = r.read_u8()?;
        peep.time_in_queue = r.read_u16_le()?;
        peep.staff_id = r.read_u8()?;
        peep.staff_orders = r.read_u8()?;
        peep.action = r.read_u8()?;
        peep.action_frame = r.read_u8()?;
        peep.direction = r.read_u8()?;
        peep.interaction_ride_index = r.read_u8()?;
        Ok(peep)
    }

    fn write(&self, w: &mut BinaryWriter) {
        w.write_u16_le(self.name_string_idx);
        w.write_u16_le(self.next_x);
        w.write_u16_le(self.next_y);
        w.write_u8(self.next_z);
        w.write_u8(self.next_flags);
        w.write_u8(self.outside_of_park);
        w.write_u8(self.state);
        w.write_u8(self.sub_state);
        w.write_u8(self.sprite_type);
        w.write_u8(self.peep_type);
        w.write_u8(self.staff_type);
        w.write_u8(self.tshirt_colour);
        w.write_u8(self.trousers_colour);
        w.write_u16_le(self.destination_x);
        w.write_u16_le(self.destination_y);
        w.write_u8(self.destination_tolerance);
        w.write_u8(self.energy);
        w.write_u8(self.energy_target);
        w.write_u8(self.happiness);
        w.write_u8(self.happiness_target);
        w.write_u8(self.nausea);
        w.write_u8(self.nausea_target);
        w.write_u8(self.hunger);
        w.write_u8(self.thirst);
        w.write_u8(self.toilet);
        w.write_u8(self.mass);
        w.write_u8(self.time_to_consume);
        w.write_u8(self.intensity);
        w.write_u8(self.nausea_tolerance);
        w.write_bytes(&self.rides_been_on);
        w.write_u32_le(self.id);
        w.write_i32_le(self.cash_in_pocket);
        w.write_i32_le(self.cash_spent);
        w.write_i32_le(self.park_entry_time);
        for t in &self.thoughts {
            w.write_u8(t.thought_type);
            w.write_u8(t.item);
            w.write_u8(t.freshness);
            w.write_u8(t.fresh_timeout);
        }
        w.write_u8(self.previous_ride);
        w.write_u16_le(self.previous_ride_time_out);
        w.write_u8(self.guest_heading_to_ride_id);
        w.write_u8(self.peep_is_lost_countdown);
        w.write_u32_le(self.peep_flags);
        w.write_bytes(&self.pathfind_goal);
        w.write_u8(self.no_action_frame_num);
        w.write_u8(self.litter_count);
        w.write_u8(self.time_on_ride);
        w.write_u8(self.disgusting_count);
        w.write_i16_le(self.paid_to_enter);
        w.write_i16_le(self.paid_on_rides);
        w.write_i16_le(self.paid_on_food);
        w.write_i16_le(self.paid_on_souvenirs);
        w.write_u8(self.no_of_food);
        w.write_u8(self.no_of_drinks);
        w.write_u8(self.no_of_souvenirs);
        w.write_u8(self.vandalism_seen);
        w.write_u8(self.voucher_type);
        w.write_u8(self.voucher_arguments);
        w.write_u8(self.surroundings_thought_timeout);
        w.write_u8(self.angriness);
        w.write_u8(self.time_lost);
        w.write_u8(self.days_in_queue);
        w.write_u8(self.balloon_colour);
        w.write_u8(self.umbrella_colour);
        w.write_u8(self.hat_colour);
        w.write_u8(self.favourite_ride);
        w.write_u8(self.favourite_ride_rating);
        w.write_u32_le(self.item_standard_flags);
        w.write_u8(self.current_ride);
        w.write_u8(self.current_ride_station);
        w.write_u8(self.current_train);
        w.write_u8(self.current_car);
        w.write_u8(self.current_seat);
        w.write_u16_le(self.time_in_queue);
        w.write_u8(self.staff_id);
        w.write_u8(self.staff_orders);
        w.write_u8(self.action);
        w.write_u8(self.action_frame);
        w.write_u8(self.direction);
        w.write_u8(self.interaction_ride_index);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LegacyFountain {
    pub num_ticks_alive: u8,
    pub frame: u8,
    pub fountain_flags: u8,
    pub target_x: i16,
    pub target_y: i16,
    pub iteration: u16,
}

/// Effects and critters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyMisc {
    SteamParticle { time_to_move: u16, frame: u16 },
    MoneyEffect { move_delay: u16, num_movements: u8, value: i32, offset_x: i16, wiggle: u16 },
    CrashedVehicleParticle {
        frame: u16,
        time_to_live: u16,
        colour: [u8; 2],
        crashed_sprite_base: u16,
        velocity: [i16; 3],
        acceleration: [i32; 3],
    },
    ExplosionCloud { frame: u16 },
    CrashSplash { frame: u16 },
    ExplosionFlare { frame: u16 },
    JumpingFountainWater(LegacyFountain),
    Balloon { popped: u8, time_to_move: u16, frame: u16, colour: u8 },
    Duck { frame: u16, target_x: i16, target_y: i16, state: u8 },
    JumpingFountainSnow(LegacyFountain),
    Unknown(u8),
}

impl LegacyMisc {
    pub fn subtype(&self) -> u8 {
        match self {
            LegacyMisc::SteamParticle { .. } => MISC_STEAM_PARTICLE,
            LegacyMisc::MoneyEffect { .. } => MISC_MONEY_EFFECT,
            LegacyMisc::CrashedVehicleParticle { .. } => MISC_CRASHED_VEHICLE_PARTICLE,
            LegacyMisc::ExplosionCloud { .. } => MISC_EXPLOSION_CLOUD,
            LegacyMisc::CrashSplash { .. } => MISC_CRASH_SPLASH,
            LegacyMisc::ExplosionFlare { .. } => MISC_EXPLOSION_FLARE,
            LegacyMisc::JumpingFountainWater(_) => MISC_JUMPING_FOUNTAIN_WATER,
            LegacyMisc::Balloon { .. } => MISC_BALLOON,
            LegacyMisc::Duck { .. } => MISC_DUCK,
            LegacyMisc::JumpingFountainSnow(_) => MISC_JUMPING_FOUNTAIN_SNOW,
            LegacyMisc::Unknown(subtype) => *subtype,
        }
    }

    fn read(subtype: u8, r: &mut BinaryReader) -> Result<Self> {
        Ok(match subtype {
            MISC_STEAM_PARTICLE => LegacyMisc::SteamParticle {
                time_to_move: r.read_u16_le()?,
                frame: r.read_u16_le()?,
            },
            MISC_MONEY_EFFECT => LegacyMisc::MoneyEffect {
                move_delay: r.read_u16_le()?,
                num_movements: r.read_u8()?,
                value: r.read_i32_le()?,
                offset_x: r.read_i16_le()?,
                wiggle: r.read_u16_le()?,
            },
            MISC_CRASHED_VEHICLE_PARTICLE => LegacyMisc::CrashedVehicleParticle {
                frame: r.read_u16_le()?,
                time_to_live: r.read_u16_le()?,
                colour: r.read_array()?,
                crashed_sprite_base: r.read_u16_le()?,
                velocity: [r.read_i16_le()?, r.read_i16_le()?, r.read_i16_le()?],
                acceleration: r.read_i32_array()?,
            },
            MISC_EXPLOSION_CLOUD => LegacyMisc::ExplosionCloud { frame: r.read_u16_le()? },
            MISC_CRASH_SPLASH => LegacyMisc::CrashSplash { frame: r.read_u16_le()? },
            MISC_EXPLOSION_FLARE => LegacyMisc::ExplosionFlare { frame: r.read_u16_le()? },
            MISC_JUMPING_FOUNTAIN_WATER => LegacyMisc::JumpingFountainWater(read_fountain(r)?),
            MISC_JUMPING_FOUNTAIN_SNOW => LegacyMisc::JumpingFountainSnow(read_fountain(r)?),
            MISC_BALLOON => LegacyMisc::Balloon {
                popped: r.read_u8()?,
                time_to_move: r.read_u16_le()?,
                frame: r.read_u16_le()?,
                colour: r.read_u8()?,
            },
            MISC_DUCK => LegacyMisc::Duck {
                frame: r.read_u16_le()?,
                target_x: r.read_i16_le()?,
                target_y: r.read_i16_le()?,
                state: r.read_u8()?,
            },
            other => LegacyMisc::Unknown(other),
        })
    }

    fn write(&self, w: &mut BinaryWriter) {
        match *self {
            LegacyMisc::SteamParticle { time_to_move, frame } => {
                w.write_u16_le(time_to_move);
                w.write_u16_le(frame);
            }
            LegacyMisc::MoneyEffect { move_delay, num_movements, value, offset_x, wiggle } => {
                w.write_u16_le(move_delay);
                w.write_u8(num_movements);
                w.write_i32_le(value);
                w.write_i16_le(offset_x);
                w.write_u16_le(wiggle);
            }
            LegacyMisc::CrashedVehicleParticle {
                frame,
                time_to_live,
                colour,
                crashed_sprite_base,
                velocity,
                acceleration,
            } => {
                w.write_u16_le(frame);
                w.write_u16_le(time_to_live);
                w.write_bytes(&colour);
                w.write_u16_le(crashed_sprite_base);
                velocity.iter().for_each(|&v| w.write_i16_le(v));
                w.write_i32_slice(&acceleration);
            }
            LegacyMisc::ExplosionCloud { frame }
            | LegacyMisc::CrashSplash { frame }
            | LegacyMisc::ExplosionFlare { frame } => w.write_u16_le(frame),
            LegacyMisc::JumpingFountainWater(f) | LegacyMisc::JumpingFountainSnow(f) => {
                write_fountain(w, &f)
            }
            LegacyMisc::Balloon { popped, time_to_move, frame, colour } => {
                w.write_u8(popped);
                w.write_u16_le(time_to_move);
                w.write_u16_le(frame);
                w.write_u8(colour);
            }
            LegacyMisc::Duck { frame, target_x, target_y, state } => {
                w.write_u16_le(frame);
                w.write_i16_le(target_x);
                w.write_i16_le(target_y);
                w.write_u8(state);
            }
            LegacyMisc::Unknown(_) => {}
        }
    }
}

fn read_fountain(r: &mut BinaryReader) -> Result<LegacyFountain> {
    Ok(LegacyFountain {
        num_ticks_alive: r.read_u8()?,
        frame: r.read_u8()?,
        fountain_flags: r.read_u8()?,
        target_x: r.read_i16_le()?,
        target_y: r.read_i16_le()?,
        iteration: r.read_u16_le()?,
    })
}

fn write_fountain(w: &mut BinaryWriter, f: &LegacyFountain) {
    w.write_u8(f.num_ticks_alive);
    w.write_u8(f.frame);
    w.write_u8(f.fountain_flags);
    w.write_i16_le(f.target_x);
    w.write_i16_le(f.target_y);
    w.write_u16_le(f.iteration);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LegacyLitter {
    pub litter_type: u8,
    pub creation_tick: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LegacyEntityBody {
    Null,
    Vehicle(LegacyVehicle),
    Peep(Box<LegacyPeep>),
    Misc(LegacyMisc),
    Litter(LegacyLitter),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegacyEntity {
    pub header: EntityHeader,
    pub body: LegacyEntityBody,
}

impl Default for LegacyEntity {
    fn default() -> Self {
        Self::null()
    }
}

impl LegacyEntity {
    pub fn null() -> Self {
        Self {
            header: EntityHeader { identifier: IDENTIFIER_NULL, ..Default::default() },
            body: LegacyEntityBody::Null,
        }
    }

    pub fn vehicle(header: EntityHeader, vehicle: LegacyVehicle) -> Self {
        Self {
            header: EntityHeader { identifier: IDENTIFIER_VEHICLE, ..header },
            body: LegacyEntityBody::Vehicle(vehicle),
        }
    }

    pub fn peep(header: EntityHeader, peep: LegacyPeep) -> Self {
        Self {
            header: EntityHeader { identifier: IDENTIFIER_PEEP, ..header },
            body: LegacyEntityBody::Peep(Box::new(peep)),
        }
    }

    pub fn misc(header: EntityHeader, misc: LegacyMisc) -> Self {
        Self {
            header: EntityHeader { identifier: IDENTIFIER_MISC, subtype: misc.subtype(), ..header },
            body: LegacyEntityBody::Misc(misc),
        }
    }

    pub fn litter(header: EntityHeader, litter: LegacyLitter) -> Self {
        Self {
            header: EntityHeader { identifier: IDENTIFIER_LITTER, ..header },
            body: LegacyEntityBody::Litter(litter),
        }
    }

    pub fn read(r: &mut BinaryReader) -> Result<Self> {
        let start = r.position();
        let header = EntityHeader::read(r)?;
        let body = match header.identifier {
            IDENTIFIER_VEHICLE => LegacyEntityBody::Vehicle(LegacyVehicle::read(r)?),
            IDENTIFIER_PEEP => LegacyEntityBody::Peep(Box::new(LegacyPeep::read(r)?)),
            IDENTIFIER_MISC => LegacyEntityBody::Misc(LegacyMisc::read(header.subtype, r)?),
            IDENTIFIER_LITTER => LegacyEntityBody::Litter(LegacyLitter {
                litter_type: r.read_u8()?,
                creation_tick: r.read_u32_le()?,
            }),
            _ => LegacyEntityBody::Null,
        };
        r.skip(ENTITY_SIZE - (r.position() - start))?;
        Ok(Self { header, body })
    }

    pub fn write(&self, w: &mut BinaryWriter) {
        let start = w.len();
        self.header.write(w);
        match &self.body {
            LegacyEntityBody::Null => {}
            LegacyEntityBody::Vehicle(v) => v.write(w),
            LegacyEntityBody::Peep(p) => p.write(w),
            LegacyEntityBody::Misc(m) => m.write(w),
            LegacyEntityBody::Litter(l) => {
                w.write_u8(l.litter_type);
                w.write_u32_le(l.creation_tick);
            }
        }
        w.pad_to(start, ENTITY_SIZE);
    }
}
