use serde::Serialize;

use super::patrol::PatrolArea;
use super::ride::{RideId, VehicleColour};
use crate::objects::{ObjectEntryIndex, SpriteBounds};

pub type EntityId = u16;

pub const MAX_ENTITIES: usize = 10_000;
pub const PEEP_MAX_THOUGHTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EntityBase {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub sprite_direction: u8,
    pub sprite_width: u8,
    pub sprite_height_negative: u8,
    pub sprite_height_positive: u8,
}

impl EntityBase {
    pub fn at(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z, ..Default::default() }
    }

    pub fn set_sprite_bounds(&mut self, bounds: SpriteBounds) {
        self.sprite_width = bounds.width;
        self.sprite_height_negative = bounds.height_negative;
        self.sprite_height_positive = bounds.height_positive;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Vehicle {
    pub ride: RideId,
    pub ride_subtype: Option<ObjectEntryIndex>,
    pub colours: VehicleColour,
    pub is_reversed: bool,
    pub pitch: u8,
    pub bank_rotation: u8,
    pub remaining_distance: i32,
    pub velocity: i32,
    pub acceleration: i32,
    pub track_progress: u16,
    pub track_type: u16,
    pub track_direction: u8,
    pub track_location: (i32, i32, i32),
    pub next_vehicle_on_train: Option<EntityId>,
    pub prev_vehicle_on_ride: Option<EntityId>,
    pub next_vehicle_on_ride: Option<EntityId>,
    pub mass: u16,
    pub update_flags: u16,
    pub swing_sprite: u8,
    pub current_station: u8,
    pub swinging_car_var_0: i16,
    pub status: u8,
    pub sub_state: u8,
    pub peeps: Vec<Option<EntityId>>,
    pub peep_tshirt_colours: Vec<u8>,
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
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Thought {
    pub thought_type: u8,
    pub item: Option<u16>,
    pub freshness: u8,
    pub fresh_timeout: u8,
}

/// State shared by guests and staff
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Peep {
    pub name: Option<String>,
    pub id: u32,
    pub state: u8,
    pub sub_state: u8,
    pub animation_group: u8,
    pub next_loc: (i32, i32, i32),
    pub next_flags: u8,
    pub outside_of_park: bool,
    pub destination: (i32, i32),
    pub destination_tolerance: u8,
    pub tshirt_colour: u8,
    pub trousers_colour: u8,
    pub energy: u8,
    pub energy_target: u8,
    pub mass: u8,
    pub action: u8,
    pub action_frame: u8,
    pub direction: u8,
    pub interaction_ride: Option<RideId>,
    pub current_ride: Option<RideId>,
    pub current_ride_station: u8,
    pub current_train: u8,
    pub current_car: u8,
    pub current_seat: u8,
    pub pathfind_goal: (u8, u8, u8, u8),
    pub peep_flags: u32,
    pub happiness: u8,
    pub happiness_target: u8,
    pub nausea: u8,
    pub nausea_target: u8,
    pub hunger: u8,
    pub thirst: u8,
    pub toilet: u8,
    pub cash_in_pocket: i32,
    pub cash_spent: i32,
    pub thoughts: [Thought; PEEP_MAX_THOUGHTS],
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Guest {
    pub peep: Peep,
    pub time_to_consume: u8,
    pub intensity_min: u8,
    pub intensity_max: u8,
    pub nausea_tolerance: u8,
    pub park_entry_time: i32,
    pub paid_to_enter: i32,
    pub paid_on_rides: i32,
    pub paid_on_food: i32,
    pub paid_on_souvenirs: i32,
    pub amount_of_food: u8,
    pub amount_of_drinks: u8,
    pub amount_of_souvenirs: u8,
    pub rides_been_on: Vec<RideId>,
    pub previous_ride: Option<RideId>,
    pub previous_ride_time_out: u16,
    pub guest_heading_to_ride: Option<RideId>,
    pub lost_countdown: u8,
    pub litter_count: u8,
    pub time_on_ride: u8,
    pub disgusting_count: u8,
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
    pub favourite_ride: Option<RideId>,
    pub favourite_ride_rating: u8,
    pub item_flags: u64,
    pub time_in_queue: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffType {
    Handyman,
    Mechanic,
    Security,
    Entertainer,
}

impl StaffType {
    pub fn from_legacy(staff_type: u8) -> Option<Self> {
        match staff_type {
            0 => Some(StaffType::Handyman),
            1 => Some(StaffType::Mechanic),
            2 => Some(StaffType::Security),
            3 => Some(StaffType::Entertainer),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Staff {
    pub peep: Peep,
    pub staff_type: StaffType,
    pub staff_id: u8,
    pub orders: u8,
    pub costume: u8,
    pub lawns_mown: u32,
    pub gardens_watered: u32,
    pub litter_swept: u32,
    pub bins_emptied: u32,
    #[serde(skip)]
    pub patrol_area: Option<PatrolArea>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct JumpingFountain {
    pub is_snow: bool,
    pub num_ticks_alive: u8,
    pub frame: u8,
    pub fountain_flags: u8,
    pub target: (i32, i32),
    pub iteration: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityKind {
    Vehicle(Box<Vehicle>),
    Guest(Box<Guest>),
    Staff(Box<Staff>),
    Litter { litter_type: u8, creation_tick: u32 },
    SteamParticle { time_to_move: u16, frame: u16 },
    MoneyEffect { move_delay: u16, num_movements: u8, value: i32, offset_x: i16, wiggle: u16 },
    CrashedVehicleParticle {
        frame: u16,
        time_to_live: u16,
        colours: (u8, u8),
        crashed_sprite_base: u16,
        velocity: (i16, i16, i16),
        acceleration: (i32, i32, i32),
    },
    ExplosionCloud { frame: u16 },
    ExplosionFlare { frame: u16 },
    CrashSplash { frame: u16 },
    JumpingFountain(JumpingFountain),
    Balloon { popped: bool, time_to_move: u16, frame: u16, colour: u8 },
    Duck { frame: u16, target: (i32, i32), state: u8 },
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Vehicle(_) => "vehicle",
            EntityKind::Guest(_) => "guest",
            EntityKind::Staff(_) => "staff",
            EntityKind::Litter { .. } => "litter",
            EntityKind::SteamParticle { .. } => "steam_particle",
            EntityKind::MoneyEffect { .. } => "money_effect",
            EntityKind::CrashedVehicleParticle { .. } => "crashed_vehicle_particle",
            EntityKind::ExplosionCloud { .. } => "explosion_cloud",
            EntityKind::ExplosionFlare { .. } => "explosion_flare",
            EntityKind::CrashSplash { .. } => "crash_splash",
            EntityKind::JumpingFountain(_) => "jumping_fountain",
            EntityKind::Balloon { .. } => "balloon",
            EntityKind::Duck { .. } => "duck",
        }
    }

    /// Common peep state of a guest or staff member
    pub fn peep(&self) -> Option<&Peep> {
        match self {
            EntityKind::Guest(g) => Some(&g.peep),
            EntityKind::Staff(s) => Some(&s.peep),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    pub id: EntityId,
    pub base: EntityBase,
    pub kind: EntityKind,
}

impl Entity {
    pub fn as_guest(&self) -> Option<&Guest> {
        match &self.kind {
            EntityKind::Guest(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_staff(&self) -> Option<&Staff> {
        match &self.kind {
            EntityKind::Staff(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_vehicle(&self) -> Option<&Vehicle> {
        match &self.kind {
            EntityKind::Vehicle(v) => Some(v),
            _ => None,
        }
    }
}

/// Entities addressed by a fixed id
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    slots: Vec<Option<Entity>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entity under a chosen id, replacing whatever used it.
    /// Returns `None` when the id is beyond the registry's capacity.
    pub fn create_entity_at(&mut self, id: EntityId, base: EntityBase, kind: EntityKind) -> Option<&mut Entity> {
        let index = id as usize;
        if index >= MAX_ENTITIES {
            return None;
        }
        if self.slots.len() <= index {
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index] = Some(Entity { id, base, kind });
        self.slots[index].as_mut()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.slots.get(id as usize)?.as_ref()
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.slots.get_mut(id as usize)?.as_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.slots.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.slots.iter_mut().flatten()
    }

    pub fn guests(&self) -> impl Iterator<Item = &Guest> {
        self.iter().filter_map(Entity::as_guest)
    }

    pub fn staff(&self) -> impl Iterator<Item = &Staff> {
        self.iter().filter_map(Entity::as_staff)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_entity_at_keeps_id() {
        let mut registry = EntityRegistry::new();
        let e = registry
            .create_entity_at(42, EntityBase::at(1, 2, 3), EntityKind::Litter { litter_type: 1, creation_tick: 0 })
            .unwrap();
        assert_eq!(e.id, 42);
        assert_eq!(registry.get(42).unwrap().base.z, 3);
        assert!(registry.get(41).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_create_entity_out_of_range() {
        let mut registry = EntityRegistry::new();
        let kind = EntityKind::ExplosionCloud { frame: 0 };
        assert!(registry.create_entity_at(MAX_ENTITIES as EntityId, EntityBase::default(), kind).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_staff_type_from_legacy() {
        assert_eq!(StaffType::from_legacy(2), Some(StaffType::Security));
        assert_eq!(StaffType::from_legacy(9), None);
    }
}
