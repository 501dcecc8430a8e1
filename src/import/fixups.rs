use std::collections::HashSet;

use tracing::{debug, warn};

use super::discovery::GUEST_ANIMATIONS_INDEX;
use crate::objects::{ObjectEntryIndex, ObjectManager, ObjectType};
use crate::state::entity::EntityKind;
use crate::state::ride::{RideId, TileCoordsXYZD};
use crate::state::tile::track_type::is_block_brake_equivalent;
use crate::state::tile::{EntranceKind, TileElementKind};
use crate::state::world::Park;

pub fn run_all(park: &mut Park, objects: &dyn ObjectManager) {
    fix_next_guest_number(park);
    count_block_brakes(park);
    set_default_names(park);
    fix_park_entrances(park);
    fix_ride_entrances(park);
    park.research.mark_first_of_type();
    fix_sprite_bounds(park, objects);
    consolidate_patrol_areas(park);
}

pub fn fix_next_guest_number(park: &mut Park) {
    let max = park.entities.guests().map(|g| g.peep.id).max().unwrap_or(0);
    park.next_guest_number = max.checked_add(1).unwrap_or_else(|| {
        warn!(max, "guest numbers exhausted");
        max
    });
}

/// Chained pieces that level out a lift hill become block brakes
pub fn count_block_brakes(park: &mut Park) {
    let mut counts = vec![0u16; park.rides.len()];
    for (_, _, element) in park.tiles.iter_mut() {
        let TileElementKind::Track(track) = &mut element.kind else { continue };
        if track.has_chain && is_block_brake_equivalent(track.track_type) {
            track.is_block_brake = true;
            if let Some(count) = counts.get_mut(track.ride_index as usize) {
                *count += 1;
            }
        }
    }
    for ride in park.rides_mut() {
        ride.num_block_brakes = counts.get(ride.id as usize).copied().unwrap_or(0);
    }
}

/// Rides without a custom name get the lowest free number for their type
pub fn set_default_names(park: &mut Park) {
    let mut taken: HashSet<String> = park.rides().filter_map(|r| r.name.custom.clone()).collect();
    for ride in park.rides_mut() {
        if ride.name.custom.is_some() {
            continue;
        }
        let number = (1..=u16::MAX).find(|&n| !taken.contains(&ride.default_name(n))).unwrap_or(1);
        ride.name.default_number = number;
        taken.insert(ride.default_name(number));
    }
}

pub fn fix_park_entrances(park: &mut Park) {
    park.park_entrances = park
        .tiles
        .iter()
        .filter_map(|(x, y, element)| match element.kind {
            TileElementKind::Entrance(e) if e.kind == EntranceKind::ParkEntrance && e.sequence == 0 => {
                Some(TileCoordsXYZD { x: x as u8, y: y as u8, z: element.base_height, direction: element.direction })
            }
            _ => None,
        })
        .collect();
    debug!(count = park.park_entrances.len(), "park entrances");
}

fn find_entrance(park: &Park, at: TileCoordsXYZD, kind: EntranceKind, ride: RideId, station: u8) -> Option<TileCoordsXYZD> {
    park.tiles.tile(at.x as usize, at.y as usize).iter().find_map(|element| match element.kind {
        TileElementKind::Entrance(e) if e.kind == kind && e.ride_index == Some(ride) && e.station_index == station => {
            Some(TileCoordsXYZD { x: at.x, y: at.y, z: element.base_height, direction: element.direction })
        }
        _ => None,
    })
}

/// Station entrances and exits take height and facing from their tile element
pub fn fix_ride_entrances(park: &mut Park) {
    let mut resolved = Vec::new();
    for ride in park.rides() {
        for (i, station) in ride.stations.iter().enumerate() {
            let station_index = i as u8;
            let entrance = station.entrance.map(|at| (at, find_entrance(park, at, EntranceKind::RideEntrance, ride.id, station_index)));
            let exit = station.exit.map(|at| (at, find_entrance(park, at, EntranceKind::RideExit, ride.id, station_index)));
            resolved.push((ride.id, i, entrance, exit));
        }
    }

    for (id, i, entrance, exit) in resolved {
        let Some(ride) = park.ride_mut(id) else { continue };
        let station = &mut ride.stations[i];
        if let Some((at, found)) = entrance {
            if found.is_none() {
                warn!(ride = id, station = i, x = at.x, y = at.y, "station entrance has no entrance element");
            }
            station.entrance = found;
        }
        if let Some((at, found)) = exit {
            if found.is_none() {
                warn!(ride = id, station = i, x = at.x, y = at.y, "station exit has no exit element");
            }
            station.exit = found;
        }
    }
}

pub fn fix_sprite_bounds(park: &mut Park, objects: &dyn ObjectManager) {
    for entity in park.entities.iter_mut() {
        let index = match &entity.kind {
            EntityKind::Guest(_) => GUEST_ANIMATIONS_INDEX,
            EntityKind::Staff(staff) => staff.staff_type.index() as ObjectEntryIndex,
            _ => continue,
        };
        let bounds = objects
            .get_loaded_object(ObjectType::PeepAnimations, index)
            .and_then(|o| o.sprite_bounds());
        match bounds {
            Some(bounds) => entity.base.set_sprite_bounds(bounds),
            None => debug!(entity = entity.id, "no peep animations loaded"),
        }
    }
}

pub fn consolidate_patrol_areas(park: &mut Park) {
    let staff = park.entities.staff().map(|s| (s.staff_type, s.patrol_area.as_ref()));
    park.patrol_areas.rebuild(staff);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{ObjectList, ObjectRepository, SpriteBounds};
    use crate::state::entity::{EntityBase, Guest, Peep, Staff, StaffType};
    use crate::state::patrol::PatrolArea;
    use crate::state::ride::{Ride, Station};
    use crate::state::tile::track_type;
    use crate::state::tile::{EntranceElement, TileElement, TrackElement};

    fn ride(id: RideId, ride_type: u16) -> Ride {
        let mut ride = Ride::new(id);
        ride.ride_type = ride_type;
        ride.subtype = Some(0);
        ride
    }

    fn guest(id: u32) -> EntityKind {
        EntityKind::Guest(Box::new(Guest { peep: Peep { id, ..Default::default() }, ..Default::default() }))
    }

    fn staff(staff_type: StaffType, patrol: Option<PatrolArea>) -> EntityKind {
        EntityKind::Staff(Box::new(Staff {
            peep: Peep::default(),
            staff_type,
            staff_id: 0,
            orders: 0,
            costume: 0,
            lawns_mown: 0,
            gardens_watered: 0,
            litter_swept: 0,
            bins_emptied: 0,
            patrol_area: patrol,
        }))
    }

    fn track(ride_index: u16, track_type: track_type::TrackType, has_chain: bool) -> TileElement {
        TileElement::new(
            2,
            4,
            0,
            TileElementKind::Track(TrackElement { track_type, ride_index, has_chain, ..Default::default() }),
        )
    }

    #[test]
    fn test_next_guest_number() {
        let mut park = Park::new();
        park.entities.create_entity_at(0, EntityBase::default(), guest(41));
        park.entities.create_entity_at(7, EntityBase::default(), guest(12));
        fix_next_guest_number(&mut park);
        assert_eq!(park.next_guest_number, 42);

        let mut empty = Park::new();
        fix_next_guest_number(&mut empty);
        assert_eq!(empty.next_guest_number, 1);
    }

    #[test]
    fn test_next_guest_number_at_limit() {
        let mut park = Park::new();
        park.entities.create_entity_at(0, EntityBase::default(), guest(u32::MAX));
        fix_next_guest_number(&mut park);
        assert_eq!(park.next_guest_number, u32::MAX);
    }

    #[test]
    fn test_block_brakes_need_chain() {
        let mut park = Park::new();
        park.rides[3] = Some(ride(3, 15));
        park.tiles.set_tile(1, 1, vec![track(3, track_type::UP_25_TO_FLAT, true)]);
        park.tiles.set_tile(2, 1, vec![track(3, track_type::UP_60_TO_FLAT, true)]);
        park.tiles.set_tile(3, 1, vec![track(3, track_type::UP_25_TO_FLAT, false)]);
        park.tiles.set_tile(4, 1, vec![track(3, track_type::FLAT, true)]);
        count_block_brakes(&mut park);
        assert_eq!(park.ride(3).unwrap().num_block_brakes, 2);
        assert!(park.tiles.tile(1, 1)[0].as_track().unwrap().is_block_brake);
        assert!(!park.tiles.tile(3, 1)[0].as_track().unwrap().is_block_brake);
    }

    #[test]
    fn test_default_names_unique_and_stable() {
        let mut park = Park::new();
        park.rides[0] = Some(ride(0, 33));
        park.rides[1] = Some(ride(1, 33));
        let mut named = ride(2, 33);
        named.name.custom = Some(named.default_name(1));
        park.rides[2] = Some(named);

        set_default_names(&mut park);
        assert_eq!(park.ride(0).unwrap().name.default_number, 2);
        assert_eq!(park.ride(1).unwrap().name.default_number, 3);

        let before: Vec<String> = park.rides().map(|r| r.formatted_name()).collect();
        set_default_names(&mut park);
        let after: Vec<String> = park.rides().map(|r| r.formatted_name()).collect();
        assert_eq!(before, after);
    }

    fn entrance(kind: EntranceKind, ride_index: Option<u16>, sequence: u8, height: u8, direction: u8) -> TileElement {
        TileElement::new(
            height,
            height + 4,
            direction,
            TileElementKind::Entrance(EntranceElement {
                kind,
                ride_index,
                station_index: 0,
                sequence,
                path_surface: None,
                entrance_object: None,
            }),
        )
    }

    #[test]
    fn test_park_entrances_primary_piece_only() {
        let mut park = Park::new();
        park.tiles.set_tile(10, 20, vec![entrance(EntranceKind::ParkEntrance, None, 0, 14, 2)]);
        park.tiles.set_tile(11, 20, vec![entrance(EntranceKind::ParkEntrance, None, 1, 14, 2)]);
        fix_park_entrances(&mut park);
        assert_eq!(park.park_entrances, vec![TileCoordsXYZD { x: 10, y: 20, z: 14, direction: 2 }]);
    }

    #[test]
    fn test_ride_entrance_resolution() {
        let mut park = Park::new();
        let mut r = ride(5, 33);
        r.stations[0] = Station {
            entrance: Some(TileCoordsXYZD { x: 6, y: 6, z: 0, direction: 0 }),
            exit: Some(TileCoordsXYZD { x: 7, y: 6, z: 0, direction: 0 }),
            ..Default::default()
        };
        park.rides[5] = Some(r);
        park.tiles.set_tile(6, 6, vec![entrance(EntranceKind::RideEntrance, Some(5), 0, 8, 3)]);
        fix_ride_entrances(&mut park);
        let station = &park.ride(5).unwrap().stations[0];
        assert_eq!(station.entrance, Some(TileCoordsXYZD { x: 6, y: 6, z: 8, direction: 3 }));
        assert_eq!(station.exit, None);
    }

    #[test]
    fn test_sprite_bounds_from_animations() {
        let mut repo = ObjectRepository::accept_all();
        let mut list = ObjectList::new();
        list.extend(ObjectType::PeepAnimations, crate::import::discovery::PEEP_ANIMATION_OBJECTS);
        repo.load_objects(&list);

        let mut park = Park::new();
        park.entities.create_entity_at(0, EntityBase::default(), guest(1));
        park.entities.create_entity_at(1, EntityBase::default(), staff(StaffType::Mechanic, None));
        fix_sprite_bounds(&mut park, &repo);
        for entity in park.entities.iter() {
            assert_eq!(entity.base.sprite_width, SpriteBounds::STANDARD.width);
            assert_eq!(entity.base.sprite_height_positive, SpriteBounds::STANDARD.height_positive);
        }
    }

    #[test]
    fn test_patrol_consolidation() {
        let mut area = PatrolArea::new();
        area.mark_rect(0, 0, 3, 3);
        let mut park = Park::new();
        park.entities.create_entity_at(0, EntityBase::default(), staff(StaffType::Handyman, Some(area)));
        park.entities.create_entity_at(1, EntityBase::default(), staff(StaffType::Security, None));
        consolidate_patrol_areas(&mut park);
        assert_eq!(park.patrol_areas.for_type(StaffType::Handyman).tile_count(), 16);
        assert!(park.patrol_areas.for_type(StaffType::Security).is_empty());
    }
}
