use rct1_tables::{paths, research, scenery, terrain, vehicles};
use tracing::{debug, warn};

use super::context::{to_slot, ImportContext};
use super::entry_list::Slot;
use crate::codec::s4::LegacyResearchItem;
use crate::codec::tile_element::{live_elements, LegacyElementKind};
use crate::codec::{Edition, S4};
use crate::objects::{ObjectList, ObjectManager, ObjectType};

pub const PARK_ENTRANCE_OBJECT: &str = "rct2.park_entrance.pkent1";
pub const PEEP_NAMES_OBJECT: &str = "rct2.peep_names.original";

/// Animation sets in staff type order, guests last
pub const PEEP_ANIMATION_OBJECTS: [&str; 5] = [
    "rct2.peep_animations.handyman",
    "rct2.peep_animations.mechanic",
    "rct2.peep_animations.security",
    "rct2.peep_animations.entertainer",
    "rct2.peep_animations.guest",
];

pub const GUEST_ANIMATIONS_INDEX: u16 = 4;

/// Research items up to the end of the researchable section, separators skipped
pub fn research_items(list: &[LegacyResearchItem]) -> impl Iterator<Item = (usize, &LegacyResearchItem)> {
    list.iter()
        .enumerate()
        .take_while(|(_, item)| {
            !(item.is_separator() && (item.item == research::END_RESEARCHABLE || item.item == research::END))
        })
        .filter(|(_, item)| !item.is_separator())
}

/// Run every scan in order
pub fn discover(s4: &S4, ctx: &mut ImportContext, objects: &dyn ObjectManager) {
    scan_research(s4, ctx);
    scan_map(s4, ctx);
    scan_rides(s4, ctx);
    scan_scenery_groups(ctx, objects);
    scan_banners(s4, ctx);
    add_water(s4, ctx);
    debug!(
        rides = ctx.rides.len(),
        small_scenery = ctx.small_scenery.len(),
        large_scenery = ctx.large_scenery.len(),
        walls = ctx.walls.len(),
        scenery_groups = ctx.scenery_groups.len(),
        "object discovery finished"
    );
}

pub fn add_entry_for_ride_type(ctx: &mut ImportContext, ride_type: u8) {
    if !ctx.ride_type_map.is_unset(ride_type as usize) {
        return;
    }
    let Some(id) = rct1_tables::ride_type_object(ride_type) else {
        return;
    };
    let slot = to_slot(ctx.rides.get_or_add(id));
    ctx.ride_type_map.set(ride_type as usize, slot);
}

/// Register a vehicle's object. The ride type picks up the same entry if it
/// has none yet.
pub fn add_entry_for_vehicle_type(ctx: &mut ImportContext, ride_type: u8, vehicle_type: u8) {
    if !ctx.vehicle_type_map.is_unset(vehicle_type as usize) {
        return;
    }
    let Some(id) = vehicles::vehicle_object(vehicle_type) else {
        return;
    };
    let slot = to_slot(ctx.rides.get_or_add(id));
    ctx.vehicle_type_map.set(vehicle_type as usize, slot);
    if ctx.ride_type_map.is_unset(ride_type as usize) {
        ctx.ride_type_map.set(ride_type as usize, slot);
    }
}

pub fn add_entry_for_scenery_theme(ctx: &mut ImportContext, theme: u8) {
    if !ctx.scenery_theme_map.is_unset(theme as usize) {
        return;
    }
    let Some(id) = scenery::scenery_group_object(theme) else {
        return;
    };
    match ctx.scenery_groups.get_or_add(id) {
        Some(index) => ctx.scenery_theme_map.set(theme as usize, Slot::Index(index)),
        None => warn!(theme, "no room for scenery theme"),
    }
}

pub fn scan_research(s4: &S4, ctx: &mut ImportContext) {
    let list = s4.research_list();

    for (_, item) in research_items(list) {
        if item.item_type == research::TYPE_RIDE {
            if let Some(present) = ctx.research_ride_types.get_mut(item.item as usize) {
                *present = true;
            }
        }
    }

    for (_, item) in research_items(list) {
        match item.item_type {
            research::TYPE_THEME => add_entry_for_scenery_theme(ctx, item.item),
            research::TYPE_RIDE => {
                let ride_type = item.item;
                let mut vehicles_found = 0;
                for (_, other) in research_items(list) {
                    if other.item_type == research::TYPE_VEHICLE && other.related_ride == ride_type {
                        add_entry_for_vehicle_type(ctx, ride_type, other.item);
                        vehicles_found += 1;
                    }
                }
                if vehicles_found == 0 {
                    add_entry_for_ride_type(ctx, ride_type);
                }
            }
            research::TYPE_VEHICLE => {
                if !ctx.research_ride_types.get(item.related_ride as usize).copied().unwrap_or(false) {
                    debug!(vehicle = item.item, ride_type = item.related_ride, "vehicle research item without its ride");
                }
                add_entry_for_vehicle_type(ctx, item.related_ride, item.item);
            }
            _ => {}
        }
    }
}

pub fn scan_map(s4: &S4, ctx: &mut ImportContext) {
    for (_, element) in live_elements(&s4.tile_elements) {
        match element.kind() {
            LegacyElementKind::Surface => {
                let surface = element.surface_style();
                let edge = element.edge_style();
                if ctx.terrain_surface_map.is_unset(surface as usize) {
                    let slot = to_slot(ctx.terrain_surfaces.get_or_add(terrain::terrain_surface_object(surface)));
                    ctx.terrain_surface_map.set(surface as usize, slot);
                }
                if ctx.terrain_edge_map.is_unset(edge as usize) {
                    let slot = to_slot(ctx.terrain_edges.get_or_add(terrain::terrain_edge_object(edge)));
                    ctx.terrain_edge_map.set(edge as usize, slot);
                }
            }
            LegacyElementKind::Path => {
                let code = element.path_code();
                if ctx.footpath_surface_map.is_unset(code as usize) {
                    if let Some(id) = paths::footpath_surface_object(code) {
                        let slot = to_slot(ctx.footpath_surfaces.get_or_add(id));
                        ctx.footpath_surface_map.set(code as usize, slot);
                    }
                }
                let (addition, _) = paths::normalise_path_addition(element.path_addition());
                if addition != paths::ADDITION_NONE && ctx.path_addition_map.is_unset(addition as usize) {
                    if let Some(id) = paths::path_addition_object(addition) {
                        let slot = to_slot(ctx.path_additions.get_or_add(id));
                        ctx.path_addition_map.set(addition as usize, slot);
                    }
                }
                let support = element.path_support_type();
                if ctx.railings_map.is_unset(support as usize) {
                    let slot = to_slot(ctx.footpath_railings.get_or_add(paths::railings_object(support)));
                    ctx.railings_map.set(support as usize, slot);
                }
            }
            LegacyElementKind::SmallScenery => {
                let code = element.small_scenery_entry();
                if ctx.small_scenery_map.is_unset(code as usize) {
                    if let Some(id) = scenery::small_scenery_object(code) {
                        let slot = to_slot(ctx.small_scenery.get_or_add(id));
                        ctx.small_scenery_map.set(code as usize, slot);
                    }
                }
            }
            LegacyElementKind::LargeScenery => {
                let code = element.large_scenery_entry();
                if let Ok(code) = u8::try_from(code) {
                    if ctx.large_scenery_map.is_unset(code as usize) {
                        if let Some(id) = scenery::large_scenery_object(code) {
                            let slot = to_slot(ctx.large_scenery.get_or_add(id));
                            ctx.large_scenery_map.set(code as usize, slot);
                        }
                    }
                }
            }
            LegacyElementKind::Wall => {
                for edge in 0..4 {
                    let Some(code) = element.wall_type(edge) else { continue };
                    let code = scenery::normalise_wall(code, 0).wall_type;
                    if ctx.wall_map.is_unset(code as usize) {
                        if let Some(id) = scenery::wall_object(code) {
                            let slot = to_slot(ctx.walls.get_or_add(id));
                            ctx.wall_map.set(code as usize, slot);
                        }
                    }
                }
            }
            _ => {}
        }
    }
}

pub fn scan_rides(s4: &S4, ctx: &mut ImportContext) {
    for ride in s4.rides.iter().filter(|r| !r.is_null()) {
        if rct1_tables::ride_type_uses_vehicles(ride.ride_type) {
            add_entry_for_vehicle_type(ctx, ride.ride_type, ride.vehicle_type);
        } else {
            add_entry_for_ride_type(ctx, ride.ride_type);
        }
    }
}

/// Expand every theme in use into its contents. Only objects the object
/// manager knows are registered, under the category it reports.
pub fn scan_scenery_groups(ctx: &mut ImportContext, objects: &dyn ObjectManager) {
    for theme in 0..scenery::THEME_COUNT as u8 {
        if ctx.scenery_theme_map.is_unset(theme as usize) {
            continue;
        }
        for id in scenery::scenery_theme_objects(theme) {
            let Some(desc) = objects.find_object(id) else {
                debug!(object = id, "scenery theme object not available");
                continue;
            };
            match desc.object_type {
                ObjectType::SmallScenery
                | ObjectType::LargeScenery
                | ObjectType::Walls
                | ObjectType::Banners
                | ObjectType::PathAdditions => {
                    if let Some(list) = ctx.entry_list_mut(desc.object_type) {
                        list.get_or_add(id);
                    }
                }
                _ => {}
            }
        }
    }
}

pub fn scan_banners(s4: &S4, ctx: &mut ImportContext) {
    for banner in s4.banners.iter().filter(|b| !b.is_null()) {
        let code = banner.banner_type;
        if ctx.banner_map.is_unset(code as usize) {
            if let Some(id) = scenery::banner_object(code) {
                let slot = to_slot(ctx.banners.get_or_add(id));
                ctx.banner_map.set(code as usize, slot);
            }
        }
    }
}

pub fn add_water(s4: &S4, ctx: &mut ImportContext) {
    let colour = match ctx.edition {
        Edition::Classic => terrain::WATER_BLUE,
        _ => s4.water_colour,
    };
    ctx.water.get_or_add(terrain::water_object(colour));
}

/// Everything the caller must load before the import runs
pub fn required_objects(s4: &S4, ctx: &ImportContext) -> ObjectList {
    let mut list = ObjectList::new();
    for object_type in [
        ObjectType::Ride,
        ObjectType::SmallScenery,
        ObjectType::LargeScenery,
        ObjectType::Walls,
        ObjectType::Banners,
        ObjectType::PathAdditions,
        ObjectType::SceneryGroup,
    ] {
        if let Some(entries) = ctx.entry_list(object_type) {
            list.extend(object_type, entries.iter());
        }
    }
    list.add(ObjectType::ParkEntrance, PARK_ENTRANCE_OBJECT);
    list.extend(ObjectType::Water, ctx.water.iter());
    if let Some((_, source)) = super::scenario_index::identify(s4) {
        list.add(ObjectType::ScenarioText, source.text_object);
    }
    for object_type in [
        ObjectType::TerrainSurface,
        ObjectType::TerrainEdge,
        ObjectType::FootpathSurface,
        ObjectType::FootpathRailings,
    ] {
        if let Some(entries) = ctx.entry_list(object_type) {
            list.extend(object_type, entries.iter());
        }
    }
    list.add(ObjectType::PeepNames, PEEP_NAMES_OBJECT);
    list.extend(ObjectType::PeepAnimations, PEEP_ANIMATION_OBJECTS);
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::s4::LegacyBanner;
    use crate::codec::tile_element::{build_element_array, LegacyTileElement};
    use crate::codec::LegacyRide;
    use crate::objects::ObjectRepository;
    use rct1_tables::rides;

    fn ctx() -> ImportContext {
        ImportContext::new(Edition::LoopyLandscapes)
    }

    #[test]
    fn test_research_items_stop_at_researchable_end() {
        let list = vec![
            LegacyResearchItem::new(research::TYPE_RIDE, 1, 1),
            LegacyResearchItem::separator(research::END_AVAILABLE),
            LegacyResearchItem::new(research::TYPE_RIDE, 2, 2),
            LegacyResearchItem::separator(research::END_RESEARCHABLE),
            LegacyResearchItem::new(research::TYPE_RIDE, 3, 3),
        ];
        let items: Vec<_> = research_items(&list).map(|(i, item)| (i, item.item)).collect();
        assert_eq!(items, vec![(0, 1), (2, 2)]);
    }

    #[test]
    fn test_vehicle_shares_entry_with_ride_type() {
        let mut c = ctx();
        add_entry_for_vehicle_type(&mut c, rides::WOODEN_ROLLER_COASTER, vehicles::WOODEN_ROLLER_COASTER_TRAIN);
        add_entry_for_ride_type(&mut c, rides::WOODEN_ROLLER_COASTER);
        assert_eq!(c.rides.len(), 1);
        assert_eq!(c.ride_type_map.index(rides::WOODEN_ROLLER_COASTER as usize), Some(0));
        assert_eq!(c.vehicle_type_map.index(vehicles::WOODEN_ROLLER_COASTER_TRAIN as usize), Some(0));
    }

    #[test]
    fn test_ride_research_pulls_in_its_vehicles() {
        let mut s4 = S4::new_blank();
        s4.research_items_ll[0] = LegacyResearchItem::new(research::TYPE_RIDE, rides::WOODEN_ROLLER_COASTER, 0);
        s4.research_items_ll[1] = LegacyResearchItem::new(
            research::TYPE_VEHICLE,
            vehicles::WOODEN_ROLLER_COASTER_TRAIN,
            rides::WOODEN_ROLLER_COASTER,
        );
        s4.research_items_ll[2] = LegacyResearchItem::new(research::TYPE_RIDE, rides::TOILETS, 0);
        let mut c = ctx();
        scan_research(&s4, &mut c);
        assert!(c.research_ride_types[rides::WOODEN_ROLLER_COASTER as usize]);
        assert_eq!(c.rides.len(), 2);
        assert_eq!(c.rides.index_of("rct1.ride.toilets"), Some(1));
    }

    #[test]
    fn test_orphan_vehicle_is_registered() {
        let mut s4 = S4::new_blank();
        s4.research_items_ll[0] = LegacyResearchItem::new(
            research::TYPE_VEHICLE,
            vehicles::STEAM_TRAIN,
            rides::MINIATURE_RAILROAD,
        );
        let mut c = ctx();
        scan_research(&s4, &mut c);
        assert!(!c.research_ride_types[rides::MINIATURE_RAILROAD as usize]);
        assert_eq!(c.rides.len(), 1);
        assert!(c.vehicle_type_map.index(vehicles::STEAM_TRAIN as usize).is_some());
    }

    #[test]
    fn test_map_scan_registers_wall_edges() {
        let mut s4 = S4::new_blank();
        s4.tile_elements = build_element_array(|coords| {
            if coords.x == 2 && coords.y == 2 {
                vec![
                    LegacyTileElement::surface(14, 0, 0),
                    LegacyTileElement::wall(14, [Some(0), None, Some(scenery::WALL_RED_WOODEN_PANEL_FENCE), Some(0)], 0, 0),
                    LegacyTileElement::small_scenery(14, 65, 0, 0),
                ]
            } else {
                Vec::new()
            }
        });
        let mut c = ctx();
        scan_map(&s4, &mut c);
        assert_eq!(c.walls.len(), 2);
        assert_eq!(c.small_scenery.len(), 1);
        // the red panel fence folds into the plain panel fence
        assert!(c.wall_map.index(scenery::WALL_WOODEN_PANEL_FENCE as usize).is_some());
        assert!(c.wall_map.is_unset(scenery::WALL_RED_WOODEN_PANEL_FENCE as usize));
    }

    #[test]
    fn test_ride_scan_uses_vehicle_or_ride_object() {
        let mut s4 = S4::new_blank();
        s4.rides[0] = LegacyRide {
            ride_type: rides::MERRY_GO_ROUND,
            ..LegacyRide::default()
        };
        s4.rides[4] = LegacyRide {
            ride_type: rides::STEEL_ROLLER_COASTER,
            vehicle_type: vehicles::STEEL_ROLLER_COASTER_TRAIN,
            ..LegacyRide::default()
        };
        let mut c = ctx();
        scan_rides(&s4, &mut c);
        assert_eq!(c.rides.len(), 2);
        assert_eq!(c.rides.get(0), Some("rct1.ride.merry_go_round"));
    }

    #[test]
    fn test_scenery_groups_follow_object_manager() {
        let mut c = ctx();
        scan_scenery_groups(&mut c, &ObjectRepository::new());
        assert!(c.small_scenery.is_empty());

        let mut c = ctx();
        scan_scenery_groups(&mut c, &ObjectRepository::accept_all());
        assert!(!c.small_scenery.is_empty());
    }

    #[test]
    fn test_banners_and_water() {
        let mut s4 = S4::new_blank();
        s4.banners[0] = LegacyBanner { banner_type: 1, ..LegacyBanner::NULL };
        s4.water_colour = terrain::WATER_ORANGE;
        let mut c = ctx();
        scan_banners(&s4, &mut c);
        add_water(&s4, &mut c);
        assert_eq!(c.banners.len(), 1);
        assert_eq!(c.water.get(0), Some("rct2.water.wtrorng"));

        let mut classic = ImportContext::new(Edition::Classic);
        add_water(&s4, &mut classic);
        assert_eq!(classic.water.get(0), Some("rct2.water.wtrcyan"));
    }

    #[test]
    fn test_required_objects_include_fixed_extras() {
        let mut s4 = S4::new_blank();
        s4.scenario_slot_index = 0;
        let c = ctx();
        let list = required_objects(&s4, &c);
        assert!(list.contains(ObjectType::ParkEntrance, PARK_ENTRANCE_OBJECT));
        assert!(list.contains(ObjectType::PeepNames, PEEP_NAMES_OBJECT));
        assert_eq!(list.get(ObjectType::PeepAnimations).len(), 5);
        assert_eq!(list.get(ObjectType::ScenarioText).len(), 1);

        s4.scenario_slot_index = 500;
        assert!(required_objects(&s4, &c).get(ObjectType::ScenarioText).is_empty());
    }

    #[test]
    fn test_scenario_text_required_for_title_match() {
        let mut s4 = S4::new_blank();
        s4.scenario_slot_index = 0xFFFF;
        s4.scenario_name = "leafy lake".to_owned();
        let list = required_objects(&s4, &ctx());
        assert!(list.contains(ObjectType::ScenarioText, "rct1.scenario_text.leafy_lake"));
    }
}
