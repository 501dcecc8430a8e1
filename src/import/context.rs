use rct1_tables::{paths, scenery, terrain};
use tracing::debug;

use super::entry_list::{EntryList, Slot, TypeToEntryMap};
use crate::codec::Edition;
use crate::objects::{ObjectEntryIndex, ObjectType};
use crate::state::MONEY64_UNDEFINED;

/// Scenery groups every park has, whatever its research list says
pub const DEFAULT_SCENERY_GROUPS: [&str; 6] = [
    "rct2.scenery_group.scgtrees",
    "rct2.scenery_group.scgshrub",
    "rct2.scenery_group.scggardn",
    "rct2.scenery_group.scgfence",
    "rct2.scenery_group.scgwalls",
    "rct2.scenery_group.scgpathx",
];

/// Legacy money value meaning "not recorded"
pub const MONEY32_UNDEFINED: i32 = i32::MIN;

/// Ratio between the native and the legacy park valuation, computed on
/// first use and kept for the rest of the import
#[derive(Debug, Clone, Copy, Default)]
pub struct ParkValueFactor(Option<i64>);

impl ParkValueFactor {
    pub fn get_or_compute(&mut self, native_value: impl FnOnce() -> i64, legacy_value: i32) -> i64 {
        *self.0.get_or_insert_with(|| {
            let factor = if legacy_value != 0 {
                clamp_money(native_value() as i128 * 10 / legacy_value as i128)
            } else {
                100
            };
            debug!(factor, legacy_value, "park value conversion factor");
            factor
        })
    }

    pub fn cached(&self) -> Option<i64> {
        self.0
    }

    /// Scale a legacy park value, keeping "undefined" undefined
    pub fn apply(factor: i64, value: i32) -> i64 {
        if value == MONEY32_UNDEFINED {
            MONEY64_UNDEFINED
        } else {
            clamp_money(value as i128 * factor as i128 / 10)
        }
    }
}

/// Tiny legacy park values give huge factors; results saturate instead of
/// wrapping and never land on the undefined marker.
fn clamp_money(value: i128) -> i64 {
    value.clamp(MONEY64_UNDEFINED as i128 + 1, i64::MAX as i128) as i64
}

#[derive(Debug, Clone)]
pub struct ImportContext {
    pub edition: Edition,

    pub rides: EntryList,
    pub small_scenery: EntryList,
    pub large_scenery: EntryList,
    pub walls: EntryList,
    pub banners: EntryList,
    pub path_additions: EntryList,
    pub scenery_groups: EntryList,
    pub footpath_surfaces: EntryList,
    pub footpath_railings: EntryList,
    pub terrain_surfaces: EntryList,
    pub terrain_edges: EntryList,
    pub water: EntryList,

    pub ride_type_map: TypeToEntryMap,
    pub vehicle_type_map: TypeToEntryMap,
    pub small_scenery_map: TypeToEntryMap,
    pub large_scenery_map: TypeToEntryMap,
    pub wall_map: TypeToEntryMap,
    pub banner_map: TypeToEntryMap,
    pub path_addition_map: TypeToEntryMap,
    pub scenery_theme_map: TypeToEntryMap,
    pub footpath_surface_map: TypeToEntryMap,
    pub railings_map: TypeToEntryMap,
    pub terrain_surface_map: TypeToEntryMap,
    pub terrain_edge_map: TypeToEntryMap,

    /// Ride types that appear anywhere in the research list
    pub research_ride_types: Vec<bool>,

    pub park_value_factor: ParkValueFactor,
}

impl ImportContext {
    pub fn new(edition: Edition) -> Self {
        let mut ctx = Self {
            edition,
            rides: EntryList::new(ObjectType::Ride, 255),
            small_scenery: EntryList::new(ObjectType::SmallScenery, 252),
            large_scenery: EntryList::new(ObjectType::LargeScenery, 128),
            walls: EntryList::new(ObjectType::Walls, 128),
            banners: EntryList::new(ObjectType::Banners, 32),
            path_additions: EntryList::new(ObjectType::PathAdditions, 15),
            scenery_groups: EntryList::new(ObjectType::SceneryGroup, 19),
            footpath_surfaces: EntryList::new(ObjectType::FootpathSurface, 32),
            footpath_railings: EntryList::new(ObjectType::FootpathRailings, 4),
            terrain_surfaces: EntryList::new(ObjectType::TerrainSurface, 32),
            terrain_edges: EntryList::new(ObjectType::TerrainEdge, 16),
            water: EntryList::new(ObjectType::Water, 1),
            ride_type_map: TypeToEntryMap::new(rct1_tables::RIDE_TYPE_COUNT),
            vehicle_type_map: TypeToEntryMap::new(rct1_tables::VEHICLE_TYPE_COUNT),
            small_scenery_map: TypeToEntryMap::new(256),
            large_scenery_map: TypeToEntryMap::new(256),
            wall_map: TypeToEntryMap::new(256),
            banner_map: TypeToEntryMap::new(256),
            path_addition_map: TypeToEntryMap::new(16),
            scenery_theme_map: TypeToEntryMap::new(scenery::THEME_COUNT),
            footpath_surface_map: TypeToEntryMap::new(32),
            railings_map: TypeToEntryMap::new(4),
            terrain_surface_map: TypeToEntryMap::new(16),
            terrain_edge_map: TypeToEntryMap::new(16),
            research_ride_types: vec![false; rct1_tables::RIDE_TYPE_COUNT],
            park_value_factor: ParkValueFactor::default(),
        };
        ctx.add_default_entries();
        ctx
    }

    fn add_default_entries(&mut self) {
        for id in DEFAULT_SCENERY_GROUPS {
            self.scenery_groups.get_or_add(id);
        }
        for theme in [scenery::THEME_GENERAL, scenery::THEME_JUMPING_FOUNTAINS, scenery::THEME_GARDEN_CLOCK] {
            self.scenery_theme_map.set(theme as usize, Slot::Ignored);
        }
        for code in 0..self.footpath_surface_map.len() as u8 {
            if let Some(id) = paths::footpath_surface_object(code) {
                let slot = to_slot(self.footpath_surfaces.get_or_add(id));
                self.footpath_surface_map.set(code as usize, slot);
            }
        }
        for (code, id) in paths::railings_objects().enumerate() {
            let slot = to_slot(self.footpath_railings.get_or_add(id));
            self.railings_map.set(code, slot);
        }
        for (code, id) in terrain::terrain_surface_objects().enumerate() {
            let slot = to_slot(self.terrain_surfaces.get_or_add(id));
            self.terrain_surface_map.set(code, slot);
        }
        for (code, id) in terrain::terrain_edge_objects().enumerate() {
            let slot = to_slot(self.terrain_edges.get_or_add(id));
            self.terrain_edge_map.set(code, slot);
        }
    }

    pub fn entry_list(&self, object_type: ObjectType) -> Option<&EntryList> {
        Some(match object_type {
            ObjectType::Ride => &self.rides,
            ObjectType::SmallScenery => &self.small_scenery,
            ObjectType::LargeScenery => &self.large_scenery,
            ObjectType::Walls => &self.walls,
            ObjectType::Banners => &self.banners,
            ObjectType::PathAdditions => &self.path_additions,
            ObjectType::SceneryGroup => &self.scenery_groups,
            ObjectType::FootpathSurface => &self.footpath_surfaces,
            ObjectType::FootpathRailings => &self.footpath_railings,
            ObjectType::TerrainSurface => &self.terrain_surfaces,
            ObjectType::TerrainEdge => &self.terrain_edges,
            ObjectType::Water => &self.water,
            _ => return None,
        })
    }

    pub fn entry_list_mut(&mut self, object_type: ObjectType) -> Option<&mut EntryList> {
        Some(match object_type {
            ObjectType::Ride => &mut self.rides,
            ObjectType::SmallScenery => &mut self.small_scenery,
            ObjectType::LargeScenery => &mut self.large_scenery,
            ObjectType::Walls => &mut self.walls,
            ObjectType::Banners => &mut self.banners,
            ObjectType::PathAdditions => &mut self.path_additions,
            ObjectType::SceneryGroup => &mut self.scenery_groups,
            ObjectType::FootpathSurface => &mut self.footpath_surfaces,
            ObjectType::FootpathRailings => &mut self.footpath_railings,
            ObjectType::TerrainSurface => &mut self.terrain_surfaces,
            ObjectType::TerrainEdge => &mut self.terrain_edges,
            ObjectType::Water => &mut self.water,
            _ => return None,
        })
    }

    pub fn footpath_surface(&self, path_code: u8) -> Option<ObjectEntryIndex> {
        self.footpath_surface_map.index(path_code as usize)
    }
}

pub(crate) fn to_slot(index: Option<ObjectEntryIndex>) -> Slot {
    index.map(Slot::Index).unwrap_or(Slot::Unset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_seeded() {
        let ctx = ImportContext::new(Edition::LoopyLandscapes);
        assert_eq!(ctx.scenery_groups.len(), 6);
        assert_eq!(ctx.footpath_surfaces.len(), 16);
        assert_eq!(ctx.footpath_railings.len(), 3);
        assert_eq!(ctx.terrain_surfaces.len(), 16);
        assert_eq!(ctx.terrain_edges.len(), 16);
        assert!(ctx.water.is_empty());
        assert!(ctx.rides.is_empty());

        assert_eq!(ctx.scenery_theme_map.get(scenery::THEME_GENERAL as usize), Slot::Ignored);
        assert_eq!(ctx.scenery_theme_map.get(scenery::THEME_GARDEN_CLOCK as usize), Slot::Ignored);
        assert!(ctx.scenery_theme_map.is_unset(scenery::THEME_MINE as usize));
        assert_eq!(ctx.footpath_surface(paths::PATH_TARMAC), Some(4));
        assert!(ctx.footpath_surface(10).is_none());
    }

    #[test]
    fn test_park_value_factor_is_computed_once() {
        let mut factor = ParkValueFactor::default();
        let mut calls = 0;
        let f = factor.get_or_compute(
            || {
                calls += 1;
                3000
            },
            1000,
        );
        assert_eq!(f, 30);
        let again = factor.get_or_compute(|| unreachable!(), 1);
        assert_eq!(again, 30);
        assert_eq!(calls, 1);
        assert_eq!(ParkValueFactor::apply(f, 500), 1500);
        assert_eq!(ParkValueFactor::apply(f, MONEY32_UNDEFINED), MONEY64_UNDEFINED);
    }

    #[test]
    fn test_park_value_factor_zero_legacy_value() {
        let mut factor = ParkValueFactor::default();
        assert_eq!(factor.get_or_compute(|| 12345, 0), 100);
    }

    #[test]
    fn test_park_value_factor_saturates() {
        let mut factor = ParkValueFactor::default();
        let f = factor.get_or_compute(|| i64::MAX, 1);
        assert_eq!(f, i64::MAX);
        assert_eq!(ParkValueFactor::apply(f, i32::MAX), i64::MAX);
        assert_eq!(ParkValueFactor::apply(f, -5), MONEY64_UNDEFINED + 1);
        assert_eq!(ParkValueFactor::apply(f, 0), 0);
    }
}
