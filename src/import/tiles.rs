use rct1_tables::{paths, scenery, to_native_colour};
use tracing::{debug, warn};

use super::context::ImportContext;
use crate::codec::tile_element::{
    LegacyElementKind, LegacyTileElement, TileChains, ENTRANCE_TYPE_PARK_ENTRANCE, ENTRANCE_TYPE_RIDE_ENTRANCE,
    ENTRANCE_TYPE_RIDE_EXIT,
};
use crate::codec::S4;
use crate::objects::ObjectEntryIndex;
use crate::state::ride::Ride;
use crate::state::ride_type::{self, RideType, RideTypeFlags};
use crate::state::tile::{
    track_type::{self, TrackType},
    BannerElement, EntranceElement, EntranceKind, LargeSceneryElement, PathElement, SmallSceneryElement,
    SurfaceElement, TileElement, TileElementKind, TrackElement, WallElement, DEFAULT_SEAT_ROTATION,
};
use crate::state::world::Park;

/// Only one park entrance object is ever required
pub const PARK_ENTRANCE_INDEX: ObjectEntryIndex = 0;

/// Height of one land step in element units
const LAND_HEIGHT_STEP: u8 = 2;

pub const EDGE_SLOPE_ELEVATED: u8 = 1 << 0;
pub const EDGE_SLOPE_UPWARDS: u8 = 1 << 1;
pub const EDGE_SLOPE_DOWNWARDS: u8 = 1 << 2;

/// Corners at the start and end of each edge, as surface slope bits
const EDGE_CORNERS: [(u8, u8); 4] = [(0b0010, 0b0100), (0b0100, 0b0001), (0b0001, 0b1000), (0b1000, 0b0010)];

/// Slope of a wall standing on one edge of a surface with the given slope.
/// Steep slopes are treated as their plain counterpart.
pub fn wall_edge_slope(surface_slope: u8, edge: usize) -> u8 {
    let slope = surface_slope & 0x0F;
    let (start, end) = EDGE_CORNERS[edge & 3];
    match (slope & start != 0, slope & end != 0) {
        (true, true) => EDGE_SLOPE_ELEVATED,
        (true, false) => EDGE_SLOPE_UPWARDS,
        (false, true) => EDGE_SLOPE_DOWNWARDS,
        (false, false) => 0,
    }
}

/// Flat rides used legacy track numbers for their footprints
pub fn flat_track_type(legacy: u8) -> TrackType {
    match legacy {
        95 => track_type::FLAT_TRACK_1X4_A,
        110 => track_type::FLAT_TRACK_2X2,
        111 => track_type::FLAT_TRACK_4X4,
        116 => track_type::FLAT_TRACK_2X4,
        118 => track_type::FLAT_TRACK_1X5,
        119 => track_type::FLAT_TRACK_1X1_A,
        121 => track_type::FLAT_TRACK_1X4_B,
        123 => track_type::FLAT_TRACK_1X1_B,
        126 => track_type::FLAT_TRACK_1X4_C,
        196 => track_type::FLAT_TRACK_3X3,
        other => other as TrackType,
    }
}

pub fn import_tile_elements(s4: &S4, ctx: &ImportContext, park: &mut Park) {
    let mut count = 0;
    for (coords, chain) in TileChains::new(&s4.tile_elements) {
        let mut out = Vec::with_capacity(chain.len());
        for src in chain.iter().filter(|e| !e.is_deleted()) {
            convert_element(s4, ctx, &park.rides, src, &mut out);
        }
        count += out.len();
        park.tiles.set_tile(coords.x as usize, coords.y as usize, out);
    }
    debug!(elements = count, "imported tile elements");
}

/// Converts one legacy element, appending zero or more native elements.
/// Returns how many were appended.
pub fn convert_element(
    s4: &S4,
    ctx: &ImportContext,
    rides: &[Option<Ride>],
    src: &LegacyTileElement,
    out: &mut Vec<TileElement>,
) -> usize {
    let before = out.len();
    let element = |kind| {
        let mut e = TileElement::new(src.base_height(), src.clearance_height(), src.direction(), kind);
        e.is_ghost = src.is_ghost();
        e
    };

    match src.kind() {
        LegacyElementKind::Surface => out.push(element(TileElementKind::Surface(SurfaceElement {
            slope: src.surface_slope(),
            surface_style: ctx.terrain_surface_map.index(src.surface_style() as usize),
            edge_style: ctx.terrain_edge_map.index(src.edge_style() as usize),
            grass_length: src.grass_length(),
            ownership: src.ownership(),
            park_fences: src.park_fences(),
            water_height: src.water_height(),
        }))),
        LegacyElementKind::Path => out.push(element(TileElementKind::Path(convert_path(ctx, src)))),
        LegacyElementKind::Track => out.push(element(TileElementKind::Track(convert_track(s4, rides, src)))),
        LegacyElementKind::SmallScenery => {
            let code = src.small_scenery_entry();
            match ctx.small_scenery_map.index(code as usize) {
                Some(entry) => {
                    let (primary, secondary) = scenery::small_scenery_colour_override(code);
                    out.push(element(TileElementKind::SmallScenery(SmallSceneryElement {
                        entry,
                        age: src.small_scenery_age(),
                        primary_colour: primary.unwrap_or_else(|| to_native_colour(src.primary_colour())),
                        secondary_colour: secondary.unwrap_or_else(|| to_native_colour(src.secondary_colour())),
                        quadrant: src.scenery_quadrant(),
                    })));
                }
                None => debug!(code, "dropping small scenery without an object"),
            }
        }
        LegacyElementKind::Entrance => {
            if let Some(entrance) = convert_entrance(ctx, src) {
                out.push(element(TileElementKind::Entrance(entrance)));
            }
        }
        LegacyElementKind::Wall => convert_walls(ctx, src, out),
        LegacyElementKind::LargeScenery => {
            let code = src.large_scenery_entry();
            match u8::try_from(code).ok().and_then(|c| ctx.large_scenery_map.index(c as usize)) {
                Some(entry) => out.push(element(TileElementKind::LargeScenery(LargeSceneryElement {
                    entry,
                    sequence: src.large_scenery_sequence(),
                    primary_colour: to_native_colour(src.primary_colour()),
                    secondary_colour: to_native_colour(src.secondary_colour()),
                    banner_index: None,
                }))),
                None => debug!(code, "dropping large scenery without an object"),
            }
        }
        LegacyElementKind::Banner => {
            let index = src.banner_index();
            let index = if (index as usize) < s4.banners.len() {
                Some(index as u16)
            } else {
                warn!(index, "banner element points outside the banner table");
                None
            };
            out.push(element(TileElementKind::Banner(BannerElement {
                index,
                position: src.banner_position(),
                allowed_edges: src.banner_allowed_edges(),
            })));
        }
    }
    out.len() - before
}

fn convert_path(ctx: &ImportContext, src: &LegacyTileElement) -> PathElement {
    let code = src.path_code();
    let mut path = PathElement {
        surface: ctx.footpath_surface(code),
        railings: ctx.railings_map.index(src.path_support_type() as usize),
        is_queue: paths::path_is_queue(code),
        is_sloped: src.path_is_sloped(),
        slope_direction: src.path_slope_direction(),
        edges: src.path_edges(),
        ..PathElement::default()
    };
    let addition = src.path_addition();
    if addition != paths::ADDITION_NONE {
        let (normalised, broken) = paths::normalise_path_addition(addition);
        path.addition = ctx.path_addition_map.index(normalised as usize);
        path.addition_is_broken = broken;
    }
    path
}

/// Native type of the ride owning a track piece. Rides that failed to
/// resolve fall back to the legacy code, which shares the numbering.
fn owning_ride_type(s4: &S4, rides: &[Option<Ride>], ride_index: u8) -> RideType {
    match rides.get(ride_index as usize).and_then(|r| r.as_ref()) {
        Some(ride) if !ride.is_null_type() => ride.ride_type,
        _ => s4
            .rides
            .get(ride_index as usize)
            .map(|r| r.ride_type as RideType)
            .unwrap_or(ride_type::RIDE_TYPE_NULL),
    }
}

fn convert_track(s4: &S4, rides: &[Option<Ride>], src: &LegacyTileElement) -> TrackElement {
    let ride_type = owning_ride_type(s4, rides, src.ride_index());
    let legacy_track = src.track_type();
    let track_type = if ride_type::descriptor(ride_type).has(RideTypeFlags::FLAT_RIDE) {
        flat_track_type(legacy_track)
    } else {
        legacy_track as TrackType
    };

    let mut track = TrackElement {
        track_type,
        ride_index: src.ride_index() as u16,
        sequence: src.sequence_index(),
        station_index: src.station_index(),
        colour_scheme: src.track_colour_scheme(),
        has_chain: src.has_chain(),
        ..TrackElement::default()
    };
    // The ghost train keeps its door animation where other rides store seat rotation
    if ride_type == rct1_tables::rides::GHOST_TRAIN as RideType {
        track.door_a_state = src.door_a_state();
        track.door_b_state = src.door_b_state();
    } else {
        track.seat_rotation = DEFAULT_SEAT_ROTATION;
    }
    if track_type == track_type::MAZE {
        track.maze_entry = src.maze_entry();
    }
    track
}

fn convert_entrance(ctx: &ImportContext, src: &LegacyTileElement) -> Option<EntranceElement> {
    let ride_or_path = src.entrance_ride_or_path();
    let entrance = match src.entrance_type() {
        ENTRANCE_TYPE_RIDE_ENTRANCE | ENTRANCE_TYPE_RIDE_EXIT => EntranceElement {
            kind: if src.entrance_type() == ENTRANCE_TYPE_RIDE_ENTRANCE {
                EntranceKind::RideEntrance
            } else {
                EntranceKind::RideExit
            },
            ride_index: Some(ride_or_path as u16),
            station_index: src.entrance_station(),
            sequence: src.entrance_sequence(),
            path_surface: None,
            entrance_object: None,
        },
        ENTRANCE_TYPE_PARK_ENTRANCE => EntranceElement {
            kind: EntranceKind::ParkEntrance,
            ride_index: None,
            station_index: 0,
            sequence: src.entrance_sequence(),
            path_surface: ctx.footpath_surface(ride_or_path),
            entrance_object: Some(PARK_ENTRANCE_INDEX),
        },
        other => {
            debug!(entrance_type = other, "skipping unknown entrance type");
            return None;
        }
    };
    Some(entrance)
}

fn convert_walls(ctx: &ImportContext, src: &LegacyTileElement, out: &mut Vec<TileElement>) {
    for edge in 0..4 {
        let Some(code) = src.wall_type(edge) else { continue };
        let wall = scenery::normalise_wall(code, to_native_colour(src.wall_colour()));
        let Some(entry) = ctx.wall_map.index(wall.wall_type as usize) else {
            debug!(code, "dropping wall without an object");
            continue;
        };

        let mut base = src.base_height();
        let mut clearance = src.clearance_height();
        let mut slope = wall_edge_slope(src.wall_slope(), edge);
        if slope & (EDGE_SLOPE_UPWARDS | EDGE_SLOPE_DOWNWARDS) != 0 {
            clearance = clearance.saturating_add(LAND_HEIGHT_STEP);
        }
        if slope & EDGE_SLOPE_ELEVATED != 0 {
            slope &= !EDGE_SLOPE_ELEVATED;
            base = base.saturating_add(LAND_HEIGHT_STEP);
            clearance = clearance.saturating_add(LAND_HEIGHT_STEP);
        }

        let mut e = TileElement::new(
            base,
            clearance,
            edge as u8,
            TileElementKind::Wall(WallElement {
                entry,
                slope,
                primary_colour: wall.primary,
                secondary_colour: wall.secondary,
                tertiary_colour: rct1_tables::colours::native::BLACK,
                banner_index: None,
            }),
        );
        e.is_ghost = src.is_ghost();
        out.push(e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::tile_element::build_element_array;
    use crate::codec::Edition;
    use crate::import::discovery;

    fn map_with(chain: Vec<LegacyTileElement>) -> S4 {
        let mut s4 = S4::new_blank();
        let mut chain = Some(chain);
        s4.tile_elements = build_element_array(|coords| {
            if coords.x == 5 && coords.y == 7 {
                chain.take().unwrap_or_default()
            } else {
                Vec::new()
            }
        });
        s4
    }

    fn import(s4: &S4) -> Park {
        let mut ctx = ImportContext::new(Edition::LoopyLandscapes);
        discovery::scan_map(s4, &mut ctx);
        let mut park = Park::new();
        import_tile_elements(s4, &ctx, &mut park);
        park
    }

    #[test]
    fn test_walls_expand_per_edge() {
        let s4 = map_with(vec![
            LegacyTileElement::surface(14, 0, 0),
            LegacyTileElement::wall(14, [Some(0), None, Some(1), Some(0)], 0, 0),
        ]);
        let park = import(&s4);
        let tile = park.tiles.tile(5, 7);
        let walls: Vec<_> = tile.iter().filter(|e| e.as_wall().is_some()).collect();
        assert_eq!(walls.len(), 3);
        assert_eq!(walls.iter().map(|w| w.direction).collect::<Vec<_>>(), vec![0, 2, 3]);
        let last: Vec<bool> = tile.iter().map(|e| e.is_last_for_tile).collect();
        assert_eq!(last, vec![false, false, false, true]);
    }

    #[test]
    fn test_out_of_range_banner_is_unlinked() {
        let s4 = map_with(vec![
            LegacyTileElement::surface(14, 0, 0),
            LegacyTileElement::banner(14, 200, 0),
            LegacyTileElement::banner(14, 3, 1),
        ]);
        let park = import(&s4);
        let banners: Vec<_> = park.tiles.tile(5, 7).iter().filter_map(|e| e.as_banner()).collect();
        assert_eq!(banners[0].index, None);
        assert_eq!(banners[1].index, Some(3));
        // the rest of the map still converts
        assert!(park.tiles.surface(100, 100).is_some());
    }

    #[test]
    fn test_flat_ride_track_remapped() {
        let mut s4 = map_with(vec![
            LegacyTileElement::surface(14, 0, 0),
            LegacyTileElement::track(14, 0, 111, 0),
        ]);
        s4.rides[0].ride_type = rct1_tables::rides::MERRY_GO_ROUND;
        let park = import(&s4);
        let track = park.tiles.tile(5, 7).iter().find_map(|e| e.as_track()).copied().unwrap();
        assert_eq!(track.track_type, track_type::FLAT_TRACK_4X4);
        assert_eq!(track.seat_rotation, DEFAULT_SEAT_ROTATION);
    }

    #[test]
    fn test_broken_path_addition() {
        let s4 = map_with(vec![
            LegacyTileElement::surface(14, 0, 0),
            LegacyTileElement::path(14, paths::PATH_TARMAC, paths::ADDITION_BROKEN_LAMP_1),
        ]);
        let park = import(&s4);
        let path = park.tiles.tile(5, 7).iter().find_map(|e| match &e.kind {
            TileElementKind::Path(p) => Some(*p),
            _ => None,
        });
        let path = path.unwrap();
        assert!(path.addition.is_some());
        assert!(path.addition_is_broken);
    }

    #[test]
    fn test_wall_edge_slope() {
        assert_eq!(wall_edge_slope(0, 0), 0);
        assert_eq!(wall_edge_slope(0b0110, 0), EDGE_SLOPE_ELEVATED);
        assert_eq!(wall_edge_slope(0b0001, 1), EDGE_SLOPE_DOWNWARDS);
        assert_eq!(wall_edge_slope(0b0001, 2), EDGE_SLOPE_UPWARDS);
        assert_eq!(wall_edge_slope(0b1_0001, 2), EDGE_SLOPE_UPWARDS);
    }
}
