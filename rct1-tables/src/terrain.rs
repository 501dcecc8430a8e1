static TERRAIN_SURFACES: [&str; 16] = [
    "rct2.terrain_surface.grass",
    "rct2.terrain_surface.sand",
    "rct2.terrain_surface.dirt",
    "rct2.terrain_surface.rock",
    "rct2.terrain_surface.martian",
    "rct2.terrain_surface.chequerboard",
    "rct2.terrain_surface.grass_clumps",
    "rct1aa.terrain_surface.roof_red",
    "rct2.terrain_surface.ice",
    "rct1ll.terrain_surface.wood",
    "rct1ll.terrain_surface.rust",
    "rct1ll.terrain_surface.roof_grey",
    "rct2.terrain_surface.grid_red",
    "rct2.terrain_surface.grid_yellow",
    "rct2.terrain_surface.grid_purple",
    "rct2.terrain_surface.grid_green",
];

static TERRAIN_EDGES: [&str; 16] = [
    "rct2.terrain_edge.rock",
    "rct1.terrain_edge.brick",
    "rct1.terrain_edge.iron",
    "rct2.terrain_edge.wood_red",
    "rct1aa.terrain_edge.grey",
    "rct1aa.terrain_edge.yellow",
    "rct2.terrain_edge.wood_black",
    "rct1aa.terrain_edge.red",
    "rct2.terrain_edge.ice",
    "rct1ll.terrain_edge.purple",
    "rct1ll.terrain_edge.green",
    "rct1ll.terrain_edge.stone_brown",
    "rct1ll.terrain_edge.stone_grey",
    "rct1ll.terrain_edge.skyscraper_a",
    "rct1ll.terrain_edge.skyscraper_b",
    "rct1.terrain_edge.wood_grey",
];

pub const WATER_BLUE: u8 = 0;
pub const WATER_ORANGE: u8 = 1;

/// Terrain surface object for a legacy surface style. Unknown styles are grass.
pub fn terrain_surface_object(style: u8) -> &'static str {
    TERRAIN_SURFACES
        .get(style as usize)
        .copied()
        .unwrap_or(TERRAIN_SURFACES[0])
}

pub fn terrain_surface_objects() -> impl Iterator<Item = &'static str> {
    TERRAIN_SURFACES.iter().copied()
}

/// Terrain edge object for a legacy edge style. Unknown styles are rock.
pub fn terrain_edge_object(style: u8) -> &'static str {
    TERRAIN_EDGES.get(style as usize).copied().unwrap_or(TERRAIN_EDGES[0])
}

pub fn terrain_edge_objects() -> impl Iterator<Item = &'static str> {
    TERRAIN_EDGES.iter().copied()
}

pub fn water_object(colour: u8) -> &'static str {
    match colour {
        WATER_ORANGE => "rct2.water.wtrorng",
        _ => "rct2.water.wtrcyan",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_fallbacks() {
        assert_eq!(terrain_surface_object(3), "rct2.terrain_surface.rock");
        assert_eq!(terrain_surface_object(200), "rct2.terrain_surface.grass");
        assert_eq!(terrain_edge_object(200), "rct2.terrain_edge.rock");
        assert_eq!(terrain_surface_objects().count(), 16);
    }

    #[test]
    fn test_water() {
        assert_eq!(water_object(WATER_BLUE), "rct2.water.wtrcyan");
        assert_eq!(water_object(WATER_ORANGE), "rct2.water.wtrorng");
        assert_eq!(water_object(7), "rct2.water.wtrcyan");
    }
}
