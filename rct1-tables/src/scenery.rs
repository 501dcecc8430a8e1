use crate::colours::native;
use crate::paths;

macro_rules! objects {
    ($prefix:literal; $($name:literal),* $(,)?) => {
        [$(concat!($prefix, $name)),*]
    };
}

pub const SMALL_SCENERY_TULIPS_RED_YELLOW: u8 = 65;
pub const SMALL_SCENERY_TULIPS_WHITE_YELLOW: u8 = 68;
pub const SMALL_SCENERY_GEOMETRIC_SCULPTURE_1: u8 = 157;
pub const SMALL_SCENERY_GEOMETRIC_SCULPTURE_2: u8 = 162;
pub const SMALL_SCENERY_GEOMETRIC_SCULPTURE_3: u8 = 168;
pub const SMALL_SCENERY_GEOMETRIC_SCULPTURE_4: u8 = 170;
pub const SMALL_SCENERY_GEOMETRIC_SCULPTURE_5: u8 = 171;
pub const SMALL_SCENERY_SMALL_RED_GARDENS: u8 = 176;

static SMALL_SCENERY: [&str; 237] = objects!["rct1.scenery_small.";
    // 0
    "tree_scots_pine", "tree_beech", "tree_red_horse_chestnut", "tree_black_poplar",
    "tree_caucasian_fir", "tree_cedar_of_lebanon", "tree_red_fir", "tree_lombardy_poplar",
    "tree_silver_birch", "tree_copper_beech", "tree_ginkgo", "tree_weeping_willow",
    "tree_common_oak", "tree_red_oak", "tree_white_oak", "tree_weeping_birch",
    "tree_honey_locust", "tree_common_lime", "tree_sycamore", "tree_field_maple",
    // 20
    "tree_bhutan_pine", "tree_dead_tree", "tree_norway_spruce", "tree_blue_spruce",
    "tree_silver_fir", "tree_arizona_cypress", "tree_chinese_juniper", "tree_monkey_puzzle",
    "tree_eucalyptus", "tree_palm", "tree_cypress", "tree_yucca",
    "tree_cactus_1", "tree_cactus_2", "tree_cactus_3", "tree_cactus_4",
    "tree_cactus_5", "tree_snowy_fir", "tree_snowy_pine", "tree_snowy_spruce",
    // 40
    "shrub_box_hedge", "shrub_round_hedge", "shrub_privet", "shrub_laurel",
    "shrub_rhododendron", "shrub_hibiscus", "shrub_holly", "shrub_juniper",
    "shrub_barberry", "shrub_gorse", "shrub_heather", "shrub_bamboo",
    "shrub_fern", "shrub_grass_clump", "shrub_reeds", "shrub_bulrushes",
    "garden_rose_bed_red", "garden_rose_bed_yellow", "garden_rose_bed_white", "garden_pansy_bed",
    // 60
    "garden_daisy_bed", "garden_geranium_bed", "garden_marigold_bed", "garden_heather_bed",
    "garden_bluebell_bed", "tulips_red_yellow", "garden_poppy_bed", "garden_crocus_bed",
    "tulips_white_yellow", "garden_shrub_bed", "garden_low_flowers", "garden_mixed_flowers",
    "fountain_small", "fountain_round", "fountain_square", "fountain_cherub",
    "fountain_dolphin", "fountain_lion", "fountain_modern", "fountain_tiered",
    // 80
    "statue_woman", "statue_man", "statue_horse", "statue_dragon",
    "statue_eagle", "statue_lion", "statue_knight", "statue_angel",
    "mine_cart", "mine_lamp", "mine_barrel", "mine_crate",
    "mine_tools", "mine_support", "mine_pump", "mine_sign",
    "roman_column", "roman_broken_column", "roman_statue", "roman_urn",
    // 100
    "roman_fountain", "roman_bench", "roman_pillar", "roman_arch_piece",
    "egypt_sphinx", "egypt_obelisk", "egypt_palm", "egypt_statue",
    "egypt_pillar", "egypt_urn", "egypt_torch", "egypt_mummy",
    "martian_rock_1", "martian_rock_2", "martian_pod", "martian_antenna",
    "martian_crater", "martian_plant", "martian_crystal", "martian_probe",
    // 120
    "wonder_mushroom", "wonder_playing_card", "wonder_teapot", "wonder_giant_flower",
    "wonder_chess_pawn", "wonder_chess_knight", "wonder_candy", "wonder_clock",
    "jurassic_fern", "jurassic_cycad", "jurassic_egg", "jurassic_bones",
    "jurassic_volcano", "jurassic_rock", "jurassic_skull", "jurassic_plant",
    "spooky_gravestone", "spooky_skeleton", "spooky_pumpkin", "spooky_dead_tree",
    // 140
    "spooky_cauldron", "spooky_bat", "spooky_coffin", "spooky_ghost",
    "jungle_tree_1", "jungle_tree_2", "jungle_plant", "jungle_totem",
    "jungle_drum", "jungle_vine", "jungle_flower", "jungle_log",
    "abstract_cube", "abstract_pyramid", "abstract_sphere", "abstract_ring",
    "abstract_cone", "geometric_sculpture_1", "abstract_prism", "abstract_spiral",
    // 160
    "abstract_helix", "abstract_torus", "geometric_sculpture_2", "abstract_star",
    "snow_snowman", "snow_ice_block", "snow_ice_crystal", "snow_igloo_small",
    "geometric_sculpture_3", "snow_sledge", "geometric_sculpture_4", "geometric_sculpture_5",
    "snow_penguin", "snow_polar_bear", "snow_ice_tree", "medieval_banner",
    "small_red_gardens", "medieval_shield", "medieval_armour", "medieval_well",
    // 180
    "medieval_cart", "medieval_barrel", "medieval_torch", "medieval_tent",
    "space_satellite", "space_rocket", "space_dish", "space_robot",
    "space_capsule", "space_astronaut", "space_light", "space_panel",
    "creepy_web", "creepy_spider", "creepy_candle", "creepy_skull",
    "creepy_cauldron", "creepy_tombstone", "creepy_lantern", "creepy_crow",
    // 200
    "urban_lamp", "urban_hydrant", "urban_phone_box", "urban_post_box",
    "urban_bench", "urban_bin", "urban_traffic_light", "urban_sign",
    "pagoda_lantern", "pagoda_statue", "pagoda_bell", "pagoda_bonsai",
    "pagoda_gong", "pagoda_bridge_post", "pagoda_tree", "pagoda_urn",
    "ll_palm_1", "ll_palm_2", "ll_totem", "ll_sandcastle",
    // 220
    "ll_beach_umbrella", "ll_deckchair", "ll_surfboard", "ll_lifeguard",
    "ll_cactus", "ll_saloon_sign", "ll_wagon_wheel", "ll_barrel",
    "ll_cow_skull", "ll_cannon", "ll_flag", "ll_anchor",
    "ll_treasure", "ll_rope", "ll_pirate_skull", "ll_ice_sculpture",
    "ll_igloo",
];

static LARGE_SCENERY: [&str; 37] = objects!["rct1.scenery_large.";
    "giant_oak", "giant_pine", "rock_formation_1", "rock_formation_2",
    "mine_headframe", "mine_shaft",
    "roman_temple", "roman_arch", "colosseum_section",
    "pyramid", "temple_entrance", "pharaoh_head",
    "martian_dome", "martian_tower",
    "giant_mushroom", "giant_playing_cards",
    "dinosaur_skeleton", "tyrannosaurus", "volcano",
    "haunted_tower", "crypt",
    "jungle_temple", "giant_tiki",
    "abstract_arch", "abstract_globe",
    "garden_clock",
    "ice_castle", "giant_snowflake",
    "castle_tower", "castle_keep",
    "space_shuttle", "space_station",
    "mausoleum",
    "skyscraper", "office_block",
    "pagoda", "torii_gate",
];

pub const WALL_MESH_FENCE: u8 = 0;
pub const WALL_WOODEN_PANEL_FENCE: u8 = 1;
pub const WALL_WHITE_WOODEN_PANEL_FENCE: u8 = 2;
pub const WALL_RED_WOODEN_PANEL_FENCE: u8 = 3;
pub const WALL_WOODEN_PANEL_FENCE_WITH_SNOW: u8 = 4;
pub const WALL_WOODEN_PANEL_FENCE_WITH_GATE: u8 = 5;
pub const WALL_GLASS_SMOOTH: u8 = 14;
pub const WALL_GLASS_PANELS: u8 = 15;
pub const WALL_SMALL_GREY_CASTLE: u8 = 16;
pub const WALL_LARGE_GREY_CASTLE: u8 = 17;
pub const WALL_LARGE_GREY_CASTLE_CROSS: u8 = 18;
pub const WALL_LARGE_GREY_CASTLE_GATE: u8 = 19;
pub const WALL_LARGE_GREY_CASTLE_WINDOW: u8 = 20;
pub const WALL_MEDIUM_GREY_CASTLE: u8 = 21;

static WALLS: [&str; 48] = objects!["rct1.scenery_wall.";
    "mesh_fence", "wooden_panel_fence", "wooden_panel_fence_white", "wooden_panel_fence_red",
    "wooden_panel_fence_snow", "wooden_panel_fence_gate", "wooden_post_fence", "wooden_post_fence_red",
    "barbed_wire_fence", "brick_wall", "stone_wall", "rough_stone_wall",
    "wooden_fence", "iron_railing", "glass_smooth", "glass_panels",
    "castle_grey_small", "castle_grey_large", "castle_grey_cross", "castle_grey_gate",
    "castle_grey_window", "castle_grey_medium", "castle_brown_small", "castle_brown_large",
    "roman_column_wall", "egyptian_wall", "martian_wall", "jurassic_bamboo",
    "spooky_railing", "jungle_palisade", "abstract_panel", "ice_block_wall",
    "medieval_rampart", "space_panel", "creepy_railing", "urban_wall",
    "pagoda_fence", "mine_planks", "wonderland_hedge", "hedge",
    "conifer_hedge", "picket_fence", "railing", "chain_link_fence",
    "wooden_planks", "log_wall", "rope_fence", "bamboo_fence",
];

static BANNERS: [&str; 9] = objects!["rct2.footpath_banner.";
    "bn1", "bn2", "bn3", "bn4", "bn5", "bn6", "bn7", "bn8", "bn9",
];

pub const THEME_GENERAL: u8 = 0;
pub const THEME_MINE: u8 = 1;
pub const THEME_CLASSICAL_ROMAN: u8 = 2;
pub const THEME_EGYPTIAN: u8 = 3;
pub const THEME_MARTIAN: u8 = 4;
pub const THEME_JUMPING_FOUNTAINS: u8 = 5;
pub const THEME_WONDERLAND: u8 = 6;
pub const THEME_JURASSIC: u8 = 7;
pub const THEME_SPOOKY: u8 = 8;
pub const THEME_JUNGLE: u8 = 9;
pub const THEME_ABSTRACT: u8 = 10;
pub const THEME_GARDEN_CLOCK: u8 = 11;
pub const THEME_SNOW_ICE: u8 = 12;
pub const THEME_MEDIEVAL: u8 = 13;
pub const THEME_SPACE: u8 = 14;
pub const THEME_CREEPY: u8 = 15;
pub const THEME_URBAN: u8 = 16;
pub const THEME_PAGODA: u8 = 17;

pub const THEME_COUNT: usize = 18;

struct SceneryTheme {
    group: Option<&'static str>,
    small: &'static [u8],
    large: &'static [u8],
    walls: &'static [u8],
    banners: &'static [u8],
    path_additions: &'static [u8],
}

const fn theme(
    group: Option<&'static str>,
    small: &'static [u8],
    large: &'static [u8],
    walls: &'static [u8],
) -> SceneryTheme {
    SceneryTheme { group, small, large, walls, banners: &[], path_additions: &[] }
}

static THEMES: [SceneryTheme; THEME_COUNT] = [
    SceneryTheme {
        group: None,
        small: &[
            0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
            20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39,
            40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53, 54, 55,
            56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69, 70, 71,
            72, 73, 74, 75, 76, 77, 78, 79, 80, 81, 82, 83, 84, 85, 86, 87, 176,
        ],
        large: &[0, 1, 2, 3],
        walls: &[
            0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47,
        ],
        banners: &[0, 1, 2, 3, 4, 5, 6, 7, 8],
        path_additions: &[
            paths::ADDITION_LAMP_1,
            paths::ADDITION_LAMP_2,
            paths::ADDITION_BIN,
            paths::ADDITION_BENCH,
            paths::ADDITION_LAMP_3,
            paths::ADDITION_LAMP_4,
        ],
    },
    theme(Some("rct2.scenery_group.scgmine"), &[88, 89, 90, 91, 92, 93, 94, 95], &[4, 5], &[37]),
    theme(Some("rct2.scenery_group.scgclass"), &[96, 97, 98, 99, 100, 101, 102, 103], &[6, 7, 8], &[24]),
    theme(Some("rct2.scenery_group.scgegypt"), &[104, 105, 106, 107, 108, 109, 110, 111], &[9, 10, 11], &[25]),
    theme(Some("rct2.scenery_group.scgmart"), &[112, 113, 114, 115, 116, 117, 118, 119], &[12, 13], &[26]),
    SceneryTheme {
        group: None,
        small: &[],
        large: &[],
        walls: &[],
        banners: &[],
        path_additions: &[paths::ADDITION_JUMPING_FOUNTAIN, paths::ADDITION_JUMPING_SNOW],
    },
    theme(Some("rct2.scenery_group.scgwond"), &[120, 121, 122, 123, 124, 125, 126, 127], &[14, 15], &[]),
    theme(Some("rct2.scenery_group.scgjuras"), &[128, 129, 130, 131, 132, 133, 134, 135], &[16, 17, 18], &[27]),
    theme(Some("rct2.scenery_group.scgspook"), &[136, 137, 138, 139, 140, 141, 142, 143], &[19, 20], &[28]),
    theme(Some("rct2.scenery_group.scgjungl"), &[144, 145, 146, 147, 148, 149, 150, 151], &[21, 22], &[29]),
    theme(
        Some("rct2.scenery_group.scgabstr"),
        &[152, 153, 154, 155, 156, 157, 158, 159, 160, 161, 162, 163, 168, 170, 171],
        &[23, 24],
        &[30],
    ),
    theme(None, &[], &[25], &[]),
    theme(Some("rct2.scenery_group.scgsnow"), &[164, 165, 166, 167, 169, 172, 173, 174], &[26, 27], &[31]),
    theme(
        Some("rct2.scenery_group.scgmedie"),
        &[175, 177, 178, 179, 180, 181, 182, 183],
        &[28, 29],
        &[16, 17, 18, 19, 20, 21, 22, 23, 32],
    ),
    theme(Some("rct2.scenery_group.scgspace"), &[184, 185, 186, 187, 188, 189, 190, 191], &[30, 31], &[33]),
    theme(Some("rct2.scenery_group.scghallo"), &[192, 193, 194, 195, 196, 197, 198, 199], &[32], &[34]),
    theme(Some("rct2.scenery_group.scgurban"), &[200, 201, 202, 203, 204, 205, 206, 207], &[33, 34], &[35]),
    theme(Some("rct2.scenery_group.scgorien"), &[208, 209, 210, 211, 212, 213, 214, 215], &[35, 36], &[36]),
];

pub fn small_scenery_object(code: u8) -> Option<&'static str> {
    SMALL_SCENERY.get(code as usize).copied()
}

pub fn large_scenery_object(code: u8) -> Option<&'static str> {
    LARGE_SCENERY.get(code as usize).copied()
}

pub fn wall_object(code: u8) -> Option<&'static str> {
    WALLS.get(code as usize).copied()
}

pub fn banner_object(code: u8) -> Option<&'static str> {
    BANNERS.get(code as usize).copied()
}

/// Native scenery group object for a legacy theme, if the theme has one.
pub fn scenery_group_object(theme: u8) -> Option<&'static str> {
    THEMES.get(theme as usize).and_then(|t| t.group)
}

/// Every object a legacy scenery theme unlocks.
pub fn scenery_theme_objects(theme: u8) -> Vec<&'static str> {
    let Some(t) = THEMES.get(theme as usize) else {
        return Vec::new();
    };
    let mut objects = Vec::new();
    objects.extend(t.small.iter().filter_map(|&c| small_scenery_object(c)));
    objects.extend(t.large.iter().filter_map(|&c| large_scenery_object(c)));
    objects.extend(t.walls.iter().filter_map(|&c| wall_object(c)));
    objects.extend(t.banners.iter().filter_map(|&c| banner_object(c)));
    objects.extend(t.path_additions.iter().filter_map(|&c| paths::path_addition_object(c)));
    objects
}

/// Colour fixups for small scenery that had a fixed look in the legacy game.
///
/// Returns `(primary, secondary)` overrides in the native palette.
pub fn small_scenery_colour_override(code: u8) -> (Option<u8>, Option<u8>) {
    match code {
        SMALL_SCENERY_GEOMETRIC_SCULPTURE_1
        | SMALL_SCENERY_GEOMETRIC_SCULPTURE_2
        | SMALL_SCENERY_GEOMETRIC_SCULPTURE_3
        | SMALL_SCENERY_GEOMETRIC_SCULPTURE_4
        | SMALL_SCENERY_GEOMETRIC_SCULPTURE_5 => (None, Some(native::WHITE)),
        SMALL_SCENERY_TULIPS_RED_YELLOW | SMALL_SCENERY_TULIPS_WHITE_YELLOW => {
            (Some(native::BRIGHT_RED), Some(native::YELLOW))
        }
        SMALL_SCENERY_SMALL_RED_GARDENS => (Some(native::BRIGHT_RED), None),
        _ => (None, None),
    }
}

/// A legacy wall after colour variants have been folded into their base type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallAppearance {
    pub wall_type: u8,
    pub primary: u8,
    pub secondary: u8,
}

/// Folds colour-variant wall types into their base type and fixes colours
/// the legacy game drew without a palette. `primary` is a native colour.
pub fn normalise_wall(wall_type: u8, primary: u8) -> WallAppearance {
    let mut wall = WallAppearance { wall_type, primary, secondary: native::BLACK };
    match wall_type {
        WALL_WOODEN_PANEL_FENCE | WALL_WOODEN_PANEL_FENCE_WITH_SNOW => {
            wall.primary = native::DARK_BROWN;
        }
        WALL_WHITE_WOODEN_PANEL_FENCE => {
            wall.wall_type = WALL_WOODEN_PANEL_FENCE;
            wall.primary = native::WHITE;
        }
        WALL_RED_WOODEN_PANEL_FENCE => {
            wall.wall_type = WALL_WOODEN_PANEL_FENCE;
            wall.primary = native::SALMON_PINK;
        }
        WALL_WOODEN_PANEL_FENCE_WITH_GATE => {
            wall.secondary = primary;
            wall.primary = native::DARK_BROWN;
        }
        WALL_GLASS_SMOOTH | WALL_GLASS_PANELS => {
            wall.secondary = native::WHITE;
        }
        WALL_SMALL_GREY_CASTLE
        | WALL_LARGE_GREY_CASTLE
        | WALL_LARGE_GREY_CASTLE_CROSS
        | WALL_LARGE_GREY_CASTLE_GATE
        | WALL_LARGE_GREY_CASTLE_WINDOW
        | WALL_MEDIUM_GREY_CASTLE => {
            wall.primary = native::GREY;
        }
        _ => {}
    }
    wall
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_groups() {
        assert_eq!(scenery_group_object(THEME_GENERAL), None);
        assert_eq!(scenery_group_object(THEME_JUMPING_FOUNTAINS), None);
        assert_eq!(scenery_group_object(THEME_GARDEN_CLOCK), None);
        assert_eq!(scenery_group_object(THEME_PAGODA), Some("rct2.scenery_group.scgorien"));
        for theme in 0..THEME_COUNT as u8 {
            assert!(!scenery_theme_objects(theme).is_empty(), "theme {theme} is empty");
        }
    }

    #[test]
    fn test_theme_objects_resolve() {
        let objects = scenery_theme_objects(THEME_ABSTRACT);
        assert!(objects.contains(&"rct1.scenery_small.geometric_sculpture_3"));
        assert!(objects.contains(&"rct1.scenery_wall.abstract_panel"));
        let fountains = scenery_theme_objects(THEME_JUMPING_FOUNTAINS);
        assert_eq!(fountains.len(), 2);
    }

    #[test]
    fn test_small_scenery_overrides() {
        assert_eq!(small_scenery_object(SMALL_SCENERY_SMALL_RED_GARDENS), Some("rct1.scenery_small.small_red_gardens"));
        assert_eq!(small_scenery_colour_override(SMALL_SCENERY_TULIPS_RED_YELLOW), (Some(native::BRIGHT_RED), Some(native::YELLOW)));
        assert_eq!(small_scenery_colour_override(SMALL_SCENERY_GEOMETRIC_SCULPTURE_4), (None, Some(native::WHITE)));
        assert_eq!(small_scenery_colour_override(0), (None, None));
    }

    #[test]
    fn test_normalise_wall() {
        let red = normalise_wall(WALL_RED_WOODEN_PANEL_FENCE, native::BLACK);
        assert_eq!(red.wall_type, WALL_WOODEN_PANEL_FENCE);
        assert_eq!(red.primary, native::SALMON_PINK);

        let gate = normalise_wall(WALL_WOODEN_PANEL_FENCE_WITH_GATE, native::TEAL);
        assert_eq!(gate.primary, native::DARK_BROWN);
        assert_eq!(gate.secondary, native::TEAL);

        let plain = normalise_wall(WALL_MESH_FENCE, native::TEAL);
        assert_eq!(plain, WallAppearance { wall_type: WALL_MESH_FENCE, primary: native::TEAL, secondary: native::BLACK });
    }
}
