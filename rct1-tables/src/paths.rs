pub const PATH_QUEUE_BLUE: u8 = 0;
pub const PATH_QUEUE_RED: u8 = 1;
pub const PATH_QUEUE_YELLOW: u8 = 2;
pub const PATH_QUEUE_GREEN: u8 = 3;
pub const PATH_TARMAC: u8 = 4;
pub const PATH_TARMAC_RED: u8 = 5;
pub const PATH_TARMAC_BROWN: u8 = 6;
pub const PATH_TARMAC_GREEN: u8 = 7;
pub const PATH_DIRT: u8 = 8;
pub const PATH_DIRT_BLACK: u8 = 9;
pub const PATH_CRAZY_PAVING: u8 = 12;
pub const PATH_ROAD: u8 = 16;
pub const PATH_TILE_BROWN: u8 = 20;
pub const PATH_TILE_GREY: u8 = 21;
pub const PATH_TILE_RED: u8 = 22;
pub const PATH_TILE_GREEN: u8 = 23;

static FOOTPATH_SURFACES: [(u8, &str); 16] = [
    (PATH_QUEUE_BLUE, "rct1.footpath_surface.queue_blue"),
    (PATH_QUEUE_RED, "rct1.footpath_surface.queue_red"),
    (PATH_QUEUE_YELLOW, "rct1.footpath_surface.queue_yellow"),
    (PATH_QUEUE_GREEN, "rct1.footpath_surface.queue_green"),
    (PATH_TARMAC, "rct1.footpath_surface.tarmac"),
    (PATH_TARMAC_RED, "rct1aa.footpath_surface.tarmac_red"),
    (PATH_TARMAC_BROWN, "rct1aa.footpath_surface.tarmac_brown"),
    (PATH_TARMAC_GREEN, "rct1aa.footpath_surface.tarmac_green"),
    (PATH_DIRT, "rct1.footpath_surface.dirt"),
    (PATH_DIRT_BLACK, "rct1aa.footpath_surface.ash"),
    (PATH_CRAZY_PAVING, "rct1.footpath_surface.crazy_paving"),
    (PATH_ROAD, "rct1aa.footpath_surface.road"),
    (PATH_TILE_BROWN, "rct1.footpath_surface.tiles_brown"),
    (PATH_TILE_GREY, "rct1aa.footpath_surface.tiles_grey"),
    (PATH_TILE_RED, "rct1ll.footpath_surface.tiles_red"),
    (PATH_TILE_GREEN, "rct1ll.footpath_surface.tiles_green"),
];

/// Footpath surface object for a combined legacy path code (type | colour).
pub fn footpath_surface_object(path_code: u8) -> Option<&'static str> {
    FOOTPATH_SURFACES
        .iter()
        .find(|(code, _)| *code == path_code)
        .map(|(_, object)| *object)
}

/// Every legacy footpath surface, in seeding order.
pub fn footpath_surface_objects() -> impl Iterator<Item = &'static str> {
    FOOTPATH_SURFACES.iter().map(|(_, object)| *object)
}

pub fn path_is_queue(path_code: u8) -> bool {
    path_code < PATH_TARMAC
}

pub const SUPPORT_TRUSS: u8 = 0;
pub const SUPPORT_SPACE: u8 = 1;
pub const SUPPORT_BAMBOO: u8 = 2;

static RAILINGS: [&str; 3] = [
    "rct2.footpath_railings.wood",
    "rct1ll.footpath_railings.space",
    "rct1ll.footpath_railings.bamboo",
];

/// Railings object for a legacy support type. Unknown types fall back to truss.
pub fn railings_object(support_type: u8) -> &'static str {
    RAILINGS
        .get(support_type as usize)
        .copied()
        .unwrap_or(RAILINGS[SUPPORT_TRUSS as usize])
}

pub fn railings_objects() -> impl Iterator<Item = &'static str> {
    RAILINGS.iter().copied()
}

pub const ADDITION_NONE: u8 = 0;
pub const ADDITION_LAMP_1: u8 = 1;
pub const ADDITION_LAMP_2: u8 = 2;
pub const ADDITION_BIN: u8 = 3;
pub const ADDITION_BENCH: u8 = 4;
pub const ADDITION_JUMPING_FOUNTAIN: u8 = 5;
pub const ADDITION_LAMP_3: u8 = 6;
pub const ADDITION_LAMP_4: u8 = 7;
pub const ADDITION_BROKEN_LAMP_1: u8 = 8;
pub const ADDITION_BROKEN_LAMP_2: u8 = 9;
pub const ADDITION_BROKEN_BIN: u8 = 10;
pub const ADDITION_BROKEN_BENCH: u8 = 11;
pub const ADDITION_BROKEN_LAMP_3: u8 = 12;
pub const ADDITION_BROKEN_LAMP_4: u8 = 13;
pub const ADDITION_JUMPING_SNOW: u8 = 14;

/// Maps vandalised variants onto their intact addition.
///
/// Returns the intact code and whether the addition was broken.
pub fn normalise_path_addition(addition: u8) -> (u8, bool) {
    match addition {
        ADDITION_BROKEN_LAMP_1 => (ADDITION_LAMP_1, true),
        ADDITION_BROKEN_LAMP_2 => (ADDITION_LAMP_2, true),
        ADDITION_BROKEN_BIN => (ADDITION_BIN, true),
        ADDITION_BROKEN_BENCH => (ADDITION_BENCH, true),
        ADDITION_BROKEN_LAMP_3 => (ADDITION_LAMP_3, true),
        ADDITION_BROKEN_LAMP_4 => (ADDITION_LAMP_4, true),
        other => (other, false),
    }
}

/// Object for an intact path addition; `None` for "no addition" and
/// unknown codes.
pub fn path_addition_object(addition: u8) -> Option<&'static str> {
    match addition {
        ADDITION_LAMP_1 => Some("rct2.footpath_item.lamp1"),
        ADDITION_LAMP_2 => Some("rct2.footpath_item.lamp2"),
        ADDITION_BIN => Some("rct2.footpath_item.litter1"),
        ADDITION_BENCH => Some("rct2.footpath_item.bench1"),
        ADDITION_JUMPING_FOUNTAIN => Some("rct2.footpath_item.jumpfnt1"),
        ADDITION_LAMP_3 => Some("rct1aa.footpath_item.lamp3"),
        ADDITION_LAMP_4 => Some("rct1aa.footpath_item.lamp4"),
        ADDITION_JUMPING_SNOW => Some("rct2.footpath_item.jumpsnw1"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalise_path_addition() {
        assert_eq!(normalise_path_addition(ADDITION_BROKEN_BIN), (ADDITION_BIN, true));
        assert_eq!(normalise_path_addition(ADDITION_BROKEN_LAMP_4), (ADDITION_LAMP_4, true));
        assert_eq!(normalise_path_addition(ADDITION_BENCH), (ADDITION_BENCH, false));
        assert_eq!(normalise_path_addition(ADDITION_JUMPING_SNOW), (ADDITION_JUMPING_SNOW, false));
    }

    #[test]
    fn test_every_intact_addition_has_an_object() {
        for code in 1..=ADDITION_JUMPING_SNOW {
            let (intact, _) = normalise_path_addition(code);
            assert!(path_addition_object(intact).is_some(), "addition {code}");
        }
        assert_eq!(path_addition_object(ADDITION_NONE), None);
    }

    #[test]
    fn test_footpath_surfaces() {
        assert!(path_is_queue(PATH_QUEUE_GREEN));
        assert!(!path_is_queue(PATH_TARMAC));
        assert_eq!(footpath_surface_object(PATH_ROAD), Some("rct1aa.footpath_surface.road"));
        assert_eq!(footpath_surface_object(10), None);
        assert_eq!(footpath_surface_objects().count(), 16);
        assert_eq!(railings_object(9), "rct2.footpath_railings.wood");
    }
}
