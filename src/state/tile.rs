use crate::objects::ObjectEntryIndex;

pub const MAP_SIZE: usize = 128;

/// Track piece numbering. Most legacy pieces keep their number; flat ride
/// footprints get their own range.
pub mod track_type {
    pub type TrackType = u16;

    pub const FLAT: TrackType = 0;
    pub const END_STATION: TrackType = 1;
    pub const BEGIN_STATION: TrackType = 2;
    pub const MIDDLE_STATION: TrackType = 3;
    pub const UP_25: TrackType = 4;
    pub const UP_60: TrackType = 5;
    pub const FLAT_TO_UP_25: TrackType = 6;
    pub const UP_25_TO_UP_60: TrackType = 7;
    pub const UP_60_TO_UP_25: TrackType = 8;
    pub const UP_25_TO_FLAT: TrackType = 9;
    pub const DIAG_UP_25_TO_FLAT: TrackType = 139;
    pub const UP_60_TO_FLAT: TrackType = 193;
    pub const DIAG_UP_60_TO_FLAT: TrackType = 197;
    pub const MAZE: TrackType = 101;

    pub const FLAT_TRACK_1X4_A: TrackType = 267;
    pub const FLAT_TRACK_2X2: TrackType = 268;
    pub const FLAT_TRACK_4X4: TrackType = 269;
    pub const FLAT_TRACK_2X4: TrackType = 270;
    pub const FLAT_TRACK_1X5: TrackType = 271;
    pub const FLAT_TRACK_1X1_A: TrackType = 272;
    pub const FLAT_TRACK_1X4_B: TrackType = 273;
    pub const FLAT_TRACK_1X1_B: TrackType = 274;
    pub const FLAT_TRACK_1X4_C: TrackType = 275;
    pub const FLAT_TRACK_3X3: TrackType = 276;

    /// Sloped pieces that end a lift hill and act as a block brake when chained
    pub fn is_block_brake_equivalent(track_type: TrackType) -> bool {
        matches!(track_type, UP_25_TO_FLAT | UP_60_TO_FLAT | DIAG_UP_25_TO_FLAT | DIAG_UP_60_TO_FLAT)
    }
}

pub const DEFAULT_SEAT_ROTATION: u8 = 4;

pub const OWNERSHIP_OWNED: u8 = 1 << 5;
pub const OWNERSHIP_CONSTRUCTION_RIGHTS_OWNED: u8 = 1 << 4;
pub const OWNERSHIP_AVAILABLE: u8 = 1 << 7;
pub const OWNERSHIP_CONSTRUCTION_RIGHTS_AVAILABLE: u8 = 1 << 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceElement {
    pub slope: u8,
    pub surface_style: Option<ObjectEntryIndex>,
    pub edge_style: Option<ObjectEntryIndex>,
    pub grass_length: u8,
    pub ownership: u8,
    pub park_fences: u8,
    pub water_height: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathElement {
    pub surface: Option<ObjectEntryIndex>,
    pub railings: Option<ObjectEntryIndex>,
    pub is_queue: bool,
    pub is_sloped: bool,
    pub slope_direction: u8,
    pub addition: Option<ObjectEntryIndex>,
    pub addition_is_broken: bool,
    pub edges: u8,
    pub ride_index: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackElement {
    pub track_type: track_type::TrackType,
    pub ride_index: u16,
    pub sequence: u8,
    pub station_index: u8,
    pub colour_scheme: u8,
    pub has_chain: bool,
    pub seat_rotation: u8,
    pub door_a_state: u8,
    pub door_b_state: u8,
    pub maze_entry: u16,
    pub is_block_brake: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SmallSceneryElement {
    pub entry: ObjectEntryIndex,
    pub age: u8,
    pub primary_colour: u8,
    pub secondary_colour: u8,
    pub quadrant: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceKind {
    RideEntrance,
    RideExit,
    ParkEntrance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntranceElement {
    pub kind: EntranceKind,
    pub ride_index: Option<u16>,
    pub station_index: u8,
    pub sequence: u8,
    pub path_surface: Option<ObjectEntryIndex>,
    pub entrance_object: Option<ObjectEntryIndex>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallElement {
    pub entry: ObjectEntryIndex,
    pub slope: u8,
    pub primary_colour: u8,
    pub secondary_colour: u8,
    pub tertiary_colour: u8,
    pub banner_index: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LargeSceneryElement {
    pub entry: ObjectEntryIndex,
    pub sequence: u8,
    pub primary_colour: u8,
    pub secondary_colour: u8,
    pub banner_index: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BannerElement {
    /// Index into the park's banner table, `None` when the link is broken
    pub index: Option<u16>,
    pub position: u8,
    pub allowed_edges: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileElementKind {
    Surface(SurfaceElement),
    Path(PathElement),
    Track(TrackElement),
    SmallScenery(SmallSceneryElement),
    Entrance(EntranceElement),
    Wall(WallElement),
    LargeScenery(LargeSceneryElement),
    Banner(BannerElement),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileElement {
    pub base_height: u8,
    pub clearance_height: u8,
    pub direction: u8,
    pub is_ghost: bool,
    pub is_last_for_tile: bool,
    pub kind: TileElementKind,
}

impl TileElement {
    pub fn new(base_height: u8, clearance_height: u8, direction: u8, kind: TileElementKind) -> Self {
        Self { base_height, clearance_height, direction, is_ghost: false, is_last_for_tile: false, kind }
    }

    pub fn as_surface(&self) -> Option<&SurfaceElement> {
        match &self.kind {
            TileElementKind::Surface(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_surface_mut(&mut self) -> Option<&mut SurfaceElement> {
        match &mut self.kind {
            TileElementKind::Surface(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_track(&self) -> Option<&TrackElement> {
        match &self.kind {
            TileElementKind::Track(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_track_mut(&mut self) -> Option<&mut TrackElement> {
        match &mut self.kind {
            TileElementKind::Track(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_entrance(&self) -> Option<&EntranceElement> {
        match &self.kind {
            TileElementKind::Entrance(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_wall(&self) -> Option<&WallElement> {
        match &self.kind {
            TileElementKind::Wall(w) => Some(w),
            _ => None,
        }
    }

    pub fn as_banner(&self) -> Option<&BannerElement> {
        match &self.kind {
            TileElementKind::Banner(b) => Some(b),
            _ => None,
        }
    }
}

/// The map as one element chain per tile
#[derive(Debug, Clone)]
pub struct TileMap {
    tiles: Vec<Vec<TileElement>>,
}

impl Default for TileMap {
    fn default() -> Self {
        Self::new()
    }
}

impl TileMap {
    pub fn new() -> Self {
        Self { tiles: vec![Vec::new(); MAP_SIZE * MAP_SIZE] }
    }

    fn index(x: usize, y: usize) -> Option<usize> {
        (x < MAP_SIZE && y < MAP_SIZE).then_some(y * MAP_SIZE + x)
    }

    pub fn tile(&self, x: usize, y: usize) -> &[TileElement] {
        Self::index(x, y).map(|i| self.tiles[i].as_slice()).unwrap_or(&[])
    }

    pub fn tile_mut(&mut self, x: usize, y: usize) -> Option<&mut Vec<TileElement>> {
        Self::index(x, y).map(move |i| &mut self.tiles[i])
    }

    /// Replace a tile's chain. Only the final element is flagged last.
    pub fn set_tile(&mut self, x: usize, y: usize, mut elements: Vec<TileElement>) {
        let Some(i) = Self::index(x, y) else { return };
        let n = elements.len();
        for (j, e) in elements.iter_mut().enumerate() {
            e.is_last_for_tile = j + 1 == n;
        }
        self.tiles[i] = elements;
    }

    pub fn surface(&self, x: usize, y: usize) -> Option<&SurfaceElement> {
        self.tile(x, y).iter().find_map(|e| e.as_surface())
    }

    pub fn surface_mut(&mut self, x: usize, y: usize) -> Option<&mut SurfaceElement> {
        self.tile_mut(x, y)?.iter_mut().find_map(|e| e.as_surface_mut())
    }

    /// Every element with its tile coordinates, row by row
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &TileElement)> {
        self.tiles.iter().enumerate().flat_map(|(i, chain)| {
            let (x, y) = (i % MAP_SIZE, i / MAP_SIZE);
            chain.iter().map(move |e| (x, y, e))
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut TileElement)> {
        self.tiles.iter_mut().enumerate().flat_map(|(i, chain)| {
            let (x, y) = (i % MAP_SIZE, i / MAP_SIZE);
            chain.iter_mut().map(move |e| (x, y, e))
        })
    }

    pub fn element_count(&self) -> usize {
        self.tiles.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> TileElement {
        TileElement::new(14, 14, 0, TileElementKind::Surface(SurfaceElement::default()))
    }

    fn banner() -> TileElement {
        TileElement::new(14, 18, 0, TileElementKind::Banner(BannerElement::default()))
    }

    #[test]
    fn test_set_tile_marks_last() {
        let mut map = TileMap::new();
        map.set_tile(3, 4, vec![surface(), banner(), banner()]);
        let chain = map.tile(3, 4);
        assert_eq!(chain.iter().filter(|e| e.is_last_for_tile).count(), 1);
        assert!(chain[2].is_last_for_tile);
        assert!(map.surface(3, 4).is_some());
        assert!(map.tile(200, 0).is_empty());
    }

    #[test]
    fn test_iter_coordinates() {
        let mut map = TileMap::new();
        map.set_tile(5, 1, vec![surface()]);
        let found: Vec<_> = map.iter().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(found, vec![(5, 1)]);
    }

    #[test]
    fn test_block_brake_pieces() {
        assert!(track_type::is_block_brake_equivalent(track_type::UP_25_TO_FLAT));
        assert!(track_type::is_block_brake_equivalent(track_type::DIAG_UP_60_TO_FLAT));
        assert!(!track_type::is_block_brake_equivalent(track_type::UP_25));
    }
}
