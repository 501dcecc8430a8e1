//! Legacy tile elements
//!
//! Every element is 8 bytes. The first four are shared by all types:
//! type/direction, flags, base height and clearance height. The meaning of
//! the last four depends on the element type. Elements of one tile are
//! stored contiguously, and the last one carries `FLAG_LAST_FOR_TILE`.

use super::{BinaryReader, BinaryWriter};
use crate::error::Result;

pub const MAP_SIZE: usize = 128;
pub const MAX_TILE_ELEMENTS: usize = 0xC000;
pub const TILE_ELEMENT_SIZE: usize = 8;

pub const FLAG_GHOST: u8 = 0x10;
pub const FLAG_BROKEN: u8 = 0x20;
pub const FLAG_LAST_FOR_TILE: u8 = 0x80;

pub const TYPE_MASK: u8 = 0x3C;
pub const DIRECTION_MASK: u8 = 0x03;
pub const TRACK_CHAIN_LIFT: u8 = 0x80;

/// Base height of an element the game has deleted but not compacted away
pub const DELETED_HEIGHT: u8 = 0xFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyElementKind {
    Surface,
    Path,
    Track,
    SmallScenery,
    Entrance,
    Wall,
    LargeScenery,
    Banner,
}

impl LegacyElementKind {
    pub fn from_type_byte(b: u8) -> Self {
        match b & TYPE_MASK {
            0x00 => LegacyElementKind::Surface,
            0x04 => LegacyElementKind::Path,
            0x08 => LegacyElementKind::Track,
            0x0C => LegacyElementKind::SmallScenery,
            0x10 => LegacyElementKind::Entrance,
            0x14 => LegacyElementKind::Wall,
            0x18 => LegacyElementKind::LargeScenery,
            _ => LegacyElementKind::Banner,
        }
    }

    pub fn type_bits(self) -> u8 {
        match self {
            LegacyElementKind::Surface => 0x00,
            LegacyElementKind::Path => 0x04,
            LegacyElementKind::Track => 0x08,
            LegacyElementKind::SmallScenery => 0x0C,
            LegacyElementKind::Entrance => 0x10,
            LegacyElementKind::Wall => 0x14,
            LegacyElementKind::LargeScenery => 0x18,
            LegacyElementKind::Banner => 0x1C,
        }
    }
}

pub const ENTRANCE_TYPE_RIDE_ENTRANCE: u8 = 0;
pub const ENTRANCE_TYPE_RIDE_EXIT: u8 = 1;
pub const ENTRANCE_TYPE_PARK_ENTRANCE: u8 = 2;

/// Wall edge type marking "no wall on this edge"
pub const WALL_EDGE_ABSENT: u8 = 0x0F;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LegacyTileElement(pub [u8; TILE_ELEMENT_SIZE]);

impl LegacyTileElement {
    pub fn read(r: &mut BinaryReader) -> Result<Self> {
        Ok(Self(r.read_array()?))
    }

    pub fn write(&self, w: &mut BinaryWriter) {
        w.write_bytes(&self.0);
    }

    fn new(kind: LegacyElementKind, base_height: u8, clearance_height: u8) -> Self {
        let mut e = Self::default();
        e.0[0] = kind.type_bits();
        e.0[2] = base_height;
        e.0[3] = clearance_height;
        e
    }

    pub fn kind(&self) -> LegacyElementKind {
        LegacyElementKind::from_type_byte(self.0[0])
    }

    pub fn direction(&self) -> u8 {
        self.0[0] & DIRECTION_MASK
    }

    pub fn set_direction(&mut self, direction: u8) {
        self.0[0] = (self.0[0] & !DIRECTION_MASK) | (direction & DIRECTION_MASK);
    }

    pub fn flags(&self) -> u8 {
        self.0[1]
    }

    pub fn is_ghost(&self) -> bool {
        self.0[1] & FLAG_GHOST != 0
    }

    pub fn is_last_for_tile(&self) -> bool {
        self.0[1] & FLAG_LAST_FOR_TILE != 0
    }

    pub fn set_last_for_tile(&mut self, last: bool) {
        if last {
            self.0[1] |= FLAG_LAST_FOR_TILE;
        } else {
            self.0[1] &= !FLAG_LAST_FOR_TILE;
        }
    }

    pub fn base_height(&self) -> u8 {
        self.0[2]
    }

    pub fn clearance_height(&self) -> u8 {
        self.0[3]
    }

    pub fn is_deleted(&self) -> bool {
        self.0[2] == DELETED_HEIGHT
    }

    // Surface

    pub fn surface(base_height: u8, surface_style: u8, edge_style: u8) -> Self {
        let mut e = Self::new(LegacyElementKind::Surface, base_height, base_height);
        e.0[0] |= (surface_style >> 3) & 0x01;
        e.0[0] |= (edge_style & 0x08) << 4;
        e.0[4] = (edge_style & 0x07) << 5;
        e.0[5] = (surface_style & 0x07) << 5;
        e
    }

    pub fn surface_slope(&self) -> u8 {
        self.0[4] & 0x1F
    }

    pub fn surface_style(&self) -> u8 {
        (self.0[5] >> 5) | ((self.0[0] & 0x01) << 3)
    }

    pub fn edge_style(&self) -> u8 {
        (self.0[4] >> 5) | ((self.0[0] & 0x80) >> 4)
    }

    pub fn water_height(&self) -> u8 {
        self.0[5] & 0x1F
    }

    pub fn set_water_height(&mut self, height: u8) {
        self.0[5] = (self.0[5] & 0xE0) | (height & 0x1F);
    }

    pub fn grass_length(&self) -> u8 {
        self.0[6]
    }

    pub fn ownership(&self) -> u8 {
        self.0[7] & 0xF0
    }

    pub fn set_ownership(&mut self, ownership: u8) {
        self.0[7] = (self.0[7] & 0x0F) | (ownership & 0xF0);
    }

    pub fn park_fences(&self) -> u8 {
        self.0[7] & 0x0F
    }

    // Path

    pub fn path(base_height: u8, path_code: u8, addition: u8) -> Self {
        let mut e = Self::new(LegacyElementKind::Path, base_height, base_height + 4);
        e.0[0] |= path_code & 0x03;
        e.0[4] = (path_code & 0x3C) << 2;
        e.0[5] = addition & 0x0F;
        e
    }

    /// Combined surface code: path type in the upper bits, colour in the low two
    pub fn path_code(&self) -> u8 {
        ((self.0[4] & 0xF0) >> 2) | (self.0[0] & 0x03)
    }

    pub fn path_is_sloped(&self) -> bool {
        self.0[4] & 0x04 != 0
    }

    pub fn path_slope_direction(&self) -> u8 {
        self.0[4] & 0x03
    }

    pub fn path_addition(&self) -> u8 {
        self.0[5] & 0x0F
    }

    pub fn path_edges(&self) -> u8 {
        self.0[6]
    }

    pub fn path_support_type(&self) -> u8 {
        self.0[7] & 0x03
    }

    // Track

    pub fn track(base_height: u8, ride_index: u8, track_type: u8, sequence: u8) -> Self {
        let mut e = Self::new(LegacyElementKind::Track, base_height, base_height + 4);
        e.0[4] = track_type;
        e.0[6] = ride_index;
        e.0[7] = sequence & 0x0F;
        e
    }

    pub fn track_type(&self) -> u8 {
        self.0[4]
    }

    pub fn maze_entry(&self) -> u16 {
        u16::from_le_bytes([self.0[4], self.0[5]])
    }

    pub fn has_chain(&self) -> bool {
        self.0[0] & TRACK_CHAIN_LIFT != 0
    }

    pub fn set_chain(&mut self, chain: bool) {
        if chain {
            self.0[0] |= TRACK_CHAIN_LIFT;
        } else {
            self.0[0] &= !TRACK_CHAIN_LIFT;
        }
    }

    pub fn track_colour_scheme(&self) -> u8 {
        self.0[5] & 0x03
    }

    pub fn door_a_state(&self) -> u8 {
        (self.0[5] >> 2) & 0x07
    }

    pub fn door_b_state(&self) -> u8 {
        (self.0[5] >> 5) & 0x07
    }

    pub fn ride_index(&self) -> u8 {
        self.0[6]
    }

    pub fn sequence_index(&self) -> u8 {
        self.0[7] & 0x0F
    }

    pub fn station_index(&self) -> u8 {
        self.0[7] >> 4
    }

    // Small scenery

    pub fn small_scenery(base_height: u8, entry: u8, primary: u8, secondary: u8) -> Self {
        let mut e = Self::new(LegacyElementKind::SmallScenery, base_height, base_height + 4);
        e.0[4] = entry;
        e.0[6] = primary & 0x1F;
        e.0[7] = secondary & 0x1F;
        e
    }

    pub fn small_scenery_entry(&self) -> u8 {
        self.0[4]
    }

    pub fn small_scenery_age(&self) -> u8 {
        self.0[5]
    }

    pub fn primary_colour(&self) -> u8 {
        self.0[6] & 0x1F
    }

    pub fn secondary_colour(&self) -> u8 {
        self.0[7] & 0x1F
    }

    pub fn scenery_quadrant(&self) -> u8 {
        (self.0[1] >> 6) & 0x03
    }

    // Entrance

    pub fn entrance(base_height: u8, entrance_type: u8, sequence: u8, ride_or_path: u8) -> Self {
        let mut e = Self::new(LegacyElementKind::Entrance, base_height, base_height + 12);
        e.0[4] = entrance_type;
        e.0[5] = sequence;
        e.0[6] = ride_or_path;
        e
    }

    pub fn entrance_type(&self) -> u8 {
        self.0[4]
    }

    pub fn entrance_sequence(&self) -> u8 {
        self.0[5] & 0x0F
    }

    pub fn entrance_station(&self) -> u8 {
        self.0[5] >> 4
    }

    /// Ride index for ride entrances/exits, path type for park entrances
    pub fn entrance_ride_or_path(&self) -> u8 {
        self.0[6]
    }

    // Wall

    /// Builds a wall element; `edges` holds one wall type per compass
    /// edge, `None` meaning no wall on that edge.
    pub fn wall(base_height: u8, edges: [Option<u8>; 4], colour: u8, slope: u8) -> Self {
        let mut e = Self::new(LegacyElementKind::Wall, base_height, base_height + 4);
        let mut type_a: u8 = 0;
        let mut type_b: u16 = 0;
        for (edge, wall_type) in edges.iter().enumerate() {
            let (a, b) = match wall_type {
                Some(t) => (t & 0x03, ((t >> 2) & 0x0F) as u16),
                None => (0, WALL_EDGE_ABSENT as u16),
            };
            type_a |= a << (edge * 2);
            type_b |= b << (edge * 4);
        }
        e.0[0] |= (colour & 0x18) << 3;
        e.0[4] = (slope & 0x1F) | ((colour & 0x07) << 5);
        e.0[5] = type_a;
        e.0[6] = type_b as u8;
        e.0[7] = (type_b >> 8) as u8;
        e
    }

    pub fn wall_slope(&self) -> u8 {
        self.0[4] & 0x1F
    }

    pub fn wall_colour(&self) -> u8 {
        ((self.0[0] & 0xC0) >> 3) | ((self.0[4] & 0xE0) >> 5)
    }

    /// Wall type on one edge, `None` when the edge has no wall
    pub fn wall_type(&self, edge: usize) -> Option<u8> {
        let type_a = (self.0[5] >> (edge * 2)) & 0x03;
        let type_b = ((u16::from(self.0[6]) | (u16::from(self.0[7]) << 8)) >> (edge * 4)) as u8 & 0x0F;
        if type_b == WALL_EDGE_ABSENT {
            return None;
        }
        Some(type_a | (type_b << 2))
    }

    // Large scenery

    pub fn large_scenery(base_height: u8, entry: u16, sequence: u8, primary: u8, secondary: u8) -> Self {
        let mut e = Self::new(LegacyElementKind::LargeScenery, base_height, base_height + 4);
        let packed = (entry & 0x3FF) | ((sequence as u16) << 10);
        e.0[4..6].copy_from_slice(&packed.to_le_bytes());
        e.0[6] = primary & 0x1F;
        e.0[7] = secondary & 0x1F;
        e
    }

    pub fn large_scenery_entry(&self) -> u16 {
        u16::from_le_bytes([self.0[4], self.0[5]]) & 0x3FF
    }

    pub fn large_scenery_sequence(&self) -> u8 {
        (u16::from_le_bytes([self.0[4], self.0[5]]) >> 10) as u8
    }

    // Banner

    pub fn banner(base_height: u8, index: u8, position: u8) -> Self {
        let mut e = Self::new(LegacyElementKind::Banner, base_height, base_height + 4);
        e.0[4] = index;
        e.0[5] = position;
        e.0[6] = 0x0F;
        e
    }

    pub fn banner_index(&self) -> u8 {
        self.0[4]
    }

    pub fn banner_position(&self) -> u8 {
        self.0[5]
    }

    pub fn banner_allowed_edges(&self) -> u8 {
        self.0[6]
    }
}

/// Tile coordinates in the 128x128 legacy map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoords {
    pub x: u8,
    pub y: u8,
}

/// Walks the flat element array tile by tile (y-major, then x), yielding
/// each tile's chain. Stops early if the array runs out.
pub struct TileChains<'a> {
    elements: &'a [LegacyTileElement],
    pos: usize,
    tile: usize,
}

impl<'a> TileChains<'a> {
    pub fn new(elements: &'a [LegacyTileElement]) -> Self {
        Self { elements, pos: 0, tile: 0 }
    }
}

impl<'a> Iterator for TileChains<'a> {
    type Item = (TileCoords, &'a [LegacyTileElement]);

    fn next(&mut self) -> Option<Self::Item> {
        if self.tile >= MAP_SIZE * MAP_SIZE || self.pos >= self.elements.len() {
            return None;
        }
        let start = self.pos;
        let len = self.elements[start..]
            .iter()
            .position(|e| e.is_last_for_tile())
            .map(|i| i + 1)
            .unwrap_or(self.elements.len() - start);
        self.pos += len;
        let coords = TileCoords {
            x: (self.tile % MAP_SIZE) as u8,
            y: (self.tile / MAP_SIZE) as u8,
        };
        self.tile += 1;
        Some((coords, &self.elements[start..start + len]))
    }
}

/// Every live element of the map with its coordinates
pub fn live_elements(elements: &[LegacyTileElement]) -> impl Iterator<Item = (TileCoords, &LegacyTileElement)> {
    TileChains::new(elements)
        .flat_map(|(coords, chain)| chain.iter().map(move |e| (coords, e)))
        .filter(|(_, e)| !e.is_deleted())
}

/// Builds a flat element array from per-tile chains, marking each chain's
/// final element. Tiles without a chain get a bare grass surface.
pub fn build_element_array<F>(mut chain_for: F) -> Vec<LegacyTileElement>
where
    F: FnMut(TileCoords) -> Vec<LegacyTileElement>,
{
    let mut out = Vec::with_capacity(MAX_TILE_ELEMENTS);
    for y in 0..MAP_SIZE {
        for x in 0..MAP_SIZE {
            let coords = TileCoords { x: x as u8, y: y as u8 };
            let mut chain = chain_for(coords);
            if chain.is_empty() {
                chain.push(LegacyTileElement::surface(14, 0, 0));
            }
            for e in chain.iter_mut() {
                e.set_last_for_tile(false);
            }
            if let Some(last) = chain.last_mut() {
                last.set_last_for_tile(true);
            }
            out.extend(chain);
        }
    }
    out.resize(MAX_TILE_ELEMENTS, LegacyTileElement::default());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_styles_roundtrip_through_split_bits() {
        let e = LegacyTileElement::surface(20, 0x0B, 0x09);
        assert_eq!(e.kind(), LegacyElementKind::Surface);
        assert_eq!(e.surface_style(), 0x0B);
        assert_eq!(e.edge_style(), 0x09);
        assert_eq!(e.base_height(), 20);
    }

    #[test]
    fn test_path_code() {
        let e = LegacyTileElement::path(14, 0x15, 3);
        assert_eq!(e.kind(), LegacyElementKind::Path);
        assert_eq!(e.path_code(), 0x15);
        assert_eq!(e.path_addition(), 3);
        assert!(!e.path_is_sloped());
    }

    #[test]
    fn test_wall_edges() {
        let e = LegacyTileElement::wall(14, [Some(5), None, Some(0x3B), None], 0x1A, 2);
        assert_eq!(e.wall_type(0), Some(5));
        assert_eq!(e.wall_type(1), None);
        assert_eq!(e.wall_type(2), Some(0x3B));
        assert_eq!(e.wall_type(3), None);
        assert_eq!(e.wall_colour(), 0x1A);
        assert_eq!(e.wall_slope(), 2);
    }

    #[test]
    fn test_large_scenery_packing() {
        let e = LegacyTileElement::large_scenery(10, 0x2F1, 5, 1, 2);
        assert_eq!(e.large_scenery_entry(), 0x2F1);
        assert_eq!(e.large_scenery_sequence(), 5);
    }

    #[test]
    fn test_tile_chains() {
        let elements = build_element_array(|c| {
            if c.x == 1 && c.y == 0 {
                vec![LegacyTileElement::surface(14, 0, 0), LegacyTileElement::banner(16, 3, 0)]
            } else {
                Vec::new()
            }
        });
        let mut chains = TileChains::new(&elements);
        let (c0, first) = chains.next().unwrap();
        assert_eq!((c0.x, c0.y), (0, 0));
        assert_eq!(first.len(), 1);
        let (c1, second) = chains.next().unwrap();
        assert_eq!((c1.x, c1.y), (1, 0));
        assert_eq!(second.len(), 2);
        assert!(!second[0].is_last_for_tile());
        assert!(second[1].is_last_for_tile());
        assert_eq!(TileChains::new(&elements).count(), MAP_SIZE * MAP_SIZE);
    }

    #[test]
    fn test_deleted_elements_are_skipped() {
        let elements = build_element_array(|c| {
            if c.x == 0 && c.y == 0 {
                let mut deleted = LegacyTileElement::banner(0, 0, 0);
                deleted.0[2] = DELETED_HEIGHT;
                vec![LegacyTileElement::surface(14, 0, 0), deleted]
            } else {
                Vec::new()
            }
        });
        assert_eq!(live_elements(&elements).count(), MAP_SIZE * MAP_SIZE);
    }
}
