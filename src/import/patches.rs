use std::collections::HashMap;
use std::path::Path;

use ahash::AHashMap;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::state::tile::{
    MAP_SIZE, OWNERSHIP_AVAILABLE, OWNERSHIP_CONSTRUCTION_RIGHTS_AVAILABLE,
    OWNERSHIP_CONSTRUCTION_RIGHTS_OWNED, OWNERSHIP_OWNED,
};
use crate::state::world::Park;

const BUILTIN_PATCHES: &str = include_str!("scenario_patches.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ownership {
    Unowned,
    Owned,
    ConstructionRightsOwned,
    Available,
    ConstructionRightsAvailable,
}

impl Ownership {
    fn bits(self) -> u8 {
        match self {
            Ownership::Unowned => 0,
            Ownership::Owned => OWNERSHIP_OWNED,
            Ownership::ConstructionRightsOwned => OWNERSHIP_CONSTRUCTION_RIGHTS_OWNED,
            Ownership::Available => OWNERSHIP_AVAILABLE,
            Ownership::ConstructionRightsAvailable => OWNERSHIP_CONSTRUCTION_RIGHTS_AVAILABLE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PatchOp {
    /// Inclusive tile rectangle
    LandOwnership { from: (u8, u8), to: (u8, u8), ownership: Ownership },
    WaterHeight { from: (u8, u8), to: (u8, u8), height: u8 },
    ForceRideType { ride: u16, ride_type: u16 },
}

fn tiles_in(from: (u8, u8), to: (u8, u8)) -> impl Iterator<Item = (usize, usize)> {
    let (x0, x1) = (from.0.min(to.0) as usize, from.0.max(to.0) as usize);
    let (y0, y1) = (from.1.min(to.1) as usize, from.1.max(to.1) as usize);
    (y0..=y1.min(MAP_SIZE - 1)).flat_map(move |y| (x0..=x1.min(MAP_SIZE - 1)).map(move |x| (x, y)))
}

impl PatchOp {
    fn apply(&self, park: &mut Park) {
        match *self {
            PatchOp::LandOwnership { from, to, ownership } => {
                for (x, y) in tiles_in(from, to) {
                    if let Some(surface) = park.tiles.surface_mut(x, y) {
                        surface.ownership = ownership.bits();
                    }
                }
            }
            PatchOp::WaterHeight { from, to, height } => {
                for (x, y) in tiles_in(from, to) {
                    if let Some(surface) = park.tiles.surface_mut(x, y) {
                        surface.water_height = height;
                    }
                }
            }
            PatchOp::ForceRideType { ride, ride_type } => match park.ride_mut(ride) {
                Some(r) => r.ride_type = ride_type,
                None => warn!(ride, "patch targets a ride that does not exist"),
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScenarioPatches {
    patches: AHashMap<String, Vec<PatchOp>>,
}

impl ScenarioPatches {
    /// The patch table shipped with the crate
    pub fn builtin() -> Self {
        match Self::from_json_str(BUILTIN_PATCHES) {
            Ok(patches) => patches,
            Err(e) => {
                warn!(error = %e, "built-in scenario patches are invalid");
                Self::default()
            }
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: HashMap<String, Vec<PatchOp>> =
            serde_json::from_str(json).map_err(|e| Error::Patch(e.to_string()))?;
        let patches = raw.into_iter().map(|(name, ops)| (name.to_lowercase(), ops)).collect();
        Ok(Self { patches })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Entries in `other` replace entries for the same file
    pub fn merge(&mut self, other: ScenarioPatches) {
        self.patches.extend(other.patches);
    }

    pub fn len(&self) -> usize {
        self.patches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    pub fn for_path(&self, path: &Path) -> Option<&[PatchOp]> {
        let name = path.file_name()?.to_str()?.to_lowercase();
        self.patches.get(&name).map(Vec::as_slice)
    }

    /// Apply the patches keyed to `path`, returning how many ran
    pub fn apply(&self, path: &Path, park: &mut Park) -> usize {
        let Some(ops) = self.for_path(path) else {
            debug!(path = %path.display(), "no scenario patches");
            return 0;
        };
        for op in ops {
            op.apply(park);
        }
        info!(path = %path.display(), count = ops.len(), "applied scenario patches");
        ops.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ride::Ride;
    use crate::state::tile::{SurfaceElement, TileElement, TileElementKind};

    fn park_with_surfaces() -> Park {
        let mut park = Park::new();
        for y in 0..8 {
            for x in 0..8 {
                let surface = TileElement::new(2, 2, 0, TileElementKind::Surface(SurfaceElement::default()));
                park.tiles.set_tile(x, y, vec![surface]);
            }
        }
        park
    }

    #[test]
    fn test_builtin_parses() {
        let patches = ScenarioPatches::builtin();
        assert!(!patches.is_empty());
        assert!(patches.for_path(Path::new("/games/rct1/Scenarios/SC1.SC4")).is_some());
    }

    #[test]
    fn test_unknown_file_untouched() {
        let mut park = park_with_surfaces();
        let before = park.tiles.surface(1, 1).copied();
        let applied = ScenarioPatches::builtin().apply(Path::new("my_park.sv4"), &mut park);
        assert_eq!(applied, 0);
        assert_eq!(park.tiles.surface(1, 1).copied(), before);
    }

    #[test]
    fn test_ops() {
        let json = r#"{
            "Custom.SC4": [
                { "op": "land_ownership", "from": [3, 2], "to": [1, 1], "ownership": "owned" },
                { "op": "water_height", "from": [5, 5], "to": [5, 6], "height": 7 },
                { "op": "force_ride_type", "ride": 2, "ride_type": 52 }
            ]
        }"#;
        let patches = ScenarioPatches::from_json_str(json).unwrap();
        let mut park = park_with_surfaces();
        park.rides[2] = Some(Ride::new(2));

        assert_eq!(patches.apply(Path::new("custom.sc4"), &mut park), 3);
        assert_eq!(park.tiles.surface(2, 2).unwrap().ownership, OWNERSHIP_OWNED);
        assert_eq!(park.tiles.surface(4, 2).unwrap().ownership, 0);
        assert_eq!(park.tiles.surface(5, 6).unwrap().water_height, 7);
        assert_eq!(park.tiles.surface(5, 7).unwrap().water_height, 0);
        assert_eq!(park.ride(2).unwrap().ride_type, 52);
    }

    #[test]
    fn test_invalid_patch_file() {
        let err = ScenarioPatches::from_json_str(r#"{ "a.sc4": [ { "op": "explode" } ] }"#).unwrap_err();
        assert!(matches!(err, Error::Patch(_)));
    }
}
