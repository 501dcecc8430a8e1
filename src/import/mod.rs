pub mod context;
pub mod discovery;
pub mod entities;
pub mod entry_list;
pub mod fixups;
pub mod options;
pub mod park;
pub mod patches;
pub mod research;
pub mod rides;
pub mod scenario_index;
pub mod tiles;

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

pub use context::ImportContext;
pub use options::ImportOptions;
pub use patches::ScenarioPatches;
pub use scenario_index::ScenarioIndexEntry;

use crate::codec::{decode_park, FileKind, S4, S4_SIZE};
use crate::error::Result;
use crate::objects::{ObjectList, ObjectManager};
use crate::state::world::Park;

struct Loaded {
    s4: S4,
    ctx: ImportContext,
    path: Option<PathBuf>,
}

/// Two-step importer. [`load`](Self::load) decodes a file and returns the
/// objects it needs; [`import`](Self::import) converts it once they are
/// loaded.
pub struct S4Importer {
    options: ImportOptions,
    patches: ScenarioPatches,
    loaded: Option<Loaded>,
}

impl S4Importer {
    pub fn new(options: ImportOptions) -> Result<Self> {
        let mut patches = ScenarioPatches::builtin();
        if let Some(file) = &options.patch_file {
            patches.merge(ScenarioPatches::from_file(file)?);
            debug!(path = %file.display(), "loaded scenario patch file");
        }
        Ok(Self { options, patches, loaded: None })
    }

    /// Decode a `.sc4`/`.sv4` file and list the objects it needs
    pub fn load(&mut self, path: &Path, objects: &dyn ObjectManager) -> Result<ObjectList> {
        FileKind::from_path(path)?;
        let bytes = std::fs::read(path)?;
        self.load_bytes(&bytes, Some(path), objects)
    }

    /// Like [`load`](Self::load) for an in-memory file. `path` is only used
    /// to key scenario patches and the index entry.
    pub fn load_bytes(&mut self, bytes: &[u8], path: Option<&Path>, objects: &dyn ObjectManager) -> Result<ObjectList> {
        self.loaded = None;
        let decoded = decode_park(bytes, S4_SIZE)?;
        let s4 = S4::read(&decoded.data)?;

        let mut ctx = ImportContext::new(decoded.edition);
        discovery::discover(&s4, &mut ctx, objects);
        let required = discovery::required_objects(&s4, &ctx);
        info!(edition = ?decoded.edition, kind = ?decoded.kind, objects = required.len(), "loaded legacy park");

        self.loaded = Some(Loaded { s4, ctx, path: path.map(Path::to_path_buf) });
        Ok(required)
    }

    pub fn s4(&self) -> Option<&S4> {
        self.loaded.as_ref().map(|l| &l.s4)
    }

    pub fn context(&self) -> Option<&ImportContext> {
        self.loaded.as_ref().map(|l| &l.ctx)
    }

    /// Replace `park` with the loaded file. Objects from the last
    /// [`load`](Self::load) must already be loaded in `objects`.
    pub fn import(&mut self, objects: &dyn ObjectManager, park: &mut Park) {
        let Some(loaded) = self.loaded.as_mut() else {
            warn!("import called before a park was loaded");
            return;
        };
        let Loaded { s4, ctx, path } = loaded;
        ctx.park_value_factor = Default::default();
        *park = Park::new();

        rides::import_rides(s4, ctx, objects, park);
        rides::import_ride_measurements(s4, park);
        tiles::import_tile_elements(s4, ctx, park);
        entities::import_entities(s4, park);
        park::import_park(s4, ctx, park);
        research::import_research(s4, ctx, objects, park);

        let index_path = path.clone().unwrap_or_default();
        let entry = scenario_index::build_index_entry(&index_path, s4, objects, &mut ctx.park_value_factor);
        park.scenario.name = entry.name;
        park.scenario.details = entry.details;
        park.scenario.file_name = path.as_ref().and_then(|p| p.file_name()).map(|n| n.to_string_lossy().into_owned());

        fixups::run_all(park, objects);

        if self.options.apply_scenario_patches {
            if let Some(path) = path.as_deref() {
                self.patches.apply(path, park);
            }
        }
        info!(
            rides = park.rides().count(),
            entities = park.entities.len(),
            elements = park.tiles.element_count(),
            "imported park"
        );
    }

    /// Scenario list summary of the loaded file
    pub fn populate_index_entry(&mut self, objects: &dyn ObjectManager) -> Option<ScenarioIndexEntry> {
        let loaded = self.loaded.as_mut()?;
        let path = loaded.path.clone().unwrap_or_default();
        Some(scenario_index::build_index_entry(&path, &loaded.s4, objects, &mut loaded.ctx.park_value_factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::sawyer::{encode_sc4, encode_sv4};
    use crate::codec::{Edition, LegacyRide, LegacyTileElement};
    use crate::codec::s4::LegacyResearchItem;
    use crate::error::Error;
    use crate::objects::{ObjectRepository, ObjectType};
    use crate::state::research::ResearchType;
    use rct1_tables::{research as rs, rides as rt, vehicles as vt};

    fn load(s4: &S4, edition: Edition, repo: &mut ObjectRepository) -> S4Importer {
        let bytes = encode_sv4(&s4.to_bytes(), edition);
        let mut importer = S4Importer::new(ImportOptions::default()).unwrap();
        let list = importer.load_bytes(&bytes, None, repo).unwrap();
        repo.load_objects(&list);
        importer
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let mut importer = S4Importer::new(ImportOptions::default()).unwrap();
        let err = importer.load(Path::new("park.sv6"), &ObjectRepository::accept_all()).unwrap_err();
        assert!(matches!(err, Error::UnknownExtension(_)));
    }

    #[test]
    fn test_rejects_garbage() {
        let mut importer = S4Importer::new(ImportOptions::default()).unwrap();
        let err = importer.load_bytes(&[1, 2, 3, 4, 5, 6, 7, 8], None, &ObjectRepository::accept_all());
        assert!(err.is_err());
        assert!(importer.s4().is_none());
    }

    #[test]
    fn test_loads_full_size_zeroed_image() {
        let bytes = encode_sv4(&vec![0u8; S4_SIZE], Edition::LoopyLandscapes);
        let mut importer = S4Importer::new(ImportOptions::default()).unwrap();
        importer.load_bytes(&bytes, None, &ObjectRepository::accept_all()).unwrap();
        let s4 = importer.s4().unwrap();
        assert_eq!(s4.game_version, 0);
        assert_eq!(s4.edition(), Edition::LoopyLandscapes);
    }

    #[test]
    fn test_import_before_load_leaves_park() {
        let mut importer = S4Importer::new(ImportOptions::default()).unwrap();
        let mut park = Park::new();
        park.name = "untouched".to_owned();
        importer.import(&ObjectRepository::accept_all(), &mut park);
        assert_eq!(park.name, "untouched");
    }

    #[test]
    fn test_one_vehicle_ride_end_to_end() {
        let mut s4 = S4::new_blank();
        s4.rides[0] = LegacyRide {
            ride_type: rt::WOODEN_ROLLER_COASTER,
            vehicle_type: vt::WOODEN_ROLLER_COASTER_TRAIN,
            ..Default::default()
        };
        s4.research_items_ll[0] =
            LegacyResearchItem::new(rs::TYPE_VEHICLE, vt::WOODEN_ROLLER_COASTER_TRAIN, rt::WOODEN_ROLLER_COASTER);
        s4.research_items_ll[1] = LegacyResearchItem::separator(rs::END_RESEARCHABLE);

        let mut repo = ObjectRepository::accept_all();
        let mut importer = load(&s4, Edition::LoopyLandscapes, &mut repo);
        let ctx = importer.context().unwrap();
        assert_eq!(ctx.rides.len(), 1);
        let identifier = ctx.rides.get(0).unwrap().to_owned();

        let mut park = Park::new();
        importer.import(&repo, &mut park);

        let ride = park.ride(0).unwrap();
        assert_eq!(ride.subtype, Some(0));
        assert_eq!(repo.get_loaded_object(ObjectType::Ride, 0).unwrap().identifier, identifier);
        let ride_items: Vec<_> =
            park.research.all_items().filter(|i| i.item_type == ResearchType::Ride).collect();
        assert_eq!(ride_items.len(), 1);
        assert_eq!(ride_items[0].entry_index, 0);
    }

    #[test]
    fn test_every_ride_resolved_or_null() {
        let mut s4 = S4::new_blank();
        s4.rides[0] = LegacyRide { ride_type: rt::MERRY_GO_ROUND, ..Default::default() };
        s4.rides[1] = LegacyRide { ride_type: rt::TOILETS, ..Default::default() };
        s4.rides[2] = LegacyRide {
            ride_type: rt::STEEL_ROLLER_COASTER,
            vehicle_type: vt::STEEL_ROLLER_COASTER_TRAIN,
            ..Default::default()
        };

        // only the merry-go-round resolves
        let mut repo = ObjectRepository::new();
        let mgr = rct1_tables::ride_type_object(rt::MERRY_GO_ROUND).unwrap();
        let mut desc = crate::objects::ObjectDescriptor::new(mgr, ObjectType::Ride);
        desc.ride_type = Some(rt::MERRY_GO_ROUND as u16);
        repo.insert(desc);

        let mut importer = load(&s4, Edition::LoopyLandscapes, &mut repo);
        let mut park = Park::new();
        importer.import(&repo, &mut park);

        for ride in park.rides() {
            match ride.subtype {
                Some(index) => assert!(repo.get_loaded_object(ObjectType::Ride, index).is_some()),
                None => assert!(ride.is_null_type()),
            }
        }
        assert!(!park.ride(0).unwrap().is_null_type());
        assert!(park.ride(1).unwrap().is_null_type());
        assert!(park.ride(2).unwrap().is_null_type());
    }

    #[test]
    fn test_out_of_range_banner_does_not_stop_tiles() {
        let mut s4 = S4::new_blank();
        s4.tile_elements = crate::codec::tile_element::build_element_array(|at| {
            let mut chain = vec![LegacyTileElement::surface(2, 0, 0)];
            if (at.x, at.y) == (3, 3) {
                chain.push(LegacyTileElement::banner(2, 0xFF, 0));
            }
            if (at.x, at.y) == (100, 100) {
                chain.push(LegacyTileElement::banner(2, 1, 0));
            }
            chain
        });
        let mut repo = ObjectRepository::accept_all();
        let mut importer = load(&s4, Edition::LoopyLandscapes, &mut repo);
        let mut park = Park::new();
        importer.import(&repo, &mut park);

        let banner = park.tiles.tile(3, 3).iter().find_map(|e| e.as_banner()).unwrap();
        assert_eq!(banner.index, None);
        let later = park.tiles.tile(100, 100);
        assert_eq!(later.len(), 2);
        assert_eq!(later[1].as_banner().unwrap().index, Some(1));
        assert!(later[1].is_last_for_tile);
    }

    #[test]
    fn test_scenario_round_trip_and_index() {
        let mut s4 = S4::new_blank();
        s4.scenario_slot_index = 2;
        s4.scenario_name = "Leafy Lake".to_owned();
        s4.game_version = Edition::AddedAttractions.version() as u32;
        let bytes = encode_sc4(&s4.to_bytes(), Edition::AddedAttractions);
        let repo = ObjectRepository::accept_all();
        let mut importer = S4Importer::new(ImportOptions::default()).unwrap();
        importer.load_bytes(&bytes, Some(Path::new("SC2.SC4")), &repo).unwrap();
        let entry = importer.populate_index_entry(&repo).unwrap();
        assert_eq!(entry.scenario_id, Some(2));
        assert_eq!(entry.source_game, "rct1");
        assert_eq!(entry.path, PathBuf::from("SC2.SC4"));
    }
}
