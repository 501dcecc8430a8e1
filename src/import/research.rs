use rct1_tables::research;
use tracing::{debug, warn};

use super::context::{ImportContext, DEFAULT_SCENERY_GROUPS};
use super::discovery::research_items;
use crate::codec::s4::LegacyResearchItem;
use crate::codec::S4;
use crate::objects::{ObjectEntryIndex, ObjectManager, ObjectType};
use crate::state::world::Park;
use crate::state::research::{Research, ResearchCategory, ResearchItem, ResearchStage};

struct ResearchBuilder<'a> {
    ctx: &'a ImportContext,
    objects: &'a dyn ObjectManager,
    research: Research,
    ride_entry_used: Vec<bool>,
}

impl<'a> ResearchBuilder<'a> {
    fn new(ctx: &'a ImportContext, objects: &'a dyn ObjectManager) -> Self {
        Self {
            ctx,
            objects,
            research: Research::default(),
            ride_entry_used: vec![false; ctx.rides.capacity()],
        }
    }

    fn ride_item(&self, entry: ObjectEntryIndex) -> Option<ResearchItem> {
        let ride_type = self.objects.get_loaded_object(ObjectType::Ride, entry)?.ride_type()?;
        Some(ResearchItem::ride(entry, ride_type, ResearchCategory::for_ride_type(ride_type)))
    }

    fn insert_ride_entry(&mut self, entry: ObjectEntryIndex, researched: bool) {
        match self.ride_item(entry) {
            Some(item) => self.research.add(item, researched),
            None => warn!(entry, "dropping research item for a ride object that did not load"),
        }
    }

    fn insert_scenery_group(&mut self, entry: ObjectEntryIndex, researched: bool) {
        if self.objects.get_loaded_object(ObjectType::SceneryGroup, entry).is_none() {
            warn!(entry, "dropping research item for a scenery group that did not load");
            return;
        }
        self.research.add(ResearchItem::scenery(entry), researched);
    }

    /// A vehicle item stands in for its ride object; each object is listed once.
    fn insert_vehicle(&mut self, item: &LegacyResearchItem, researched: bool) {
        let Some(entry) = self.ctx.vehicle_type_map.index(item.item as usize) else {
            return;
        };
        let Some(used) = self.ride_entry_used.get_mut(entry as usize) else {
            return;
        };
        if !*used {
            *used = true;
            self.insert_ride_entry(entry, researched);
        }
    }
}

/// Builds the native research lists from the legacy list.
pub fn build_research(s4: &S4, ctx: &ImportContext, objects: &dyn ObjectManager) -> Research {
    let list = s4.research_list();
    let mut builder = ResearchBuilder::new(ctx, objects);

    for entry in 0..DEFAULT_SCENERY_GROUPS.len() as ObjectEntryIndex {
        builder.insert_scenery_group(entry, true);
    }

    let mut ride_type_seen = vec![false; rct1_tables::RIDE_TYPE_COUNT];
    let mut orphans: Vec<LegacyResearchItem> = Vec::new();
    let mut researched = true;

    for (i, item) in list.iter().enumerate() {
        if item.is_separator() {
            match item.item {
                research::END_AVAILABLE => researched = false,
                research::END_RESEARCHABLE | research::END => break,
                _ => {}
            }
            continue;
        }

        match item.item_type {
            research::TYPE_THEME => {
                if let Some(entry) = ctx.scenery_theme_map.index(item.item as usize) {
                    builder.insert_scenery_group(entry, researched);
                }
            }
            research::TYPE_RIDE => {
                let ride_type = item.item;
                if let Some(seen) = ride_type_seen.get_mut(ride_type as usize) {
                    *seen = true;
                }
                let Some(own_entry) = ctx.ride_type_map.index(ride_type as usize) else {
                    debug!(ride_type, "research ride type without an object");
                    continue;
                };

                let mut found_own_type = false;
                if rct1_tables::ride_type_uses_vehicles(ride_type) {
                    for (j, other) in research_items(list) {
                        if other.item_type != research::TYPE_VEHICLE || other.related_ride != ride_type {
                            continue;
                        }
                        let is_own_type = ctx.vehicle_type_map.index(other.item as usize) == Some(own_entry);
                        found_own_type |= is_own_type;
                        // Only vehicles listed before the ride, so research order is kept
                        if j < i && (researched || is_own_type) {
                            builder.insert_vehicle(other, researched);
                        }
                    }
                }

                if !found_own_type {
                    if let Some(used) = builder.ride_entry_used.get_mut(own_entry as usize) {
                        if !*used {
                            *used = true;
                            builder.insert_ride_entry(own_entry, researched);
                        }
                    }
                }
            }
            research::TYPE_VEHICLE => {
                let related = item.related_ride as usize;
                if ride_type_seen.get(related).copied().unwrap_or(false) {
                    builder.insert_vehicle(item, researched);
                } else if !ctx.research_ride_types.get(related).copied().unwrap_or(false) {
                    orphans.push(*item);
                }
            }
            _ => {}
        }
    }

    for item in &orphans {
        builder.insert_vehicle(item, false);
    }
    if !orphans.is_empty() {
        debug!(count = orphans.len(), "vehicle research items without their ride type");
    }

    let mut research = builder.research;
    research.funding_level = s4.research_funding;
    research.priorities = s4.research_priorities;
    research.progress = s4.research_progress;
    research.progress_stage = ResearchStage::from_legacy(s4.research_progress_stage);
    research.expected_day = s4.next_research_expected_day;
    research.expected_month = s4.next_research_expected_month;
    research.last_item = convert_progress_item(ctx, objects, s4.last_research_type, s4.last_research_item, s4.last_research_flags);
    research.next_item = convert_progress_item(ctx, objects, s4.next_research_type, s4.next_research_item, s4.next_research_flags);
    research
}

pub fn import_research(s4: &S4, ctx: &ImportContext, objects: &dyn ObjectManager, park: &mut Park) {
    park.research = build_research(s4, ctx, objects);
}

fn convert_progress_item(
    ctx: &ImportContext,
    objects: &dyn ObjectManager,
    item_type: u8,
    item: u8,
    flags: u8,
) -> Option<ResearchItem> {
    if flags == research::FLAGS_SEPARATOR {
        return None;
    }
    match item_type {
        research::TYPE_THEME => ctx.scenery_theme_map.index(item as usize).map(ResearchItem::scenery),
        research::TYPE_RIDE => {
            let entry = ctx.ride_type_map.index(item as usize)?;
            let ride_type = objects.get_loaded_object(ObjectType::Ride, entry)?.ride_type()?;
            Some(ResearchItem::ride(entry, ride_type, ResearchCategory::for_ride_type(ride_type)))
        }
        research::TYPE_VEHICLE => {
            let entry = ctx.vehicle_type_map.index(item as usize)?;
            let ride_type = objects.get_loaded_object(ObjectType::Ride, entry)?.ride_type()?;
            Some(ResearchItem::ride(entry, ride_type, ResearchCategory::for_ride_type(ride_type)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Edition;
    use crate::import::discovery;
    use crate::objects::ObjectRepository;
    use crate::state::research::ResearchType;
    use rct1_tables::{rides, vehicles};

    fn build(s4: &S4) -> (ImportContext, Research) {
        let mut ctx = ImportContext::new(s4.edition());
        let mut repo = ObjectRepository::accept_all();
        discovery::discover(s4, &mut ctx, &repo);
        repo.load_objects(&discovery::required_objects(s4, &ctx));
        let research = build_research(s4, &ctx, &repo);
        (ctx, research)
    }

    fn ride_items(research: &[ResearchItem]) -> Vec<ObjectEntryIndex> {
        research
            .iter()
            .filter(|i| i.item_type == ResearchType::Ride)
            .map(|i| i.entry_index)
            .collect()
    }

    #[test]
    fn test_default_scenery_groups_first() {
        let s4 = S4::new_blank();
        let (_, research) = build(&s4);
        assert_eq!(research.invented.len(), DEFAULT_SCENERY_GROUPS.len());
        assert!(research.invented.iter().all(|i| i.item_type == ResearchType::Scenery));
        assert!(research.uninvented.is_empty());
    }

    #[test]
    fn test_available_boundary_kept() {
        let mut s4 = S4::new_blank();
        assert_eq!(s4.edition(), Edition::LoopyLandscapes);
        s4.research_items_ll[0] = LegacyResearchItem::new(research::TYPE_RIDE, rides::TOILETS, 0);
        s4.research_items_ll[1] = LegacyResearchItem::separator(research::END_AVAILABLE);
        s4.research_items_ll[2] = LegacyResearchItem::new(research::TYPE_RIDE, rides::BURGER_BAR, 0);
        s4.research_items_ll[3] = LegacyResearchItem::separator(research::END_RESEARCHABLE);
        let (ctx, research) = build(&s4);
        let toilets = ctx.rides.index_of("rct1.ride.toilets").unwrap();
        let burgers = ctx.rides.index_of("rct1.ride.burger_bar").unwrap();
        assert_eq!(ride_items(&research.invented), vec![toilets]);
        assert_eq!(ride_items(&research.uninvented), vec![burgers]);
    }

    #[test]
    fn test_own_vehicle_listed_before_ride() {
        let mut s4 = S4::new_blank();
        s4.research_items_ll[0] = LegacyResearchItem::new(
            research::TYPE_VEHICLE,
            vehicles::WOODEN_ROLLER_COASTER_TRAIN,
            rides::WOODEN_ROLLER_COASTER,
        );
        s4.research_items_ll[1] = LegacyResearchItem::new(research::TYPE_RIDE, rides::WOODEN_ROLLER_COASTER, 0);
        s4.research_items_ll[2] = LegacyResearchItem::separator(research::END_RESEARCHABLE);
        let (ctx, research) = build(&s4);
        let entry = ctx.ride_type_map.index(rides::WOODEN_ROLLER_COASTER as usize).unwrap();
        assert_eq!(ride_items(&research.invented), vec![entry]);
        assert!(research.uninvented.is_empty());
    }

    #[test]
    fn test_single_vehicle_item_imported_once() {
        let mut s4 = S4::new_blank();
        s4.rides[0] = crate::codec::LegacyRide {
            ride_type: rides::STEEL_ROLLER_COASTER,
            vehicle_type: vehicles::STEEL_ROLLER_COASTER_TRAIN,
            ..Default::default()
        };
        s4.research_items_ll[0] = LegacyResearchItem::new(
            research::TYPE_VEHICLE,
            vehicles::STEEL_ROLLER_COASTER_TRAIN,
            rides::STEEL_ROLLER_COASTER,
        );
        s4.research_items_ll[1] = LegacyResearchItem::separator(research::END_RESEARCHABLE);
        let (ctx, research) = build(&s4);
        assert_eq!(ctx.rides.len(), 1);
        let all: Vec<ResearchItem> = research.all_items().copied().collect();
        assert_eq!(ride_items(&all), vec![0]);
        // the ride type never appears, so the vehicle is deferred unresearched
        assert_eq!(ride_items(&research.uninvented), vec![0]);
    }

    #[test]
    fn test_orphans_go_last() {
        let mut s4 = S4::new_blank();
        s4.research_items_ll[0] = LegacyResearchItem::new(research::TYPE_VEHICLE, vehicles::STEAM_TRAIN, rides::MINIATURE_RAILROAD);
        s4.research_items_ll[1] = LegacyResearchItem::new(research::TYPE_RIDE, rides::TOILETS, 0);
        s4.research_items_ll[2] = LegacyResearchItem::separator(research::END_AVAILABLE);
        s4.research_items_ll[3] = LegacyResearchItem::new(research::TYPE_RIDE, rides::BURGER_BAR, 0);
        s4.research_items_ll[4] = LegacyResearchItem::separator(research::END_RESEARCHABLE);
        let (ctx, research) = build(&s4);
        let train = ctx.vehicle_type_map.index(vehicles::STEAM_TRAIN as usize).unwrap();
        let uninvented = ride_items(&research.uninvented);
        assert_eq!(uninvented.last(), Some(&train));
        assert!(!ride_items(&research.invented).contains(&train));
    }
}
