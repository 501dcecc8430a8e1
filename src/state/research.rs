use bitflags::bitflags;
use serde::Serialize;

use super::ride_type::{RideType, RideTypeFlags};
use crate::objects::ObjectEntryIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResearchType {
    Ride,
    Scenery,
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ResearchFlags: u8 {
        /// First item of its ride type to be invented
        const FIRST_OF_TYPE = 1 << 0;
        const ALWAYS_RESEARCHED = 1 << 1;
    }
}

impl Serialize for ResearchFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.bits())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResearchCategory {
    Transport,
    Gentle,
    Rollercoaster,
    Thrill,
    Water,
    Shop,
    SceneryGroup,
}

impl ResearchCategory {
    /// Research category a ride type is filed under
    pub fn for_ride_type(ride_type: RideType) -> Self {
        use rct1_tables::rides as r;

        let desc = super::ride_type::descriptor(ride_type);
        if desc.has(RideTypeFlags::IS_SHOP) {
            return ResearchCategory::Shop;
        }
        if desc.has(RideTypeFlags::IS_COASTER) {
            return ResearchCategory::Rollercoaster;
        }
        let Ok(legacy) = u8::try_from(ride_type) else {
            return ResearchCategory::Gentle;
        };
        match legacy {
            r::MINIATURE_RAILROAD | r::MONORAIL | r::CHAIRLIFT | r::SUSPENDED_MONORAIL | r::LIFT => {
                ResearchCategory::Transport
            }
            r::BOAT_HIRE
            | r::WATER_SLIDE
            | r::LOG_FLUME
            | r::RIVER_RAPIDS
            | r::SPLASH_BOATS
            | r::SUBMARINE_RIDE => ResearchCategory::Water,
            r::LAUNCHED_FREEFALL
            | r::GO_KARTS
            | r::SWINGING_SHIP
            | r::SWINGING_INVERTER_SHIP
            | r::MOTION_SIMULATOR
            | r::TOP_SPIN
            | r::TWIST
            | r::ROTO_DROP
            | r::ENTERPRISE
            | r::MAGIC_CARPET => ResearchCategory::Thrill,
            _ => ResearchCategory::Gentle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResearchItem {
    pub item_type: ResearchType,
    pub entry_index: ObjectEntryIndex,
    /// Ride type the item unlocks, scenery items carry the null type
    pub base_ride_type: RideType,
    pub category: ResearchCategory,
    pub flags: ResearchFlags,
}

impl ResearchItem {
    pub fn ride(entry_index: ObjectEntryIndex, base_ride_type: RideType, category: ResearchCategory) -> Self {
        Self { item_type: ResearchType::Ride, entry_index, base_ride_type, category, flags: ResearchFlags::empty() }
    }

    pub fn scenery(entry_index: ObjectEntryIndex) -> Self {
        Self {
            item_type: ResearchType::Scenery,
            entry_index,
            base_ride_type: super::ride_type::RIDE_TYPE_NULL,
            category: ResearchCategory::SceneryGroup,
            flags: ResearchFlags::empty(),
        }
    }

    pub fn same_target(&self, other: &ResearchItem) -> bool {
        self.item_type == other.item_type && self.entry_index == other.entry_index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResearchStage {
    #[default]
    InitialResearch,
    Designing,
    CompletingDesign,
    Unknown,
    FinishedAll,
}

impl ResearchStage {
    pub fn from_legacy(stage: u8) -> Self {
        match stage {
            0 => ResearchStage::InitialResearch,
            1 => ResearchStage::Designing,
            2 => ResearchStage::CompletingDesign,
            3 => ResearchStage::Unknown,
            _ => ResearchStage::FinishedAll,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Research {
    pub invented: Vec<ResearchItem>,
    pub uninvented: Vec<ResearchItem>,
    pub funding_level: u8,
    pub priorities: u8,
    pub progress: u16,
    pub progress_stage: ResearchStage,
    pub last_item: Option<ResearchItem>,
    pub next_item: Option<ResearchItem>,
    pub expected_day: u8,
    pub expected_month: u8,
}

impl Research {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_invented(&self, item: &ResearchItem) -> bool {
        self.invented.iter().any(|i| i.same_target(item))
    }

    pub fn contains(&self, item: &ResearchItem) -> bool {
        self.is_invented(item) || self.uninvented.iter().any(|i| i.same_target(item))
    }

    /// Append an item unless the same target is already listed
    pub fn add(&mut self, item: ResearchItem, researched: bool) {
        if self.contains(&item) {
            return;
        }
        if researched {
            self.invented.push(item);
        } else {
            self.uninvented.push(item);
        }
    }

    pub fn all_items(&self) -> impl Iterator<Item = &ResearchItem> {
        self.invented.iter().chain(self.uninvented.iter())
    }

    /// Flag the first item of every ride type, invented items first
    pub fn mark_first_of_type(&mut self) {
        let mut seen: Vec<RideType> = Vec::new();
        for item in self.invented.iter_mut().chain(self.uninvented.iter_mut()) {
            if item.item_type != ResearchType::Ride {
                continue;
            }
            if seen.contains(&item.base_ride_type) {
                item.flags.remove(ResearchFlags::FIRST_OF_TYPE);
            } else {
                seen.push(item.base_ride_type);
                item.flags.insert(ResearchFlags::FIRST_OF_TYPE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_deduplicates() {
        let mut research = Research::default();
        research.add(ResearchItem::ride(0, 15, ResearchCategory::Rollercoaster), true);
        research.add(ResearchItem::ride(0, 15, ResearchCategory::Rollercoaster), false);
        research.add(ResearchItem::scenery(0), false);
        assert_eq!(research.invented.len(), 1);
        assert_eq!(research.uninvented.len(), 1);
    }

    #[test]
    fn test_ride_type_categories() {
        use rct1_tables::rides as r;
        assert_eq!(ResearchCategory::for_ride_type(r::BURGER_BAR as RideType), ResearchCategory::Shop);
        assert_eq!(ResearchCategory::for_ride_type(r::WOODEN_ROLLER_COASTER as RideType), ResearchCategory::Rollercoaster);
        assert_eq!(ResearchCategory::for_ride_type(r::MONORAIL as RideType), ResearchCategory::Transport);
        assert_eq!(ResearchCategory::for_ride_type(r::LOG_FLUME as RideType), ResearchCategory::Water);
        assert_eq!(ResearchCategory::for_ride_type(r::MERRY_GO_ROUND as RideType), ResearchCategory::Gentle);
    }

    #[test]
    fn test_first_of_type_prefers_invented() {
        let mut research = Research::default();
        research.uninvented.push(ResearchItem::ride(1, 15, ResearchCategory::Rollercoaster));
        research.invented.push(ResearchItem::ride(0, 15, ResearchCategory::Rollercoaster));
        research.invented.push(ResearchItem::ride(2, 20, ResearchCategory::Gentle));
        research.mark_first_of_type();
        assert!(research.invented[0].flags.contains(ResearchFlags::FIRST_OF_TYPE));
        assert!(research.invented[1].flags.contains(ResearchFlags::FIRST_OF_TYPE));
        assert!(!research.uninvented[0].flags.contains(ResearchFlags::FIRST_OF_TYPE));
    }
}
