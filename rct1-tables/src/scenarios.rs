#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioSource {
    Rct1,
    Rct1Aa,
    Rct1Ll,
    Other,
}

impl ScenarioSource {
    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioSource::Rct1 => "rct1",
            ScenarioSource::Rct1Aa => "rct1_aa",
            ScenarioSource::Rct1Ll => "rct1_ll",
            ScenarioSource::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScenarioCategory {
    Beginner,
    Challenging,
    Expert,
    Real,
    Other,
}

impl ScenarioCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioCategory::Beginner => "beginner",
            ScenarioCategory::Challenging => "challenging",
            ScenarioCategory::Expert => "expert",
            ScenarioCategory::Real => "real",
            ScenarioCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub title: &'static str,
    pub source: ScenarioSource,
    /// Position within its source game
    pub index: u8,
    pub category: ScenarioCategory,
    /// Localised name, park name and details
    pub text_object: &'static str,
}

pub const OFFICIAL_SLOT_COUNT: usize = 82;

use ScenarioCategory::{Beginner, Challenging, Expert};
use ScenarioSource::{Rct1, Rct1Aa, Rct1Ll};

const fn scenario(
    source: ScenarioSource,
    index: u8,
    category: ScenarioCategory,
    title: &'static str,
    text_object: &'static str,
) -> SourceDescriptor {
    SourceDescriptor { title, source, index, category, text_object }
}

static SCENARIOS: [SourceDescriptor; OFFICIAL_SLOT_COUNT] = [
    // RollerCoaster Tycoon
    scenario(Rct1, 0, Beginner, "Forest Frontiers", "rct1.scenario_text.forest_frontiers"),
    scenario(Rct1, 1, Beginner, "Dynamite Dunes", "rct1.scenario_text.dynamite_dunes"),
    scenario(Rct1, 2, Beginner, "Leafy Lake", "rct1.scenario_text.leafy_lake"),
    scenario(Rct1, 3, Beginner, "Diamond Heights", "rct1.scenario_text.diamond_heights"),
    scenario(Rct1, 4, Beginner, "Evergreen Gardens", "rct1.scenario_text.evergreen_gardens"),
    scenario(Rct1, 5, Beginner, "Bumbly Beach", "rct1.scenario_text.bumbly_beach"),
    scenario(Rct1, 6, Beginner, "Trinity Islands", "rct1.scenario_text.trinity_islands"),
    scenario(Rct1, 7, Beginner, "Katie's Dreamland", "rct1.scenario_text.katies_dreamland"),
    scenario(Rct1, 8, Challenging, "Pokey Park", "rct1.scenario_text.pokey_park"),
    scenario(Rct1, 9, Challenging, "White Water Park", "rct1.scenario_text.white_water_park"),
    scenario(Rct1, 10, Challenging, "Millennium Mines", "rct1.scenario_text.millennium_mines"),
    scenario(Rct1, 11, Challenging, "Karts & Coasters", "rct1.scenario_text.karts_coasters"),
    scenario(Rct1, 12, Challenging, "Mel's World", "rct1.scenario_text.mels_world"),
    scenario(Rct1, 13, Challenging, "Mystic Mountain", "rct1.scenario_text.mystic_mountain"),
    scenario(Rct1, 14, Challenging, "Pacific Pyramids", "rct1.scenario_text.pacific_pyramids"),
    scenario(Rct1, 15, Challenging, "Crumbly Woods", "rct1.scenario_text.crumbly_woods"),
    scenario(Rct1, 16, Expert, "Paradise Pier", "rct1.scenario_text.paradise_pier"),
    scenario(Rct1, 17, Expert, "Lightning Peaks", "rct1.scenario_text.lightning_peaks"),
    scenario(Rct1, 18, Expert, "Ivory Towers", "rct1.scenario_text.ivory_towers"),
    scenario(Rct1, 19, Expert, "Rainbow Valley", "rct1.scenario_text.rainbow_valley"),
    scenario(Rct1, 20, Expert, "Thunder Rock", "rct1.scenario_text.thunder_rock"),
    scenario(Rct1, 21, Expert, "Mega Park", "rct1.scenario_text.mega_park"),
    // Added Attractions
    scenario(Rct1Aa, 0, Beginner, "Whispering Cliffs", "rct1aa.scenario_text.whispering_cliffs"),
    scenario(Rct1Aa, 1, Beginner, "Three Monkeys Park", "rct1aa.scenario_text.three_monkeys_park"),
    scenario(Rct1Aa, 2, Beginner, "Canary Mines", "rct1aa.scenario_text.canary_mines"),
    scenario(Rct1Aa, 3, Beginner, "Barony Bridge", "rct1aa.scenario_text.barony_bridge"),
    scenario(Rct1Aa, 4, Beginner, "Funtopia", "rct1aa.scenario_text.funtopia"),
    scenario(Rct1Aa, 5, Beginner, "Haunted Harbour", "rct1aa.scenario_text.haunted_harbour"),
    scenario(Rct1Aa, 6, Beginner, "Fun Fortress", "rct1aa.scenario_text.fun_fortress"),
    scenario(Rct1Aa, 7, Beginner, "Future World", "rct1aa.scenario_text.future_world"),
    scenario(Rct1Aa, 8, Beginner, "Gentle Glen", "rct1aa.scenario_text.gentle_glen"),
    scenario(Rct1Aa, 9, Beginner, "Jolly Jungle", "rct1aa.scenario_text.jolly_jungle"),
    scenario(Rct1Aa, 10, Challenging, "Hydro Hills", "rct1aa.scenario_text.hydro_hills"),
    scenario(Rct1Aa, 11, Challenging, "Sprightly Park", "rct1aa.scenario_text.sprightly_park"),
    scenario(Rct1Aa, 12, Challenging, "Magic Quarters", "rct1aa.scenario_text.magic_quarters"),
    scenario(Rct1Aa, 13, Challenging, "Fruit Farm", "rct1aa.scenario_text.fruit_farm"),
    scenario(Rct1Aa, 14, Challenging, "Butterfly Dam", "rct1aa.scenario_text.butterfly_dam"),
    scenario(Rct1Aa, 15, Challenging, "Coaster Canyon", "rct1aa.scenario_text.coaster_canyon"),
    scenario(Rct1Aa, 16, Challenging, "Thunderstorm Park", "rct1aa.scenario_text.thunderstorm_park"),
    scenario(Rct1Aa, 17, Challenging, "Harmonic Hills", "rct1aa.scenario_text.harmonic_hills"),
    scenario(Rct1Aa, 18, Challenging, "Roman Village", "rct1aa.scenario_text.roman_village"),
    scenario(Rct1Aa, 19, Challenging, "Swamp Cove", "rct1aa.scenario_text.swamp_cove"),
    scenario(Rct1Aa, 20, Expert, "Adrenaline Heights", "rct1aa.scenario_text.adrenaline_heights"),
    scenario(Rct1Aa, 21, Expert, "Utopia Park", "rct1aa.scenario_text.utopia_park"),
    scenario(Rct1Aa, 22, Expert, "Rotting Heights", "rct1aa.scenario_text.rotting_heights"),
    scenario(Rct1Aa, 23, Expert, "Fiasco Forest", "rct1aa.scenario_text.fiasco_forest"),
    scenario(Rct1Aa, 24, Expert, "Pickle Park", "rct1aa.scenario_text.pickle_park"),
    scenario(Rct1Aa, 25, Expert, "Giggle Downs", "rct1aa.scenario_text.giggle_downs"),
    scenario(Rct1Aa, 26, Expert, "Mineral Park", "rct1aa.scenario_text.mineral_park"),
    scenario(Rct1Aa, 27, Expert, "Coaster Crazy", "rct1aa.scenario_text.coaster_crazy"),
    scenario(Rct1Aa, 28, Expert, "Urban Park", "rct1aa.scenario_text.urban_park"),
    scenario(Rct1Aa, 29, Expert, "Geoffrey Gardens", "rct1aa.scenario_text.geoffrey_gardens"),
    // Loopy Landscapes
    scenario(Rct1Ll, 0, Beginner, "Iceberg Islands", "rct1ll.scenario_text.iceberg_islands"),
    scenario(Rct1Ll, 1, Beginner, "Volcania", "rct1ll.scenario_text.volcania"),
    scenario(Rct1Ll, 2, Beginner, "Arid Heights", "rct1ll.scenario_text.arid_heights"),
    scenario(Rct1Ll, 3, Beginner, "Razor Rocks", "rct1ll.scenario_text.razor_rocks"),
    scenario(Rct1Ll, 4, Beginner, "Crater Lake", "rct1ll.scenario_text.crater_lake"),
    scenario(Rct1Ll, 5, Beginner, "Vertigo Views", "rct1ll.scenario_text.vertigo_views"),
    scenario(Rct1Ll, 6, Beginner, "Paradise Pier 2", "rct1ll.scenario_text.paradise_pier_2"),
    scenario(Rct1Ll, 7, Beginner, "Dragon's Cove", "rct1ll.scenario_text.dragons_cove"),
    scenario(Rct1Ll, 8, Beginner, "Good Knight Park", "rct1ll.scenario_text.good_knight_park"),
    scenario(Rct1Ll, 9, Beginner, "Wacky Warren", "rct1ll.scenario_text.wacky_warren"),
    scenario(Rct1Ll, 10, Challenging, "Grand Glacier", "rct1ll.scenario_text.grand_glacier"),
    scenario(Rct1Ll, 11, Challenging, "Crazy Craters", "rct1ll.scenario_text.crazy_craters"),
    scenario(Rct1Ll, 12, Challenging, "Dusty Desert", "rct1ll.scenario_text.dusty_desert"),
    scenario(Rct1Ll, 13, Challenging, "Woodworm Park", "rct1ll.scenario_text.woodworm_park"),
    scenario(Rct1Ll, 14, Challenging, "Icarus Park", "rct1ll.scenario_text.icarus_park"),
    scenario(Rct1Ll, 15, Challenging, "Sunny Swamps", "rct1ll.scenario_text.sunny_swamps"),
    scenario(Rct1Ll, 16, Challenging, "Frightmare Hills", "rct1ll.scenario_text.frightmare_hills"),
    scenario(Rct1Ll, 17, Challenging, "Thunder Rocks", "rct1ll.scenario_text.thunder_rocks"),
    scenario(Rct1Ll, 18, Challenging, "Octagon Park", "rct1ll.scenario_text.octagon_park"),
    scenario(Rct1Ll, 19, Challenging, "Pleasure Island", "rct1ll.scenario_text.pleasure_island"),
    scenario(Rct1Ll, 20, Expert, "Icicle Worlds", "rct1ll.scenario_text.icicle_worlds"),
    scenario(Rct1Ll, 21, Expert, "Southern Sands", "rct1ll.scenario_text.southern_sands"),
    scenario(Rct1Ll, 22, Expert, "Tiny Towers", "rct1ll.scenario_text.tiny_towers"),
    scenario(Rct1Ll, 23, Expert, "Nevermore Park", "rct1ll.scenario_text.nevermore_park"),
    scenario(Rct1Ll, 24, Expert, "Pacifica", "rct1ll.scenario_text.pacifica"),
    scenario(Rct1Ll, 25, Expert, "Urban Jungle", "rct1ll.scenario_text.urban_jungle"),
    scenario(Rct1Ll, 26, Expert, "Terror Town", "rct1ll.scenario_text.terror_town"),
    scenario(Rct1Ll, 27, Expert, "Megaworld Park", "rct1ll.scenario_text.megaworld_park"),
    scenario(Rct1Ll, 28, Expert, "Venus Ponds", "rct1ll.scenario_text.venus_ponds"),
    scenario(Rct1Ll, 29, Expert, "Micro Park", "rct1ll.scenario_text.micro_park"),
];

/// Looks up an official scenario by the slot stored in the file.
pub fn scenario_source(slot: u16) -> Option<&'static SourceDescriptor> {
    SCENARIOS.get(slot as usize)
}

/// Looks up an official scenario by title, ignoring case.
pub fn scenario_source_by_title(title: &str) -> Option<&'static SourceDescriptor> {
    SCENARIOS.iter().find(|s| s.title.eq_ignore_ascii_case(title.trim()))
}
