use std::path::{Path, PathBuf};

use rct1_tables::scenarios::{scenario_source_by_title, ScenarioCategory, ScenarioSource, SourceDescriptor};
use serde::Serialize;
use tracing::debug;

use super::context::ParkValueFactor;
use crate::codec::S4;
use crate::objects::ObjectManager;
use crate::state::world::{ObjectiveType, Park};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexObjective {
    #[serde(rename = "type")]
    pub objective_type: ObjectiveType,
    pub years: u8,
    pub currency: i64,
    pub guests: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ride_type: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioIndexEntry {
    pub path: PathBuf,
    pub category: &'static str,
    pub source_game: &'static str,
    /// Position within the source game, `None` for custom scenarios
    pub source_index: Option<u8>,
    /// Official slot number
    pub scenario_id: Option<u16>,
    pub objective: IndexObjective,
    pub internal_name: String,
    pub name: String,
    pub park_name: String,
    pub details: String,
}

/// Official scenario the file claims to be, by slot and then by title
pub fn identify(s4: &S4) -> Option<(u16, &'static SourceDescriptor)> {
    if let Some(desc) = rct1_tables::scenario_source(s4.scenario_slot_index) {
        return Some((s4.scenario_slot_index, desc));
    }
    let desc = scenario_source_by_title(&s4.scenario_name)?;
    let slot = (0..rct1_tables::scenarios::OFFICIAL_SLOT_COUNT as u16)
        .find(|&slot| rct1_tables::scenario_source(slot).is_some_and(|d| d.title == desc.title))?;
    Some((slot, desc))
}

/// Builds the index entry. `factor` is shared with a park import on the
/// same file so both convert park values alike.
pub fn build_index_entry(
    path: &Path,
    s4: &S4,
    objects: &dyn ObjectManager,
    factor: &mut ParkValueFactor,
) -> ScenarioIndexEntry {
    let official = identify(s4);

    let objective_type = ObjectiveType::from_legacy(s4.objective_type);
    let currency = if objective_type.targets_park_value() {
        let factor = factor.get_or_compute(
            || {
                // Rides are not converted here; only guests count towards the value
                let mut park = Park::new();
                park.guests_in_park = s4.guests_in_park as u32;
                park.calculate_park_value()
            },
            s4.park_value,
        );
        ParkValueFactor::apply(factor, s4.objective_currency)
    } else {
        s4.objective_currency as i64
    };
    let objective = IndexObjective {
        objective_type,
        years: s4.objective_years,
        currency,
        guests: s4.objective_guests,
        ride_type: (objective_type == ObjectiveType::BuildTheBest).then_some(s4.objective_currency as u16),
    };

    let raw_park_name = s4.user_string(s4.park_name_string_index).unwrap_or(&s4.scenario_name).to_owned();
    let text = official.and_then(|(_, desc)| {
        let text = objects.load_temp_object(desc.text_object)?.scenario_text().cloned();
        if text.is_none() {
            debug!(object = desc.text_object, "scenario text not available");
        }
        text
    });
    let (name, park_name, details) = match text {
        Some(text) => {
            let park_name = if text.park_name.is_empty() { raw_park_name } else { text.park_name };
            (text.name, park_name, text.details)
        }
        None => (s4.scenario_name.clone(), raw_park_name, String::new()),
    };

    let (category, source, source_index) = match official {
        Some((_, desc)) => (desc.category, desc.source, Some(desc.index)),
        None => (ScenarioCategory::Other, ScenarioSource::Other, None),
    };

    ScenarioIndexEntry {
        path: path.to_path_buf(),
        category: category.as_str(),
        source_game: source.as_str(),
        source_index,
        scenario_id: official.map(|(slot, _)| slot),
        objective,
        internal_name: s4.scenario_name.clone(),
        name,
        park_name,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{ObjectDescriptor, ObjectRepository, ObjectType, ScenarioText};

    const CUSTOM_SLOT: u16 = 0xFFFF;

    #[test]
    fn test_custom_scenario() {
        let mut s4 = S4::new_blank();
        s4.scenario_slot_index = CUSTOM_SLOT;
        s4.scenario_name = "My Park".to_owned();
        s4.objective_type = 1;
        s4.objective_years = 3;
        s4.objective_guests = 1500;
        let entry = build_index_entry(Path::new("my.sc4"), &s4, &ObjectRepository::new(), &mut ParkValueFactor::default());
        assert_eq!(entry.category, "other");
        assert_eq!(entry.source_game, "other");
        assert_eq!(entry.source_index, None);
        assert_eq!(entry.scenario_id, None);
        assert_eq!(entry.name, "My Park");
        assert_eq!(entry.objective.guests, 1500);
        assert_eq!(entry.objective.objective_type, ObjectiveType::GuestsBy);
    }

    #[test]
    fn test_official_text_object() {
        let mut repo = ObjectRepository::new();
        let mut desc = ObjectDescriptor::new("rct1.scenario_text.forest_frontiers", ObjectType::ScenarioText);
        desc.scenario_text = Some(ScenarioText {
            name: "Forest Frontiers".to_owned(),
            park_name: "Forest Frontiers".to_owned(),
            details: "Deep in the forest".to_owned(),
        });
        repo.insert(desc);

        let mut s4 = S4::new_blank();
        s4.scenario_slot_index = 0;
        s4.scenario_name = "FOREST".to_owned();
        let entry = build_index_entry(Path::new("SC0.SC4"), &s4, &repo, &mut ParkValueFactor::default());
        assert_eq!(entry.scenario_id, Some(0));
        assert_eq!(entry.source_game, "rct1");
        assert_eq!(entry.category, "beginner");
        assert_eq!(entry.name, "Forest Frontiers");
        assert_eq!(entry.details, "Deep in the forest");
        assert_eq!(entry.internal_name, "FOREST");
    }

    #[test]
    fn test_same_slot_resolves_to_same_name() {
        let mut repo = ObjectRepository::new();
        let mut desc = ObjectDescriptor::new("rct1.scenario_text.forest_frontiers", ObjectType::ScenarioText);
        desc.scenario_text = Some(ScenarioText {
            name: "Forest Frontiers".to_owned(),
            park_name: "Forest Frontiers".to_owned(),
            details: "Deep in the forest".to_owned(),
        });
        repo.insert(desc);

        let mut first = S4::new_blank();
        first.scenario_slot_index = 0;
        first.scenario_name = "Woodland Wonders".to_owned();
        first.park_name_string_index = 0x8000;
        first.string_table[0] = "Pine Park".to_owned();

        let mut second = S4::new_blank();
        second.scenario_slot_index = 0;
        second.scenario_name = "Timber Town".to_owned();
        second.park_name_string_index = 0x8001;
        second.string_table[1] = "Oak Acres".to_owned();

        let a = build_index_entry(Path::new("a.sc4"), &first, &repo, &mut ParkValueFactor::default());
        let b = build_index_entry(Path::new("b.sc4"), &second, &repo, &mut ParkValueFactor::default());
        assert_eq!(a.name, "Forest Frontiers");
        assert_eq!(a.name, b.name);
        assert_eq!(a.park_name, b.park_name);
        assert_ne!(a.internal_name, b.internal_name);
    }

    #[test]
    fn test_identify_by_title() {
        let mut s4 = S4::new_blank();
        s4.scenario_slot_index = CUSTOM_SLOT;
        s4.scenario_name = "leafy lake".to_owned();
        let (slot, desc) = identify(&s4).unwrap();
        assert_eq!(slot, 2);
        assert_eq!(desc.title, "Leafy Lake");
    }

    #[test]
    fn test_park_value_objective_corrected() {
        let mut s4 = S4::new_blank();
        s4.scenario_slot_index = CUSTOM_SLOT;
        s4.objective_type = 2;
        s4.objective_currency = 25_000;
        s4.park_value = 0;
        let mut factor = ParkValueFactor::default();
        let entry = build_index_entry(Path::new("x.sc4"), &s4, &ObjectRepository::new(), &mut factor);
        assert_eq!(entry.objective.currency, 250_000);

        let mut cached = ParkValueFactor::default();
        cached.get_or_compute(|| 0, 1);
        let entry = build_index_entry(Path::new("x.sc4"), &s4, &ObjectRepository::new(), &mut cached);
        assert_eq!(entry.objective.currency, 0);
    }
}
