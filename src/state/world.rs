use bitflags::bitflags;
use serde::Serialize;

use super::banner::Banner;
use super::entity::EntityRegistry;
use super::patrol::ConsolidatedPatrolAreas;
use super::research::Research;
use super::ride::{Ride, RideId, TileCoordsXYZD, MAX_RIDES};
use super::tile::TileMap;
use crate::objects::ObjectEntryIndex;

/// Money value meaning "no value recorded"
pub const MONEY64_UNDEFINED: i64 = i64::MIN;

pub const FINANCE_HISTORY_SIZE: usize = 128;
pub const EXPENDITURE_TABLE_MONTH_COUNT: usize = 16;
pub const EXPENDITURE_TYPE_COUNT: usize = 14;
pub const PARK_RATING_HISTORY_SIZE: usize = 32;
pub const MAX_PEEP_SPAWNS: usize = 2;
pub const MAX_AWARDS: usize = 4;
pub const MARKETING_CAMPAIGN_COUNT: usize = 20;

/// Guest value credited to the park value per guest inside
const GUEST_VALUE: i64 = 70;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ParkFlags: u32 {
        const PARK_OPEN = 1 << 0;
        const FORBID_LANDSCAPE_CHANGES = 1 << 2;
        const FORBID_TREE_REMOVAL = 1 << 3;
        const SHOW_REAL_GUEST_NAMES = 1 << 4;
        const FORBID_HIGH_CONSTRUCTION = 1 << 5;
        const PREF_LESS_INTENSE_RIDES = 1 << 6;
        const FORBID_MARKETING_CAMPAIGN = 1 << 7;
        const ANTI_CHEAT_DEPRECATED = 1 << 8;
        const PREF_MORE_INTENSE_RIDES = 1 << 9;
        const NO_MONEY = 1 << 11;
        const DIFFICULT_GUEST_GENERATION = 1 << 12;
        const PARK_FREE_ENTRY = 1 << 13;
        const DIFFICULT_PARK_RATING = 1 << 14;
        const LOCK_REAL_NAMES_OPTION = 1 << 15;
        const NO_MONEY_SCENARIO = 1 << 17;
        const UNLOCK_ALL_PRICES = 1 << 20;
        /// Loan interest follows the first game's rules
        const RCT1_INTEREST = 1 << 22;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GameDate {
    pub month_year: u16,
    pub month_ticks: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PeepSpawn {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub direction: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MapAnimation {
    pub animation_type: u8,
    pub x: u8,
    pub y: u8,
    pub base_z: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Award {
    pub time: u16,
    pub award_type: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MarketingCampaign {
    pub campaign_type: u8,
    pub weeks_left: u8,
    pub ride_or_item: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveType {
    #[default]
    None,
    GuestsBy,
    ParkValueBy,
    HaveFun,
    BuildTheBest,
    TenRollercoasters,
    GuestsAndRating,
    MonthlyRideIncome,
    TenRollercoastersLength,
    FinishFiveRollercoasters,
    RepayLoanAndParkValue,
    MonthlyFoodIncome,
}

impl ObjectiveType {
    pub fn from_legacy(objective: u8) -> Self {
        use ObjectiveType::*;
        match objective {
            1 => GuestsBy,
            2 => ParkValueBy,
            3 => HaveFun,
            4 => BuildTheBest,
            5 => TenRollercoasters,
            6 => GuestsAndRating,
            7 => MonthlyRideIncome,
            8 => TenRollercoastersLength,
            9 => FinishFiveRollercoasters,
            10 => RepayLoanAndParkValue,
            11 => MonthlyFoodIncome,
            _ => None,
        }
    }

    /// Objectives whose currency target is a park value
    pub fn targets_park_value(self) -> bool {
        matches!(self, ObjectiveType::ParkValueBy | ObjectiveType::RepayLoanAndParkValue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Objective {
    pub objective_type: ObjectiveType,
    pub year: u8,
    pub num_guests: u16,
    pub currency: i64,
    /// Ride type to build for build-the-best objectives
    pub ride_type: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Climate {
    pub climate: u8,
    pub update_timer: u16,
    pub weather: u8,
    pub temperature: i8,
    pub weather_effect: u8,
    pub weather_gloom: u8,
    pub level: u8,
    pub next_weather: u8,
    pub next_temperature: i8,
    pub next_weather_effect: u8,
    pub next_weather_gloom: u8,
    pub next_level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SavedView {
    pub x: i32,
    pub y: i32,
    pub zoom: u8,
    pub rotation: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GuestInitialStats {
    pub cash: i64,
    pub happiness: u8,
    pub hunger: u8,
    pub thirst: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finances {
    pub cash: i64,
    pub bank_loan: i64,
    pub max_bank_loan: i64,
    pub bank_loan_interest_rate: u8,
    pub expenditure: Vec<[i64; EXPENDITURE_TYPE_COUNT]>,
    pub cash_history: Vec<i64>,
    pub weekly_profit_history: Vec<i64>,
    pub park_value: i64,
    pub park_value_history: Vec<i64>,
    pub company_value: i64,
    pub completed_company_value: i64,
    pub total_admissions: u64,
    pub total_income_from_admissions: i64,
    pub current_expenditure: i64,
    pub current_profit: i64,
    pub total_ride_value_for_money: i64,
    pub land_price: i64,
    pub construction_rights_price: i64,
}

impl Default for Finances {
    fn default() -> Self {
        Self {
            cash: 0,
            bank_loan: 0,
            max_bank_loan: 0,
            bank_loan_interest_rate: 0,
            expenditure: vec![[0; EXPENDITURE_TYPE_COUNT]; EXPENDITURE_TABLE_MONTH_COUNT],
            cash_history: vec![MONEY64_UNDEFINED; FINANCE_HISTORY_SIZE],
            weekly_profit_history: vec![MONEY64_UNDEFINED; FINANCE_HISTORY_SIZE],
            park_value: 0,
            park_value_history: vec![MONEY64_UNDEFINED; FINANCE_HISTORY_SIZE],
            company_value: 0,
            completed_company_value: MONEY64_UNDEFINED,
            total_admissions: 0,
            total_income_from_admissions: 0,
            current_expenditure: 0,
            current_profit: 0,
            total_ride_value_for_money: 0,
            land_price: 0,
            construction_rights_price: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ScenarioInfo {
    pub name: String,
    pub details: String,
    pub completed_by: Option<String>,
    pub file_name: Option<String>,
}

/// The whole native game state a park import writes into
#[derive(Debug, Clone)]
pub struct Park {
    pub name: String,
    pub flags: ParkFlags,
    /// Shop items sold at one price across the park, one bit per item
    pub same_price_throughout: u64,
    pub entrance_fee: i64,
    pub date: GameDate,
    pub current_ticks: u32,
    pub random_seed: (u32, u32),

    pub tiles: TileMap,
    pub rides: Vec<Option<Ride>>,
    pub entities: EntityRegistry,
    pub banners: Vec<Banner>,
    pub map_animations: Vec<MapAnimation>,
    pub peep_spawns: Vec<PeepSpawn>,
    pub park_entrances: Vec<TileCoordsXYZD>,
    pub patrol_areas: ConsolidatedPatrolAreas,

    pub research: Research,
    pub finances: Finances,
    pub objective: Objective,
    pub scenario: ScenarioInfo,
    pub climate: Climate,
    pub saved_view: SavedView,

    pub rating: u16,
    pub rating_history: Vec<Option<u8>>,
    pub guests_in_park_history: Vec<Option<u32>>,
    pub guests_in_park: u32,
    pub guests_heading_for_park: u32,
    pub guest_initial: GuestInitialStats,
    pub guest_generation_probability: u16,
    pub park_size: u16,
    pub next_guest_number: u32,
    pub staff_handyman_colour: u8,
    pub staff_mechanic_colour: u8,
    pub staff_security_colour: u8,
    pub awards: Vec<Award>,
    pub marketing: Vec<MarketingCampaign>,

    pub water_object: Option<ObjectEntryIndex>,
}

impl Default for Park {
    fn default() -> Self {
        Self::new()
    }
}

impl Park {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            flags: ParkFlags::empty(),
            same_price_throughout: 0,
            entrance_fee: 0,
            date: GameDate::default(),
            current_ticks: 0,
            random_seed: (0, 0),
            tiles: TileMap::new(),
            rides: vec![None; MAX_RIDES],
            entities: EntityRegistry::new(),
            banners: Vec::new(),
            map_animations: Vec::new(),
            peep_spawns: Vec::new(),
            park_entrances: Vec::new(),
            patrol_areas: ConsolidatedPatrolAreas::default(),
            research: Research::default(),
            finances: Finances::default(),
            objective: Objective::default(),
            scenario: ScenarioInfo::default(),
            climate: Climate::default(),
            saved_view: SavedView::default(),
            rating: 0,
            rating_history: vec![None; PARK_RATING_HISTORY_SIZE],
            guests_in_park_history: vec![None; PARK_RATING_HISTORY_SIZE],
            guests_in_park: 0,
            guests_heading_for_park: 0,
            guest_initial: GuestInitialStats::default(),
            guest_generation_probability: 0,
            park_size: 0,
            next_guest_number: 1,
            staff_handyman_colour: 0,
            staff_mechanic_colour: 0,
            staff_security_colour: 0,
            awards: Vec::new(),
            marketing: Vec::new(),
            water_object: None,
        }
    }

    pub fn ride(&self, id: RideId) -> Option<&Ride> {
        self.rides.get(id as usize)?.as_ref()
    }

    pub fn ride_mut(&mut self, id: RideId) -> Option<&mut Ride> {
        self.rides.get_mut(id as usize)?.as_mut()
    }

    pub fn rides(&self) -> impl Iterator<Item = &Ride> {
        self.rides.iter().flatten()
    }

    pub fn rides_mut(&mut self) -> impl Iterator<Item = &mut Ride> {
        self.rides.iter_mut().flatten()
    }

    /// Park value as the native game computes it: every ride's value
    /// weighted by recent customers, plus a fixed amount per guest.
    pub fn calculate_park_value(&self) -> i64 {
        let rides: i64 = self
            .rides()
            .filter(|r| !r.is_null_type() && r.stats.value != u16::MAX)
            .map(|r| {
                let customers: i64 = r.economics.num_customers.iter().map(|&c| c as i64).sum();
                r.stats.value as i64 * 10 * (customers / 10 + 4)
            })
            .sum();
        rides + self.guests_in_park as i64 * GUEST_VALUE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_park_value_counts_rides_and_guests() {
        let mut park = Park::new();
        assert_eq!(park.calculate_park_value(), 0);

        let mut ride = Ride::new(0);
        ride.ride_type = 15;
        ride.stats.value = 100;
        park.rides[0] = Some(ride);
        park.guests_in_park = 10;
        assert_eq!(park.calculate_park_value(), 100 * 10 * 4 + 10 * GUEST_VALUE);
    }

    #[test]
    fn test_objective_park_value_targets() {
        assert!(ObjectiveType::from_legacy(2).targets_park_value());
        assert!(ObjectiveType::from_legacy(10).targets_park_value());
        assert!(!ObjectiveType::from_legacy(1).targets_park_value());
        assert_eq!(ObjectiveType::from_legacy(77), ObjectiveType::None);
    }
}
