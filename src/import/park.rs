use rct1_tables::to_native_colour;
use tracing::debug;

use super::context::{ImportContext, ParkValueFactor, MONEY32_UNDEFINED};
use crate::codec::s4::{HISTORY_UNDEFINED, PEEP_SPAWN_NULL};
use crate::codec::{Edition, LegacyParkFlags, S4};
use crate::state::banner::{Banner, BannerFlags, BannerIndex};
use crate::state::world::{
    Award, Climate, GameDate, GuestInitialStats, MapAnimation, MarketingCampaign, Objective, ObjectiveType,
    Park, ParkFlags, PeepSpawn, SavedView, MONEY64_UNDEFINED,
};

const LEGACY_BANNER_NO_ENTRY: u8 = 1 << 0;
const MARKETING_ACTIVE: u8 = 1 << 7;
/// Campaigns whose associated value is a ride id or a shop item
const MARKETING_RIDE_FREE: u8 = 1;
const MARKETING_FOOD_OR_DRINK_FREE: u8 = 3;
const MARKETING_RIDE: u8 = 5;
/// The legacy guest history stores guests in units of 20
const GUEST_HISTORY_UNIT: u32 = 20;
/// The legacy game had no way to change the loan interest rate
const LEGACY_LOAN_INTEREST_RATE: u8 = 10;
const COORDS_PER_TILE: u16 = 32;
const PEEP_SPAWN_Z_STEP: i32 = 16;

fn money(value: i32) -> i64 {
    if value == MONEY32_UNDEFINED {
        MONEY64_UNDEFINED
    } else {
        value as i64
    }
}

pub fn import_park(s4: &S4, ctx: &mut ImportContext, park: &mut Park) {
    park.name = s4
        .user_string(s4.park_name_string_index)
        .map(str::to_owned)
        .unwrap_or_else(|| s4.scenario_name.clone());
    park.scenario.name = s4.scenario_name.clone();
    park.entrance_fee = s4.park_entrance_fee as i64;
    park.date = GameDate { month_year: s4.month, month_ticks: s4.day };
    park.current_ticks = s4.ticks;
    park.random_seed = (s4.random_a, s4.random_b);

    import_flags(s4, ctx, park);
    import_guests(s4, park);
    import_finances(s4, ctx, park);
    import_objective(s4, ctx, park);
    import_climate(s4, park);
    import_peep_spawns(s4, park);
    import_map_animations(s4, park);
    import_banners(s4, ctx, park);
    import_awards_and_marketing(s4, park);

    park.saved_view = SavedView {
        x: s4.view_x as i32,
        y: s4.view_y as i32,
        zoom: s4.view_zoom,
        rotation: s4.view_rotation,
    };
    park.staff_handyman_colour = to_native_colour(s4.handyman_colour);
    park.staff_mechanic_colour = to_native_colour(s4.mechanic_colour);
    park.staff_security_colour = to_native_colour(s4.security_guard_colour);
    park.water_object = (!ctx.water.is_empty()).then_some(0);
}

fn import_flags(s4: &S4, ctx: &ImportContext, park: &mut Park) {
    let mut flags = ParkFlags::from_bits_truncate(s4.park_flags.bits());
    flags.remove(ParkFlags::ANTI_CHEAT_DEPRECATED);
    flags.insert(ParkFlags::RCT1_INTEREST);
    if !s4.park_flags.contains(LegacyParkFlags::ENTRY_LOCKED_AT_FREE) {
        flags.insert(ParkFlags::UNLOCK_ALL_PRICES);
    }
    park.flags = flags;
    park.same_price_throughout = match ctx.edition {
        Edition::LoopyLandscapes => s4.same_price_throughout as u64,
        _ => 0,
    };
}

fn import_guests(s4: &S4, park: &mut Park) {
    park.guests_in_park = s4.guests_in_park as u32;
    park.guests_heading_for_park = s4.guests_heading_for_park as u32;
    park.rating = s4.park_rating;
    park.rating_history = s4
        .park_rating_history
        .iter()
        .map(|&v| (v != HISTORY_UNDEFINED).then_some(v))
        .collect();
    park.guests_in_park_history = s4
        .guests_in_park_history
        .iter()
        .map(|&v| (v != HISTORY_UNDEFINED).then_some(v as u32 * GUEST_HISTORY_UNIT))
        .collect();
    park.guest_initial = GuestInitialStats {
        cash: s4.guest_initial_cash as i64,
        happiness: s4.guest_initial_happiness,
        hunger: s4.guest_initial_hunger,
        thirst: s4.guest_initial_thirst,
    };
    park.guest_generation_probability = s4.guest_generation_probability;
    park.park_size = s4.park_size;
}

/// Needs rides and guest counts in place, the native park value is
/// recomputed from them.
fn import_finances(s4: &S4, ctx: &mut ImportContext, park: &mut Park) {
    let factor = ctx.park_value_factor.get_or_compute(|| park.calculate_park_value(), s4.park_value);

    let finances = &mut park.finances;
    finances.cash = money(s4.cash);
    finances.bank_loan = money(s4.loan);
    finances.max_bank_loan = money(s4.max_loan);
    finances.bank_loan_interest_rate = LEGACY_LOAN_INTEREST_RATE;
    finances.expenditure = s4.expenditure.iter().map(|month| month.map(|v| v as i64)).collect();
    finances.cash_history = s4.cash_history.iter().map(|&v| money(v)).collect();
    finances.weekly_profit_history = s4.weekly_profit_history.iter().map(|&v| money(v)).collect();
    finances.park_value = ParkValueFactor::apply(factor, s4.park_value);
    finances.park_value_history = s4.park_value_history.iter().map(|&v| ParkValueFactor::apply(factor, v)).collect();
    finances.company_value = money(s4.company_value);
    finances.completed_company_value = money(s4.completed_company_value);
    finances.total_admissions = s4.num_admissions as u64;
    finances.total_income_from_admissions = money(s4.admission_total_income);
    finances.current_expenditure = money(s4.total_expenditure);
    finances.current_profit = money(s4.profit);
    finances.total_ride_value_for_money = s4.total_ride_value_for_money as i64;
    finances.land_price = s4.land_price as i64;
    finances.construction_rights_price = s4.construction_rights_price as i64;
}

fn import_objective(s4: &S4, ctx: &mut ImportContext, park: &mut Park) {
    let objective_type = ObjectiveType::from_legacy(s4.objective_type);
    let currency = if objective_type.targets_park_value() {
        let factor = ctx.park_value_factor.get_or_compute(|| park.calculate_park_value(), s4.park_value);
        ParkValueFactor::apply(factor, s4.objective_currency)
    } else {
        money(s4.objective_currency)
    };
    park.objective = Objective {
        objective_type,
        year: s4.objective_years,
        num_guests: s4.objective_guests,
        currency,
        ride_type: (objective_type == ObjectiveType::BuildTheBest).then_some(s4.objective_currency as u16),
    };
}

fn import_climate(s4: &S4, park: &mut Park) {
    park.climate = Climate {
        climate: s4.climate,
        update_timer: s4.climate_timer,
        weather: s4.weather,
        temperature: s4.temperature,
        weather_effect: s4.weather_effect,
        weather_gloom: s4.weather_gloom,
        level: s4.rain_level,
        next_weather: s4.target_weather,
        next_temperature: s4.target_temperature,
        next_weather_effect: s4.target_weather_effect,
        next_weather_gloom: s4.target_weather_gloom,
        next_level: s4.target_rain_level,
    };
}

fn import_peep_spawns(s4: &S4, park: &mut Park) {
    park.peep_spawns = s4
        .peep_spawns
        .iter()
        .filter(|s| s.x != PEEP_SPAWN_NULL)
        .map(|s| PeepSpawn {
            x: s.x as i32,
            y: s.y as i32,
            z: s.z as i32 * PEEP_SPAWN_Z_STEP,
            direction: s.direction,
        })
        .collect();
}

fn import_map_animations(s4: &S4, park: &mut Park) {
    park.map_animations = s4
        .map_animations
        .iter()
        .map(|a| MapAnimation {
            animation_type: a.animation_type,
            x: (a.x / COORDS_PER_TILE) as u8,
            y: (a.y / COORDS_PER_TILE) as u8,
            base_z: a.base_z,
        })
        .collect();
}

fn import_banners(s4: &S4, ctx: &ImportContext, park: &mut Park) {
    park.banners.clear();
    for (i, src) in s4.banners.iter().enumerate() {
        if src.is_null() {
            continue;
        }
        let mut banner = Banner::new(i as BannerIndex);
        banner.entry = ctx.banner_map.index(src.banner_type as usize);
        banner.text = s4.user_string(src.string_idx).unwrap_or_default().to_owned();
        if src.flags & LEGACY_BANNER_NO_ENTRY != 0 {
            banner.flags.insert(BannerFlags::NO_ENTRY);
        }
        banner.colour = to_native_colour(src.colour);
        banner.text_colour = src.text_colour;
        banner.position = (src.x, src.y);
        park.banners.push(banner);
    }
    debug!(count = park.banners.len(), "imported banners");
}

fn import_awards_and_marketing(s4: &S4, park: &mut Park) {
    park.awards = s4
        .awards
        .iter()
        .filter(|a| a.time != 0)
        .map(|a| Award { time: a.time, award_type: a.award_type })
        .collect();

    park.marketing = s4
        .marketing_status
        .iter()
        .zip(s4.marketing_assoc.iter())
        .enumerate()
        .filter(|(_, (&status, _))| status != 0)
        .map(|(i, (&status, &assoc))| {
            let campaign_type = i as u8;
            let ride_or_item = matches!(campaign_type, MARKETING_RIDE_FREE | MARKETING_FOOD_OR_DRINK_FREE | MARKETING_RIDE)
                .then_some(assoc as u16);
            MarketingCampaign { campaign_type, weeks_left: status & !MARKETING_ACTIVE, ride_or_item }
        })
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::s4::{LegacyAward, LegacyPeepSpawn};
    use crate::codec::LegacyBanner;
    use crate::state::ride::{Ride, RideId};

    fn import(s4: &S4) -> (ImportContext, Park) {
        let mut ctx = ImportContext::new(s4.edition());
        let mut park = Park::new();
        import_park(s4, &mut ctx, &mut park);
        (ctx, park)
    }

    #[test]
    fn test_flags() {
        let mut s4 = S4::new_blank();
        s4.park_flags = LegacyParkFlags::PARK_OPEN | LegacyParkFlags::ANTI_CHEAT_DEPRECATED;
        s4.same_price_throughout = 0b101;
        let (_, park) = import(&s4);
        assert!(park.flags.contains(ParkFlags::PARK_OPEN | ParkFlags::RCT1_INTEREST | ParkFlags::UNLOCK_ALL_PRICES));
        assert!(!park.flags.contains(ParkFlags::ANTI_CHEAT_DEPRECATED));
        assert_eq!(park.same_price_throughout, 0b101);

        s4.park_flags = LegacyParkFlags::ENTRY_LOCKED_AT_FREE;
        s4.game_version = crate::codec::VERSION_CLASSIC as u32;
        let (_, park) = import(&s4);
        assert!(!park.flags.contains(ParkFlags::UNLOCK_ALL_PRICES));
        assert_eq!(park.same_price_throughout, 0);
    }

    #[test]
    fn test_histories() {
        let mut s4 = S4::new_blank();
        s4.park_rating_history = [HISTORY_UNDEFINED; 32];
        s4.park_rating_history[0] = 120;
        s4.guests_in_park_history = [HISTORY_UNDEFINED; 32];
        s4.guests_in_park_history[0] = 7;
        let (_, park) = import(&s4);
        assert_eq!(park.rating_history[0], Some(120));
        assert_eq!(park.rating_history[1], None);
        assert_eq!(park.guests_in_park_history[0], Some(140));
        assert_eq!(park.guests_in_park_history[31], None);
    }

    #[test]
    fn test_park_value_factor_applied_to_history() {
        let mut s4 = S4::new_blank();
        s4.guests_in_park = 0;
        s4.park_value = 1000;
        s4.park_value_history = [MONEY32_UNDEFINED; 128];
        s4.park_value_history[0] = 900;
        s4.park_value_history[1] = 333;

        let mut ctx = ImportContext::new(s4.edition());
        let mut park = Park::new();
        let mut ride = Ride::new(0);
        ride.ride_type = 15;
        ride.stats.value = 50;
        park.rides[0] = Some(ride);
        import_park(&s4, &mut ctx, &mut park);

        // 50 * 10 * 4 = 2000 native against 1000 legacy
        let factor = ctx.park_value_factor.cached().unwrap();
        assert_eq!(factor, 20);
        assert_eq!(park.finances.park_value, 2000);
        assert_eq!(park.finances.park_value_history[0], 900 * factor / 10);
        assert_eq!(park.finances.park_value_history[1], 333 * factor / 10);
        assert_eq!(park.finances.park_value_history[2], MONEY64_UNDEFINED);
    }

    #[test]
    fn test_tiny_legacy_park_value_saturates() {
        let mut s4 = S4::new_blank();
        s4.park_value = 1;
        s4.park_value_history[0] = i32::MAX;

        let mut ctx = ImportContext::new(s4.edition());
        let mut park = Park::new();
        for id in 0..park.rides.len() {
            let mut ride = Ride::new(id as RideId);
            ride.ride_type = 15;
            ride.stats.value = 60_000;
            ride.economics.num_customers = [u16::MAX; 10];
            park.rides[id] = Some(ride);
        }
        import_park(&s4, &mut ctx, &mut park);

        assert!(ctx.park_value_factor.cached().unwrap() > 1_000_000_000);
        assert_eq!(park.finances.park_value_history[0], i64::MAX);
        assert_eq!(park.finances.park_value_history[1], MONEY64_UNDEFINED);
    }

    #[test]
    fn test_park_value_objective_uses_same_factor() {
        let mut s4 = S4::new_blank();
        s4.park_value = 0;
        s4.objective_type = 2;
        s4.objective_currency = 5000;
        let (ctx, park) = import(&s4);
        assert_eq!(ctx.park_value_factor.cached(), Some(100));
        assert_eq!(park.objective.objective_type, ObjectiveType::ParkValueBy);
        assert_eq!(park.objective.currency, 50_000);
    }

    #[test]
    fn test_peep_spawns_and_banners() {
        let mut s4 = S4::new_blank();
        s4.peep_spawns[0] = LegacyPeepSpawn { x: 320, y: 640, z: 2, direction: 1 };
        s4.peep_spawns[1] = LegacyPeepSpawn::NULL;
        s4.string_table[3] = "Keep out".to_owned();
        s4.banners[4] = LegacyBanner {
            banner_type: 0,
            flags: LEGACY_BANNER_NO_ENTRY,
            string_idx: 0x8003,
            colour: 0,
            text_colour: 1,
            x: 10,
            y: 12,
        };
        let (_, park) = import(&s4);
        assert_eq!(park.peep_spawns, vec![PeepSpawn { x: 320, y: 640, z: 32, direction: 1 }]);
        assert_eq!(park.banners.len(), 1);
        let banner = &park.banners[0];
        assert_eq!(banner.id, 4);
        assert_eq!(banner.text, "Keep out");
        assert!(banner.is_no_entry());
        assert_eq!(banner.position, (10, 12));
    }

    #[test]
    fn test_awards_and_marketing() {
        let mut s4 = S4::new_blank();
        s4.awards[0] = LegacyAward { time: 3, award_type: 7 };
        s4.marketing_status[MARKETING_RIDE as usize] = MARKETING_ACTIVE | 4;
        s4.marketing_assoc[MARKETING_RIDE as usize] = 9;
        s4.marketing_status[4] = 2;
        let (_, park) = import(&s4);
        assert_eq!(park.awards, vec![Award { time: 3, award_type: 7 }]);
        assert_eq!(park.marketing.len(), 2);
        assert_eq!(park.marketing[0], MarketingCampaign { campaign_type: 4, weeks_left: 2, ride_or_item: None });
        assert_eq!(park.marketing[1], MarketingCampaign { campaign_type: 5, weeks_left: 4, ride_or_item: Some(9) });
    }
}
