//! Tests for the metrics calculator: liquidity scenarios, work-offset
//! model, city-tier adjustment and the affordability classification.

use eurostudy_core_rs::{
    compute_metrics, resolve, AffordabilityTier, CityTier, CostRecord, RecurringCosts,
    ReferenceStore, StudentOrigin, UserConfig,
};

fn store() -> ReferenceStore {
    ReferenceStore::builtin()
}

fn config_for(country: &str, origin: StudentOrigin) -> UserConfig {
    UserConfig {
        country: country.to_string(),
        student_origin: origin,
        ..UserConfig::default()
    }
}

fn resolve_for(config: &UserConfig) -> CostRecord {
    resolve(
        &store(),
        &config.country,
        config.course_level,
        config.duration_years,
        config.student_origin,
    )
}

#[test]
fn test_germany_non_eu_three_year_scenario() {
    // Germany, Non-EU, 3 years, Mid-sized, no work
    let config = config_for("Germany", StudentOrigin::NonEu);
    let record = resolve_for(&config);
    let metrics = compute_metrics(&record, &config);

    assert_eq!(record.tuition_yearly, 350.0);
    assert_eq!(metrics.start_up_fees, 1875.0);
    assert_eq!(metrics.monthly_living_cost, 1100.0);
    assert_eq!(metrics.yearly_living_cost, 13200.0);
    assert_eq!(metrics.mandatory_liquidity, 13433.0);
    assert_eq!(metrics.first_year_cost, 15425.0);
    assert_eq!(metrics.recommended_liquidity, 15425.0);
    assert_eq!(metrics.liquidity_gap, 1992.0);
    assert_eq!(
        metrics.affordability_tier,
        AffordabilityTier::FullFundingNeeded
    );
}

#[test]
fn test_france_eu_work_income_scenario() {
    // France, EU, 20h/week term work, 10 holiday weeks at €12/h
    let mut config = config_for("France", StudentOrigin::Eu);
    config.work_hours_per_week = 20;
    config.hourly_wage = 12.0;
    config.holiday_work_weeks = 10;

    let record = resolve_for(&config);
    let metrics = compute_metrics(&record, &config);

    // 20 x 12 x 38 = 9120 term income; 40 x 12 x 10 = 4800 holiday income
    assert_eq!(metrics.yearly_work_income, 13920.0);
    assert_eq!(metrics.monthly_avg_work_income, 1160.0);
}

#[test]
fn test_city_tier_adjusts_housing_fully_and_food_by_half() {
    let mut config = config_for("Germany", StudentOrigin::NonEu);

    config.city_tier = CityTier::BigCity;
    let record = resolve_for(&config);
    let big = compute_metrics(&record, &config);
    assert_eq!(big.monthly_breakdown.housing, 675.0); // 500 x 1.35
    assert_eq!(big.monthly_breakdown.food, 293.75); // 250 x 1.175
    assert_eq!(big.monthly_living_cost, 1318.75);

    config.city_tier = CityTier::SmallTown;
    let small = compute_metrics(&record, &config);
    assert_eq!(small.monthly_breakdown.housing, 425.0); // 500 x 0.85
    assert_eq!(small.monthly_breakdown.food, 231.25); // 250 x 0.925
    assert_eq!(small.monthly_living_cost, 1006.25);

    // Insurance, transport and misc are tier-independent
    assert_eq!(big.monthly_breakdown.insurance, small.monthly_breakdown.insurance);
    assert_eq!(big.monthly_breakdown.transport, small.monthly_breakdown.transport);
}

#[test]
fn test_start_up_fees_exclude_blocked_account() {
    let config = config_for("Germany", StudentOrigin::NonEu);
    let record = resolve_for(&config);
    let metrics = compute_metrics(&record, &config);

    // 75 visa + 200 tests + 400 flight + 1200 deposit; the 11208 blocked
    // account is a liquidity requirement, not a sunk cost
    assert_eq!(metrics.start_up_fees, 1875.0);
}

#[test]
fn test_mandatory_liquidity_uses_funding_proof_without_blocked_account() {
    // France: no blocked account, official funding proof of 7380
    let config = config_for("France", StudentOrigin::NonEu);
    let record = resolve_for(&config);
    let metrics = compute_metrics(&record, &config);

    let start_up = 99.0 + 250.0 + 350.0 + 900.0;
    assert_eq!(metrics.start_up_fees, start_up);
    assert_eq!(metrics.mandatory_liquidity, 7380.0 + 2770.0 + start_up);
}

#[test]
fn test_mandatory_liquidity_without_any_official_data() {
    let config = config_for("Atlantis", StudentOrigin::NonEu);
    let record = resolve_for(&config);
    let metrics = compute_metrics(&record, &config);

    // No blocked account, no funding proof: tuition + start-up only
    assert_eq!(metrics.mandatory_liquidity, 5000.0 + 1400.0);
}

#[test]
fn test_degree_totals_over_duration() {
    let config = config_for("Germany", StudentOrigin::NonEu);
    let record = resolve_for(&config);
    let metrics = compute_metrics(&record, &config);

    assert_eq!(metrics.subsequent_year_cost, 13550.0); // 13200 + 350
    assert_eq!(metrics.total_degree_cost, 15425.0 + 2.0 * 13550.0);
    assert_eq!(metrics.total_fixed_costs, 1875.0 + 3.0 * 350.0);
    assert_eq!(metrics.total_living_costs, 3.0 * 13200.0);
}

#[test]
fn test_short_program_has_no_subsequent_years() {
    let mut config = config_for("Germany", StudentOrigin::NonEu);
    config.duration_years = 0.5;
    let record = resolve_for(&config);
    let metrics = compute_metrics(&record, &config);

    // duration - 1 clamps at zero: total equals the first year
    assert_eq!(metrics.total_degree_cost, metrics.first_year_cost);
}

#[test]
fn test_work_income_offsets_living_costs_only() {
    // Implausibly high income: net cost floors at the fixed costs,
    // never negative, never eating into tuition or start-up fees
    let mut config = config_for("France", StudentOrigin::Eu);
    config.work_hours_per_week = 40;
    config.hourly_wage = 50.0;
    config.holiday_work_weeks = 18;

    let record = resolve_for(&config);
    let metrics = compute_metrics(&record, &config);

    assert_eq!(metrics.uncovered_living, 0.0);
    assert_eq!(metrics.net_total_cost, metrics.total_fixed_costs);
    assert!(metrics.net_total_cost > 0.0);
    assert_eq!(metrics.living_cost_covered_percent, 100);
    assert_eq!(metrics.affordability_tier, AffordabilityTier::Affordable);
}

#[test]
fn test_zero_work_is_full_funding_needed_not_zero_percent() {
    let config = config_for("Poland", StudentOrigin::NonEu);
    assert!(config.plans_no_work());

    let record = resolve_for(&config);
    let metrics = compute_metrics(&record, &config);

    assert_eq!(metrics.living_cost_covered_percent, 0);
    assert_eq!(
        metrics.affordability_tier,
        AffordabilityTier::FullFundingNeeded
    );
}

#[test]
fn test_holiday_work_alone_escapes_full_funding_tier() {
    let mut config = config_for("Poland", StudentOrigin::NonEu);
    config.holiday_work_weeks = 2;
    config.hourly_wage = 7.5;

    let record = resolve_for(&config);
    let metrics = compute_metrics(&record, &config);

    assert_ne!(
        metrics.affordability_tier,
        AffordabilityTier::FullFundingNeeded
    );
}

#[test]
fn test_affordability_thresholds() {
    // Poland, Mid-sized: monthly living 350+40+200+20+120 = 730
    let mut config = config_for("Poland", StudentOrigin::NonEu);
    let record = resolve_for(&config);

    // 10h x 7.5 x 38 / 12 = 237.5/mo -> 33% -> High Cost
    config.work_hours_per_week = 10;
    config.hourly_wage = 7.5;
    let metrics = compute_metrics(&record, &config);
    assert_eq!(metrics.living_cost_covered_percent, 33);
    assert_eq!(metrics.affordability_tier, AffordabilityTier::HighCost);

    // 20h x 7.5 x 38 / 12 = 475/mo -> 65% -> Moderate
    config.work_hours_per_week = 20;
    let metrics = compute_metrics(&record, &config);
    assert_eq!(metrics.living_cost_covered_percent, 65);
    assert_eq!(metrics.affordability_tier, AffordabilityTier::Moderate);

    // 30h x 7.5 x 38 / 12 = 712.5/mo -> 98% -> Affordable
    config.work_hours_per_week = 30;
    let metrics = compute_metrics(&record, &config);
    assert_eq!(metrics.living_cost_covered_percent, 98);
    assert_eq!(metrics.affordability_tier, AffordabilityTier::Affordable);
}

#[test]
fn test_max_potential_uses_legal_ceiling_not_user_hours() {
    let config = config_for("Germany", StudentOrigin::NonEu);
    let record = resolve_for(&config);
    let metrics = compute_metrics(&record, &config);

    // 20h x 13.5 x 38 = 10260; 40h x 13.5 x 18 = 9720; 19980/12 = 1665;
    // 1665 / 1100 = 151% -> feasible, even though the user plans no work
    assert_eq!(metrics.max_potential_coverage_percent, 151);
    assert!(metrics.is_work_feasible);
}

#[test]
fn test_work_infeasible_in_expensive_big_city() {
    // United Kingdom, Big City: adjusted living 2086.25/mo against a
    // 1541.67/mo legal maximum -> 74%, below the feasibility bar
    let mut config = config_for("United Kingdom", StudentOrigin::NonEu);
    config.city_tier = CityTier::BigCity;
    let record = resolve_for(&config);
    let metrics = compute_metrics(&record, &config);

    assert_eq!(metrics.max_potential_coverage_percent, 74);
    assert!(!metrics.is_work_feasible);
}

#[test]
fn test_net_monthly_out_of_pocket() {
    let mut config = config_for("Germany", StudentOrigin::NonEu);
    config.work_hours_per_week = 10;
    config.hourly_wage = 12.0;

    let record = resolve_for(&config);
    let metrics = compute_metrics(&record, &config);

    // 10 x 12 x 38 / 12 = 380/mo against 1100/mo living
    assert_eq!(metrics.monthly_avg_work_income, 380.0);
    assert_eq!(metrics.net_monthly_out_of_pocket, 720.0);
}

#[test]
fn test_zero_living_cost_record_degrades_to_zero_results() {
    let config = config_for("Atlantis", StudentOrigin::NonEu);
    let mut record = resolve_for(&config);
    record.recurring_costs = RecurringCosts::default();

    let metrics = compute_metrics(&record, &config);
    assert_eq!(metrics.monthly_living_cost, 0.0);
    assert_eq!(metrics.living_cost_covered_percent, 0);
    assert_eq!(metrics.max_potential_coverage_percent, 0);
    assert!(!metrics.is_work_feasible);
}

#[test]
fn test_metrics_are_deterministic() {
    let mut config = config_for("Sweden", StudentOrigin::NonEu);
    config.work_hours_per_week = 15;
    config.holiday_work_weeks = 6;
    let record = resolve_for(&config);

    let a = compute_metrics(&record, &config);
    let b = compute_metrics(&record, &config);
    assert_eq!(a, b);
}
