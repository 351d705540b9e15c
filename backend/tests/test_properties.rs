//! Property-based tests for the engine's invariants over random inputs.

use proptest::prelude::*;

use eurostudy_core_rs::{
    compute_metrics, convert, resolve, CityTier, CourseLevel, ReferenceStore, StudentOrigin,
    UserConfig,
};

fn country_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Germany".to_string()),
        Just("Austria".to_string()),
        Just("Netherlands".to_string()),
        Just("France".to_string()),
        Just("Italy".to_string()),
        Just("Poland".to_string()),
        Just("Sweden".to_string()),
        Just("Switzerland".to_string()),
        Just("United Kingdom".to_string()),
        // Unknown countries exercise the default-profile fallback
        Just("Atlantis".to_string()),
        Just("".to_string()),
    ]
}

fn origin_strategy() -> impl Strategy<Value = StudentOrigin> {
    prop_oneof![Just(StudentOrigin::Eu), Just(StudentOrigin::NonEu)]
}

fn city_tier_strategy() -> impl Strategy<Value = CityTier> {
    prop_oneof![
        Just(CityTier::BigCity),
        Just(CityTier::MidSized),
        Just(CityTier::SmallTown),
    ]
}

prop_compose! {
    fn config_strategy()(
        country in country_strategy(),
        student_origin in origin_strategy(),
        city_tier in city_tier_strategy(),
        work_hours_per_week in 0u32..=60,
        hourly_wage in 0.0f64..60.0,
        holiday_work_weeks in 0u32..=18,
        duration_years in 0.1f64..6.0,
    ) -> UserConfig {
        UserConfig {
            country,
            student_origin,
            course_level: CourseLevel::Masters,
            duration_years,
            city_tier,
            target_currency: "EUR".to_string(),
            work_hours_per_week,
            hourly_wage,
            holiday_work_weeks,
        }
    }
}

fn run(config: &UserConfig) -> (eurostudy_core_rs::CostRecord, eurostudy_core_rs::DerivedMetrics) {
    let store = ReferenceStore::builtin();
    let record = resolve(
        &store,
        &config.country,
        config.course_level,
        config.duration_years,
        config.student_origin,
    );
    let metrics = compute_metrics(&record, config);
    (record, metrics)
}

proptest! {
    #[test]
    fn prop_coverage_stays_within_bounds(config in config_strategy()) {
        let (_, metrics) = run(&config);
        prop_assert!(metrics.living_cost_covered_percent <= 100);
    }

    #[test]
    fn prop_recommended_liquidity_never_below_mandatory(config in config_strategy()) {
        let (_, metrics) = run(&config);
        prop_assert!(metrics.recommended_liquidity >= metrics.mandatory_liquidity);
        prop_assert_eq!(
            metrics.liquidity_gap,
            metrics.recommended_liquidity - metrics.mandatory_liquidity
        );
    }

    #[test]
    fn prop_tuition_matches_profile_for_origin(config in config_strategy()) {
        let store = ReferenceStore::builtin();
        let (record, _) = run(&config);
        let profile = store.profile(&config.country);
        let expected = match config.student_origin {
            StudentOrigin::Eu => profile.tuition_yearly.eu,
            StudentOrigin::NonEu => profile.tuition_yearly.non_eu,
        };
        prop_assert_eq!(record.tuition_yearly, expected);
    }

    #[test]
    fn prop_blocked_account_zero_outside_member_set(config in config_strategy()) {
        let store = ReferenceStore::builtin();
        let (record, _) = run(&config);
        if !store.is_blocked_account_country(&config.country) {
            prop_assert_eq!(record.one_time_costs.blocked_account, 0.0);
        }
    }

    #[test]
    fn prop_net_cost_floors_at_fixed_costs(config in config_strategy()) {
        let (_, metrics) = run(&config);
        prop_assert!(metrics.net_total_cost >= metrics.total_fixed_costs);
        prop_assert!(
            metrics.net_total_cost <= metrics.total_fixed_costs + metrics.total_living_costs
        );
        prop_assert!(metrics.uncovered_living >= 0.0);
    }

    #[test]
    fn prop_more_hours_never_hurt(config in config_strategy()) {
        let (_, base) = run(&config);

        let mut busier = config.clone();
        busier.work_hours_per_week += 5;
        let (_, more) = run(&busier);

        prop_assert!(more.living_cost_covered_percent >= base.living_cost_covered_percent);
        prop_assert!(more.net_total_cost <= base.net_total_cost);
    }

    #[test]
    fn prop_zero_work_always_classified_full_funding(
        country in country_strategy(),
        origin in origin_strategy(),
    ) {
        let config = UserConfig {
            country,
            student_origin: origin,
            work_hours_per_week: 0,
            holiday_work_weeks: 0,
            ..UserConfig::default()
        };
        let (_, metrics) = run(&config);
        prop_assert_eq!(
            metrics.affordability_tier,
            eurostudy_core_rs::AffordabilityTier::FullFundingNeeded
        );
    }

    #[test]
    fn prop_resolve_is_deterministic(config in config_strategy()) {
        let (record_a, metrics_a) = run(&config);
        let (record_b, metrics_b) = run(&config);
        prop_assert_eq!(record_a, record_b);
        prop_assert_eq!(metrics_a, metrics_b);
    }

    #[test]
    fn prop_eur_conversion_is_plain_rounding(amount in -1.0e7f64..1.0e7) {
        let store = ReferenceStore::builtin();
        prop_assert_eq!(
            convert(amount, "EUR", store.exchange_rates()),
            amount.round() as i64
        );
    }
}
