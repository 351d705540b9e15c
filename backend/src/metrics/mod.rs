//! Metrics Calculator
//!
//! Derives the full set of financial quantities from a merged `CostRecord`
//! and a `UserConfig`: adjusted living costs, upfront liquidity (Scenario
//! 1), net economic cost over the whole program (Scenario 2), work-income
//! coverage and the affordability classification.
//!
//! All math is done in the base currency; display conversion happens only
//! at the presentation boundary and never feeds back into these formulas.
//! The calculator is recomputed fully on every call and keeps no state.

use serde::{Deserialize, Serialize};

use crate::constants::{
    AFFORDABLE_COVERAGE_PERCENT, FEASIBLE_COVERAGE_PERCENT, FOOD_TIER_SENSITIVITY,
    HOLIDAY_WEEK_HOURS, MAX_HOLIDAY_WEEKS, MODERATE_COVERAGE_PERCENT, SEMESTER_WEEKS,
};
use crate::models::config::UserConfig;
use crate::models::record::CostRecord;

/// Affordability classification of a destination under the user's work plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AffordabilityTier {
    Affordable,
    Moderate,
    #[serde(rename = "High Cost")]
    HighCost,
    /// Zero planned work is a distinct state, not 0% coverage
    #[serde(rename = "Full Funding Needed")]
    FullFundingNeeded,
}

impl std::fmt::Display for AffordabilityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AffordabilityTier::Affordable => write!(f, "Affordable"),
            AffordabilityTier::Moderate => write!(f, "Moderate"),
            AffordabilityTier::HighCost => write!(f, "High Cost"),
            AffordabilityTier::FullFundingNeeded => write!(f, "Full Funding Needed"),
        }
    }
}

/// City-tier-adjusted monthly living costs by category (euros)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthlyBreakdown {
    pub housing: f64,
    pub food: f64,
    pub insurance: f64,
    pub transport: f64,
    pub misc: f64,
}

/// Derived financial metrics for one record/config pair (euros unless noted)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// City-tier-adjusted monthly living cost
    pub monthly_living_cost: f64,
    pub yearly_living_cost: f64,
    pub monthly_breakdown: MonthlyBreakdown,
    /// One-time sunk costs in year 1 (excludes the blocked account, which
    /// is a liquidity requirement, not a sunk cost)
    pub start_up_fees: f64,
    /// Cash the visa process requires upfront
    pub mandatory_liquidity: f64,
    /// The larger of the mandatory requirement and real first-year cost
    pub recommended_liquidity: f64,
    /// How far the mandatory minimum falls short of real first-year needs
    pub liquidity_gap: f64,
    pub first_year_cost: f64,
    /// Year 2+ cost (no start-up fees)
    pub subsequent_year_cost: f64,
    pub total_degree_cost: f64,
    /// Start-up fees plus tuition for the whole program
    pub total_fixed_costs: f64,
    pub total_living_costs: f64,
    pub yearly_work_income: f64,
    pub monthly_avg_work_income: f64,
    pub total_work_income: f64,
    /// Living costs left uncovered by projected work income
    pub uncovered_living: f64,
    /// Net economic cost: work income offsets living costs only, never
    /// tuition or start-up fees, and never goes negative
    pub net_total_cost: f64,
    pub net_monthly_out_of_pocket: f64,
    /// Share of monthly living costs covered by planned work (0..=100)
    pub living_cost_covered_percent: u32,
    pub affordability_tier: AffordabilityTier,
    /// Coverage at the legal hour ceiling and typical student wage
    /// (not clamped to 100)
    pub max_potential_coverage_percent: u32,
    pub is_work_feasible: bool,
}

/// Compute all derived metrics for one record/config pair.
///
/// Pure, synchronous, total. Degenerate input (zero wage, hours or
/// duration) propagates as zero results, never an error.
///
/// # Example
///
/// ```rust
/// use eurostudy_core_rs::{
///     compute_metrics, resolve, ReferenceStore, StudentOrigin, UserConfig,
/// };
///
/// let store = ReferenceStore::builtin();
/// let mut config = UserConfig::default();
/// config.country = "France".to_string();
/// config.student_origin = StudentOrigin::Eu;
/// config.work_hours_per_week = 20;
/// config.hourly_wage = 12.0;
/// config.holiday_work_weeks = 10;
///
/// let record = resolve(
///     &store,
///     &config.country,
///     config.course_level,
///     config.duration_years,
///     config.student_origin,
/// );
/// let metrics = compute_metrics(&record, &config);
///
/// // 20h × €12 × 38 weeks + 40h × €12 × 10 weeks
/// assert_eq!(metrics.yearly_work_income, 13920.0);
/// assert_eq!(metrics.monthly_avg_work_income, 1160.0);
/// assert!(metrics.recommended_liquidity >= metrics.mandatory_liquidity);
/// ```
pub fn compute_metrics(record: &CostRecord, config: &UserConfig) -> DerivedMetrics {
    // City-tier adjustment: housing scales fully, food at half sensitivity
    let city_multiplier = config.city_tier.multiplier();
    let recurring = &record.recurring_costs;
    let monthly_breakdown = MonthlyBreakdown {
        housing: recurring.housing_monthly * city_multiplier,
        food: recurring.food_monthly * (1.0 + (city_multiplier - 1.0) * FOOD_TIER_SENSITIVITY),
        insurance: recurring.insurance_monthly,
        transport: recurring.transport_monthly,
        misc: recurring.misc_monthly,
    };
    let monthly_living_cost = monthly_breakdown.housing
        + monthly_breakdown.insurance
        + monthly_breakdown.food
        + monthly_breakdown.transport
        + monthly_breakdown.misc;
    let yearly_living_cost = monthly_living_cost * 12.0;

    let one_time = &record.one_time_costs;
    let start_up_fees =
        one_time.visa_admin + one_time.tests_admissions + one_time.flight_travel + one_time.deposit;

    // Scenario 1: upfront liquidity. Where no blocked account applies, the
    // official funding-proof amount (if any) is what must be demonstrated.
    let funding_floor = if one_time.blocked_account > 0.0 {
        one_time.blocked_account
    } else {
        record
            .official_data
            .as_ref()
            .map(|o| o.funding_proof.amount_euro)
            .unwrap_or(0.0)
    };
    let mandatory_liquidity = funding_floor + record.tuition_yearly + start_up_fees;
    let first_year_cost = yearly_living_cost + record.tuition_yearly + start_up_fees;
    let recommended_liquidity = mandatory_liquidity.max(first_year_cost);
    let liquidity_gap = (recommended_liquidity - mandatory_liquidity).max(0.0);

    // Work income, weighted between term time and full-time holiday weeks
    let semester_income =
        f64::from(config.work_hours_per_week) * config.hourly_wage * SEMESTER_WEEKS;
    let holiday_income =
        HOLIDAY_WEEK_HOURS * config.hourly_wage * f64::from(config.holiday_work_weeks);
    let yearly_work_income = semester_income + holiday_income;
    let monthly_avg_work_income = yearly_work_income / 12.0;

    // Scenario 2: net economic cost over the full program
    let subsequent_year_cost = yearly_living_cost + record.tuition_yearly;
    let total_degree_cost =
        first_year_cost + subsequent_year_cost * (config.duration_years - 1.0).max(0.0);
    let total_fixed_costs = start_up_fees + record.tuition_yearly * config.duration_years;
    let total_living_costs = yearly_living_cost * config.duration_years;
    let total_work_income = yearly_work_income * config.duration_years;
    let uncovered_living = (total_living_costs - total_work_income).max(0.0);
    let net_total_cost = total_fixed_costs + uncovered_living;
    let net_monthly_out_of_pocket = (monthly_living_cost - monthly_avg_work_income).max(0.0);

    // Coverage and classification
    let living_cost_covered_percent = if monthly_living_cost > 0.0 {
        ((monthly_avg_work_income / monthly_living_cost * 100.0).round()).min(100.0) as u32
    } else {
        0
    };
    let affordability_tier = if config.plans_no_work() {
        AffordabilityTier::FullFundingNeeded
    } else if living_cost_covered_percent >= AFFORDABLE_COVERAGE_PERCENT {
        AffordabilityTier::Affordable
    } else if living_cost_covered_percent >= MODERATE_COVERAGE_PERCENT {
        AffordabilityTier::Moderate
    } else {
        AffordabilityTier::HighCost
    };

    // Max-potential feasibility: the legal ceiling at the typical student
    // wage, assuming the maximum holiday weeks
    let work = &record.part_time_work;
    let max_legal_semester_income =
        f64::from(work.legal_max_hours) * work.avg_student_wage * SEMESTER_WEEKS;
    let max_legal_holiday_income =
        HOLIDAY_WEEK_HOURS * work.avg_student_wage * f64::from(MAX_HOLIDAY_WEEKS);
    let max_monthly_potential = (max_legal_semester_income + max_legal_holiday_income) / 12.0;
    let max_potential_coverage_percent = if monthly_living_cost > 0.0 {
        (max_monthly_potential / monthly_living_cost * 100.0).round() as u32
    } else {
        0
    };
    let is_work_feasible = max_potential_coverage_percent >= FEASIBLE_COVERAGE_PERCENT;

    DerivedMetrics {
        monthly_living_cost,
        yearly_living_cost,
        monthly_breakdown,
        start_up_fees,
        mandatory_liquidity,
        recommended_liquidity,
        liquidity_gap,
        first_year_cost,
        subsequent_year_cost,
        total_degree_cost,
        total_fixed_costs,
        total_living_costs,
        yearly_work_income,
        monthly_avg_work_income,
        total_work_income,
        uncovered_living,
        net_total_cost,
        net_monthly_out_of_pocket,
        living_cost_covered_percent,
        affordability_tier,
        max_potential_coverage_percent,
        is_work_feasible,
    }
}
