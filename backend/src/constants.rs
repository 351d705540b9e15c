//! Business constants used by the resolver and the metrics calculator.
//!
//! These values are domain policy, not derived facts: the reality-check
//! ratio and the coverage thresholds in particular are subject to review by
//! the domain owner. They live here, in one place, so a change never has to
//! touch a formula.

/// Country used for the caller's initial/default record.
///
/// Callers that need a record before any user input should build it
/// explicitly via `resolve(&store, DEFAULT_COUNTRY, ...)` at startup.
pub const DEFAULT_COUNTRY: &str = "Austria";

/// The base currency every internal amount is denominated in.
pub const BASE_CURRENCY: &str = "EUR";

/// Length of the academic term in weeks (term-time work income model).
pub const SEMESTER_WEEKS: f64 = 38.0;

/// Hours per week assumed for full-time holiday work.
pub const HOLIDAY_WEEK_HOURS: f64 = 40.0;

/// Maximum holiday work weeks assumed for the max-potential feasibility
/// check. User-configured holiday weeks are validated against this too.
pub const MAX_HOLIDAY_WEEKS: u32 = 18;

/// Real monthly costs above this multiple of the government monthly
/// requirement trigger a cost-of-living audit warning.
pub const REALITY_CHECK_RATIO: f64 = 1.2;

/// Living-cost coverage (percent) at or above which a destination is
/// classified as Affordable.
pub const AFFORDABLE_COVERAGE_PERCENT: u32 = 90;

/// Living-cost coverage (percent) at or above which a destination is
/// classified as Moderate.
pub const MODERATE_COVERAGE_PERCENT: u32 = 60;

/// Max-potential coverage (percent) at or above which part-time work is
/// considered feasible for covering living costs.
pub const FEASIBLE_COVERAGE_PERCENT: u32 = 85;

/// Housing cost multiplier for big-city destinations.
pub const BIG_CITY_MULTIPLIER: f64 = 1.35;

/// Housing cost multiplier for mid-sized cities (the baseline).
pub const MID_SIZED_MULTIPLIER: f64 = 1.0;

/// Housing cost multiplier for small towns.
pub const SMALL_TOWN_MULTIPLIER: f64 = 0.85;

/// Food scales at half the housing sensitivity to the city tier.
pub const FOOD_TIER_SENSITIVITY: f64 = 0.5;
