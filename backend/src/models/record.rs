//! Cost record: the merged output of one resolve call
//!
//! A `CostRecord` combines one country's static cost profile with its
//! official regulatory data under the resolver's override precedence.
//! It is created fresh per resolve call and treated as a value afterwards:
//! nothing mutates it, and every consumer (interactive view, exported
//! document) reads the same record.
//!
//! Every monetary field is denominated in euros, the base currency.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::audit::AuditLog;
use crate::reference::OfficialCountryData;

/// One-time costs payable in the first year only (euros)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OneTimeCosts {
    /// Visa application and administrative fees
    pub visa_admin: f64,
    /// Deposit frozen in a blocked account; 0 where the destination uses
    /// a financial-proof statement instead
    pub blocked_account: f64,
    pub flight_travel: f64,
    pub tests_admissions: f64,
    /// Housing deposit
    pub deposit: f64,
}

/// Recurring monthly living costs (euros), before city-tier adjustment
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RecurringCosts {
    pub housing_monthly: f64,
    pub insurance_monthly: f64,
    pub food_monthly: f64,
    pub transport_monthly: f64,
    pub misc_monthly: f64,
}

impl RecurringCosts {
    /// Unadjusted monthly total across all categories.
    ///
    /// This is the "real" monthly estimate the resolver compares against
    /// the government funding-proof minimum.
    pub fn monthly_total(&self) -> f64 {
        self.housing_monthly
            + self.insurance_monthly
            + self.food_monthly
            + self.transport_monthly
            + self.misc_monthly
    }
}

/// Part-time work rules after merging official data over the profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartTimeWork {
    pub can_work: bool,
    /// Human-readable summary of the work-permit rules
    pub regulations: String,
    /// Legal minimum wage (euros/hour)
    pub min_wage: f64,
    /// Typical student wage (euros/hour), used for the max-potential check
    pub avg_student_wage: f64,
    /// Weekly hour cap enforced for the student's origin
    pub legal_max_hours: u32,
}

/// Merged cost record for one destination country.
///
/// # Example
///
/// ```rust
/// use eurostudy_core_rs::{resolve, CourseLevel, ReferenceStore, StudentOrigin};
///
/// let store = ReferenceStore::builtin();
/// let record = resolve(&store, "Germany", CourseLevel::Masters, 2.0, StudentOrigin::NonEu);
///
/// assert_eq!(record.country_name, "Germany");
/// assert_eq!(record.tuition_yearly, 350.0);
/// assert!(record.official_data.is_some());
/// assert!(!record.audit_log.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRecord {
    pub country_name: String,
    /// Yearly tuition selected for the student's origin (euros)
    pub tuition_yearly: f64,
    pub tuition_details: String,
    pub one_time_costs: OneTimeCosts,
    pub recurring_costs: RecurringCosts,
    pub part_time_work: PartTimeWork,
    pub highlights: Vec<String>,
    pub description: String,
    pub housing_range: String,
    /// Official regulatory data, absent for countries not in the official
    /// dataset (static profile values apply unmodified)
    pub official_data: Option<OfficialCountryData>,
    /// Ordered compliance trail explaining every override/rule applied
    pub audit_log: AuditLog,
    /// Currency code -> multiplicative rate against the base currency
    pub exchange_rates: BTreeMap<String, f64>,
}

impl CostRecord {
    /// True when this destination requires a blocked-account deposit
    pub fn requires_blocked_account(&self) -> bool {
        self.one_time_costs.blocked_account > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recurring_monthly_total() {
        let costs = RecurringCosts {
            housing_monthly: 500.0,
            insurance_monthly: 120.0,
            food_monthly: 250.0,
            transport_monthly: 30.0,
            misc_monthly: 200.0,
        };
        assert_eq!(costs.monthly_total(), 1100.0);
    }
}
