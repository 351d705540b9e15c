//! Static per-country cost profiles
//!
//! Curated living-cost estimates, tuition rates and work rules. These are
//! the fallback layer of the merge: official regulatory data overrides
//! individual fields where present. The `"default"` profile backs every
//! country without an entry of its own and must always exist.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::record::{OneTimeCosts, RecurringCosts};

/// Yearly tuition by student origin (euros)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuitionRates {
    pub eu: f64,
    pub non_eu: f64,
    pub details: String,
}

/// Part-time work rules before origin-specific selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkRules {
    pub can_work: bool,
    pub regulations: String,
    /// Legal minimum wage (euros/hour)
    pub min_wage: f64,
    /// Typical student wage (euros/hour)
    pub avg_student_wage: f64,
    /// Weekly hour cap for EU students
    pub max_hours_eu: u32,
    /// Weekly hour cap for non-EU students
    pub max_hours_non_eu: u32,
}

/// Static cost profile for one country (or the `"default"` fallback)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticCostProfile {
    pub tuition_yearly: TuitionRates,
    pub one_time_costs: OneTimeCosts,
    pub recurring_costs: RecurringCosts,
    pub part_time_work: WorkRules,
    pub highlights: Vec<String>,
    pub description: String,
    pub housing_range: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Built-in profile dataset, keyed by country name plus `"default"`
pub(crate) fn builtin_cost_profiles() -> BTreeMap<String, StaticCostProfile> {
    let mut profiles = BTreeMap::new();

    profiles.insert(
        "Austria".to_string(),
        StaticCostProfile {
            tuition_yearly: TuitionRates {
                eu: 42.0,
                non_eu: 1453.0,
                details: "EU: ~€21/sem. Non-EU: ~€726.72/sem (Public).".to_string(),
            },
            one_time_costs: OneTimeCosts {
                visa_admin: 160.0,
                blocked_account: 0.0,
                flight_travel: 350.0,
                tests_admissions: 150.0,
                deposit: 1000.0,
            },
            recurring_costs: RecurringCosts {
                housing_monthly: 550.0,
                insurance_monthly: 65.0,
                food_monthly: 300.0,
                transport_monthly: 50.0,
                misc_monthly: 150.0,
            },
            part_time_work: WorkRules {
                can_work: true,
                regulations: "20 hours/week allowed".to_string(),
                min_wage: 11.0,
                avg_student_wage: 14.0,
                max_hours_eu: 40,
                max_hours_non_eu: 20,
            },
            highlights: strings(&[
                "High quality of life",
                "Central European location",
                "Affordable student housing",
                "Strong public universities",
            ]),
            description: "Quality of life is high with affordable public university fees."
                .to_string(),
            housing_range: "€350–€800/mo".to_string(),
        },
    );

    profiles.insert(
        "Germany".to_string(),
        StaticCostProfile {
            tuition_yearly: TuitionRates {
                eu: 350.0,
                non_eu: 350.0,
                details:
                    "Mostly free (Semester contribution ~€150-350/sem). BW charges Non-EU €3,000/yr."
                        .to_string(),
            },
            one_time_costs: OneTimeCosts {
                visa_admin: 75.0,
                blocked_account: 11208.0,
                flight_travel: 400.0,
                tests_admissions: 200.0,
                deposit: 1200.0,
            },
            recurring_costs: RecurringCosts {
                housing_monthly: 500.0,
                insurance_monthly: 120.0,
                food_monthly: 250.0,
                transport_monthly: 30.0,
                misc_monthly: 200.0,
            },
            part_time_work: WorkRules {
                can_work: true,
                regulations: "20h/week (120 full days) allowed".to_string(),
                min_wage: 12.41,
                avg_student_wage: 13.50,
                max_hours_eu: 40,
                max_hours_non_eu: 20,
            },
            highlights: strings(&[
                "Tuition-free public universities",
                "Strong economy",
                "Post-study work visa (18 months)",
                "Diverse international community",
            ]),
            description: "A top destination known for free tuition and engineering excellence."
                .to_string(),
            housing_range: "€400–€900/mo".to_string(),
        },
    );

    profiles.insert(
        "Netherlands".to_string(),
        StaticCostProfile {
            tuition_yearly: TuitionRates {
                eu: 2530.0,
                non_eu: 12000.0,
                details: "EU: ~€2,530. Non-EU: €6k - €20k depending on course.".to_string(),
            },
            one_time_costs: OneTimeCosts {
                visa_admin: 210.0,
                blocked_account: 0.0,
                flight_travel: 350.0,
                tests_admissions: 250.0,
                deposit: 1500.0,
            },
            recurring_costs: RecurringCosts {
                housing_monthly: 800.0,
                insurance_monthly: 100.0,
                food_monthly: 300.0,
                transport_monthly: 80.0,
                misc_monthly: 250.0,
            },
            part_time_work: WorkRules {
                can_work: true,
                regulations: "16 hours/week allowed for Non-EU".to_string(),
                min_wage: 13.27,
                avg_student_wage: 15.0,
                max_hours_eu: 40,
                max_hours_non_eu: 16,
            },
            highlights: strings(&[
                "English widely spoken",
                "Innovative teaching methods",
                "Cycling culture",
                "High post-grad salaries",
            ]),
            description: "High English proficiency and vibrant international student life."
                .to_string(),
            housing_range: "€500–€1100/mo".to_string(),
        },
    );

    profiles.insert(
        "France".to_string(),
        StaticCostProfile {
            tuition_yearly: TuitionRates {
                eu: 170.0,
                non_eu: 2770.0,
                details: "EU: ~€170. Non-EU: €2,770 (Bachelor), €3,770 (Master).".to_string(),
            },
            one_time_costs: OneTimeCosts {
                visa_admin: 99.0,
                blocked_account: 0.0,
                flight_travel: 350.0,
                tests_admissions: 250.0,
                deposit: 900.0,
            },
            recurring_costs: RecurringCosts {
                housing_monthly: 600.0,
                insurance_monthly: 0.0,
                food_monthly: 300.0,
                transport_monthly: 40.0,
                misc_monthly: 180.0,
            },
            part_time_work: WorkRules {
                can_work: true,
                regulations: "964 hours/year allowed (60%)".to_string(),
                min_wage: 11.65,
                avg_student_wage: 12.50,
                max_hours_eu: 40,
                max_hours_non_eu: 20,
            },
            highlights: strings(&[
                "Rich culture & history",
                "Housing subsidy (CAF)",
                "Grandes Écoles system",
                "Central Europe travel hub",
            ]),
            description: "Affordable education with unique housing subsidies for students."
                .to_string(),
            housing_range: "€400–€900/mo".to_string(),
        },
    );

    profiles.insert(
        "Italy".to_string(),
        StaticCostProfile {
            tuition_yearly: TuitionRates {
                eu: 1500.0,
                non_eu: 2000.0,
                details: "Based on family income (ISEE). Ranges €0–€4,000/yr.".to_string(),
            },
            one_time_costs: OneTimeCosts {
                visa_admin: 50.0,
                blocked_account: 0.0,
                flight_travel: 350.0,
                tests_admissions: 150.0,
                deposit: 800.0,
            },
            recurring_costs: RecurringCosts {
                housing_monthly: 500.0,
                insurance_monthly: 50.0,
                food_monthly: 250.0,
                transport_monthly: 35.0,
                misc_monthly: 150.0,
            },
            part_time_work: WorkRules {
                can_work: true,
                regulations: "20 hours/week (1040h/yr)".to_string(),
                min_wage: 9.0,
                avg_student_wage: 10.0,
                max_hours_eu: 40,
                max_hours_non_eu: 20,
            },
            highlights: strings(&[
                "Historic universities",
                "Amazing cuisine",
                "Scholarship opportunities (DSU)",
                "Rich art & culture",
            ]),
            description: "Study amidst history with generous regional scholarships.".to_string(),
            housing_range: "€300–€700/mo".to_string(),
        },
    );

    profiles.insert(
        "Spain".to_string(),
        StaticCostProfile {
            tuition_yearly: TuitionRates {
                eu: 1200.0,
                non_eu: 2500.0,
                details: "Public unis: €700-€3,500/yr. Non-EU may pay higher rates.".to_string(),
            },
            one_time_costs: OneTimeCosts {
                visa_admin: 80.0,
                blocked_account: 0.0,
                flight_travel: 350.0,
                tests_admissions: 150.0,
                deposit: 800.0,
            },
            recurring_costs: RecurringCosts {
                housing_monthly: 500.0,
                insurance_monthly: 60.0,
                food_monthly: 250.0,
                transport_monthly: 30.0,
                misc_monthly: 180.0,
            },
            part_time_work: WorkRules {
                can_work: true,
                regulations: "30 hours/week allowed".to_string(),
                min_wage: 8.87,
                avg_student_wage: 10.0,
                max_hours_eu: 40,
                max_hours_non_eu: 30,
            },
            highlights: strings(&[
                "Warm climate",
                "Vibrant social life",
                "Affordable living",
                "Spanish language immersion",
            ]),
            description: "A vibrant destination with affordable living and great weather."
                .to_string(),
            housing_range: "€300–€800/mo".to_string(),
        },
    );

    profiles.insert(
        "Poland".to_string(),
        StaticCostProfile {
            tuition_yearly: TuitionRates {
                eu: 0.0,
                non_eu: 3000.0,
                details: "EU: Free (Polish courses). Non-EU: €2k-€4k/yr.".to_string(),
            },
            one_time_costs: OneTimeCosts {
                visa_admin: 80.0,
                blocked_account: 0.0,
                flight_travel: 300.0,
                tests_admissions: 150.0,
                deposit: 600.0,
            },
            recurring_costs: RecurringCosts {
                housing_monthly: 350.0,
                insurance_monthly: 40.0,
                food_monthly: 200.0,
                transport_monthly: 20.0,
                misc_monthly: 120.0,
            },
            part_time_work: WorkRules {
                can_work: true,
                regulations: "Unlimited for residents".to_string(),
                min_wage: 6.5,
                avg_student_wage: 7.5,
                max_hours_eu: 40,
                max_hours_non_eu: 40,
            },
            highlights: strings(&[
                "Very affordable",
                "Modern cities",
                "Growing tech hub",
                "Rich history",
            ]),
            description:
                "One of the most affordable countries in Europe with high educational standards."
                    .to_string(),
            housing_range: "€200–€500/mo".to_string(),
        },
    );

    profiles.insert(
        "Ireland".to_string(),
        StaticCostProfile {
            tuition_yearly: TuitionRates {
                eu: 3000.0,
                non_eu: 15000.0,
                details: "EU: €3k contribution. Non-EU: €10k-€25k.".to_string(),
            },
            one_time_costs: OneTimeCosts {
                visa_admin: 100.0,
                blocked_account: 0.0,
                flight_travel: 300.0,
                tests_admissions: 200.0,
                deposit: 1200.0,
            },
            recurring_costs: RecurringCosts {
                housing_monthly: 900.0,
                insurance_monthly: 50.0,
                food_monthly: 300.0,
                transport_monthly: 60.0,
                misc_monthly: 200.0,
            },
            part_time_work: WorkRules {
                can_work: true,
                regulations: "20h/week (term), 40h (holiday)".to_string(),
                min_wage: 12.70,
                avg_student_wage: 13.50,
                max_hours_eu: 40,
                max_hours_non_eu: 20,
            },
            highlights: strings(&[
                "English speaking",
                "Tech headquarters of Europe",
                "Friendly population",
                "2-year post-study visa",
            ]),
            description:
                "English-speaking hub with major career opportunities in tech and pharma."
                    .to_string(),
            housing_range: "€600–€1200/mo".to_string(),
        },
    );

    profiles.insert(
        "Sweden".to_string(),
        StaticCostProfile {
            tuition_yearly: TuitionRates {
                eu: 0.0,
                non_eu: 12000.0,
                details: "EU: Free. Non-EU: SEK 80k-140k/yr.".to_string(),
            },
            one_time_costs: OneTimeCosts {
                visa_admin: 140.0,
                blocked_account: 0.0,
                flight_travel: 300.0,
                tests_admissions: 100.0,
                deposit: 1000.0,
            },
            recurring_costs: RecurringCosts {
                housing_monthly: 550.0,
                insurance_monthly: 50.0,
                food_monthly: 300.0,
                transport_monthly: 60.0,
                misc_monthly: 200.0,
            },
            part_time_work: WorkRules {
                can_work: true,
                regulations: "Unlimited work allowed".to_string(),
                min_wage: 12.0,
                avg_student_wage: 14.0,
                max_hours_eu: 40,
                max_hours_non_eu: 40,
            },
            highlights: strings(&[
                "Innovation leader",
                "English widely spoken",
                "Work-life balance",
                "Beautiful nature",
            ]),
            description: "Innovative society with unlimited work rights for students.".to_string(),
            housing_range: "€400–€800/mo".to_string(),
        },
    );

    profiles.insert(
        "Switzerland".to_string(),
        StaticCostProfile {
            tuition_yearly: TuitionRates {
                eu: 1500.0,
                non_eu: 1500.0,
                details: "Public unis are cheap for all (~CHF 1500). Private are expensive."
                    .to_string(),
            },
            one_time_costs: OneTimeCosts {
                visa_admin: 80.0,
                blocked_account: 0.0,
                flight_travel: 300.0,
                tests_admissions: 200.0,
                deposit: 2000.0,
            },
            recurring_costs: RecurringCosts {
                housing_monthly: 1200.0,
                insurance_monthly: 250.0,
                food_monthly: 500.0,
                transport_monthly: 100.0,
                misc_monthly: 400.0,
            },
            part_time_work: WorkRules {
                can_work: true,
                regulations: "15h/week after 6mo".to_string(),
                min_wage: 24.0,
                avg_student_wage: 28.0,
                max_hours_eu: 40,
                max_hours_non_eu: 15,
            },
            highlights: strings(&[
                "Highest salaries",
                "Top global universities",
                "Stunning landscapes",
                "High quality of life",
            ]),
            description: "Premium education with the highest living standards in Europe."
                .to_string(),
            housing_range: "€800–€1800/mo".to_string(),
        },
    );

    profiles.insert(
        "United Kingdom".to_string(),
        StaticCostProfile {
            tuition_yearly: TuitionRates {
                eu: 16000.0,
                non_eu: 18000.0,
                details: "EU/Intl: £14k-£26k. Home fee status lost after Brexit.".to_string(),
            },
            one_time_costs: OneTimeCosts {
                visa_admin: 575.0,
                blocked_account: 0.0,
                flight_travel: 400.0,
                tests_admissions: 250.0,
                deposit: 1500.0,
            },
            recurring_costs: RecurringCosts {
                housing_monthly: 900.0,
                insurance_monthly: 80.0,
                food_monthly: 350.0,
                transport_monthly: 80.0,
                misc_monthly: 300.0,
            },
            part_time_work: WorkRules {
                can_work: true,
                regulations: "20 hours/week".to_string(),
                min_wage: 11.44,
                avg_student_wage: 12.50,
                max_hours_eu: 40,
                max_hours_non_eu: 20,
            },
            highlights: strings(&[
                "World class universities",
                "Short masters (1 year)",
                "Cultural powerhouse",
                "English language",
            ]),
            description: "Prestigious education with shorter Master degrees (1 year).".to_string(),
            housing_range: "£600–€1200/mo".to_string(),
        },
    );

    // Fallback for countries without a curated profile
    profiles.insert(
        DEFAULT_PROFILE_KEY.to_string(),
        StaticCostProfile {
            tuition_yearly: TuitionRates {
                eu: 1000.0,
                non_eu: 5000.0,
                details: "Varies significantly by institution.".to_string(),
            },
            one_time_costs: OneTimeCosts {
                visa_admin: 100.0,
                blocked_account: 0.0,
                flight_travel: 300.0,
                tests_admissions: 200.0,
                deposit: 800.0,
            },
            recurring_costs: RecurringCosts {
                housing_monthly: 500.0,
                insurance_monthly: 60.0,
                food_monthly: 300.0,
                transport_monthly: 40.0,
                misc_monthly: 150.0,
            },
            part_time_work: WorkRules {
                can_work: true,
                regulations: "20 hours/week typically".to_string(),
                min_wage: 10.0,
                avg_student_wage: 11.0,
                max_hours_eu: 40,
                max_hours_non_eu: 20,
            },
            highlights: strings(&[
                "European culture",
                "Travel opportunities",
                "Diverse education",
                "Student friendly",
            ]),
            description: "A great study destination with access to the broader European network."
                .to_string(),
            housing_range: "€300–€700/mo".to_string(),
        },
    );

    profiles
}

/// Key of the fallback profile; must be present in every profile set
pub const DEFAULT_PROFILE_KEY: &str = "default";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_present() {
        let profiles = builtin_cost_profiles();
        assert!(profiles.contains_key(DEFAULT_PROFILE_KEY));
        assert_eq!(profiles.len(), 12);
    }

    #[test]
    fn test_germany_profile_values() {
        let profiles = builtin_cost_profiles();
        let germany = &profiles["Germany"];
        assert_eq!(germany.tuition_yearly.eu, germany.tuition_yearly.non_eu);
        assert_eq!(germany.recurring_costs.monthly_total(), 1100.0);
        assert_eq!(germany.part_time_work.max_hours_non_eu, 20);
    }
}
