//! Data Merge Resolver
//!
//! Combines one country's official regulatory data with its static cost
//! profile under fixed override precedence, producing a single consistent
//! `CostRecord` plus an ordered compliance audit trail.
//!
//! Merge rules, applied in this order (each appends zero or one entry to
//! the audit log, so log order always equals rule order):
//!
//! 1. Tuition selection by student origin
//! 2. Visa fee: official figure wins when present
//! 3. Blocked-account gating: only member countries carry a blocked-account
//!    amount; everyone else uses the financial-proof method (amount 0)
//! 4. Work rights: official allowance/notes win; the weekly hour cap is
//!    selected by origin from the profile
//! 5. Cost-of-living reality check against the government funding minimum
//!    (informational warning only, never a behavioral branch)
//!
//! The resolver is total: an unknown country resolves from the `"default"`
//! profile with no official data and no error.
//!
//! # Example
//!
//! ```rust
//! use eurostudy_core_rs::{resolve, CourseLevel, ReferenceStore, StudentOrigin};
//!
//! let store = ReferenceStore::builtin();
//! let record = resolve(&store, "Germany", CourseLevel::Undergraduate, 3.0, StudentOrigin::NonEu);
//!
//! // Germany is a blocked-account country; the official amount is enforced.
//! assert_eq!(record.one_time_costs.blocked_account, 11208.0);
//! // France is not; the blocked-account amount is forced to zero.
//! let record = resolve(&store, "France", CourseLevel::Undergraduate, 3.0, StudentOrigin::NonEu);
//! assert_eq!(record.one_time_costs.blocked_account, 0.0);
//! ```

use crate::constants::REALITY_CHECK_RATIO;
use crate::models::audit::{AuditEntry, AuditLog};
use crate::models::config::{CourseLevel, StudentOrigin};
use crate::models::record::{CostRecord, OneTimeCosts, PartTimeWork};
use crate::reference::ReferenceStore;

/// Resolve one country into a merged `CostRecord`.
///
/// Pure and synchronous; identical input yields a byte-identical record,
/// audit order included. `course_level` and `duration_years` are part of
/// the resolve contract but do not influence the merge rules today — both
/// are already priced into the profile figures.
pub fn resolve(
    store: &ReferenceStore,
    country: &str,
    _course_level: CourseLevel,
    _duration_years: f64,
    student_origin: StudentOrigin,
) -> CostRecord {
    let mut audit_log = AuditLog::new();
    let official = store.official(country).cloned();
    let profile = store.profile(country);
    let is_eu = student_origin == StudentOrigin::Eu;

    // Rule 1: tuition selection by origin. The EU entry is only worth
    // logging when the subsidized rate actually differs.
    let tuition_yearly = if is_eu {
        profile.tuition_yearly.eu
    } else {
        profile.tuition_yearly.non_eu
    };
    if is_eu {
        if profile.tuition_yearly.eu != profile.tuition_yearly.non_eu {
            audit_log.push(AuditEntry::info(format!(
                "Applied subsidized EU tuition rate (€{tuition_yearly}/yr) instead of the non-EU rate."
            )));
        }
    } else {
        audit_log.push(AuditEntry::info(format!(
            "Applied international tuition rate (€{tuition_yearly}/yr) for non-EU origin."
        )));
    }

    // Rule 2: official visa fee wins when present
    let visa_admin = official
        .as_ref()
        .map(|o| o.visa_fee_euro)
        .unwrap_or(profile.one_time_costs.visa_admin);

    // Rule 3: blocked-account gating
    let is_gated = store.is_blocked_account_country(country);
    let blocked_account = if is_gated {
        official
            .as_ref()
            .map(|o| o.funding_proof.amount_euro)
            .unwrap_or(profile.one_time_costs.blocked_account)
    } else {
        0.0
    };
    if is_gated {
        let official_blocked_account = official
            .as_ref()
            .map(|o| o.funding_proof.preferred_method.contains("Blocked Account"))
            .unwrap_or(false);
        if official_blocked_account {
            audit_log.push(AuditEntry::info(format!(
                "Enforced official blocked-account requirement (approx. €{blocked_account}) for {country}."
            )));
        } else {
            audit_log.push(AuditEntry::info(format!(
                "Applied mandatory deposit logic based on strict {country} visa rules."
            )));
        }
    } else {
        audit_log.push(AuditEntry::info(format!(
            "Switched to annual financial-proof method (no blocked account required for {country})."
        )));
    }

    let one_time_costs = OneTimeCosts {
        visa_admin,
        blocked_account,
        flight_travel: profile.one_time_costs.flight_travel,
        tests_admissions: profile.one_time_costs.tests_admissions,
        deposit: profile.one_time_costs.deposit,
    };

    // Rule 4: work rights; the hour cap is origin-specific
    let legal_max_hours = if is_eu {
        profile.part_time_work.max_hours_eu
    } else {
        profile.part_time_work.max_hours_non_eu
    };
    let part_time_work = PartTimeWork {
        can_work: official
            .as_ref()
            .map(|o| o.work_rights.allowed)
            .unwrap_or(profile.part_time_work.can_work),
        regulations: official
            .as_ref()
            .map(|o| o.work_rights.notes.clone())
            .unwrap_or_else(|| profile.part_time_work.regulations.clone()),
        min_wage: profile.part_time_work.min_wage,
        avg_student_wage: profile.part_time_work.avg_student_wage,
        legal_max_hours,
    };
    audit_log.push(AuditEntry::info(format!(
        "Legal work limit: capped estimation to {legal_max_hours}h/week based on {student_origin} student visa regulations."
    )));

    // Rule 5: reality check. The calculator always uses real costs; this
    // entry is informational only.
    if let Some(official) = &official {
        let govt_monthly_requirement = official.funding_proof.amount_euro / 12.0;
        let real_monthly_estimate = profile.recurring_costs.monthly_total();
        if real_monthly_estimate > govt_monthly_requirement * REALITY_CHECK_RATIO {
            audit_log.push(AuditEntry::warning(format!(
                "Real monthly costs (~€{real_monthly_estimate:.0}) are significantly higher than \
                 the government visa minimum (~€{govt_monthly_requirement:.0}). The higher real \
                 estimate is used downstream."
            )));
        }
    }

    CostRecord {
        country_name: country.to_string(),
        tuition_yearly,
        tuition_details: profile.tuition_yearly.details.clone(),
        one_time_costs,
        recurring_costs: profile.recurring_costs,
        part_time_work,
        highlights: profile.highlights.clone(),
        description: profile.description.clone(),
        housing_range: profile.housing_range.clone(),
        official_data: official,
        audit_log,
        exchange_rates: store.exchange_rates().clone(),
    }
}
