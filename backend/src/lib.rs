//! EuroStudy Cost Engine - Rust Core
//!
//! Study-abroad cost estimation with deterministic, auditable data merging.
//!
//! # Architecture
//!
//! - **models**: Domain types (UserConfig, CostRecord, AuditLog)
//! - **reference**: Read-only reference data store (official visa data,
//!   static cost profiles, exchange rates, blocked-account set)
//! - **resolver**: Data merge resolver (official data over static profiles,
//!   with a structured compliance audit trail)
//! - **metrics**: Derived financial metrics (liquidity, net degree cost,
//!   work-income coverage, affordability tier)
//! - **currency**: Display-currency conversion contract
//! - **digest**: Canonical hashing of engine values
//!
//! # Critical Invariants
//!
//! 1. All money values are f64 euros (the base currency); conversion to a
//!    display currency happens only at the presentation boundary and never
//!    feeds back into engine math
//! 2. The engine is total: `resolve`, `compute_metrics` and `convert`
//!    never fail (unknown countries fall back to the default profile,
//!    unknown currencies to rate 1, degenerate input to zero results)
//! 3. Output is deterministic: identical input produces byte-identical
//!    output, including audit-log order (log order = merge-rule order)

// Module declarations
pub mod constants;
pub mod currency;
pub mod digest;
pub mod metrics;
pub mod models;
pub mod reference;
pub mod resolver;

// Re-exports for convenience
pub use currency::convert;
pub use digest::{canonical_digest, DigestError};
pub use metrics::{compute_metrics, AffordabilityTier, DerivedMetrics, MonthlyBreakdown};
pub use models::{
    audit::{AuditEntry, AuditKind, AuditLog},
    config::{CityTier, ConfigError, CourseLevel, ParseError, StudentOrigin, UserConfig},
    record::{CostRecord, OneTimeCosts, PartTimeWork, RecurringCosts},
};
pub use reference::{
    CurrencyInfo, FundingProof, OfficialCountryData, ReferenceStore, StaticCostProfile,
    TuitionRates, WorkRights, WorkRules,
};
pub use resolver::resolve;
