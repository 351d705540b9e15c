//! Reference Data Store
//!
//! Read-only lookup layer the resolver draws from: official regulatory
//! data, static cost profiles, the exchange-rate and currency-symbol
//! tables, and the blocked-account country set. The store holds no mutable
//! state and may be shared across concurrent calls without locking.
//!
//! The built-in dataset ships with the crate; `ReferenceStore::new` accepts
//! externally supplied tables so the data can be swapped without engine
//! changes.

pub mod official;
pub mod profiles;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::constants::BASE_CURRENCY;

// Re-exports
pub use official::{FundingProof, OfficialCountryData, WorkRights};
pub use profiles::{StaticCostProfile, TuitionRates, WorkRules, DEFAULT_PROFILE_KEY};

/// Display metadata for one supported currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyInfo {
    pub code: String,
    pub symbol: String,
    pub label: String,
}

/// Read-only reference data backing every resolve call
///
/// # Example
/// ```
/// use eurostudy_core_rs::ReferenceStore;
///
/// let store = ReferenceStore::builtin();
/// assert!(store.official("Germany").is_some());
/// assert!(store.official("Atlantis").is_none());
/// assert!(store.is_blocked_account_country("Germany"));
/// assert!(!store.is_blocked_account_country("France"));
/// assert_eq!(store.currency_symbol("USD"), "$");
/// assert_eq!(store.currency_symbol("XYZ"), "€");
/// ```
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    official: BTreeMap<String, OfficialCountryData>,
    profiles: BTreeMap<String, StaticCostProfile>,
    exchange_rates: BTreeMap<String, f64>,
    currencies: BTreeMap<String, CurrencyInfo>,
    blocked_account_countries: BTreeSet<String>,
}

impl ReferenceStore {
    /// Build a store from externally supplied tables.
    ///
    /// # Panics
    /// Panics if `profiles` has no `"default"` entry; the fallback profile
    /// is what keeps country lookups total.
    pub fn new(
        official: BTreeMap<String, OfficialCountryData>,
        profiles: BTreeMap<String, StaticCostProfile>,
        exchange_rates: BTreeMap<String, f64>,
        currencies: BTreeMap<String, CurrencyInfo>,
        blocked_account_countries: BTreeSet<String>,
    ) -> Self {
        assert!(
            profiles.contains_key(DEFAULT_PROFILE_KEY),
            "profile set must contain a '{DEFAULT_PROFILE_KEY}' fallback entry"
        );
        Self {
            official,
            profiles,
            exchange_rates,
            currencies,
            blocked_account_countries,
        }
    }

    /// Build the store with the crate's built-in dataset
    pub fn builtin() -> Self {
        Self::new(
            official::builtin_official_data(),
            profiles::builtin_cost_profiles(),
            builtin_exchange_rates(),
            builtin_currencies(),
            builtin_blocked_account_countries(),
        )
    }

    /// Official regulatory data for a country, if any
    pub fn official(&self, country: &str) -> Option<&OfficialCountryData> {
        self.official.get(country)
    }

    /// Static cost profile for a country, falling back to `"default"`.
    ///
    /// Total: never fails for any input string.
    pub fn profile(&self, country: &str) -> &StaticCostProfile {
        self.profiles
            .get(country)
            .unwrap_or_else(|| &self.profiles[DEFAULT_PROFILE_KEY])
    }

    /// Whether the country requires a blocked-account deposit as funding
    /// proof
    pub fn is_blocked_account_country(&self, country: &str) -> bool {
        self.blocked_account_countries.contains(country)
    }

    /// Currency code -> multiplicative rate against the base currency
    pub fn exchange_rates(&self) -> &BTreeMap<String, f64> {
        &self.exchange_rates
    }

    /// Display symbol for a currency code, falling back to the base
    /// currency's symbol
    pub fn currency_symbol(&self, code: &str) -> &str {
        self.currencies
            .get(code)
            .map(|c| c.symbol.as_str())
            .unwrap_or("€")
    }

    /// Countries with a curated profile, sorted, excluding the fallback key
    pub fn countries(&self) -> Vec<&str> {
        self.profiles
            .keys()
            .filter(|k| k.as_str() != DEFAULT_PROFILE_KEY)
            .map(String::as_str)
            .collect()
    }

    /// Supported display currencies, sorted by code
    pub fn currencies(&self) -> Vec<&CurrencyInfo> {
        self.currencies.values().collect()
    }
}

/// Built-in exchange-rate table (static snapshot, base currency EUR)
fn builtin_exchange_rates() -> BTreeMap<String, f64> {
    [
        (BASE_CURRENCY, 1.0),
        ("USD", 1.08),
        ("GBP", 0.85),
        ("INR", 90.5),
        ("PKR", 300.5),
        ("NGN", 1600.0),
    ]
    .into_iter()
    .map(|(code, rate)| (code.to_string(), rate))
    .collect()
}

/// Built-in currency symbol/label table
fn builtin_currencies() -> BTreeMap<String, CurrencyInfo> {
    [
        ("EUR", "€", "Euro (EUR)"),
        ("USD", "$", "US Dollar (USD)"),
        ("GBP", "£", "British Pound (GBP)"),
        ("INR", "₹", "Indian Rupee (INR)"),
        ("PKR", "Rs", "Pakistani Rupee (PKR)"),
        ("NGN", "₦", "Nigerian Naira (NGN)"),
    ]
    .into_iter()
    .map(|(code, symbol, label)| {
        (
            code.to_string(),
            CurrencyInfo {
                code: code.to_string(),
                symbol: symbol.to_string(),
                label: label.to_string(),
            },
        )
    })
    .collect()
}

/// Countries that require a blocked-account (deposit) style funding proof
fn builtin_blocked_account_countries() -> BTreeSet<String> {
    [
        "Germany",
        "Austria",
        "Netherlands",
        "Finland",
        "Denmark",
        "Norway",
        "Sweden",
        "Switzerland",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_falls_back_to_default() {
        let store = ReferenceStore::builtin();
        let fallback = store.profile("Atlantis");
        assert_eq!(fallback.tuition_yearly.non_eu, 5000.0);

        let germany = store.profile("Germany");
        assert_eq!(germany.one_time_costs.blocked_account, 11208.0);
    }

    #[test]
    fn test_countries_listing_is_sorted_and_excludes_fallback() {
        let store = ReferenceStore::builtin();
        let countries = store.countries();
        assert!(!countries.contains(&DEFAULT_PROFILE_KEY));
        let mut sorted = countries.clone();
        sorted.sort_unstable();
        assert_eq!(countries, sorted);
        assert_eq!(countries.len(), 11);
    }

    #[test]
    fn test_base_currency_rate_is_identity() {
        let store = ReferenceStore::builtin();
        assert_eq!(store.exchange_rates()["EUR"], 1.0);
        assert_eq!(store.currencies().len(), 6);
    }

    #[test]
    #[should_panic(expected = "default")]
    fn test_store_requires_default_profile() {
        ReferenceStore::new(
            BTreeMap::new(),
            BTreeMap::new(),
            BTreeMap::new(),
            BTreeMap::new(),
            BTreeSet::new(),
        );
    }
}
