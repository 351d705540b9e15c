//! Currency Conversion Contract
//!
//! The single conversion function every consumer of a `CostRecord` or
//! `DerivedMetrics` must use for display amounts. Two renderers of the same
//! record that disagree on a figure are, by contract, broken — which is why
//! this lives in exactly one place.

use std::collections::BTreeMap;

/// Convert a base-currency amount to the target display currency.
///
/// Multiplies by the table rate (unknown codes fall back to the identity
/// rate 1) and rounds half away from zero to the nearest whole display
/// unit. Display amounts are whole units by design; fractional precision
/// exists only in the base currency.
///
/// # Example
///
/// ```rust
/// use eurostudy_core_rs::{convert, ReferenceStore};
///
/// let store = ReferenceStore::builtin();
/// let rates = store.exchange_rates();
///
/// assert_eq!(convert(100.0, "EUR", rates), 100); // identity rate
/// assert_eq!(convert(100.0, "USD", rates), 108);
/// assert_eq!(convert(100.49, "EUR", rates), 100);
/// assert_eq!(convert(100.5, "EUR", rates), 101); // half away from zero
/// assert_eq!(convert(250.0, "XXX", rates), 250); // unknown code -> rate 1
/// ```
pub fn convert(amount_base: f64, target_currency: &str, rate_table: &BTreeMap<String, f64>) -> i64 {
    let rate = rate_table.get(target_currency).copied().unwrap_or(1.0);
    (amount_base * rate).round() as i64
}
