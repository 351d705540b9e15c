//! Tests for the currency conversion contract shared by every consumer.

use eurostudy_core_rs::{convert, ReferenceStore};

#[test]
fn test_eur_identity_is_plain_rounding() {
    let store = ReferenceStore::builtin();
    let rates = store.exchange_rates();

    for &amount in &[0.0, 1.0, 12.4, 12.5, 999.99, 11208.0, 13433.49] {
        assert_eq!(convert(amount, "EUR", rates), amount.round() as i64);
    }
}

#[test]
fn test_conversion_applies_rate_then_rounds() {
    let store = ReferenceStore::builtin();
    let rates = store.exchange_rates();

    assert_eq!(convert(100.0, "USD", rates), 108);
    assert_eq!(convert(100.0, "GBP", rates), 85);
    assert_eq!(convert(100.0, "INR", rates), 9050);
    assert_eq!(convert(10.0, "NGN", rates), 16000);
    // 15425 x 1.08 = 16659
    assert_eq!(convert(15425.0, "USD", rates), 16659);
}

#[test]
fn test_unknown_currency_falls_back_to_identity() {
    let store = ReferenceStore::builtin();
    let rates = store.exchange_rates();

    assert_eq!(convert(1234.4, "XYZ", rates), 1234);
    assert_eq!(convert(1234.5, "XYZ", rates), 1235);
}

#[test]
fn test_rounding_is_half_away_from_zero() {
    let store = ReferenceStore::builtin();
    let rates = store.exchange_rates();

    assert_eq!(convert(0.5, "EUR", rates), 1);
    assert_eq!(convert(1.5, "EUR", rates), 2);
    assert_eq!(convert(-0.5, "EUR", rates), -1);
    assert_eq!(convert(-1.5, "EUR", rates), -2);
}
