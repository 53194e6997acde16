//! Fixed exchange rate tables
//!
//! Two deliberately separate tables: catalog prices convert out of tenge with
//! `service_rate`, calculator costs convert out of USD with `usd_rate`. The
//! tables are not reciprocal-consistent and must not be unified without a
//! coordinated repricing of both surfaces.

use super::code::Currency;

/// Multiplier applied to a tenge catalog price to reach the display currency.
/// The base currency maps to 1.
pub(super) fn service_rate(currency: Currency) -> f64 {
    match currency {
        Currency::Kzt => 1.0,
        Currency::Rub => 0.19,
        Currency::Usd => 0.002_11,
    }
}

/// Multiplier applied to a USD calculator cost to reach the display currency.
pub(crate) fn usd_rate(currency: Currency) -> f64 {
    match currency {
        Currency::Kzt => 470.0,
        Currency::Rub => 89.0,
        Currency::Usd => 1.0,
    }
}
