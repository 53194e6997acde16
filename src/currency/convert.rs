use super::code::Currency;
use super::rates::service_rate;
use super::rounding::round_display;

/// Convert a whole-tenge catalog price into the display currency and apply
/// that currency's rounding policy.
///
/// `base_amount` must be non-negative (validated at the CLI boundary). Zero is
/// the "price on request" sentinel and passes through untouched, skipping both
/// the exchange rate and the rounding tiers.
pub(crate) fn convert_price(base_amount: i64, currency: Currency) -> f64 {
    if base_amount == 0 {
        return 0.0;
    }
    round_display(base_amount as f64 * service_rate(currency), currency)
}
