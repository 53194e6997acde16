//! Psychological price rounding
//!
//! Each display currency has its own tiering: tenge prices snap to clean
//! denominations, ruble prices end in 9 one step below a clean value, dollar
//! prices end in .99 strictly above the raw value. Apply exactly once per raw
//! converted amount; the output of `round_display` is not a fixed point of
//! another pass.

use super::code::Currency;

fn nearest(amount: f64, step: f64) -> f64 {
    (amount / step).round() * step
}

fn ceil_to(amount: f64, step: f64) -> f64 {
    (amount / step).ceil() * step
}

pub(crate) fn round_display(amount: f64, currency: Currency) -> f64 {
    match currency {
        Currency::Kzt => {
            if amount >= 100_000.0 {
                nearest(amount, 1_000.0)
            } else if amount >= 10_000.0 {
                nearest(amount, 500.0)
            } else {
                nearest(amount, 100.0)
            }
        }
        Currency::Rub => {
            if amount >= 50_000.0 {
                nearest(amount, 1_000.0) - 1.0
            } else if amount >= 10_000.0 {
                nearest(amount, 500.0) - 1.0
            } else if amount >= 1_000.0 {
                nearest(amount, 100.0) - 1.0
            } else {
                nearest(amount, 10.0) - 1.0
            }
        }
        Currency::Usd => {
            let charm = if amount >= 100.0 {
                ceil_to(amount, 10.0) - 0.01
            } else if amount >= 20.0 {
                ceil_to(amount, 5.0) - 0.01
            } else {
                amount.ceil() + 1.0 - 0.01
            };
            // keep exactly two decimals
            (charm * 100.0).round() / 100.0
        }
    }
}
