//! Localized price formatting
//!
//! Tenge and ruble amounts group thousands with spaces and use a comma decimal
//! separator; dollar amounts group with commas, keep two decimals, and attach
//! the symbol without a space.

use crate::consts::ON_REQUEST;

use super::code::Currency;

#[derive(Debug, Clone, Copy)]
struct PriceFormat {
    group_sep: char,
    decimal_sep: char,
    decimals: u32,
    spaced_symbol: bool,
}

fn price_format(currency: Currency) -> PriceFormat {
    match currency {
        Currency::Kzt | Currency::Rub => PriceFormat {
            group_sep: ' ',
            decimal_sep: ',',
            decimals: 0,
            spaced_symbol: true,
        },
        Currency::Usd => PriceFormat {
            group_sep: ',',
            decimal_sep: '.',
            decimals: 2,
            spaced_symbol: false,
        },
    }
}

fn group_digits(n: i64, sep: char) -> String {
    let (sign, digits) = if n < 0 {
        ("-", (-n).to_string())
    } else {
        ("", n.to_string())
    };
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(sep);
        }
        result.push(c);
    }
    let grouped: String = result.chars().rev().collect();
    format!("{sign}{grouped}")
}

fn render(amount: f64, fmt: PriceFormat, symbol: &str) -> String {
    let scale = 10_i64.pow(fmt.decimals);
    let scaled = (amount * scale as f64).round() as i64;
    let mut number = group_digits(scaled / scale, fmt.group_sep);
    if fmt.decimals > 0 {
        let frac = (scaled % scale).abs();
        number.push(fmt.decimal_sep);
        number.push_str(&format!("{frac:0width$}", width = fmt.decimals as usize));
    }
    if fmt.spaced_symbol {
        format!("{number} {symbol}")
    } else {
        format!("{number}{symbol}")
    }
}

/// Format a display price. Zero means "price on request" and renders as a
/// fixed label instead of a zero amount.
pub(crate) fn format_price(amount: f64, currency: Currency) -> String {
    if amount == 0.0 {
        return ON_REQUEST.to_string();
    }
    render(amount, price_format(currency), currency.symbol())
}

/// Format a plain monetary amount with a fixed number of decimals, keeping the
/// currency's separator and symbol conventions. Used for calculator costs,
/// which skip the catalog rounding tiers.
pub(crate) fn format_amount(amount: f64, currency: Currency, decimals: u32) -> String {
    let mut fmt = price_format(currency);
    fmt.decimals = decimals;
    render(amount, fmt, currency.symbol())
}
