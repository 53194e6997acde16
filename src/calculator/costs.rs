//! Cost breakdown arithmetic
//!
//! Pure multiplication over per-1K rates. Monthly totals are products of the
//! per-request figure, never re-rounded in between; the catalog's display
//! rounding does not apply here.

use crate::consts::TOKENS_PER_RATE_UNIT;
use crate::currency::{Currency, usd_rate};

use super::types::{CostBreakdown, ProviderRate, UsageParameters};

pub(crate) fn calculate_costs(
    rate: &ProviderRate,
    usage: UsageParameters,
    currency: Currency,
) -> CostBreakdown {
    let input_cost_usd = usage.input_tokens as f64 / TOKENS_PER_RATE_UNIT * rate.input_per_1k_usd;
    let output_cost_usd = usage.output_tokens as f64 / TOKENS_PER_RATE_UNIT * rate.output_per_1k_usd;
    let per_request_usd = input_cost_usd + output_cost_usd;
    let monthly_usd = per_request_usd * usage.requests_per_month as f64;

    let local = usd_rate(currency);
    CostBreakdown {
        currency,
        input_cost_usd,
        output_cost_usd,
        per_request_usd,
        per_request_local: per_request_usd * local,
        monthly_usd,
        monthly_local: monthly_usd * local,
    }
}
