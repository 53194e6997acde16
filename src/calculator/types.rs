//! Calculator data types

use serde::Serialize;

use crate::currency::Currency;

/// Per-1K-token USD prices for one model
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProviderRate {
    pub(crate) input_per_1k_usd: f64,
    pub(crate) output_per_1k_usd: f64,
}

/// User-supplied usage volumes. All fields are non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub(crate) struct UsageParameters {
    pub(crate) input_tokens: i64,
    pub(crate) output_tokens: i64,
    pub(crate) requests_per_month: i64,
}

/// Full cost estimate for one provider/usage pair. USD values are raw
/// arithmetic; local values apply the fixed USD rate table and nothing else.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CostBreakdown {
    pub(crate) currency: Currency,
    pub(crate) input_cost_usd: f64,
    pub(crate) output_cost_usd: f64,
    pub(crate) per_request_usd: f64,
    pub(crate) per_request_local: f64,
    pub(crate) monthly_usd: f64,
    pub(crate) monthly_local: f64,
}
