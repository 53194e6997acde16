/// Label shown in place of a price for items quoted individually
pub(crate) const ON_REQUEST: &str = "on request";

/// Provider rates are quoted per this many tokens
pub(crate) const TOKENS_PER_RATE_UNIT: f64 = 1000.0;
