mod code;
mod convert;
mod format;
mod rates;
pub(crate) mod rounding;

pub(crate) use code::Currency;
pub(crate) use convert::convert_price;
pub(crate) use format::{format_amount, format_price};
pub(crate) use rates::usd_rate;
