//! Display currency selection
//!
//! Catalog prices are authored in tenge; the user picks one of a closed set of
//! display currencies via CLI flag or config file.

use clap::ValueEnum;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Currency {
    /// Kazakhstani tenge (catalog base)
    #[default]
    Kzt,
    /// Russian ruble
    Rub,
    /// US dollar
    Usd,
}

impl Currency {
    pub(crate) fn code(self) -> &'static str {
        match self {
            Currency::Kzt => "KZT",
            Currency::Rub => "RUB",
            Currency::Usd => "USD",
        }
    }

    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Currency::Kzt => "₸",
            Currency::Rub => "₽",
            Currency::Usd => "$",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_lookup() {
        assert_eq!(Currency::Kzt.symbol(), "₸");
        assert_eq!(Currency::Rub.symbol(), "₽");
        assert_eq!(Currency::Usd.symbol(), "$");
    }

    #[test]
    fn code_lookup() {
        assert_eq!(Currency::Kzt.code(), "KZT");
        assert_eq!(Currency::Rub.code(), "RUB");
        assert_eq!(Currency::Usd.code(), "USD");
    }

    #[test]
    fn default_is_base_currency() {
        assert_eq!(Currency::default(), Currency::Kzt);
    }

    #[test]
    fn deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrap {
            v: Currency,
        }
        let w: Wrap = toml::from_str("v = \"usd\"").unwrap();
        assert_eq!(w.v, Currency::Usd);
    }
}
