//! Built-in provider rate catalog
//!
//! Per-1K-token USD list prices, updated by hand when vendors reprice.

use super::types::ProviderRate;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Provider {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) rate: ProviderRate,
}

pub(crate) static PROVIDERS: &[Provider] = &[
    Provider {
        id: "gpt-4o",
        name: "OpenAI GPT-4o",
        rate: ProviderRate {
            input_per_1k_usd: 0.002_5,
            output_per_1k_usd: 0.01,
        },
    },
    Provider {
        id: "gpt-4o-mini",
        name: "OpenAI GPT-4o mini",
        rate: ProviderRate {
            input_per_1k_usd: 0.000_15,
            output_per_1k_usd: 0.000_6,
        },
    },
    Provider {
        id: "gpt-4-turbo",
        name: "OpenAI GPT-4 Turbo",
        rate: ProviderRate {
            input_per_1k_usd: 0.01,
            output_per_1k_usd: 0.03,
        },
    },
    Provider {
        id: "claude-sonnet",
        name: "Anthropic Claude Sonnet",
        rate: ProviderRate {
            input_per_1k_usd: 0.003,
            output_per_1k_usd: 0.015,
        },
    },
    Provider {
        id: "claude-haiku",
        name: "Anthropic Claude Haiku",
        rate: ProviderRate {
            input_per_1k_usd: 0.000_8,
            output_per_1k_usd: 0.004,
        },
    },
    Provider {
        id: "gemini-pro",
        name: "Google Gemini Pro",
        rate: ProviderRate {
            input_per_1k_usd: 0.001_25,
            output_per_1k_usd: 0.005,
        },
    },
];

pub(crate) fn find_provider(id: &str) -> Option<&'static Provider> {
    PROVIDERS.iter().find(|p| p.id == id)
}
