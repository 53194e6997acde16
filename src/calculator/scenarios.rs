//! Usage scenario presets
//!
//! Named bundles that pre-fill the calculator with a typical customer profile.
//! Applying a scenario replaces every usage field; nothing from the previous
//! parameter set survives.

use super::types::UsageParameters;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Scenario {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
    pub(crate) usage: UsageParameters,
}

pub(crate) static SCENARIOS: &[Scenario] = &[
    Scenario {
        id: "chatbot",
        name: "Chatbot consultant",
        summary: "Customer support assistant answering short questions",
        usage: UsageParameters {
            input_tokens: 1_500,
            output_tokens: 400,
            requests_per_month: 30_000,
        },
    },
    Scenario {
        id: "content",
        name: "Content generation",
        summary: "Long-form marketing copy from short briefs",
        usage: UsageParameters {
            input_tokens: 500,
            output_tokens: 2_000,
            requests_per_month: 2_000,
        },
    },
    Scenario {
        id: "documents",
        name: "Document analysis",
        summary: "Contract and report summarization",
        usage: UsageParameters {
            input_tokens: 8_000,
            output_tokens: 1_000,
            requests_per_month: 5_000,
        },
    },
];

pub(crate) fn find_scenario(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}

/// Look up a preset and return its parameter bundle as the new current usage.
pub(crate) fn apply_scenario(id: &str) -> Option<UsageParameters> {
    find_scenario(id).map(|s| s.usage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_is_total_override() {
        let previous = UsageParameters {
            input_tokens: 999_999,
            output_tokens: 999_999,
            requests_per_month: 999_999,
        };
        let applied = apply_scenario("chatbot").unwrap();
        assert_ne!(applied, previous);
        assert_eq!(
            applied,
            UsageParameters {
                input_tokens: 1_500,
                output_tokens: 400,
                requests_per_month: 30_000,
            }
        );
    }

    #[test]
    fn unknown_scenario_is_none() {
        assert!(apply_scenario("mining").is_none());
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = SCENARIOS.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SCENARIOS.len());
    }
}
