use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Unknown provider \"{input}\" (run `aitarif providers` for available ids)")]
    UnknownProvider { input: String },

    #[error("Unknown scenario \"{input}\" (run `aitarif scenarios` for available ids)")]
    UnknownScenario { input: String },

    #[error("Invalid amount {input}: prices are non-negative whole tenge amounts")]
    InvalidAmount { input: i64 },

    #[error("--scenario cannot be combined with explicit token or request counts")]
    ScenarioConflict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_provider() {
        let e = AppError::UnknownProvider {
            input: "gpt-9".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Unknown provider "gpt-9" (run `aitarif providers` for available ids)"#
        );
    }

    #[test]
    fn app_error_display_scenario() {
        let e = AppError::UnknownScenario {
            input: "mining".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Unknown scenario "mining" (run `aitarif scenarios` for available ids)"#
        );
    }

    #[test]
    fn app_error_display_amount() {
        let e = AppError::InvalidAmount { input: -150 };
        assert_eq!(
            e.to_string(),
            "Invalid amount -150: prices are non-negative whole tenge amounts"
        );
    }

    #[test]
    fn app_error_display_scenario_conflict() {
        assert_eq!(
            AppError::ScenarioConflict.to_string(),
            "--scenario cannot be combined with explicit token or request counts"
        );
    }
}
