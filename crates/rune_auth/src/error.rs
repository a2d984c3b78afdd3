use miette::Diagnostic;
use thiserror::Error;

use crate::UserId;

#[derive(Error, Diagnostic, Debug)]
pub enum AuthError {
    #[error("Command restricted to bot developers")]
    #[diagnostic(
        code(rune::auth::not_bot_developer),
        help("User {user_id} is not on the bot developer allowlist")
    )]
    NotBotDeveloper { user_id: UserId },

    #[error("Premium required: {feature}")]
    #[diagnostic(
        code(rune::auth::premium_required),
        help("This feature is only available to premium users")
    )]
    PremiumRequired { feature: String, user_id: UserId },

    #[error("Maximum number of saved logins ({limit}) has been reached")]
    #[diagnostic(
        code(rune::auth::saved_login_limit),
        help("Remove a saved login before adding another one")
    )]
    SavedLoginLimitReached { limit: usize },

    #[error("The current instance of the bot does not allow saving logins")]
    #[diagnostic(
        code(rune::auth::saving_logins_disabled),
        help("Set `allow_users_to_save_logins = true` in the bot configuration to enable it")
    )]
    SavingLoginsDisabled,

    #[error("Configuration error in {config_path}")]
    #[diagnostic(
        code(rune::auth::configuration),
        help("Expected {expected} for field '{field}'")
    )]
    Configuration {
        config_path: String,
        field: String,
        expected: String,
        #[source]
        cause: ConfigError,
    },

    #[error("Invalid user id '{input}'")]
    #[diagnostic(
        code(rune::auth::invalid_user_id),
        help("Discord user ids are unsigned 64-bit decimal numbers")
    )]
    InvalidUserId {
        input: String,
        #[source]
        cause: std::num::ParseIntError,
    },
}

/// Underlying cause of a configuration failure
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, AuthError>;

impl AuthError {
    pub fn premium_required(feature: impl Into<String>, user_id: UserId) -> Self {
        Self::PremiumRequired {
            feature: feature.into(),
            user_id,
        }
    }

    /// Text suitable for replying to the invoker, without diagnostic decoration
    pub fn user_message(&self) -> String {
        match self {
            Self::PremiumRequired { feature, .. } => {
                format!("{feature}\nThis requires premium.")
            }
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Report;

    #[test]
    fn test_premium_required_message() {
        let error = AuthError::premium_required("View more account info", UserId::new(42));

        assert_eq!(error.to_string(), "Premium required: View more account info");
        assert_eq!(
            error.user_message(),
            "View more account info\nThis requires premium."
        );
    }

    #[test]
    fn test_limit_message_contains_limit() {
        let error = AuthError::SavedLoginLimitReached { limit: 10 };
        assert!(error.user_message().contains("(10)"));
    }

    #[test]
    fn test_diagnostic_codes() {
        let error = AuthError::NotBotDeveloper {
            user_id: UserId::new(1),
        };
        let output = format!("{:?}", Report::new(error));
        assert!(output.contains("not_bot_developer"));

        let cause = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let error = AuthError::Configuration {
            config_path: "rune.toml".to_string(),
            field: "content".to_string(),
            expected: "valid TOML configuration".to_string(),
            cause: cause.into(),
        };
        let output = format!("{:?}", Report::new(error));
        assert!(output.contains("configuration"));
    }

    #[test]
    fn test_parse_error_reported_once() {
        use std::error::Error as _;

        let cause = toml::from_str::<toml::Value>("[saved_logins").unwrap_err();
        let detail = cause.to_string();
        let error = AuthError::Configuration {
            config_path: "rune.toml".to_string(),
            field: "content".to_string(),
            expected: "valid TOML configuration".to_string(),
            cause: cause.into(),
        };

        let config_error = error.source().unwrap();
        assert_eq!(config_error.to_string(), "TOML parse error");
        assert_eq!(config_error.source().unwrap().to_string(), detail);
        assert!(!error.to_string().contains(&detail));
    }
}
