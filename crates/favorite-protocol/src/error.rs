//! Favorite Errors

use thiserror::Error;

/// Everything that can end a favorite toggle without a DOM update
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FavoriteError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server answered with HTTP {0}")]
    HttpStatus(u16),
    #[error("response is not a favorite reply: {0}")]
    Decode(String),
    #[error("response is missing {0}")]
    Malformed(&'static str),
    #[error("server rejected the request: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),
    #[error("invalid action url: {0}")]
    InvalidAction(String),
    #[error("page structure: {0}")]
    Dom(String),
}

/// Page configuration that cannot be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be a single non-empty class name, got {value:?}")]
    InvalidClass { field: &'static str, value: String },
}

impl FavoriteError {
    /// Text shown to the user in the alert dialog.
    ///
    /// Only a rejection carrying a server message overrides the fallback.
    pub fn user_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            FavoriteError::Rejected(Some(message)) if !message.trim().is_empty() => message.as_str(),
            _ => fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_reaches_user() {
        let err = FavoriteError::Rejected(Some("Already removed".to_string()));
        assert_eq!(err.user_message("fallback"), "Already removed");
    }

    #[test]
    fn test_blank_rejection_uses_fallback() {
        let err = FavoriteError::Rejected(Some("   ".to_string()));
        assert_eq!(err.user_message("fallback"), "fallback");
        assert_eq!(FavoriteError::Rejected(None).user_message("fallback"), "fallback");
    }

    #[test]
    fn test_transport_failures_use_fallback() {
        assert_eq!(FavoriteError::HttpStatus(500).user_message("try again"), "try again");
        assert_eq!(FavoriteError::Transport("offline".into()).user_message("try again"), "try again");
        assert_eq!(FavoriteError::Malformed("html").user_message("try again"), "try again");
    }

    #[test]
    fn test_display() {
        assert_eq!(FavoriteError::HttpStatus(500).to_string(), "server answered with HTTP 500");
        assert_eq!(
            FavoriteError::Rejected(None).to_string(),
            "server rejected the request: no message"
        );
    }
}
