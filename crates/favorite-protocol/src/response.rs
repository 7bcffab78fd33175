//! Favorite Response Decoding
//!
//! The server answers a toggle in one of two shapes:
//! - `{"status": "ok", "is_favorite": bool, "action"?: url}`
//! - `{"status": "success", "html": markup}`
//!
//! Anything with another status is a rejection and may carry a `message`.

use serde::Deserialize;

use crate::error::FavoriteError;

/// Status values that mean the toggle went through
pub const SUCCESS_STATUSES: &[&str] = &["ok", "success"];

/// Reply body as sent by the server
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FavoriteResponse {
    pub status: String,
    #[serde(default)]
    pub is_favorite: Option<bool>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Next action url, emitted by servers that no longer rely on data attributes
    #[serde(default)]
    pub action: Option<String>,
}

/// Decoded reply, one variant per page update strategy
#[derive(Debug, Clone, PartialEq)]
pub enum FavoriteOutcome {
    /// Flip button style and icon, then point the trigger at the other endpoint
    Toggled {
        is_favorite: bool,
        action: Option<String>,
    },
    /// Swap the enclosing cell's markup for a server-rendered fragment
    Replaced { html: String },
    /// Non-success status
    Rejected { message: Option<String> },
}

impl FavoriteResponse {
    pub fn is_success(&self) -> bool {
        SUCCESS_STATUSES.contains(&self.status.as_str())
    }

    /// Pick the update strategy from status and shape.
    ///
    /// `is_favorite` wins over `html` when a server sends both.
    pub fn into_outcome(self) -> Result<FavoriteOutcome, FavoriteError> {
        if !self.is_success() {
            return Ok(FavoriteOutcome::Rejected { message: self.message });
        }

        if let Some(is_favorite) = self.is_favorite {
            let action = self.action.filter(|a| !a.trim().is_empty());
            return Ok(FavoriteOutcome::Toggled { is_favorite, action });
        }

        match self.html {
            Some(html) => Ok(FavoriteOutcome::Replaced { html }),
            None => Err(FavoriteError::Malformed("is_favorite or html")),
        }
    }
}

/// Decode a raw response body
pub fn decode_response(body: &str) -> Result<FavoriteOutcome, FavoriteError> {
    let response: FavoriteResponse =
        serde_json::from_str(body).map_err(|e| FavoriteError::Decode(e.to_string()))?;
    response.into_outcome()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_with_flag_is_toggle() {
        let outcome = decode_response(r#"{"status":"ok","is_favorite":true}"#).unwrap();
        assert_eq!(outcome, FavoriteOutcome::Toggled { is_favorite: true, action: None });

        let outcome = decode_response(r#"{"status":"ok","is_favorite":false}"#).unwrap();
        assert_eq!(outcome, FavoriteOutcome::Toggled { is_favorite: false, action: None });
    }

    #[test]
    fn test_toggle_keeps_server_action() {
        let outcome =
            decode_response(r#"{"status":"ok","is_favorite":true,"action":"/favorites/remove/"}"#)
                .unwrap();
        assert_eq!(
            outcome,
            FavoriteOutcome::Toggled {
                is_favorite: true,
                action: Some("/favorites/remove/".to_string())
            }
        );
    }

    #[test]
    fn test_blank_action_is_ignored() {
        let outcome =
            decode_response(r#"{"status":"ok","is_favorite":false,"action":""}"#).unwrap();
        assert_eq!(outcome, FavoriteOutcome::Toggled { is_favorite: false, action: None });
    }

    #[test]
    fn test_success_with_html_is_replace() {
        let outcome = decode_response(r#"{"status":"success","html":"<b>X</b>"}"#).unwrap();
        assert_eq!(outcome, FavoriteOutcome::Replaced { html: "<b>X</b>".to_string() });
    }

    #[test]
    fn test_flag_wins_over_html() {
        let outcome =
            decode_response(r#"{"status":"success","is_favorite":true,"html":"<b>X</b>"}"#).unwrap();
        assert!(matches!(outcome, FavoriteOutcome::Toggled { is_favorite: true, .. }));
    }

    #[test]
    fn test_other_status_is_rejection() {
        let outcome = decode_response(r#"{"status":"error","message":"Login required"}"#).unwrap();
        assert_eq!(
            outcome,
            FavoriteOutcome::Rejected { message: Some("Login required".to_string()) }
        );

        let outcome = decode_response(r#"{"status":"error"}"#).unwrap();
        assert_eq!(outcome, FavoriteOutcome::Rejected { message: None });
    }

    #[test]
    fn test_status_is_case_sensitive() {
        let outcome = decode_response(r#"{"status":"OK","is_favorite":true}"#).unwrap();
        assert!(matches!(outcome, FavoriteOutcome::Rejected { .. }));
    }

    #[test]
    fn test_success_without_payload_is_malformed() {
        let err = decode_response(r#"{"status":"ok"}"#).unwrap_err();
        assert_eq!(err, FavoriteError::Malformed("is_favorite or html"));
    }

    #[test]
    fn test_garbage_body_is_decode_error() {
        assert!(matches!(
            decode_response("<html>Server Error</html>"),
            Err(FavoriteError::Decode(_))
        ));
        assert!(matches!(
            decode_response(r#"{"is_favorite":true}"#),
            Err(FavoriteError::Decode(_))
        ));
    }
}
