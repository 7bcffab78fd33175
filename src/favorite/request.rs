//! Favorite Request
//!
//! One urlencoded POST per toggle. On wasm32 reqwest rides on `fetch`, so the
//! session cookie goes along for same-origin actions.

use favorite_protocol::{decode_response, FavoriteError, FavoriteOutcome};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

/// Marks the request as XHR for servers that branch on it
const REQUESTED_WITH: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");

pub async fn post_favorite(
    url: Url,
    fields: &[(String, String)],
) -> Result<FavoriteOutcome, FavoriteError> {
    log::debug!("[Favorite] POST {} ({} field(s))", url, fields.len());

    let response = reqwest::Client::new()
        .post(url)
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded; charset=UTF-8")
        .header(REQUESTED_WITH.0, REQUESTED_WITH.1)
        .body(encode_fields(fields))
        .send()
        .await
        .map_err(|e| FavoriteError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FavoriteError::HttpStatus(status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FavoriteError::Transport(e.to_string()))?;
    decode_response(&body)
}

fn encode_fields(fields: &[(String, String)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish()
}
