//! Favorite Protocol
//!
//! Wire types and page rules shared by the board UI.
//! Nothing in here touches the DOM, so the whole crate runs under plain `cargo test`.

mod action;
mod config;
mod error;
mod response;
mod state;
mod toggle;

pub use action::{next_action, params_from_attributes, resolve_action, PARAM_ATTRIBUTE_PREFIX};
pub use config::{PageConfig, FALLBACK_MESSAGE_EN, FALLBACK_MESSAGE_JA};
pub use error::{ConfigError, FavoriteError};
pub use response::{decode_response, FavoriteOutcome, FavoriteResponse, SUCCESS_STATUSES};
pub use state::ToggleState;
pub use toggle::{ClassSwap, TogglePlan};
