//! Favorite Toggle
//!
//! Delegated submit/click handling for favorite forms, the POST to the
//! form's action, and the page update driven by the reply.

mod handler;
mod render;
mod request;
mod trigger;

pub use handler::{bind_favorite_handlers, settle};
pub use render::apply_outcome;
pub use trigger::Trigger;
