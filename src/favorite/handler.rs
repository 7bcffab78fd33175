//! Favorite Handler
//!
//! One document-level listener per event type, filtering on the favorite
//! marker so triggers rendered later are covered too.
//!
//! Overlapping clicks on one trigger send overlapping requests; whichever
//! reply lands last decides the final state.

use std::rc::Rc;

use favorite_protocol::{FavoriteError, FavoriteOutcome, PageConfig, ToggleState};
use leptos::task::spawn_local;

use super::render::apply_outcome;
use super::request::post_favorite;
use super::trigger::Trigger;
use crate::{dom, notify};

pub fn bind_favorite_handlers(config: Rc<PageConfig>) {
    let submit_config = config.clone();
    dom::bind_document_listener("submit", move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let Some(trigger) = Trigger::from_submit(&target, &submit_config.favorite_selector) else {
            return;
        };
        ev.prevent_default();
        dispatch(trigger, submit_config.clone());
    });

    dom::bind_document_listener("click", move |ev: web_sys::Event| {
        let Some(target) = ev.target() else { return };
        let Some(trigger) = Trigger::from_click(&target, &config.favorite_selector) else {
            return;
        };
        ev.prevent_default();
        dispatch(trigger, config.clone());
    });

    log::debug!("[Favorite] Handlers bound");
}

/// Send the toggle and settle the trigger once the reply is in
fn dispatch(trigger: Trigger, config: Rc<PageConfig>) {
    log_state(&trigger, ToggleState::AwaitingResponse);
    spawn_local(async move {
        let result = submit(&trigger).await.and_then(|outcome| {
            apply_outcome(&trigger, outcome, &config)
        });
        settle(&trigger, result, &config);
    });
}

async fn submit(trigger: &Trigger) -> Result<FavoriteOutcome, FavoriteError> {
    let url = trigger.action_url()?;
    let fields = trigger.fields()?;
    post_favorite(url, &fields).await
}

/// Finish a request. Failures leave the page as it was and get a single alert.
pub fn settle(trigger: &Trigger, result: Result<(), FavoriteError>, config: &PageConfig) {
    log_state(trigger, ToggleState::settled(&result));
    if let Err(err) = result {
        log::warn!("[Favorite] Toggle failed: {}", err);
        let lang = dom::page_lang();
        notify::alert(err.user_message(config.fallback_message(lang.as_deref())));
    }
}

fn log_state(trigger: &Trigger, state: ToggleState) {
    log::debug!(
        "[Favorite] <{}> {}",
        trigger.element().tag_name().to_ascii_lowercase(),
        state
    );
}
