//! Favorite Rendering
//!
//! Applies a decoded reply to the page. Each successful reply makes exactly
//! one visible change; rejections leave the page alone.

use favorite_protocol::{next_action, FavoriteError, FavoriteOutcome, PageConfig};
use web_sys::Element;

use super::trigger::Trigger;
use crate::dom;

pub fn apply_outcome(
    trigger: &Trigger,
    outcome: FavoriteOutcome,
    config: &PageConfig,
) -> Result<(), FavoriteError> {
    match outcome {
        FavoriteOutcome::Toggled { is_favorite, action } => {
            apply_toggle(trigger, is_favorite, action.as_deref(), config)
        }
        FavoriteOutcome::Replaced { html } => {
            replace_cell(trigger, &html, config);
            Ok(())
        }
        FavoriteOutcome::Rejected { message } => Err(FavoriteError::Rejected(message)),
    }
}

/// The trigger itself when it is a button, else the first button inside it
fn find_button(trigger: &Trigger) -> Option<Element> {
    let el = trigger.element();
    if el.tag_name().eq_ignore_ascii_case("button") {
        return Some(el.clone());
    }
    el.query_selector("button").ok().flatten()
}

fn apply_toggle(
    trigger: &Trigger,
    is_favorite: bool,
    response_action: Option<&str>,
    config: &PageConfig,
) -> Result<(), FavoriteError> {
    let button = find_button(trigger)
        .ok_or_else(|| FavoriteError::Dom("favorite trigger has no button".to_string()))?;
    let plan = config.toggle_plan(is_favorite);

    dom::swap_class(&button, plan.button.add, plan.button.remove)
        .map_err(|e| FavoriteError::Dom(format!("button class: {:?}", e)))?;

    match button.query_selector("i").ok().flatten() {
        Some(icon) => dom::swap_class(&icon, plan.icon.add, plan.icon.remove)
            .map_err(|e| FavoriteError::Dom(format!("icon class: {:?}", e)))?,
        None => log::debug!("[Favorite] Button has no icon"),
    }

    let add_url = trigger.add_url();
    let remove_url = trigger.remove_url();
    match next_action(is_favorite, response_action, add_url.as_deref(), remove_url.as_deref()) {
        Some(url) => trigger.set_action(url)?,
        None => log::warn!(
            "[Favorite] No {} url available, action left unchanged",
            if is_favorite { "remove" } else { "add" }
        ),
    }

    log::debug!("[Favorite] Button now favorite={}", is_favorite);
    Ok(())
}

fn replace_cell(trigger: &Trigger, html: &str, config: &PageConfig) {
    let el = trigger.element();
    match el.closest(&config.cell_selector).ok().flatten() {
        Some(cell) => cell.set_inner_html(html),
        None => {
            log::warn!("[Favorite] No enclosing {}, replacing trigger content", config.cell_selector);
            el.set_inner_html(html);
        }
    }
}
