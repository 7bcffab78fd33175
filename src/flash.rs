//! Flash Dismissal
//!
//! Fades out server-rendered flash banners a few seconds after the page loads.

use favorite_protocol::PageConfig;
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom;

/// Schedule the fade for every banner present right now
pub fn schedule_dismiss(config: &PageConfig) {
    let alerts = dom::query_all(&config.alert_selector);
    if alerts.is_empty() {
        return;
    }
    log::debug!("[Flash] {} banner(s) scheduled for dismissal", alerts.len());

    let delay_ms = config.dismiss_delay_ms;
    let fade_ms = config.fade_duration_ms;
    spawn_local(async move {
        dismiss(alerts, delay_ms, fade_ms).await;
    });
}

/// Wait, fade to transparent, then take the banners out of layout
pub async fn dismiss(alerts: Vec<Element>, delay_ms: u32, fade_ms: u32) {
    let alerts: Vec<HtmlElement> = alerts
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();

    TimeoutFuture::new(delay_ms).await;
    for el in &alerts {
        start_fade(el, fade_ms);
    }

    TimeoutFuture::new(fade_ms).await;
    for el in &alerts {
        hide(el);
    }
}

fn start_fade(el: &HtmlElement, fade_ms: u32) {
    let style = el.style();
    let result = style
        .set_property("transition", &format!("opacity {}ms", fade_ms))
        .and_then(|_| style.set_property("opacity", "0"));
    if let Err(e) = result {
        log::warn!("[Flash] Could not start fade: {:?}", e);
    }
}

fn hide(el: &HtmlElement) {
    let result = el
        .style()
        .set_property("display", "none")
        .and_then(|_| el.set_attribute("aria-hidden", "true"));
    if let Err(e) = result {
        log::warn!("[Flash] Could not hide banner: {:?}", e);
    }
}
