//! Board UI Boot
//!
//! Wires the page behaviors once the document is ready.

use std::rc::Rc;

use favorite_protocol::PageConfig;
use log::LevelFilter;

use crate::{config, dom, favorite, flash};

pub fn boot() {
    dom::on_page_ready(|| {
        let config = Rc::new(config::load_page_config());
        log::set_max_level(effective_level(&config));
        log::info!("[App] Board UI ready");

        flash::schedule_dismiss(&config);
        favorite::bind_favorite_handlers(config);
    });
}

/// Debug builds never log less than debug
fn effective_level(config: &PageConfig) -> LevelFilter {
    if cfg!(debug_assertions) {
        config.log_level.max(LevelFilter::Debug)
    } else {
        config.log_level
    }
}
