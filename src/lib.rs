//! Board UI
//!
//! Page scripting for the board app, loaded as a wasm module by the
//! server-rendered templates:
//! - flash banners fade out after a delay
//! - favorite forms toggle over a background POST

pub mod app;
pub mod config;
pub mod dom;
pub mod favorite;
pub mod flash;
pub mod notify;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    // The backend passes everything; the facade level is set from config in boot
    wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
    log::set_max_level(log::LevelFilter::Info);
    app::boot();
    Ok(())
}
