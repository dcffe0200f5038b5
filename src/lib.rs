/// Ruby Popup - Chrome Extension popup for the local Ruby assistant
/// Built with Rust + WASM + Yew

pub mod binding;
pub mod browser;
pub mod config;
pub mod controller;
pub mod error;
pub mod ui;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::binding::bind_controls;
use crate::browser::{Browser, WindowBrowser};
use crate::config::PopupConfig;
use crate::error::PopupError;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Bind the handlers to the popup's own markup (#open-ruby, #talk-ruby)
#[wasm_bindgen]
pub fn bind_popup() -> Result<(), JsValue> {
    bind_with(PopupConfig::default())?;
    Ok(())
}

#[wasm_bindgen]
pub fn bind_popup_with_config(config: JsValue) -> Result<(), JsValue> {
    bind_with(parse_config(config)?)?;
    Ok(())
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

#[wasm_bindgen]
pub fn start_popup_with_config(config: JsValue) -> Result<(), JsValue> {
    let props = ui::popup::AppProps {
        config: Rc::new(parse_config(config)?),
        browser: None,
    };
    yew::Renderer::<ui::popup::App>::with_props(props).render();
    Ok(())
}

/// Read a popup config handed over from JS.
///
/// `null` and `undefined` mean the defaults. Keys are camelCase and any of them
/// may be left out.
pub fn parse_config(config: JsValue) -> Result<PopupConfig, PopupError> {
    let config: PopupConfig = if config.is_null() || config.is_undefined() {
        PopupConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| PopupError::InvalidConfig(format!("{:?}", e)))?
    };
    config.validate()?;
    Ok(config)
}

fn bind_with(config: PopupConfig) -> Result<(), PopupError> {
    let browser = WindowBrowser::from_global()?;
    let document = web_sys::window()
        .ok_or(PopupError::NoWindow)?
        .document()
        .ok_or(PopupError::NoDocument)?;

    let browser: Rc<dyn Browser> = Rc::new(browser);
    let report = bind_controls(&document, Rc::new(config), browser);
    log::info!(
        "popup bound {} of {} controls",
        report.bound.len(),
        report.bound.len() + report.failed.len()
    );
    Ok(())
}
