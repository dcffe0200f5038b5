/// Attach the popup controls to markup the hosting page already has

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, MouseEvent};

use crate::browser::Browser;
use crate::config::PopupConfig;
use crate::controller::{Control, click_and_log};
use crate::error::PopupError;

/// Outcome of binding every control
#[derive(Debug, Default)]
pub struct BindReport {
    pub bound: Vec<Control>,
    pub failed: Vec<(Control, PopupError)>,
}

impl BindReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Bind a click listener for `control` to its element.
///
/// The listener is leaked into the page, it lives as long as the popup does.
pub fn bind_control(
    document: &Document,
    control: Control,
    config: Rc<PopupConfig>,
    browser: Rc<dyn Browser>,
) -> Result<(), PopupError> {
    let id = control.element_id(&config);
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| PopupError::ElementNotFound(id.to_string()))?;

    let listener = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
        click_and_log(browser.as_ref(), &config, control);
    });

    element
        .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
        .map_err(PopupError::from_js)?;
    listener.forget();

    Ok(())
}

/// Bind both controls. A missing element only costs its own binding.
pub fn bind_controls(
    document: &Document,
    config: Rc<PopupConfig>,
    browser: Rc<dyn Browser>,
) -> BindReport {
    let mut report = BindReport::default();

    for control in Control::ALL {
        match bind_control(document, control, config.clone(), browser.clone()) {
            Ok(()) => {
                log::debug!("bound {} control to #{}", control.name(), control.element_id(&config));
                report.bound.push(control);
            }
            Err(e) => {
                log::warn!("could not bind {} control: {}", control.name(), e);
                report.failed.push((control, e));
            }
        }
    }

    report
}
