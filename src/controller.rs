/// Popup controller: what each control does when clicked

use crate::browser::Browser;
use crate::config::PopupConfig;
use crate::error::PopupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Open,
    Talk,
}

impl Control {
    pub const ALL: [Control; 2] = [Control::Open, Control::Talk];

    pub fn element_id(self, config: &PopupConfig) -> &str {
        match self {
            Control::Open => &config.open_id,
            Control::Talk => &config.talk_id,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Control::Open => "open",
            Control::Talk => "talk",
        }
    }
}

/// Open the backend in a new tab
pub fn on_open<B: Browser + ?Sized>(browser: &B, config: &PopupConfig) -> Result<(), PopupError> {
    browser.open_tab(&config.backend_url)
}

/// Show the listening notice, then open the backend in a new tab.
///
/// Nothing is sent to the backend; the notice is a placeholder. If the alert
/// fails the tab is not opened.
pub fn on_talk<B: Browser + ?Sized>(browser: &B, config: &PopupConfig) -> Result<(), PopupError> {
    browser.alert(&config.notice)?;
    browser.open_tab(&config.backend_url)
}

/// Dispatch a click on `control` to its handler
pub fn handle_click<B: Browser + ?Sized>(
    browser: &B,
    config: &PopupConfig,
    control: Control,
) -> Result<(), PopupError> {
    log::debug!("{} control clicked", control.name());
    match control {
        Control::Open => on_open(browser, config),
        Control::Talk => on_talk(browser, config),
    }
}

/// Run a click and report any failure on the console
pub fn click_and_log<B: Browser + ?Sized>(browser: &B, config: &PopupConfig, control: Control) {
    if let Err(e) = handle_click(browser, config, control) {
        log::error!("{} handler failed: {}", control.name(), e);
    }
}
