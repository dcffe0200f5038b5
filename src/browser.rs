/// Browser side effects used by the popup handlers

use std::fmt;
use std::rc::Rc;

use web_sys::Window;

use crate::config::TAB_TARGET;
use crate::error::PopupError;

/// The two effects a popup handler can produce
pub trait Browser {
    /// Show a blocking modal notification
    fn alert(&self, message: &str) -> Result<(), PopupError>;

    /// Open `url` in a new tab
    fn open_tab(&self, url: &str) -> Result<(), PopupError>;
}

/// `Browser` backed by the page's global window
#[derive(Debug, Clone)]
pub struct WindowBrowser {
    window: Window,
}

impl WindowBrowser {
    pub fn new(window: Window) -> Self {
        WindowBrowser { window }
    }

    pub fn from_global() -> Result<Self, PopupError> {
        let window = web_sys::window().ok_or(PopupError::NoWindow)?;
        Ok(Self::new(window))
    }
}

impl Browser for WindowBrowser {
    fn alert(&self, message: &str) -> Result<(), PopupError> {
        self.window
            .alert_with_message(message)
            .map_err(PopupError::from_js)
    }

    fn open_tab(&self, url: &str) -> Result<(), PopupError> {
        match self.window.open_with_url_and_target(url, TAB_TARGET) {
            Ok(Some(_)) => Ok(()),
            // window.open hands back null when a pop-up blocker steps in
            Ok(None) => Err(PopupError::PopupBlocked(url.to_string())),
            Err(e) => Err(PopupError::from_js(e)),
        }
    }
}

/// Shared `Browser` handed to UI components as a prop.
///
/// Two handles are equal when they point at the same browser.
#[derive(Clone)]
pub struct BrowserHandle(pub Rc<dyn Browser>);

impl BrowserHandle {
    pub fn new<B: Browser + 'static>(browser: B) -> Self {
        BrowserHandle(Rc::new(browser))
    }
}

impl PartialEq for BrowserHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for BrowserHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BrowserHandle")
    }
}
