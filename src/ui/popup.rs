/// Popup UI rendered by Yew, for pages without their own markup

use std::rc::Rc;

use yew::prelude::*;

use crate::browser::{BrowserHandle, WindowBrowser};
use crate::config::PopupConfig;
use crate::controller::{Control, click_and_log};

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: Rc<PopupConfig>,
    /// Effects target; the page's window when unset
    #[prop_or_default]
    pub browser: Option<BrowserHandle>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let on_click = |control: Control| {
        let config = props.config.clone();
        let browser = props.browser.clone();
        Callback::from(move |_: MouseEvent| match &browser {
            Some(handle) => click_and_log(handle.0.as_ref(), &config, control),
            None => match WindowBrowser::from_global() {
                Ok(window) => click_and_log(&window, &config, control),
                Err(e) => log::error!("{} handler failed: {}", control.name(), e),
            },
        })
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Ruby"}</h1>

            <div class="flex-column-gap">
                <button
                    id={props.config.open_id.clone()}
                    class="popup-button"
                    onclick={on_click(Control::Open)}
                >
                    {"Open Ruby"}
                </button>
                <button
                    id={props.config.talk_id.clone()}
                    class="popup-button"
                    onclick={on_click(Control::Talk)}
                >
                    {"Talk to Ruby"}
                </button>
            </div>
        </div>
    }
}
