use contracts::system::shell::{is_mobile_width, Page, ShellAction, ShellState, MOBILE_BREAKPOINT_PX};
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::window;

/// App-wide shell state shared through context
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub shell: RwSignal<ShellState>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            shell: RwSignal::new(ShellState::new(viewport_width(), &current_path())),
        }
    }

    pub fn dispatch(&self, action: ShellAction) {
        log::debug!("shell action: {:?}", action);
        self.shell
            .update(|state| *state = std::mem::take(state).reduce(action));
    }

    pub fn current_page(&self) -> Page {
        self.shell.with(|state| state.current_page)
    }

    pub fn navigate(&self, page: Page) {
        self.dispatch(ShellAction::Navigate(page));
    }

    /// Keep the shell in sync with the browser: viewport width, back/forward
    /// navigation and the address bar
    pub fn init_browser_integration(&self) {
        let this = *self;

        // handles are never removed: the shell lives as long as the page
        let _ = window_event_listener(ev::resize, move |_| {
            let is_mobile = is_mobile_width(viewport_width());
            if this.shell.with_untracked(|s| s.is_mobile) != is_mobile {
                this.dispatch(ShellAction::SetMobile(is_mobile));
            }
        });
        let _ = window_event_listener(ev::popstate, move |_| {
            this.navigate(Page::from_path(&current_path()));
        });

        Effect::new(move |previous: Option<()>| {
            let path = this.current_page().path();
            if current_path() == path {
                return;
            }
            let Some(history) = window().and_then(|w| w.history().ok()) else {
                return;
            };
            // unknown start paths are replaced rather than stacked
            let result = if previous.is_none() {
                history.replace_state_with_url(&JsValue::NULL, "", Some(path))
            } else {
                history.push_state_with_url(&JsValue::NULL, "", Some(path))
            };
            if let Err(e) = result {
                log::warn!("Failed to update the address bar: {:?}", e);
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(MOBILE_BREAKPOINT_PX + 1.0)
}

fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
