use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Shell state (sidebar, session, current page) for the whole app
    let ctx = AppGlobalContext::new();
    ctx.init_browser_integration();
    provide_context(ctx);

    view! {
        <Shell />
    }
}
