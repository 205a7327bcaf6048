use super::sidebar::Sidebar;
use crate::layout::global_context::AppGlobalContext;
use contracts::system::shell::ShellAction;
use leptos::prelude::*;

/// Sliding sidebar with a click-to-close overlay while open
#[component]
pub fn Left() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");
    let is_open = move || ctx.shell.with(|s| s.sidebar_open);

    view! {
        <div data-zone="left" class="sidebar" class:open=is_open>
            <Sidebar />
        </div>
        <Show when=is_open>
            <div class="overlay" on:click=move |_| ctx.dispatch(ShellAction::CloseSidebar)></div>
        </Show>
    }
}
