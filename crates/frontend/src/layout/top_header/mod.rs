//! Top bar: menu toggle, page title, session user and logout

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::system::shell::ShellAction;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let user_name = move || {
        ctx.shell
            .with(|s| s.user.as_ref().map(|u| u.name.clone()))
            .unwrap_or_default()
    };
    let user_initials = move || {
        ctx.shell
            .with(|s| s.user.as_ref().map(|u| u.initials.clone()))
            .unwrap_or_default()
    };

    view! {
        <div class="top-bar">
            <div class="top-bar-left">
                <button
                    class="top-bar-menu-btn"
                    title="Toggle menu"
                    on:click=move |_| ctx.dispatch(ShellAction::ToggleSidebar)
                >
                    {icon("menu")}
                </button>
                <h1 class="page-title">{move || ctx.current_page().label()}</h1>
            </div>
            <div class="user-profile">
                <div class="user-info">
                    <div class="avatar">{user_initials}</div>
                    <span>{user_name}</span>
                </div>
                <button class="logout-btn" on:click=move |_| ctx.dispatch(ShellAction::Logout)>
                    {icon("log-out")}
                    <span>"Logout"</span>
                </button>
            </div>
        </div>
    }
}
