//! Sidebar navigation between the finance pages

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::system::shell::{Page, ShellAction};
use leptos::prelude::*;

fn page_icon(page: Page) -> &'static str {
    match page {
        Page::LeadsPayments => "file-text",
        Page::CommissionPeriods => "calendar",
        Page::CommissionRanges => "dollar-sign",
        Page::MarketerCommissions => "users",
        Page::Refunds => "rotate-ccw",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="sidebar-header">
            <h2>"Finance Portal"</h2>
            <button
                class="sidebar-close-btn"
                title="Close menu"
                on:click=move |_| ctx.dispatch(ShellAction::CloseSidebar)
            >
                {icon("x")}
            </button>
        </div>
        <ul class="sidebar-menu">
            {Page::nav_items().iter().map(|item| {
                let page = item.page;
                let is_active = move || ctx.current_page() == page;
                view! {
                    <li>
                        <a
                            href=item.path
                            class:active=is_active
                            on:click=move |ev| {
                                ev.prevent_default();
                                ctx.navigate(page);
                            }
                        >
                            {icon(page_icon(page))}
                            <span>{item.label}</span>
                            <Show when=is_active>
                                <span class="indicator">{icon("chevron-right")}</span>
                            </Show>
                        </a>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
}
