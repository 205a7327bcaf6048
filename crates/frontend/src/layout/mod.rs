pub mod center;
pub mod global_context;
pub mod left;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +----------+-------------------------------+
/// |          |          TopHeader            |
/// | Sidebar  +-------------------------------+
/// | (Left)   |     Content (Center)          |
/// +----------+-------------------------------+
/// ```
///
/// On mobile the sidebar overlays the content instead of shifting it.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let is_authenticated = move || ctx.shell.with(|s| s.is_authenticated());
    let content_shifted = move || ctx.shell.with(|s| s.sidebar_open && !s.is_mobile);

    view! {
        <Show when=is_authenticated fallback=|| view! { <SignedOut /> }>
            <div class="dashboard-container">
                <left::Left />
                <div class="main-content" class:main-content--shifted=content_shifted>
                    <TopHeader />
                    <center::Center />
                </div>
            </div>
        </Show>
    }
}

#[component]
fn SignedOut() -> impl IntoView {
    view! {
        <div class="signed-out">
            <h2>"Finance Portal"</h2>
            <p>"You have been signed out."</p>
        </div>
    }
}
