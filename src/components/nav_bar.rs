//! Navigation Bar Component
//!
//! Page switcher. Signed-in users get the app pages and a logout button,
//! everyone else gets login and register.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};
use crate::store::{authenticated_memo, use_app_store, AppStateStoreFields};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let authenticated = authenticated_memo(store);

    let link = move |page: Page| {
        view! {
            <button
                class=move || if ctx.page.get() == page { "nav-link active" } else { "nav-link" }
                on:click=move |_| ctx.navigate(page)
            >
                {page.title()}
            </button>
        }
    };

    let logout = move |_: web_sys::MouseEvent| {
        ctx.client().logout();
        ctx.navigate(Page::Landing);
    };

    view! {
        <nav class="nav-bar">
            <button class="brand" on:click=move |_| ctx.navigate(Page::Landing)>"🌿 GreenStep"</button>
            <div class="nav-links">
                {move || if authenticated.get() {
                    view! {
                        {link(Page::Dashboard)}
                        {link(Page::Actions)}
                        {link(Page::Goals)}
                        {link(Page::Profile)}
                        <span class="nav-points">
                            {move || format!("{} pts", store.user().read().points)}
                        </span>
                        <button class="nav-link logout" on:click=logout>"Logout"</button>
                    }.into_any()
                } else {
                    view! {
                        {link(Page::Login)}
                        {link(Page::Register)}
                    }.into_any()
                }}
            </div>
        </nav>
    }
}
