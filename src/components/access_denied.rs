//! Access Denied Prompt

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

/// Shown in place of a protected page when nobody is signed in
#[component]
pub fn AccessDenied() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="access-denied">
            <h2>"Please sign in"</h2>
            <p>"You need an account to view this page."</p>
            <div class="access-denied-actions">
                <button on:click=move |_| ctx.navigate(Page::Login)>"Login"</button>
                <button class="secondary" on:click=move |_| ctx.navigate(Page::Register)>"Register"</button>
            </div>
        </section>
    }
}
