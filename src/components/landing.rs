//! Landing Page

use greenstep_core::models::ActionCategory;
use leptos::prelude::*;

use crate::context::{use_app_context, Page};
use crate::store::{authenticated_memo, use_app_store};

#[component]
pub fn Landing() -> impl IntoView {
    let ctx = use_app_context();
    let authenticated = authenticated_memo(use_app_store());

    view! {
        <section class="landing">
            <h1>"Small steps, greener planet"</h1>
            <p class="landing-lead">
                "Log your everyday sustainable actions, set goals and watch your impact grow."
            </p>
            <Show
                when=move || authenticated.get()
                fallback=move || view! {
                    <div class="landing-actions">
                        <button on:click=move |_| ctx.navigate(Page::Register)>"Get started"</button>
                        <button class="secondary" on:click=move |_| ctx.navigate(Page::Login)>"Sign in"</button>
                    </div>
                }
            >
                <button on:click=move |_| ctx.navigate(Page::Dashboard)>"Go to dashboard"</button>
            </Show>
            <ul class="landing-categories">
                {ActionCategory::ALL.iter().map(|category| view! {
                    <li>
                        <span class="category-icon">{category.icon()}</span>
                        {category.label()}
                    </li>
                }).collect_view()}
            </ul>
        </section>
    }
}
