//! Login and Register Forms
//!
//! Both forms only show the user partition's error once they have been
//! submitted, so a failed token check at start-up stays silent.

use greenstep_core::models::{Credentials, Registration};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, Page};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitted, set_submitted) = signal(false);

    let loading = move || store.user().read().status.loading;
    let error = move || {
        if submitted.get() {
            store.user().read().status.error.clone()
        } else {
            None
        }
    };

    let login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_submitted.set(true);
        let credentials = Credentials {
            email: email.get(),
            password: password.get(),
        };
        let client = ctx.client();
        spawn_local(async move {
            if client.login(&credentials).await.is_ok() {
                ctx.navigate(Page::Dashboard);
            }
        });
    };

    view! {
        <section class="auth-page">
            <h2>"Sign in to your account"</h2>
            <form class="auth-form" on:submit=login>
                <label>
                    "Email address"
                    <input
                        type="email"
                        required
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        disabled=loading
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        required
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        disabled=loading
                    />
                </label>
                {move || error().map(|message| view! { <p class="form-error">{message}</p> })}
                <button type="submit" disabled=loading>
                    {move || if loading() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
            <p class="auth-switch">
                "Don't have an account? "
                <button class="link" on:click=move |_| ctx.navigate(Page::Register)>"Register"</button>
            </p>
        </section>
    }
}

#[component]
pub fn RegisterForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (submitted, set_submitted) = signal(false);
    let (mismatch, set_mismatch) = signal(false);

    let loading = move || store.user().read().status.loading;
    let error = move || {
        if mismatch.get() {
            Some("Passwords do not match".to_string())
        } else if submitted.get() {
            store.user().read().status.error.clone()
        } else {
            None
        }
    };

    let register = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if password.get() != confirm.get() {
            set_mismatch.set(true);
            return;
        }
        set_mismatch.set(false);
        set_submitted.set(true);
        let registration = Registration {
            name: name.get().trim().to_string(),
            email: email.get(),
            password: password.get(),
        };
        let client = ctx.client();
        spawn_local(async move {
            if client.register(&registration).await.is_ok() {
                ctx.navigate(Page::Dashboard);
            }
        });
    };

    view! {
        <section class="auth-page">
            <h2>"Create your account"</h2>
            <form class="auth-form" on:submit=register>
                <label>
                    "Name"
                    <input
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        disabled=loading
                    />
                </label>
                <label>
                    "Email address"
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        disabled=loading
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        disabled=loading
                    />
                </label>
                <label>
                    "Confirm password"
                    <input
                        type="password"
                        required
                        prop:value=move || confirm.get()
                        on:input=move |ev| set_confirm.set(event_target_value(&ev))
                        disabled=loading
                    />
                </label>
                {move || error().map(|message| view! { <p class="form-error">{message}</p> })}
                <button type="submit" disabled=loading>
                    {move || if loading() { "Creating account..." } else { "Register" }}
                </button>
            </form>
            <p class="auth-switch">
                "Already registered? "
                <button class="link" on:click=move |_| ctx.navigate(Page::Login)>"Sign in"</button>
            </p>
        </section>
    }
}
