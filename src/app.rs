//! GreenStep Frontend App
//!
//! Builds the store and the operation client, validates any persisted token
//! once on mount, and switches between pages.

use greenstep_core::{ApiConfig, AppState, Coordinator, HttpApi, TokenStore};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{
    AccessDenied, ActionsPage, Dashboard, GoalsPage, Landing, LoginForm, NavBar, ProfilePage,
    RegisterForm,
};
use crate::context::{AppContext, Page};
use crate::storage::LocalTokenStore;
use crate::store::authenticated_memo;

#[component]
pub fn App() -> impl IntoView {
    let tokens = LocalTokenStore;
    let store = Store::new(AppState::new(tokens.load()));
    provide_context(store);

    let client = Coordinator::new(HttpApi::new(ApiConfig::from_build_env()), tokens, store);
    let ctx = AppContext::new(client, signal(Page::default()));
    provide_context(ctx);

    // Restore the session once on mount
    let client = ctx.client();
    spawn_local(async move {
        if client.check_auth().await.is_ok() && ctx.page.get_untracked() == Page::Landing {
            ctx.navigate(Page::Dashboard);
        }
    });

    let authenticated = authenticated_memo(store);

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                {move || {
                    let page = ctx.page.get();
                    if page.is_protected() && !authenticated.get() {
                        return view! { <AccessDenied /> }.into_any();
                    }
                    match page {
                        Page::Landing => view! { <Landing /> }.into_any(),
                        Page::Login => view! { <LoginForm /> }.into_any(),
                        Page::Register => view! { <RegisterForm /> }.into_any(),
                        Page::Dashboard => view! { <Dashboard /> }.into_any(),
                        Page::Actions => view! { <ActionsPage /> }.into_any(),
                        Page::Goals => view! { <GoalsPage /> }.into_any(),
                        Page::Profile => view! { <ProfilePage /> }.into_any(),
                    }
                }}
            </main>
        </div>
    }
}
