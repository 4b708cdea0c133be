//! Profile Page
//!
//! Level and totals, achievement progress, account details and logout.

use greenstep_core::insights::LevelSummary;
use greenstep_core::models::ProfileUpdate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::StatusLine;
use crate::context::{use_app_context, Page};
use crate::store::{store_achievements, use_app_store, AppStateStoreFields};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let client = ctx.client();
    spawn_local(async move {
        let _ = futures::join!(client.fetch_profile(), client.fetch_actions(), client.fetch_goals());
    });

    let level = move || LevelSummary::for_user(&store.user().read());
    let action_count = move || store.actions().read().actions.len();
    let goal_counts = move || {
        let goals = store.goals().read();
        let completed = goals.goals.iter().filter(|goal| goal.completed).count();
        (goals.goals.len(), completed)
    };

    let logout = move |_: web_sys::MouseEvent| {
        ctx.client().logout();
        ctx.navigate(Page::Landing);
    };

    view! {
        <section class="profile-page">
            <header class="card profile-header">
                <div class="avatar">"👤"</div>
                <div class="profile-summary">
                    <h1>{move || store.user().read().name.clone().unwrap_or_default()}</h1>
                    <p class="level-line">
                        {move || {
                            let level = level();
                            format!("Level {} ({} points)", level.level, level.points)
                        }}
                    </p>
                    <p class="profile-email">{move || store.user().read().email.clone().unwrap_or_default()}</p>
                </div>
                <button class="danger" on:click=logout>"Logout"</button>
            </header>

            <StatusLine status={Signal::derive(move || store.user().read().status.clone())} />

            <div class="card quick-stats">
                <div>
                    <strong>{action_count}</strong>
                    <span>"Total Actions Logged"</span>
                </div>
                <div>
                    <strong>{move || goal_counts().0}</strong>
                    <span>"Total Goals Set"</span>
                </div>
                <div>
                    <strong>{move || goal_counts().1}</strong>
                    <span>"Goals Completed"</span>
                </div>
            </div>

            <div class="card achievements">
                <h2>"Achievements"</h2>
                <ul>
                    <For
                        each=move || store_achievements(&store)
                        key=|progress| (progress.achievement.title(), progress.current)
                        let:progress
                    >
                        <li class={if progress.unlocked() { "achievement unlocked" } else { "achievement" }}>
                            <span class="achievement-icon">{progress.achievement.icon()}</span>
                            <div class="achievement-body">
                                <strong>{progress.achievement.title()}</strong>
                                <span>{progress.achievement.description()}</span>
                                <progress max="100" value={progress.percent().to_string()}></progress>
                                <span class="achievement-count">
                                    {format!("{} / {}", progress.current, progress.achievement.target())}
                                </span>
                            </div>
                        </li>
                    </For>
                </ul>
            </div>

            <ProfileEditor />
        </section>
    }
}

/// Name/email/password form backed by `update_profile`
#[component]
fn ProfileEditor() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (name, set_name) = signal(store.user().read_untracked().name.clone().unwrap_or_default());
    let (email, set_email) = signal(store.user().read_untracked().email.clone().unwrap_or_default());
    let (password, set_password) = signal(String::new());
    let (saved, set_saved) = signal(false);

    // Fill the fields once the profile arrives
    let profile = Memo::new(move |_| {
        let user = store.user().read();
        (user.name.clone(), user.email.clone())
    });
    Effect::new(move |_| {
        let (current_name, current_email) = profile.get();
        if let Some(current) = current_name {
            set_name.set(current);
        }
        if let Some(current) = current_email {
            set_email.set(current);
        }
    });

    let loading = move || store.user().read().status.loading;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_saved.set(false);
        let password = password.get();
        let update = ProfileUpdate {
            name: Some(name.get().trim().to_string()).filter(|v| !v.is_empty()),
            email: Some(email.get().trim().to_string()).filter(|v| !v.is_empty()),
            password: Some(password).filter(|v| !v.is_empty()),
        };
        let client = ctx.client();
        spawn_local(async move {
            if client.update_profile(&update).await.is_ok() {
                set_password.set(String::new());
                set_saved.set(true);
            }
        });
    };

    view! {
        <form class="card profile-editor" on:submit=submit>
            <h2>"Account"</h2>
            <label>
                "Name"
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    disabled=loading
                />
            </label>
            <label>
                "Email address"
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    disabled=loading
                />
            </label>
            <label>
                "New password"
                <input
                    type="password"
                    placeholder="Leave blank to keep"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    disabled=loading
                />
            </label>
            <Show when=move || saved.get()>
                <p class="form-success">"Profile updated"</p>
            </Show>
            <button type="submit" disabled=loading>"Save changes"</button>
        </form>
    }
}
