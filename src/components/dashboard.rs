//! Dashboard Page
//!
//! Greeting with level progress, the latest actions and an overview of
//! active goals. Loads profile, actions, goals and stats on mount.

use greenstep_core::insights::{self, LevelSummary, DASHBOARD_LIMIT};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::StatusLine;
use crate::context::{use_app_context, Page};
use crate::store::{store_actions, store_goals, use_app_store, AppStateStoreFields};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let client = ctx.client();
    spawn_local(async move {
        // Partitions are independent; failures land in their own status.
        let _ = futures::join!(
            client.fetch_profile(),
            client.fetch_actions(),
            client.fetch_goals(),
            client.fetch_action_stats(),
        );
    });

    let level = move || LevelSummary::for_user(&store.user().read());
    let recent = move || insights::recent_actions(&store_actions(&store), DASHBOARD_LIMIT);
    let overview = move || insights::goal_overview(&store_goals(&store), DASHBOARD_LIMIT);

    view! {
        <section class="dashboard">
            <header class="dashboard-header">
                <h1>
                    "Welcome back, "
                    {move || store.user().read().name.clone().unwrap_or_default()}
                </h1>
                <p class="level-line">
                    {move || {
                        let level = level();
                        format!(
                            "Level {} · {} points · {} to next level",
                            level.level, level.points, level.to_next,
                        )
                    }}
                </p>
                <div class="level-bar">
                    <div
                        class="level-bar-fill"
                        style:width=move || format!("{}%", level().percent)
                    ></div>
                </div>
                <StatusLine status={Signal::derive(move || store.user().read().status.clone())} />
            </header>

            <div class="dashboard-grid">
                <article class="card">
                    <h2>"Recent actions"</h2>
                    <StatusLine status={Signal::derive(move || store.actions().read().status.clone())} />
                    <Show
                        when=move || !recent().is_empty()
                        fallback=move || view! { <p class="empty">"No actions logged yet."</p> }
                    >
                        <ul class="recent-actions">
                            <For
                                each=recent
                                key=|action| action.id.clone()
                                let:action
                            >
                                <li>
                                    <span class="action-icon">{action.display_icon().to_string()}</span>
                                    <span class="action-title">{action.title.clone()}</span>
                                    <span class="action-points">{format!("+{}", action.points)}</span>
                                </li>
                            </For>
                        </ul>
                    </Show>
                    <button class="link" on:click=move |_| ctx.navigate(Page::Actions)>"All actions →"</button>
                </article>

                <article class="card">
                    <h2>"Goals"</h2>
                    <StatusLine status={Signal::derive(move || store.goals().read().status.clone())} />
                    <p class="goal-counts">
                        {move || {
                            let overview = overview();
                            format!("{} active · {} completed", overview.active, overview.completed)
                        }}
                    </p>
                    <ul class="goal-overview">
                        <For
                            each=move || overview().highlighted
                            key=|goal| goal.id.clone()
                            let:goal
                        >
                            <li>
                                <span class="goal-title">{goal.title.clone()}</span>
                                <progress max="100" value={goal.percent_complete().to_string()}></progress>
                                <span class="goal-percent">{format!("{:.0}%", goal.percent_complete())}</span>
                            </li>
                        </For>
                    </ul>
                    <button class="link" on:click=move |_| ctx.navigate(Page::Goals)>"Manage goals →"</button>
                </article>
            </div>
        </section>
    }
}
