//! Goals Page
//!
//! Goal cards with progress stepping, completion toggle, edit and delete.

use greenstep_core::models::Goal;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ConfirmDelete, GoalForm, StatusLine};
use crate::context::use_app_context;
use crate::store::{store_find_goal, store_goals, use_app_store, AppStateStoreFields};

/// Which form, if any, is open
#[derive(Debug, Clone, PartialEq)]
enum FormState {
    Closed,
    Create,
    Edit(Goal),
}

#[component]
pub fn GoalsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (form, set_form) = signal(FormState::Closed);

    let client = ctx.client();
    spawn_local(async move {
        let _ = client.fetch_goals().await;
    });

    let is_empty = move || {
        let goals = store.goals().read();
        !goals.status.loading && goals.status.error.is_none() && goals.goals.is_empty()
    };

    // Goals are looked up fresh so a click acts on the latest server copy.
    let step_progress = move |id: String, delta: f64| {
        let Some(goal) = store_find_goal(&store, &id) else {
            return;
        };
        let client = ctx.client();
        spawn_local(async move {
            let _ = client.set_goal_progress(&goal, goal.progress + delta).await;
        });
    };
    let toggle = move |id: String| {
        let Some(goal) = store_find_goal(&store, &id) else {
            return;
        };
        let client = ctx.client();
        spawn_local(async move {
            let _ = client.toggle_goal_completion(&goal).await;
        });
    };
    let delete_goal = move |id: String| {
        let client = ctx.client();
        spawn_local(async move {
            let _ = client.delete_goal(&id).await;
        });
    };

    view! {
        <section class="goals-page">
            <header class="page-header">
                <h1>"My Goals"</h1>
                <button on:click=move |_| set_form.set(FormState::Create)>"+ New Goal"</button>
            </header>

            <StatusLine status={Signal::derive(move || store.goals().read().status.clone())} />

            <Show when=is_empty>
                <div class="empty">
                    <p>"No goals yet. Set one to track your progress!"</p>
                    <button on:click=move |_| set_form.set(FormState::Create)>"Create your first goal"</button>
                </div>
            </Show>

            <div class="goal-grid">
                <For
                    each=move || store_goals(&store)
                    key=|goal| (goal.id.clone(), goal.progress.to_bits(), goal.completed, goal.title.clone())
                    let:goal
                >
                    {
                        let (minus_id, plus_id, toggle_id, delete_id) =
                            (goal.id.clone(), goal.id.clone(), goal.id.clone(), goal.id.clone());
                        let edit_goal = goal.clone();
                        let completed = goal.completed;
                        view! {
                            <article class={if completed { "goal-card completed" } else { "goal-card" }}>
                                <header class="goal-card-header">
                                    <h3>{goal.title.clone()}</h3>
                                    <span class="goal-category">{goal.category.clone()}</span>
                                </header>
                                {(!goal.description.is_empty()).then(|| view! {
                                    <p class="goal-description">{goal.description.clone()}</p>
                                })}
                                <div class="goal-progress">
                                    <progress max="100" value={goal.percent_complete().to_string()}></progress>
                                    <span>{format!("{} / {} {}", goal.progress, goal.target, goal.unit)}</span>
                                </div>
                                <div class="goal-actions">
                                    <button
                                        disabled=completed
                                        on:click=move |_| step_progress(minus_id.clone(), -1.0)
                                    >
                                        "−"
                                    </button>
                                    <button
                                        disabled=completed
                                        on:click=move |_| step_progress(plus_id.clone(), 1.0)
                                    >
                                        "+"
                                    </button>
                                    <button class="toggle-btn" on:click=move |_| toggle(toggle_id.clone())>
                                        {if completed { "Mark incomplete" } else { "Mark complete" }}
                                    </button>
                                    <button
                                        class="edit-btn"
                                        on:click=move |_| set_form.set(FormState::Edit(edit_goal.clone()))
                                    >
                                        "Edit"
                                    </button>
                                    <ConfirmDelete
                                        subject={goal.title.clone()}
                                        on_confirm=move |_| delete_goal(delete_id.clone())
                                    />
                                </div>
                            </article>
                        }
                    }
                </For>
            </div>

            {move || {
                let editing = match form.get() {
                    FormState::Closed => return None,
                    FormState::Create => None,
                    FormState::Edit(goal) => Some(goal),
                };
                Some(view! {
                    <GoalForm editing=editing on_close=move |_| set_form.set(FormState::Closed) />
                })
            }}
        </section>
    }
}
