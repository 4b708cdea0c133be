//! Goal Form Component
//!
//! Creates a goal, or edits one when `editing` holds it.

use greenstep_core::models::{Goal, GoalUpdate, NewGoal, GOAL_CATEGORIES};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn GoalForm(
    /// Goal being edited, `None` to create a new one
    editing: Option<Goal>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let initial = editing
        .as_ref()
        .map(|goal| NewGoal {
            title: goal.title.clone(),
            description: goal.description.clone(),
            target: goal.target,
            unit: goal.unit.clone(),
            category: goal.category.clone(),
        })
        .unwrap_or_else(|| NewGoal::new("", 1.0, "times"));
    let editing_id = editing.map(|goal| goal.id);
    let heading = if editing_id.is_some() { "Edit Goal" } else { "Create New Goal" };

    let (title, set_title) = signal(initial.title);
    let (description, set_description) = signal(initial.description);
    let (target, set_target) = signal(initial.target);
    let (unit, set_unit) = signal(initial.unit);
    let (category, set_category) = signal(initial.category);

    let loading = move || store.goals().read().status.loading;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut goal = NewGoal::new(title.get().trim(), target.get(), unit.get().trim());
        goal.description = description.get();
        goal.category = category.get();
        if goal.title.is_empty() || goal.target <= 0.0 {
            return;
        }
        let client = ctx.client();
        let editing_id = editing_id.clone();
        spawn_local(async move {
            let saved = match editing_id {
                Some(id) => client.update_goal(&id, &GoalUpdate::edit(&goal)).await.map(|_| ()),
                None => client.create_goal(&goal).await.map(|_| ()),
            };
            if saved.is_ok() {
                on_close.run(());
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <form class="modal goal-form" on:submit=submit>
                <header class="modal-header">
                    <h2>{heading}</h2>
                    <button type="button" class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                </header>
                <label>
                    "Goal Title"
                    <input
                        type="text"
                        required
                        placeholder="e.g., Bike to work"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                        disabled=loading
                    />
                </label>
                <label>
                    "Description"
                    <textarea
                        rows="2"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                        disabled=loading
                    ></textarea>
                </label>
                <div class="form-row">
                    <label>
                        "Target"
                        <input
                            type="number"
                            min="1"
                            step="any"
                            required
                            prop:value=move || target.get().to_string()
                            on:input=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                                    set_target.set(value);
                                }
                            }
                            disabled=loading
                        />
                    </label>
                    <label>
                        "Unit"
                        <input
                            type="text"
                            placeholder="times, kg, km..."
                            prop:value=move || unit.get()
                            on:input=move |ev| set_unit.set(event_target_value(&ev))
                            disabled=loading
                        />
                    </label>
                </div>
                <label>
                    "Category"
                    <select
                        prop:value=move || category.get()
                        on:change=move |ev| set_category.set(event_target_value(&ev))
                        disabled=loading
                    >
                        {GOAL_CATEGORIES.iter().map(|option| view! {
                            <option value={*option}>{*option}</option>
                        }).collect_view()}
                    </select>
                </label>
                {move || store.goals().read().status.error.clone().map(|message| view! {
                    <p class="form-error">{message}</p>
                })}
                <footer class="modal-footer">
                    <button type="button" class="secondary" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button type="submit" disabled=loading>
                        {move || if loading() { "Saving..." } else { "Save Goal" }}
                    </button>
                </footer>
            </form>
        </div>
    }
}
