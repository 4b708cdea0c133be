//! Action Form Component
//!
//! Logs a new action. Picking a category resets points to that category's
//! suggestion; the icon always follows the category.

use greenstep_core::models::{ActionCategory, NewAction};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ActionForm(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (category, set_category) = signal(ActionCategory::default());
    let (points, set_points) = signal(ActionCategory::default().default_points());
    let (description, set_description) = signal(String::new());

    let loading = move || store.actions().read().status.loading;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = title.get();
        if text.trim().is_empty() {
            return;
        }
        let action = NewAction::new(text.trim(), category.get())
            .with_points(points.get())
            .with_description(description.get());
        let client = ctx.client();
        spawn_local(async move {
            if client.log_action(&action).await.is_ok() {
                on_close.run(());
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <form class="modal action-form" on:submit=submit>
                <header class="modal-header">
                    <h2>"Log New Action"</h2>
                    <button type="button" class="close-btn" on:click=move |_| on_close.run(())>"×"</button>
                </header>
                <label>
                    "Action Title"
                    <input
                        type="text"
                        required
                        placeholder="e.g., Cycled to work"
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                        disabled=loading
                    />
                </label>
                <label>
                    "Category"
                    <select
                        prop:value=move || category.get().label()
                        on:change=move |ev| {
                            let picked = ActionCategory::from_label(&event_target_value(&ev));
                            set_category.set(picked);
                            set_points.set(picked.default_points());
                        }
                        disabled=loading
                    >
                        {ActionCategory::ALL.iter().map(|option| view! {
                            <option value={option.label()}>
                                {format!("{} {}", option.icon(), option.label())}
                            </option>
                        }).collect_view()}
                    </select>
                </label>
                <label>
                    "Points"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || points.get().to_string()
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                set_points.set(value);
                            }
                        }
                        disabled=loading
                    />
                </label>
                <label>
                    "Description (optional)"
                    <textarea
                        rows="3"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                        disabled=loading
                    ></textarea>
                </label>
                {move || store.actions().read().status.error.clone().map(|message| view! {
                    <p class="form-error">{message}</p>
                })}
                <footer class="modal-footer">
                    <button type="button" class="secondary" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button type="submit" disabled=loading>
                        {move || if loading() { "Logging..." } else { "Log Action" }}
                    </button>
                </footer>
            </form>
        </div>
    }
}
