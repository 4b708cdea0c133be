//! Actions Page
//!
//! Every logged action, newest first, with a category filter, the log form
//! and delete-with-confirmation.

use greenstep_core::insights::{self, CategoryFilter};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ActionForm, ConfirmDelete, StatusLine};
use crate::context::use_app_context;
use crate::store::{store_actions, use_app_store, AppStateStoreFields};

#[component]
pub fn ActionsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (filter, set_filter) = signal(CategoryFilter::All);
    let (show_form, set_show_form) = signal(false);

    let client = ctx.client();
    spawn_local(async move {
        let _ = client.fetch_actions().await;
    });

    let filters = move || {
        let mut filters = vec![CategoryFilter::All];
        filters.extend(
            insights::categories_in(&store_actions(&store))
                .into_iter()
                .map(CategoryFilter::Only),
        );
        filters
    };
    let visible = move || insights::filter_actions(&store_actions(&store), filter.get());
    let is_empty = move || {
        let actions = store.actions().read();
        !actions.status.loading && actions.status.error.is_none() && actions.actions.is_empty()
    };

    let delete_action = move |id: String| {
        let client = ctx.client();
        spawn_local(async move {
            let _ = client.delete_action(&id).await;
        });
    };

    view! {
        <section class="actions-page">
            <header class="page-header">
                <h1>"My Actions"</h1>
                <button on:click=move |_| set_show_form.set(true)>"+ Log Action"</button>
            </header>

            <div class="category-filter">
                <For each=filters key=|f| f.label() let:option>
                    <button
                        class=move || if filter.get() == option { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| set_filter.set(option)
                    >
                        {option.label()}
                    </button>
                </For>
            </div>

            <StatusLine status={Signal::derive(move || store.actions().read().status.clone())} />

            <Show when=is_empty>
                <div class="empty">
                    <p>"No actions logged yet. Start making a difference!"</p>
                    <button on:click=move |_| set_show_form.set(true)>"Log your first action"</button>
                </div>
            </Show>

            <ul class="action-list">
                <For each=visible key=|action| action.id.clone() let:action>
                    {
                        let id = action.id.clone();
                        let subject = action.title.clone();
                        view! {
                            <li class="action-row">
                                <span class="action-icon">{action.display_icon().to_string()}</span>
                                <div class="action-body">
                                    <span class="action-title">{action.title.clone()}</span>
                                    <span class="action-meta">
                                        {format!(
                                            "{} · {}",
                                            action.category.label(),
                                            action.timestamp.format("%b %e, %Y"),
                                        )}
                                    </span>
                                    {action.description.clone().map(|text| view! {
                                        <p class="action-description">{text}</p>
                                    })}
                                </div>
                                <span class="action-points">{format!("+{} pts", action.points)}</span>
                                <ConfirmDelete
                                    subject=subject
                                    on_confirm=move |_| delete_action(id.clone())
                                />
                            </li>
                        }
                    }
                </For>
            </ul>

            <Show when=move || show_form.get()>
                <ActionForm on_close=move |_| set_show_form.set(false) />
            </Show>
        </section>
    }
}
