//! Loading / error line for one partition

use greenstep_core::RequestStatus;
use leptos::prelude::*;

#[component]
pub fn StatusLine(#[prop(into)] status: Signal<RequestStatus>) -> impl IntoView {
    view! {
        {move || {
            let status = status.get();
            if let Some(message) = status.error {
                view! { <div class="status-error">"Error: " {message}</div> }.into_any()
            } else if status.loading {
                view! { <div class="status-loading">"Loading..."</div> }.into_any()
            } else {
                ().into_any()
            }
        }}
    }
}
