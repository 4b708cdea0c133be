//! Two-step delete for goal cards and action rows

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Idle,
    Asking,
}

impl Step {
    /// Next step after a click, and whether the delete should fire
    fn after(self, click: Click) -> (Step, bool) {
        match (self, click) {
            (Step::Idle, Click::Delete) => (Step::Asking, false),
            (Step::Asking, Click::Confirm) => (Step::Idle, true),
            (Step::Asking, Click::Keep) => (Step::Idle, false),
            (step, _) => (step, false),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Click {
    Delete,
    Confirm,
    Keep,
}

fn prompt(subject: &str) -> String {
    if subject.trim().is_empty() {
        "Delete this item?".to_string()
    } else {
        format!("Delete “{}”?", subject.trim())
    }
}

/// "Delete" button that asks about `subject` before running `on_confirm`
#[component]
pub fn ConfirmDelete(
    #[prop(into)] subject: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (step, set_step) = signal(Step::Idle);
    let question = prompt(&subject);

    let click = move |click: Click| {
        let (next, fire) = step.get_untracked().after(click);
        set_step.set(next);
        if fire {
            on_confirm.run(());
        }
    };

    view! {
        <Show
            when=move || step.get() == Step::Asking
            fallback=move || view! {
                <button class="delete-btn" on:click=move |_| click(Click::Delete)>"Delete"</button>
            }
        >
            <span class="confirm-delete" role="alertdialog">
                <span class="confirm-delete-question">{question.clone()}</span>
                <button class="danger" on:click=move |_| click(Click::Confirm)>"Yes, delete"</button>
                <button class="secondary" on:click=move |_| click(Click::Keep)>"Keep"</button>
            </span>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_fires_only_after_confirm() {
        let (step, fired) = Step::Idle.after(Click::Delete);
        assert_eq!(step, Step::Asking);
        assert!(!fired);

        let (step, fired) = step.after(Click::Confirm);
        assert_eq!(step, Step::Idle);
        assert!(fired);
    }

    #[test]
    fn test_keep_cancels() {
        let (step, fired) = Step::Asking.after(Click::Keep);
        assert_eq!(step, Step::Idle);
        assert!(!fired);
    }

    #[test]
    fn test_stray_clicks_do_nothing() {
        assert_eq!(Step::Idle.after(Click::Confirm), (Step::Idle, false));
        assert_eq!(Step::Asking.after(Click::Delete), (Step::Asking, false));
    }

    #[test]
    fn test_prompt_names_subject() {
        assert_eq!(prompt(" Bike to work "), "Delete “Bike to work”?");
        assert_eq!(prompt(""), "Delete this item?");
    }
}
