use dioxus::prelude::*;
use store::FeedbackDraft;

use crate::board::StatusMessage;
use crate::StatusLine;

/// Form for submitting a new entry.
///
/// Renders the draft it is given and reports every keystroke and the submit
/// through callbacks; it keeps no state of its own.
#[component]
pub fn FeedbackForm(
    draft: FeedbackDraft,
    status: Option<StatusMessage>,
    on_name: EventHandler<String>,
    on_email: EventHandler<String>,
    on_comment: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        form {
            class: "feedback-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            input {
                r#type: "text",
                placeholder: "Name",
                value: draft.name.clone(),
                oninput: move |evt: FormEvent| on_name.call(evt.value()),
            }
            input {
                r#type: "email",
                placeholder: "Email",
                value: draft.email.clone(),
                oninput: move |evt: FormEvent| on_email.call(evt.value()),
            }
            textarea {
                placeholder: "Comment",
                value: draft.comment.clone(),
                oninput: move |evt: FormEvent| on_comment.call(evt.value()),
            }
            button { r#type: "submit", class: "sub", "Submit Feedback" }
            if let Some(status) = status {
                StatusLine { status: status }
            }
        }
    }
}
