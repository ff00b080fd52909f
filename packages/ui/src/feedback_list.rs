use dioxus::prelude::*;
use store::{FeedbackCollection, FeedbackEntry, FeedbackId};

/// Every entry in the collection, in the order the store enumerated them.
#[component]
pub fn FeedbackList(
    entries: FeedbackCollection,
    /// Whether a listing has arrived yet; before that the list is just empty.
    #[props(default = true)]
    loaded: bool,
    on_delete: EventHandler<FeedbackId>,
) -> Element {
    if loaded && entries.is_empty() {
        return rsx! {
            div {
                class: "feedback-list",
                p { class: "feedback-empty", "No feedback yet." }
            }
        };
    }

    rsx! {
        div {
            class: "feedback-list",
            for (id, entry) in entries {
                FeedbackItem {
                    key: "{id}",
                    id: id.clone(),
                    entry: entry,
                    on_delete: on_delete,
                }
            }
        }
    }
}

#[component]
pub fn FeedbackItem(
    id: FeedbackId,
    entry: FeedbackEntry,
    on_delete: EventHandler<FeedbackId>,
) -> Element {
    rsx! {
        div {
            class: "feedback-item",
            h3 { "{entry.name}" }
            p { "{entry.comment}" }
            small { "{entry.email}" }
            button {
                class: "delete-btn",
                title: "Delete",
                onclick: move |_| on_delete.call(id.clone()),
                "x"
            }
        }
    }
}
