use dioxus::prelude::*;

use crate::board::StatusMessage;

#[component]
pub fn StatusLine(status: StatusMessage) -> Element {
    rsx! {
        p {
            class: status.level.css_class(),
            role: "status",
            "{status.text}"
        }
    }
}
