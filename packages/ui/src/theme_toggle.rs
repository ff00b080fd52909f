use dioxus::prelude::*;
use store::ThemePreference;

use crate::theme::toggle_label;

#[component]
pub fn ThemeToggle(theme: ThemePreference, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "theme-toggle",
            onclick: move |_| on_toggle.call(()),
            {toggle_label(theme)}
        }
    }
}
