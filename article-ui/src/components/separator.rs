//! Horizontal separator

use dioxus::prelude::*;

#[component]
pub fn Separator() -> Element {
    rsx! {
        hr { class: "w-full border-0 h-px bg-gray-300" }
    }
}
