//! Titled select for one article parameter
//!
//! The option list opens below the trigger and closes on pick, on a second
//! click of the trigger, or on any interaction outside the select.
//!
//! ```ignore
//! Select {
//!     title: "Font",
//!     selected: state.font_family(),
//!     options: FONT_FAMILY_OPTIONS,
//!     on_change: move |option| { ... },
//! }
//! ```

use dioxus::prelude::*;

use crate::components::icons::{CheckIcon, ChevronDownIcon};
use crate::components::text::{Text, TextTag};
use crate::outside_click::{use_boundary_id, use_outside_click};
use crate::stores::OptionValue;

/// Custom styled select dropdown
#[component]
pub fn Select(
    /// Label rendered above the trigger
    title: String,
    /// Currently selected option
    selected: &'static OptionValue,
    /// Options to choose from
    options: &'static [OptionValue],
    /// Called when the user picks an option
    on_change: EventHandler<&'static OptionValue>,
) -> Element {
    let mut is_open = use_signal(|| false);
    let is_open_memo = use_memo(move || is_open());
    let root_id = use_boundary_id("select");

    let close = use_callback(move |()| {
        // The list may already be gone when a late event arrives
        if let Ok(mut open) = is_open.try_write() {
            *open = false;
        }
    });
    use_outside_click(root_id.clone(), is_open_memo, close);

    let chevron_class = if is_open() {
        "w-4 h-4 text-gray-500 flex-shrink-0 rotate-180 transition-transform"
    } else {
        "w-4 h-4 text-gray-500 flex-shrink-0 transition-transform"
    };

    rsx! {
        div { id: "{root_id}", class: "flex flex-col gap-3",
            Text {
                tag: TextTag::H3,
                size: 12,
                weight: 800,
                uppercase: true,
                "{title}"
            }
            div { class: "relative",
                button {
                    r#type: "button",
                    class: "w-full flex items-center justify-between gap-2 px-4 py-3 border border-gray-300 bg-white text-left text-sm hover:border-black transition-colors",
                    aria_haspopup: "listbox",
                    aria_expanded: if is_open() { "true" } else { "false" },
                    onclick: move |_| is_open.set(!is_open()),
                    span { class: "truncate", "{selected.title}" }
                    ChevronDownIcon { class: chevron_class }
                }

                if is_open() {
                    ul {
                        role: "listbox",
                        class: "absolute left-0 right-0 top-full z-30 mt-1 bg-white border border-gray-300 shadow-lg py-1",
                        for item in options.iter() {
                            SelectOption {
                                key: "{item.id}",
                                item,
                                is_selected: item == selected,
                                on_pick: move |picked: &'static OptionValue| {
                                    on_change.call(picked);
                                    is_open.set(false);
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

/// An option within a Select list
#[component]
fn SelectOption(
    item: &'static OptionValue,
    is_selected: bool,
    on_pick: EventHandler<&'static OptionValue>,
) -> Element {
    rsx! {
        li {
            role: "option",
            aria_selected: if is_selected { "true" } else { "false" },
            button {
                r#type: "button",
                class: "w-full text-left px-4 py-2 text-sm flex items-center gap-2 transition-colors {selected_class(is_selected)}",
                onclick: move |e: MouseEvent| {
                    e.stop_propagation();
                    on_pick.call(item);
                },
                if is_selected {
                    CheckIcon { class: "w-3.5 h-3.5 flex-shrink-0" }
                } else {
                    span { class: "w-3.5 h-3.5 flex-shrink-0" }
                }
                "{item.title}"
            }
        }
    }
}

fn selected_class(is_selected: bool) -> &'static str {
    if is_selected {
        "font-bold bg-gray-100"
    } else {
        "hover:bg-gray-100"
    }
}
