//! Radio group component — a row of exclusive choices where one is checked

use dioxus::prelude::*;

use crate::components::text::{Text, TextTag};
use crate::stores::OptionValue;

/// A titled row of radio inputs sharing one `name`
#[component]
pub fn RadioGroup(
    name: String,
    title: String,
    selected: &'static OptionValue,
    options: &'static [OptionValue],
    on_change: EventHandler<&'static OptionValue>,
) -> Element {
    rsx! {
        div { class: "flex flex-col gap-3",
            Text {
                tag: TextTag::H3,
                size: 12,
                weight: 800,
                uppercase: true,
                "{title}"
            }
            div { class: "flex gap-2", role: "radiogroup",
                for item in options.iter() {
                    RadioOption {
                        key: "{item.id}",
                        name: name.clone(),
                        item,
                        checked: item == selected,
                        on_change,
                    }
                }
            }
        }
    }
}

#[component]
fn RadioOption(
    name: String,
    item: &'static OptionValue,
    checked: bool,
    on_change: EventHandler<&'static OptionValue>,
) -> Element {
    let input_id = format!("{}_{}", name, item.id);
    let label_class = if checked {
        "block px-4 py-2 border border-black bg-black text-white text-sm cursor-pointer"
    } else {
        "block px-4 py-2 border border-gray-300 text-sm cursor-pointer hover:border-black"
    };

    rsx! {
        div {
            input {
                r#type: "radio",
                class: "sr-only",
                id: "{input_id}",
                name: "{name}",
                value: "{item.id}",
                checked,
                onchange: move |_| on_change.call(item),
            }
            label { r#for: "{input_id}", class: label_class, "{item.title}" }
        }
    }
}
