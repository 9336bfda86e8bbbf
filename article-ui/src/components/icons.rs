//! SVG icon components

use dioxus::prelude::*;

#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArrowDirection {
    #[default]
    Right,
    Left,
}

/// Arrow used by the sidebar toggle
#[component]
pub fn ArrowIcon(
    #[props(default)] direction: ArrowDirection,
    #[props(default = "w-6 h-6")] class: &'static str,
) -> Element {
    let rotation = match direction {
        ArrowDirection::Right => "",
        ArrowDirection::Left => "rotate-180",
    };

    rsx! {
        svg {
            class: "{class} {rotation} transition-transform duration-300",
            xmlns: "http://www.w3.org/2000/svg",
            fill: "none",
            view_box: "0 0 24 24",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M5 12h14" }
            path { d: "m12 5 7 7-7 7" }
        }
    }
}

/// Chevron down icon (select trigger)
#[component]
pub fn ChevronDownIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "m6 9 6 6 6-6" }
        }
    }
}

/// Check icon
#[component]
pub fn CheckIcon(#[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M20 6 9 17l-5-5" }
        }
    }
}
