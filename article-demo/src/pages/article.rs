//! Sample article styled by the applied parameters
//!
//! Everything here reads the CSS custom properties set on the page root, so
//! the component itself never re-renders when parameters change.

use dioxus::prelude::*;

const PARAGRAPHS: [&str; 3] = [
    "Typography is the craft of arranging type to make written language legible, \
     readable and appealing when displayed. It involves choosing typefaces, point \
     sizes, line lengths and line spacing, and the space between pairs of letters.",
    "A measure that is too wide tires the eye on its way back to the start of the \
     next line. One that is too narrow breaks the rhythm of reading. Most readers \
     are comfortable somewhere between forty-five and seventy-five characters.",
    "Colour matters as much as shape. Dark text on a light ground is the long \
     established default, but a softer contrast can be kinder over a long read.",
];

#[component]
pub fn Article() -> Element {
    rsx! {
        article { class: "article",
            h1 { class: "article__title", "On reading comfortably" }
            p { class: "article__subtitle", "Notes on type, measure and colour" }
            for (i, text) in PARAGRAPHS.iter().enumerate() {
                p { key: "{i}", class: "article__text", "{text}" }
            }
        }
    }
}
