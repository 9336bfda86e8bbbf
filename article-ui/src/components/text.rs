//! Typography wrapper

use dioxus::prelude::*;

/// Element the text renders as
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TextTag {
    H2,
    H3,
    P,
    #[default]
    Div,
    Span,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Text with explicit size and weight
#[component]
pub fn Text(
    #[props(default)] tag: TextTag,
    /// Font size in pixels
    #[props(default = 18)]
    size: u16,
    #[props(default = 400)] weight: u16,
    #[props(default)] uppercase: bool,
    #[props(default)] italic: bool,
    #[props(default)] align: TextAlign,
    children: Element,
) -> Element {
    let mut classes = vec!["m-0 leading-tight"];
    if uppercase {
        classes.push("uppercase");
    }
    if italic {
        classes.push("italic");
    }
    classes.push(match align {
        TextAlign::Left => "text-left",
        TextAlign::Center => "text-center",
        TextAlign::Right => "text-right",
    });
    let class = classes.join(" ");
    let style = format!("font-size: {size}px; font-weight: {weight};");

    match tag {
        TextTag::H2 => rsx! {
            h2 { class, style, {children} }
        },
        TextTag::H3 => rsx! {
            h3 { class, style, {children} }
        },
        TextTag::P => rsx! {
            p { class, style, {children} }
        },
        TextTag::Div => rsx! {
            div { class, style, {children} }
        },
        TextTag::Span => rsx! {
            span { class, style, {children} }
        },
    }
}
