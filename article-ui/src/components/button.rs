//! Reusable button components

use dioxus::prelude::*;

/// HTML `type` attribute of a button
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

/// Chromeless button component - provides accessibility and base functionality
/// without visual styling. Used internally by Button and by the sidebar toggle.
#[component]
pub fn ChromelessButton(
    #[props(default)] html_type: ButtonType,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_expanded: Option<bool>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            r#type: html_type.as_str(),
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_expanded: aria_expanded.map(|open| if open { "true" } else { "false" }),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if disabled {
                    return;
                }
                if let Some(ref handler) = onclick {
                    handler.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Filled - for the primary form action
    Apply,
    /// Outlined - for clearing the form
    Clear,
}

/// Form button with consistent styling
#[component]
pub fn Button(
    variant: ButtonVariant,
    #[props(default)] html_type: ButtonType,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let base = "inline-flex items-center justify-center px-8 py-3 text-sm font-extrabold uppercase tracking-wide transition-colors disabled:opacity-50 disabled:cursor-not-allowed";

    let variant_class = match variant {
        ButtonVariant::Apply => "bg-black text-white hover:bg-gray-800",
        ButtonVariant::Clear => "border border-black text-black hover:bg-gray-100",
    };

    let computed_class = match &class {
        Some(extra) => format!("{base} {variant_class} {extra}"),
        None => format!("{base} {variant_class}"),
    };

    rsx! {
        ChromelessButton {
            html_type,
            disabled,
            class: Some(computed_class),
            onclick: move |e: MouseEvent| {
                if let Some(handler) = onclick {
                    handler.call(e);
                }
            },
            {children}
        }
    }
}
