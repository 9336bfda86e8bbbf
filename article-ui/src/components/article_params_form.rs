//! Article parameters sidebar
//!
//! ## State
//! - `SidebarState`: whether the panel is open. Toggled by the arrow button,
//!   closed by any interaction outside the component.
//! - `ParamsForm`: the local draft. Each control edits one field; apply
//!   publishes the draft, reset publishes the defaults. Closing the panel
//!   keeps unpublished edits.

use dioxus::prelude::*;
use tracing::{debug, info, warn};

use crate::components::arrow_button::ArrowButton;
use crate::components::button::{Button, ButtonType, ButtonVariant};
use crate::components::radio_group::RadioGroup;
use crate::components::select::Select;
use crate::components::separator::Separator;
use crate::components::text::{Text, TextTag};
use crate::outside_click::{use_boundary_id, use_outside_click};
use crate::stores::{ArticleField, ArticleState, OptionValue, ParamsForm, SidebarState};

/// Sidebar form for the article display parameters
#[component]
pub fn ArticleParamsForm(
    /// Receives a snapshot on apply and the defaults on reset
    on_apply: EventHandler<ArticleState>,
) -> Element {
    let mut sidebar = use_signal(SidebarState::default);
    let mut params = use_signal(ParamsForm::default);
    let is_open = use_memo(move || sidebar.read().is_open);
    let root_id = use_boundary_id("article-params");

    let close_on_outside = use_callback(move |()| {
        let Ok(mut state) = sidebar.try_write() else {
            return;
        };
        if state.close_on_outside_interaction() {
            debug!("Article params panel closed by outside interaction");
        }
    });
    use_outside_click(root_id.clone(), is_open, close_on_outside);

    let draft = params.read().draft();
    let size_group_name = draft.font_size().class_name.unwrap_or("font-size");

    let panel_class = if is_open() {
        "translate-x-0"
    } else {
        "-translate-x-full"
    };

    rsx! {
        // Boundary for outside-click detection: holds the toggle and the panel
        div { id: "{root_id}", class: "contents",
            ArrowButton {
                is_open: is_open(),
                on_click: move |_| sidebar.write().toggle(),
            }
            aside {
                class: "fixed top-0 left-0 z-10 h-full w-[616px] max-w-full overflow-y-auto bg-white shadow-2xl transition-transform duration-300 {panel_class}",
                "inert": if is_open() { None } else { Some("true") },
                form {
                    class: "flex flex-col gap-12 min-h-full px-12 py-20",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        let snapshot = params.read().submit();
                        info!("Applying article params: {:?}", snapshot);
                        on_apply.call(snapshot);
                    },
                    onreset: move |evt: FormEvent| {
                        evt.prevent_default();
                        let snapshot = params.write().reset();
                        info!("Article params reset to defaults");
                        on_apply.call(snapshot);
                    },
                    Text {
                        tag: TextTag::H2,
                        size: 31,
                        weight: 800,
                        uppercase: true,
                        "Set parameters"
                    }
                    Select {
                        title: ArticleField::FontFamily.title().to_string(),
                        selected: draft.font_family(),
                        options: ArticleField::FontFamily.options(),
                        on_change: move |option: &'static OptionValue| select_option(params, ArticleField::FontFamily, option),
                    }
                    RadioGroup {
                        name: size_group_name.to_string(),
                        title: ArticleField::FontSize.title().to_string(),
                        selected: draft.font_size(),
                        options: ArticleField::FontSize.options(),
                        on_change: move |option: &'static OptionValue| select_option(params, ArticleField::FontSize, option),
                    }
                    Select {
                        title: ArticleField::FontColor.title().to_string(),
                        selected: draft.font_color(),
                        options: ArticleField::FontColor.options(),
                        on_change: move |option: &'static OptionValue| select_option(params, ArticleField::FontColor, option),
                    }
                    Separator {}
                    Select {
                        title: ArticleField::BackgroundColor.title().to_string(),
                        selected: draft.background_color(),
                        options: ArticleField::BackgroundColor.options(),
                        on_change: move |option: &'static OptionValue| select_option(params, ArticleField::BackgroundColor, option),
                    }
                    Select {
                        title: ArticleField::ContentWidth.title().to_string(),
                        selected: draft.content_width(),
                        options: ArticleField::ContentWidth.options(),
                        on_change: move |option: &'static OptionValue| select_option(params, ArticleField::ContentWidth, option),
                    }
                    div { class: "mt-auto flex justify-between gap-4",
                        Button {
                            variant: ButtonVariant::Clear,
                            html_type: ButtonType::Reset,
                            "Reset"
                        }
                        Button {
                            variant: ButtonVariant::Apply,
                            html_type: ButtonType::Submit,
                            "Apply"
                        }
                    }
                }
            }
        }
    }
}

fn select_option(mut params: Signal<ParamsForm>, field: ArticleField, option: &'static OptionValue) {
    if let Err(err) = params.write().select(field, option) {
        warn!("Ignoring article param change: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_form() -> String {
        fn app() -> Element {
            rsx! {
                ArticleParamsForm { on_apply: move |_: ArticleState| {} }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("{needle:?} not rendered"))
    }

    #[test]
    fn test_closed_panel_is_inert_and_off_screen() {
        let html = render_form();
        assert!(html.contains(r#"inert="true""#));
        assert!(html.contains("-translate-x-full"));
        assert!(html.contains(r#"aria-expanded="false""#));
    }

    #[test]
    fn test_controls_render_in_order() {
        let html = render_form();
        let order = [
            position(&html, "Set parameters</h2>"),
            position(&html, "Font</h3>"),
            position(&html, "Font size</h3>"),
            position(&html, r#"name="font-size-18""#),
            position(&html, "Font color</h3>"),
            position(&html, "<hr"),
            position(&html, "Background color</h3>"),
            position(&html, "Content width</h3>"),
            position(&html, r#"type="reset""#),
            position(&html, r#"type="submit""#),
        ];
        assert!(order.windows(2).all(|w| w[0] < w[1]), "{order:?}");
    }

    #[test]
    fn test_renders_default_selections() {
        let html = render_form();
        assert!(html.contains("Open Sans"));
        assert!(html.contains("Narrow"));
        assert_eq!(html.matches(r#"type="radio""#).count(), 3);
    }
}
