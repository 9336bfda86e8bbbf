//! article demo - Web host for the article parameters sidebar
//!
//! Renders a sample article and restyles it whenever the sidebar publishes
//! new parameters.

pub mod pages;

use article_ui::{ArticleParamsForm, ArticleState};
use dioxus::prelude::*;
use pages::Article;
use tracing::info;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[component]
pub fn App() -> Element {
    let mut applied = use_signal(ArticleState::default);
    let css_vars = applied.read().css_vars();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        main { class: "article-page", style: "{css_vars}",
            ArticleParamsForm {
                on_apply: move |state: ArticleState| {
                    info!(
                        font_family = state.font_family().id,
                        font_size = state.font_size().id,
                        font_color = state.font_color().id,
                        background_color = state.background_color().id,
                        content_width = state.content_width().id,
                        "Article params applied"
                    );
                    applied.set(state);
                },
            }
            Article {}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    #[test]
    fn test_tailwind_stylesheet_exists_for_asset() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/tailwind.css");
        assert!(path.exists(), "build.rs should write {}", path.display());
    }
}
