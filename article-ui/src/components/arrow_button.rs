//! Sidebar toggle button

use dioxus::prelude::*;

use crate::components::button::ChromelessButton;
use crate::components::icons::{ArrowDirection, ArrowIcon};

/// Round arrow that opens and closes the parameters panel.
///
/// Points right while the panel is closed and left while it is open.
#[component]
pub fn ArrowButton(is_open: bool, on_click: EventHandler<()>) -> Element {
    let (direction, label, position) = if is_open {
        // Panel is w-[616px] max-w-full; stay 16px past its edge but on screen
        (
            ArrowDirection::Left,
            "Close parameters",
            "left-[min(632px,calc(100vw-4rem))]",
        )
    } else {
        (ArrowDirection::Right, "Open parameters", "left-6")
    };

    rsx! {
        ChromelessButton {
            class: Some(
                format!(
                    "fixed top-6 {position} z-20 flex items-center justify-center w-12 h-12 rounded-full bg-black text-white shadow-lg transition-all duration-300 hover:bg-gray-800",
                ),
            ),
            aria_label: Some(label.to_string()),
            aria_expanded: Some(is_open),
            onclick: move |_| on_click.call(()),
            ArrowIcon { direction }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_app() -> Element {
        rsx! {
            ArrowButton { is_open: true, on_click: move |_| {} }
        }
    }

    fn closed_app() -> Element {
        rsx! {
            ArrowButton { is_open: false, on_click: move |_| {} }
        }
    }

    fn render(is_open: bool) -> String {
        let mut dom = VirtualDom::new(if is_open { open_app } else { closed_app });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_open_toggle_stays_within_viewport() {
        let html = render(true);
        assert!(html.contains("left-[min(632px,calc(100vw-4rem))]"));
        assert!(html.contains(r#"aria-expanded="true""#));
        assert!(html.contains("Close parameters"));
    }

    #[test]
    fn test_closed_toggle() {
        let html = render(false);
        assert!(html.contains("left-6"));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(html.contains("Open parameters"));
    }
}
