//! Close-on-outside-interaction hook
//!
//! While `is_open` is true, a `mousedown` or `focusin` anywhere in the
//! document outside the element with `root_id` calls `on_outside`. The
//! document listeners exist only while open: they are attached when
//! `is_open` turns true and dropped when it turns false or the owning
//! component unmounts.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use dioxus_core::{Runtime, RuntimeGuard};
use tracing::debug;

use crate::wasm_utils::{is_event_outside, DocumentEventListener};

/// Events that count as an interaction
const OUTSIDE_EVENTS: [&str; 2] = ["mousedown", "focusin"];

static ROOT_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// What to do with the document listeners after a state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerChange {
    Attach,
    Detach,
    Keep,
}

impl ListenerChange {
    /// Listeners are attached exactly while open
    pub fn for_state(is_open: bool, attached: bool) -> Self {
        match (is_open, attached) {
            (true, false) => Self::Attach,
            (false, true) => Self::Detach,
            _ => Self::Keep,
        }
    }

    pub fn on_unmount(attached: bool) -> Self {
        if attached {
            Self::Detach
        } else {
            Self::Keep
        }
    }
}

/// Generate a unique element id for an outside-click boundary.
pub fn use_boundary_id(prefix: &'static str) -> String {
    use_hook(|| {
        let id = ROOT_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", prefix, id)
    })
}

/// Call `on_outside` when the user interacts outside `root_id` while open.
pub fn use_outside_click(root_id: String, is_open: Memo<bool>, on_outside: Callback<()>) {
    let mut listeners: Signal<Vec<DocumentEventListener>> = use_signal(Vec::new);

    use_effect(move || {
        let attached = !listeners.peek().is_empty();
        match ListenerChange::for_state(is_open(), attached) {
            ListenerChange::Keep => return,
            ListenerChange::Detach => {
                debug!("Removing outside-click listeners for {}", root_id);
                listeners.write().clear();
                return;
            }
            ListenerChange::Attach => {}
        }

        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            return;
        };

        // Listeners run from wasm-bindgen, outside the Dioxus runtime.
        let runtime = Runtime::current();

        let attached = OUTSIDE_EVENTS
            .iter()
            .map(|&event_name| {
                let document_for_check = document.clone();
                let root_id = root_id.clone();
                let runtime = runtime.clone();
                DocumentEventListener::capture(document.clone(), event_name, move |event| {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    if is_event_outside(&document_for_check, &root_id, &event) {
                        on_outside.call(());
                    }
                })
            })
            .collect::<Vec<_>>();

        debug!("Attached outside-click listeners for {}", root_id);
        listeners.set(attached);
    });

    use_drop(move || {
        let Ok(mut guard) = listeners.try_write() else {
            return;
        };
        if ListenerChange::on_unmount(!guard.is_empty()) == ListenerChange::Detach {
            guard.clear();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_only_when_opening() {
        assert_eq!(ListenerChange::for_state(true, false), ListenerChange::Attach);
        assert_eq!(ListenerChange::for_state(true, true), ListenerChange::Keep);
    }

    #[test]
    fn test_detach_when_closing() {
        assert_eq!(ListenerChange::for_state(false, true), ListenerChange::Detach);
    }

    #[test]
    fn test_closed_without_listeners_is_noop() {
        assert_eq!(ListenerChange::for_state(false, false), ListenerChange::Keep);
    }

    #[test]
    fn test_unmount_detaches_attached_listeners() {
        assert_eq!(ListenerChange::on_unmount(true), ListenerChange::Detach);
        assert_eq!(ListenerChange::on_unmount(false), ListenerChange::Keep);
    }

    #[test]
    fn test_open_close_cycle() {
        let mut attached = false;
        let mut attach_count = 0;
        for is_open in [true, true, false, false, true, false] {
            match ListenerChange::for_state(is_open, attached) {
                ListenerChange::Attach => {
                    attached = true;
                    attach_count += 1;
                }
                ListenerChange::Detach => attached = false,
                ListenerChange::Keep => {}
            }
            assert_eq!(attached, is_open);
        }
        assert_eq!(attach_count, 2);
    }
}
