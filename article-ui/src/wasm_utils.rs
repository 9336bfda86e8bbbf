//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A JavaScript listener backed by a `Closure` has to outlive its
//! registration. `closure.forget()` satisfies that by leaking the closure and
//! leaving the listener attached for good.
//!
//! Instead the closure lives in a guard whose `Drop` removes the listener, so
//! the registration follows Rust ownership:
//!
//! ```ignore
//! // Listener is attached when the guard is created
//! let listener = DocumentEventListener::capture(document, "mousedown", callback);
//!
//! // ...and removed when it is dropped
//! drop(listener);
//! ```
//!
//! Kept in a `Signal<Vec<DocumentEventListener>>`, clearing the vec removes
//! every listener it holds.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// A document event listener that removes itself when dropped.
pub struct DocumentEventListener {
    document: web_sys::Document,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl DocumentEventListener {
    /// Attaches a capture-phase listener to the document.
    ///
    /// Capture phase sees the event before any handler inside the page can
    /// stop its propagation.
    pub fn capture(
        document: web_sys::Document,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        if let Err(err) = document.add_event_listener_with_callback_and_bool(
            event_name,
            callback.as_ref().unchecked_ref(),
            true,
        ) {
            tracing::warn!("Failed to add document {} listener: {:?}", event_name, err);
        }

        Self {
            document,
            event_name,
            callback,
        }
    }
}

impl Drop for DocumentEventListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback_and_bool(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
            true,
        );
    }
}

/// Whether `event`'s target lies outside the element with id `root_id`.
///
/// Returns false when the root element is gone (e.g. after unmount) or the
/// event has no node target, so such events are ignored.
pub fn is_event_outside(document: &web_sys::Document, root_id: &str, event: &JsValue) -> bool {
    let root = document.get_element_by_id(root_id);
    let target = event
        .dyn_ref::<web_sys::Event>()
        .and_then(|event| event.target())
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok());

    let root_contains_target = match (root, target) {
        (Some(root), Some(node)) => Some(root.contains(Some(&node))),
        _ => None,
    };
    lands_outside(root_contains_target)
}

/// `root_contains_target` is `None` when the root or the target node could
/// not be resolved.
pub fn lands_outside(root_contains_target: Option<bool>) -> bool {
    root_contains_target == Some(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_outside_root() {
        assert!(lands_outside(Some(false)));
    }

    #[test]
    fn test_target_inside_root() {
        assert!(!lands_outside(Some(true)));
    }

    #[test]
    fn test_missing_root_or_target_is_ignored() {
        assert!(!lands_outside(None));
    }
}
