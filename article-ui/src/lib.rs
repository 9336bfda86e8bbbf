//! article-ui - Article display parameters sidebar for Dioxus
//!
//! Contains the parameter state types, the sidebar form component and the
//! small widgets it renders with. Hosts pass an `on_apply` handler to
//! [`ArticleParamsForm`] and style their article from the published
//! [`ArticleState`].

pub mod components;
pub mod outside_click;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
pub use stores::*;
