//! State types for the article parameters sidebar
//!
//! Plain data with no Dioxus dependency. Components wrap them in signals.

pub mod article;
pub mod sidebar;

pub use article::*;
pub use sidebar::*;
