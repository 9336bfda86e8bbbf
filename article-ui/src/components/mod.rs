//! Sidebar form and the presentational widgets it is built from

pub mod arrow_button;
pub mod article_params_form;
pub mod button;
pub mod icons;
pub mod radio_group;
pub mod select;
pub mod separator;
pub mod text;

pub use arrow_button::ArrowButton;
pub use article_params_form::ArticleParamsForm;
pub use button::{Button, ButtonType, ButtonVariant, ChromelessButton};
pub use icons::{ArrowDirection, ArrowIcon, CheckIcon, ChevronDownIcon};
pub use radio_group::RadioGroup;
pub use select::Select;
pub use separator::Separator;
pub use text::{Text, TextAlign, TextTag};
