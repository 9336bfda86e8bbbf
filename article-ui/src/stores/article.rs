//! Article display parameters
//!
//! Holds the fixed option tables for the five article parameters, the
//! [`ArticleState`] record the sidebar form edits, and [`ParamsForm`], the
//! draft that is published to the host on apply or reset.

use std::fmt;
use std::hash::{Hash, Hasher};

use thiserror::Error;

/// A selectable value for one article parameter.
///
/// Two options are equal when their ids match.
#[derive(Debug, Clone, Copy, Eq)]
pub struct OptionValue {
    /// Stable identifier
    pub id: &'static str,
    /// Label shown in the form
    pub title: &'static str,
    /// CSS value the host applies
    pub value: &'static str,
    /// Style-class token (set for font families and font sizes)
    pub class_name: Option<&'static str>,
}

impl OptionValue {
    const fn new(id: &'static str, title: &'static str, value: &'static str) -> Self {
        Self {
            id,
            title,
            value,
            class_name: None,
        }
    }

    const fn with_class(mut self, class_name: &'static str) -> Self {
        self.class_name = Some(class_name);
        self
    }
}

impl PartialEq for OptionValue {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Hash for OptionValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

// =============================================================================
// Option tables
// =============================================================================

const OPEN_SANS: OptionValue =
    OptionValue::new("Open Sans", "Open Sans", "'Open Sans', sans-serif").with_class("open-sans");
const FONT_SIZE_18: OptionValue = OptionValue::new("18", "18px", "18px").with_class("font-size-18");
const FONT_BLACK: OptionValue = OptionValue::new("black", "Black", "#000000");
const BACKGROUND_WHITE: OptionValue = OptionValue::new("white", "White", "#FFFFFF");
const WIDTH_NARROW: OptionValue = OptionValue::new("800px", "Narrow", "800px");

pub const FONT_FAMILY_OPTIONS: &[OptionValue] = &[
    OPEN_SANS,
    OptionValue::new("Ubuntu", "Ubuntu", "'Ubuntu', sans-serif").with_class("ubuntu"),
    OptionValue::new(
        "Cormorant Garamond",
        "Cormorant Garamond",
        "'Cormorant Garamond', serif",
    )
    .with_class("cormorant-garamond"),
    OptionValue::new("Days One", "Days One", "'Days One', sans-serif").with_class("days-one"),
    OptionValue::new("Merriweather", "Merriweather", "'Merriweather', serif")
        .with_class("merriweather"),
    OptionValue::new("Roboto Mono", "Roboto Mono", "'Roboto Mono', monospace")
        .with_class("roboto-mono"),
];

pub const FONT_SIZE_OPTIONS: &[OptionValue] = &[
    FONT_SIZE_18,
    OptionValue::new("25", "25px", "25px").with_class("font-size-25"),
    OptionValue::new("38", "38px", "38px").with_class("font-size-38"),
];

pub const FONT_COLOR_OPTIONS: &[OptionValue] = &[
    FONT_BLACK,
    OptionValue::new("white", "White", "#FFFFFF"),
    OptionValue::new("gray", "Gray", "#C4C4C4"),
    OptionValue::new("pink", "Pink", "#FEAFE8"),
    OptionValue::new("fuchsia", "Fuchsia", "#FD24AF"),
    OptionValue::new("yellow", "Yellow", "#FFC802"),
    OptionValue::new("green", "Green", "#80D994"),
    OptionValue::new("blue", "Blue", "#6FC1FD"),
    OptionValue::new("purple", "Purple", "#5F00C7"),
];

pub const BACKGROUND_COLOR_OPTIONS: &[OptionValue] = &[
    BACKGROUND_WHITE,
    OptionValue::new("black", "Black", "#000000"),
    OptionValue::new("gray", "Gray", "#C4C4C4"),
    OptionValue::new("pink", "Pink", "#FEAFE8"),
    OptionValue::new("fuchsia", "Fuchsia", "#FD24AF"),
    OptionValue::new("yellow", "Yellow", "#FFC802"),
    OptionValue::new("green", "Green", "#80D994"),
    OptionValue::new("blue", "Blue", "#6FC1FD"),
    OptionValue::new("purple", "Purple", "#5F00C7"),
];

pub const CONTENT_WIDTH_OPTIONS: &[OptionValue] = &[
    WIDTH_NARROW,
    OptionValue::new("1394px", "Wide", "1394px"),
];

// =============================================================================
// Fields
// =============================================================================

/// One of the five article parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleField {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl ArticleField {
    pub const ALL: [ArticleField; 5] = [
        Self::FontFamily,
        Self::FontSize,
        Self::FontColor,
        Self::BackgroundColor,
        Self::ContentWidth,
    ];

    /// The fixed option set for this field
    pub fn options(self) -> &'static [OptionValue] {
        match self {
            Self::FontFamily => FONT_FAMILY_OPTIONS,
            Self::FontSize => FONT_SIZE_OPTIONS,
            Self::FontColor => FONT_COLOR_OPTIONS,
            Self::BackgroundColor => BACKGROUND_COLOR_OPTIONS,
            Self::ContentWidth => CONTENT_WIDTH_OPTIONS,
        }
    }

    /// Title shown above the field's control
    pub fn title(self) -> &'static str {
        match self {
            Self::FontFamily => "Font",
            Self::FontSize => "Font size",
            Self::FontColor => "Font color",
            Self::BackgroundColor => "Background color",
            Self::ContentWidth => "Content width",
        }
    }

    /// CSS custom property the host sets from this field
    pub fn css_var(self) -> &'static str {
        match self {
            Self::FontFamily => "--font-family",
            Self::FontSize => "--font-size",
            Self::FontColor => "--font-color",
            Self::BackgroundColor => "--bg-color",
            Self::ContentWidth => "--container-width",
        }
    }

    pub fn contains(self, option: &OptionValue) -> bool {
        self.options().iter().any(|o| o == option)
    }

    /// Look up an option in this field's set by id.
    pub fn option_by_id(self, id: &str) -> Result<&'static OptionValue, ArticleParamsError> {
        self.options()
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| ArticleParamsError::UnknownOption {
                field: self,
                id: id.to_string(),
            })
    }
}

impl fmt::Display for ArticleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArticleParamsError {
    #[error("'{id}' is not a {field} option")]
    UnknownOption { field: ArticleField, id: String },
}

// =============================================================================
// State
// =============================================================================

/// The five article parameters.
///
/// Every field always holds a member of that field's option set: the only
/// way to change one is [`ArticleState::with_option`], which checks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleState {
    font_family: &'static OptionValue,
    font_size: &'static OptionValue,
    font_color: &'static OptionValue,
    background_color: &'static OptionValue,
    content_width: &'static OptionValue,
}

impl ArticleState {
    pub const DEFAULT: ArticleState = ArticleState {
        font_family: &OPEN_SANS,
        font_size: &FONT_SIZE_18,
        font_color: &FONT_BLACK,
        background_color: &BACKGROUND_WHITE,
        content_width: &WIDTH_NARROW,
    };

    pub fn font_family(&self) -> &'static OptionValue {
        self.font_family
    }

    pub fn font_size(&self) -> &'static OptionValue {
        self.font_size
    }

    pub fn font_color(&self) -> &'static OptionValue {
        self.font_color
    }

    pub fn background_color(&self) -> &'static OptionValue {
        self.background_color
    }

    pub fn content_width(&self) -> &'static OptionValue {
        self.content_width
    }

    pub fn get(&self, field: ArticleField) -> &'static OptionValue {
        match field {
            ArticleField::FontFamily => self.font_family,
            ArticleField::FontSize => self.font_size,
            ArticleField::FontColor => self.font_color,
            ArticleField::BackgroundColor => self.background_color,
            ArticleField::ContentWidth => self.content_width,
        }
    }

    /// Returns a copy with `field` replaced by `option`.
    ///
    /// Fails if `option` is not in the field's option set.
    pub fn with_option(
        mut self,
        field: ArticleField,
        option: &'static OptionValue,
    ) -> Result<Self, ArticleParamsError> {
        if !field.contains(option) {
            return Err(ArticleParamsError::UnknownOption {
                field,
                id: option.id.to_string(),
            });
        }

        let slot = match field {
            ArticleField::FontFamily => &mut self.font_family,
            ArticleField::FontSize => &mut self.font_size,
            ArticleField::FontColor => &mut self.font_color,
            ArticleField::BackgroundColor => &mut self.background_color,
            ArticleField::ContentWidth => &mut self.content_width,
        };
        *slot = option;
        Ok(self)
    }

    /// Inline style declaring one CSS custom property per field
    pub fn css_vars(&self) -> String {
        ArticleField::ALL
            .iter()
            .map(|field| format!("{}: {};", field.css_var(), self.get(*field).value))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for ArticleState {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// =============================================================================
// Form draft
// =============================================================================

/// Local draft edited by the sidebar form.
///
/// Edits stay local until [`submit`](Self::submit) or [`reset`](Self::reset)
/// returns a snapshot for the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamsForm {
    draft: ArticleState,
}

impl ParamsForm {
    pub fn draft(&self) -> ArticleState {
        self.draft
    }

    /// Replace one field of the draft. On error the draft is unchanged.
    pub fn select(
        &mut self,
        field: ArticleField,
        option: &'static OptionValue,
    ) -> Result<(), ArticleParamsError> {
        self.draft = self.draft.with_option(field, option)?;
        Ok(())
    }

    /// Snapshot to publish on apply
    pub fn submit(&self) -> ArticleState {
        self.draft
    }

    /// Revert the draft to the defaults and return them for publishing
    pub fn reset(&mut self) -> ArticleState {
        self.draft = ArticleState::DEFAULT;
        self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn last_option(field: ArticleField) -> &'static OptionValue {
        field.options().last().unwrap()
    }

    #[test]
    fn test_default_values() {
        let state = ArticleState::default();
        assert_eq!(state.font_family().id, "Open Sans");
        assert_eq!(state.font_size().id, "18");
        assert_eq!(state.font_color().id, "black");
        assert_eq!(state.background_color().id, "white");
        assert_eq!(state.content_width().id, "800px");
    }

    #[test]
    fn test_defaults_belong_to_their_option_sets() {
        for field in ArticleField::ALL {
            assert!(field.contains(ArticleState::DEFAULT.get(field)), "{field}");
        }
    }

    #[test]
    fn test_option_ids_unique_per_field() {
        for field in ArticleField::ALL {
            let ids: HashSet<_> = field.options().iter().map(|o| o.id).collect();
            assert_eq!(ids.len(), field.options().len(), "{field}");
        }
    }

    #[test]
    fn test_font_sizes_carry_class_tokens() {
        for option in FONT_SIZE_OPTIONS {
            let class_name = option.class_name.unwrap();
            assert_eq!(class_name, format!("font-size-{}", option.id));
        }
    }

    #[test]
    fn test_option_equality_is_by_id() {
        let a = OptionValue::new("gray", "Gray", "#C4C4C4");
        let b = OptionValue::new("gray", "Grey", "#999999");
        assert_eq!(a, b);
        assert_ne!(a, OptionValue::new("blue", "Gray", "#C4C4C4"));
    }

    #[test]
    fn test_with_option_changes_only_that_field() {
        for field in ArticleField::ALL {
            for option in field.options() {
                let state = ArticleState::DEFAULT.with_option(field, option).unwrap();
                assert_eq!(state.get(field), option);
                for other in ArticleField::ALL.into_iter().filter(|f| *f != field) {
                    assert_eq!(state.get(other), ArticleState::DEFAULT.get(other));
                }
            }
        }
    }

    #[test]
    fn test_with_option_rejects_option_from_another_field() {
        let wide = CONTENT_WIDTH_OPTIONS.iter().find(|o| o.id == "1394px").unwrap();
        let err = ArticleState::DEFAULT
            .with_option(ArticleField::FontColor, wide)
            .unwrap_err();
        assert_eq!(
            err,
            ArticleParamsError::UnknownOption {
                field: ArticleField::FontColor,
                id: "1394px".to_string(),
            }
        );
    }

    #[test]
    fn test_option_by_id() {
        let mono = ArticleField::FontFamily.option_by_id("Roboto Mono").unwrap();
        assert_eq!(mono.title, "Roboto Mono");

        let err = ArticleField::FontSize.option_by_id("99").unwrap_err();
        assert_eq!(err.to_string(), "'99' is not a Font size option");
    }

    #[test]
    fn test_css_vars() {
        let css = ArticleState::DEFAULT.css_vars();
        assert_eq!(
            css,
            "--font-family: 'Open Sans', sans-serif; --font-size: 18px; \
             --font-color: #000000; --bg-color: #FFFFFF; --container-width: 800px;"
        );
    }

    #[test]
    fn test_select_keeps_draft_on_error() {
        let mut form = ParamsForm::default();
        let purple = last_option(ArticleField::BackgroundColor);
        form.select(ArticleField::BackgroundColor, purple).unwrap();

        let roboto = last_option(ArticleField::FontFamily);
        assert!(form.select(ArticleField::ContentWidth, roboto).is_err());
        assert_eq!(form.draft().background_color(), purple);
        assert_eq!(form.draft().content_width().id, "800px");
    }

    #[test]
    fn test_submit_publishes_current_draft() {
        let mut form = ParamsForm::default();
        for field in ArticleField::ALL {
            form.select(field, last_option(field)).unwrap();
        }

        let snapshot = form.submit();
        assert_eq!(snapshot, form.draft());
        for field in ArticleField::ALL {
            assert_eq!(snapshot.get(field), last_option(field));
        }
    }

    #[test]
    fn test_reset_publishes_defaults_and_clears_draft() {
        let mut form = ParamsForm::default();
        for field in ArticleField::ALL {
            form.select(field, last_option(field)).unwrap();
        }

        let snapshot = form.reset();
        assert_eq!(snapshot, ArticleState::DEFAULT);
        assert_eq!(form.draft(), ArticleState::DEFAULT);

        // Resetting an untouched draft is the same
        assert_eq!(ParamsForm::default().reset(), ArticleState::DEFAULT);
    }

    #[test]
    fn test_apply_then_reset_scenario() {
        let mut published = Vec::new();
        let mut form = ParamsForm::default();

        let mono = ArticleField::FontFamily.option_by_id("Roboto Mono").unwrap();
        form.select(ArticleField::FontFamily, mono).unwrap();
        published.push(form.submit());

        published.push(form.reset());

        let expected_apply = ArticleState::DEFAULT
            .with_option(ArticleField::FontFamily, mono)
            .unwrap();
        assert_eq!(published, vec![expected_apply, ArticleState::DEFAULT]);
        assert_eq!(published[0].font_family().id, "Roboto Mono");
        assert_eq!(published[0].font_size().id, "18");
        assert_eq!(published[0].content_width().id, "800px");
        assert_eq!(form.draft(), ArticleState::DEFAULT);
    }
}
