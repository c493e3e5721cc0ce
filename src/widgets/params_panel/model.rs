use std::fmt;

use serde::{Deserialize, Serialize};

/// Current preferences schema version.
pub(crate) const PREFERENCES_VERSION: u8 = 1;

/// One selectable choice for a style field.
///
/// `value` is the opaque string applied to the page; `label` is the title
/// shown by the controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct StyleOption {
    value: String,
    label: String,
}

impl StyleOption {
    pub(crate) fn new(
        value: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Return the opaque style value.
    pub(crate) fn value(&self) -> &str {
        &self.value
    }

    /// Return the user-facing title.
    pub(crate) fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for StyleOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// The five style choices driving article rendering.
///
/// An immutable value record: transitions replace it wholesale or produce a
/// copy with exactly one field swapped via the `with_*` constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ArticleStyleSelection {
    font_family: StyleOption,
    font_size: StyleOption,
    font_color: StyleOption,
    background_color: StyleOption,
    content_width: StyleOption,
}

impl ArticleStyleSelection {
    pub(crate) fn font_family(&self) -> &StyleOption {
        &self.font_family
    }

    pub(crate) fn font_size(&self) -> &StyleOption {
        &self.font_size
    }

    pub(crate) fn font_color(&self) -> &StyleOption {
        &self.font_color
    }

    pub(crate) fn background_color(&self) -> &StyleOption {
        &self.background_color
    }

    pub(crate) fn content_width(&self) -> &StyleOption {
        &self.content_width
    }

    /// Copy with the font family replaced, other fields untouched.
    pub(crate) fn with_font_family(self, option: StyleOption) -> Self {
        Self {
            font_family: option,
            ..self
        }
    }

    /// Copy with the font size replaced, other fields untouched.
    pub(crate) fn with_font_size(self, option: StyleOption) -> Self {
        Self {
            font_size: option,
            ..self
        }
    }

    /// Copy with the font color replaced, other fields untouched.
    pub(crate) fn with_font_color(self, option: StyleOption) -> Self {
        Self {
            font_color: option,
            ..self
        }
    }

    /// Copy with the background color replaced, other fields untouched.
    pub(crate) fn with_background_color(self, option: StyleOption) -> Self {
        Self {
            background_color: option,
            ..self
        }
    }

    /// Copy with the content width replaced, other fields untouched.
    pub(crate) fn with_content_width(self, option: StyleOption) -> Self {
        Self {
            content_width: option,
            ..self
        }
    }
}

impl Default for ArticleStyleSelection {
    fn default() -> Self {
        default_selection()
    }
}

/// The selection applied on first launch and restored by «Сбросить».
pub(crate) fn default_selection() -> ArticleStyleSelection {
    ArticleStyleSelection {
        font_family: StyleOption::new("Open Sans", "Open Sans"),
        font_size: StyleOption::new("18px", "18px"),
        font_color: StyleOption::new("#000000", "Чёрный"),
        background_color: StyleOption::new("#FFFFFF", "Белый"),
        content_width: StyleOption::new("1394px", "Широкий"),
    }
}

/// Selectable article font families.
pub(crate) fn font_family_options() -> Vec<StyleOption> {
    vec![
        StyleOption::new("Open Sans", "Open Sans"),
        StyleOption::new("Ubuntu", "Ubuntu"),
        StyleOption::new("Cormorant Garamond", "Cormorant Garamond"),
        StyleOption::new("Days One", "Days One"),
        StyleOption::new("Merriweather", "Merriweather"),
    ]
}

/// Selectable article text sizes.
pub(crate) fn font_size_options() -> Vec<StyleOption> {
    vec![
        StyleOption::new("18px", "18px"),
        StyleOption::new("25px", "25px"),
        StyleOption::new("38px", "38px"),
    ]
}

/// Selectable article text colors.
pub(crate) fn font_color_options() -> Vec<StyleOption> {
    vec![
        StyleOption::new("#000000", "Чёрный"),
        StyleOption::new("#FFFFFF", "Белый"),
        StyleOption::new("#C2C2C2", "Серый"),
        StyleOption::new("#FD24AF", "Розовый"),
        StyleOption::new("#2FC4FF", "Голубой"),
    ]
}

/// Selectable page background colors.
pub(crate) fn background_color_options() -> Vec<StyleOption> {
    vec![
        StyleOption::new("#FFFFFF", "Белый"),
        StyleOption::new("#232426", "Тёмный"),
        StyleOption::new("#C2E0FF", "Голубой"),
        StyleOption::new("#C9FFE6", "Зелёный"),
        StyleOption::new("#FFD4E8", "Розовый"),
    ]
}

/// Selectable article column widths.
pub(crate) fn content_width_options() -> Vec<StyleOption> {
    vec![
        StyleOption::new("1394px", "Широкий"),
        StyleOption::new("948px", "Узкий"),
    ]
}

/// Persisted preferences payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PreferencesFile {
    pub(crate) version: u8,
    pub(crate) selection: ArticleStyleSelection,
}

impl Default for PreferencesFile {
    fn default() -> Self {
        Self {
            version: PREFERENCES_VERSION,
            selection: default_selection(),
        }
    }
}

/// Read-only view model for the panel form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ParamsPanelViewModel<'a> {
    pub(crate) is_open: bool,
    pub(crate) draft: &'a ArticleStyleSelection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_selection_when_checked_then_every_field_is_an_option() {
        let selection = default_selection();

        assert!(font_family_options().contains(selection.font_family()));
        assert!(font_size_options().contains(selection.font_size()));
        assert!(font_color_options().contains(selection.font_color()));
        assert!(
            background_color_options().contains(selection.background_color())
        );
        assert!(content_width_options().contains(selection.content_width()));
    }

    #[test]
    fn given_selection_when_one_field_replaced_then_others_are_untouched() {
        let base = default_selection();
        let option = StyleOption::new("25px", "25px");

        let merged = base.clone().with_font_size(option.clone());

        assert_eq!(merged.font_size(), &option);
        assert_eq!(merged.font_family(), base.font_family());
        assert_eq!(merged.font_color(), base.font_color());
        assert_eq!(merged.background_color(), base.background_color());
        assert_eq!(merged.content_width(), base.content_width());
    }

    #[test]
    fn given_option_when_displayed_then_label_is_shown() {
        let option = StyleOption::new("#232426", "Тёмный");
        assert_eq!(option.to_string(), "Тёмный");
    }
}
