use super::model::{ArticleStyleSelection, StyleOption};

/// Internal commands dispatched to the panel reducer.
#[derive(Debug, Clone)]
pub(crate) enum ParamsPanelCommand {
    /// The arrow toggle was activated.
    Toggle,
    /// A press landed outside the panel subtree while it was open.
    Dismiss,
    /// A new font family was chosen in the form.
    FontFamilyChanged(StyleOption),
    /// A new font size was chosen in the form.
    FontSizeChanged(StyleOption),
    /// A new font color was chosen in the form.
    FontColorChanged(StyleOption),
    /// A new background color was chosen in the form.
    BackgroundColorChanged(StyleOption),
    /// A new content width was chosen in the form.
    ContentWidthChanged(StyleOption),
    /// «Применить»: push the draft to the page and close.
    Apply,
    /// «Сбросить»: restore defaults in both draft and page.
    Reset,
    /// Preference save completed; carries the selection that was written.
    SaveCompleted(ArticleStyleSelection),
    /// Preference save failed.
    SaveFailed(String),
}
