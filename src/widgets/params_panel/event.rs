use super::model::{ArticleStyleSelection, StyleOption};

/// UI events emitted by the panel presentation layer.
#[derive(Debug, Clone)]
pub(crate) enum ParamsPanelEvent {
    /// The arrow toggle was activated.
    Toggle,
    /// A press landed on the dismiss layer.
    Dismiss,
    /// A new font family was chosen.
    FontFamilyChanged(StyleOption),
    /// A new font size was chosen.
    FontSizeChanged(StyleOption),
    /// A new font color was chosen.
    FontColorChanged(StyleOption),
    /// A new background color was chosen.
    BackgroundColorChanged(StyleOption),
    /// A new content width was chosen.
    ContentWidthChanged(StyleOption),
    /// «Применить» was pressed.
    Apply,
    /// «Сбросить» was pressed.
    Reset,
    /// Preference save completed.
    SaveCompleted(ArticleStyleSelection),
    /// Preference save failed.
    SaveFailed(String),
}

/// Effect events produced by the panel reducer, routed outward.
#[derive(Debug, Clone)]
pub(crate) enum ParamsPanelEffect {
    /// Request the page to replace its committed selection wholesale.
    ApplyStyles(ArticleStyleSelection),
    /// A preference save completed.
    SaveCompleted(ArticleStyleSelection),
    /// A preference save failed.
    SaveFailed(String),
}
