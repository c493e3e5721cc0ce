pub(crate) mod model;
pub(crate) mod state;
pub(crate) mod view;

use model::{ArticleContent, ArticleStyleVars, ArticleViewModel};
use state::ArticleState;

use crate::widgets::params_panel::model::ArticleStyleSelection;

/// Article widget: owns the committed style selection and the static
/// article content it styles.
pub(crate) struct ArticleWidget {
    state: ArticleState,
    content: ArticleContent,
}

impl ArticleWidget {
    /// Create a widget with the given initial committed selection.
    pub(crate) fn from_selection(selection: ArticleStyleSelection) -> Self {
        Self {
            state: ArticleState::from_selection(selection),
            content: model::article_content(),
        }
    }

    /// Replace the committed selection wholesale and re-derive styles.
    pub(crate) fn apply_styles(&mut self, selection: ArticleStyleSelection) {
        self.state.apply(selection);
    }

    /// Return a read-only view model for the page view.
    pub(crate) fn vm(&self) -> ArticleViewModel<'_> {
        ArticleViewModel {
            content: &self.content,
            vars: ArticleStyleVars::from_selection(self.state.committed()),
        }
    }
}
