use crate::widgets::params_panel::model::ArticleStyleSelection;

/// Committed style selection: the single source of truth for the styles
/// applied to the rendered article.
#[derive(Debug)]
pub(crate) struct ArticleState {
    committed: ArticleStyleSelection,
}

impl ArticleState {
    /// Create state with the given initial committed selection.
    pub(crate) fn from_selection(selection: ArticleStyleSelection) -> Self {
        Self {
            committed: selection,
        }
    }

    /// Return the committed selection.
    pub(crate) fn committed(&self) -> &ArticleStyleSelection {
        &self.committed
    }

    /// Replace the committed selection wholesale.
    ///
    /// This is the only write path: the committed selection is never
    /// partially updated.
    pub(crate) fn apply(&mut self, selection: ArticleStyleSelection) {
        self.committed = selection;
    }
}

impl Default for ArticleState {
    fn default() -> Self {
        Self::from_selection(ArticleStyleSelection::default())
    }
}

#[cfg(test)]
mod tests {
    use super::ArticleState;
    use crate::widgets::params_panel::model::{
        StyleOption, default_selection,
    };

    #[test]
    fn given_applied_draft_when_read_back_then_committed_equals_draft() {
        let mut state = ArticleState::default();
        let draft = default_selection()
            .with_font_size(StyleOption::new("38px", "38px"))
            .with_background_color(StyleOption::new("#C2E0FF", "Голубой"));

        state.apply(draft.clone());

        assert_eq!(state.committed(), &draft);
    }

    #[test]
    fn given_no_apply_when_draft_changes_elsewhere_then_committed_is_stale() {
        let state = ArticleState::default();

        // The draft living in the panel may change freely; only `apply`
        // moves anything here.
        assert_eq!(
            state.committed().font_size().value(),
            default_selection().font_size().value(),
        );
    }

    #[test]
    fn given_customized_state_when_defaults_applied_then_fully_reverted() {
        let mut state = ArticleState::from_selection(
            default_selection()
                .with_font_color(StyleOption::new("#C2C2C2", "Серый")),
        );

        state.apply(default_selection());

        assert_eq!(state.committed(), &default_selection());
    }
}
