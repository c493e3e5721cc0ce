use super::model::{ArticleStyleSelection, StyleOption, default_selection};

/// Visibility and draft state for the settings panel.
///
/// The two pieces are independent: visibility transitions never touch the
/// draft, and draft edits never touch visibility.
#[derive(Debug)]
pub(crate) struct ParamsPanelState {
    open: bool,
    draft: ArticleStyleSelection,
}

impl ParamsPanelState {
    /// Create state with the given initial draft; the panel starts closed.
    pub(crate) fn from_selection(selection: ArticleStyleSelection) -> Self {
        Self {
            open: false,
            draft: selection,
        }
    }

    /// Return whether the panel is currently open.
    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    /// Return the editable draft selection.
    pub(crate) fn draft(&self) -> &ArticleStyleSelection {
        &self.draft
    }

    /// Flip visibility.
    pub(crate) fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the panel.
    pub(crate) fn close(&mut self) {
        self.open = false;
    }

    /// Close after a press outside the panel subtree.
    ///
    /// A no-op while already closed: the dismiss layer is unmounted then,
    /// but a stale press delivered across the transition must not act.
    pub(crate) fn dismiss(&mut self) {
        if self.open {
            self.open = false;
        }
    }

    /// Overwrite the draft with the default selection.
    pub(crate) fn reset_draft(&mut self) {
        self.draft = default_selection();
    }

    /// Merge a newly chosen font family into the draft.
    pub(crate) fn set_font_family(&mut self, option: StyleOption) {
        self.draft = self.draft.clone().with_font_family(option);
    }

    /// Merge a newly chosen font size into the draft.
    pub(crate) fn set_font_size(&mut self, option: StyleOption) {
        self.draft = self.draft.clone().with_font_size(option);
    }

    /// Merge a newly chosen font color into the draft.
    pub(crate) fn set_font_color(&mut self, option: StyleOption) {
        self.draft = self.draft.clone().with_font_color(option);
    }

    /// Merge a newly chosen background color into the draft.
    pub(crate) fn set_background_color(&mut self, option: StyleOption) {
        self.draft = self.draft.clone().with_background_color(option);
    }

    /// Merge a newly chosen content width into the draft.
    pub(crate) fn set_content_width(&mut self, option: StyleOption) {
        self.draft = self.draft.clone().with_content_width(option);
    }
}

impl Default for ParamsPanelState {
    fn default() -> Self {
        Self::from_selection(default_selection())
    }
}

#[cfg(test)]
mod tests {
    use super::ParamsPanelState;
    use crate::widgets::params_panel::model::{
        StyleOption, default_selection,
    };

    #[test]
    fn given_new_state_when_created_then_closed_with_default_draft() {
        let state = ParamsPanelState::default();

        assert!(!state.is_open());
        assert_eq!(state.draft(), &default_selection());
    }

    #[test]
    fn given_field_changes_when_applied_in_order_then_last_choice_wins() {
        let mut state = ParamsPanelState::default();

        state.set_font_size(StyleOption::new("25px", "25px"));
        state.set_background_color(StyleOption::new("#232426", "Тёмный"));
        state.set_font_size(StyleOption::new("38px", "38px"));

        let expected = default_selection()
            .with_font_size(StyleOption::new("38px", "38px"))
            .with_background_color(StyleOption::new("#232426", "Тёмный"));
        assert_eq!(state.draft(), &expected);
    }

    #[test]
    fn given_open_panel_when_toggled_then_draft_is_untouched() {
        let mut state = ParamsPanelState::default();
        state.set_font_color(StyleOption::new("#FD24AF", "Розовый"));
        let draft_before = state.draft().clone();

        state.toggle();
        assert!(state.is_open());
        state.toggle();
        assert!(!state.is_open());

        assert_eq!(state.draft(), &draft_before);
    }

    #[test]
    fn given_closed_panel_when_dismissed_then_nothing_changes() {
        let mut state = ParamsPanelState::default();
        let draft_before = state.draft().clone();

        state.dismiss();

        assert!(!state.is_open());
        assert_eq!(state.draft(), &draft_before);
    }

    #[test]
    fn given_edited_draft_when_reset_then_draft_matches_defaults() {
        let mut state = ParamsPanelState::default();
        state.set_font_family(StyleOption::new("Ubuntu", "Ubuntu"));
        state.set_content_width(StyleOption::new("948px", "Узкий"));

        state.reset_draft();

        assert_eq!(state.draft(), &default_selection());
    }
}
