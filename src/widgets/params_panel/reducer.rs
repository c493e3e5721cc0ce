use iced::Task;

use super::command::ParamsPanelCommand;
use super::event::ParamsPanelEffect;
use super::model::ArticleStyleSelection;
use super::state::ParamsPanelState;
use super::storage::save_preferences;

/// Reduce a panel command into state updates and effect tasks.
pub(crate) fn reduce(
    state: &mut ParamsPanelState,
    command: ParamsPanelCommand,
) -> Task<ParamsPanelEffect> {
    match command {
        ParamsPanelCommand::Toggle => {
            state.toggle();
            Task::none()
        },
        ParamsPanelCommand::Dismiss => {
            state.dismiss();
            Task::none()
        },
        ParamsPanelCommand::FontFamilyChanged(option) => {
            state.set_font_family(option);
            Task::none()
        },
        ParamsPanelCommand::FontSizeChanged(option) => {
            state.set_font_size(option);
            Task::none()
        },
        ParamsPanelCommand::FontColorChanged(option) => {
            state.set_font_color(option);
            Task::none()
        },
        ParamsPanelCommand::BackgroundColorChanged(option) => {
            state.set_background_color(option);
            Task::none()
        },
        ParamsPanelCommand::ContentWidthChanged(option) => {
            state.set_content_width(option);
            Task::none()
        },
        ParamsPanelCommand::Apply => {
            state.close();
            push_and_persist(state.draft().clone())
        },
        // Reset rewrites the draft AND the committed selection, while
        // visibility stays as it is.
        ParamsPanelCommand::Reset => {
            state.reset_draft();
            push_and_persist(state.draft().clone())
        },
        ParamsPanelCommand::SaveCompleted(_) => Task::none(),
        ParamsPanelCommand::SaveFailed(message) => {
            log::warn!("preferences save failed: {message}");
            Task::none()
        },
    }
}

/// Emit the selection to the page and schedule its save.
fn push_and_persist(
    selection: ArticleStyleSelection,
) -> Task<ParamsPanelEffect> {
    Task::batch([
        Task::done(ParamsPanelEffect::ApplyStyles(selection.clone())),
        request_save_preferences(selection),
    ])
}

fn request_save_preferences(
    selection: ArticleStyleSelection,
) -> Task<ParamsPanelEffect> {
    Task::perform(
        async move {
            match save_preferences(&selection) {
                Ok(()) => Ok(selection),
                Err(err) => Err(format!("{err}")),
            }
        },
        |result| match result {
            Ok(selection) => ParamsPanelEffect::SaveCompleted(selection),
            Err(message) => ParamsPanelEffect::SaveFailed(message),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::params_panel::model::{
        StyleOption, default_selection,
    };

    fn default_state() -> ParamsPanelState {
        ParamsPanelState::default()
    }

    #[test]
    fn given_closed_panel_when_toggled_twice_then_closed_and_draft_intact() {
        let mut state = default_state();

        let _task = reduce(&mut state, ParamsPanelCommand::Toggle);
        assert!(state.is_open());
        let _task = reduce(&mut state, ParamsPanelCommand::Toggle);

        assert!(!state.is_open());
        assert_eq!(state.draft(), &default_selection());
    }

    #[test]
    fn given_open_panel_when_field_changed_then_visibility_is_unaffected() {
        let mut state = default_state();
        let _task = reduce(&mut state, ParamsPanelCommand::Toggle);

        let _task = reduce(
            &mut state,
            ParamsPanelCommand::FontSizeChanged(StyleOption::new(
                "25px", "25px",
            )),
        );

        assert!(state.is_open());
        assert_eq!(state.draft().font_size().value(), "25px");
    }

    #[test]
    fn given_open_panel_when_applied_then_panel_closes_with_draft_kept() {
        let mut state = default_state();
        let _task = reduce(&mut state, ParamsPanelCommand::Toggle);
        let _task = reduce(
            &mut state,
            ParamsPanelCommand::ContentWidthChanged(StyleOption::new(
                "948px", "Узкий",
            )),
        );

        let _task = reduce(&mut state, ParamsPanelCommand::Apply);

        assert!(!state.is_open());
        assert_eq!(state.draft().content_width().value(), "948px");
    }

    #[test]
    fn given_open_panel_when_reset_then_draft_defaults_and_stays_open() {
        let mut state = default_state();
        let _task = reduce(&mut state, ParamsPanelCommand::Toggle);
        let _task = reduce(
            &mut state,
            ParamsPanelCommand::BackgroundColorChanged(StyleOption::new(
                "#232426", "Тёмный",
            )),
        );

        let _task = reduce(&mut state, ParamsPanelCommand::Reset);

        assert!(state.is_open());
        assert_eq!(state.draft(), &default_selection());
    }

    #[test]
    fn given_open_panel_when_dismissed_then_closes_and_keeps_edits() {
        let mut state = default_state();
        let _task = reduce(&mut state, ParamsPanelCommand::Toggle);
        let changed = StyleOption::new("25px", "25px");
        let _task = reduce(
            &mut state,
            ParamsPanelCommand::FontSizeChanged(changed.clone()),
        );

        let _task = reduce(&mut state, ParamsPanelCommand::Dismiss);

        assert!(!state.is_open());
        assert_eq!(state.draft().font_size(), &changed);
    }

    #[test]
    fn given_closed_panel_when_dismissed_then_nothing_changes() {
        let mut state = default_state();

        let _task = reduce(&mut state, ParamsPanelCommand::Dismiss);

        assert!(!state.is_open());
        assert_eq!(state.draft(), &default_selection());
    }

    #[test]
    fn given_save_failed_when_reduced_then_state_is_untouched() {
        let mut state = default_state();
        let _task = reduce(&mut state, ParamsPanelCommand::Toggle);
        let draft_before = state.draft().clone();

        let _task = reduce(
            &mut state,
            ParamsPanelCommand::SaveFailed(String::from("disk full")),
        );

        assert!(state.is_open());
        assert_eq!(state.draft(), &draft_before);
    }
}
