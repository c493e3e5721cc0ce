pub(crate) mod command;
mod errors;
pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod storage;
pub(crate) mod view;

pub(crate) use command::ParamsPanelCommand;
pub(crate) use event::{ParamsPanelEffect, ParamsPanelEvent};
use iced::Task;
use model::{ArticleStyleSelection, ParamsPanelViewModel};
use state::ParamsPanelState;

/// Settings panel widget: the open/close state machine plus the draft
/// style selection edited by the form.
pub(crate) struct ParamsPanelWidget {
    state: ParamsPanelState,
}

impl ParamsPanelWidget {
    /// Create a widget seeded from the persisted selection.
    pub(crate) fn load() -> Self {
        Self {
            state: ParamsPanelState::from_selection(
                storage::load_initial_selection(),
            ),
        }
    }

    /// Reduce a command into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        command: ParamsPanelCommand,
    ) -> Task<ParamsPanelEffect> {
        reducer::reduce(&mut self.state, command)
    }

    /// Return a read-only view model for the panel form.
    pub(crate) fn vm(&self) -> ParamsPanelViewModel<'_> {
        ParamsPanelViewModel {
            is_open: self.state.is_open(),
            draft: self.state.draft(),
        }
    }

    /// Return the current draft, used to seed the page at startup.
    pub(crate) fn selection(&self) -> &ArticleStyleSelection {
        self.state.draft()
    }
}
