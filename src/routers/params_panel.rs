use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::params_panel::event::ParamsPanelEvent;
use crate::widgets::params_panel::{ParamsPanelCommand, ParamsPanelEffect};

/// Route a panel UI event through the widget reducer.
pub(crate) fn route_event(
    app: &mut App,
    event: ParamsPanelEvent,
) -> Task<AppEvent> {
    let command = map_event_to_command(event);
    route_command(app, command)
}

/// Route a panel command directly.
pub(crate) fn route_command(
    app: &mut App,
    command: ParamsPanelCommand,
) -> Task<AppEvent> {
    app.widgets
        .params_panel
        .reduce(command)
        .map(AppEvent::ParamsPanelEffect)
}

/// Route a panel effect event to app-level tasks.
pub(crate) fn route_effect(
    app: &mut App,
    effect: ParamsPanelEffect,
) -> Task<AppEvent> {
    use ParamsPanelEffect::*;

    match effect {
        // The one cross-widget write path: the committed selection is
        // replaced wholesale by whatever the panel pushed out.
        ApplyStyles(selection) => {
            app.widgets.article.apply_styles(selection);
            Task::none()
        },
        SaveCompleted(selection) => Task::done(AppEvent::ParamsPanelUi(
            ParamsPanelEvent::SaveCompleted(selection),
        )),
        SaveFailed(message) => Task::done(AppEvent::ParamsPanelUi(
            ParamsPanelEvent::SaveFailed(message),
        )),
    }
}

fn map_event_to_command(event: ParamsPanelEvent) -> ParamsPanelCommand {
    use {ParamsPanelCommand as C, ParamsPanelEvent as E};

    match event {
        E::Toggle => C::Toggle,
        E::Dismiss => C::Dismiss,
        E::FontFamilyChanged(option) => C::FontFamilyChanged(option),
        E::FontSizeChanged(option) => C::FontSizeChanged(option),
        E::FontColorChanged(option) => C::FontColorChanged(option),
        E::BackgroundColorChanged(option) => {
            C::BackgroundColorChanged(option)
        },
        E::ContentWidthChanged(option) => C::ContentWidthChanged(option),
        E::Apply => C::Apply,
        E::Reset => C::Reset,
        E::SaveCompleted(selection) => C::SaveCompleted(selection),
        E::SaveFailed(message) => C::SaveFailed(message),
    }
}
