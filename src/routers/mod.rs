use iced::Task;

use crate::app::{App, AppEvent};

pub(crate) mod params_panel;

/// Route each app event to its owning router or handler.
pub(crate) fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Params panel widget
        AppEvent::ParamsPanelUi(event) => {
            params_panel::route_event(app, event)
        },
        AppEvent::ParamsPanelEffect(effect) => {
            params_panel::route_effect(app, effect)
        },
        // Direct operations
        AppEvent::Window(iced::window::Event::Resized(size)) => {
            app.state.set_window_size(size);
            Task::none()
        },
        AppEvent::Window(_) => Task::none(),
    }
}
