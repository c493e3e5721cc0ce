#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use iced::{Element, Size, Subscription, Task, Theme};

use crate::state::State;
use crate::theme::ThemeManager;
use crate::widgets::article::ArticleWidget;
use crate::widgets::params_panel::{
    ParamsPanelEffect, ParamsPanelEvent, ParamsPanelWidget,
};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// App-wide events that drive the root update loop.
#[derive(Clone)]
pub(crate) enum AppEvent {
    // Params panel widget
    ParamsPanelUi(ParamsPanelEvent),
    ParamsPanelEffect(ParamsPanelEffect),
    // Direct operations
    Window(iced::window::Event),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) article: ArticleWidget,
    pub(crate) params_panel: ParamsPanelWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) state: State,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let params_panel = ParamsPanelWidget::load();
        // Draft and committed selections start equal: both seed from the
        // persisted selection (or the defaults).
        let article =
            ArticleWidget::from_selection(params_panel.selection().clone());

        let window_size = Size {
            width: MIN_WINDOW_WIDTH,
            height: MIN_WINDOW_HEIGHT,
        };

        let app = App {
            theme_manager: ThemeManager::new(),
            state: State::new(window_size),
            widgets: Widgets {
                article,
                params_panel,
            },
        };

        (app, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Gazeta")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
