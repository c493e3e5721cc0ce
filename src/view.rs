use iced::widget::{Space, Stack, container, mouse_area, row};
use iced::{Element, Length, Theme, alignment};

use super::{App, AppEvent};
use crate::components::primitive::arrow_button;
use crate::layout::{self, PANEL_WIDTH};
use crate::style;
use crate::theme::ThemeProps;
use crate::widgets::article::view::page;
use crate::widgets::params_panel::ParamsPanelEvent;
use crate::widgets::params_panel::view::panel_form;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let theme_props = ThemeProps::new(theme);

    let article_vm = app.widgets.article.vm();
    let column_width = layout::content_column_width(
        app.state.window_size,
        article_vm.vars.content_width,
    );

    let page = page::view(page::PageProps {
        vm: article_vm,
        column_width,
    });

    let overlay = if app.widgets.params_panel.vm().is_open {
        view_panel_overlay(app, theme_props)
    } else {
        view_arrow_layer(theme_props)
    };

    let layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![page, overlay.map(AppEvent::ParamsPanelUi)];

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the open panel above its dismiss layer.
///
/// The dismiss layer exists only while the panel is open; the panel and its
/// arrow sit above it, so presses inside the panel subtree never reach it.
fn view_panel_overlay<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, ParamsPanelEvent, Theme, iced::Renderer> {
    let dismiss_layer = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(ParamsPanelEvent::Dismiss)
    .on_right_press(ParamsPanelEvent::Dismiss);

    let form = panel_form::view(panel_form::PanelFormProps {
        vm: app.widgets.params_panel.vm(),
        theme: theme_props,
    });

    let panel = container(form)
        .width(Length::Fixed(PANEL_WIDTH))
        .height(Length::Fill)
        .clip(true)
        .style(style::panel_style(theme_props));

    let panel_row = row![panel, arrow_column(true, theme_props)]
        .width(Length::Shrink)
        .height(Length::Fill);

    iced::widget::stack!(dismiss_layer, panel_row)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render only the arrow toggle while the panel is closed.
fn view_arrow_layer<'a>(
    theme_props: ThemeProps<'a>,
) -> Element<'a, ParamsPanelEvent, Theme, iced::Renderer> {
    arrow_column(false, theme_props)
}

/// The vertically centered arrow toggle at the panel edge.
fn arrow_column<'a>(
    is_open: bool,
    theme_props: ThemeProps<'a>,
) -> Element<'a, ParamsPanelEvent, Theme, iced::Renderer> {
    let arrow = arrow_button::view(arrow_button::ArrowButtonProps {
        is_open,
        theme: theme_props,
    })
    .map(|event| match event {
        arrow_button::ArrowButtonEvent::Pressed => ParamsPanelEvent::Toggle,
    });

    container(arrow)
        .width(Length::Shrink)
        .height(Length::Fill)
        .padding([0.0, 8.0])
        .align_y(alignment::Vertical::Center)
        .into()
}
