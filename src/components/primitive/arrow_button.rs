use iced::widget::{button, container, svg};
use iced::{Element, Length, alignment};

use crate::icons;
use crate::theme::ThemeProps;

/// UI events emitted by the panel toggle button.
#[derive(Debug, Clone)]
pub(crate) enum ArrowButtonEvent {
    Pressed,
}

/// Props for rendering the panel toggle button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArrowButtonProps<'a> {
    pub(crate) is_open: bool,
    pub(crate) theme: ThemeProps<'a>,
}

const BUTTON_SIZE: f32 = 38.0;
const ICON_SIZE: f32 = 16.0;
const BUTTON_RADIUS: f32 = 19.0;

/// Render the round arrow button that toggles the settings panel.
pub(crate) fn view<'a>(
    props: ArrowButtonProps<'a>,
) -> Element<'a, ArrowButtonEvent> {
    let palette = props.theme.theme.iced_palette();
    let base_color = palette.foreground;
    let hover_color = palette.blue;
    let background = palette.overlay;
    let border_color = palette.dim_white;

    let icon_bytes = if props.is_open {
        icons::ARROW_CLOSE
    } else {
        icons::ARROW_OPEN
    };

    let icon = svg::Svg::new(svg::Handle::from_memory(icon_bytes))
        .width(Length::Fixed(ICON_SIZE))
        .height(Length::Fixed(ICON_SIZE))
        .style(move |_, status| {
            let color = if matches!(status, svg::Status::Hovered) {
                hover_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press(ArrowButtonEvent::Pressed)
        .padding(0.0)
        .width(Length::Fixed(BUTTON_SIZE))
        .height(Length::Fixed(BUTTON_SIZE))
        .style(move |_, _| iced::widget::button::Style {
            background: Some(background.into()),
            border: iced::Border {
                width: 1.0,
                color: border_color,
                radius: iced::border::Radius::from(BUTTON_RADIUS),
            },
            ..Default::default()
        })
        .into()
}
