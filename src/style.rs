use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, container};

use crate::theme::{IcedColorPalette, ThemeProps};

/// Surface style for the slide-out settings panel.
pub(crate) fn panel_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&iced::Theme) -> container::Style + 'static {
    let palette = theme.theme.iced_palette().clone();
    move |_theme: &iced::Theme| container::Style {
        background: Some(palette.overlay.into()),
        text_color: Some(palette.foreground),
        border: iced::Border {
            width: 1.0,
            color: palette.dim_white,
            radius: iced::border::Radius::from(0.0),
        },
        ..Default::default()
    }
}

/// Visual variants for the panel action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActionVariant {
    /// Filled accent button («Применить»).
    Apply,
    /// Borderless clear button («Сбросить»).
    Clear,
}

pub(crate) fn action_button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    variant: ActionVariant,
) -> button::Style {
    let hovered =
        matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed);

    let (background, text_color): (Option<iced::Background>, iced::Color) =
        match variant {
            ActionVariant::Apply => {
                let mut base = palette.blue;
                if hovered {
                    base.a = 0.85;
                }
                (Some(base.into()), palette.background)
            },
            ActionVariant::Clear => {
                let background = hovered.then(|| {
                    let mut color = palette.dim_white;
                    color.a = 0.5;
                    color.into()
                });
                (background, palette.foreground)
            },
        };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            width: 0.0,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for one segment of the font-size selector row.
pub(crate) fn segment_button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    selected: bool,
) -> button::Style {
    let hovered =
        matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed);

    let background = if selected {
        Some(palette.foreground.into())
    } else if hovered {
        let mut color = palette.dim_white;
        color.a = 0.5;
        Some(color.into())
    } else {
        None
    };

    let text_color = if selected {
        palette.background
    } else {
        palette.foreground
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            width: 1.0,
            color: palette.dim_white,
            radius: iced::border::Radius::from(2.0),
        },
        ..Default::default()
    }
}
