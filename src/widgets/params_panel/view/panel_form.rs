use iced::widget::text::Wrapping;
use iced::widget::{
    Space, button, column, container, pick_list, row, scrollable, text,
};
use iced::{Element, Length, Theme, alignment};

use crate::style::{ActionVariant, action_button_style, segment_button_style};
use crate::theme::ThemeProps;
use crate::widgets::params_panel::event::ParamsPanelEvent;
use crate::widgets::params_panel::model::{
    ParamsPanelViewModel, StyleOption, background_color_options,
    content_width_options, font_color_options, font_family_options,
    font_size_options,
};

const FORM_PADDING: f32 = 24.0;
const FORM_SECTION_SPACING: f32 = 18.0;
const FORM_LABEL_SPACING: f32 = 6.0;
const FORM_LABEL_SIZE: f32 = 12.0;
const FORM_INPUT_SIZE: f32 = 14.0;

const TITLE_SIZE: f32 = 20.0;

const SEGMENT_HEIGHT: f32 = 30.0;
const SEGMENT_SPACING: f32 = 4.0;

const SEPARATOR_HEIGHT: f32 = 1.0;
const SEPARATOR_ALPHA: f32 = 0.6;

const ACTION_BUTTON_HEIGHT: f32 = 34.0;
const ACTION_BUTTON_PADDING_X: f32 = 18.0;
const ACTION_ROW_SPACING: f32 = 12.0;

/// Props for the panel form view.
pub(crate) struct PanelFormProps<'a> {
    pub(crate) vm: ParamsPanelViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the settings form shown inside the open panel.
pub(crate) fn view(
    props: PanelFormProps<'_>,
) -> Element<'_, ParamsPanelEvent, Theme, iced::Renderer> {
    let draft = props.vm.draft;

    let content = column![
        text("Задайте параметры").size(TITLE_SIZE),
        select_row(
            "Шрифт",
            font_family_options(),
            draft.font_family().clone(),
            ParamsPanelEvent::FontFamilyChanged,
            props.theme,
        ),
        size_row(draft.font_size(), props.theme),
        select_row(
            "Цвет шрифта",
            font_color_options(),
            draft.font_color().clone(),
            ParamsPanelEvent::FontColorChanged,
            props.theme,
        ),
        separator(props.theme),
        select_row(
            "Цвет фона",
            background_color_options(),
            draft.background_color().clone(),
            ParamsPanelEvent::BackgroundColorChanged,
            props.theme,
        ),
        select_row(
            "Ширина контента",
            content_width_options(),
            draft.content_width().clone(),
            ParamsPanelEvent::ContentWidthChanged,
            props.theme,
        ),
        action_row(props.theme),
    ]
    .spacing(FORM_SECTION_SPACING)
    .padding(FORM_PADDING)
    .width(Length::Fill);

    let scrollable = scrollable::Scrollable::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new().width(4).margin(0).scroller_width(4),
        ));

    container(scrollable)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// A labeled pick list bound to one draft field.
fn select_row<'a>(
    label: &'a str,
    options: Vec<StyleOption>,
    selected: StyleOption,
    on_select: fn(StyleOption) -> ParamsPanelEvent,
    theme: ThemeProps<'a>,
) -> Element<'a, ParamsPanelEvent, Theme, iced::Renderer> {
    let picker = pick_list(options, Some(selected), on_select)
        .text_size(FORM_INPUT_SIZE)
        .width(Length::Fill);

    column![field_label(label, theme), picker]
        .spacing(FORM_LABEL_SPACING)
        .width(Length::Fill)
        .into()
}

/// The font-size selector: one segment per option, single choice.
fn size_row<'a>(
    selected: &StyleOption,
    theme: ThemeProps<'a>,
) -> Element<'a, ParamsPanelEvent, Theme, iced::Renderer> {
    let mut segments = row![].spacing(SEGMENT_SPACING).width(Length::Fill);

    for option in font_size_options() {
        let is_selected = &option == selected;
        let palette = theme.theme.iced_palette().clone();
        let label = text(option.label().to_string())
            .size(FORM_INPUT_SIZE)
            .wrapping(Wrapping::None)
            .align_x(alignment::Horizontal::Center);

        let segment = button(
            container(label)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .on_press(ParamsPanelEvent::FontSizeChanged(option))
        .height(Length::Fixed(SEGMENT_HEIGHT))
        .width(Length::Fill)
        .style(move |_, status| {
            segment_button_style(&palette, status, is_selected)
        });

        segments = segments.push(segment);
    }

    column![field_label("Размер шрифта", theme), segments]
        .spacing(FORM_LABEL_SPACING)
        .width(Length::Fill)
        .into()
}

/// The bottom «Сбросить» / «Применить» button pair.
fn action_row<'a>(
    theme: ThemeProps<'a>,
) -> Element<'a, ParamsPanelEvent, Theme, iced::Renderer> {
    let reset = action_button(
        "Сбросить",
        ParamsPanelEvent::Reset,
        ActionVariant::Clear,
        theme,
    );
    let apply = action_button(
        "Применить",
        ParamsPanelEvent::Apply,
        ActionVariant::Apply,
        theme,
    );

    row![reset, Space::new().width(Length::Fill), apply]
        .spacing(ACTION_ROW_SPACING)
        .width(Length::Fill)
        .into()
}

fn action_button<'a>(
    label: &'a str,
    event: ParamsPanelEvent,
    variant: ActionVariant,
    theme: ThemeProps<'a>,
) -> Element<'a, ParamsPanelEvent, Theme, iced::Renderer> {
    let palette = theme.theme.iced_palette().clone();
    let content = container(
        text(label)
            .size(FORM_INPUT_SIZE)
            .align_x(alignment::Horizontal::Center),
    )
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    button(content)
        .on_press(event)
        .padding([0.0, ACTION_BUTTON_PADDING_X])
        .height(Length::Fixed(ACTION_BUTTON_HEIGHT))
        .style(move |_, status| {
            action_button_style(&palette, status, variant)
        })
        .into()
}

fn field_label<'a>(
    label: &'a str,
    theme: ThemeProps<'a>,
) -> Element<'a, ParamsPanelEvent, Theme, iced::Renderer> {
    let color = theme.theme.iced_palette().dim_foreground;
    text(label)
        .size(FORM_LABEL_SIZE)
        .wrapping(Wrapping::None)
        .align_x(alignment::Horizontal::Left)
        .style(move |_| iced::widget::text::Style { color: Some(color) })
        .into()
}

fn separator<'a>(
    theme: ThemeProps<'a>,
) -> Element<'a, ParamsPanelEvent, Theme, iced::Renderer> {
    let palette = theme.theme.iced_palette();
    let mut color = palette.dim_white;
    color.a = SEPARATOR_ALPHA;

    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(SEPARATOR_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(color.into()),
            ..Default::default()
        })
        .into()
}
