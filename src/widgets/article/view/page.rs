use iced::widget::{Column, column, container, scrollable, text};
use iced::{Element, Length, Theme, alignment};

use crate::widgets::article::model::ArticleViewModel;

const TITLE_SIZE_FACTOR: f32 = 2.0;
const DESCRIPTION_SIZE_FACTOR: f32 = 1.1;
const PAGE_PADDING_Y: f32 = 48.0;

/// Props for the article page view.
pub(crate) struct PageProps<'a> {
    pub(crate) vm: ArticleViewModel<'a>,
    /// Article column width, already clamped to the window.
    pub(crate) column_width: f32,
}

/// Render the article page with the committed style bindings applied.
pub(crate) fn view<'a, Message: 'a>(
    props: PageProps<'a>,
) -> Element<'a, Message, Theme, iced::Renderer> {
    let vars = props.vm.vars;
    let content = props.vm.content;

    let title = text(content.title)
        .font(vars.font)
        .size(vars.font_size * TITLE_SIZE_FACTOR)
        .style(move |_| iced::widget::text::Style {
            color: Some(vars.font_color),
        });

    let description = text(content.description)
        .font(vars.font)
        .size(vars.font_size * DESCRIPTION_SIZE_FACTOR)
        .style(move |_| iced::widget::text::Style {
            color: Some(vars.font_color),
        });

    let mut body = Column::new().spacing(vars.font_size);
    for paragraph in content.paragraphs {
        body = body.push(
            text(*paragraph)
                .font(vars.font)
                .size(vars.font_size)
                .style(move |_| iced::widget::text::Style {
                    color: Some(vars.font_color),
                }),
        );
    }

    let article_column = column![title, description, body]
        .spacing(vars.font_size * 1.5)
        .width(Length::Fixed(props.column_width));

    let centered = container(article_column)
        .width(Length::Fill)
        .padding([PAGE_PADDING_Y, 0.0])
        .align_x(alignment::Horizontal::Center);

    let scrollable = scrollable::Scrollable::new(centered)
        .width(Length::Fill)
        .height(Length::Fill);

    container(scrollable)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| iced::widget::container::Style {
            background: Some(vars.background_color.into()),
            text_color: Some(vars.font_color),
            ..Default::default()
        })
        .into()
}
