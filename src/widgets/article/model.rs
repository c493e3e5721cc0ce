use iced::{Color, Font};

use crate::fonts::article_font;
use crate::theme::parse_hex_color;
use crate::widgets::params_panel::model::ArticleStyleSelection;

const DEFAULT_FONT_SIZE: f32 = 18.0;
const DEFAULT_CONTENT_WIDTH: f32 = 1394.0;

/// Static article copy rendered by the page.
#[derive(Debug, Clone)]
pub(crate) struct ArticleContent {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) paragraphs: &'static [&'static str],
}

/// Return the article shown by the reader.
pub(crate) fn article_content() -> ArticleContent {
    ArticleContent {
        title: "Портрет шрифта",
        description: "Как выбор гарнитуры, кегля и цвета меняет характер \
                      текста и удобство чтения.",
        paragraphs: &[
            "Шрифт — это голос текста. Одна и та же фраза, набранная \
             гротеском и антиквой, звучит по-разному: первая — собранно и \
             современно, вторая — спокойно и книжно. Подбирая гарнитуру, \
             мы выбираем интонацию, с которой статья обратится к читателю.",
            "Кегль задаёт дистанцию между читателем и страницей. Мелкий \
             набор просит внимательного, почти исследовательского чтения; \
             крупный — превращает текст в плакат, который считывается с \
             расстояния. Для длинного чтения выбирают средние размеры: \
             они не утомляют глаз и держат ровный ритм строки.",
            "Цвет текста и фона работают в паре. Чёрное на белом — самый \
             привычный и контрастный вариант, но мягкие сочетания — серый \
             на светлом, светлое на тёмном — снижают усталость при долгом \
             чтении. Важно лишь сохранять достаточный контраст, иначе \
             буквы начинают растворяться в фоне.",
            "Ширина колонки — незаметный, но решающий параметр. Слишком \
             длинная строка заставляет глаз терять начало следующей, \
             слишком короткая — рвёт текст на обрывки. Удобная колонка \
             вмещает порядка шестидесяти–восьмидесяти знаков: строка \
             читается одним движением, а страница дышит.",
            "Настройки в этой панели меняют все четыре параметра сразу и \
             вживую: черновик выбранных значений применяется к статье \
             только после нажатия «Применить», а «Сбросить» возвращает \
             страницу к исходному виду.",
        ],
    }
}

/// Typed style bindings derived from a committed selection at render time.
///
/// Derivation is total: selection values are opaque strings, and anything
/// malformed (possible only in a hand-edited preferences file) falls back
/// to the default binding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ArticleStyleVars {
    pub(crate) font: Font,
    pub(crate) font_size: f32,
    pub(crate) font_color: Color,
    pub(crate) background_color: Color,
    pub(crate) content_width: f32,
}

impl ArticleStyleVars {
    pub(crate) fn from_selection(selection: &ArticleStyleSelection) -> Self {
        Self {
            font: article_font(selection.font_family().value()),
            font_size: parse_px(selection.font_size().value())
                .unwrap_or(DEFAULT_FONT_SIZE),
            font_color: parse_hex_color(selection.font_color().value())
                .unwrap_or(Color::BLACK),
            background_color: parse_hex_color(
                selection.background_color().value(),
            )
            .unwrap_or(Color::WHITE),
            content_width: parse_px(selection.content_width().value())
                .unwrap_or(DEFAULT_CONTENT_WIDTH),
        }
    }
}

/// Read-only view model for the page view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ArticleViewModel<'a> {
    pub(crate) content: &'a ArticleContent,
    pub(crate) vars: ArticleStyleVars,
}

/// Parse a `"<number>px"` value.
fn parse_px(value: &str) -> Option<f32> {
    value.strip_suffix("px")?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::params_panel::model::{
        StyleOption, default_selection,
    };

    #[test]
    fn given_committed_selection_when_derived_then_bindings_match_values() {
        let selection = default_selection()
            .with_font_size(StyleOption::new("25px", "25px"))
            .with_font_color(StyleOption::new("#FD24AF", "Розовый"))
            .with_content_width(StyleOption::new("948px", "Узкий"));

        let vars = ArticleStyleVars::from_selection(&selection);

        assert!((vars.font_size - 25.0).abs() < f32::EPSILON);
        assert_eq!(vars.font_color, Color::from_rgb8(0xFD, 0x24, 0xAF));
        assert!((vars.content_width - 948.0).abs() < f32::EPSILON);
    }

    #[test]
    fn given_malformed_values_when_derived_then_defaults_are_used() {
        let selection = default_selection()
            .with_font_size(StyleOption::new("huge", "huge"))
            .with_background_color(StyleOption::new("plaid", "plaid"));

        let vars = ArticleStyleVars::from_selection(&selection);

        assert!((vars.font_size - DEFAULT_FONT_SIZE).abs() < f32::EPSILON);
        assert_eq!(vars.background_color, Color::WHITE);
    }

    #[test]
    fn given_px_values_when_parsed_then_suffix_is_stripped() {
        assert_eq!(parse_px("18px"), Some(18.0));
        assert_eq!(parse_px("1394px"), Some(1394.0));
        assert_eq!(parse_px("18"), None);
        assert_eq!(parse_px("px"), None);
    }
}
