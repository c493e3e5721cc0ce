use iced::Font;

/// Resolve an article font-family option value to an iced font.
///
/// Values come from the closed font-family option list; an unknown value
/// (possible only through a hand-edited preferences file) falls back to the
/// default font.
pub(crate) fn article_font(value: &str) -> Font {
    match value {
        "Open Sans" => Font::with_name("Open Sans"),
        "Ubuntu" => Font::with_name("Ubuntu"),
        "Cormorant Garamond" => Font::with_name("Cormorant Garamond"),
        "Days One" => Font::with_name("Days One"),
        "Merriweather" => Font::with_name("Merriweather"),
        _ => Font::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::article_font;
    use iced::Font;
    use iced::font::Family;

    #[test]
    fn given_known_family_value_when_resolved_then_uses_named_family() {
        let font = article_font("Merriweather");
        assert_eq!(font.family, Family::Name("Merriweather"));
    }

    #[test]
    fn given_unknown_family_value_when_resolved_then_falls_back_to_default() {
        assert_eq!(article_font("Comic Sans"), Font::default());
        assert_eq!(article_font(""), Font::default());
    }
}
