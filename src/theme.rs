use iced::theme::Palette;
use iced::{Color, Theme};

/// Raw UI palette, hex-encoded as persisted and authored.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) overlay: String,
    pub(crate) blue: String,
    pub(crate) red: String,
    pub(crate) green: String,
    pub(crate) yellow: String,
    pub(crate) dim_foreground: String,
    pub(crate) dim_white: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: String::from("#2B2D33"),
            background: String::from("#FFFFFF"),
            overlay: String::from("#F4F4F6"),
            blue: String::from("#4FA6ED"),
            red: String::from("#E06C75"),
            green: String::from("#4F9E6E"),
            yellow: String::from("#D9A441"),
            dim_foreground: String::from("#6B7280"),
            dim_white: String::from("#D4D7DD"),
        }
    }
}

/// The same palette parsed into iced colors for rendering.
#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) overlay: Color,
    pub(crate) blue: Color,
    pub(crate) red: Color,
    pub(crate) green: Color,
    pub(crate) yellow: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) dim_white: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: parse_hex_color(&p.foreground)
                .unwrap_or(Color::BLACK),
            background: parse_hex_color(&p.background)
                .unwrap_or(Color::WHITE),
            overlay: parse_hex_color(&p.overlay).unwrap_or(Color::WHITE),
            blue: parse_hex_color(&p.blue).unwrap_or(Color::BLACK),
            red: parse_hex_color(&p.red).unwrap_or(Color::BLACK),
            green: parse_hex_color(&p.green).unwrap_or(Color::BLACK),
            yellow: parse_hex_color(&p.yellow).unwrap_or(Color::BLACK),
            dim_foreground: parse_hex_color(&p.dim_foreground)
                .unwrap_or(Color::BLACK),
            dim_white: parse_hex_color(&p.dim_white).unwrap_or(Color::WHITE),
        }
    }
}

/// Global application theme shared by every view.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        let raw_palette = ColorPalette::default();
        let iced_palette = IcedColorPalette::from(&raw_palette);

        Self {
            id: String::from("default"),
            iced_palette,
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.blue,
            success: palette.green,
            danger: palette.red,
            warning: palette.yellow,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Holds the current global theme.
#[derive(Debug, Clone, Default)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}

/// Parse a `#RRGGBB` string into an iced color.
///
/// Returns `None` for anything else; persisted values are untrusted, so
/// callers fall back to their own defaults instead of panicking.
pub(crate) fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::from_rgb8(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::parse_hex_color;
    use iced::Color;

    #[test]
    fn given_valid_hex_when_parsed_then_returns_color() {
        let color = parse_hex_color("#FF0080").expect("should parse");
        assert_eq!(color, Color::from_rgb8(0xFF, 0x00, 0x80));
    }

    #[test]
    fn given_missing_hash_when_parsed_then_returns_none() {
        assert!(parse_hex_color("FF0080").is_none());
    }

    #[test]
    fn given_short_or_garbled_value_when_parsed_then_returns_none() {
        assert!(parse_hex_color("#FFF").is_none());
        assert!(parse_hex_color("#GGGGGG").is_none());
        assert!(parse_hex_color("").is_none());
    }
}
