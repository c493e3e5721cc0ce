use iced::Size;

/// Width of the slide-out settings panel.
pub(crate) const PANEL_WIDTH: f32 = 318.0;

/// Horizontal page padding around the article column.
const CONTENT_PADDING_X: f32 = 24.0;

/// Width of the rendered article column.
///
/// The committed content width is honored as-is while it fits; otherwise the
/// column shrinks to the available window width.
pub(crate) fn content_column_width(
    window_size: Size,
    committed_width: f32,
) -> f32 {
    let available = (window_size.width - CONTENT_PADDING_X * 2.0).max(0.0);
    committed_width.min(available).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::content_column_width;
    use iced::Size;

    #[test]
    fn given_wide_window_when_computed_then_committed_width_is_kept() {
        let width = content_column_width(Size::new(1600.0, 900.0), 948.0);
        assert!((width - 948.0).abs() < f32::EPSILON);
    }

    #[test]
    fn given_narrow_window_when_computed_then_width_shrinks_to_available() {
        let width = content_column_width(Size::new(800.0, 600.0), 1394.0);
        assert!((width - 752.0).abs() < f32::EPSILON);
    }

    #[test]
    fn given_degenerate_window_when_computed_then_width_is_zero() {
        let width = content_column_width(Size::new(0.0, 0.0), 1394.0);
        assert!(width.abs() < f32::EPSILON);
    }
}
