/// Chevron pointing right: shown while the panel is closed.
pub(crate) const ARROW_OPEN: &[u8] =
    include_bytes!("../assets/icons/arrow_open.svg");

/// Chevron pointing left: shown while the panel is open.
pub(crate) const ARROW_CLOSE: &[u8] =
    include_bytes!("../assets/icons/arrow_close.svg");
