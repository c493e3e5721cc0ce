use thiserror::Error;

/// Errors emitted while loading or saving style preferences.
#[derive(Debug, Error)]
pub(crate) enum PreferencesError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
