use std::path::{Path, PathBuf};

use super::errors::PreferencesError;
use super::model::{
    ArticleStyleSelection, PREFERENCES_VERSION, PreferencesFile,
};

/// Return the path to the preferences JSON file.
fn preferences_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("gazeta")
            .join("preferences.json");
    }
    std::env::temp_dir().join("gazeta").join("preferences.json")
}

/// Load preferences from disk. A missing file yields the defaults.
pub(crate) fn load_preferences() -> Result<PreferencesFile, PreferencesError> {
    let path = preferences_path();
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(PreferencesFile::default());
        },
        Err(err) => return Err(err.into()),
    };
    let data: PreferencesFile = serde_json::from_str(&content)?;
    Ok(data)
}

/// Save the given selection to disk atomically.
pub(crate) fn save_preferences(
    selection: &ArticleStyleSelection,
) -> Result<(), PreferencesError> {
    let data = PreferencesFile {
        version: PREFERENCES_VERSION,
        selection: selection.clone(),
    };

    let path = preferences_path();
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let payload = serde_json::to_string_pretty(&data)?;
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, payload.as_bytes())?;
    std::fs::rename(tmp_path, path)?;
    Ok(())
}

/// Load the startup selection, falling back to defaults on error.
pub(crate) fn load_initial_selection() -> ArticleStyleSelection {
    match load_preferences() {
        Ok(data) => data.selection,
        Err(err) => {
            log::warn!("Failed to load preferences, using defaults: {err}");
            ArticleStyleSelection::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::params_panel::model::{
        StyleOption, default_selection,
    };

    #[test]
    fn given_valid_json_when_deserialized_then_structure_is_correct() {
        let json = serde_json::json!({
            "version": 1,
            "selection": {
                "font_family": { "value": "Ubuntu", "label": "Ubuntu" },
                "font_size": { "value": "25px", "label": "25px" },
                "font_color": { "value": "#C2C2C2", "label": "Серый" },
                "background_color": { "value": "#232426", "label": "Тёмный" },
                "content_width": { "value": "948px", "label": "Узкий" }
            }
        });

        let data: PreferencesFile =
            serde_json::from_value(json).expect("should deserialize");
        assert_eq!(data.version, PREFERENCES_VERSION);
        assert_eq!(data.selection.font_size().value(), "25px");
        assert_eq!(data.selection.content_width().label(), "Узкий");
    }

    #[test]
    fn given_preferences_file_when_serialized_then_round_trips() {
        let data = PreferencesFile {
            version: PREFERENCES_VERSION,
            selection: default_selection()
                .with_font_color(StyleOption::new("#FD24AF", "Розовый")),
        };

        let json = serde_json::to_string(&data).expect("should serialize");
        let parsed: PreferencesFile =
            serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(parsed.selection, data.selection);
    }
}
