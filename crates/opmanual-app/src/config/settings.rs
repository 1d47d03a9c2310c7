//! Settings loading and the default config file

use std::path::{Path, PathBuf};

use opmanual_core::prelude::*;

use super::types::Settings;

const CONFIG_DIR_NAME: &str = "opmanual";

pub const CONFIG_FILENAME: &str = "config.toml";

/// Content written by [`init_config_file`]
pub const DEFAULT_CONFIG_CONTENT: &str = r#"# opmanual configuration

[ui]
icons = "unicode"       # "unicode" or "ascii"
show_key_hints = true   # Key hint bar under the manual
"#;

/// `<config_dir>/opmanual/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
}

/// Load settings from the default location
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_default_settings() -> Settings {
    let Some(config_path) = default_config_path() else {
        debug!("No platform config directory, using defaults");
        return Settings::default();
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match load_settings_from(&config_path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Ignoring config file: {}", e);
            Settings::default()
        }
    }
}

/// Load settings from an explicitly requested file
///
/// Unlike [`load_default_settings`] a missing or malformed file is an error,
/// since the user asked for this file by name.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::config_not_found(path));
    }

    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let settings = toml::from_str(&content)
        .map_err(|e| Error::config_invalid(path, e.message().to_string()))?;

    debug!("Loaded settings from {:?}", path);
    Ok(settings)
}

/// Write the default config file if none exists yet
///
/// Returns `true` if a file was created.
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        info!("Config file already exists at {:?}", path);
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(path, DEFAULT_CONFIG_CONTENT)
        .with_context(|| format!("Failed to write {:?}", path))?;
    info!("Created config file at {:?}", path);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconMode;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[ui]\nicons = \"ascii\"\nshow_key_hints = false\n").unwrap();

        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings.ui.icons, IconMode::Ascii);
        assert!(!settings.ui.show_key_hints);
    }

    #[test]
    fn test_load_settings_from_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = load_settings_from(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_settings_from_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[ui\nicons = ").unwrap();

        let err = load_settings_from(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_load_settings_from_directory_is_io_error() {
        let dir = tempdir().unwrap();

        let err = load_settings_from(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_init_config_file_creates_parseable_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILENAME);

        assert!(init_config_file(&path).unwrap());
        let settings = load_settings_from(&path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_file_keeps_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[ui]\nicons = \"ascii\"\n").unwrap();

        assert!(!init_config_file(&path).unwrap());
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("ascii"));
    }

    #[test]
    fn test_default_config_path_file_name() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("opmanual/config.toml"));
        }
    }
}
