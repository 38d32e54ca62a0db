// Inti App - platform/config.rs
//
// Platform-specific configuration, data directory resolution, and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for Inti App data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/intiapp/ or %APPDATA%\IntiApp\)
    pub config_dir: PathBuf,

    /// Data directory for persisted settings.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }

    /// Resolve paths with an optional CLI override for the config directory.
    /// The data directory follows the override so the whole app state moves
    /// together (useful for tests and portable installs).
    pub fn resolve_with_override(config_dir: Option<&Path>) -> Self {
        match config_dir {
            Some(dir) => Self {
                config_dir: dir.to_path_buf(),
                data_dir: dir.to_path_buf(),
            },
            None => Self::resolve(),
        }
    }

    /// Full path of the config.toml file.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }

    /// Full path of the persisted settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.data_dir.join(constants::SETTINGS_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Toast lifetime in seconds.
    pub toast_duration_secs: Option<u64>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated configuration with all values clamped to sensible ranges.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    /// Theme name, guaranteed to be "dark" or "light".
    pub theme: String,
    /// Toast lifetime in seconds, within the allowed range.
    pub toast_duration_secs: u64,
    /// Log level string, passed to the logging subsystem unvalidated
    /// (the EnvFilter parser has its own fallback).
    pub log_level: Option<String>,
}

impl Default for ValidatedConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            toast_duration_secs: constants::DEFAULT_TOAST_DURATION_SECS,
            log_level: None,
        }
    }
}

/// Load config.toml from `path`.
///
/// A missing file is not an error -- the defaults apply. A present but
/// unreadable or malformed file IS an error so silent misconfiguration
/// never goes unnoticed.
pub fn load_config(path: &Path) -> Result<RawConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(RawConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let raw: RawConfig = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), "Config file loaded");
    Ok(raw)
}

impl RawConfig {
    /// Validate and clamp raw values into a `ValidatedConfig`.
    ///
    /// Out-of-range or unrecognised values are replaced by defaults with a
    /// warning rather than aborting startup.
    pub fn validate(self) -> ValidatedConfig {
        let mut effective = ValidatedConfig::default();

        if let Some(theme) = self.ui.theme {
            match theme.as_str() {
                "dark" | "light" => effective.theme = theme,
                other => {
                    tracing::warn!(theme = other, "Unknown theme in config, using 'dark'");
                }
            }
        }

        if let Some(secs) = self.ui.toast_duration_secs {
            let clamped = secs.clamp(
                constants::MIN_TOAST_DURATION_SECS,
                constants::MAX_TOAST_DURATION_SECS,
            );
            if clamped != secs {
                tracing::warn!(
                    requested = secs,
                    clamped,
                    "toast_duration_secs out of range, clamped"
                );
            }
            effective.toast_duration_secs = clamped;
        }

        effective.log_level = self.logging.level;
        effective
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_file_yields_defaults() {
        let raw = load_config(Path::new("/nonexistent/inti-app/config.toml")).unwrap();
        let config = raw.validate();
        assert_eq!(config.theme, "dark");
        assert_eq!(
            config.toast_duration_secs,
            constants::DEFAULT_TOAST_DURATION_SECS
        );
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_valid_config_parses_all_sections() {
        let raw: RawConfig = toml::from_str(
            r#"
            [ui]
            theme = "light"
            toast_duration_secs = 10

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        let config = raw.validate();
        assert_eq!(config.theme, "light");
        assert_eq!(config.toast_duration_secs, 10);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    /// Unknown keys must be ignored for forward compatibility.
    #[test]
    fn test_unknown_keys_are_ignored() {
        let raw: RawConfig = toml::from_str(
            r#"
            [ui]
            theme = "dark"
            future_option = true

            [future_section]
            x = 1
            "#,
        )
        .unwrap();
        assert_eq!(raw.ui.theme.as_deref(), Some("dark"));
    }

    #[test]
    fn test_out_of_range_toast_duration_is_clamped() {
        let raw: RawConfig = toml::from_str("[ui]\ntoast_duration_secs = 9999").unwrap();
        assert_eq!(
            raw.validate().toast_duration_secs,
            constants::MAX_TOAST_DURATION_SECS
        );

        let raw: RawConfig = toml::from_str("[ui]\ntoast_duration_secs = 0").unwrap();
        assert_eq!(
            raw.validate().toast_duration_secs,
            constants::MIN_TOAST_DURATION_SECS
        );
    }

    #[test]
    fn test_unknown_theme_falls_back_to_dark() {
        let raw: RawConfig = toml::from_str("[ui]\ntheme = \"solarized\"").unwrap();
        assert_eq!(raw.validate().theme, "dark");
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        use tempfile::TempDir;
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not [valid toml =").unwrap();
        assert!(matches!(
            load_config(&path),
            Err(ConfigError::TomlParse { .. })
        ));
    }
}
