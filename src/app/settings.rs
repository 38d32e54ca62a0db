// Inti App - app/settings.rs
//
// Settings persistence: save and restore the first-run flag (and any
// future user preferences) between application restarts.
//
// Design principles:
// - Settings are saved atomically (write→temp, rename→final) so a crash
//   during save never corrupts the previous good file.
// - Load errors are silently discarded (corrupt or incompatible files
//   just start the app fresh rather than surfacing errors to the user).
// - The data directory is created on first save; no user action required.

use crate::util::error::IntiError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Version stamp for forward-compatibility checks.
///
/// Increment this constant whenever `Settings` gains or removes fields
/// in a breaking way. Version mismatches silently discard the file.
pub const SETTINGS_VERSION: u32 = 1;

/// Persisted user settings.
///
/// All fields besides `version` carry serde defaults so minor format
/// additions are tolerated without bumping the version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version — must equal `SETTINGS_VERSION` to be accepted.
    pub version: u32,

    /// True once the user has acknowledged the getting-started dialog.
    /// While false, the dialog is mounted on every launch.
    #[serde(default)]
    pub welcome_shown: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            welcome_shown: false,
        }
    }
}

/// Save `settings` to `path` atomically (write temp → rename).
///
/// Creates all parent directories as needed. Errors are returned for the
/// caller to log; persistence failures never interrupt the user.
pub fn save(settings: &Settings, path: &Path) -> Result<(), IntiError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| IntiError::Io {
            path: parent.to_path_buf(),
            operation: "create settings directory",
            source: e,
        })?;
    }

    // Serialisation of a plain struct with no map keys cannot fail; treat
    // a failure as an I/O-level invalid-data problem rather than panicking.
    let json = serde_json::to_string_pretty(settings).map_err(|e| IntiError::Io {
        path: path.to_path_buf(),
        operation: "serialise settings",
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })?;

    // Atomic write: write to a sibling temp file then rename.
    // A crash between write and rename loses the new settings but never
    // corrupts the previous ones (rename is atomic on all supported platforms).
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json.as_bytes()).map_err(|e| IntiError::Io {
        path: tmp.clone(),
        operation: "write settings temp file",
        source: e,
    })?;

    std::fs::rename(&tmp, path).map_err(|e| {
        // Clean up the temp file on failure; ignore any secondary error.
        let _ = std::fs::remove_file(&tmp);
        IntiError::Io {
            path: path.to_path_buf(),
            operation: "finalise settings file",
            source: e,
        }
    })?;

    tracing::debug!(path = %path.display(), "Settings saved");
    Ok(())
}

/// Load and validate `Settings` from `path`.
///
/// Returns `None` on any error (file not found, JSON parse failure,
/// version mismatch). The caller should treat `None` as "first run".
pub fn load(path: &Path) -> Option<Settings> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            // Distinguish "file not found" (normal first run) from other errors.
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read settings file");
            }
        })
        .ok()?;

    let settings: Settings = serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Settings file is malformed — starting fresh"
            );
        })
        .ok()?;

    if settings.version != SETTINGS_VERSION {
        tracing::warn!(
            found = settings.version,
            expected = SETTINGS_VERSION,
            "Settings file version mismatch — starting fresh"
        );
        return None;
    }

    tracing::info!(path = %path.display(), "Settings file loaded");
    Some(settings)
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Save and load must round-trip all fields accurately.
    #[test]
    fn test_settings_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let original = Settings {
            welcome_shown: true,
            ..Default::default()
        };

        save(&original, &path).expect("save should succeed");
        let loaded = load(&path).expect("load should return Some after valid save");

        assert_eq!(loaded.version, SETTINGS_VERSION);
        assert!(loaded.welcome_shown);
    }

    /// Load must return None when the file does not exist (first run).
    #[test]
    fn test_settings_load_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nonexistent.json");
        assert!(load(&path).is_none());
    }

    /// Load must return None when the JSON is malformed rather than panicking.
    #[test]
    fn test_settings_load_malformed_json_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, b"not valid json {{{{").unwrap();
        assert!(load(&path).is_none());
    }

    /// Load must return None when the version field is wrong.
    #[test]
    fn test_settings_load_wrong_version_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            version: 99,
            ..Default::default()
        };
        save(&settings, &path).unwrap();
        // (save() writes whatever version we give it — validation is in load().)
        assert!(load(&path).is_none());
    }

    /// A crash during save (temp file exists) must not corrupt the original.
    #[test]
    fn test_settings_save_atomic_does_not_corrupt_original() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        // Write an initial good file.
        save(&Settings::default(), &path).unwrap();

        // Simulate a leftover temp file (e.g. from a previous crash).
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, b"garbage").unwrap();

        // Save new settings — should overwrite the temp file and rename correctly.
        let updated = Settings {
            welcome_shown: true,
            ..Default::default()
        };
        save(&updated, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert!(loaded.welcome_shown);
    }

    /// Save must create missing parent directories.
    #[test]
    fn test_settings_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep").join("settings.json");
        save(&Settings::default(), &path).unwrap();
        assert!(load(&path).is_some());
    }
}
