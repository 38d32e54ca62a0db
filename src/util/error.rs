// Inti App - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation across subsystem boundaries.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all Inti App operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum IntiError {
    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for IntiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for IntiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for IntiError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors related to config.toml loading and validation.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    Read { path: PathBuf, source: io::Error },

    /// TOML file could not be parsed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "cannot read config file '{}': {source}", path.display())
            }
            Self::TomlParse { path, source } => {
                write!(
                    f,
                    "config file '{}' is not valid TOML: {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::TomlParse { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Asset errors
// ---------------------------------------------------------------------------

/// Errors related to embedded asset decoding (icon, logo).
///
/// These are never fatal: callers log them and fall back to a placeholder,
/// so a corrupt asset degrades branding rather than preventing launch.
#[derive(Debug)]
pub enum AssetError {
    /// The embedded PNG bytes could not be decoded.
    PngDecode { asset: &'static str, source: image::ImageError },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PngDecode { asset, source } => {
                write!(f, "cannot decode embedded PNG '{asset}': {source}")
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PngDecode { source, .. } => Some(source),
        }
    }
}
