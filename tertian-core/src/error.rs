//! Error type shared by every tertian-core operation.

use std::fmt;

/// Result alias for tertian-core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug)]
pub enum CoreError {
    /// Input shape not recognized at the normalization boundary.
    UnsupportedType(String),
    /// Chord cardinality outside 2..=5.
    UnsupportedSize(usize),
    /// Pitch name not present in the active pool.
    NoteNotInPool(String),
    /// Harmonization depth below 1.
    InvalidDepth(i64),
    /// Harmonization mode other than 0 or 1.
    InvalidMode(i64),
    /// Pool does not hold exactly 12 distinct names.
    InvalidPool(String),
    /// User catalog entry violates catalog invariants.
    Catalog(String),
    Io(std::io::Error),
    Toml(toml::de::Error),
    Json(serde_json::Error),
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for CoreError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedType(what) => write!(f, "unsupported input type: {}", what),
            Self::UnsupportedSize(n) => {
                write!(f, "unsupported chord size {} (expected 2 to 5 notes)", n)
            }
            Self::NoteNotInPool(name) => write!(f, "note name {} not found in pool", name),
            Self::InvalidDepth(d) => write!(
                f,
                "depth must be a number from 1 to {}, got {}",
                crate::harmony::MAX_DEPTH,
                d
            ),
            Self::InvalidMode(m) => write!(f, "mode must be 0 or 1, got {}", m),
            Self::InvalidPool(msg) => write!(f, "invalid pitch pool: {}", msg),
            Self::Catalog(msg) => write!(f, "invalid chord catalog: {}", msg),
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Toml(e) => write!(f, "TOML error: {}", e),
            Self::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}
