use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Interpret a stored value; anything other than "dark" falls back to
    /// the light default.
    pub fn from_stored(stored: Option<&str>) -> Self {
        match stored {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// Store-and-recall persistence for the theme preference, backed by a single
/// file holding one JSON token.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Recall the stored theme. A missing or unreadable store yields the
    /// default, never an error.
    pub fn load(&self) -> Theme {
        match fs::read_to_string(&self.path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Theme::default(),
        }
    }

    pub fn save(&self, theme: Theme) -> Result<()> {
        let encoded = serde_json::to_string(&theme)
            .map_err(|err| Error::store(format!("encode theme preference: {err}")))?;
        fs::write(&self.path, encoded).map_err(|err| {
            Error::store(format!(
                "write theme preference to {}: {err}",
                self.path.display()
            ))
        })
    }
}
