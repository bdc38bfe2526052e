//! # Configuration
//!
//! Compile-time limits of the map format and the editor, plus the
//! [`EditorSettings`] persisted between sessions as JSON.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::map::GameObject;

/// Smallest map width accepted for a new map.
pub const MIN_WIDTH: usize = 16;
/// Largest map width accepted for a new map.
pub const MAX_WIDTH: usize = 99;
/// Smallest map height accepted for a new map.
pub const MIN_HEIGHT: usize = 9;
/// Largest map height accepted for a new map.
pub const MAX_HEIGHT: usize = 99;

pub const MIN_SCALE: f32 = 0.4;
pub const MAX_SCALE: f32 = 1.0;
pub const SCALE_STEP: f32 = 0.1;

/// Edge of a cell on screen at scale 1.0, in points.
pub const CELL_SIZE: f32 = 32.0;

pub const WINDOW_TITLE: &str = "Pac-Man Map Editor";
pub const WINDOW_WIDTH: f32 = 1280.0;
pub const WINDOW_HEIGHT: f32 = 720.0;

/// Extensions offered by the file chooser.
pub const MAP_EXTENSIONS: &[&str] = &["txt", "map"];

const SETTINGS_DIR: &str = "pacman_map_editor";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot access settings file: {0}")]
    Io(#[from] io::Error),
    #[error("malformed settings file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Preferences remembered between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Width pre-filled in the "new map" field.
    pub default_width: usize,
    /// Height pre-filled in the "new map" field.
    pub default_height: usize,
    pub brush: GameObject,
    pub scale: f32,
    /// Directory the file chooser opens in.
    pub last_directory: Option<PathBuf>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            default_width: MIN_WIDTH,
            default_height: MIN_HEIGHT,
            brush: GameObject::Wall,
            scale: MAX_SCALE,
            last_directory: None,
        }
    }
}

impl EditorSettings {
    /// Where settings live when no path is given on the command line:
    /// `$XDG_CONFIG_HOME/pacman_map_editor/settings.json`, falling back to
    /// `$HOME/.config`.
    pub fn default_path() -> Option<PathBuf> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
        Some(base.join(SETTINGS_DIR).join(SETTINGS_FILE))
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        let settings: EditorSettings = serde_json::from_str(&text)?;
        Ok(settings.sanitized())
    }

    /// Loads settings, falling back to defaults when the file is missing or
    /// unreadable.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No settings file at {:?}, using defaults", path);
                Self::default()
            }
            Err(e) => {
                warn!("Ignoring settings file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Pulls hand-edited values back into range.
    fn sanitized(mut self) -> Self {
        self.default_width = self.default_width.clamp(MIN_WIDTH, MAX_WIDTH);
        self.default_height = self.default_height.clamp(MIN_HEIGHT, MAX_HEIGHT);
        self.scale = crate::utils::util::snap_scale(self.scale);
        if self.brush == GameObject::Empty {
            self.brush = GameObject::Wall;
        }
        self
    }
}
