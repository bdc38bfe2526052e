// src/editor/core.rs

use std::path::{Path, PathBuf};

use log::{error, info};

use crate::config::EditorSettings;
use crate::document::{Document, DocumentError};
use crate::map::{check_objects, GameObject, MapIssue, MapSize};
use crate::ui::dialog::DialogResult;
use crate::utils::util::snap_scale;

/// Picks files for the open and save flows.
///
/// The window uses the native dialogs from `ui::file`; tests script the
/// answers.
pub trait MapFileDialog {
    fn pick_open(&mut self, start_dir: Option<&Path>) -> Option<PathBuf>;
    fn pick_save(&mut self, start_dir: Option<&Path>, file_name: &str) -> Option<PathBuf>;
}

/// Actions that discard the current map and so need confirmation when it
/// has unsaved changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NewMap,
    OpenMap,
    Exit,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::NewMap => "New map",
            Action::OpenMap => "Open map",
            Action::Exit => "Exit",
        }
    }
}

/// A failure the user has to acknowledge in an error dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    pub title: String,
    pub header: String,
    pub details: String,
}

impl ErrorReport {
    fn new(title: &str, header: &str, details: impl Into<String>) -> Self {
        Self {
            title: title.to_owned(),
            header: header.to_owned(),
            details: details.into(),
        }
    }
}

/// The editor state behind the window: the map, the brush, the view scale,
/// and the new/open/save flows with their confirmations.
pub struct Editor {
    document: Document,

    /// Raw text of the width/height fields.
    pub width_input: String,
    pub height_input: String,

    brush: GameObject,
    scale: f32,

    /// Action waiting for the user to answer the unsaved-changes prompt.
    pending_action: Option<Action>,
    exit_confirmed: bool,

    last_directory: Option<PathBuf>,

    pub status_message: String,
    error_report: Option<ErrorReport>,

    /// Cell under the pointer, for the status bar.
    pub hovered_cell: Option<(usize, usize)>,
}

impl Editor {
    /// Create an editor with an empty map of the default size.
    pub fn new(settings: &EditorSettings) -> Self {
        let size = MapSize::new(settings.default_width, settings.default_height).unwrap_or_default();
        Self {
            document: Document::new(size),
            width_input: size.width.to_string(),
            height_input: size.height.to_string(),
            brush: if settings.brush == GameObject::Empty {
                GameObject::Wall
            } else {
                settings.brush
            },
            scale: snap_scale(settings.scale),
            pending_action: None,
            exit_confirmed: false,
            last_directory: settings.last_directory.clone(),
            status_message: "Ready.".to_owned(),
            error_report: None,
            hovered_cell: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.document.is_dirty()
    }

    pub fn brush(&self) -> GameObject {
        self.brush
    }

    /// Empty is not a brush; erasing is done with Shift.
    pub fn set_brush(&mut self, brush: GameObject) {
        if brush != GameObject::Empty {
            self.brush = brush;
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = snap_scale(scale);
    }

    /// Paints the brush at (`x`, `y`), or clears the cell when `erase` is set.
    pub fn paint(&mut self, x: usize, y: usize, erase: bool) {
        let obj = if erase { GameObject::Empty } else { self.brush };
        self.document.paint(x, y, obj);
    }

    /// Counts of the objects that must appear exactly once, in report order.
    pub fn unique_counts(&self) -> Vec<(GameObject, usize)> {
        GameObject::UNIQUE
            .iter()
            .map(|&o| (o, self.document.grid().count(o)))
            .collect()
    }

    /// Takes the error waiting to be shown, if any.
    pub fn take_error_report(&mut self) -> Option<ErrorReport> {
        self.error_report.take()
    }

    fn report(&mut self, report: ErrorReport) {
        error!("{}: {} {}", report.title, report.header, report.details.replace('\n', " "));
        self.status_message = report.header.clone();
        self.error_report = Some(report);
    }

    // ----------------- Confirmation flow -----------------

    /// Runs `action`, or parks it behind the unsaved-changes prompt when the
    /// map has been modified.
    ///
    /// While an action is waiting on the prompt, further requests are
    /// ignored so the answer applies to the action the prompt names.
    pub fn request(&mut self, action: Action, files: &mut dyn MapFileDialog) {
        if let Some(waiting) = self.pending_action {
            info!("{} ignored: {} is waiting for confirmation", action.name(), waiting.name());
            return;
        }
        if self.has_unsaved_changes() && !self.exit_confirmed {
            info!("{} requested with unsaved changes, asking for confirmation", action.name());
            self.pending_action = Some(action);
        } else {
            self.perform(action, files);
        }
    }

    /// The action waiting on the unsaved-changes prompt.
    pub fn pending_action(&self) -> Option<Action> {
        self.pending_action
    }

    /// Applies the user's answer to the unsaved-changes prompt.
    ///
    /// After "Save" the parked action only runs if the map was actually
    /// saved.
    pub fn resolve_unsaved_changes(&mut self, choice: DialogResult, files: &mut dyn MapFileDialog) {
        let Some(action) = self.pending_action.take() else {
            return;
        };
        match choice {
            DialogResult::Save => {
                if self.save_map(files) {
                    self.perform(action, files);
                } else {
                    info!("{} abandoned: map was not saved", action.name());
                }
            }
            DialogResult::DontSave => {
                info!("Discarding unsaved changes for {}", action.name());
                self.perform(action, files);
            }
            DialogResult::Cancel => {
                info!("{} canceled by user", action.name());
                self.status_message = format!("{} canceled.", action.name());
            }
        }
    }

    fn perform(&mut self, action: Action, files: &mut dyn MapFileDialog) {
        match action {
            Action::NewMap => self.new_map(),
            Action::OpenMap => self.open_map(files),
            Action::Exit => {
                self.exit_confirmed = true;
                info!("Exit confirmed");
            }
        }
    }

    /// True once the window may close without losing work.
    pub fn can_close(&self) -> bool {
        self.exit_confirmed || !self.has_unsaved_changes()
    }

    pub fn exit_confirmed(&self) -> bool {
        self.exit_confirmed
    }

    // ----------------- Document Management -----------------

    /// Replaces the map with an empty one sized from the width/height fields.
    pub fn new_map(&mut self) {
        match MapSize::parse(&self.width_input, &self.height_input) {
            Ok(size) => {
                self.document = Document::new(size);
                self.status_message = format!("Created new {} map.", size);
                info!("Created new {} map", size);
            }
            Err(e) => {
                self.report(ErrorReport::new(
                    "Map creation error",
                    "Width and height are not valid!",
                    e.details(),
                ));
            }
        }
    }

    /// Asks for a map file and loads it, keeping the current map on failure.
    pub fn open_map(&mut self, files: &mut dyn MapFileDialog) {
        match files.pick_open(self.last_directory.as_deref()) {
            Some(path) => self.open_path(&path),
            None => info!("File selection cancelled."),
        }
    }

    /// Loads the map at `path` and mirrors its size into the input fields.
    pub fn open_path(&mut self, path: &Path) {
        match Document::load(path) {
            Ok(doc) => {
                let size = doc.size();
                self.width_input = size.width.to_string();
                self.height_input = size.height.to_string();
                self.document = doc;
                self.remember_directory(path);
                self.status_message = format!("Loaded map file: {}", path.display());
            }
            Err(e) => {
                let header = match e {
                    DocumentError::Empty => "The map file is empty!",
                    DocumentError::Io(_) => "The map file could not be read!",
                };
                self.report(ErrorReport::new(
                    "Map loading error",
                    header,
                    format!("{}: {}", path.display(), e),
                ));
            }
        }
    }

    /// Validates the map, asks where to write it, and saves it.
    ///
    /// Returns `true` only when the file was written.
    pub fn save_map(&mut self, files: &mut dyn MapFileDialog) -> bool {
        let issues = check_objects(self.document.grid());
        if !issues.is_empty() {
            self.report(ErrorReport::new(
                "Map contains logical errors",
                "Incorrect number of game objects!",
                issue_details(&issues),
            ));
            return false;
        }

        let file_name = self
            .document
            .path()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "map.txt".to_owned());
        let start_dir = self.last_directory.clone();
        let Some(path) = files.pick_save(start_dir.as_deref(), &file_name) else {
            info!("Save cancelled.");
            return false;
        };

        match self.document.save(&path) {
            Ok(()) => {
                self.remember_directory(&path);
                self.status_message = format!("Saved map file: {}", path.display());
                true
            }
            Err(e) => {
                self.report(ErrorReport::new(
                    "Map saving error",
                    "The map file could not be written!",
                    format!("{}: {}", path.display(), e),
                ));
                false
            }
        }
    }

    fn remember_directory(&mut self, path: &Path) {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            self.last_directory = Some(dir.to_path_buf());
        }
    }

    /// Current preferences, for persisting on exit.
    pub fn settings(&self) -> EditorSettings {
        let fallback = EditorSettings::default();
        let size = MapSize::parse(&self.width_input, &self.height_input).ok();
        EditorSettings {
            default_width: size.map_or(fallback.default_width, |s| s.width),
            default_height: size.map_or(fallback.default_height, |s| s.height),
            brush: self.brush,
            scale: self.scale,
            last_directory: self.last_directory.clone(),
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(&EditorSettings::default())
    }
}

/// One line per issue, for the error dialog.
pub fn issue_details(issues: &[MapIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
