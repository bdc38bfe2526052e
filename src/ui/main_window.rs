//! # Main Window Module
//!
//! This module wires the editor panels into an eframe application:
//! - A top menu bar for file actions.
//! - A left side panel for the map size, brush, scale and object counts.
//! - A central canvas with the map grid.
//! - A bottom status bar for messages.
//!
//! Dialogs are drawn on top of the panels and block editing while shown.
//! Closing the window goes through the same unsaved-changes prompt as the
//! File menu.

use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui::{self, Key};
use log::{info, warn};
use parking_lot::RwLock;

use crate::config::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::editor::{Action, Editor};
use crate::ui::central_panel::CentralPanel;
use crate::ui::dialog::DialogManager;
use crate::ui::file::NativeFileDialog;
use crate::ui::menu::MenuBar;
use crate::ui::side_panel::SidePanel;
use crate::ui::status_bar::StatusBar;

/// MainWindow holds the panels and dialogs around the shared editor.
pub struct MainWindow {
    editor: Arc<RwLock<Editor>>,
    menu: MenuBar,
    side_panel: SidePanel,
    central_panel: CentralPanel,
    status_bar: StatusBar,
    dialogs: DialogManager,
    files: NativeFileDialog,
    /// Where preferences are written on exit.
    settings_path: Option<PathBuf>,
    title: String,
}

impl MainWindow {
    pub fn new(editor: Editor, settings_path: Option<PathBuf>) -> Self {
        let editor = Arc::new(RwLock::new(editor));
        Self {
            menu: MenuBar::new(editor.clone()),
            side_panel: SidePanel::new(editor.clone()),
            central_panel: CentralPanel::new(editor.clone()),
            status_bar: StatusBar::new(editor.clone()),
            editor,
            dialogs: DialogManager::new(),
            files: NativeFileDialog,
            settings_path,
            title: String::new(),
        }
    }

    /// Window title: file name and a modified marker.
    fn window_title(&self) -> String {
        let editor = self.editor.read();
        let name = editor
            .document()
            .path()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_owned());
        let modified = if editor.has_unsaved_changes() { "*" } else { "" };
        format!("{}{} - {}", name, modified, WINDOW_TITLE)
    }

    /// Ctrl+N / Ctrl+O / Ctrl+S.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (new, open, save) = {
            let input = ctx.input();
            let command = input.modifiers.command;
            (
                command && input.key_pressed(Key::N),
                command && input.key_pressed(Key::O),
                command && input.key_pressed(Key::S),
            )
        };
        let mut editor = self.editor.write();
        if new {
            editor.request(Action::NewMap, &mut self.files);
        } else if open {
            editor.request(Action::OpenMap, &mut self.files);
        } else if save {
            editor.save_map(&mut self.files);
        }
    }

    /// Moves editor prompts and errors into the dialog manager.
    fn sync_dialogs(&mut self) {
        if self.dialogs.is_active() {
            return;
        }
        let mut editor = self.editor.write();
        if let Some(report) = editor.take_error_report() {
            self.dialogs.show_error(report);
        } else if let Some(action) = editor.pending_action() {
            self.dialogs.show_save_changes_dialog(action);
        }
    }

    fn save_settings(&self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        let settings = self.editor.read().settings();
        match settings.save(path) {
            Ok(()) => info!("Saved settings to {:?}", path),
            Err(e) => warn!("Failed to save settings to {:?}: {}", path, e),
        }
    }
}

impl eframe::App for MainWindow {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let enabled = !self.dialogs.is_active();
        if enabled {
            self.handle_shortcuts(ctx);
        }

        self.menu.update(ctx, enabled);
        self.status_bar.update(ctx);
        self.side_panel.update(ctx, enabled);
        self.central_panel.update(ctx, enabled);

        self.sync_dialogs();
        if let Some(choice) = self.dialogs.update(ctx) {
            self.editor.write().resolve_unsaved_changes(choice, &mut self.files);
            // An error raised while saving shows up next frame.
            ctx.request_repaint();
        }

        let title = self.window_title();
        if title != self.title {
            frame.set_window_title(&title);
            self.title = title;
        }

        if self.editor.read().exit_confirmed() {
            frame.close();
        }
    }

    fn on_close_event(&mut self) -> bool {
        // A prompt or error is already up; the user answers it first.
        if self.dialogs.is_active() || self.editor.read().pending_action().is_some() {
            return false;
        }
        if !self.editor.read().can_close() {
            self.editor.write().request(Action::Exit, &mut self.files);
        }
        let can_close = self.editor.read().can_close();
        if can_close {
            self.save_settings();
        }
        can_close
    }
}

/// Runs the editor as a native egui application. Returns when the window
/// closes.
pub fn run_main_window(editor: Editor, settings_path: Option<PathBuf>) {
    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(WINDOW_WIDTH, WINDOW_HEIGHT)),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |_cc| Box::new(MainWindow::new(editor, settings_path))),
    );
}
