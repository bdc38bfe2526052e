// src/ui/file.rs

use std::path::{Path, PathBuf};

use log::info;
use rfd::FileDialog;

use crate::config::MAP_EXTENSIONS;
use crate::editor::MapFileDialog;

/// Native open/save dialogs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFileDialog;

fn map_dialog(start_dir: Option<&Path>) -> FileDialog {
    let dialog = FileDialog::new()
        .add_filter("Map Files", MAP_EXTENSIONS)
        .add_filter("All Files", &["*"]);
    match start_dir {
        Some(dir) if dir.is_dir() => dialog.set_directory(dir),
        _ => dialog,
    }
}

impl MapFileDialog for NativeFileDialog {
    fn pick_open(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        let path = map_dialog(start_dir).pick_file();
        if let Some(p) = &path {
            info!("Selected file: {:?}", p);
        }
        path
    }

    fn pick_save(&mut self, start_dir: Option<&Path>, file_name: &str) -> Option<PathBuf> {
        let path = map_dialog(start_dir).set_file_name(file_name).save_file();
        if let Some(p) = &path {
            info!("Saving to: {:?}", p);
        }
        path
    }
}
