// src/ui/menu.rs

use std::sync::Arc;

use eframe::egui::{self, Context};
use parking_lot::RwLock;

use crate::editor::{Action, Editor};
use crate::ui::file::NativeFileDialog;

pub struct MenuBar {
    editor: Arc<RwLock<Editor>>,
    files: NativeFileDialog,
}

impl MenuBar {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self {
            editor,
            files: NativeFileDialog,
        }
    }

    pub fn update(&mut self, ctx: &Context, enabled: bool) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.set_enabled(enabled);
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("New").clicked() {
                        self.editor.write().request(Action::NewMap, &mut self.files);
                        ui.close_menu();
                    }
                    if ui.button("Open...").clicked() {
                        self.editor.write().request(Action::OpenMap, &mut self.files);
                        ui.close_menu();
                    }
                    if ui.button("Save...").clicked() {
                        self.editor.write().save_map(&mut self.files);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        // The main window closes once the exit is confirmed.
                        self.editor.write().request(Action::Exit, &mut self.files);
                        ui.close_menu();
                    }
                });
            });
        });
    }
}
