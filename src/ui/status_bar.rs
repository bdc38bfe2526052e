// src/ui/status_bar.rs

use std::sync::Arc;

use eframe::egui::{self, Context};
use parking_lot::RwLock;

use crate::editor::Editor;

pub struct StatusBar {
    editor: Arc<RwLock<Editor>>,
}

impl StatusBar {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self { editor }
    }

    pub fn update(&mut self, ctx: &Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let editor = self.editor.read(); // Keep the read lock short.

            let coord_label = match editor.hovered_cell {
                Some((x, y)) => format!("({}, {})", x, y),
                None => String::new(),
            };
            let modified = if editor.has_unsaved_changes() { " *" } else { "" };

            ui.horizontal(|ui| {
                ui.label(editor.status_message.as_str());
                ui.label(coord_label);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Map: {}{}", editor.document().size(), modified));
                });
            });
        });
    }
}
