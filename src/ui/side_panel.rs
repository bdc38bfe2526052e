// src/ui/side_panel.rs

use std::sync::Arc;

use eframe::egui::{self, Color32, Context, RichText, Ui};
use parking_lot::RwLock;

use crate::config::{MAX_SCALE, MIN_SCALE, SCALE_STEP};
use crate::editor::{Action, Editor};
use crate::map::GameObject;
use crate::ui::file::NativeFileDialog;
use crate::ui::theme;

/// Manages the left-side panel: map size, brush, scale, and object counts.
pub struct SidePanel {
    editor: Arc<RwLock<Editor>>,
    files: NativeFileDialog,
}

impl SidePanel {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self {
            editor,
            files: NativeFileDialog,
        }
    }

    /// Called each frame.
    pub fn update(&mut self, ctx: &Context, enabled: bool) {
        egui::SidePanel::left("tools_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.set_enabled(enabled);
                self.show_size(ui);
                ui.separator();
                self.show_brush(ui);
                ui.separator();
                self.show_view(ui);
                ui.separator();
                self.show_counts(ui);
            });
    }

    fn show_size(&mut self, ui: &mut Ui) {
        ui.heading("Map");
        let mut create = false;
        {
            let mut editor = self.editor.write();
            egui::Grid::new("map_size").num_columns(2).show(ui, |ui| {
                ui.label("Width:");
                ui.add(egui::TextEdit::singleline(&mut editor.width_input).desired_width(48.0));
                ui.end_row();
                ui.label("Height:");
                ui.add(egui::TextEdit::singleline(&mut editor.height_input).desired_width(48.0));
                ui.end_row();
            });
            if ui.button("Create").clicked() {
                create = true;
            }
        }
        if create {
            self.editor.write().request(Action::NewMap, &mut self.files);
        }
    }

    fn show_brush(&self, ui: &mut Ui) {
        ui.heading("Brush");
        let mut editor = self.editor.write();
        let mut brush = editor.brush();
        egui::ComboBox::from_id_source("brush_selector")
            .selected_text(RichText::new(brush.label()).color(theme::color(brush)))
            .show_ui(ui, |ui| {
                for &obj in GameObject::paintable() {
                    ui.selectable_value(&mut brush, obj, RichText::new(obj.label()).color(theme::color(obj)));
                }
            });
        editor.set_brush(brush);
        ui.small("Click or drag to paint. Hold Shift to erase.");
    }

    fn show_view(&self, ui: &mut Ui) {
        ui.heading("View");
        let mut editor = self.editor.write();
        let mut scale = editor.scale();
        let slider = egui::Slider::new(&mut scale, MIN_SCALE..=MAX_SCALE)
            .step_by(SCALE_STEP as f64)
            .text("Scale");
        if ui.add(slider).changed() {
            editor.set_scale(scale);
        }
    }

    /// Objects that must appear exactly once, with a check mark when they do.
    fn show_counts(&self, ui: &mut Ui) {
        ui.heading("Objects");
        let counts = self.editor.read().unique_counts();
        for (obj, count) in counts {
            let (mark, color) = if count == 1 {
                ("✔", Color32::LIGHT_GREEN)
            } else {
                ("✖", Color32::LIGHT_RED)
            };
            ui.horizontal(|ui| {
                ui.label(RichText::new(mark).color(color));
                ui.label(format!("{}: {}", obj.label(), count));
            });
        }
    }
}
