//! Central panel UI module: draws the map grid and turns pointer input into
//! paint strokes.

use std::sync::Arc;

use eframe::egui::{self, Context, Painter, PointerButton, Pos2, Rect, Sense, Stroke, Vec2};
use parking_lot::RwLock;

use crate::config::CELL_SIZE;
use crate::editor::Editor;
use crate::map::Grid;
use crate::ui::theme::{self, Glyph};

/// The main viewport of the editor.
pub struct CentralPanel {
    editor: Arc<RwLock<Editor>>,
}

impl CentralPanel {
    pub fn new(editor: Arc<RwLock<Editor>>) -> Self {
        Self { editor }
    }

    /// Called each frame to update the central panel. Painting is disabled
    /// while a dialog is open.
    pub fn update(&mut self, ctx: &Context, enabled: bool) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::BACKGROUND))
            .show(ctx, |ui| {
                egui::ScrollArea::both().show(ui, |ui| {
                    let cell = CELL_SIZE * self.editor.read().scale();
                    let (width, height) = {
                        let editor = self.editor.read();
                        let size = editor.document().size();
                        (size.width, size.height)
                    };
                    let desired = Vec2::new(width as f32 * cell, height as f32 * cell);
                    let (response, painter) = ui.allocate_painter(desired, Sense::click_and_drag());
                    let origin = response.rect.min;

                    // --- Input ---
                    let hovered = response
                        .hover_pos()
                        .and_then(|pos| screen_to_cell(origin, pos, cell, width, height));
                    let painting = response.clicked_by(PointerButton::Primary)
                        || response.dragged_by(PointerButton::Primary);
                    if enabled && painting {
                        if let Some((x, y)) = response
                            .interact_pointer_pos()
                            .and_then(|pos| screen_to_cell(origin, pos, cell, width, height))
                        {
                            let erase = ui.input().modifiers.shift;
                            self.editor.write().paint(x, y, erase);
                        }
                    }

                    // --- Drawing ---
                    let mut editor = self.editor.write();
                    editor.hovered_cell = if enabled { hovered } else { None };
                    draw_grid(&painter, editor.document().grid(), origin, cell);
                    if let (true, Some((x, y))) = (enabled, hovered) {
                        painter.rect_filled(cell_rect(origin, cell, x, y, height), 0.0, theme::HOVER);
                    }
                });
            });
    }
}

/// Converts a screen position into (column, row) with row 0 at the bottom.
pub fn screen_to_cell(origin: Pos2, pos: Pos2, cell: f32, width: usize, height: usize) -> Option<(usize, usize)> {
    let local = pos - origin;
    if local.x < 0.0 || local.y < 0.0 || cell <= 0.0 {
        return None;
    }
    let col = (local.x / cell) as usize;
    let display_row = (local.y / cell) as usize;
    if col >= width || display_row >= height {
        return None;
    }
    Some((col, height - 1 - display_row))
}

/// Screen rectangle of cell (`x`, `y`), drawing row 0 at the bottom.
fn cell_rect(origin: Pos2, cell: f32, x: usize, y: usize, height: usize) -> Rect {
    let display_row = height - 1 - y;
    Rect::from_min_size(
        origin + Vec2::new(x as f32 * cell, display_row as f32 * cell),
        Vec2::splat(cell),
    )
}

fn draw_grid(painter: &Painter, grid: &Grid, origin: Pos2, cell: f32) {
    let height = grid.height();
    let outline = Stroke::new(1.0, theme::GRID_LINE);
    for (y, row) in grid.rows().enumerate() {
        for (x, &obj) in row.iter().enumerate() {
            let rect = cell_rect(origin, cell, x, y, height);
            painter.rect_filled(rect, 0.0, theme::BACKGROUND);
            match theme::glyph(obj) {
                Glyph::None => {}
                Glyph::Block => painter.rect_filled(rect.shrink(1.0), 2.0, theme::color(obj)),
                Glyph::Disc(radius) => painter.circle_filled(rect.center(), cell * radius, theme::color(obj)),
            }
            painter.rect_stroke(rect, 0.0, outline);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_left_is_top_row() {
        let origin = Pos2::new(10.0, 20.0);
        assert_eq!(screen_to_cell(origin, Pos2::new(11.0, 21.0), 32.0, 16, 9), Some((0, 8)));
    }

    #[test]
    fn test_bottom_right_is_row_zero() {
        let origin = Pos2::ZERO;
        let pos = Pos2::new(16.0 * 32.0 - 1.0, 9.0 * 32.0 - 1.0);
        assert_eq!(screen_to_cell(origin, pos, 32.0, 16, 9), Some((15, 0)));
    }

    #[test]
    fn test_outside_grid() {
        let origin = Pos2::ZERO;
        assert_eq!(screen_to_cell(origin, Pos2::new(-1.0, 5.0), 32.0, 16, 9), None);
        assert_eq!(screen_to_cell(origin, Pos2::new(16.0 * 32.0, 5.0), 32.0, 16, 9), None);
        assert_eq!(screen_to_cell(origin, Pos2::new(5.0, 9.0 * 32.0), 32.0, 16, 9), None);
    }

    #[test]
    fn test_scaled_cells() {
        // Scale 0.5 makes cells 16 points wide.
        assert_eq!(screen_to_cell(Pos2::ZERO, Pos2::new(17.0, 1.0), 16.0, 16, 9), Some((1, 8)));
    }

    #[test]
    fn test_cell_rect_matches_lookup() {
        let origin = Pos2::new(3.0, 4.0);
        let rect = cell_rect(origin, 20.0, 5, 2, 9);
        assert_eq!(screen_to_cell(origin, rect.center(), 20.0, 16, 9), Some((5, 2)));
    }
}
