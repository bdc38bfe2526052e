// src/ui/theme.rs

use eframe::egui::Color32;

use crate::map::GameObject;

pub const BACKGROUND: Color32 = Color32::from_rgb(12, 12, 20);
pub const GRID_LINE: Color32 = Color32::from_rgb(40, 40, 56);
pub const HOVER: Color32 = Color32::from_rgba_premultiplied(90, 90, 90, 90);

/// How an object is drawn inside its cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Glyph {
    None,
    /// Fills the whole cell.
    Block,
    /// A centered disc; the radius is a fraction of the cell size.
    Disc(f32),
}

pub fn color(obj: GameObject) -> Color32 {
    match obj {
        GameObject::Empty => BACKGROUND,
        GameObject::Wall => Color32::from_rgb(33, 33, 222),
        GameObject::Food => Color32::from_rgb(255, 184, 151),
        GameObject::XFood => Color32::from_rgb(255, 220, 180),
        GameObject::Pacman => Color32::from_rgb(255, 255, 0),
        GameObject::RedGhost => Color32::from_rgb(255, 0, 0),
        GameObject::GreenGhost => Color32::from_rgb(0, 200, 70),
        GameObject::BlueGhost => Color32::from_rgb(0, 255, 255),
        GameObject::PurpleGhost => Color32::from_rgb(180, 80, 255),
    }
}

pub fn glyph(obj: GameObject) -> Glyph {
    match obj {
        GameObject::Empty => Glyph::None,
        GameObject::Wall => Glyph::Block,
        GameObject::Food => Glyph::Disc(0.1),
        GameObject::XFood => Glyph::Disc(0.25),
        _ => Glyph::Disc(0.4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_object_but_empty_is_visible() {
        for obj in GameObject::paintable() {
            assert_ne!(glyph(*obj), Glyph::None, "{:?} would be invisible", obj);
            assert_ne!(color(*obj), BACKGROUND);
        }
    }

    #[test]
    fn test_ghosts_have_distinct_colors() {
        let ghosts = [
            GameObject::RedGhost,
            GameObject::GreenGhost,
            GameObject::BlueGhost,
            GameObject::PurpleGhost,
        ];
        for (i, a) in ghosts.iter().enumerate() {
            for b in &ghosts[i + 1..] {
                assert_ne!(color(*a), color(*b));
            }
        }
    }
}
