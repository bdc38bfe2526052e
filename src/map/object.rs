// src/map/object.rs

use serde::{Deserialize, Serialize};

/// Everything a single map cell can hold.
///
/// Each variant has a one-character symbol used by the text map format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameObject {
    #[default]
    Empty,
    Wall,
    Food,
    XFood,
    Pacman,
    RedGhost,
    GreenGhost,
    BlueGhost,
    PurpleGhost,
}

impl GameObject {
    /// All objects, in declaration order.
    pub const ALL: [GameObject; 9] = [
        GameObject::Empty,
        GameObject::Wall,
        GameObject::Food,
        GameObject::XFood,
        GameObject::Pacman,
        GameObject::RedGhost,
        GameObject::GreenGhost,
        GameObject::BlueGhost,
        GameObject::PurpleGhost,
    ];

    /// Brush choices: everything but `Empty`.
    pub const PAINTABLE: [GameObject; 8] = [
        GameObject::Wall,
        GameObject::Food,
        GameObject::XFood,
        GameObject::Pacman,
        GameObject::RedGhost,
        GameObject::GreenGhost,
        GameObject::BlueGhost,
        GameObject::PurpleGhost,
    ];

    /// Objects that must appear exactly once on a saved map, in the order
    /// their problems are reported.
    pub const UNIQUE: [GameObject; 5] = [
        GameObject::Pacman,
        GameObject::RedGhost,
        GameObject::BlueGhost,
        GameObject::GreenGhost,
        GameObject::PurpleGhost,
    ];

    /// The character written to map files for this object.
    pub fn symbol(self) -> char {
        match self {
            GameObject::Empty => '0',
            GameObject::Wall => '1',
            GameObject::Food => '_',
            GameObject::XFood => '*',
            GameObject::Pacman => 's',
            GameObject::RedGhost => 'r',
            GameObject::GreenGhost => 'g',
            GameObject::BlueGhost => 'b',
            GameObject::PurpleGhost => 'p',
        }
    }

    /// Decodes a map file character. Unknown characters decode to `Empty`.
    pub fn from_symbol(symbol: char) -> GameObject {
        Self::ALL
            .iter()
            .copied()
            .find(|o| o.symbol() == symbol)
            .unwrap_or_default()
    }

    /// Whether `symbol` belongs to the map file alphabet.
    pub fn is_symbol(symbol: char) -> bool {
        Self::ALL.iter().any(|o| o.symbol() == symbol)
    }

    /// Returns a user-friendly name for the brush selector.
    pub fn label(self) -> &'static str {
        match self {
            GameObject::Empty => "Empty",
            GameObject::Wall => "Wall",
            GameObject::Food => "Food",
            GameObject::XFood => "Power pellet",
            GameObject::Pacman => "Pac-Man",
            GameObject::RedGhost => "Red ghost",
            GameObject::GreenGhost => "Green ghost",
            GameObject::BlueGhost => "Blue ghost",
            GameObject::PurpleGhost => "Purple ghost",
        }
    }

    /// Objects offered as brushes. Erasing is done with Shift, so `Empty`
    /// is not one of them.
    pub fn paintable() -> &'static [GameObject] {
        &Self::PAINTABLE
    }

    pub fn is_unique(self) -> bool {
        Self::UNIQUE.contains(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_distinct() {
        for a in GameObject::ALL {
            for b in GameObject::ALL {
                if a != b {
                    assert_ne!(a.symbol(), b.symbol(), "{:?} and {:?} share a symbol", a, b);
                }
            }
        }
    }

    #[test]
    fn test_file_symbols() {
        let symbols: String = GameObject::ALL.iter().map(|o| o.symbol()).collect();
        assert_eq!(symbols, "01_*srgbp");
    }

    #[test]
    fn test_from_symbol() {
        assert_eq!(GameObject::from_symbol('s'), GameObject::Pacman);
        assert_eq!(GameObject::from_symbol('*'), GameObject::XFood);
        assert_eq!(GameObject::from_symbol('x'), GameObject::Empty);
        assert_eq!(GameObject::from_symbol('S'), GameObject::Empty);
        assert!(GameObject::is_symbol('0'));
        assert!(!GameObject::is_symbol('x'));
    }

    #[test]
    fn test_paintable_excludes_empty() {
        let brushes = GameObject::paintable();
        assert_eq!(brushes.len(), 8);
        assert_eq!(brushes[0], GameObject::Wall);
        assert_eq!(brushes, &GameObject::ALL[1..]);
        assert!(!brushes.contains(&GameObject::Empty));
    }

    #[test]
    fn test_unique_objects() {
        assert!(GameObject::Pacman.is_unique());
        assert!(GameObject::PurpleGhost.is_unique());
        assert!(!GameObject::Wall.is_unique());
        assert!(!GameObject::XFood.is_unique());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&GameObject::RedGhost).unwrap();
        assert_eq!(json, "\"red_ghost\"");
        let back: GameObject = serde_json::from_str("\"x_food\"").unwrap();
        assert_eq!(back, GameObject::XFood);
    }
}
