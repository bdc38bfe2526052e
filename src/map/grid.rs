// src/map/grid.rs

use super::{GameObject, MapSize};

/// The cells of a map, stored row by row.
///
/// Row 0 is the bottom row of the map. It is the first line of a map file,
/// while the editor draws it at the bottom of the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: MapSize,
    cells: Vec<GameObject>,
}

impl Grid {
    /// Create a grid with every cell empty.
    pub fn new(size: MapSize) -> Self {
        Self {
            size,
            cells: vec![GameObject::Empty; size.cell_count()],
        }
    }

    /// Build a grid from bottom-up rows. Rows shorter than the longest one
    /// are padded with empty cells.
    pub fn from_rows(rows: Vec<Vec<GameObject>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for mut row in rows {
            row.resize(width, GameObject::Empty);
            cells.extend(row);
        }
        Self {
            size: MapSize::unchecked(width, height),
            cells,
        }
    }

    pub fn size(&self) -> MapSize {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.width
    }

    pub fn height(&self) -> usize {
        self.size.height
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.size.width && y < self.size.height {
            Some(y * self.size.width + x)
        } else {
            None
        }
    }

    /// Returns the object at column `x`, row `y` (0 = bottom).
    pub fn get(&self, x: usize, y: usize) -> Option<GameObject> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Stores `obj` at (`x`, `y`). Returns whether the cell changed;
    /// writes outside the grid are ignored.
    pub fn set(&mut self, x: usize, y: usize, obj: GameObject) -> bool {
        match self.index(x, y) {
            Some(i) if self.cells[i] != obj => {
                self.cells[i] = obj;
                true
            }
            _ => false,
        }
    }

    /// Rows from bottom to top.
    pub fn rows(&self) -> impl Iterator<Item = &[GameObject]> {
        // chunks() panics on zero; a zero-width grid has no cells anyway.
        self.cells.chunks(self.size.width.max(1))
    }

    pub fn count(&self, obj: GameObject) -> usize {
        self.cells.iter().filter(|&&c| c == obj).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(MapSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Grid {
        Grid::new(MapSize::new(16, 9).unwrap())
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = small();
        assert_eq!(grid.width(), 16);
        assert_eq!(grid.height(), 9);
        assert_eq!(grid.count(GameObject::Empty), 16 * 9);
        assert_eq!(grid.rows().count(), 9);
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = small();
        assert!(grid.set(3, 2, GameObject::Wall));
        assert_eq!(grid.get(3, 2), Some(GameObject::Wall));
        // Same value again is not a change.
        assert!(!grid.set(3, 2, GameObject::Wall));
        assert_eq!(grid.count(GameObject::Wall), 1);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut grid = small();
        assert!(!grid.set(16, 0, GameObject::Wall));
        assert!(!grid.set(0, 9, GameObject::Wall));
        assert_eq!(grid.get(16, 0), None);
        assert_eq!(grid.count(GameObject::Wall), 0);
    }

    #[test]
    fn test_rows_are_bottom_up() {
        let mut grid = small();
        grid.set(0, 0, GameObject::Pacman);
        grid.set(15, 8, GameObject::Wall);
        let rows: Vec<&[GameObject]> = grid.rows().collect();
        assert_eq!(rows[0][0], GameObject::Pacman);
        assert_eq!(rows[8][15], GameObject::Wall);
    }

    #[test]
    fn test_from_ragged_rows() {
        let grid = Grid::from_rows(vec![
            vec![GameObject::Wall; 3],
            vec![GameObject::Food],
        ]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(0, 1), Some(GameObject::Food));
        assert_eq!(grid.get(2, 1), Some(GameObject::Empty));
    }
}
