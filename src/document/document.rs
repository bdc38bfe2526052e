// src/document/document.rs

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use crate::map::{GameObject, Grid, MapSize};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("the map file contains no cells")]
    Empty,
}

/// The map being edited: its grid, where it lives on disk, and whether it
/// has changed since it was last loaded or saved.
#[derive(Debug, Clone, Default)]
pub struct Document {
    grid: Grid,
    path: Option<PathBuf>,
    dirty: bool,
}

impl Document {
    /// Create a document with an empty grid of the given size.
    pub fn new(size: MapSize) -> Self {
        Self {
            grid: Grid::new(size),
            path: None,
            dirty: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> MapSize {
        self.grid.size()
    }

    /// The file this document was last loaded from or saved to.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Sets a cell. Only a real change marks the document as modified.
    pub fn paint(&mut self, x: usize, y: usize, obj: GameObject) -> bool {
        let changed = self.grid.set(x, y, obj);
        if changed {
            self.dirty = true;
        }
        changed
    }

    // --- Text format ---

    /// Parses a map file: one line per row, bottom row first, one symbol per
    /// cell.
    ///
    /// Unknown symbols become empty cells and short lines are padded to the
    /// longest one. Loaded sizes are not held to the new-map bounds.
    pub fn read_from<R: BufRead>(reader: R) -> Result<Self, DocumentError> {
        let mut rows = Vec::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            let row: Vec<GameObject> = line
                .chars()
                .enumerate()
                .map(|(col, c)| {
                    if !GameObject::is_symbol(c) {
                        warn!(
                            "Unknown map symbol {:?} at line {}, column {}; using empty cell",
                            c,
                            line_no + 1,
                            col + 1
                        );
                    }
                    GameObject::from_symbol(c)
                })
                .collect();
            rows.push(row);
        }

        let grid = Grid::from_rows(rows);
        if grid.width() == 0 || grid.height() == 0 {
            return Err(DocumentError::Empty);
        }
        if !grid.size().within_bounds() {
            warn!("Loaded map size {} is outside the new-map bounds", grid.size());
        }

        Ok(Self {
            grid,
            path: None,
            dirty: false,
        })
    }

    /// Writes the grid in the map file format.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for row in self.grid.rows() {
            let line: String = row.iter().map(|o| o.symbol()).collect();
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }

    /// Reads a map file from disk.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let file = File::open(path)?;
        let mut doc = Self::read_from(BufReader::new(file))?;
        doc.path = Some(path.to_path_buf());
        info!("Loaded {} map from {:?}", doc.size(), path);
        Ok(doc)
    }

    /// Writes the map to disk and marks the document as saved.
    pub fn save(&mut self, path: &Path) -> Result<(), DocumentError> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_to(&mut out)?;
        self.path = Some(path.to_path_buf());
        self.dirty = false;
        info!("Saved {} map to {:?}", self.size(), path);
        Ok(())
    }
}
