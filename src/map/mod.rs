// src/map/mod.rs
pub mod check;
pub mod grid;
pub mod object;
pub mod size;

pub use check::{check_objects, MapIssue};
pub use grid::Grid;
pub use object::GameObject;
pub use size::{MapSize, SizeError};
