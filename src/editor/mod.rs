// src/editor/mod.rs

pub mod core;

pub use self::core::{issue_details, Action, Editor, ErrorReport, MapFileDialog};
