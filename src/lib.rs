// src/lib.rs

pub mod cli;
pub mod config;
pub mod document;
pub mod editor;
pub mod map;
pub mod ui;
pub mod utils;
