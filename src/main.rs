#![warn(non_snake_case)]
//! # Pac-Man Map Editor Entry Point
//!
//! A tile map editor for Pac-Man style levels. This file parses the command line,
//! initializes logging and settings, and then either checks a map file headlessly
//! or starts the editor window using eframe/egui.
//!
//! ## License
//! Licensed under the MIT License.

use std::error::Error;
use std::io;
use std::process;

use clap::Parser;
use log::{error, info};

use pacman_map_editor::cli::{self, Args};
use pacman_map_editor::config::EditorSettings;
use pacman_map_editor::editor::Editor;
use pacman_map_editor::ui;

/// Initialize logging. `RUST_LOG` wins unless `--debug` is given.
fn init_logging(debug: bool) {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.debug);

    if let Some(path) = &args.check {
        let valid = match cli::check_map(path, &mut io::stdout()) {
            Ok(valid) => valid,
            Err(e) => {
                error!("Cannot check {:?}: {}", path, e);
                println!("{}: {}", path.display(), e);
                false
            }
        };
        process::exit(if valid { 0 } else { 1 });
    }

    info!("Pac-Man Map Editor starting...");

    let settings_path = args.settings.clone().or_else(EditorSettings::default_path);
    let settings = EditorSettings::load_or_default(settings_path.as_deref());

    let mut editor = Editor::new(&settings);
    if let Some(map) = &args.map {
        editor.open_path(map);
    }

    // Run the egui application.
    ui::run_main_window(editor, settings_path);

    info!("Pac-Man Map Editor exiting.");
    Ok(())
}
