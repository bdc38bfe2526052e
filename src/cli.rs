//! Process command-line options.
//!
//! Without options the editor window opens with an empty map. A map path
//! opens that map instead. `--check` validates a map file without opening a
//! window, which is handy in level build scripts:
//!
//! ```text
//! $ pacman_map_editor --check levels/level1.txt
//! levels/level1.txt: 28x31 map
//! The map must contain exactly one purple ghost (found 0).
//! ```

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::document::{Document, DocumentError};
use crate::map::check_objects;

/// Tile map editor for Pac-Man levels.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
pub struct Args {
    /// Map file to open at startup
    pub map: Option<PathBuf>,

    /// Validate a map file and exit without opening a window
    #[arg(short, long, value_name = "MAP", conflicts_with = "map")]
    pub check: Option<PathBuf>,

    /// Settings file to use instead of the per-user one
    #[arg(short, long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

/// Why a `--check` run failed.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("cannot write report: {0}")]
    Output(#[from] io::Error),
}

/// Loads the map at `path` and writes a report to `out`.
///
/// Returns whether the map is ready to be saved by the editor: both object
/// counts and dimensions are checked.
pub fn check_map<W: Write>(path: &Path, out: &mut W) -> Result<bool, CheckError> {
    let doc = Document::load(path)?;
    let size = doc.size();
    writeln!(out, "{}: {} map", path.display(), size)?;

    let mut ok = true;
    if !size.within_bounds() {
        writeln!(out, "Map size {} is outside the editor bounds.", size)?;
        ok = false;
    }
    for issue in check_objects(doc.grid()) {
        writeln!(out, "{}", issue)?;
        ok = false;
    }
    if ok {
        writeln!(out, "OK")?;
    }
    Ok(ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pacman_map_editor_cli_{}_{}.txt", std::process::id(), name))
    }

    fn row(symbols: &str) -> String {
        format!("{:0<16}\n", symbols)
    }

    #[test]
    fn test_args() {
        let args = Args::parse_from(["pacman_map_editor", "--check", "level.txt", "--debug"]);
        assert_eq!(args.check, Some(PathBuf::from("level.txt")));
        assert!(args.debug);
        assert!(args.map.is_none());

        let args = Args::parse_from(["pacman_map_editor", "level.txt", "-s", "prefs.json"]);
        assert_eq!(args.map, Some(PathBuf::from("level.txt")));
        assert_eq!(args.settings, Some(PathBuf::from("prefs.json")));
    }

    #[test]
    fn test_args_conflict() {
        assert!(Args::try_parse_from(["pacman_map_editor", "a.txt", "--check", "b.txt"]).is_err());
    }

    #[test]
    fn test_check_valid_map() {
        let path = temp_file("valid");
        let mut text = row("srgbp");
        for _ in 0..8 {
            text.push_str(&row("1_*"));
        }
        fs::write(&path, text).unwrap();

        let mut out = Vec::new();
        assert!(check_map(&path, &mut out).unwrap());
        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("16x9 map"));
        assert!(report.ends_with("OK\n"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_check_reports_problems() {
        let path = temp_file("invalid");
        fs::write(&path, "ss\n11\n").unwrap();

        let mut out = Vec::new();
        assert!(!check_map(&path, &mut out).unwrap());
        let report = String::from_utf8(out).unwrap();
        assert!(report.contains("outside the editor bounds"));
        assert!(report.contains("exactly one pac-man (found 2)"));
        assert!(report.contains("exactly one red ghost (found 0)"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_check_missing_file() {
        let mut out = Vec::new();
        let result = check_map(&temp_file("missing"), &mut out);
        assert!(matches!(result, Err(CheckError::Document(DocumentError::Io(_)))));
    }

    #[test]
    fn test_check_empty_file() {
        let path = temp_file("empty");
        fs::write(&path, "").unwrap();
        let mut out = Vec::new();
        let result = check_map(&path, &mut out);
        assert!(matches!(result, Err(CheckError::Document(DocumentError::Empty))));
        assert!(out.is_empty());
        let _ = fs::remove_file(&path);
    }
}
