//! # Utility Module
//!
//! Small helpers shared by the editor and the UI.
//!
//! ## Example Function: `snap_scale`
//!
//! The `snap_scale` function keeps the canvas scale on the spinner's grid: it clamps
//! the value to the allowed range and rounds it to the nearest step.

use crate::config::{MAX_SCALE, MIN_SCALE, SCALE_STEP};

/// Reads a map dimension typed by the user.
///
/// Surrounding whitespace is ignored. Anything that is not a non-negative
/// integer yields `0`, which the size check then rejects as too small.
///
/// # Examples
///
/// ```
/// use pacman_map_editor::utils::util::parse_dimension;
///
/// assert_eq!(parse_dimension(" 28 "), 28);
/// assert_eq!(parse_dimension("twelve"), 0);
/// ```
pub fn parse_dimension(text: &str) -> usize {
    text.trim().parse().unwrap_or(0)
}

/// Clamps a scale to the supported range and rounds it to the spinner step.
///
/// # Examples
///
/// ```
/// use pacman_map_editor::utils::util::snap_scale;
///
/// assert!((snap_scale(0.73) - 0.7).abs() < 1e-6);
/// assert!((snap_scale(3.0) - 1.0).abs() < 1e-6);
/// ```
pub fn snap_scale(value: f32) -> f32 {
    if !value.is_finite() {
        return MAX_SCALE;
    }
    let clamped = value.clamp(MIN_SCALE, MAX_SCALE);
    (clamped / SCALE_STEP).round() * SCALE_STEP
}
