// src/map/size.rs

use std::fmt;

use thiserror::Error;

use crate::config::{MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH};
use crate::utils::util::parse_dimension;

/// Width and height of a map, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapSize {
    pub width: usize,
    pub height: usize,
}

/// A single bound broken by a requested map size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeViolation {
    WidthTooSmall,
    WidthTooLarge,
    HeightTooSmall,
    HeightTooLarge,
}

impl fmt::Display for SizeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeViolation::WidthTooSmall => write!(f, "Minimum width: {} cells.", MIN_WIDTH),
            SizeViolation::WidthTooLarge => write!(f, "Maximum width: {} cells.", MAX_WIDTH),
            SizeViolation::HeightTooSmall => write!(f, "Minimum height: {} cells.", MIN_HEIGHT),
            SizeViolation::HeightTooLarge => write!(f, "Maximum height: {} cells.", MAX_HEIGHT),
        }
    }
}

/// Every bound broken by a requested size, in width-then-height order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid map size {width}x{height}")]
pub struct SizeError {
    pub width: usize,
    pub height: usize,
    pub violations: Vec<SizeViolation>,
}

impl SizeError {
    /// One line per violated bound, for error dialogs.
    pub fn details(&self) -> String {
        self.violations
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl MapSize {
    /// Validates a size for a new map.
    pub fn new(width: usize, height: usize) -> Result<Self, SizeError> {
        let mut violations = Vec::new();
        if width < MIN_WIDTH {
            violations.push(SizeViolation::WidthTooSmall);
        }
        if width > MAX_WIDTH {
            violations.push(SizeViolation::WidthTooLarge);
        }
        if height < MIN_HEIGHT {
            violations.push(SizeViolation::HeightTooSmall);
        }
        if height > MAX_HEIGHT {
            violations.push(SizeViolation::HeightTooLarge);
        }

        if violations.is_empty() {
            Ok(Self { width, height })
        } else {
            Err(SizeError {
                width,
                height,
                violations,
            })
        }
    }

    /// Validates a size typed into the width/height fields. Text that is not
    /// a number counts as zero.
    pub fn parse(width: &str, height: &str) -> Result<Self, SizeError> {
        Self::new(parse_dimension(width), parse_dimension(height))
    }

    /// A size taken from a loaded file, which is not held to the creation
    /// bounds.
    pub(crate) fn unchecked(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn within_bounds(&self) -> bool {
        Self::new(self.width, self.height).is_ok()
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

impl Default for MapSize {
    fn default() -> Self {
        Self {
            width: MIN_WIDTH,
            height: MIN_HEIGHT,
        }
    }
}

impl fmt::Display for MapSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_accepted() {
        assert!(MapSize::new(16, 9).is_ok());
        assert!(MapSize::new(99, 99).is_ok());
        assert!(MapSize::new(28, 31).is_ok());
    }

    #[test]
    fn test_all_violations_reported() {
        let err = MapSize::new(5, 120).unwrap_err();
        assert_eq!(
            err.violations,
            vec![SizeViolation::WidthTooSmall, SizeViolation::HeightTooLarge]
        );
        assert_eq!(err.details(), "Minimum width: 16 cells.\nMaximum height: 99 cells.");
    }

    #[test]
    fn test_width_too_large_and_height_too_small() {
        let err = MapSize::new(100, 8).unwrap_err();
        assert_eq!(
            err.violations,
            vec![SizeViolation::WidthTooLarge, SizeViolation::HeightTooSmall]
        );
    }

    #[test]
    fn test_parse_text_fields() {
        assert_eq!(MapSize::parse(" 20 ", "10").unwrap(), MapSize { width: 20, height: 10 });
        let err = MapSize::parse("abc", "").unwrap_err();
        assert_eq!(err.width, 0);
        assert_eq!(
            err.violations,
            vec![SizeViolation::WidthTooSmall, SizeViolation::HeightTooSmall]
        );
    }

    #[test]
    fn test_unchecked_size() {
        let size = MapSize::unchecked(3, 2);
        assert!(!size.within_bounds());
        assert_eq!(size.cell_count(), 6);
        assert_eq!(size.to_string(), "3x2");
    }
}
