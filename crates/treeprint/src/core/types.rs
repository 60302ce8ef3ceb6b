//! Core type definitions for tree rendering
//!
//! This module contains the render configuration and the digit width that
//! controls how many columns each key occupies.

use std::fmt;
use std::str::FromStr;

use super::error::{Result, TreeError};

/// Smallest key any digit width accepts
pub const MIN_KEY: i64 = 0;

/// Default ceiling on the number of levels that can be rendered
pub const DEFAULT_MAX_LEVELS: usize = 6;

/// Largest `max_levels` a configuration may request
///
/// The widest level of a tree this tall is already tens of thousands of
/// columns wide.
pub const MAX_SUPPORTED_LEVELS: usize = 16;

/// Line emitted in place of a grid when there is no root
pub const EMPTY_TREE_MESSAGE: &str = "The tree is empty.";

/// Fixed number of columns reserved for every printed key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum DigitWidth {
    /// Keys `0..=99`
    #[default]
    Two,
    /// Keys `0..=999`
    Three,
    /// Keys `0..=9999`
    Four,
}

impl DigitWidth {
    /// All supported widths, narrowest first
    pub const ALL: [DigitWidth; 3] = [DigitWidth::Two, DigitWidth::Three, DigitWidth::Four];

    /// Number of columns a key occupies
    pub fn width(&self) -> usize {
        match self {
            DigitWidth::Two => 2,
            DigitWidth::Three => 3,
            DigitWidth::Four => 4,
        }
    }

    /// Smallest key accepted at this width
    pub fn min_key(&self) -> i64 {
        MIN_KEY
    }

    /// Largest key accepted at this width
    pub fn max_key(&self) -> i64 {
        match self {
            DigitWidth::Two => 99,
            DigitWidth::Three => 999,
            DigitWidth::Four => 9999,
        }
    }

    /// Returns true if `key` can be printed at this width
    pub fn accepts(&self, key: i64) -> bool {
        (self.min_key()..=self.max_key()).contains(&key)
    }

    /// Check `key` against the accepted range
    pub fn check_key(&self, key: i64) -> Result<()> {
        if self.accepts(key) {
            Ok(())
        } else {
            Err(TreeError::out_of_range_key(
                key,
                self.min_key(),
                self.max_key(),
            ))
        }
    }

    /// Format a key into exactly `width()` columns
    ///
    /// Short keys are nudged so that their digits sit near the middle of the
    /// slot, where the edges of the line above converge.
    pub fn format_key(&self, key: i64) -> String {
        match self {
            DigitWidth::Two => {
                if key < 10 {
                    format!(" {key}")
                } else {
                    key.to_string()
                }
            }
            DigitWidth::Three => {
                if key < 10 {
                    format!(" {key} ")
                } else if key < 100 {
                    format!("{key} ")
                } else {
                    key.to_string()
                }
            }
            DigitWidth::Four => {
                if key < 10 {
                    format!(" {key}  ")
                } else if key < 100 {
                    format!(" {key} ")
                } else if key < 1000 {
                    format!("{key} ")
                } else {
                    key.to_string()
                }
            }
        }
    }
}

impl fmt::Display for DigitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.width())
    }
}

impl FromStr for DigitWidth {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "2" | "two" => Ok(DigitWidth::Two),
            "3" | "three" => Ok(DigitWidth::Three),
            "4" | "four" => Ok(DigitWidth::Four),
            _ => Err(format!("Unknown digit width: {}", s)),
        }
    }
}

impl TryFrom<u8> for DigitWidth {
    type Error = TreeError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            2 => Ok(DigitWidth::Two),
            3 => Ok(DigitWidth::Three),
            4 => Ok(DigitWidth::Four),
            other => Err(TreeError::invalid_config(format!(
                "digit width must be 2, 3 or 4, got {}",
                other
            ))),
        }
    }
}

/// Layout parameters for a render call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderConfig {
    pub digit_width: DigitWidth,
    pub max_levels: usize,
}

impl RenderConfig {
    pub fn new(digit_width: DigitWidth, max_levels: usize) -> Self {
        Self {
            digit_width,
            max_levels,
        }
    }

    pub fn with_digit_width(mut self, digit_width: DigitWidth) -> Self {
        self.digit_width = digit_width;
        self
    }

    pub fn with_max_levels(mut self, max_levels: usize) -> Self {
        self.max_levels = max_levels;
        self
    }

    /// Reject level ceilings the layout cannot honour
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_SUPPORTED_LEVELS).contains(&self.max_levels) {
            return Err(TreeError::invalid_config(format!(
                "max_levels must be between 1 and {}, got {}",
                MAX_SUPPORTED_LEVELS, self.max_levels
            )));
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(DigitWidth::default(), DEFAULT_MAX_LEVELS)
    }
}

impl fmt::Display for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "digits={} max-levels={}",
            self.digit_width, self.max_levels
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ranges() {
        assert_eq!(DigitWidth::Two.max_key(), 99);
        assert_eq!(DigitWidth::Three.max_key(), 999);
        assert_eq!(DigitWidth::Four.max_key(), 9999);
        for width in DigitWidth::ALL {
            assert_eq!(width.min_key(), 0);
            assert!(width.accepts(0));
            assert!(!width.accepts(-1));
            assert!(!width.accepts(width.max_key() + 1));
        }
    }

    #[test]
    fn test_check_key_reports_range() {
        match DigitWidth::Two.check_key(100) {
            Err(TreeError::OutOfRangeKey { key, min, max }) => {
                assert_eq!((key, min, max), (100, 0, 99));
            }
            other => panic!("Expected OutOfRangeKey, got {:?}", other),
        }
        assert!(DigitWidth::Three.check_key(100).is_ok());
    }

    #[test]
    fn test_format_two_digits() {
        assert_eq!(DigitWidth::Two.format_key(7), " 7");
        assert_eq!(DigitWidth::Two.format_key(42), "42");
    }

    #[test]
    fn test_format_three_digits() {
        assert_eq!(DigitWidth::Three.format_key(7), " 7 ");
        assert_eq!(DigitWidth::Three.format_key(42), "42 ");
        assert_eq!(DigitWidth::Three.format_key(512), "512");
    }

    #[test]
    fn test_format_four_digits() {
        assert_eq!(DigitWidth::Four.format_key(7), " 7  ");
        assert_eq!(DigitWidth::Four.format_key(42), " 42 ");
        assert_eq!(DigitWidth::Four.format_key(512), "512 ");
        assert_eq!(DigitWidth::Four.format_key(2048), "2048");
    }

    #[test]
    fn test_formatted_keys_fill_the_slot() {
        for width in DigitWidth::ALL {
            for key in [0, 9, 10, 99, width.max_key()] {
                assert_eq!(width.format_key(key).len(), width.width(), "key {}", key);
            }
        }
    }

    #[test]
    fn test_digit_width_parsing() {
        assert_eq!("2".parse::<DigitWidth>().unwrap(), DigitWidth::Two);
        assert_eq!("three".parse::<DigitWidth>().unwrap(), DigitWidth::Three);
        assert_eq!(" 4 ".parse::<DigitWidth>().unwrap(), DigitWidth::Four);
        assert!("5".parse::<DigitWidth>().is_err());
        assert_eq!(DigitWidth::try_from(3).unwrap(), DigitWidth::Three);
        assert!(DigitWidth::try_from(1).is_err());
    }

    #[test]
    fn test_config_defaults_and_validation() {
        let config = RenderConfig::default();
        assert_eq!(config.digit_width, DigitWidth::Two);
        assert_eq!(config.max_levels, DEFAULT_MAX_LEVELS);
        assert!(config.validate().is_ok());

        assert!(config.with_max_levels(0).validate().is_err());
        assert!(config
            .with_max_levels(MAX_SUPPORTED_LEVELS + 1)
            .validate()
            .is_err());
        assert!(config.with_max_levels(MAX_SUPPORTED_LEVELS).validate().is_ok());
    }

    #[test]
    fn test_config_display() {
        let config = RenderConfig::new(DigitWidth::Four, 5);
        assert_eq!(config.to_string(), "digits=4 max-levels=5");
    }
}
