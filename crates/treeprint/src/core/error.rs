//! Core error types for tree rendering
//!
//! Every failure of a render call is detected before any output is produced,
//! so callers either get the full set of lines or one of these errors.

use thiserror::Error;

/// Core error types for tree rendering
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("The key of the node must be >= {min} and <= {max}, got {key}")]
    OutOfRangeKey { key: i64, min: i64, max: i64 },

    #[error("Max level of the binary tree that can be printed is {max}. Current level is {actual}.")]
    TreeTooDeep { actual: usize, max: usize },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Parse error: {message} at line {line}, column {column}")]
    ParseError {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl TreeError {
    /// Create a new out-of-range key error
    pub fn out_of_range_key(key: i64, min: i64, max: i64) -> Self {
        Self::OutOfRangeKey { key, min, max }
    }

    /// Create a new tree-too-deep error
    pub fn tree_too_deep(actual: usize, max: usize) -> Self {
        Self::TreeTooDeep { actual, max }
    }

    /// Create a new configuration error
    pub fn invalid_config(message: String) -> Self {
        Self::InvalidConfig { message }
    }

    /// Create a new parse error
    pub fn parse_error(message: String, line: usize, column: usize) -> Self {
        Self::ParseError {
            message,
            line,
            column,
        }
    }
}

/// Result type alias for tree rendering operations
pub type Result<T> = std::result::Result<T, TreeError>;
