//! Errors returned while converting a quiz.

use std::io;

use roxmltree::TextPos;
use thiserror::Error;

/// Everything that can go wrong between reading a quiz and writing its page.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The input is not well-formed XML.
    #[error("malformed quiz document: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The input is XML, but not a quiz.
    #[error("{message} at {position}")]
    Schema {
        /// What was wrong.
        message: String,
        /// Where the offending element starts.
        position: TextPos,
    },

    /// A `[defs]` block could not be expanded.
    #[error("syntax error on line {line}: {message}")]
    Defs {
        /// What was wrong.
        message: String,
        /// 1-based line number in the input.
        line: usize,
    },
}

/// Result type alias for quiz operations.
pub type Result<T> = std::result::Result<T, Error>;
