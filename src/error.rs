use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Input that breaks the fixed format of a puzzle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("unknown glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },
    #[error("unknown move {0:?}")]
    UnknownMove(char),
    #[error("no {0} found in the input")]
    MissingActor(&'static str),
    #[error("malformed {what}: {line:?}")]
    Malformed { line: String, what: &'static str },
}

impl PuzzleError {
    pub fn malformed(line: impl Into<String>, what: &'static str) -> Self {
        PuzzleError::Malformed {
            line: line.into(),
            what,
        }
    }
}
