use std::path::PathBuf;

/// Errors raised while configuring a game. Fatal: setup must abort.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("grid needs at least one row and one column (got {rows}x{columns})")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("grid of {rows}x{columns} exceeds {max} cells")]
    TooLarge {
        rows: usize,
        columns: usize,
        max: usize,
    },

    #[error("symbol palette is empty")]
    EmptyPalette,

    #[error("expected {expected} cells, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("failed to read settings file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write settings file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// A command the core refused. The caller ignores it: no event is raised and
/// the board is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("cell {index} is outside the board ({len} cells)")]
    OutOfRange { index: usize, len: usize },

    #[error("cells {a} and {b} are not neighbours")]
    NotAdjacent { a: usize, b: usize },

    #[error("cannot swap cell {0} with itself")]
    SameCell(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidDimensions { rows: 0, columns: 7 };
        assert_eq!(
            err.to_string(),
            "grid needs at least one row and one column (got 0x7)"
        );
    }

    #[test]
    fn test_too_large_display() {
        let err = ConfigError::TooLarge {
            rows: 2048,
            columns: 1024,
            max: 1 << 20,
        };
        assert_eq!(err.to_string(), "grid of 2048x1024 exceeds 1048576 cells");
    }

    #[test]
    fn test_command_error_display() {
        let err = CommandError::NotAdjacent { a: 2, b: 3 };
        assert_eq!(err.to_string(), "cells 2 and 3 are not neighbours");
        let err = CommandError::OutOfRange { index: 9, len: 9 };
        assert_eq!(err.to_string(), "cell 9 is outside the board (9 cells)");
    }
}
