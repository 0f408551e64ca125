//! Symbols and the palette they are drawn from
//!
//! A symbol is an opaque kind. Two cells match when they carry the same kind,
//! nothing else about a symbol matters to the core.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest palette `Palette::standard` will build
pub const MAX_PALETTE: usize = 26;

/// A matchable symbol kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub u8);

impl Symbol {
    /// Single-letter glyph used by logs and the text dump of the board
    pub fn glyph(&self) -> char {
        if (self.0 as usize) < MAX_PALETTE {
            (b'A' + self.0) as char
        } else {
            '?'
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// The fixed set of symbols a board is filled from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct Palette {
    symbols: Vec<Symbol>,
}

impl Palette {
    /// Build a palette, dropping duplicate kinds. Fails when empty.
    pub fn new(symbols: Vec<Symbol>) -> Result<Self, ConfigError> {
        let mut unique: Vec<Symbol> = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            if !unique.contains(&symbol) {
                unique.push(symbol);
            }
        }
        if unique.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { symbols: unique })
    }

    /// Symbols `A..` up to `size` kinds
    pub fn standard(size: usize) -> Result<Self, ConfigError> {
        let size = size.min(MAX_PALETTE);
        Self::new((0..size as u8).map(Symbol).collect())
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.symbols.contains(&symbol)
    }
}

impl Default for Palette {
    /// Five kinds, the classic board
    fn default() -> Self {
        Self {
            symbols: (0..5).map(Symbol).collect(),
        }
    }
}

impl TryFrom<Vec<Symbol>> for Palette {
    type Error = ConfigError;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self, Self::Error> {
        Self::new(symbols)
    }
}

impl From<Palette> for Vec<Symbol> {
    fn from(palette: Palette) -> Self {
        palette.symbols
    }
}
