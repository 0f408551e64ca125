//! Explosion and gravity
//!
//! Exploded cells become empty, then every column is compacted toward row 0
//! and whatever is still missing at the top is refilled from the symbol
//! source. One pass per column always leaves the board without gaps.

use crate::grid::{Cell, Grid};
use crate::source::SymbolSource;
use crate::symbol::{Palette, Symbol};
use serde::Serialize;
use std::collections::BTreeSet;

/// One symbol relocation for the presentation to animate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fall {
    /// Cell the symbol lands in
    pub to: usize,
    /// Row the symbol starts from. Refills start above the top of the board.
    pub from_row: usize,
    /// Rows travelled
    pub distance: usize,
    pub symbol: Symbol,
    /// Freshly drawn rather than moved down
    pub refill: bool,
}

/// Empty every matched cell, returns how many cells were cleared
pub fn explode(grid: &mut Grid, matched: &BTreeSet<usize>) -> usize {
    let mut cleared = 0;
    for &index in matched {
        if grid.get(index).is_some_and(|cell| cell.is_filled()) {
            grid.set(index, Cell::Empty);
            cleared += 1;
        }
    }
    cleared
}

/// Close every gap by gravity and refill the top of each column
pub fn collapse(grid: &mut Grid, palette: &Palette, source: &mut impl SymbolSource) -> Vec<Fall> {
    let mut falls = Vec::new();
    let rows = grid.rows();

    for col in 0..grid.columns() {
        let missing = grid.column(col).iter().filter(|cell| cell.is_empty()).count();
        if missing == 0 {
            continue;
        }

        for row in 0..rows {
            let Some(to) = grid.index_of(row, col) else {
                continue;
            };
            if grid.get(to).is_some_and(|cell| cell.is_filled()) {
                continue;
            }

            let above = (row + 1..rows).find_map(|r| {
                let index = grid.index_of(r, col)?;
                grid.symbol(index).map(|symbol| (r, index, symbol))
            });

            match above {
                Some((from_row, from, symbol)) => {
                    grid.set(to, Cell::Filled(symbol));
                    grid.set(from, Cell::Empty);
                    falls.push(Fall {
                        to,
                        from_row,
                        distance: from_row - row,
                        symbol,
                        refill: false,
                    });
                }
                None => {
                    // nothing left above, every remaining gap gets a new symbol
                    let symbol = source.next_symbol(palette);
                    grid.set(to, Cell::Filled(symbol));
                    falls.push(Fall {
                        to,
                        from_row: row + missing,
                        distance: missing,
                        symbol,
                        refill: true,
                    });
                }
            }
        }
    }

    falls
}
