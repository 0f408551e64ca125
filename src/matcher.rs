//! Match detection
//!
//! A run is a maximal line of equal symbols inside one row or one column.
//! Runs of `MIN_RUN` or more are matches. Empty cells never take part.

use crate::grid::{Cell, Grid};
use std::collections::BTreeSet;

/// Shortest run that counts as a match
pub const MIN_RUN: usize = 3;

/// Cells of every qualifying run passing through `index`
///
/// The horizontal and vertical runs are judged independently; the origin is
/// part of the result only when at least one of them qualifies.
pub fn run_through(grid: &Grid, index: usize) -> BTreeSet<usize> {
    let mut matched = BTreeSet::new();
    let (Some(symbol), Some((row, col))) = (grid.symbol(index), grid.row_col_of(index)) else {
        return matched;
    };
    let same = |r: usize, c: usize| grid.cell_at(r, c) == Some(Cell::Filled(symbol));

    let mut left = col;
    while left > 0 && same(row, left - 1) {
        left -= 1;
    }
    let mut right = col;
    while right + 1 < grid.columns() && same(row, right + 1) {
        right += 1;
    }
    if right - left + 1 >= MIN_RUN {
        matched.extend((left..=right).filter_map(|c| grid.index_of(row, c)));
    }

    let mut bottom = row;
    while bottom > 0 && same(bottom - 1, col) {
        bottom -= 1;
    }
    let mut top = row;
    while top + 1 < grid.rows() && same(top + 1, col) {
        top += 1;
    }
    if top - bottom + 1 >= MIN_RUN {
        matched.extend((bottom..=top).filter_map(|r| grid.index_of(r, col)));
    }

    matched
}

/// Every cell on the board that belongs to some qualifying run
pub fn all_matches(grid: &Grid) -> BTreeSet<usize> {
    let mut matched = BTreeSet::new();
    for row in 0..grid.rows() {
        let line = (0..grid.columns()).filter_map(|col| grid.index_of(row, col));
        sweep_line(grid, line, &mut matched);
    }
    for col in 0..grid.columns() {
        let line = (0..grid.rows()).filter_map(|row| grid.index_of(row, col));
        sweep_line(grid, line, &mut matched);
    }
    matched
}

fn sweep_line(grid: &Grid, line: impl Iterator<Item = usize>, matched: &mut BTreeSet<usize>) {
    let mut run: Vec<usize> = Vec::new();
    let mut current = None;
    for index in line {
        let symbol = grid.symbol(index);
        if symbol.is_some() && symbol == current {
            run.push(index);
            continue;
        }
        flush_run(&mut run, matched);
        current = symbol;
        if symbol.is_some() {
            run.push(index);
        }
    }
    flush_run(&mut run, matched);
}

fn flush_run(run: &mut Vec<usize>, matched: &mut BTreeSet<usize>) {
    if run.len() >= MIN_RUN {
        matched.extend(run.iter().copied());
    }
    run.clear();
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::symbol::Symbol;
    use proptest::prelude::*;

    /// Build a grid from text rows listed bottom row first; `.` is empty
    pub(crate) fn grid_from(rows: &[&str]) -> Grid {
        let columns = rows[0].len();
        let cells = rows
            .iter()
            .flat_map(|row| row.chars())
            .map(|ch| match ch {
                '.' => Cell::Empty,
                ch => Cell::Filled(Symbol(ch as u8 - b'A')),
            })
            .collect();
        Grid::from_cells(rows.len(), columns, cells).unwrap()
    }

    fn set(indices: &[usize]) -> BTreeSet<usize> {
        indices.iter().copied().collect()
    }

    #[test]
    fn test_completed_row_matches() {
        let mut grid = grid_from(&["AAB", "BCA", "CBC"]);
        assert!(run_through(&grid, 0).is_empty());
        grid.set_at(0, 2, Cell::Filled(Symbol(0)));
        assert_eq!(run_through(&grid, 0), set(&[0, 1, 2]));
    }

    #[test]
    fn test_vertical_run() {
        let grid = grid_from(&["AB", "AC", "AB", "CC"]);
        assert_eq!(run_through(&grid, 2), set(&[0, 2, 4]));
        assert!(run_through(&grid, 6).is_empty());
    }

    #[test]
    fn test_cross_is_union() {
        let grid = grid_from(&["BAB", "AAA", "BAB"]);
        assert_eq!(run_through(&grid, 4), set(&[1, 3, 4, 5, 7]));
    }

    #[test]
    fn test_two_short_runs_do_not_combine() {
        // origin has a pair to its left and a pair above: neither qualifies
        let grid = grid_from(&["AAB", "CAC", "BCA"]);
        assert!(run_through(&grid, 1).is_empty());
    }

    #[test]
    fn test_runs_do_not_wrap_rows() {
        let grid = grid_from(&["BAA", "ACB", "CBC"]);
        assert!(run_through(&grid, 2).is_empty());
        assert!(all_matches(&grid).is_empty());
    }

    #[test]
    fn test_empty_cells_never_match() {
        let grid = grid_from(&["...", "ABC", "..."]);
        assert!(run_through(&grid, 0).is_empty());
        assert!(all_matches(&grid).is_empty());
    }

    #[test]
    fn test_out_of_range_origin() {
        let grid = grid_from(&["AAA"]);
        assert!(run_through(&grid, 3).is_empty());
    }

    #[test]
    fn test_all_matches_rows_and_columns() {
        let grid = grid_from(&["AAAB", "CDEB", "CDFB", "CEAC"]);
        assert_eq!(all_matches(&grid), set(&[0, 1, 2, 3, 7, 11, 4, 8, 12]));
    }

    #[test]
    fn test_all_matches_long_run_broken_by_empty() {
        let grid = grid_from(&["AAA.AA"]);
        assert_eq!(all_matches(&grid), set(&[0, 1, 2]));
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1usize..7, 1usize..7).prop_flat_map(|(rows, columns)| {
            prop::collection::vec(prop::option::weighted(0.85, 0u8..3), rows * columns).prop_map(
                move |symbols| {
                    let cells = symbols
                        .into_iter()
                        .map(|s| s.map_or(Cell::Empty, |s| Cell::Filled(Symbol(s))))
                        .collect();
                    Grid::from_cells(rows, columns, cells).unwrap()
                },
            )
        })
    }

    proptest! {
        #[test]
        fn prop_all_matches_never_short_or_empty(grid in arb_grid()) {
            let matched = all_matches(&grid);
            for &index in &matched {
                prop_assert!(grid.symbol(index).is_some());
                // every matched cell lies on a qualifying run through itself
                prop_assert!(run_through(&grid, index).contains(&index));
            }
        }

        #[test]
        fn prop_run_through_is_subset_of_all_matches(grid in arb_grid()) {
            let matched = all_matches(&grid);
            for index in 0..grid.len() {
                prop_assert!(run_through(&grid, index).is_subset(&matched));
            }
        }
    }
}
