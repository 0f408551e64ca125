//! Is there anything left to play?
//!
//! Two answers of different strength. `has_any_move` only looks for runs
//! already on the board. `find_winning_swap` tries every neighbouring swap and
//! is the real question; the game picks one through `PlayabilityRule`.

use crate::grid::Grid;
use crate::matcher::{all_matches, run_through, MIN_RUN};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Check run on a settled board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayabilityRule {
    /// A move exists only while a run is already on the board
    #[default]
    ExistingRuns,
    /// A move exists while some neighbouring swap would form a run
    AnySwap,
}

impl PlayabilityRule {
    pub fn has_move(&self, grid: &Grid) -> bool {
        match self {
            PlayabilityRule::ExistingRuns => has_any_move(grid),
            PlayabilityRule::AnySwap => has_winning_swap(grid),
        }
    }
}

/// Cells of every run already on the board
pub fn all_blowable_cells(grid: &Grid) -> BTreeSet<usize> {
    all_matches(grid)
}

/// True while some run is already on the board
pub fn has_any_move(grid: &Grid) -> bool {
    !all_blowable_cells(grid).is_empty()
}

/// First neighbouring pair, in index order, whose swap forms a run
pub fn find_winning_swap(grid: &Grid) -> Option<(usize, usize)> {
    let mut probe = grid.clone();
    for a in 0..grid.len() {
        for b in [grid.right_of(a), grid.above(a)].into_iter().flatten() {
            if probe.get(a) == probe.get(b) {
                continue;
            }
            probe.swap_cells(a, b);
            let mut matched = run_through(&probe, a);
            matched.extend(run_through(&probe, b));
            probe.swap_cells(a, b);
            if matched.len() >= MIN_RUN {
                return Some((a, b));
            }
        }
    }
    None
}

pub fn has_winning_swap(grid: &Grid) -> bool {
    find_winning_swap(grid).is_some()
}
