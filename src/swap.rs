//! Swapping two neighbouring symbols

use crate::error::CommandError;
use crate::grid::Grid;
use crate::matcher::{run_through, MIN_RUN};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// What happens to a swap that does not produce a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevertPolicy {
    /// Swap the symbols back
    #[default]
    Revert,
    /// Leave the symbols where they are
    Keep,
}

/// Result of a swap attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The swap formed runs; these cells are to explode
    Committed(BTreeSet<usize>),
    /// No match, symbols are back in place
    Reverted,
    /// No match, symbols stay swapped
    Kept,
}

/// Exchange the symbols of `a` and `b` and judge the result
pub fn try_swap(
    grid: &mut Grid,
    a: usize,
    b: usize,
    policy: RevertPolicy,
) -> Result<SwapOutcome, CommandError> {
    if a == b {
        return Err(CommandError::SameCell(a));
    }
    for index in [a, b] {
        if !grid.contains(index) {
            return Err(CommandError::OutOfRange {
                index,
                len: grid.len(),
            });
        }
    }
    if !grid.are_adjacent(a, b) {
        return Err(CommandError::NotAdjacent { a, b });
    }

    grid.swap_cells(a, b);
    let mut matched = run_through(grid, a);
    matched.extend(run_through(grid, b));

    if matched.len() >= MIN_RUN {
        return Ok(SwapOutcome::Committed(matched));
    }
    match policy {
        RevertPolicy::Revert => {
            grid.swap_cells(a, b);
            Ok(SwapOutcome::Reverted)
        }
        RevertPolicy::Keep => Ok(SwapOutcome::Kept),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::tests::grid_from;

    #[test]
    fn test_non_matching_swap_reverts() {
        // rows listed bottom first: row 0 = A B A, row 1 = B A B, row 2 = A B C
        let original = grid_from(&["ABA", "BAB", "ABC"]);
        let mut grid = original.clone();
        let c = grid.index_of(2, 2).unwrap();
        let b = grid.index_of(1, 2).unwrap();
        let outcome = try_swap(&mut grid, c, b, RevertPolicy::Revert).unwrap();
        assert_eq!(outcome, SwapOutcome::Reverted);
        assert_eq!(grid, original);
    }

    #[test]
    fn test_keep_policy_leaves_swap() {
        let original = grid_from(&["ABA", "BAB", "ABC"]);
        let mut grid = original.clone();
        let outcome = try_swap(&mut grid, 8, 5, RevertPolicy::Keep).unwrap();
        assert_eq!(outcome, SwapOutcome::Kept);
        assert_eq!(grid.get(8), original.get(5));
        assert_eq!(grid.get(5), original.get(8));
    }

    #[test]
    fn test_matching_swap_commits() {
        // moving the A at (1, 2) down completes row 0
        let mut grid = grid_from(&["AAB", "CDA", "DCB"]);
        let outcome = try_swap(&mut grid, 2, 5, RevertPolicy::Revert).unwrap();
        assert_eq!(outcome, SwapOutcome::Committed(BTreeSet::from([0, 1, 2])));
        assert_eq!(grid.to_string(), "DCB\nCDB\nAAA\n");
    }

    #[test]
    fn test_both_sides_can_match() {
        // swapping the middle pair completes a run on each side
        let mut grid = grid_from(&["AABAA", "BBABB"]);
        let outcome = try_swap(&mut grid, 2, 7, RevertPolicy::Revert).unwrap();
        let SwapOutcome::Committed(matched) = outcome else {
            panic!("expected a commit");
        };
        assert_eq!(matched.len(), 10);
    }

    #[test]
    fn test_round_trip_restores_board() {
        let original = grid_from(&["ABCD", "BCDA", "CDAB"]);
        for a in 0..original.len() {
            for b in [original.right_of(a), original.above(a)].into_iter().flatten() {
                let mut grid = original.clone();
                try_swap(&mut grid, a, b, RevertPolicy::Revert).unwrap();
                try_swap(&mut grid, a, b, RevertPolicy::Revert).unwrap();
                assert_eq!(grid, original);
            }
        }
    }

    #[test]
    fn test_precondition_failures_leave_board() {
        let original = grid_from(&["ABC", "CAB", "BCA"]);
        let mut grid = original.clone();
        assert_eq!(
            try_swap(&mut grid, 4, 4, RevertPolicy::Revert),
            Err(CommandError::SameCell(4))
        );
        assert_eq!(
            try_swap(&mut grid, 2, 3, RevertPolicy::Revert),
            Err(CommandError::NotAdjacent { a: 2, b: 3 })
        );
        assert_eq!(
            try_swap(&mut grid, 8, 11, RevertPolicy::Revert),
            Err(CommandError::OutOfRange { index: 11, len: 9 })
        );
        assert_eq!(grid, original);
    }
}
