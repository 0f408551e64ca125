//! Events the core produces for the presentation layer

use crate::cascade::Fall;
use serde::Serialize;

/// Something the presentation should react to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum Event {
    /// A cell became the current selection
    Selected(usize),
    /// The current selection was dropped
    Deselected(usize),
    /// Two symbols changed places and stay there
    SwapCommitted { a: usize, b: usize },
    /// Two symbols changed places and went back
    SwapReverted { a: usize, b: usize },
    /// Matched cells were emptied
    Exploded(Vec<usize>),
    /// Symbols fell or were refilled to close the gaps
    Fell(Vec<Fall>),
    /// Every relocation was acknowledged and the board is at rest
    Settled,
    ScoreChanged(u64),
    /// The settled board offers nothing to play
    NoMovesAvailable,
}
