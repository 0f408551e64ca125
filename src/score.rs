//! Scoring: a flat award per match plus a bonus for every extra cell

use crate::matcher::MIN_RUN;

/// Award for a minimal match
pub const BASE_POINTS: u64 = 100;
/// Bonus per cell beyond the minimal match
pub const EXTRA_CELL_POINTS: u64 = 10;

/// Points for one match of `cells` cells
pub fn match_points(cells: usize) -> u64 {
    if cells < MIN_RUN {
        return 0;
    }
    BASE_POINTS + EXTRA_CELL_POINTS * (cells - MIN_RUN) as u64
}

/// Score tracking
#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    /// Current score
    points: u64,
    /// Number of scoring matches
    matches: u32,
    /// Largest match seen
    best_match: usize,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the award for a match of `cells` cells, returns the new total
    pub fn record_match(&mut self, cells: usize) -> u64 {
        let points = match_points(cells);
        if points > 0 {
            self.points += points;
            self.matches += 1;
            self.best_match = self.best_match.max(cells);
        }
        self.points
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn matches(&self) -> u32 {
        self.matches
    }

    pub fn best_match(&self) -> usize {
        self.best_match
    }

    /// Back to zero, for a restart
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
