//! Core game state and turn resolution
//!
//! `Game` owns the board and every component that touches it. The
//! presentation layer drives it with picks and move completions and drains
//! the events it produces.

use crate::cascade::{collapse, explode};
use crate::config::{GameConfig, Rules};
use crate::error::{CommandError, ConfigError};
use crate::event::Event;
use crate::grid::Grid;
use crate::matcher::all_matches;
use crate::score::ScoreTracker;
use crate::selection::{PickOutcome, SelectionController};
use crate::settle::{Countdown, Tick};
use crate::source::{RandomSource, SymbolSource};
use crate::swap::{try_swap, SwapOutcome};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Relocations reported for a swap: each of the two symbols moves once
const SWAP_MOVES: usize = 2;

/// Game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Accepting picks
    Playing,
    /// A swap or cascade is waiting on the presentation
    Busy,
    /// The settled board has nothing to play; only a reset continues
    NoMoves,
}

/// What the outstanding completions belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Swap,
    Cascade,
}

/// The main game struct
pub struct Game<S: SymbolSource = RandomSource> {
    grid: Grid,
    config: GameConfig,
    source: S,
    selection: SelectionController,
    score: ScoreTracker,
    state: GameState,
    countdown: Countdown,
    phase: Phase,
    /// Events not yet drained by the presentation
    events: Vec<Event>,
}

impl Game<RandomSource> {
    /// Create a new game. The symbol stream is seeded from `config.seed`
    /// when present.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let source = match config.seed {
            Some(seed) => RandomSource::with_seed(seed),
            None => RandomSource::new(),
        };
        Self::with_source(config, source)
    }

    /// Seed of the symbol stream
    pub fn seed(&self) -> u64 {
        self.source.seed()
    }
}

impl<S: SymbolSource> Game<S> {
    /// Create a new game drawing symbols from `source`
    pub fn with_source(config: GameConfig, mut source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::filled(config.rows, config.columns, &config.palette, &mut source)?;
        Ok(Self::assemble(config, grid, source))
    }

    /// Start from an existing board. Its dimensions override the config's.
    pub fn from_grid(mut config: GameConfig, grid: Grid, source: S) -> Result<Self, ConfigError> {
        config.rows = grid.rows();
        config.columns = grid.columns();
        config.validate()?;
        Ok(Self::assemble(config, grid, source))
    }

    fn assemble(config: GameConfig, grid: Grid, source: S) -> Self {
        info!(
            rows = config.rows,
            columns = config.columns,
            symbols = config.palette.len(),
            rules = ?config.rules,
            "new game"
        );
        Self {
            grid,
            config,
            source,
            selection: SelectionController::new(),
            score: ScoreTracker::new(),
            state: GameState::Playing,
            countdown: Countdown::new(),
            phase: Phase::Idle,
            events: Vec::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn rules(&self) -> Rules {
        self.config.rules
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.selected()
    }

    /// Completions still expected from the presentation
    pub fn pending_moves(&self) -> usize {
        self.countdown.remaining()
    }

    /// Events produced since the last drain
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Take every pending event
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Handle a pick. `None` is a pick outside the board.
    ///
    /// Picks arriving while a turn resolves or after the board ran out of
    /// moves are dropped.
    pub fn pick(&mut self, pick: Option<usize>) -> Result<(), CommandError> {
        if self.state != GameState::Playing {
            debug!(?pick, state = ?self.state, "pick dropped");
            return Ok(());
        }
        match self.selection.pick(&self.grid, pick, &mut self.events)? {
            PickOutcome::Handled => Ok(()),
            PickOutcome::Swap(a, b) => self.swap(a, b),
        }
    }

    fn swap(&mut self, a: usize, b: usize) -> Result<(), CommandError> {
        let outcome = try_swap(&mut self.grid, a, b, self.config.rules.revert_policy)?;
        self.state = GameState::Busy;

        match outcome {
            SwapOutcome::Committed(matched) => {
                debug!(a, b, matched = matched.len(), "swap committed");
                self.events.push(Event::SwapCommitted { a, b });
                let moves = self.resolve(matched);
                self.countdown.arm(SWAP_MOVES + moves);
                self.phase = Phase::Cascade;
            }
            SwapOutcome::Reverted => {
                debug!(a, b, "swap reverted");
                self.events.push(Event::SwapReverted { a, b });
                self.countdown.arm(SWAP_MOVES);
                self.phase = Phase::Swap;
            }
            SwapOutcome::Kept => {
                debug!(a, b, "swap kept without a match");
                self.events.push(Event::SwapCommitted { a, b });
                self.countdown.arm(SWAP_MOVES);
                self.phase = Phase::Swap;
            }
        }
        Ok(())
    }

    /// Explode, score and collapse. Returns the number of relocations.
    fn resolve(&mut self, matched: BTreeSet<usize>) -> usize {
        let cleared = explode(&mut self.grid, &matched);
        self.events.push(Event::Exploded(matched.into_iter().collect()));

        let points = self.score.record_match(cleared);
        self.events.push(Event::ScoreChanged(points));

        let falls = collapse(&mut self.grid, &self.config.palette, &mut self.source);
        let moves = falls.len();
        debug!(cleared, moves, score = points, "cascade");
        self.events.push(Event::Fell(falls));
        moves
    }

    /// Acknowledge that the presentation finished moving a symbol into `index`
    pub fn notify_move_complete(&mut self, index: usize) {
        if !self.grid.contains(index) {
            warn!(index, "completion for a cell outside the board");
            return;
        }
        match self.countdown.complete_one() {
            Tick::Stray => warn!(index, "completion with nothing pending"),
            Tick::Waiting(remaining) => debug!(index, remaining, "move complete"),
            Tick::Done => self.finish_turn(),
        }
    }

    fn finish_turn(&mut self) {
        if self.phase == Phase::Cascade {
            self.events.push(Event::Settled);

            if self.config.rules.chain_reactions {
                let matched = all_matches(&self.grid);
                if !matched.is_empty() {
                    debug!(matched = matched.len(), "chain reaction");
                    let moves = self.resolve(matched);
                    self.countdown.arm(moves);
                    return;
                }
            }
        }
        self.phase = Phase::Idle;

        if self.config.rules.effective_playability().has_move(&self.grid) {
            self.state = GameState::Playing;
        } else {
            info!(score = self.score.points(), "no moves available");
            self.events.push(Event::NoMovesAvailable);
            self.state = GameState::NoMoves;
        }
    }

    /// Restart: fresh board, zero score, nothing pending
    pub fn reset(&mut self) {
        self.selection.clear();
        self.countdown.cancel();
        self.phase = Phase::Idle;
        self.grid.fill(&self.config.palette, &mut self.source);
        self.score.reset();
        self.events.push(Event::ScoreChanged(0));
        self.state = GameState::Playing;
        info!("game reset");
    }
}
