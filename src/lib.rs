//! GEMSWAP - the grid state machine of a match-3 puzzle
//!
//! Selection, swap validation, match detection, explosion and gravity
//! refill. Rendering and input capture live outside: they call `Game::pick`
//! and `Game::notify_move_complete` and drain `Game::drain_events`.

pub mod cascade;
pub mod config;
pub mod error;
pub mod event;
pub mod game;
pub mod grid;
pub mod matcher;
pub mod playability;
pub mod score;
pub mod selection;
pub mod settings;
pub mod settle;
pub mod source;
pub mod swap;
pub mod symbol;

pub use config::{GameConfig, Rules};
pub use error::{CommandError, ConfigError};
pub use event::Event;
pub use game::{Game, GameState};
pub use grid::{Cell, Grid};
pub use playability::PlayabilityRule;
pub use source::{RandomSource, SymbolSource};
pub use swap::RevertPolicy;
pub use symbol::{Palette, Symbol};
