//! Where fresh symbols come from
//!
//! The board is filled and refilled through a `SymbolSource`. The default is a
//! seeded ChaCha stream so a whole game replays from its seed; tests swap in a
//! scripted source.

use crate::symbol::{Palette, Symbol};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Supplies symbols for the initial fill and for refills after a collapse
pub trait SymbolSource {
    /// Draw the next symbol from `palette`
    fn next_symbol(&mut self, palette: &Palette) -> Symbol;
}

/// Uniform draws from a seedable PRNG
#[derive(Debug, Clone)]
pub struct RandomSource {
    seed: u64,
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Create a source with a random seed
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create a source that replays the same stream for the same seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..upper`, for callers sharing the game's stream
    pub fn index_below(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper.max(1))
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolSource for RandomSource {
    fn next_symbol(&mut self, palette: &Palette) -> Symbol {
        let symbols = palette.symbols();
        symbols[self.rng.gen_range(0..symbols.len())]
    }
}

/// Replays a fixed list of symbols, then cycles through the palette
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    queue: std::collections::VecDeque<Symbol>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            queue: symbols.into_iter().collect(),
            cursor: 0,
        }
    }
}

#[cfg(test)]
impl SymbolSource for ScriptedSource {
    fn next_symbol(&mut self, palette: &Palette) -> Symbol {
        if let Some(symbol) = self.queue.pop_front() {
            return symbol;
        }
        let symbols = palette.symbols();
        let symbol = symbols[self.cursor % symbols.len()];
        self.cursor += 1;
        symbol
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_same_seed_same_stream() {
        let palette = Palette::standard(6).unwrap();
        let mut a = RandomSource::with_seed(42);
        let mut b = RandomSource::with_seed(42);
        let left: Vec<_> = (0..50).map(|_| a.next_symbol(&palette)).collect();
        let right: Vec<_> = (0..50).map(|_| b.next_symbol(&palette)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_draws_stay_in_palette() {
        let palette = Palette::new(vec![Symbol(3), Symbol(7)]).unwrap();
        let mut source = RandomSource::with_seed(1);
        let seen: HashSet<_> = (0..200).map(|_| source.next_symbol(&palette)).collect();
        assert_eq!(seen, HashSet::from([Symbol(3), Symbol(7)]));
    }

    #[test]
    fn test_scripted_then_cycles() {
        let palette = Palette::standard(2).unwrap();
        let mut source = ScriptedSource::new([Symbol(1)]);
        assert_eq!(source.next_symbol(&palette), Symbol(1));
        assert_eq!(source.next_symbol(&palette), Symbol(0));
        assert_eq!(source.next_symbol(&palette), Symbol(1));
    }
}
