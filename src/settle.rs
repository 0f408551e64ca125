//! Join on presentation completions
//!
//! Every symbol relocation the core reports is animated by the presentation,
//! which acknowledges it once it lands. The countdown counts those
//! acknowledgements; the game stays busy until it reaches zero.

/// Result of one acknowledgement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Nothing was pending
    Stray,
    /// Still waiting for this many
    Waiting(usize),
    /// That was the last one
    Done,
}

/// Countdown of outstanding relocations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    remaining: usize,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start waiting for `moves` completions
    pub fn arm(&mut self, moves: usize) {
        self.remaining = moves;
    }

    /// Count one completion
    pub fn complete_one(&mut self) -> Tick {
        match self.remaining {
            0 => Tick::Stray,
            1 => {
                self.remaining = 0;
                Tick::Done
            }
            n => {
                self.remaining = n - 1;
                Tick::Waiting(n - 1)
            }
        }
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn is_pending(&self) -> bool {
        self.remaining > 0
    }

    /// Drop whatever is outstanding
    pub fn cancel(&mut self) {
        self.remaining = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_to_done() {
        let mut countdown = Countdown::new();
        countdown.arm(3);
        assert!(countdown.is_pending());
        assert_eq!(countdown.complete_one(), Tick::Waiting(2));
        assert_eq!(countdown.complete_one(), Tick::Waiting(1));
        assert_eq!(countdown.complete_one(), Tick::Done);
        assert!(!countdown.is_pending());
    }

    #[test]
    fn test_stray_completion() {
        let mut countdown = Countdown::new();
        assert_eq!(countdown.complete_one(), Tick::Stray);
        countdown.arm(2);
        countdown.cancel();
        assert_eq!(countdown.complete_one(), Tick::Stray);
    }
}
