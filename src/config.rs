//! Game configuration

use crate::error::ConfigError;
use crate::grid::cell_count;
use crate::playability::PlayabilityRule;
use crate::swap::RevertPolicy;
use crate::symbol::Palette;
use serde::{Deserialize, Serialize};

/// Rule switches that change how a turn resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// What a swap without a match does
    pub revert_policy: RevertPolicy,
    /// Which check decides that the board has no moves left
    pub playability: PlayabilityRule,
    /// Explode runs that form by themselves after a collapse
    pub chain_reactions: bool,
}

impl Rules {
    /// Check the game runs once a turn has settled. A board left by chain
    /// reactions never holds a run, so those games always ask the swap oracle.
    pub fn effective_playability(&self) -> PlayabilityRule {
        if self.chain_reactions {
            PlayabilityRule::AnySwap
        } else {
            self.playability
        }
    }
}

/// Everything needed to start a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub palette: Palette,
    /// Seed for the symbol stream, random when absent
    pub seed: Option<u64>,
    pub rules: Rules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            columns: 8,
            palette: Palette::default(),
            seed: None,
            rules: Rules::default(),
        }
    }
}

impl GameConfig {
    pub fn new(rows: usize, columns: usize, palette: Palette) -> Self {
        Self {
            rows,
            columns,
            palette,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        cell_count(self.rows, self.columns)?;
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_rows_rejected() {
        let config = GameConfig {
            rows: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { rows: 0, columns: 8 })
        ));
    }

    #[test]
    fn test_huge_dimensions_from_toml_rejected() {
        let config: GameConfig =
            toml::from_str("rows = 9223372036854775807\ncolumns = 3").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooLarge {
                rows: 9223372036854775807,
                columns: 3,
                ..
            })
        ));
    }

    #[test]
    fn test_rules_from_toml() {
        let rules: Rules = toml::from_str(
            r#"
            revert_policy = "keep"
            playability = "any_swap"
            "#,
        )
        .unwrap();
        assert_eq!(rules.revert_policy, RevertPolicy::Keep);
        assert_eq!(rules.playability, PlayabilityRule::AnySwap);
        assert!(!rules.chain_reactions);
    }

    #[test]
    fn test_chain_reactions_use_swap_oracle() {
        let rules = Rules {
            chain_reactions: true,
            ..Rules::default()
        };
        assert_eq!(rules.effective_playability(), PlayabilityRule::AnySwap);
        assert_eq!(
            Rules::default().effective_playability(),
            PlayabilityRule::ExistingRuns
        );
    }

    #[test]
    fn test_empty_palette_in_toml_rejected() {
        let parsed: Result<GameConfig, _> = toml::from_str("palette = []");
        assert!(parsed.is_err());
    }
}
