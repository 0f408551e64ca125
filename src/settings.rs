//! Settings persistence using TOML
//!
//! Stores settings in ~/.config/gemswap/settings.toml (or platform equivalent)

use crate::config::{GameConfig, Rules};
use crate::error::ConfigError;
use crate::symbol::Palette;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Number of high scores kept
const HIGH_SCORE_SLOTS: usize = 10;

/// Driver settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board shape and symbols
    pub board: BoardSettings,
    /// Turn resolution rules
    pub rules: Rules,
    /// Autoplay settings
    pub demo: DemoSettings,
    /// Best finished games
    pub high_scores: Vec<ScoreEntry>,
}

/// Board settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    pub rows: usize,
    pub columns: usize,
    /// Number of distinct symbols
    pub symbols: usize,
    /// Fixed seed, random when absent
    pub seed: Option<u64>,
}

/// Autoplay settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Swaps attempted before the driver stops
    pub max_turns: u32,
}

/// A single high score entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub score: u64,
    pub matches: u32,
    /// Seed of the game, hex
    pub seed: String,
    /// Date as ISO string
    pub date: String,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            rows: 8,
            columns: 8,
            symbols: 5,
            seed: None,
        }
    }
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self { max_turns: 50 }
    }
}

impl Settings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "gemswap", "gemswap").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("settings.toml"))
    }

    /// Load settings from file, or fall back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Ignoring settings file: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from a TOML file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save settings to the config directory
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::settings_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save settings to a TOML file, creating its directory if needed
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |e| ConfigError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        };
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(write_err)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(write_err)
    }

    /// Validated game configuration
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let config = GameConfig {
            rows: self.board.rows,
            columns: self.board.columns,
            palette: Palette::standard(self.board.symbols)?,
            seed: self.board.seed,
            rules: self.rules,
        };
        config.validate()?;
        Ok(config)
    }

    /// Record a finished game, keeping the best scores
    pub fn add_score(&mut self, score: u64, matches: u32, seed: u64) {
        self.high_scores.push(ScoreEntry {
            score,
            matches,
            seed: format!("{:016x}", seed),
            date: today(),
        });
        self.high_scores.sort_by(|a, b| b.score.cmp(&a.score));
        self.high_scores.truncate(HIGH_SCORE_SLOTS);
    }

    /// Get the best score
    pub fn best_score(&self) -> Option<u64> {
        self.high_scores.first().map(|e| e.score)
    }
}

/// Today's UTC date as `YYYY-MM-DD`
fn today() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let days = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
        / 86_400;
    let (year, month, day) = civil_from_days(days);
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Gregorian (year, month, day) of a day count since 1970-01-01
fn civil_from_days(days: u64) -> (u64, u64, u64) {
    // shift the epoch to 0000-03-01 so leap days close each 400-year era
    let z = days + 719_468;
    let era = z / 146_097;
    let day_of_era = z - era * 146_097;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_index = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * month_index + 2) / 5 + 1;
    let month = if month_index < 10 {
        month_index + 3
    } else {
        month_index - 9
    };
    let year = era * 400 + year_of_era + u64::from(month <= 2);
    (year, month, day)
}
