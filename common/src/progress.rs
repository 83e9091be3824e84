use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, ContentProvider, FileContentProvider, Validate, YamlSerializer, YamlStore};
use crate::games::snake::SessionOutcome;
use crate::log;

/// Persistent save data: the coin wallet and Snake results.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct PlayerProgress {
    pub coins: u64,
    pub best_score: u32,
    pub best_coins: u32,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub last_score: u32,
    pub last_coins: u32,
    pub last_game_victory: bool,
}

impl PlayerProgress {
    pub fn add_coins(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount as u64);
    }

    /// Returns `true` when `score` beats the previous best.
    pub fn record_session(&mut self, outcome: SessionOutcome, score: u32, coins_earned: u32) -> bool {
        self.games_played = self.games_played.saturating_add(1);
        if outcome.is_victory() {
            self.wins = self.wins.saturating_add(1);
        } else {
            self.losses = self.losses.saturating_add(1);
        }
        self.last_game_victory = outcome.is_victory();
        self.last_score = score;
        self.last_coins = coins_earned;
        self.best_coins = self.best_coins.max(coins_earned);

        if score > self.best_score {
            self.best_score = score;
            return true;
        }
        false
    }
}

impl Validate for PlayerProgress {
    fn validate(&self) -> Result<(), String> {
        if self.last_score > self.best_score {
            return Err("last_score cannot exceed best_score".to_string());
        }
        if self.wins as u64 + self.losses as u64 > self.games_played as u64 {
            return Err("wins and losses cannot exceed games_played".to_string());
        }
        Ok(())
    }
}

pub struct ProgressStore<P = FileContentProvider> {
    store: YamlStore<PlayerProgress, P, YamlSerializer>,
}

impl ProgressStore<FileContentProvider> {
    pub fn from_yaml_file(path: &str) -> Self {
        Self {
            store: YamlStore::from_yaml_file(path),
        }
    }
}

impl<P: ContentProvider> ProgressStore<P> {
    pub fn new(provider: P) -> Self {
        Self {
            store: YamlStore::new(provider, YamlSerializer),
        }
    }

    pub fn load(&self) -> Result<PlayerProgress, ConfigError> {
        self.store.load()
    }

    /// Credits the session's coins and result in one write.
    pub fn save_session(
        &self,
        outcome: SessionOutcome,
        score: u32,
        coins_earned: u32,
    ) -> Result<PlayerProgress, ConfigError> {
        let mut new_best = false;
        let progress = self.store.update(|p| {
            p.add_coins(coins_earned);
            new_best = p.record_session(outcome, score, coins_earned);
        })?;

        log!(
            "Progress saved: {} {}-{}, score {}, best {}{}, wallet {} coins",
            if outcome.is_victory() { "win" } else { "loss" },
            progress.wins,
            progress.losses,
            score,
            progress.best_score,
            if new_best { " (new)" } else { "" },
            progress.coins
        );
        Ok(progress)
    }
}
