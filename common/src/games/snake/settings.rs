use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::grid::{GridBounds, GridLayout, WorldPos};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SnakeSettings {
    pub grid_size: u32,
    pub move_interval_ms: u64,
    pub cell_size: f32,
    pub score_per_food: u32,
    pub coins_per_food: u32,
}

impl SnakeSettings {
    pub fn bounds(&self) -> GridBounds {
        GridBounds::new(self.grid_size)
    }

    pub fn layout(&self) -> GridLayout {
        GridLayout::new(self.cell_size, WorldPos::default())
    }

    pub fn move_interval(&self) -> Duration {
        Duration::from_millis(self.move_interval_ms)
    }
}

impl Validate for SnakeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.grid_size < 2 {
            return Err("grid_size must be at least 2".to_string());
        }
        if self.grid_size > 100 {
            return Err("grid_size must not exceed 100".to_string());
        }
        if self.move_interval_ms < 20 || self.move_interval_ms > 5000 {
            return Err("move_interval_ms must be between 20 and 5000".to_string());
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err("cell_size must be a positive number".to_string());
        }
        if self.score_per_food == 0 {
            return Err("score_per_food must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self {
            grid_size: 6,
            move_interval_ms: 500,
            cell_size: 1.0,
            score_per_food: 1,
            coins_per_food: 1,
        }
    }
}
