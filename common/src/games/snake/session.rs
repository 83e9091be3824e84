use std::time::Duration;

use crate::config::Validate;
use crate::games::{RandomSource, SessionRng};
use crate::{log, log_warn};
use super::body::SnakeBody;
use super::food::{place_food, PlacementError};
use super::grid::GridBounds;
use super::occupancy::Occupancy;
use super::settings::SnakeSettings;
use super::sinks::{Collaborators, SoundCue};
use super::types::{Cell, Direction, SessionOutcome};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    InvalidSettings(String),
    Placement(PlacementError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::InvalidSettings(reason) => write!(f, "Invalid snake settings: {}", reason),
            SessionError::Placement(e) => write!(f, "Food placement failed: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<PlacementError> for SessionError {
    fn from(e: PlacementError) -> Self {
        SessionError::Placement(e)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Active,
    GameOver(SessionOutcome),
}

/// What a single call to [`SnakeSession::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The session had already ended.
    Inactive,
    /// Not enough time accumulated for a move.
    Waiting,
    Moved,
    Ate,
    Ended(SessionOutcome),
}

/// One game of Snake: owns the body, the food and the fixed-step clock, and
/// reports to the injected collaborators.
pub struct SnakeSession<R: RandomSource = SessionRng> {
    settings: SnakeSettings,
    bounds: GridBounds,
    body: SnakeBody,
    food: Option<Cell>,
    state: SessionState,
    accumulated: Duration,
    move_interval: Duration,
    moves: u64,
    rng: R,
    collaborators: Collaborators,
}

impl<R: RandomSource> SnakeSession<R> {
    pub fn new(settings: &SnakeSettings, mut rng: R, collaborators: Collaborators) -> Result<Self, SessionError> {
        settings.validate().map_err(SessionError::InvalidSettings)?;

        let bounds = settings.bounds();
        let body = SnakeBody::new(bounds);
        let food = place_food(&bounds, &body.occupied_cells(), &mut rng)?;

        log!(
            "Snake session started on a {}x{} grid, move interval {} ms, food at {}",
            bounds.side(),
            bounds.side(),
            settings.move_interval_ms,
            food
        );

        Ok(Self {
            settings: settings.clone(),
            bounds,
            body,
            food: Some(food),
            state: SessionState::Active,
            accumulated: Duration::ZERO,
            move_interval: settings.move_interval(),
            moves: 0,
            rng,
            collaborators,
        })
    }

    pub fn settings(&self) -> &SnakeSettings {
        &self.settings
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn body(&self) -> &SnakeBody {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body.head()
    }

    pub fn direction(&self) -> Direction {
        self.body.direction()
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn occupied_cells(&self) -> Occupancy {
        self.body.occupied_cells()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.state, SessionState::GameOver(_))
    }

    /// Committed moves so far.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Directional input. Reversals and input after game over are ignored.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.body.set_direction(direction)
    }

    /// Called once per frame. Performs at most one move, when the accumulated
    /// time reaches the move interval; the remainder is discarded.
    pub fn tick(&mut self, elapsed: Duration) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Inactive;
        }

        self.accumulated = self.accumulated.saturating_add(elapsed);
        if self.accumulated < self.move_interval {
            return TickOutcome::Waiting;
        }
        self.accumulated = Duration::ZERO;

        self.step()
    }

    fn step(&mut self) -> TickOutcome {
        match self.body.try_move() {
            Ok(head) => {
                self.moves += 1;
                if self.food == Some(head) {
                    self.on_food_overlap()
                } else {
                    TickOutcome::Moved
                }
            }
            Err(reason) => {
                log!("Snake move {} failed at {}: {}", self.moves + 1, self.body.next_head(), reason);
                let outcome = SessionOutcome::Defeat(reason);
                self.on_game_over(outcome);
                TickOutcome::Ended(outcome)
            }
        }
    }

    fn on_food_overlap(&mut self) -> TickOutcome {
        self.food = None;
        self.body.grow();

        let placement = place_food(&self.bounds, &self.body.occupied_cells(), &mut self.rng);

        self.collaborators.score.add_score(self.settings.score_per_food);
        if self.settings.coins_per_food > 0 {
            self.collaborators.coins.add_coins(self.settings.coins_per_food);
        }
        self.collaborators.sound.play(SoundCue::Eat);

        match placement {
            Ok(cell) => {
                self.food = Some(cell);
                log!("Food eaten after {} moves, next food at {}", self.moves, cell);
                TickOutcome::Ate
            }
            Err(PlacementError::NoFreeCell) => {
                log_warn!("Snake filled the board after {} moves", self.moves);
                self.on_game_over(SessionOutcome::BoardFilled);
                TickOutcome::Ended(SessionOutcome::BoardFilled)
            }
        }
    }

    fn on_game_over(&mut self, outcome: SessionOutcome) {
        if self.is_game_over() {
            return;
        }
        self.state = SessionState::GameOver(outcome);

        log!("Snake session over: {:?} after {} moves, length {}", outcome, self.moves, self.body.segment_count() + 1);

        self.collaborators.session_end.on_game_over(outcome);
        let cue = if outcome.is_victory() { SoundCue::Win } else { SoundCue::Lose };
        self.collaborators.sound.play(cue);
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, cell: Cell) {
        self.food = Some(cell);
    }

    #[cfg(test)]
    pub(crate) fn with_body(mut self, body: SnakeBody) -> Self {
        self.body = body;
        self
    }
}
