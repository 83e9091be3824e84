mod body;
mod bot_controller;
mod food;
mod grid;
mod occupancy;
mod session;
mod settings;
mod sinks;
mod types;

pub use body::{Segment, SnakeBody};
pub use bot_controller::BotController;
pub use food::{place_food, PlacementError};
pub use grid::{GridBounds, GridLayout, WorldPos};
pub use occupancy::Occupancy;
pub use session::{SessionError, SessionState, SnakeSession, TickOutcome};
pub use settings::SnakeSettings;
pub use sinks::{Collaborators, CoinSink, ScoreSink, SessionEndSink, SoundCue, SoundSink};
pub use types::{Cell, Direction, MoveError, SessionOutcome};
