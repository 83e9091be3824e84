use crate::games::RandomSource;
use super::body::SnakeBody;
use super::session::SnakeSession;
use super::types::{Cell, Direction};

/// Greedy autopilot: step towards the food along any move that does not end the
/// game right away.
pub struct BotController;

impl BotController {
    pub fn calculate_move<R: RandomSource>(session: &SnakeSession<R>) -> Option<Direction> {
        if session.is_game_over() {
            return None;
        }
        Some(Self::choose(session.body(), session.food()))
    }

    pub fn choose(body: &SnakeBody, food: Option<Cell>) -> Direction {
        let current = body.direction();
        let head = body.head();

        let safe_directions: Vec<Direction> = Self::get_valid_directions(current)
            .into_iter()
            .filter(|&dir| Self::is_safe_position(head.step(dir), body))
            .collect();

        let best = match food {
            Some(food) => safe_directions
                .iter()
                .copied()
                .min_by_key(|&dir| head.step(dir).manhattan_distance(food)),
            None => safe_directions.first().copied(),
        };

        best.unwrap_or(current)
    }

    fn get_valid_directions(current: Direction) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| !d.is_opposite(&current))
            .collect()
    }

    fn is_safe_position(pos: Cell, body: &SnakeBody) -> bool {
        body.bounds().contains(pos) && body.segments().iter().all(|s| s.cell != pos)
    }
}
