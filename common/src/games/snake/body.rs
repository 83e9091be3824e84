use crate::log;
use super::grid::GridBounds;
use super::occupancy::Occupancy;
use super::types::{Cell, Direction, MoveError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub cell: Cell,
    /// Direction of the segment's most recent step.
    pub facing: Direction,
}

/// Head plus trailing segments. Index 0 is the segment right behind the head,
/// the last one is the tail.
#[derive(Clone, Debug)]
pub struct SnakeBody {
    bounds: GridBounds,
    head: Cell,
    direction: Direction,
    segments: Vec<Segment>,
}

impl SnakeBody {
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            bounds,
            head: Cell::ORIGIN,
            direction: Direction::Up,
            segments: Vec::new(),
        }
    }

    pub fn head(&self) -> Cell {
        self.head
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn head_facing_degrees(&self) -> f32 {
        self.direction.angle_degrees()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn tail(&self) -> Option<Cell> {
        self.segments.last().map(|s| s.cell)
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn occupied_cells(&self) -> Occupancy {
        Occupancy::of(self)
    }

    /// Returns `false` and keeps the current heading when asked to reverse.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(&self.direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Cell the head would enter on the next move, without checking it.
    pub fn next_head(&self) -> Cell {
        self.head.step(self.direction)
    }

    /// Advances one cell. On error nothing is changed.
    pub fn try_move(&mut self) -> Result<Cell, MoveError> {
        let candidate = self.next_head();

        if !self.bounds.contains(candidate) {
            return Err(MoveError::OutOfBounds);
        }

        if self.segments.iter().any(|s| s.cell == candidate) {
            return Err(MoveError::SelfCollision);
        }

        let mut previous = self.head;
        self.head = candidate;

        for segment in &mut self.segments {
            let vacated = segment.cell;
            if let Some(facing) = Direction::from_offset(previous - vacated) {
                segment.facing = facing;
            }
            segment.cell = previous;
            previous = vacated;
        }

        Ok(candidate)
    }

    /// Appends a segment one step beyond the tail, continuing the line the
    /// tail currently forms. The new segment faces along that line, away from
    /// the head.
    pub fn grow(&mut self) {
        let count = self.segments.len();
        let (anchor, step) = match count {
            0 => (self.head, self.direction.opposite().offset()),
            1 => (self.segments[0].cell, self.segments[0].cell - self.head),
            _ => (
                self.segments[count - 1].cell,
                self.segments[count - 1].cell - self.segments[count - 2].cell,
            ),
        };

        let facing = Direction::from_offset(step).unwrap_or(self.direction.opposite());
        let cell = anchor + step;
        self.segments.push(Segment { cell, facing });

        log!("Snake grew to {} segments, new tail at {}", self.segments.len(), cell);
    }

    #[cfg(test)]
    pub(crate) fn from_parts(bounds: GridBounds, head: Cell, direction: Direction, cells: &[Cell]) -> Self {
        let mut previous = head;
        let segments = cells
            .iter()
            .map(|&cell| {
                let facing = Direction::from_offset(previous - cell).unwrap_or(direction);
                previous = cell;
                Segment { cell, facing }
            })
            .collect();

        Self {
            bounds,
            head,
            direction,
            segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(body: &SnakeBody) -> Vec<Cell> {
        body.segments().iter().map(|s| s.cell).collect()
    }

    #[test]
    fn test_new_body_starts_at_origin_facing_up() {
        let body = SnakeBody::new(GridBounds::new(6));
        assert_eq!(body.head(), Cell::ORIGIN);
        assert_eq!(body.direction(), Direction::Up);
        assert_eq!(body.segment_count(), 0);
        assert_eq!(body.head_facing_degrees(), 0.0);
    }

    #[test]
    fn test_move_then_reverse_is_rejected() {
        let mut body = SnakeBody::new(GridBounds::new(6));
        assert_eq!(body.try_move(), Ok(Cell::new(0, 1)));
        assert_eq!(body.head(), Cell::new(0, 1));

        assert!(!body.set_direction(Direction::Down));
        assert_eq!(body.direction(), Direction::Up);
    }

    #[test]
    fn test_set_direction_accepts_non_reversing() {
        for (current, next) in [
            (Direction::Up, Direction::Left),
            (Direction::Up, Direction::Right),
            (Direction::Up, Direction::Up),
        ] {
            let mut body = SnakeBody::from_parts(GridBounds::new(6), Cell::ORIGIN, current, &[]);
            assert!(body.set_direction(next));
            assert_eq!(body.direction(), next);
        }

        let mut body = SnakeBody::from_parts(GridBounds::new(6), Cell::ORIGIN, Direction::Left, &[]);
        assert!(!body.set_direction(Direction::Right));
        assert!(body.set_direction(Direction::Down));
        assert_eq!(body.head_facing_degrees(), 180.0);
    }

    #[test]
    fn test_segments_follow_predecessors() {
        let mut body = SnakeBody::from_parts(
            GridBounds::new(6),
            Cell::new(1, 1),
            Direction::Up,
            &[Cell::new(1, 0), Cell::new(1, -1)],
        );

        body.try_move().unwrap();

        assert_eq!(body.head(), Cell::new(1, 2));
        assert_eq!(cells(&body), vec![Cell::new(1, 1), Cell::new(1, 0)]);
    }

    #[test]
    fn test_segments_turn_with_the_head() {
        let mut body = SnakeBody::from_parts(
            GridBounds::new(6),
            Cell::new(0, 0),
            Direction::Up,
            &[Cell::new(0, -1), Cell::new(0, -2)],
        );
        body.set_direction(Direction::Right);
        body.try_move().unwrap();

        assert_eq!(body.head(), Cell::new(1, 0));
        assert_eq!(body.segments()[0], Segment { cell: Cell::new(0, 0), facing: Direction::Up });
        assert_eq!(body.segments()[1], Segment { cell: Cell::new(0, -1), facing: Direction::Up });

        body.try_move().unwrap();
        assert_eq!(body.segments()[0], Segment { cell: Cell::new(1, 0), facing: Direction::Right });
        assert_eq!(body.segments()[1], Segment { cell: Cell::new(0, 0), facing: Direction::Up });
    }

    #[test]
    fn test_leaving_grid_is_out_of_bounds() {
        let bounds = GridBounds::new(6);
        for (head, direction) in [
            (Cell::new(0, 3), Direction::Up),
            (Cell::new(0, -3), Direction::Down),
            (Cell::new(-3, 2), Direction::Left),
            (Cell::new(3, -1), Direction::Right),
        ] {
            let mut body = SnakeBody::from_parts(bounds, head, direction, &[]);
            assert_eq!(body.try_move(), Err(MoveError::OutOfBounds));
            assert_eq!(body.head(), head);
        }
    }

    #[test]
    fn test_running_into_body_is_self_collision() {
        // Head at (0,0) heading left into a U-shaped body.
        let segments = [Cell::new(0, 1), Cell::new(-1, 1), Cell::new(-1, 0), Cell::new(-1, -1)];
        let mut body = SnakeBody::from_parts(GridBounds::new(6), Cell::ORIGIN, Direction::Left, &segments);

        assert_eq!(body.try_move(), Err(MoveError::SelfCollision));
        assert_eq!(body.head(), Cell::ORIGIN);
        assert_eq!(cells(&body), segments.to_vec());
    }

    #[test]
    fn test_moving_onto_current_tail_collides() {
        let segments = [Cell::new(1, 0), Cell::new(1, -1), Cell::new(0, -1)];
        let mut body = SnakeBody::from_parts(GridBounds::new(6), Cell::ORIGIN, Direction::Down, &segments);
        assert_eq!(body.try_move(), Err(MoveError::SelfCollision));
    }

    #[test]
    fn test_grow_without_segments_extends_behind_head() {
        let mut body = SnakeBody::from_parts(GridBounds::new(6), Cell::new(2, 2), Direction::Right, &[]);
        body.grow();
        assert_eq!(body.segments(), &[Segment { cell: Cell::new(1, 2), facing: Direction::Left }]);
    }

    #[test]
    fn test_grow_extrapolates_tail_line() {
        let mut body = SnakeBody::from_parts(
            GridBounds::new(6),
            Cell::new(1, 1),
            Direction::Up,
            &[Cell::new(1, 0), Cell::new(0, 0)],
        );
        body.grow();

        assert_eq!(body.segment_count(), 3);
        assert_eq!(&cells(&body)[..2], &[Cell::new(1, 0), Cell::new(0, 0)]);
        assert_eq!(body.segments()[2], Segment { cell: Cell::new(-1, 0), facing: Direction::Left });
    }

    #[test]
    fn test_grow_with_single_segment_uses_head() {
        let mut body = SnakeBody::from_parts(GridBounds::new(6), Cell::new(0, 1), Direction::Left, &[Cell::new(0, 0)]);
        body.grow();
        assert_eq!(cells(&body), vec![Cell::new(0, 0), Cell::new(0, -1)]);
        assert_eq!(body.segments()[1].facing, Direction::Down);
    }

    #[test]
    fn test_grown_segment_faces_away_from_head_until_it_moves() {
        let mut body = SnakeBody::new(GridBounds::new(6));
        body.grow();
        assert_eq!(body.segments()[0], Segment { cell: Cell::new(0, -1), facing: Direction::Down });

        body.try_move().unwrap();
        assert_eq!(body.segments()[0], Segment { cell: Cell::new(0, 0), facing: Direction::Up });
    }

    #[test]
    fn test_grown_tail_takes_old_tail_cell_on_next_move() {
        let mut body = SnakeBody::new(GridBounds::new(6));
        body.try_move().unwrap();
        body.grow();
        body.grow();
        assert_eq!(cells(&body), vec![Cell::new(0, 0), Cell::new(0, -1)]);

        body.try_move().unwrap();
        assert_eq!(body.head(), Cell::new(0, 2));
        assert_eq!(cells(&body), vec![Cell::new(0, 1), Cell::new(0, 0)]);
        assert_eq!(body.occupied_cells().len(), 3);
    }
}
