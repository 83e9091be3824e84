use std::collections::HashSet;

use super::body::SnakeBody;
use super::grid::GridBounds;
use super::types::Cell;

/// Cells covered by the snake at one instant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Occupancy {
    cells: HashSet<Cell>,
}

impl Occupancy {
    pub fn of(body: &SnakeBody) -> Self {
        std::iter::once(body.head())
            .chain(body.segments().iter().map(|s| s.cell))
            .collect()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn covers(&self, bounds: &GridBounds) -> bool {
        bounds.cells().all(|cell| self.contains(cell))
    }
}

impl FromIterator<Cell> for Occupancy {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_body_occupies_only_head() {
        let body = SnakeBody::new(GridBounds::new(6));
        let occupied = Occupancy::of(&body);
        assert_eq!(occupied.len(), 1);
        assert!(occupied.contains(Cell::ORIGIN));
    }

    #[test]
    fn test_includes_every_segment() {
        let mut body = SnakeBody::new(GridBounds::new(6));
        body.grow();
        body.grow();
        let occupied = Occupancy::of(&body);
        assert_eq!(occupied.len(), 3);
        assert!(occupied.contains(Cell::new(0, -1)));
        assert!(occupied.contains(Cell::new(0, -2)));
        assert!(!occupied.contains(Cell::new(0, 1)));
    }

    #[test]
    fn test_covers_full_grid() {
        let bounds = GridBounds::new(2);
        let all: Occupancy = bounds.cells().collect();
        assert!(all.covers(&bounds));

        let partial: Occupancy = bounds.cells().skip(1).collect();
        assert!(!partial.covers(&bounds));
    }
}
